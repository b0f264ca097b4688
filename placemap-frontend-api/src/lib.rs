use gloo_net::http::{Request, Response};
use thiserror::Error;
use web_sys::RequestCache;

use placemap_boundary::Place;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("HTTP {status} {text}")]
    Status { status: u16, text: String },

    #[error("Malformed places: {0}")]
    Parse(String),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(format!("{err}"))
    }
}

/// Source of the static `places.json` document.
#[derive(Debug, Clone)]
pub struct PlacesApi {
    url: String,
}

impl PlacesApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch all places, bypassing the HTTP cache.
    pub async fn places(&self) -> Result<Vec<Place>> {
        log::debug!("Fetch places from {}", self.url);
        let response = Request::get(&self.url)
            .cache(RequestCache::NoStore)
            .send()
            .await?;
        let text = into_text(response).await?;
        parse_places(&text)
    }
}

async fn into_text(response: Response) -> Result<String> {
    // ensure we've got 2xx status
    if !response.ok() {
        return Err(Error::Status {
            status: response.status(),
            text: response.status_text(),
        });
    }
    Ok(response.text().await?)
}

/// Parse the array of places.
pub fn parse_places(json: &str) -> Result<Vec<Place>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ordered_array() {
        let places = parse_places(
            r#"[
              {"id":"a","name":"Bistro","category":"eat","rating":4.5,"lat":47.5,"lng":19.04},
              {"id":"b","name":"Bar X","category":"drink","rating":"n/a"}
            ]"#,
        )
        .unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].id, "a");
        assert_eq!(places[0].rating, Some(4.5));
        assert_eq!(places[1].id, "b");
        assert_eq!(places[1].rating, None);
    }

    #[test]
    fn parse_empty_array() {
        assert!(parse_places("[]").unwrap().is_empty());
    }

    #[test]
    fn reject_malformed_json() {
        assert!(matches!(parse_places("{"), Err(Error::Parse(_))));
        assert!(matches!(
            parse_places(r#"{"id":"a"}"#),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn describe_status_error() {
        let err = Error::Status {
            status: 404,
            text: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "HTTP 404 Not Found");
    }
}
