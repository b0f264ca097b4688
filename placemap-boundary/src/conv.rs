use super::*;
use placemap_entities as e;

impl From<Place> for e::place::Place {
    fn from(from: Place) -> Self {
        let Place {
            id,
            name,
            category,
            district,
            price,
            rating,
            short,
            notes,
            lat,
            lng,
            links,
        } = from;
        let pos = match (lat, lng) {
            (Some(lat), Some(lng)) => match e::geo::MapPoint::try_from_lat_lng_deg(lat, lng) {
                Ok(pos) => Some(pos),
                Err(err) => {
                    log::warn!("Place '{id}' is not mappable: {err}");
                    None
                }
            },
            (None, None) => None,
            _ => {
                log::warn!("Place '{id}' is not mappable: incomplete coordinates");
                None
            }
        };
        let links = links.map(|l| links_from_raw(&id, l)).unwrap_or_default();
        Self {
            id: id.into(),
            name,
            category: category.into(),
            district: non_empty(district),
            price: non_empty(price),
            rating: rating
                .map(e::rating::RatingValue::from)
                .filter(|r| r.is_valid()),
            short: non_empty(short),
            notes: non_empty(notes),
            pos,
            links,
        }
    }
}

fn links_from_raw(id: &str, raw: Links) -> e::links::Links {
    let maps = non_empty(raw.maps).and_then(|url| match url.parse::<e::url::Url>() {
        Ok(url) => Some(url),
        Err(err) => {
            log::warn!("Place '{id}' has an invalid maps link '{url}': {err}");
            None
        }
    });
    e::links::Links { maps }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}
