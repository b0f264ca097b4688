use serde::{de, Deserialize, Deserializer};

#[cfg(feature = "entity-conversions")]
mod conv;

/// A single entry of the `places.json` document.
///
/// Nothing is validated here: missing identifying fields
/// fall back to empty strings and non-numeric coordinates
/// or ratings are dropped instead of failing the whole document.
#[rustfmt::skip]
#[derive(Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Place {
    #[serde(default)]
    pub id       : String,
    #[serde(default)]
    pub name     : String,
    #[serde(default)]
    pub category : String,
    #[serde(default)]
    pub district : Option<String>,
    #[serde(default)]
    pub price    : Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating   : Option<f64>,
    #[serde(default)]
    pub short    : Option<String>,
    #[serde(default)]
    pub notes    : Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub lat      : Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub lng      : Option<f64>,
    #[serde(default)]
    pub links    : Option<Links>,
}

#[derive(Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Links {
    #[serde(default)]
    pub maps: Option<String>,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Number(f64),
        Other(de::IgnoredAny),
    }
    let number = match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::Number(n)) => Some(n),
        Some(Lenient::Other(_)) | None => None,
    };
    Ok(number)
}
