use std::fmt;

use strum::EnumString;

/// The kind of a place.
///
/// The set of known categories is fixed, but the data source
/// may contain other values. These are kept verbatim so that
/// they can still be compared with the raw selector value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Eat,
    Drink,
    See,
    #[strum(default)]
    Other(String),
}

impl Category {
    pub const KNOWN: [Self; 3] = [Self::Eat, Self::Drink, Self::See];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Eat => "eat",
            Self::Drink => "drink",
            Self::See => "see",
            Self::Other(other) => other,
        }
    }

    /// Parse a raw category value.
    ///
    /// Unknown values are kept as [`Category::Other`].
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| Self::Other(raw.to_owned()))
    }
}

impl From<String> for Category {
    fn from(from: String) -> Self {
        Self::from_raw(&from)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_categories() {
        assert_eq!(Category::from_raw("eat"), Category::Eat);
        assert_eq!(Category::from_raw("drink"), Category::Drink);
        assert_eq!(Category::from_raw("see"), Category::See);
    }

    #[test]
    fn keep_unknown_categories_verbatim() {
        let c = Category::from_raw("Shop");
        assert_eq!(c, Category::Other("Shop".into()));
        assert_eq!(c.as_str(), "Shop");
        // matching is case sensitive
        assert_eq!(Category::from_raw("EAT"), Category::Other("EAT".into()));
    }

    #[test]
    fn parse_through_derived_conversions() {
        assert_eq!("see".parse::<Category>(), Ok(Category::See));
        assert_eq!(Category::try_from("drink"), Ok(Category::Drink));
        assert_eq!(
            Category::try_from("market"),
            Ok(Category::Other("market".into()))
        );
        assert_eq!(Category::from(String::from("eat")), Category::Eat);
    }

    #[test]
    fn display_raw_value() {
        assert_eq!(Category::Drink.to_string(), "drink");
        assert_eq!(Category::Other("x".into()).to_string(), "x");
        assert_eq!(Category::See.to_string(), "see");
    }
}
