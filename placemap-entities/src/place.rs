use crate::{category::*, geo::*, id::*, links::*, rating::*};

/// A point of interest.
///
/// Places are loaded once and are immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: Id,
    pub name: String,
    pub category: Category,
    pub district: Option<String>,
    pub price: Option<String>,
    pub rating: Option<RatingValue>,
    pub short: Option<String>,
    pub notes: Option<String>,
    /// Places without a position are listed but not mapped.
    pub pos: Option<MapPoint>,
    pub links: Links,
}

impl Place {
    /// Unrated places count as zero when compared with a threshold.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.map(f64::from).unwrap_or_default()
    }

    pub const fn is_mappable(&self) -> bool {
        self.pos.is_some()
    }
}
