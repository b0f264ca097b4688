use placemap_entities::category::Category;

use crate::text::normalize;

/// The narrowing constraints chosen by the user.
///
/// The default value is the empty criteria, i.e. it
/// does not restrict anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub query: String,
    pub category: Option<Category>,
    pub district: Option<String>,
    pub price: Option<String>,
    pub min_rating: f64,
}

/// A raw input event of one of the controls.
///
/// Empty selector values mean "any".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaChange {
    Query(String),
    Category(String),
    District(String),
    Price(String),
    MinRating(String),
}

impl FilterCriteria {
    /// Criteria that only restrict the rating.
    pub fn with_min_rating(min_rating: f64) -> Self {
        Self {
            min_rating,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        let Self {
            query,
            category,
            district,
            price,
            min_rating,
        } = self;
        query.trim().is_empty()
            && category.is_none()
            && district.is_none()
            && price.is_none()
            && *min_rating <= 0.0
    }

    /// The trimmed and lowercased query if the text clause is active.
    pub fn normalized_query(&self) -> Option<String> {
        let query = normalize(&self.query);
        (!query.is_empty()).then_some(query)
    }

    pub fn apply(&mut self, change: CriteriaChange) {
        match change {
            CriteriaChange::Query(query) => self.query = query,
            CriteriaChange::Category(value) => {
                self.category = selection(value).map(Category::from);
            }
            CriteriaChange::District(value) => self.district = selection(value),
            CriteriaChange::Price(value) => self.price = selection(value),
            CriteriaChange::MinRating(value) => self.min_rating = parse_min_rating(&value),
        }
    }

    /// The value of the min. rating input.
    pub fn min_rating_value(&self) -> String {
        self.min_rating.to_string()
    }
}

fn selection(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

// Unparsable input disables the rating clause
fn parse_min_rating(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or_default()
}
