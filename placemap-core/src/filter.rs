use placemap_entities::place::Place;

use crate::{criteria::FilterCriteria, text};

pub trait Matches {
    fn matches(&self, criteria: &FilterCriteria) -> bool;
}

impl Matches for Place {
    fn matches(&self, criteria: &FilterCriteria) -> bool {
        Predicate::new(criteria).test(self)
    }
}

/// Criteria with the query normalized once for all places.
struct Predicate<'a> {
    criteria: &'a FilterCriteria,
    query: Option<String>,
}

impl<'a> Predicate<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            criteria,
            query: criteria.normalized_query(),
        }
    }

    fn test(&self, place: &Place) -> bool {
        let FilterCriteria {
            category,
            district,
            price,
            min_rating,
            ..
        } = self.criteria;
        if category.as_ref().is_some_and(|c| *c != place.category) {
            return false;
        }
        if district.is_some() && *district != place.district {
            return false;
        }
        if price.is_some() && *price != place.price {
            return false;
        }
        if place.rating_or_zero() < *min_rating {
            return false;
        }
        if let Some(query) = &self.query {
            if !text::haystack(place).contains(query.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Positions of all matching places in their original order.
pub fn filter_positions<'a>(
    places: &'a [Place],
    criteria: &'a FilterCriteria,
) -> impl Iterator<Item = usize> + 'a {
    let predicate = Predicate::new(criteria);
    places
        .iter()
        .enumerate()
        .filter(move |(_, place)| predicate.test(place))
        .map(|(pos, _)| pos)
}

/// All matching places in their original order.
pub fn filter_places<'a>(places: &'a [Place], criteria: &FilterCriteria) -> Vec<&'a Place> {
    let predicate = Predicate::new(criteria);
    places.iter().filter(|p| predicate.test(p)).collect()
}
