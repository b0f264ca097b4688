use std::collections::HashSet;

use placemap_entities::place::Place;

use crate::{criteria::FilterCriteria, filter, sort};

/// All loaded places and the currently filtered subset.
#[derive(Debug, Clone, Default)]
pub struct Store {
    all: Vec<Place>,
    // Positions into `all`, ascending
    filtered: Vec<usize>,
}

impl Store {
    /// Initially nothing is filtered out.
    pub fn new(places: Vec<Place>) -> Self {
        let mut ids = HashSet::with_capacity(places.len());
        for place in &places {
            if !ids.insert(place.id.as_str()) {
                log::warn!("Duplicate place id '{}'", place.id);
            }
        }
        let filtered = (0..places.len()).collect();
        Self {
            all: places,
            filtered,
        }
    }

    pub fn all(&self) -> &[Place] {
        &self.all
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Place> + '_ {
        self.filtered.iter().map(|&pos| &self.all[pos])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Recompute the filtered subset from scratch.
    pub fn refilter(&mut self, criteria: &FilterCriteria) {
        self.filtered = filter::filter_positions(&self.all, criteria).collect();
        log::debug!(
            "Filtered {} of {} places",
            self.filtered.len(),
            self.all.len()
        );
    }

    /// Look up a place by its id.
    ///
    /// The first place wins if ids are not unique.
    pub fn get(&self, id: &str) -> Option<&Place> {
        self.all.iter().find(|p| p.id.as_str() == id)
    }

    pub fn districts(&self) -> Vec<String> {
        sort::distinct_sorted(self.all.iter().map(|p| p.district.as_deref()))
    }

    pub fn prices(&self) -> Vec<String> {
        sort::distinct_sorted(self.all.iter().map(|p| p.price.as_deref()))
    }
}
