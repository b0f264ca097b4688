use std::collections::{hash_map::Entry, HashMap};

use placemap_entities::{category::Category, geo::MapPoint, id::Id, place::Place};

use crate::view::MapView;

pub const EAT_COLOR: &str = "#7ee787";
pub const DRINK_COLOR: &str = "#79c0ff";
pub const SEE_COLOR: &str = "#f2cc60";

pub const fn marker_color(category: &Category) -> &'static str {
    match category {
        Category::Eat => EAT_COLOR,
        Category::Drink => DRINK_COLOR,
        Category::See | Category::Other(_) => SEE_COLOR,
    }
}

/// Everything the map widget needs to draw a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub id: Id,
    pub pos: MapPoint,
    pub color: &'static str,
    /// Shown on hover.
    pub label: String,
}

impl MarkerSpec {
    /// Returns `None` for places that cannot be mapped.
    pub fn from_place(place: &Place) -> Option<Self> {
        let pos = place.pos?;
        Some(Self {
            id: place.id.clone(),
            pos,
            color: marker_color(&place.category),
            label: place.name.clone(),
        })
    }
}

/// Lookup of live marker handles by place id.
///
/// The handles are owned by the map widget and only valid
/// until the next render pass.
#[derive(Debug)]
pub struct MarkerIndex<H> {
    markers: HashMap<Id, H>,
}

impl<H> Default for MarkerIndex<H> {
    fn default() -> Self {
        Self {
            markers: HashMap::new(),
        }
    }
}

impl<H> MarkerIndex<H> {
    pub fn get(&self, id: &str) -> Option<&H> {
        self.markers.get(id)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    // The first marker of an id wins
    fn insert(&mut self, id: Id, marker: H) {
        if let Entry::Vacant(entry) = self.markers.entry(id) {
            entry.insert(marker);
        }
    }
}

/// Replace all markers of the map with those of the given places.
pub fn render<'a, V>(
    places: impl Iterator<Item = &'a Place>,
    index: &mut MarkerIndex<V::Marker>,
    view: &mut V,
) where
    V: MapView,
{
    index.clear();
    view.clear_markers();
    for spec in places.filter_map(MarkerSpec::from_place) {
        let marker = view.add_marker(&spec);
        index.insert(spec.id, marker);
    }
    log::debug!("Rendered {} markers", index.len());
}
