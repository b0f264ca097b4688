//! Rendering seams.
//!
//! The presenters only talk to these traits so that they can
//! be exercised without a browser.

use placemap_entities::geo::MapPoint;

use crate::{
    criteria::FilterCriteria,
    presenter::{detail::DetailContent, list::ListItem, map::MarkerSpec},
};

pub trait ListView {
    /// Replace the whole list.
    fn render(&mut self, count_label: &str, items: Vec<ListItem>);
}

/// The external map widget.
pub trait MapView {
    /// Handle of a live marker that is owned by the widget.
    type Marker;

    fn clear_markers(&mut self);
    fn add_marker(&mut self, marker: &MarkerSpec) -> Self::Marker;
    fn zoom(&self) -> f64;
    fn set_view(&mut self, center: MapPoint, zoom: f64);
    fn open_tooltip(&mut self, marker: &Self::Marker);
}

pub trait DetailView {
    fn show(&mut self, content: &DetailContent);
    fn hide(&mut self);
}

pub trait ControlsView {
    fn set_district_options(&mut self, districts: &[String]);
    fn set_price_options(&mut self, prices: &[String]);
    /// Reflect the current criteria, e.g. after a reset.
    fn show_criteria(&mut self, criteria: &FilterCriteria);
}
