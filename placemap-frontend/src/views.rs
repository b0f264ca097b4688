//! Browser implementations of the rendering seams.
//!
//! All views only write signals or call into Leaflet. They never
//! read reactive state, so they can be used inside effects
//! without subscribing to anything.

use leaflet::{
    CircleMarker, CircleOptions, Handler, LatLng, LayerGroup, Map, MouseEvents, TileLayer,
    TileLayerOptions, Tooltip, TooltipOptions,
};
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};

use placemap_core::{
    config,
    presenter::{detail::DetailContent, escape_to_string, list::ListItem, map::MarkerSpec},
    view::*,
    FilterCriteria,
};
use placemap_entities::{geo::MapPoint, id::Id};

#[derive(Clone, Copy)]
pub struct SignalControls {
    pub districts: WriteSignal<Vec<String>>,
    pub prices: WriteSignal<Vec<String>>,
    pub criteria: WriteSignal<FilterCriteria>,
}

impl ControlsView for SignalControls {
    fn set_district_options(&mut self, districts: &[String]) {
        self.districts.set(districts.to_vec());
    }

    fn set_price_options(&mut self, prices: &[String]) {
        self.prices.set(prices.to_vec());
    }

    fn show_criteria(&mut self, criteria: &FilterCriteria) {
        self.criteria.set(criteria.clone());
    }
}

#[derive(Clone, Copy)]
pub struct SignalList {
    pub count: WriteSignal<String>,
    pub items: WriteSignal<Vec<ListItem>>,
}

impl ListView for SignalList {
    fn render(&mut self, count_label: &str, items: Vec<ListItem>) {
        self.count.set(count_label.to_owned());
        self.items.set(items);
    }
}

#[derive(Clone, Copy)]
pub struct SignalDetail {
    pub content: WriteSignal<Option<DetailContent>>,
    pub dialog: NodeRef<html::Dialog>,
}

impl DetailView for SignalDetail {
    fn show(&mut self, content: &DetailContent) {
        self.content.set(Some(content.clone()));
        let Some(dialog) = self.dialog.get_untracked() else {
            log::warn!("No dialog element found");
            return;
        };
        if dialog.open() {
            return;
        }
        if let Err(err) = dialog.show_modal() {
            log::warn!("Unable to open dialog: {err:?}");
        }
    }

    fn hide(&mut self) {
        if let Some(dialog) = self.dialog.get_untracked() {
            dialog.close();
        }
    }
}

/// A Leaflet map with a single layer for all markers.
pub struct LeafletMap {
    map: Map,
    layer: LayerGroup,
    style: config::MarkerStyle,
    selected: WriteSignal<Option<Id>>,
}

impl LeafletMap {
    /// Clicks on markers are reported through `selected`.
    pub fn new(map: Map, config: &config::Map, selected: WriteSignal<Option<Id>>) -> Self {
        map.set_max_zoom(config.max_zoom);
        if !config.scroll_wheel_zoom {
            disable_scroll_wheel_zoom(&map);
        }
        let tile_options = TileLayerOptions::new();
        tile_options.set_max_zoom(config.max_zoom);
        tile_options.set_attribution(config.attribution.clone());
        TileLayer::new_options(&config.tile_layer_url, &tile_options).add_to(&map);
        let layer = LayerGroup::new();
        layer.add_to(&map);
        Self {
            map,
            layer,
            style: config.marker,
            selected,
        }
    }
}

// Leaflet only exposes its interaction handlers as properties of the map.
fn disable_scroll_wheel_zoom(map: &Map) {
    match js_sys::Reflect::get(map, &JsValue::from_str("scrollWheelZoom")) {
        Ok(handler) if handler.is_object() => {
            handler.unchecked_into::<Handler>().disable();
        }
        _ => log::warn!("Scroll wheel zoom handler not found"),
    }
}

fn lat_lng(pos: MapPoint) -> LatLng {
    let (lat, lng) = pos.to_lat_lng_deg();
    LatLng::new(lat, lng)
}

impl MapView for LeafletMap {
    type Marker = CircleMarker;

    fn clear_markers(&mut self) {
        self.layer.clear_layers();
    }

    fn add_marker(&mut self, spec: &MarkerSpec) -> Self::Marker {
        let config::MarkerStyle {
            radius,
            weight,
            opacity,
            fill_opacity,
        } = self.style;
        let options = CircleOptions::new();
        options.set_radius(radius);
        options.set_weight(weight);
        options.set_opacity(opacity);
        options.set_fill_opacity(fill_opacity);
        options.set_color(spec.color.to_owned());
        options.set_fill_color(spec.color.to_owned());
        let marker = CircleMarker::new_with_options(&lat_lng(spec.pos), &options);

        let selected = self.selected;
        let id = spec.id.clone();
        marker.on_click(Box::new(move |_| {
            selected.set(Some(id.clone()));
        }));

        // Tooltip content is inserted as HTML
        let mut label = String::new();
        escape_to_string(&spec.label, &mut label);
        let tooltip_options = TooltipOptions::new();
        tooltip_options.set_direction("top".to_owned());
        tooltip_options.set_opacity(0.9);
        let tooltip = Tooltip::new(&tooltip_options, None);
        tooltip.set_content(&JsValue::from_str(&label));
        marker.bind_tooltip(&tooltip);

        self.layer.add_layer(&marker);
        marker
    }

    fn zoom(&self) -> f64 {
        self.map.get_zoom()
    }

    fn set_view(&mut self, center: MapPoint, zoom: f64) {
        self.map.set_view(&lat_lng(center), zoom);
    }

    fn open_tooltip(&mut self, marker: &Self::Marker) {
        marker.open_tooltip(&marker.get_lat_lng());
    }
}
