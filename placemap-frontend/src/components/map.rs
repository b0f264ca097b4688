use leptos::*;
use leptos_leaflet::{MapContainer, Position};

use placemap_entities::geo::MapPoint;

/// Mounts the Leaflet map and reports it through `map`.
#[component]
pub fn PlaceMap(
    center: MapPoint,
    zoom: f64,
    map: WriteSignal<Option<leaflet::Map>>,
) -> impl IntoView {
    let (lat, lng) = center.to_lat_lng_deg();
    view! { <MapContainer class="map" center=Position::new(lat, lng) zoom map /> }
}
