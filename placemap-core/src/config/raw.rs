use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("placemap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub map: Option<Map>,
    pub data: Option<Data>,
    pub filter: Option<Filter>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub center: LatLng,
    pub zoom: f64,
    pub max_zoom: f64,
    pub min_detail_zoom: f64,
    pub scroll_wheel_zoom: bool,
    pub tile_layer_url: String,
    pub attribution: String,
    pub marker: Option<Marker>,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}

#[derive(Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Marker {
    pub radius: f64,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl Default for Marker {
    fn default() -> Self {
        Map::default().marker.expect("Marker configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Data {
    pub url: String,
}

impl Default for Data {
    fn default() -> Self {
        Config::default().data.expect("Data configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Filter {
    pub default_min_rating: f64,
}

impl Default for Filter {
    fn default() -> Self {
        Config::default().filter.expect("Filter configuration")
    }
}
