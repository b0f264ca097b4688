use anyhow::{anyhow, Result};
use placemap_entities::{geo::MapPoint, rating::RatingValue};

mod raw;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub map: Map,
    pub data: Data,
    pub filter: Filter,
}

impl Config {
    /// Parse a TOML document.
    ///
    /// Missing sections are taken from the default configuration.
    pub fn try_from_toml_str(toml_str: &str) -> Result<Self> {
        let raw_config: raw::Config = toml::from_str(toml_str)?;
        Self::try_from(raw_config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::try_from(raw::Config::default()).expect("Default configuration")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    pub center: MapPoint,
    pub zoom: f64,
    pub max_zoom: f64,
    /// Lower bound of the zoom level when opening a place.
    pub min_detail_zoom: f64,
    pub scroll_wheel_zoom: bool,
    pub tile_layer_url: String,
    pub attribution: String,
    pub marker: MarkerStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Data {
    /// Location of the `places.json` document.
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filter {
    /// Applied on startup and by the reset control.
    pub default_min_rating: f64,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { map, data, filter } = from;

        let raw::Map {
            center,
            zoom,
            max_zoom,
            min_detail_zoom,
            scroll_wheel_zoom,
            tile_layer_url,
            attribution,
            marker,
        } = map.unwrap_or_default();

        let center = MapPoint::try_from_lat_lng_deg(center.lat, center.lng)
            .map_err(|err| anyhow!("Invalid map center: {err}"))?;
        if !(zoom >= 0.0 && zoom <= max_zoom) {
            return Err(anyhow!("Invalid map zoom: {zoom} (max. {max_zoom})"));
        }
        if !(min_detail_zoom >= 0.0 && min_detail_zoom <= max_zoom) {
            return Err(anyhow!(
                "Invalid min. detail zoom: {min_detail_zoom} (max. {max_zoom})"
            ));
        }

        let raw::Marker {
            radius,
            weight,
            opacity,
            fill_opacity,
        } = marker.unwrap_or_default();
        if radius <= 0.0 {
            return Err(anyhow!("Invalid marker radius: {radius}"));
        }
        let marker = MarkerStyle {
            radius,
            weight,
            opacity,
            fill_opacity,
        };

        let map = Map {
            center,
            zoom,
            max_zoom,
            min_detail_zoom,
            scroll_wheel_zoom,
            tile_layer_url,
            attribution,
            marker,
        };

        let raw::Data { url } = data.unwrap_or_default();
        if url.trim().is_empty() {
            return Err(anyhow!("Missing data URL"));
        }
        let data = Data { url };

        let raw::Filter { default_min_rating } = filter.unwrap_or_default();
        let rating = RatingValue::new(default_min_rating);
        if !(rating >= RatingValue::min() && rating <= RatingValue::max()) {
            return Err(anyhow!("Invalid default min. rating: {default_min_rating}"));
        }
        let filter = Filter { default_min_rating };

        Ok(Self { map, data, filter })
    }
}
