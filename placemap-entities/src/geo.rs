use thiserror::Error;

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;

/// A geographical location on a (flat) map in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidPosition {
    #[error("Invalid latitude degrees: {0}")]
    Lat(f64),
    #[error("Invalid longitude degrees: {0}")]
    Lng(f64),
}

impl MapPoint {
    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        debug_assert!(is_valid_lat(lat) && is_valid_lng(lng));
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, InvalidPosition> {
        if !is_valid_lat(lat) {
            return Err(InvalidPosition::Lat(lat));
        }
        if !is_valid_lng(lng) {
            return Err(InvalidPosition::Lng(lng));
        }
        Ok(Self { lat, lng })
    }
}

fn is_valid_lat(deg: f64) -> bool {
    // NaN fails both comparisons
    (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&deg)
}

fn is_valid_lng(deg: f64) -> bool {
    (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_valid_positions() {
        let p = MapPoint::try_from_lat_lng_deg(47.4979, 19.0402).unwrap();
        assert_eq!(p.to_lat_lng_deg(), (47.4979, 19.0402));
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, 180.0).is_ok());
    }

    #[test]
    fn reject_invalid_positions() {
        assert_eq!(
            MapPoint::try_from_lat_lng_deg(90.1, 0.0),
            Err(InvalidPosition::Lat(90.1))
        );
        assert_eq!(
            MapPoint::try_from_lat_lng_deg(0.0, -180.5),
            Err(InvalidPosition::Lng(-180.5))
        );
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, f64::INFINITY).is_err());
    }
}
