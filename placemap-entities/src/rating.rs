use std::fmt;

/// The score of a place.
///
/// An absent rating means "unrated" and is modelled
/// as `Option<RatingValue>`, never as zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct RatingValue(f64);

impl RatingValue {
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for RatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

/// Formats the value with a single decimal place.
impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
