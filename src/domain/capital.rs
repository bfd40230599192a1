use crate::domain::GeoPosition;
use std::fmt::Display;

/// A capital city: a position plus the country it governs.
#[derive(Clone, PartialEq, Debug)]
pub struct Capital {
    position: GeoPosition,
    country: String,
}

impl Capital {
    pub fn new(position: GeoPosition, country: impl Into<String>) -> Self {
        Capital {
            position,
            country: country.into(),
        }
    }

    pub fn position(&self) -> &GeoPosition {
        &self.position
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn name(&self) -> &str {
        self.position.name()
    }

    pub fn longitude(&self) -> f64 {
        self.position.longitude()
    }

    pub fn latitude(&self) -> f64 {
        self.position.latitude()
    }

    pub fn distance_to(&self, other: &GeoPosition) -> f64 {
        self.position.distance_to(other)
    }
}

impl AsRef<GeoPosition> for Capital {
    fn as_ref(&self) -> &GeoPosition {
        &self.position
    }
}

impl Display for Capital {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, capital of {}", self.position, self.country)
    }
}
