use std::fmt::Display;

/// Mean radius of the earth in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A named point on the earth's surface, in degrees.
#[derive(Clone, PartialEq, Debug)]
pub struct GeoPosition {
    name: String,
    longitude: f64,
    latitude: f64,
}

impl GeoPosition {
    pub fn new(name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        GeoPosition {
            name: name.into(),
            longitude,
            latitude,
        }
    }

    /// Creates a position at longitude 0 and latitude 0.
    pub fn named(name: impl Into<String>) -> Self {
        GeoPosition::new(name, 0.0, 0.0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the great-circle distance to `other` in kilometers, using the haversine formula on a spherical earth.
    /// Coordinates are not validated, NaN or infinite input results in NaN.
    pub fn distance_to(&self, other: &GeoPosition) -> f64 {
        let (lambda1, phi1) = (self.longitude.to_radians(), self.latitude.to_radians());
        let (lambda2, phi2) = (other.longitude.to_radians(), other.latitude.to_radians());

        let h = ((phi2 - phi1) / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * ((lambda2 - lambda1) / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
    }
}

impl AsRef<GeoPosition> for GeoPosition {
    fn as_ref(&self) -> &GeoPosition {
        self
    }
}

impl Display for GeoPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let east_west = if self.longitude < 0.0 { 'W' } else { 'E' };
        let north_south = if self.latitude < 0.0 { 'S' } else { 'N' };
        write!(
            f,
            "{} ({:.1}°{}, {:.1}°{})",
            self.name,
            self.longitude.abs(),
            east_west,
            self.latitude.abs(),
            north_south
        )
    }
}
