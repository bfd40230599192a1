use crate::domain::{Capital, GeoPosition};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for GeoPosition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            name: String,
            #[serde(default)]
            longitude: f64,
            #[serde(default)]
            latitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        validated(inner.name, inner.longitude, inner.latitude)
    }
}

impl<'de> Deserialize<'de> for Capital {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            name: String,
            #[serde(default)]
            longitude: f64,
            #[serde(default)]
            latitude: f64,
            country: String,
        }

        let inner = Inner::deserialize(deserializer)?;
        let position = validated::<D::Error>(inner.name, inner.longitude, inner.latitude)?;
        Ok(Capital::new(position, inner.country))
    }
}

fn validated<E: Error>(name: String, longitude: f64, latitude: f64) -> Result<GeoPosition, E> {
    if !(latitude >= -90.0 && latitude <= 90.0) {
        return Err(Error::custom(format!("invalid latitude for '{}': {}, must be between -90 and 90", name, latitude)));
    }

    if !(longitude >= -180.0 && longitude <= 180.0) {
        return Err(Error::custom(format!("invalid longitude for '{}': {}, must be between -180 and 180", name, longitude)));
    }

    Ok(GeoPosition::new(name, longitude, latitude))
}
