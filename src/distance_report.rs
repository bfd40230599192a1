use crate::domain::GeoPosition;
use ordered_float::OrderedFloat;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// The distance from the report's origin to one other position.
#[derive(PartialEq, Debug)]
pub struct Leg<'a> {
    pub to: &'a GeoPosition,
    pub kilometers: OrderedFloat<f64>,
}

/// Returns the distance from the first position named `origin` to every other position, nearest first.
#[instrument(skip(positions), fields(positions = positions.len()))]
pub fn distances_from<'a>(origin: &str, positions: &'a [GeoPosition]) -> Result<Vec<Leg<'a>>, ReportError> {
    let origin_index = positions
        .iter()
        .position(|p| p.name() == origin)
        .ok_or_else(|| ReportError::UnknownOrigin(origin.to_string()))?;
    let from = &positions[origin_index];

    let mut legs = positions
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != origin_index)
        .map(|(_, to)| Leg {
            to,
            kilometers: OrderedFloat(from.distance_to(to)),
        })
        .collect::<Vec<_>>();
    legs.sort_by_key(|leg| leg.kilometers);

    debug!("Computed {} distances from '{}'", legs.len(), origin);
    Ok(legs)
}

/// Returns the nearest leg of a report built by [`distances_from`], or `None` when the origin was the only position.
/// Callers that keep the sorted legs can use this instead of relying on their order.
pub fn nearest<'a, 'b>(legs: &'b [Leg<'a>]) -> Option<&'b Leg<'a>> {
    legs.first()
}

pub fn log_report(origin: &str, legs: &[Leg]) {
    info!("🌍 Distances from {}:", origin);
    for leg in legs {
        info!("   {:>10.1} km to {}", leg.kilometers.0, leg.to);
    }
    if let Some(leg) = nearest(legs) {
        info!("📍 Nearest to {} is {}", origin, leg.to.name());
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum ReportError {
    #[error("origin '{0}' is not one of the configured positions")]
    UnknownOrigin(String),
}
