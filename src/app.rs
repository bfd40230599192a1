use crate::app_config::AppConfig;
use crate::distance_report::{ReportError, distances_from, log_report};
use crate::domain::{Capital, Deck, GeoPosition};
use tracing::{info, warn};

/// Logs the configured distance report, the distance to each capital and the sorted hand of cards.
pub fn run(config: &AppConfig) -> Result<(), ReportError> {
    let origin = config.report().origin();
    let legs = distances_from(origin, config.positions())?;
    log_report(origin, &legs);

    if let Some(from) = config.positions().iter().find(|p| p.name() == origin) {
        for (capital, kilometers) in capital_distances(from, config) {
            info!("🏛️ {:.1} km to {}", kilometers, capital);
        }
    }

    if config.hand().is_empty() {
        warn!("⚠️ No cards in hand");
    } else {
        let hand = Deck::new(config.hand().to_vec());
        info!("🃏 Hand: {}", hand);
        info!("🃏 Sorted: {}", hand.sorted());
    }

    Ok(())
}

fn capital_distances<'a>(from: &GeoPosition, config: &'a AppConfig) -> Vec<(&'a Capital, f64)> {
    config.capitals().iter().map(|capital| (capital, capital.distance_to(from))).collect()
}
