use geoposition::app::run;
use geoposition::app_config::AppConfig;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration, {} positions", config.positions().len());

    run(&config)?;

    info!("🔥 {} is done", env!("CARGO_PKG_NAME"));
    Ok(())
}
