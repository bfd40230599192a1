use crate::domain::{Capital, Card, GeoPosition};
use config::{Config, ConfigError};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    report: Report,
    positions: Vec<GeoPosition>,
    #[serde(default)]
    capitals: Vec<Capital>,
    #[serde(default)]
    hand: Vec<Card>,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppConfigError> {
        Self::load_from("config")
    }

    /// Loads `<name>` (required) and `<name>_local` (optional), then applies `GEO__`-prefixed environment overrides.
    pub fn load_from(name: &str) -> Result<Self, AppConfigError> {
        Self::load_with_environment(name, config::Environment::with_prefix("GEO").separator("__"))
    }

    fn load_with_environment(name: &str, environment: config::Environment) -> Result<Self, AppConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name(name).required(true))
            .add_source(config::File::with_name(&format!("{}_local", name)).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn positions(&self) -> &[GeoPosition] {
        &self.positions
    }

    pub fn capitals(&self) -> &[Capital] {
        &self.capitals
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
}

#[derive(Debug, Deserialize)]
pub struct Report {
    origin: String,
}

impl Report {
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("unable to load configuration: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                report: Report { origin: "Oslo".to_string() },
                positions: vec![GeoPosition::new("Oslo", 10.8, 59.9), GeoPosition::new("Vancouver", -123.1, 49.3)],
                capitals: vec![],
                hand: vec![],
            },
        }
    }

    pub fn origin(mut self, origin: &str) -> Self {
        self.config.report.origin = origin.to_string();
        self
    }

    pub fn capital(mut self, capital: Capital) -> Self {
        self.config.capitals.push(capital);
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Rank, Suit};
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    const OSLO_ONLY: &str = r#"
        [report]
        origin = "Oslo"

        [[positions]]
        name = "Oslo"
        longitude = 10.8
        latitude = 59.9

        [[positions]]
        name = "Vancouver"
        longitude = -123.1
        latitude = 49.3
    "#;

    /// Writes `<file_name>.toml` into `dir` and returns the extensionless name of the main `config` file.
    fn write_config(dir: &TempDir, file_name: &str, content: &str) -> io::Result<String> {
        fs::write(dir.path().join(format!("{}.toml", file_name)), content)?;
        Ok(dir.path().join("config").to_string_lossy().into_owned())
    }

    fn no_environment() -> config::Environment {
        config::Environment::with_prefix("GEO").separator("__").source(Some(config::Map::new()))
    }

    #[test]
    fn loads_a_configuration_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let name = write_config(
            &dir,
            "config",
            r#"
            hand = ["Q♡", "2♣"]

            [report]
            origin = "Oslo"

            [[positions]]
            name = "Oslo"
            longitude = 10.8
            latitude = 59.9

            [[positions]]
            name = "Null Island"

            [[capitals]]
            name = "Oslo"
            longitude = 10.8
            latitude = 59.9
            country = "Norway"
            "#,
        )?;

        let config = AppConfig::load_with_environment(&name, no_environment())?;

        assert_eq!(config.report().origin(), "Oslo");
        assert_eq!(config.positions(), &[GeoPosition::new("Oslo", 10.8, 59.9), GeoPosition::named("Null Island")]);
        assert_eq!(config.capitals(), &[Capital::new(GeoPosition::new("Oslo", 10.8, 59.9), "Norway")]);
        assert_eq!(config.hand(), &[Card::new(Rank::Queen, Suit::Hearts), Card::new(Rank::Two, Suit::Clubs)]);
        Ok(())
    }

    #[test]
    fn local_file_overrides_the_main_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let name = write_config(&dir, "config", OSLO_ONLY)?;
        write_config(&dir, "config_local", "[report]\norigin = \"Vancouver\"\n")?;

        let config = AppConfig::load_with_environment(&name, no_environment())?;

        assert_eq!(config.report().origin(), "Vancouver");
        assert_eq!(config.positions().len(), 2);
        Ok(())
    }

    #[test]
    fn environment_overrides_the_files() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let name = write_config(&dir, "config", OSLO_ONLY)?;
        write_config(&dir, "config_local", "[report]\norigin = \"Oslo\"\n")?;

        let mut variables = config::Map::new();
        variables.insert("GEO__REPORT__ORIGIN".to_string(), "Vancouver".to_string());
        let environment = config::Environment::with_prefix("GEO").separator("__").source(Some(variables));

        let config = AppConfig::load_with_environment(&name, environment)?;

        assert_eq!(config.report().origin(), "Vancouver");
        Ok(())
    }

    #[test]
    fn fails_on_an_invalid_position() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let name = write_config(
            &dir,
            "config",
            r#"
            [report]
            origin = "Nowhere"

            [[positions]]
            name = "Nowhere"
            latitude = 123.0
            "#,
        )?;

        let result = AppConfig::load_with_environment(&name, no_environment());
        let msg = result.expect_err("expected an error but got Ok").to_string();
        assert!(msg.contains("invalid latitude for 'Nowhere'"), "got '{msg}'");
        Ok(())
    }

    #[test]
    fn fails_when_the_file_is_missing() -> io::Result<()> {
        let dir = TempDir::new()?;
        let name = dir.path().join("config").to_string_lossy().into_owned();
        assert!(matches!(
            AppConfig::load_with_environment(&name, no_environment()),
            Err(AppConfigError::Config(_))
        ));
        Ok(())
    }
}
