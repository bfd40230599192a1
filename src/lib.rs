pub mod app;
pub mod app_config;
mod card_deserializer;
pub mod distance_report;
pub mod domain;
mod geo_position_deserializer;
