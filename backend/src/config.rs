//! Configuration management for the Farmie backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FARMIE_ prefix

use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::DEFAULT_MAX_RECOMMENDATIONS;

/// Open-Meteo historical archive endpoint
pub const DEFAULT_ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Weather archive configuration
    pub weather: WeatherConfig,

    /// Recommendation engine configuration
    pub recommendation: RecommendationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Historical weather archive endpoint
    pub archive_url: String,

    /// Deadline for one archive request, in seconds
    pub timeout_secs: u64,

    /// Retry a timed-out archive request once
    pub retry_on_timeout: bool,

    /// Default length of the farm weather summary window
    pub summary_days: u32,
}

impl WeatherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecommendationConfig {
    /// Calendar year whose weather defines a farm's climate
    pub reference_year: i32,

    /// Maximum number of crops returned per recommendation
    pub max_results: usize,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FARMIE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("weather.archive_url", DEFAULT_ARCHIVE_URL)?
            .set_default("weather.timeout_secs", 10)?
            .set_default("weather.retry_on_timeout", true)?
            .set_default("weather.summary_days", 30)?
            .set_default("recommendation.reference_year", 2024)?
            .set_default(
                "recommendation.max_results",
                DEFAULT_MAX_RECOMMENDATIONS as i64,
            )?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARMIE_ prefix)
            .add_source(
                Environment::with_prefix("FARMIE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            archive_url: DEFAULT_ARCHIVE_URL.to_string(),
            timeout_secs: 10,
            retry_on_timeout: true,
            summary_days: 30,
        }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            reference_year: 2024,
            max_results: DEFAULT_MAX_RECOMMENDATIONS,
        }
    }
}
