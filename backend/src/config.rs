//! Configuration management for the Sanabel Bakery inventory backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with BKR_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Seed data generator configuration
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

/// Settings for the deterministic startup data generator
///
/// All state lives in memory and is regenerated on every start; the
/// same seed always produces the same catalog and movements.
#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    /// RNG seed for the synthetic movement generator
    pub rng_seed: u64,

    /// Number of incoming shipments to generate
    pub incoming_movements: u32,

    /// Number of outgoing issues to generate
    pub outgoing_movements: u32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("BKR_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("seed.rng_seed", 123)?
            .set_default("seed.incoming_movements", 25)?
            .set_default("seed.outgoing_movements", 40)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (BKR_ prefix)
            .add_source(
                Environment::with_prefix("BKR")
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

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            rng_seed: 123,
            incoming_movements: 25,
            outgoing_movements: 40,
        }
    }
}
