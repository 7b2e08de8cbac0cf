//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file; the vendor endpoint can be
//! overridden from the environment (`ARBFEED_VENDOR_HOST`,
//! `ARBFEED_VENDOR_PORT`) so one file serves several desks.
//!
//! # Example
//!
//! ```no_run
//! use arbfeed::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("arbfeed.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::fs;
use tracing::debug;
use std::path::Path;

use super::logging::LoggingConfig;
use super::vendor::VendorConfig;
use crate::error::{ConfigError, Result};

/// Environment variable overriding [`VendorConfig::host`].
pub const ENV_VENDOR_HOST: &str = "ARBFEED_VENDOR_HOST";
/// Environment variable overriding [`VendorConfig::port`].
pub const ENV_VENDOR_PORT: &str = "ARBFEED_VENDOR_PORT";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vendor: VendorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load from a TOML file, apply environment overrides and validate.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse_toml(&content)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML document without touching the environment.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply endpoint overrides from `lookup` (normally the process
    /// environment).
    #[allow(clippy::result_large_err)]
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_VENDOR_HOST) {
            self.vendor.host = host;
        }
        if let Some(port) = lookup(ENV_VENDOR_PORT) {
            self.vendor.port = port.parse().map_err(|e| ConfigError::InvalidValue {
                field: "port",
                reason: format!("{ENV_VENDOR_PORT}={port}: {e}"),
            })?;
        }
        Ok(())
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        self.vendor.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Initialize logging with the configured settings.
    ///
    /// Returns `false` when a global subscriber was already installed; the
    /// existing one stays in place.
    pub fn init_logging(&self) -> bool {
        let installed = self.logging.init();
        if !installed {
            debug!(
                level = %self.logging.level,
                "Tracing subscriber already installed, logging config not applied"
            );
        }
        installed
    }
}
