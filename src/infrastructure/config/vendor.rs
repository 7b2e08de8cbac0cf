//! Vendor session configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::name;
use crate::error::ConfigError;

/// Connection and request settings for the market-data vendor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VendorConfig {
    /// Host the session transport connects to.
    pub host: String,
    pub port: u16,
    /// Service identifier for screening and reference data.
    pub service: String,
    /// Upper bound for a single poll of the event queue.
    pub poll_timeout_ms: u64,
    /// Screen visibility class sent with screening requests.
    pub screen_type: String,
    /// Optional overall bound for a multi-screen run, checked between screens.
    pub deadline_ms: Option<u64>,
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 8194,
            service: name::REFDATA_SERVICE.into(),
            poll_timeout_ms: 500,
            screen_type: "PRIVATE".into(),
            deadline_ms: None,
        }
    }
}

impl VendorConfig {
    #[must_use]
    pub const fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::MissingField { field: "host" });
        }
        if self.service.is_empty() {
            return Err(ConfigError::MissingField { field: "service" });
        }
        if self.screen_type.is_empty() {
            return Err(ConfigError::MissingField {
                field: "screen_type",
            });
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.poll_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_timeout_ms",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.deadline_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "deadline_ms",
                reason: "must be greater than 0 when set".to_string(),
            });
        }
        Ok(())
    }
}
