use std::time::Duration;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Faults raised by the session transport.
///
/// These are never handled inside the poll loop: a transport fault aborts
/// the current request and reaches the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("service unavailable: {uri}")]
    ServiceUnavailable { uri: String },

    #[error("service {service} does not support operation '{operation}'")]
    UnknownOperation { service: String, operation: String },

    #[error("session disconnected: {0}")]
    Disconnected(String),

    #[error("failed to send request: {0}")]
    Send(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("deadline of {deadline:?} exceeded after {completed} screen(s)")]
    DeadlineExceeded { deadline: Duration, completed: usize },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
