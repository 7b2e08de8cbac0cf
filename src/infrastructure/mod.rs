//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! request logic.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading, validation and logging setup

pub mod config;
