//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`Session`] - Market-data vendor session transport

mod session;

pub use session::Session;
