//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`session`] - [`ScriptedSession`](session::ScriptedSession), a mock
//!   [`Session`](crate::port::Session) with a scripted event queue.
//! - [`element`] - Builders for screening and reference-data messages.

pub mod element;
pub mod session;
