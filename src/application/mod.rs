//! Application services (use cases).
//!
//! These services drive the session port and reduce what comes back:
//!
//! - [`driver`] - Screening and reference-data requests
//! - [`poll`] - Per-request event-queue state machine
//! - [`walker`] - Response schema walker

pub mod driver;
pub mod poll;
pub mod walker;

pub use driver::{RequestDriver, RequestSettings};
pub use poll::{PollLoop, PollState, PollSummary};
