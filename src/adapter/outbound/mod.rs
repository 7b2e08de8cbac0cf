//! Outbound adapters implementing the session port.
//!
//! The live vendor transport is supplied by the caller. These adapters cover
//! offline use: recording a live session and replaying it later.

pub mod capture;
pub mod recording;
pub mod replay;

pub use capture::Capture;
pub use recording::RecordingSession;
pub use replay::ReplaySession;
