//! arbfeed - Market-data vendor session request/response reducer.
//!
//! This crate drives screening and reference-data requests over a stateful
//! vendor session, drains the session's event queue until each request's
//! terminal response, and reduces the self-describing response trees into
//! plain mappings for downstream reporting.
//!
//! # Architecture
//!
//! - **`domain`** - Element tree, events, requests and result mappings
//! - **`port`** - The [`Session`](port::Session) transport trait
//! - **`application`** - Request driver, poll state machine, schema walker
//! - **`adapter`** - Capture recording and replay sessions
//! - **`infrastructure`** - TOML configuration and logging setup
//!
//! # Example
//!
//! ```no_run
//! use arbfeed::adapter::outbound::ReplaySession;
//! use arbfeed::application::RequestDriver;
//! use arbfeed::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("arbfeed.toml")?;
//!     config.init_logging();
//!
//!     let mut session = ReplaySession::load("captures/close.json")?;
//!     let driver = RequestDriver::from_config(&config.vendor);
//!     let longs = driver.screen_securities(&mut session, ["ARB_LONGS"])?;
//!     let data = driver.reference_data(&mut session, &longs, ["PX_LAST", "DVD_HIST_ALL"])?;
//!     println!("{}", serde_json::to_string_pretty(&data)?);
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
