//! Configuration modules.

pub mod logging;
pub mod settings;
pub mod vendor;

pub use logging::{LogFormat, LoggingConfig};
pub use settings::Config;
pub use vendor::VendorConfig;
