use std::fs;
use std::time::Duration;

use arbfeed::application::{RequestDriver, RequestSettings};
use arbfeed::error::{ConfigError, Error};
use arbfeed::infrastructure::config::{Config, LogFormat};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("arbfeed.toml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn load_full_config_from_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        r#"
[vendor]
host = "bpipe.desk.local"
port = 8196
poll_timeout_ms = 250
screen_type = "GLOBAL"
deadline_ms = 60000

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::load(&path).expect("load config");

    assert_eq!(config.vendor.poll_timeout(), Duration::from_millis(250));
    assert_eq!(config.vendor.deadline(), Some(Duration::from_secs(60)));
    assert_eq!(config.logging.format, LogFormat::Json);

    let driver = RequestDriver::from_config(&config.vendor);
    assert_eq!(
        driver.settings(),
        &RequestSettings {
            service: "//blp/refdata".to_string(),
            poll_timeout: Duration::from_millis(250),
            screen_type: "GLOBAL".to_string(),
            deadline: Some(Duration::from_secs(60)),
        }
    );
}

#[test]
fn empty_file_yields_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "");

    let config = Config::load(&path).expect("load config");

    assert_eq!(config.vendor.service, "//blp/refdata");
    assert_eq!(config.vendor.screen_type, "PRIVATE");
    assert_eq!(config.vendor.poll_timeout(), Duration::from_millis(500));
    assert_eq!(config.vendor.deadline(), None);
}

#[test]
fn missing_file_is_read_error() {
    let dir = TempDir::new().expect("temp dir");

    let result = Config::load(dir.path().join("absent.toml"));

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn malformed_file_is_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "[vendor\nport = ");

    let result = Config::load(&path);

    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn zero_poll_timeout_in_file_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "[vendor]\npoll_timeout_ms = 0\n");

    let result = Config::load(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue { .. }))
    ));
}
