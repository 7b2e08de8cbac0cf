//! On-disk capture of a session's traffic.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::name;
use crate::domain::{Event, Request};
use crate::error::Result;

/// Services opened, requests sent and events received during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capture {
    #[serde(default = "default_services")]
    pub services: Vec<String>,
    #[serde(default)]
    pub requests: Vec<Request>,
    #[serde(default)]
    pub events: Vec<Event>,
}

fn default_services() -> Vec<String> {
    vec![name::REFDATA_SERVICE.to_string()]
}

impl Default for Capture {
    fn default() -> Self {
        Self {
            services: default_services(),
            requests: Vec::new(),
            events: Vec::new(),
        }
    }
}

impl Capture {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
