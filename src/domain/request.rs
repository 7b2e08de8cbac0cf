//! Requests and the service handles that create them.

use serde::{Deserialize, Serialize};

use super::name;
use super::value::Value;
use crate::error::TransportError;

/// A field override attached to a reference-data request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    pub field_id: String,
    pub value: String,
}

impl Override {
    pub fn new(field_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            value: value.into(),
        }
    }
}

/// An operation on a service, with its parameters.
///
/// Scalar parameters are last-write-wins; list parameters keep call order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    service: String,
    operation: String,
    #[serde(default, with = "super::value::tagged_params")]
    params: Vec<(String, Value)>,
    #[serde(default)]
    lists: Vec<(String, Vec<String>)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    overrides: Vec<Override>,
}

impl Request {
    fn new(service: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            operation: operation.into(),
            params: Vec::new(),
            lists: Vec::new(),
            overrides: Vec::new(),
        }
    }

    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Assign a scalar parameter, replacing any earlier value.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.params.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((name.to_string(), value)),
        }
    }

    /// Append to a repeated parameter.
    pub fn append(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.lists.iter_mut().find(|(n, _)| n == name) {
            Some((_, values)) => values.push(value),
            None => self.lists.push((name.to_string(), vec![value])),
        }
    }

    pub fn append_override(&mut self, entry: Override) {
        self.overrides.push(entry);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.params.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Values of a repeated parameter, empty when never appended.
    #[must_use]
    pub fn list(&self, name: &str) -> &[String] {
        self.lists
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn overrides(&self) -> &[Override] {
        &self.overrides
    }
}

/// Handle to an opened service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    uri: String,
    operations: Vec<String>,
}

impl Service {
    pub fn new<I, S>(uri: impl Into<String>, operations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            uri: uri.into(),
            operations: operations.into_iter().map(Into::into).collect(),
        }
    }

    /// The reference-data service with its screening and batch operations.
    pub fn refdata(uri: impl Into<String>) -> Self {
        Self::new(uri, [name::BEQS_REQUEST, name::REFERENCE_DATA_REQUEST])
    }

    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Create an empty request for one of this service's operations.
    pub fn create_request(&self, operation: &str) -> Result<Request, TransportError> {
        if !self.operations.iter().any(|op| op == operation) {
            return Err(TransportError::UnknownOperation {
                service: self.uri.clone(),
                operation: operation.to_string(),
            });
        }
        Ok(Request::new(&self.uri, operation))
    }
}
