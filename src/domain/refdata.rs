//! Reduced reference-data results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value::Value;

/// One row of a bulk field: sub-field name to value.
pub type BulkRow = BTreeMap<String, Value>;

/// Field name to value for a single security.
pub type SecurityFields = BTreeMap<String, FieldValue>;

/// Security identifier to its fields.
pub type ReferenceData = BTreeMap<String, SecurityFields>;

/// The value of a requested field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(Value),
    /// Rows of a bulk field, in delivery order.
    Bulk(Vec<BulkRow>),
}

impl FieldValue {
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(v) => Some(v),
            Self::Bulk(_) => None,
        }
    }

    #[must_use]
    pub fn as_bulk(&self) -> Option<&[BulkRow]> {
        match self {
            Self::Scalar(_) => None,
            Self::Bulk(rows) => Some(rows),
        }
    }

    #[must_use]
    pub const fn is_bulk(&self) -> bool {
        matches!(self, Self::Bulk(_))
    }
}

impl From<Value> for FieldValue {
    fn from(v: Value) -> Self {
        Self::Scalar(v)
    }
}

/// A security the vendor could not serve at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityError {
    pub security: String,
    pub category: String,
    pub message: String,
}

/// A requested field the vendor rejected for one security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldException {
    pub security: String,
    pub field_id: String,
    pub category: String,
    pub message: String,
}

/// Reference data together with the per-security diagnostics that
/// accompanied it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDataReport {
    pub data: ReferenceData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_errors: Vec<SecurityError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_exceptions: Vec<FieldException>,
}

impl ReferenceDataReport {
    /// True when no security or field was rejected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.security_errors.is_empty() && self.field_exceptions.is_empty()
    }
}
