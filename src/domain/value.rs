//! Scalar values carried by response elements.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A scalar value as delivered by the vendor schema.
///
/// Values are passed through unconverted: a date stays a date and a float
/// stays a float. The variant order matters for untagged deserialization,
/// so the stricter temporal forms are tried before the `String` fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Datetime(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
    String(String),
}

impl Value {
    /// The placeholder written for missing sub-field values in bulk rows.
    #[must_use]
    pub fn empty() -> Self {
        Self::String(String::new())
    }

    /// True for the empty-string placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::String(s) if s.is_empty())
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::Datetime(dt) => Some(dt.date()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Datetime(v) => write!(f, "{}", v.format("%Y-%m-%dT%H:%M:%S%.f")),
            Self::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            Self::Time(v) => write!(f, "{}", v.format("%H:%M:%S%.f")),
            Self::String(v) => f.write_str(v),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Self::Datetime(v)
    }
}

/// Type-tagged wire form, e.g. `{"date": "2024-01-01"}`.
///
/// Recorded captures use this form so a replayed value keeps the variant it
/// was recorded with. Result mappings keep the plain untagged form.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Tagged {
    Bool(bool),
    Int(i64),
    Float(f64),
    Datetime(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
    String(String),
}

impl From<&Value> for Tagged {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(v) => Self::Bool(*v),
            Value::Int(v) => Self::Int(*v),
            Value::Float(v) => Self::Float(*v),
            Value::Datetime(v) => Self::Datetime(*v),
            Value::Date(v) => Self::Date(*v),
            Value::Time(v) => Self::Time(*v),
            Value::String(v) => Self::String(v.clone()),
        }
    }
}

impl From<Tagged> for Value {
    fn from(tagged: Tagged) -> Self {
        match tagged {
            Tagged::Bool(v) => Self::Bool(v),
            Tagged::Int(v) => Self::Int(v),
            Tagged::Float(v) => Self::Float(v),
            Tagged::Datetime(v) => Self::Datetime(v),
            Tagged::Date(v) => Self::Date(v),
            Tagged::Time(v) => Self::Time(v),
            Tagged::String(v) => Self::String(v),
        }
    }
}

/// `#[serde(with = "...")]` helpers for a single tagged [`Value`].
pub(crate) mod tagged {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Tagged, Value};

    pub fn serialize<S: Serializer>(value: &Value, serializer: S) -> Result<S::Ok, S::Error> {
        Tagged::from(value).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
        Tagged::deserialize(deserializer).map(Value::from)
    }
}

/// `#[serde(with = "...")]` helpers for named parameter lists of tagged values.
pub(crate) mod tagged_params {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Tagged, Value};

    pub fn serialize<S: Serializer>(
        params: &[(String, Value)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        params
            .iter()
            .map(|(name, value)| (name.as_str(), Tagged::from(value)))
            .collect::<Vec<_>>()
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, Value)>, D::Error> {
        let params = Vec::<(String, Tagged)>::deserialize(deserializer)?;
        Ok(params
            .into_iter()
            .map(|(name, value)| (name, Value::from(value)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_placeholder_is_empty_string() {
        assert_eq!(Value::empty(), Value::String(String::new()));
        assert!(Value::empty().is_empty());
        assert!(!Value::from("x").is_empty());
        assert!(!Value::Int(0).is_empty());
    }

    #[test]
    fn display_passes_strings_through() {
        assert_eq!(Value::from("AAPL US Equity").to_string(), "AAPL US Equity");
        assert_eq!(Value::Float(150.25).to_string(), "150.25");
        assert_eq!(Value::Int(42).to_string(), "42");
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(Value::Date(date).to_string(), "2024-01-01");
    }

    #[test]
    fn deserializes_untagged_json_into_narrowest_variant() {
        let values: Vec<Value> =
            serde_json::from_str(r#"[true, 3, 0.24, "2024-01-01", "AAPL US Equity"]"#).unwrap();

        assert_eq!(values[0], Value::Bool(true));
        assert_eq!(values[1], Value::Int(3));
        assert_eq!(values[2], Value::Float(0.24));
        assert_eq!(
            values[3],
            Value::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(values[4], Value::from("AAPL US Equity"));
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapped(#[serde(with = "tagged")] Value);

    #[test]
    fn tagged_form_keeps_date_like_strings() {
        for value in [
            Value::from("2024-01-01"),
            Value::from("12:30"),
            Value::from("2024-01-01T09:30:00"),
            Value::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            Value::Float(1.0),
            Value::Int(1),
        ] {
            let json = serde_json::to_string(&Wrapped(value.clone())).unwrap();
            let back: Wrapped = serde_json::from_str(&json).unwrap();
            assert_eq!(back.0, value, "{json}");
        }
        assert_eq!(
            serde_json::to_string(&Wrapped(Value::from("12:30"))).unwrap(),
            r#"{"string":"12:30"}"#
        );
    }

    #[test]
    fn text_and_date_accessors() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let datetime = date.and_hms_opt(16, 0, 0).unwrap();

        assert_eq!(Value::from("USD").as_str(), Some("USD"));
        assert_eq!(Value::Date(date).as_str(), None);
        assert_eq!(Value::Date(date).as_date(), Some(date));
        assert_eq!(Value::from(datetime).as_date(), Some(date));
        assert_eq!(Value::from("2024-03-15").as_date(), None);
    }

    #[test]
    fn numeric_accessor_widens_integers() {
        assert_eq!(Value::Int(2).as_f64(), Some(2.0));
        assert_eq!(Value::Float(0.5).as_f64(), Some(0.5));
        assert_eq!(Value::from("0.5").as_f64(), None);
    }
}
