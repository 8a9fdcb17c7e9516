use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate value at the write boundary of a guarded field.
///
/// Hosts hand writes to the engine as this tagged variant; the engine
/// resolves it into the field's canonical stored type before any semantic
/// check runs, so an ambiguous value never travels further. `Null` marks an
/// absent value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDateTime),
    List(Vec<FieldValue>),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(value) => Some(*value as f64),
            FieldValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::Date(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        FieldValue::Date(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value.and_time(NaiveTime::MIN))
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => FieldValue::Null,
        }
    }
}

/// Runtime shape a contract expects of its candidates.
///
/// Named in type-violation diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Text,
    Number,
    TextOrNumber,
    Date,
    Any,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Shape::Text => "a string",
            Shape::Number => "a finite number",
            Shape::TextOrNumber => "a string or a number",
            Shape::Date => "a valid date",
            Shape::Any => "a value",
        };
        f.write_str(label)
    }
}

/// Canonical stored types a contract resolves candidates into.
///
/// A failed resolution is reported to the writer as a type violation naming
/// `SHAPE`.
pub trait FieldShape: Clone {
    const SHAPE: Shape;

    fn from_value(value: FieldValue) -> Option<Self>;
}

impl FieldShape for String {
    const SHAPE: Shape = Shape::Text;

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl FieldShape for f64 {
    const SHAPE: Shape = Shape::Number;

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Int(value) => Some(value as f64),
            FieldValue::Float(value) if value.is_finite() => Some(value),
            _ => None,
        }
    }
}

impl FieldShape for NaiveDateTime {
    const SHAPE: Shape = Shape::Date;

    fn from_value(value: FieldValue) -> Option<Self> {
        value.as_date()
    }
}

impl FieldShape for FieldValue {
    const SHAPE: Shape = Shape::Any;

    fn from_value(value: FieldValue) -> Option<Self> {
        Some(value)
    }
}
