//! Type predicates over candidate values.
//!
//! Every predicate is a pure, total function of one argument: it returns a
//! plain boolean, never fails, never mutates.

use std::sync::LazyLock;

use regex::Regex;

use crate::value::FieldValue;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern compiles")
});

pub fn is_string(value: &FieldValue) -> bool {
    matches!(value, FieldValue::Text(_))
}

pub fn is_bool(value: &FieldValue) -> bool {
    matches!(value, FieldValue::Bool(_))
}

/// Finite numeric check; NaN and the infinities do not count.
pub fn is_number(value: &FieldValue) -> bool {
    match value {
        FieldValue::Int(_) => true,
        FieldValue::Float(value) => value.is_finite(),
        _ => false,
    }
}

/// Numeric with a zero fractional part; `5.0` counts as an integer.
pub fn is_integer(value: &FieldValue) -> bool {
    match value {
        FieldValue::Int(_) => true,
        FieldValue::Float(value) => value.is_finite() && value.fract() == 0.0,
        _ => false,
    }
}

/// Numeric with a non-zero fractional part.
pub fn is_float(value: &FieldValue) -> bool {
    match value {
        FieldValue::Float(value) => value.is_finite() && value.fract() != 0.0,
        _ => false,
    }
}

pub fn is_date(value: &FieldValue) -> bool {
    matches!(value, FieldValue::Date(_))
}

pub fn is_array(value: &FieldValue) -> bool {
    matches!(value, FieldValue::List(_))
}

pub fn is_null(value: &FieldValue) -> bool {
    matches!(value, FieldValue::Null)
}

/// Whether the value represents an empty value: absent, `false`, the empty
/// string, NaN, or an empty list.
pub fn is_empty(value: &FieldValue) -> bool {
    match value {
        FieldValue::Null => true,
        FieldValue::Bool(value) => !value,
        FieldValue::Text(value) => value.is_empty(),
        FieldValue::Float(value) => value.is_nan(),
        FieldValue::List(items) => items.is_empty(),
        _ => false,
    }
}

pub fn has_value(value: &FieldValue) -> bool {
    !is_empty(value)
}

/// Pattern-based `local@domain` syntax check on the lowercased string.
pub fn is_email(value: &FieldValue) -> bool {
    matches!(value, FieldValue::Text(value) if is_email_str(value))
}

/// Email check over an already-shaped string.
pub fn is_email_str(value: &str) -> bool {
    EMAIL.is_match(&value.to_lowercase())
}
