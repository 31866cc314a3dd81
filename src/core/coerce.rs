use crate::error::CoercionError;
use crate::models::MatchField;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// The semantic type a recognized key is coerced to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedKind {
    Text,
    Number,
}

impl fmt::Display for ExpectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedKind::Text => f.write_str("text"),
            ExpectedKind::Number => f.write_str("number"),
        }
    }
}

/// How a map decode treats values that cannot be coerced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeMode {
    /// Leave the field absent and keep going
    #[default]
    Lenient,
    /// Reject the whole map, reporting every mismatch
    Strict,
}

/// How absent fields are written into an extracted map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsentPolicy {
    /// Absent fields become JSON `null`
    #[default]
    Null,
    /// Absent text becomes `""` and absent numbers become `0.0`
    ZeroValue,
}

/// Name of a JSON value's kind, for diagnostics
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Coerce a raw value into an optional text field
///
/// Strings pass through, numbers and booleans use their textual form,
/// `null` means absent. Arrays and objects are rejected.
pub fn coerce_text(field: MatchField, value: &Value) -> Result<Option<String>, CoercionError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(mismatch(field, ExpectedKind::Text, other)),
    }
}

/// Coerce a raw value into an optional double-precision field
///
/// Numbers pass through, numeric strings are parsed after trimming,
/// booleans map to `1.0` / `0.0`, `null` means absent. Strings that do not
/// parse to a finite number are rejected.
pub fn coerce_number(field: MatchField, value: &Value) -> Result<Option<f64>, CoercionError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| mismatch(field, ExpectedKind::Number, value)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or_else(|| mismatch(field, ExpectedKind::Number, value)),
        Value::Bool(b) => Ok(Some(if *b { 1.0 } else { 0.0 })),
        other => Err(mismatch(field, ExpectedKind::Number, other)),
    }
}

/// Encode an optional text field for an extracted map
pub fn encode_text(value: Option<&str>, policy: AbsentPolicy) -> Value {
    match (value, policy) {
        (Some(s), _) => Value::String(s.to_string()),
        (None, AbsentPolicy::Null) => Value::Null,
        (None, AbsentPolicy::ZeroValue) => Value::String(String::new()),
    }
}

/// Encode an optional double for an extracted map
///
/// JSON has no NaN or infinity, so non-finite values encode as `null`.
pub fn encode_number(value: Option<f64>, policy: AbsentPolicy) -> Value {
    match (value, policy) {
        (Some(v), _) => Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null),
        (None, AbsentPolicy::Null) => Value::Null,
        (None, AbsentPolicy::ZeroValue) => Value::from(0.0),
    }
}

fn mismatch(field: MatchField, expected: ExpectedKind, found: &Value) -> CoercionError {
    CoercionError {
        field,
        expected,
        found: kind_of(found),
    }
}
