use crate::core::coerce::ExpectedKind;
use crate::models::MatchField;
use thiserror::Error;

/// A single recognized key whose value could not be coerced to the field type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{field}` expected {expected}, found {found}")]
pub struct CoercionError {
    pub field: MatchField,
    pub expected: ExpectedKind,
    pub found: &'static str,
}

/// Errors raised by the strict mapping paths
///
/// The lenient paths (`MatchInput::from_map`, `MatchInput::from_value`) never
/// produce these.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("{} field(s) failed coercion: {}", .0.len(), describe(.0))]
    Coercion(Vec<CoercionError>),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn describe(issues: &[CoercionError]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
