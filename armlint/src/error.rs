//! Errors raised while loading a compiled type graph.
//!
//! Validation itself never fails; only malformed input does. Every variant
//! carries a stable code so hosts can match on it without parsing messages.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Failed to parse {what} JSON: {message}")]
    InvalidJson { what: &'static str, message: String },

    #[error("'{owner}' references unknown {kind} '{id}'")]
    UnknownType {
        owner: String,
        kind: &'static str,
        id: String,
    },

    #[error("Duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Model '{model}' declares property '{property}' more than once")]
    DuplicateProperty { model: String, property: String },

    #[error("Property '{owner}' is copied from unknown property '{model}.{property}'")]
    UnknownSource {
        owner: String,
        model: String,
        property: String,
    },

    #[error("Property source chain is cyclic at '{property}'")]
    CyclicSource { property: String },

    #[error("Span of '{owner}' is invalid: {reason}")]
    InvalidSpan { owner: String, reason: String },
}

impl GraphError {
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::InvalidJson { .. } => "P001",
            GraphError::UnknownType { .. } => "P002",
            GraphError::DuplicateId { .. } => "P003",
            GraphError::DuplicateProperty { .. } => "P004",
            GraphError::UnknownSource { .. } => "P005",
            GraphError::CyclicSource { .. } => "P006",
            GraphError::InvalidSpan { .. } => "P007",
        }
    }

    pub fn invalid_json(what: &'static str, err: &serde_json::Error) -> Self {
        GraphError::InvalidJson {
            what,
            message: err.to_string(),
        }
    }
}
