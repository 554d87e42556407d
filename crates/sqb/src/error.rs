//! Error types for sqb

use thiserror::Error;

/// Result type alias for sqb operations
pub type SqbResult<T> = Result<T, SqbError>;

/// Errors raised while assembling statements.
///
/// Building a statement never fails once it is configured; these errors come
/// from the edges: converting opaque values into lists, parsing verbs, checking
/// templates and validating builder state before handing SQL to a driver.
#[derive(Debug, Error)]
pub enum SqbError {
    /// A value of the wrong kind was supplied (e.g. a scalar where a list is required)
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Unrecognized statement verb
    #[error("Unknown statement verb: '{0}'")]
    UnknownVerb(String),

    /// `?` template and value list disagree
    #[error(
        "Placeholder mismatch: template '{sql}' has {placeholders} '?', but {values} values provided"
    )]
    PlaceholderMismatch {
        sql: String,
        placeholders: usize,
        values: usize,
    },

    /// Builder state rejected before use
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SqbError {
    /// Create a type mismatch error
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { expected, found }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a type mismatch error
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for SqbError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
