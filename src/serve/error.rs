//! Validation and registry error types with HTTP status hints

use serde::Serialize;
use thiserror::Error;

/// Classification of a violated field rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// A mandatory field is missing or null
    RequiredField,
    /// A value does not match its required shape (type, UUID, email, enum, pattern)
    InvalidFormat,
    /// A string is outside its allowed character-count bounds
    Length,
    /// A number is outside its allowed bounds
    Range,
    /// A multi-field invariant is violated
    CrossField,
}

impl ErrorKind {
    /// Get the error code string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RequiredField => "REQUIRED_FIELD",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::Length => "LENGTH",
            Self::Range => "RANGE",
            Self::CrossField => "CROSS_FIELD",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violated rule on a request payload
///
/// Validators fail fast: the first violated rule is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Which rule family was violated
    pub kind: ErrorKind,
    /// Name of the offending field (or `body` for the payload itself)
    pub field: String,
    /// Human-readable description of the violation
    pub message: String,
}

impl ValidationError {
    /// Create an error of the given kind
    #[must_use]
    pub fn new(kind: ErrorKind, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            message: message.into(),
        }
    }

    /// A mandatory field is missing or null
    #[must_use]
    pub fn required(field: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequiredField, field, "required field missing")
    }

    /// A value has the wrong shape
    #[must_use]
    pub fn invalid_format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidFormat, field, message)
    }

    /// A value has the wrong JSON type
    #[must_use]
    pub fn invalid_type(field: impl Into<String>, expected: &str) -> Self {
        Self::new(ErrorKind::InvalidFormat, field, format!("invalid type: expected {expected}"))
    }

    /// A string is too short or too long
    #[must_use]
    pub fn length(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Length, field, message)
    }

    /// A number is out of bounds
    #[must_use]
    pub fn range(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Range, field, message)
    }

    /// A multi-field invariant does not hold
    #[must_use]
    pub fn cross_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CrossField, field, message)
    }

    /// Error classification tag
    #[must_use]
    pub const fn category(&self) -> &'static str {
        "validation"
    }

    /// HTTP status hint for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        400
    }
}

/// Errors raised by the endpoint registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServeError {
    /// The request payload or path parameters broke a rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No endpoint is registered under this operation key
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Two endpoints were registered under the same operation key
    #[error("duplicate operation: {0}")]
    DuplicateOperation(String),
}

impl ServeError {
    /// Error classification tag
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::UnknownOperation(_) | Self::DuplicateOperation(_) => "registry",
        }
    }

    /// HTTP status hint for this error
    ///
    /// Registry errors are programmer mistakes, never user-facing.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::UnknownOperation(_) | Self::DuplicateOperation(_) => 500,
        }
    }

    /// The wrapped validation error, if this is one
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}
