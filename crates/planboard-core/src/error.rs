//! Error types for Planboard
//!
//! Domain operations never panic or throw for expected failures. Every
//! rejected rule is reported as a [`DomainError`] value, collected into
//! [`crate::result::Errors`] and handed back to the caller.

use serde::Serialize;
use thiserror::Error;

/// Broad category of a domain error, distinguished by cause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A field or relationship operation broke a domain rule
    InvalidArgument,
    /// An external identifier did not resolve to an entity
    NotFound,
    /// A downstream operation (persistence, etc.) did not take effect
    FailedOperation,
}

impl ErrorKind {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::NotFound => "not_found",
            Self::FailedOperation => "failed_operation",
        }
    }
}

/// Planboard domain errors
///
/// Only `InvalidArgument` is produced by the entities themselves. The other
/// two kinds are provided for the lookup and persistence collaborators that
/// sit around this layer, so that every failure shares one shape.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DomainError {
    #[error("{message}")]
    InvalidArgument {
        /// Name of the field or relationship that failed validation
        field: &'static str,
        message: String,
    },

    #[error("{entity} '{id}' could not be found.")]
    NotFound { entity: &'static str, id: String },

    #[error("{message}")]
    FailedOperation { message: String },
}

impl DomainError {
    /// Create an invalid argument error
    pub fn invalid_argument(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Create a failed operation error
    pub fn failed_operation(message: impl Into<String>) -> Self {
        Self::FailedOperation {
            message: message.into(),
        }
    }

    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "E100",
            Self::NotFound { .. } => "E200",
            Self::FailedOperation { .. } => "E300",
        }
    }

    /// Get the category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::FailedOperation { .. } => ErrorKind::FailedOperation,
        }
    }

    /// Field the error refers to, if it is a validation error
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(*field),
            _ => None,
        }
    }
}
