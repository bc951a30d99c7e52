//! Typed failures of the share operation.

use thiserror::Error;

use docshare_core::error::{AppError, ErrorKind};

/// Marker the grant store uses when recipients do not resolve to users.
pub const USERS_NOT_FOUND: &str = "Some users not found";

/// Why a share request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The request is malformed.
    #[error("{message}")]
    InvalidInput {
        /// What is wrong.
        message: String,
        /// The offending emails, when email syntax was the problem.
        invalid_emails: Option<Vec<String>>,
    },
    /// The caller may not share this document.
    #[error("{0}")]
    Forbidden(String),
    /// One or more recipients are not registered users.
    #[error("{0}")]
    NotFound(String),
    /// A collaborator failed unexpectedly.
    #[error("{message}")]
    Internal {
        /// Generic description.
        message: String,
        /// The collaborator's own message.
        details: Option<String>,
    },
}

impl ShareError {
    /// An invalid-input error without an email list.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            invalid_emails: None,
        }
    }

    /// An internal error carrying the collaborator's message.
    pub fn internal(message: impl Into<String>, source: &AppError) -> Self {
        Self::Internal {
            message: message.into(),
            details: Some(source.message.clone()),
        }
    }

    /// Machine-readable code rendered in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal { .. } => "INTERNAL",
        }
    }

    /// Classify a failure reported by the grant store.
    pub fn from_store(err: AppError) -> Self {
        if err.kind == ErrorKind::Forbidden {
            return Self::Forbidden(err.message);
        }
        if err.kind == ErrorKind::NotFound || err.message.contains(USERS_NOT_FOUND) {
            Self::NotFound(err.message)
        } else {
            Self::internal("Failed to share document", &err)
        }
    }
}
