//! Typed path parameter helpers.

use uuid::Uuid;

use docshare_core::types::{DocumentId, UserId};

use crate::error::ApiError;

fn parse_uuid(s: &str, what: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(s).map_err(|_| ApiError::bad_request(format!("Invalid {what} ID: {s}")))
}

/// Parses a document ID from a path segment.
pub fn parse_document_id(s: &str) -> Result<DocumentId, ApiError> {
    parse_uuid(s, "document").map(DocumentId::from_uuid)
}

/// Parses a user ID from a path segment.
pub fn parse_user_id(s: &str) -> Result<UserId, ApiError> {
    parse_uuid(s, "user").map(UserId::from_uuid)
}
