//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use docshare_core::types::{DocumentId, UserId};

/// Maximum title length in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// A document owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique document identifier.
    pub id: DocumentId,
    /// The user who created the document.
    pub owner_id: UserId,
    /// Document title.
    pub title: String,
    /// Document body.
    pub content: String,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When the document was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Check whether the given user owns this document.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// Data required to create a new document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Owner of the new document.
    pub owner_id: UserId,
    /// Title (already trimmed).
    pub title: String,
    /// Body.
    pub content: String,
}

/// Fields to change on a document. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDocument {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
}

impl UpdateDocument {
    /// Whether the update carries no changes.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
