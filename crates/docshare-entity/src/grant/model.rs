//! Document grant entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use docshare_core::types::{DocumentId, GrantId, SharePermission, UserId};

/// A permission grant on a document for one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentGrant {
    /// Unique grant identifier.
    pub id: GrantId,
    /// The shared document.
    pub document_id: DocumentId,
    /// The grantee.
    pub user_id: UserId,
    /// Permission level granted.
    pub permission: SharePermission,
    /// The user who created the grant.
    pub granted_by: UserId,
    /// When the grant lapses (None = never).
    pub expires_at: Option<DateTime<Utc>>,
    /// When the grant was created or last replaced.
    pub created_at: DateTime<Utc>,
}

impl DocumentGrant {
    /// Check if the grant has lapsed at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    /// Check if the grant is currently in force.
    pub fn is_active(&self) -> bool {
        !self.is_expired_at(Utc::now())
    }
}

/// A grant joined with the grantee's identity, for listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GrantWithUser {
    /// Grant identifier.
    pub id: GrantId,
    /// The shared document.
    pub document_id: DocumentId,
    /// The grantee.
    pub user_id: UserId,
    /// Grantee email.
    pub email: String,
    /// Grantee display name.
    pub display_name: Option<String>,
    /// Permission level granted.
    pub permission: SharePermission,
    /// The user who created the grant.
    pub granted_by: UserId,
    /// When the grant lapses.
    pub expires_at: Option<DateTime<Utc>>,
    /// When the grant was created.
    pub created_at: DateTime<Utc>,
}
