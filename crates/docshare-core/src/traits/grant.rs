//! Grant persistence used by the sharing flow.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::{DocumentId, SharePermission, UserId};

/// Everything the store needs to record a share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareDocumentParams {
    /// Document being shared.
    pub document_id: DocumentId,
    /// User granting access.
    pub granted_by: UserId,
    /// The most the granting user may hand out. Existing grants above this
    /// level must not be changed.
    pub granter_permission: SharePermission,
    /// Recipient emails, in request order.
    pub user_emails: Vec<String>,
    /// Permission level granted to every recipient.
    pub permission: SharePermission,
    /// When the grants lapse (None = never).
    pub expires_at: Option<DateTime<Utc>>,
}

/// Persists document grants.
#[async_trait]
pub trait GrantStore: Send + Sync + 'static {
    /// Create (or replace) one grant per recipient.
    ///
    /// Implementations must write nothing and return an
    /// [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound) error
    /// whose message starts with `"Some users not found"` when any email
    /// does not resolve to a registered user, and an
    /// [`ErrorKind::Forbidden`](crate::error::ErrorKind::Forbidden) error
    /// when a recipient already holds more than `granter_permission`.
    async fn share_document(&self, params: &ShareDocumentParams) -> AppResult<()>;
}
