//! Document permission checks.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{DocumentId, SharePermission, UserId};

/// Answers "may this user do X to this document?".
///
/// A document that does not exist yields `false` for every question.
#[async_trait]
pub trait DocumentAccess: Send + Sync + 'static {
    /// Owner, or any unexpired grant.
    async fn can_view_document(&self, user_id: UserId, document_id: DocumentId)
    -> AppResult<bool>;

    /// Owner, or an unexpired `WRITE`/`ADMIN` grant. Required for sharing.
    async fn can_edit_document(&self, user_id: UserId, document_id: DocumentId)
    -> AppResult<bool>;

    /// Owner, or an unexpired `ADMIN` grant. Required for delete and revoke.
    async fn can_manage_document(
        &self,
        user_id: UserId,
        document_id: DocumentId,
    ) -> AppResult<bool>;

    /// The highest level the user may hand out: `ADMIN` for the owner, the
    /// grant's own level for a grantee, `None` without access.
    async fn grantable_permission(
        &self,
        user_id: UserId,
        document_id: DocumentId,
    ) -> AppResult<Option<SharePermission>>;
}
