//! Document permission checking against ownership and stored grants.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use docshare_core::result::AppResult;
use docshare_core::traits::DocumentAccess;
use docshare_core::types::{DocumentId, SharePermission, UserId};
use docshare_database::repositories::{DocumentRepository, GrantRepository};
use docshare_entity::grant::DocumentRole;

/// Resolves a user's rights on a document from the database.
#[derive(Debug, Clone)]
pub struct DocumentAccessChecker {
    documents: Arc<DocumentRepository>,
    grants: Arc<GrantRepository>,
}

impl DocumentAccessChecker {
    /// Creates a new access checker.
    pub fn new(documents: Arc<DocumentRepository>, grants: Arc<GrantRepository>) -> Self {
        Self { documents, grants }
    }

    /// Resolve the caller's role. `None` when the document is missing or
    /// the user has neither ownership nor an active grant.
    pub async fn resolve_role(
        &self,
        user_id: UserId,
        document_id: DocumentId,
    ) -> AppResult<Option<DocumentRole>> {
        let Some(document) = self.documents.find_by_id(document_id).await? else {
            debug!(document_id = %document_id, "Access check on missing document");
            return Ok(None);
        };
        if document.is_owned_by(user_id) {
            return Ok(Some(DocumentRole::Owner));
        }
        let grant = self.grants.find_active(document_id, user_id).await?;
        Ok(DocumentRole::resolve(
            &document,
            user_id,
            grant.as_ref(),
            Utc::now(),
        ))
    }
}

#[async_trait]
impl DocumentAccess for DocumentAccessChecker {
    async fn can_view_document(
        &self,
        user_id: UserId,
        document_id: DocumentId,
    ) -> AppResult<bool> {
        let role = self.resolve_role(user_id, document_id).await?;
        Ok(role.is_some_and(|r| r.can_view()))
    }

    async fn can_edit_document(
        &self,
        user_id: UserId,
        document_id: DocumentId,
    ) -> AppResult<bool> {
        let role = self.resolve_role(user_id, document_id).await?;
        Ok(role.is_some_and(|r| r.can_edit()))
    }

    async fn can_manage_document(
        &self,
        user_id: UserId,
        document_id: DocumentId,
    ) -> AppResult<bool> {
        let role = self.resolve_role(user_id, document_id).await?;
        Ok(role.is_some_and(|r| r.can_manage()))
    }

    async fn grantable_permission(
        &self,
        user_id: UserId,
        document_id: DocumentId,
    ) -> AppResult<Option<SharePermission>> {
        let role = self.resolve_role(user_id, document_id).await?;
        Ok(role.map(|r| r.grantable_permission()))
    }
}
