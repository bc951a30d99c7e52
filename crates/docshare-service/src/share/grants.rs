//! Listing and revoking existing grants.

use std::sync::Arc;

use tracing::info;

use docshare_core::error::AppError;
use docshare_core::traits::DocumentAccess;
use docshare_core::types::{DocumentId, UserId};
use docshare_database::repositories::GrantRepository;
use docshare_entity::grant::GrantWithUser;

use crate::context::RequestContext;

/// Manages the grants already recorded on a document.
#[derive(Clone)]
pub struct GrantService {
    access: Arc<dyn DocumentAccess>,
    grant_repo: Arc<GrantRepository>,
}

impl std::fmt::Debug for GrantService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrantService")
            .field("grant_repo", &self.grant_repo)
            .finish_non_exhaustive()
    }
}

impl GrantService {
    /// Creates a new grant service.
    pub fn new(access: Arc<dyn DocumentAccess>, grant_repo: Arc<GrantRepository>) -> Self {
        Self { access, grant_repo }
    }

    /// Lists the active grants on a document. Requires view rights.
    pub async fn list_grants(
        &self,
        ctx: &RequestContext,
        document_id: DocumentId,
    ) -> Result<Vec<GrantWithUser>, AppError> {
        if !self
            .access
            .can_view_document(ctx.user_id, document_id)
            .await?
        {
            return Err(AppError::forbidden(
                "You do not have access to this document",
            ));
        }
        self.grant_repo.list_for_document(document_id).await
    }

    /// Revokes a user's grant. Requires ownership or an `ADMIN` grant.
    pub async fn revoke_grant(
        &self,
        ctx: &RequestContext,
        document_id: DocumentId,
        user_id: UserId,
    ) -> Result<(), AppError> {
        if !self
            .access
            .can_manage_document(ctx.user_id, document_id)
            .await?
        {
            return Err(AppError::forbidden(
                "You do not have permission to manage sharing on this document",
            ));
        }
        if !self.grant_repo.revoke(document_id, user_id).await? {
            return Err(AppError::not_found("Grant not found"));
        }

        info!(
            user_id = %ctx.user_id,
            document_id = %document_id,
            revoked_user = %user_id,
            "Grant revoked"
        );
        Ok(())
    }
}
