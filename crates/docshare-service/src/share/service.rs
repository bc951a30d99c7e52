//! The share operation: validate, authorize, persist.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use docshare_core::traits::{DocumentAccess, GrantStore, ShareDocumentParams};
use docshare_core::types::{DocumentId, SharePermission, UserId};

use super::error::ShareError;
use super::validation;
use crate::context::RequestContext;

/// The normalized parameters of a completed share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareOutcome {
    /// The shared document.
    pub document_id: DocumentId,
    /// Recipient emails, in request order.
    pub shared_with: Vec<String>,
    /// Granted permission level.
    pub permission: SharePermission,
    /// When the grants lapse.
    pub expires_at: Option<DateTime<Utc>>,
    /// The granting user.
    pub shared_by: UserId,
}

/// Shares documents with other users by email.
#[derive(Clone)]
pub struct ShareService {
    access: Arc<dyn DocumentAccess>,
    grants: Arc<dyn GrantStore>,
}

impl std::fmt::Debug for ShareService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareService").finish_non_exhaustive()
    }
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(access: Arc<dyn DocumentAccess>, grants: Arc<dyn GrantStore>) -> Self {
        Self { access, grants }
    }

    /// Share `document_id` according to the raw JSON `body`.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// recipient list shape, permission value, email syntax, the caller's
    /// edit rights and permission ceiling, then the expiry. Only then is the
    /// grant store called. A caller who is not the owner may grant at most
    /// their own level.
    pub async fn share_document(
        &self,
        ctx: &RequestContext,
        document_id: DocumentId,
        body: &Value,
    ) -> Result<ShareOutcome, ShareError> {
        let body = body
            .as_object()
            .ok_or_else(|| ShareError::invalid("Request body must be a JSON object"))?;

        let user_emails = validation::parse_user_emails(body.get("userEmails"))?;
        let permission = validation::parse_permission(body.get("permission"))?;

        let invalid = validation::invalid_emails(&user_emails);
        if !invalid.is_empty() {
            warn!(
                user_id = %ctx.user_id,
                document_id = %document_id,
                count = invalid.len(),
                "Share rejected: invalid email addresses"
            );
            return Err(ShareError::InvalidInput {
                message: "Invalid email addresses".to_string(),
                invalid_emails: Some(invalid),
            });
        }

        let can_edit = self
            .access
            .can_edit_document(ctx.user_id, document_id)
            .await
            .map_err(|e| ShareError::internal("Failed to check document permissions", &e))?;
        if !can_edit {
            warn!(
                user_id = %ctx.user_id,
                document_id = %document_id,
                "Share rejected: caller lacks edit rights"
            );
            return Err(ShareError::Forbidden(
                "You do not have permission to share this document".to_string(),
            ));
        }

        let ceiling = self
            .access
            .grantable_permission(ctx.user_id, document_id)
            .await
            .map_err(|e| ShareError::internal("Failed to check document permissions", &e))?;
        let granter_permission = match ceiling {
            Some(level) if level.has_at_least(permission) => level,
            _ => {
                warn!(
                    user_id = %ctx.user_id,
                    document_id = %document_id,
                    requested = %permission,
                    "Share rejected: permission above caller's own"
                );
                return Err(ShareError::Forbidden(
                    "You cannot grant a permission higher than your own".to_string(),
                ));
            }
        };

        let expires_at = validation::parse_expires_at(body.get("expiresAt"), ctx.request_time)?;

        let params = ShareDocumentParams {
            document_id,
            granted_by: ctx.user_id,
            granter_permission,
            user_emails,
            permission,
            expires_at,
        };
        self.grants
            .share_document(&params)
            .await
            .map_err(ShareError::from_store)?;

        info!(
            user_id = %ctx.user_id,
            document_id = %document_id,
            recipients = params.user_emails.len(),
            permission = %permission,
            "Document shared"
        );

        Ok(ShareOutcome {
            document_id,
            shared_with: params.user_emails,
            permission,
            expires_at,
            shared_by: ctx.user_id,
        })
    }
}
