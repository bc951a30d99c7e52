//! Document grant repository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use docshare_core::error::{AppError, ErrorKind};
use docshare_core::result::AppResult;
use docshare_core::traits::{GrantStore, ShareDocumentParams};
use docshare_core::types::{DocumentId, SharePermission, UserId};
use docshare_entity::grant::{DocumentGrant, GrantWithUser};

/// Repository for document permission grants.
#[derive(Debug, Clone)]
pub struct GrantRepository {
    pool: PgPool,
}

impl GrantRepository {
    /// Create a new grant repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the user's grant on a document, ignoring expired grants.
    pub async fn find_active(
        &self,
        document_id: DocumentId,
        user_id: UserId,
    ) -> AppResult<Option<DocumentGrant>> {
        sqlx::query_as::<_, DocumentGrant>(
            "SELECT * FROM document_grants WHERE document_id = $1 AND user_id = $2 \
             AND (expires_at IS NULL OR expires_at > NOW())",
        )
        .bind(document_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find grant", e))
    }

    /// List the active grants on a document with grantee details.
    pub async fn list_for_document(&self, document_id: DocumentId) -> AppResult<Vec<GrantWithUser>> {
        sqlx::query_as::<_, GrantWithUser>(
            "SELECT g.id, g.document_id, g.user_id, u.email, u.display_name, g.permission, \
             g.granted_by, g.expires_at, g.created_at \
             FROM document_grants g JOIN users u ON u.id = g.user_id \
             WHERE g.document_id = $1 AND (g.expires_at IS NULL OR g.expires_at > NOW()) \
             ORDER BY g.created_at ASC",
        )
        .bind(document_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list grants", e))
    }

    /// Remove a user's grant. Returns `false` when none existed.
    pub async fn revoke(&self, document_id: DocumentId, user_id: UserId) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM document_grants WHERE document_id = $1 AND user_id = $2")
                .bind(document_id)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to revoke grant", e)
                })?;
        Ok(result.rows_affected() > 0)
    }

    /// Resolve emails to user IDs, case-insensitively.
    async fn resolve_emails(&self, emails: &[String]) -> AppResult<HashMap<String, UserId>> {
        let lowered: Vec<String> = emails.iter().map(|e| e.to_lowercase()).collect();
        let rows: Vec<(UserId, String)> =
            sqlx::query_as("SELECT id, LOWER(email) FROM users WHERE LOWER(email) = ANY($1)")
                .bind(&lowered)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to resolve recipients", e)
                })?;
        Ok(rows.into_iter().map(|(id, email)| (email, id)).collect())
    }
}

/// Insert a grant, or replace the permission and expiry of an existing one.
const UPSERT_GRANT: &str = "INSERT INTO document_grants \
     (document_id, user_id, permission, granted_by, expires_at) \
     VALUES ($1, $2, $3, $4, $5) \
     ON CONFLICT (document_id, user_id) DO UPDATE \
     SET permission = EXCLUDED.permission, granted_by = EXCLUDED.granted_by, \
     expires_at = EXCLUDED.expires_at, created_at = NOW()";

/// Emails from `requested` that are absent from `resolved`, in request order.
fn missing_emails(requested: &[String], resolved: &HashMap<String, UserId>) -> Vec<String> {
    requested
        .iter()
        .filter(|email| !resolved.contains_key(&email.to_lowercase()))
        .cloned()
        .collect()
}

/// Decide which users receive a grant, before anything is written.
///
/// Fails with `NotFound` when any email is unknown and with `Forbidden` when
/// a recipient already holds more than the granter may hand out. On success
/// returns one user per distinct recipient, in request order.
fn plan_grants(
    params: &ShareDocumentParams,
    resolved: &HashMap<String, UserId>,
    existing: &HashMap<UserId, SharePermission>,
) -> AppResult<Vec<UserId>> {
    let missing = missing_emails(&params.user_emails, resolved);
    if !missing.is_empty() {
        return Err(AppError::not_found(format!(
            "Some users not found: {}",
            missing.join(", ")
        )));
    }

    let mut recipients: Vec<UserId> = Vec::with_capacity(params.user_emails.len());
    for email in &params.user_emails {
        let Some(&user_id) = resolved.get(&email.to_lowercase()) else {
            continue;
        };
        if existing
            .get(&user_id)
            .is_some_and(|held| !params.granter_permission.has_at_least(*held))
        {
            return Err(AppError::forbidden(format!(
                "Cannot change access for {email}: they hold a higher permission than you"
            )));
        }
        if !recipients.contains(&user_id) {
            recipients.push(user_id);
        }
    }
    Ok(recipients)
}

#[async_trait]
impl GrantStore for GrantRepository {
    async fn share_document(&self, params: &ShareDocumentParams) -> AppResult<()> {
        let resolved = self.resolve_emails(&params.user_emails).await?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let user_ids: Vec<Uuid> = resolved.values().map(|id| id.into_uuid()).collect();
        let held: Vec<(UserId, SharePermission)> = sqlx::query_as(
            "SELECT user_id, permission FROM document_grants \
             WHERE document_id = $1 AND user_id = ANY($2) \
             AND (expires_at IS NULL OR expires_at > NOW()) FOR UPDATE",
        )
        .bind(params.document_id)
        .bind(&user_ids)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load grants", e))?;
        let existing: HashMap<UserId, SharePermission> = held.into_iter().collect();

        // Dropping `tx` on a refused plan rolls back without writing.
        let recipients = plan_grants(params, &resolved, &existing)?;

        for user_id in &recipients {
            sqlx::query(UPSERT_GRANT)
                .bind(params.document_id)
                .bind(*user_id)
                .bind(params.permission)
                .bind(params.granted_by)
                .bind(params.expires_at)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to write grant", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit grants", e)
        })?;

        debug!(
            document_id = %params.document_id,
            recipients = recipients.len(),
            "Grants written"
        );
        Ok(())
    }
}
