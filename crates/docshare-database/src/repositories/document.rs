//! Document repository implementation.

use sqlx::PgPool;

use docshare_core::error::{AppError, ErrorKind};
use docshare_core::result::AppResult;
use docshare_core::types::pagination::{PageRequest, PageResponse};
use docshare_core::types::{DocumentId, UserId};
use docshare_entity::document::{CreateDocument, Document, UpdateDocument};

/// Predicate selecting documents a user owns or holds an active grant on.
const ACCESSIBLE: &str = "d.owner_id = $1 OR EXISTS (\
     SELECT 1 FROM document_grants g WHERE g.document_id = d.id AND g.user_id = $1 \
     AND (g.expires_at IS NULL OR g.expires_at > NOW()))";

/// Repository for document CRUD operations.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    /// Create a new document repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a document by ID.
    pub async fn find_by_id(&self, id: DocumentId) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find document", e))
    }

    /// List documents the user owns or has been granted, newest update first.
    pub async fn list_accessible(
        &self,
        user_id: UserId,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Document>> {
        let count_sql = format!("SELECT COUNT(*) FROM documents d WHERE {ACCESSIBLE}");
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count documents", e))?;

        let list_sql = format!(
            "SELECT d.* FROM documents d WHERE {ACCESSIBLE} \
             ORDER BY d.updated_at DESC LIMIT $2 OFFSET $3"
        );
        let documents = sqlx::query_as::<_, Document>(&list_sql)
            .bind(user_id)
            .bind(i64::try_from(page.limit()).unwrap_or(i64::MAX))
            .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list documents", e))?;

        Ok(PageResponse::new(
            documents,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new document.
    pub async fn create(&self, data: &CreateDocument) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "INSERT INTO documents (owner_id, title, content) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.title)
        .bind(&data.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create document", e))
    }

    /// Update a document; `None` fields are left unchanged.
    pub async fn update(&self, id: DocumentId, data: &UpdateDocument) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "UPDATE documents SET title = COALESCE($2, title), \
             content = COALESCE($3, content), updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.content)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update document", e))?
        .ok_or_else(|| AppError::not_found("Document not found"))
    }

    /// Delete a document. Its grants go with it.
    pub async fn delete(&self, id: DocumentId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete document", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
