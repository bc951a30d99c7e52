//! Document CRUD service with access checks.

use std::sync::Arc;

use tracing::info;

use docshare_core::error::AppError;
use docshare_core::traits::DocumentAccess;
use docshare_core::types::DocumentId;
use docshare_core::types::pagination::{PageRequest, PageResponse};
use docshare_database::repositories::DocumentRepository;
use docshare_entity::document::model::MAX_TITLE_LENGTH;
use docshare_entity::document::{CreateDocument, Document, UpdateDocument};

use crate::context::RequestContext;

/// Creates, reads, updates, and deletes documents.
#[derive(Clone)]
pub struct DocumentService {
    document_repo: Arc<DocumentRepository>,
    access: Arc<dyn DocumentAccess>,
}

impl std::fmt::Debug for DocumentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentService")
            .field("document_repo", &self.document_repo)
            .finish_non_exhaustive()
    }
}

/// Trim a title and check its length.
pub fn normalize_title(title: &str) -> Result<String, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::validation("Title must not be empty"));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(AppError::validation(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(title.to_string())
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(document_repo: Arc<DocumentRepository>, access: Arc<dyn DocumentAccess>) -> Self {
        Self {
            document_repo,
            access,
        }
    }

    /// Creates a document owned by the caller.
    pub async fn create_document(
        &self,
        ctx: &RequestContext,
        title: &str,
        content: Option<String>,
    ) -> Result<Document, AppError> {
        let data = CreateDocument {
            owner_id: ctx.user_id,
            title: normalize_title(title)?,
            content: content.unwrap_or_default(),
        };
        let document = self.document_repo.create(&data).await?;
        info!(
            user_id = %ctx.user_id,
            document_id = %document.id,
            "Document created"
        );
        Ok(document)
    }

    /// Lists documents the caller owns or has been granted.
    pub async fn list_documents(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Document>, AppError> {
        self.document_repo.list_accessible(ctx.user_id, &page).await
    }

    /// Fetches a document. Requires view rights.
    pub async fn get_document(
        &self,
        ctx: &RequestContext,
        document_id: DocumentId,
    ) -> Result<Document, AppError> {
        if !self
            .access
            .can_view_document(ctx.user_id, document_id)
            .await?
        {
            return Err(AppError::forbidden("You do not have access to this document"));
        }
        self.document_repo
            .find_by_id(document_id)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found"))
    }

    /// Updates a document. Requires edit rights.
    pub async fn update_document(
        &self,
        ctx: &RequestContext,
        document_id: DocumentId,
        mut update: UpdateDocument,
    ) -> Result<Document, AppError> {
        if let Some(title) = update.title.as_deref() {
            update.title = Some(normalize_title(title)?);
        }
        if !self
            .access
            .can_edit_document(ctx.user_id, document_id)
            .await?
        {
            return Err(AppError::forbidden(
                "You do not have permission to edit this document",
            ));
        }
        if update.is_empty() {
            return self.get_document(ctx, document_id).await;
        }

        let document = self.document_repo.update(document_id, &update).await?;
        info!(
            user_id = %ctx.user_id,
            document_id = %document_id,
            "Document updated"
        );
        Ok(document)
    }

    /// Deletes a document and, by cascade, its grants. Requires ownership
    /// or an `ADMIN` grant.
    pub async fn delete_document(
        &self,
        ctx: &RequestContext,
        document_id: DocumentId,
    ) -> Result<(), AppError> {
        if !self
            .access
            .can_manage_document(ctx.user_id, document_id)
            .await?
        {
            return Err(AppError::forbidden(
                "You do not have permission to delete this document",
            ));
        }
        if !self.document_repo.delete(document_id).await? {
            return Err(AppError::not_found("Document not found"));
        }
        info!(
            user_id = %ctx.user_id,
            document_id = %document_id,
            "Document deleted"
        );
        Ok(())
    }
}
