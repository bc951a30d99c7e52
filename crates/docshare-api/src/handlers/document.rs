//! Document CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use docshare_entity::document::UpdateDocument;

use crate::dto::request::{CreateDocumentRequest, UpdateDocumentRequest};
use crate::dto::response::{ApiResponse, DocumentResponse, MessageResponse, PaginatedResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams, ValidatedJson, parse_document_id};
use crate::state::AppState;

/// GET /api/documents
pub async fn list_documents(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<DocumentResponse>>>, ApiError> {
    let page = state
        .document_service
        .list_documents(&auth, params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(
        page,
        DocumentResponse::from,
    ))))
}

/// POST /api/documents
pub async fn create_document(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DocumentResponse>>), ApiError> {
    let doc = state
        .document_service
        .create_document(&auth, &req.title, req.content)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(doc.into()))))
}

/// GET /api/documents/{id}
pub async fn get_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DocumentResponse>>, ApiError> {
    let id = parse_document_id(&id)?;
    let doc = state.document_service.get_document(&auth, id).await?;
    Ok(Json(ApiResponse::ok(doc.into())))
}

/// PUT /api/documents/{id}
pub async fn update_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateDocumentRequest>,
) -> Result<Json<ApiResponse<DocumentResponse>>, ApiError> {
    let id = parse_document_id(&id)?;
    let doc = state
        .document_service
        .update_document(
            &auth,
            id,
            UpdateDocument {
                title: req.title,
                content: req.content,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(doc.into())))
}

/// DELETE /api/documents/{id}
pub async fn delete_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id = parse_document_id(&id)?;
    state.document_service.delete_document(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Document deleted".to_string(),
    })))
}
