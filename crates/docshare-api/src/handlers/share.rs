//! Document sharing handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde_json::Value;

use docshare_service::share::ShareError;

use crate::dto::response::{ApiResponse, GrantResponse, MessageResponse, ShareResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, parse_document_id, parse_user_id};
use crate::state::AppState;

/// POST /api/documents/{id}/share
///
/// The body is taken as raw JSON so that every shape problem is reported
/// through the share validation rules rather than a deserializer message.
pub async fn share_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse<ShareResponse>>, ApiError> {
    let document_id = parse_document_id(&id)?;
    let Json(body) = body.map_err(|rejection| {
        ShareError::invalid(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let outcome = state
        .share_service
        .share_document(&auth, document_id, &body)
        .await?;

    Ok(Json(ApiResponse::with_message(
        ShareResponse::from(outcome),
        "Document shared successfully",
    )))
}

/// GET /api/documents/{id}/shares
pub async fn list_grants(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<GrantResponse>>>, ApiError> {
    let document_id = parse_document_id(&id)?;
    let grants = state.grant_service.list_grants(&auth, document_id).await?;
    Ok(Json(ApiResponse::ok(
        grants.into_iter().map(GrantResponse::from).collect(),
    )))
}

/// DELETE /api/documents/{id}/shares/{user_id}
pub async fn revoke_grant(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let document_id = parse_document_id(&id)?;
    let user_id = parse_user_id(&user_id)?;
    state
        .grant_service
        .revoke_grant(&auth, document_id, user_id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Access revoked".to_string(),
    })))
}
