//! Profile and avatar handlers.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};

use docshare_entity::user::UpdateProfile;
use docshare_service::user::AvatarUpload;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// Multipart field names accepted for the avatar file.
const AVATAR_FIELDS: [&str; 2] = ["avatar", "file"];

/// GET /api/users/me
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/users/me
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .user_service
        .update_profile(
            &auth,
            UpdateProfile {
                display_name: req.display_name,
                bio: req.bio,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /api/users/me/avatar
pub async fn upload_avatar(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let mut multipart =
        multipart.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {e}")))?
    {
        if !field.name().is_some_and(|n| AVATAR_FIELDS.contains(&n)) {
            continue;
        }
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read avatar: {e}")))?;
        upload = Some(AvatarUpload { content_type, data });
        break;
    }

    let upload = upload
        .ok_or_else(|| ApiError::bad_request("Missing multipart field 'avatar'"))?;
    let user = state.user_service.upload_avatar(&auth, upload).await?;
    Ok(Json(ApiResponse::with_message(
        UserResponse::from(user),
        "Avatar updated",
    )))
}
