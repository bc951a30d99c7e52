//! User profile and avatar service.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use docshare_core::config::StorageConfig;
use docshare_core::error::AppError;
use docshare_core::traits::MediaStore;
use docshare_database::repositories::UserRepository;
use docshare_entity::user::{UpdateProfile, User};

use crate::context::RequestContext;

/// Maximum display name length in characters.
pub const MAX_DISPLAY_NAME_LENGTH: usize = 100;
/// Maximum bio length in characters.
pub const MAX_BIO_LENGTH: usize = 500;

/// An uploaded avatar image, as received from the client.
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    /// Declared MIME type.
    pub content_type: String,
    /// Raw image bytes.
    pub data: Bytes,
}

/// Map an accepted image MIME type to its file extension.
pub fn avatar_extension(content_type: &str) -> Option<&'static str> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.as_str() {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

/// Check profile field lengths.
pub fn validate_profile(update: &UpdateProfile) -> Result<(), AppError> {
    if let Some(name) = &update.display_name {
        if name.chars().count() > MAX_DISPLAY_NAME_LENGTH {
            return Err(AppError::validation(format!(
                "Display name must be at most {MAX_DISPLAY_NAME_LENGTH} characters"
            )));
        }
    }
    if let Some(bio) = &update.bio {
        if bio.chars().count() > MAX_BIO_LENGTH {
            return Err(AppError::validation(format!(
                "Bio must be at most {MAX_BIO_LENGTH} characters"
            )));
        }
    }
    Ok(())
}

/// Reads and updates the caller's profile and avatar.
#[derive(Debug, Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    media: Arc<dyn MediaStore>,
    max_avatar_size_bytes: u64,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        media: Arc<dyn MediaStore>,
        config: &StorageConfig,
    ) -> Self {
        Self {
            user_repo,
            media,
            max_avatar_size_bytes: config.max_avatar_size_bytes,
        }
    }

    /// Largest accepted avatar, in bytes.
    pub fn max_avatar_size_bytes(&self) -> u64 {
        self.max_avatar_size_bytes
    }

    /// Returns the caller's profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates display name and/or bio.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        update: UpdateProfile,
    ) -> Result<User, AppError> {
        validate_profile(&update)?;
        if update.is_empty() {
            return self.get_profile(ctx).await;
        }
        let user = self.user_repo.update_profile(ctx.user_id, &update).await?;
        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }

    /// Stores a new avatar and points the profile at it. The previous
    /// avatar object is removed on a best-effort basis.
    pub async fn upload_avatar(
        &self,
        ctx: &RequestContext,
        upload: AvatarUpload,
    ) -> Result<User, AppError> {
        let ext = avatar_extension(&upload.content_type).ok_or_else(|| {
            AppError::validation(format!(
                "Unsupported avatar type '{}'. Allowed: image/png, image/jpeg, image/gif, image/webp",
                upload.content_type
            ))
        })?;
        if upload.data.is_empty() {
            return Err(AppError::validation("Avatar file is empty"));
        }
        if upload.data.len() as u64 > self.max_avatar_size_bytes {
            return Err(AppError::payload_too_large(format!(
                "Avatar exceeds the maximum size of {} bytes",
                self.max_avatar_size_bytes
            )));
        }

        let current = self.get_profile(ctx).await?;

        let key = format!("avatars/{}/{}.{ext}", ctx.user_id, Uuid::new_v4());
        let stored = self
            .media
            .put(&key, upload.data, &upload.content_type)
            .await?;
        let user = self.user_repo.set_avatar(ctx.user_id, &stored.url).await?;

        if let Some(old_key) = current
            .avatar_url
            .as_deref()
            .and_then(|url| self.media.key_for_url(url))
        {
            if let Err(e) = self.media.delete(&old_key).await {
                warn!(user_id = %ctx.user_id, key = %old_key, error = %e, "Failed to delete old avatar");
            }
        }

        info!(
            user_id = %ctx.user_id,
            key = %stored.key,
            bytes = stored.size_bytes,
            "Avatar updated"
        );
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_extension() {
        assert_eq!(avatar_extension("image/png"), Some("png"));
        assert_eq!(avatar_extension("IMAGE/JPEG"), Some("jpg"));
        assert_eq!(avatar_extension("image/webp; charset=binary"), Some("webp"));
        assert_eq!(avatar_extension("image/gif"), Some("gif"));
        assert_eq!(avatar_extension("image/svg+xml"), None);
        assert_eq!(avatar_extension("application/pdf"), None);
    }

    #[test]
    fn test_profile_lengths() {
        let ok = UpdateProfile {
            display_name: Some("a".repeat(100)),
            bio: Some("b".repeat(500)),
        };
        assert!(validate_profile(&ok).is_ok());

        let long_name = UpdateProfile {
            display_name: Some("a".repeat(101)),
            bio: None,
        };
        assert!(validate_profile(&long_name).is_err());

        let long_bio = UpdateProfile {
            display_name: None,
            bio: Some("b".repeat(501)),
        };
        assert!(validate_profile(&long_bio).is_err());
    }
}
