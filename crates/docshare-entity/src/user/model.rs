//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use docshare_core::types::UserId;

/// A registered user account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Email address (unique, compared case-insensitively).
    pub email: String,
    /// Argon2id password hash (never serialized).
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Optional display name.
    pub display_name: Option<String>,
    /// Optional free-form biography.
    pub bio: Option<String>,
    /// Public URL of the current avatar.
    pub avatar_url: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last modified.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The name to show in the UI: the display name, or the email.
    pub fn display(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address (stored lowercased).
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Optional display name.
    pub display_name: Option<String>,
}

/// Profile fields a user may change. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New display name.
    pub display_name: Option<String>,
    /// New biography.
    pub bio: Option<String>,
}

impl UpdateProfile {
    /// Whether the update carries no changes.
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.bio.is_none()
    }
}
