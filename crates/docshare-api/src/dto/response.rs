//! Response DTOs.
//!
//! Every success body is `{ "success": true, "data": ..., "message"? }`
//! with camelCase fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docshare_auth::jwt::AccessToken;
use docshare_core::types::pagination::PageResponse;
use docshare_core::types::{DocumentId, GrantId, SharePermission, UserId};
use docshare_entity::document::Document;
use docshare_entity::grant::GrantWithUser;
use docshare_entity::user::User;
use docshare_service::share::ShareOutcome;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    /// Creates a successful response with a message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

/// Paginated list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T: Serialize> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Total item count.
    pub total: u64,
    /// Current page.
    pub page: u64,
    /// Items per page.
    pub per_page: u64,
    /// Total pages.
    pub total_pages: u64,
}

impl<T: Serialize> PaginatedResponse<T> {
    /// Converts a repository page, mapping each item.
    pub fn from_page<U: Serialize>(page: PageResponse<U>, f: impl FnMut(U) -> T) -> Self {
        Self {
            items: page.items.into_iter().map(f).collect(),
            total: page.total_items,
            page: page.page,
            per_page: page.page_size,
            total_pages: page.total_pages,
        }
    }
}

/// User profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Email.
    pub email: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Biography.
    pub bio: Option<String>,
    /// Avatar URL.
    pub avatar_url: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
            bio: user.bio,
            avatar_url: user.avatar_url,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Register/login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Bearer token.
    pub access_token: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
    /// The signed-in user.
    pub user: UserResponse,
}

impl AuthResponse {
    /// Builds the response from a user and token.
    pub fn new(user: User, token: AccessToken) -> Self {
        Self {
            access_token: token.token,
            expires_at: token.expires_at,
            user: user.into(),
        }
    }
}

/// Document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    /// Document ID.
    pub id: DocumentId,
    /// Owner.
    pub owner_id: UserId,
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponse {
    fn from(doc: Document) -> Self {
        Self {
            id: doc.id,
            owner_id: doc.owner_id,
            title: doc.title,
            content: doc.content,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

/// Result of a share.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    /// The shared document.
    pub document_id: DocumentId,
    /// Recipient emails, in request order.
    pub shared_with: Vec<String>,
    /// Granted permission.
    pub permission: SharePermission,
    /// Expiry, omitted when the grants never lapse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// The granting user.
    pub shared_by: UserId,
}

impl From<ShareOutcome> for ShareResponse {
    fn from(outcome: ShareOutcome) -> Self {
        Self {
            document_id: outcome.document_id,
            shared_with: outcome.shared_with,
            permission: outcome.permission,
            expires_at: outcome.expires_at,
            shared_by: outcome.shared_by,
        }
    }
}

/// A grant on a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantResponse {
    /// Grant ID.
    pub id: GrantId,
    /// Grantee.
    pub user_id: UserId,
    /// Grantee email.
    pub email: String,
    /// Grantee display name.
    pub display_name: Option<String>,
    /// Permission level.
    pub permission: SharePermission,
    /// Granting user.
    pub granted_by: UserId,
    /// Expiry.
    pub expires_at: Option<DateTime<Utc>>,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<GrantWithUser> for GrantResponse {
    fn from(grant: GrantWithUser) -> Self {
        Self {
            id: grant.id,
            user_id: grant.user_id,
            email: grant.email,
            display_name: grant.display_name,
            permission: grant.permission,
            granted_by: grant.granted_by,
            expires_at: grant.expires_at,
            created_at: grant.created_at,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Basic health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok".
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Health response with dependency checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// "ok" or "degraded".
    pub status: String,
    /// Crate version.
    pub version: String,
    /// "connected" or "unavailable".
    pub database: String,
    /// "available" or "unavailable".
    pub storage: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_response_omits_missing_expiry() {
        let body = ShareResponse {
            document_id: DocumentId::new(),
            shared_with: vec!["a@b.co".to_string()],
            permission: SharePermission::Read,
            expires_at: None,
            shared_by: UserId::new(),
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert!(json.get("expiresAt").is_none());
        assert_eq!(json["permission"], "READ");
        assert!(json.get("sharedWith").is_some());
    }
}
