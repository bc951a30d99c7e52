//! Request DTOs with validation.
//!
//! Bodies use camelCase field names on the wire.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Optional display name.
    #[validate(length(max = 100))]
    pub display_name: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create document request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    /// Title.
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
    /// Body (defaults to empty).
    pub content: Option<String>,
}

/// Update document request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateDocumentRequest {
    /// New title.
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
}

/// Update profile request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// Display name.
    #[validate(length(max = 100, message = "Display name must be at most 100 characters"))]
    pub display_name: Option<String>,
    /// Biography.
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_uses_camel_case() {
        let req: RegisterRequest = serde_json::from_value(serde_json::json!({
            "email": "ada@example.com",
            "password": "long enough",
            "displayName": "Ada"
        }))
        .expect("deserialize");
        assert_eq!(req.display_name.as_deref(), Some("Ada"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_title_length_rule() {
        let req = CreateDocumentRequest {
            title: String::new(),
            content: None,
        };
        assert!(req.validate().is_err());

        let req = UpdateDocumentRequest {
            title: Some("x".repeat(256)),
            content: None,
        };
        assert!(req.validate().is_err());
    }
}
