//! HTTP tests for `POST /api/documents/{id}/share` and grant management.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use docshare_core::error::AppError;
use docshare_core::types::{DocumentId, SharePermission, UserId};

use common::{TestApp, assert_error};

struct Fixture {
    app: TestApp,
    user_id: UserId,
    document_id: DocumentId,
    token: String,
}

/// An app where the caller may edit one document and three recipients exist.
async fn fixture(permission: SharePermission) -> Fixture {
    let app = TestApp::new().await;
    let user_id = UserId::new();
    let document_id = DocumentId::new();
    app.access.allow(user_id, document_id, permission);
    for email in ["alice@example.com", "bob@example.com", "carol@example.com"] {
        app.grants.register(email);
    }
    let token = app.token_for(user_id, "owner@example.com");
    Fixture {
        app,
        user_id,
        document_id,
        token,
    }
}

fn share_uri(document_id: DocumentId) -> String {
    format!("/api/documents/{document_id}/share")
}

#[tokio::test]
async fn test_share_with_write_permission() {
    let f = fixture(SharePermission::Write).await;

    let response = f
        .app
        .request(
            "POST",
            &share_uri(f.document_id),
            Some(json!({
                "userEmails": ["alice@example.com", "bob@example.com", "carol@example.com"],
                "permission": "WRITE",
            })),
            Some(&f.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "body: {}", response.body);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Document shared successfully");

    let data = &response.body["data"];
    assert_eq!(data["documentId"], f.document_id.to_string());
    assert_eq!(
        data["sharedWith"],
        json!(["alice@example.com", "bob@example.com", "carol@example.com"])
    );
    assert_eq!(data["permission"], "WRITE");
    assert_eq!(data["sharedBy"], f.user_id.to_string());
    assert!(data.get("expiresAt").is_none());

    let calls = f.app.grants.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].granted_by, f.user_id);
    assert_eq!(calls[0].permission, SharePermission::Write);
    assert_eq!(calls[0].expires_at, None);
}

#[tokio::test]
async fn test_share_with_future_expiry_echoes_timestamp() {
    let f = fixture(SharePermission::Admin).await;
    let expires = (Utc::now() + Duration::days(7)).to_rfc3339();

    let response = f
        .app
        .request(
            "POST",
            &share_uri(f.document_id),
            Some(json!({
                "userEmails": ["alice@example.com"],
                "permission": "READ",
                "expiresAt": expires,
            })),
            Some(&f.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "body: {}", response.body);
    assert_eq!(response.body["data"]["permission"], "READ");
    assert!(response.body["data"]["expiresAt"].is_string());
    assert!(f.app.grants.calls()[0].expires_at.is_some());
}

#[tokio::test]
async fn test_null_expiry_is_treated_as_absent() {
    let f = fixture(SharePermission::Write).await;

    let response = f
        .app
        .request(
            "POST",
            &share_uri(f.document_id),
            Some(json!({
                "userEmails": ["bob@example.com"],
                "permission": "WRITE",
                "expiresAt": null,
            })),
            Some(&f.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "body: {}", response.body);
    assert!(response.body["data"].get("expiresAt").is_none());
}

#[tokio::test]
async fn test_empty_email_list_is_rejected() {
    let f = fixture(SharePermission::Write).await;

    let response = f
        .app
        .request(
            "POST",
            &share_uri(f.document_id),
            Some(json!({ "userEmails": [], "permission": "READ" })),
            Some(&f.token),
        )
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "INVALID_INPUT");
    assert!(f.app.grants.calls().is_empty());
}

#[tokio::test]
async fn test_missing_or_mistyped_emails_are_rejected() {
    let f = fixture(SharePermission::Write).await;

    for body in [
        json!({ "permission": "READ" }),
        json!({ "userEmails": "alice@example.com", "permission": "READ" }),
        json!({ "userEmails": [42], "permission": "READ" }),
        json!(["alice@example.com"]),
    ] {
        let response = f
            .app
            .request("POST", &share_uri(f.document_id), Some(body), Some(&f.token))
            .await;
        assert_error(&response, StatusCode::BAD_REQUEST, "INVALID_INPUT");
    }
    assert!(f.app.grants.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_permission_is_rejected() {
    let f = fixture(SharePermission::Write).await;

    for permission in [json!("OWNER"), json!("write"), json!(null), json!(1)] {
        let response = f
            .app
            .request(
                "POST",
                &share_uri(f.document_id),
                Some(json!({ "userEmails": ["alice@example.com"], "permission": permission })),
                Some(&f.token),
            )
            .await;
        assert_error(&response, StatusCode::BAD_REQUEST, "INVALID_INPUT");
    }
}

#[tokio::test]
async fn test_invalid_emails_are_listed() {
    let f = fixture(SharePermission::Write).await;

    let response = f
        .app
        .request(
            "POST",
            &share_uri(f.document_id),
            Some(json!({
                "userEmails": ["alice@example.com", "not-an-email", "x@y"],
                "permission": "READ",
            })),
            Some(&f.token),
        )
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "INVALID_INPUT");
    assert_eq!(response.body["error"], "Invalid email addresses");
    assert_eq!(response.body["invalidEmails"], json!(["not-an-email", "x@y"]));
    assert!(f.app.grants.calls().is_empty());
}

#[tokio::test]
async fn test_reader_cannot_share() {
    let f = fixture(SharePermission::Read).await;

    let response = f
        .app
        .request(
            "POST",
            &share_uri(f.document_id),
            Some(json!({ "userEmails": ["alice@example.com"], "permission": "READ" })),
            Some(&f.token),
        )
        .await;

    assert_error(&response, StatusCode::FORBIDDEN, "FORBIDDEN");
    assert_eq!(
        response.body["error"],
        "You do not have permission to share this document"
    );
    assert!(f.app.grants.calls().is_empty());
}

#[tokio::test]
async fn test_writer_cannot_grant_admin_to_themselves() {
    let f = fixture(SharePermission::Write).await;
    f.app.grants.register("writer@example.com");

    let response = f
        .app
        .request(
            "POST",
            &share_uri(f.document_id),
            Some(json!({ "userEmails": ["writer@example.com"], "permission": "ADMIN" })),
            Some(&f.token),
        )
        .await;

    assert_error(&response, StatusCode::FORBIDDEN, "FORBIDDEN");
    assert_eq!(
        response.body["error"],
        "You cannot grant a permission higher than your own"
    );
    assert!(f.app.grants.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_document_is_forbidden() {
    let f = fixture(SharePermission::Write).await;

    let response = f
        .app
        .request(
            "POST",
            &share_uri(DocumentId::new()),
            Some(json!({ "userEmails": ["alice@example.com"], "permission": "READ" })),
            Some(&f.token),
        )
        .await;

    assert_error(&response, StatusCode::FORBIDDEN, "FORBIDDEN");
}

#[tokio::test]
async fn test_permission_check_precedes_expiry_check() {
    let f = fixture(SharePermission::Read).await;

    let response = f
        .app
        .request(
            "POST",
            &share_uri(f.document_id),
            Some(json!({
                "userEmails": ["alice@example.com"],
                "permission": "READ",
                "expiresAt": "2001-01-01T00:00:00Z",
            })),
            Some(&f.token),
        )
        .await;

    assert_error(&response, StatusCode::FORBIDDEN, "FORBIDDEN");
}

#[tokio::test]
async fn test_past_expiry_is_rejected() {
    let f = fixture(SharePermission::Write).await;

    let response = f
        .app
        .request(
            "POST",
            &share_uri(f.document_id),
            Some(json!({
                "userEmails": ["alice@example.com"],
                "permission": "READ",
                "expiresAt": "2001-01-01T00:00:00Z",
            })),
            Some(&f.token),
        )
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "INVALID_INPUT");
    assert_eq!(
        response.body["error"],
        "Expiration date must be in the future"
    );
}

#[tokio::test]
async fn test_unparsable_expiry_is_rejected() {
    let f = fixture(SharePermission::Write).await;

    let response = f
        .app
        .request(
            "POST",
            &share_uri(f.document_id),
            Some(json!({
                "userEmails": ["alice@example.com"],
                "permission": "READ",
                "expiresAt": "next tuesday",
            })),
            Some(&f.token),
        )
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "INVALID_INPUT");
    assert_eq!(response.body["error"], "Invalid expiration date");
}

#[tokio::test]
async fn test_unregistered_recipient_is_not_found() {
    let f = fixture(SharePermission::Write).await;

    let response = f
        .app
        .request(
            "POST",
            &share_uri(f.document_id),
            Some(json!({
                "userEmails": ["alice@example.com", "stranger@example.com"],
                "permission": "READ",
            })),
            Some(&f.token),
        )
        .await;

    assert_error(&response, StatusCode::NOT_FOUND, "NOT_FOUND");
    assert!(
        response.body["error"]
            .as_str()
            .is_some_and(|e| e.contains("stranger@example.com"))
    );
    assert!(f.app.grants.calls().is_empty());
}

#[tokio::test]
async fn test_store_failure_is_internal_with_details() {
    let f = fixture(SharePermission::Write).await;
    f.app
        .grants
        .fail_with(AppError::database("connection reset by peer"));

    let response = f
        .app
        .request(
            "POST",
            &share_uri(f.document_id),
            Some(json!({ "userEmails": ["alice@example.com"], "permission": "READ" })),
            Some(&f.token),
        )
        .await;

    assert_error(&response, StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL");
    assert_eq!(response.body["error"], "Failed to share document");
    assert!(
        response.body["details"]
            .as_str()
            .is_some_and(|d| d.contains("connection reset by peer"))
    );
}

#[tokio::test]
async fn test_share_requires_authentication() {
    let f = fixture(SharePermission::Write).await;

    let response = f
        .app
        .request(
            "POST",
            &share_uri(f.document_id),
            Some(json!({ "userEmails": ["alice@example.com"], "permission": "READ" })),
            None,
        )
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
    assert!(f.app.grants.calls().is_empty());
}

#[tokio::test]
async fn test_malformed_document_id_is_rejected() {
    let f = fixture(SharePermission::Write).await;

    let response = f
        .app
        .request(
            "POST",
            "/api/documents/not-a-uuid/share",
            Some(json!({ "userEmails": ["alice@example.com"], "permission": "READ" })),
            Some(&f.token),
        )
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "INVALID_INPUT");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let f = fixture(SharePermission::Write).await;

    let response = f
        .app
        .send_raw(
            "POST",
            &share_uri(f.document_id),
            Some("{\"userEmails\": [".to_string()),
            "application/json",
            Some(&f.token),
        )
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "INVALID_INPUT");
}

#[tokio::test]
async fn test_listing_grants_requires_view_rights() {
    let f = fixture(SharePermission::Write).await;

    let response = f
        .app
        .request(
            "GET",
            &format!("/api/documents/{}/shares", DocumentId::new()),
            None,
            Some(&f.token),
        )
        .await;

    assert_error(&response, StatusCode::FORBIDDEN, "FORBIDDEN");
}

#[tokio::test]
async fn test_revoking_requires_manage_rights() {
    let f = fixture(SharePermission::Write).await;

    let response = f
        .app
        .request(
            "DELETE",
            &format!("/api/documents/{}/shares/{}", f.document_id, UserId::new()),
            None,
            Some(&f.token),
        )
        .await;

    assert_error(&response, StatusCode::FORBIDDEN, "FORBIDDEN");
}

#[tokio::test]
async fn test_revoke_with_malformed_user_id_is_rejected() {
    let f = fixture(SharePermission::Admin).await;

    let response = f
        .app
        .request(
            "DELETE",
            &format!("/api/documents/{}/shares/bogus", f.document_id),
            None,
            Some(&f.token),
        )
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "INVALID_INPUT");
}
