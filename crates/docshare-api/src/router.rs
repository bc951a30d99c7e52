//! Route definitions for the DocShare HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(document_routes())
        .merge(share_routes())
        .merge(health_routes());

    let mut router = Router::new().nest("/api", api_routes);

    // Serve locally stored media when it is published under a path on this host.
    let media_path = state.config.storage.public_base_url.trim_end_matches('/');
    if media_path.starts_with('/') && media_path.len() > 1 {
        router = router.nest_service(media_path, ServeDir::new(&state.config.storage.media_root));
    }

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    router
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Profile self-service endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/me",
            get(handlers::user::get_profile).put(handlers::user::update_profile),
        )
        .route("/users/me/avatar", post(handlers::user::upload_avatar))
}

/// Document CRUD
fn document_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/documents",
            get(handlers::document::list_documents).post(handlers::document::create_document),
        )
        .route(
            "/documents/{id}",
            get(handlers::document::get_document)
                .put(handlers::document::update_document)
                .delete(handlers::document::delete_document),
        )
}

/// Sharing and grant management
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/documents/{id}/share", post(handlers::share::share_document))
        .route("/documents/{id}/shares", get(handlers::share::list_grants))
        .route(
            "/documents/{id}/shares/{user_id}",
            axum::routing::delete(handlers::share::revoke_grant),
        )
}

/// Health checks (no auth)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
