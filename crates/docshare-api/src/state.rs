//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use docshare_auth::acl::DocumentAccessChecker;
use docshare_auth::jwt::{JwtDecoder, JwtEncoder};
use docshare_auth::password::{PasswordHasher, PasswordValidator};
use docshare_core::config::AppConfig;
use docshare_core::traits::{DocumentAccess, GrantStore, MediaStore};
use docshare_database::DatabasePool;
use docshare_database::repositories::{DocumentRepository, GrantRepository, UserRepository};
use docshare_service::{AuthService, DocumentService, GrantService, ShareService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db: DatabasePool,
    /// Media store for avatars
    pub media: Arc<dyn MediaStore>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Registration and login
    pub auth_service: Arc<AuthService>,
    /// Document CRUD
    pub document_service: Arc<DocumentService>,
    /// Document sharing
    pub share_service: Arc<ShareService>,
    /// Grant listing and revocation
    pub grant_service: Arc<GrantService>,
    /// Profile and avatar
    pub user_service: Arc<UserService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db)
            .field("media", &self.media)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wires the production collaborators: the database-backed access
    /// checker and grant repository.
    pub fn new(config: AppConfig, db: DatabasePool, media: Arc<dyn MediaStore>) -> Self {
        let pool = db.pool().clone();
        let document_repo = Arc::new(DocumentRepository::new(pool.clone()));
        let grant_repo = Arc::new(GrantRepository::new(pool));
        let access = Arc::new(DocumentAccessChecker::new(
            Arc::clone(&document_repo),
            Arc::clone(&grant_repo),
        ));
        Self::with_collaborators(config, db, media, access, grant_repo)
    }

    /// Wires the state around the given access checker and grant store.
    pub fn with_collaborators(
        config: AppConfig,
        db: DatabasePool,
        media: Arc<dyn MediaStore>,
        access: Arc<dyn DocumentAccess>,
        grants: Arc<dyn GrantStore>,
    ) -> Self {
        let pool = db.pool().clone();
        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let document_repo = Arc::new(DocumentRepository::new(pool.clone()));
        let grant_repo = Arc::new(GrantRepository::new(pool));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repo),
            PasswordHasher::new(),
            PasswordValidator::new(&config.auth),
            JwtEncoder::new(&config.auth),
        ));
        let document_service = Arc::new(DocumentService::new(
            Arc::clone(&document_repo),
            Arc::clone(&access),
        ));
        let share_service = Arc::new(ShareService::new(Arc::clone(&access), grants));
        let grant_service = Arc::new(GrantService::new(Arc::clone(&access), grant_repo));
        let user_service = Arc::new(UserService::new(
            user_repo,
            Arc::clone(&media),
            &config.storage,
        ));

        Self {
            jwt_decoder: Arc::new(JwtDecoder::new(&config.auth)),
            config: Arc::new(config),
            db,
            media,
            auth_service,
            document_service,
            share_service,
            grant_service,
            user_service,
        }
    }
}
