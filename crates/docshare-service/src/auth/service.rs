//! Registration and login service.

use std::sync::Arc;

use tracing::{info, warn};

use docshare_auth::jwt::{AccessToken, JwtEncoder};
use docshare_auth::password::{PasswordHasher, PasswordValidator};
use docshare_core::error::AppError;
use docshare_database::repositories::UserRepository;
use docshare_entity::user::{CreateUser, User};

use crate::share::validation::is_valid_email;

/// Message for any failed login, so it does not reveal which accounts exist.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// An authenticated user with a fresh access token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The user.
    pub user: User,
    /// Access token for subsequent requests.
    pub token: AccessToken,
}

/// Handles account registration and login.
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    hasher: PasswordHasher,
    validator: PasswordValidator,
    encoder: JwtEncoder,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: PasswordHasher,
        validator: PasswordValidator,
        encoder: JwtEncoder,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
        }
    }

    /// Registers a new account and signs it in.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: Option<String>,
    ) -> Result<AuthSession, AppError> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(AppError::validation("Invalid email address"));
        }
        self.validator.validate(password)?;

        let data = CreateUser {
            email: email.to_lowercase(),
            password_hash: self.hasher.hash_password(password)?,
            display_name: display_name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        };
        let user = self.user_repo.create(&data).await?;
        info!(user_id = %user.id, name = user.display(), "User registered");

        let token = self.encoder.generate_access_token(user.id, &user.email)?;
        Ok(AuthSession { user, token })
    }

    /// Verifies credentials and issues an access token.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let Some(user) = self.user_repo.find_by_email(email.trim()).await? else {
            warn!("Login failed: unknown email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };
        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        info!(user_id = %user.id, "User logged in");
        let token = self.encoder.generate_access_token(user.id, &user.email)?;
        Ok(AuthSession { user, token })
    }
}
