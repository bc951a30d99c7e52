//! Repository implementations for all DocShare entities.

pub mod document;
pub mod grant;
pub mod user;

pub use document::DocumentRepository;
pub use grant::GrantRepository;
pub use user::UserRepository;

use docshare_core::error::{AppError, ErrorKind};

/// Map a sqlx error to an [`AppError`], turning unique-key violations into
/// conflicts.
pub(crate) fn map_write_error(err: sqlx::Error, context: &str, conflict: &str) -> AppError {
    let is_unique = err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());
    if is_unique {
        AppError::with_source(ErrorKind::Conflict, conflict, err)
    } else {
        AppError::with_source(ErrorKind::Database, context, err)
    }
}
