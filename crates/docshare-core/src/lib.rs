//! # docshare-core
//!
//! Core crate for DocShare. Contains configuration schemas, typed
//! identifiers, the share permission level, pagination types, the
//! collaborator traits implemented by the database/auth/storage crates,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other DocShare crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
