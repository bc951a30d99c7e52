//! # docshare-entity
//!
//! Domain entity models for DocShare. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod document;
pub mod grant;
pub mod user;

pub use docshare_core::types::SharePermission;
