//! Core type definitions used across the DocShare workspace.

pub mod id;
pub mod pagination;
pub mod permission;

pub use id::*;
pub use pagination::{PageRequest, PageResponse};
pub use permission::SharePermission;
