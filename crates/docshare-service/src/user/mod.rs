//! Profile and avatar management.

pub mod service;

pub use service::{AvatarUpload, UserService};
