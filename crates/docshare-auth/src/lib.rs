//! # docshare-auth
//!
//! Authentication and document authorization for DocShare.
//!
//! ## Modules
//!
//! - `jwt`: access token creation and validation
//! - `password`: Argon2id password hashing and length policy
//! - `acl`: document access checks backed by ownership and grants

pub mod acl;
pub mod jwt;
pub mod password;

pub use acl::DocumentAccessChecker;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
