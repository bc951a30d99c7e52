//! Collaborator traits defined in `docshare-core` and implemented by other crates.
//!
//! The sharing flow only talks to these seams, so the permission store,
//! the grant persistence, and the media host can be swapped (or faked in
//! tests) without touching the business logic.

pub mod access;
pub mod grant;
pub mod media;

pub use access::DocumentAccess;
pub use grant::{GrantStore, ShareDocumentParams};
pub use media::{MediaObject, MediaStore};
