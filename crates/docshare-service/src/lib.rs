//! # docshare-service
//!
//! Business logic service layer for DocShare. Each service orchestrates
//! repositories, the access checker, and the media store to implement
//! application-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod document;
pub mod share;
pub mod user;

pub use auth::AuthService;
pub use context::RequestContext;
pub use document::DocumentService;
pub use share::{GrantService, ShareError, ShareOutcome, ShareService};
pub use user::UserService;
