//! Document sharing: request validation, authorization, and grant management.

pub mod error;
pub mod grants;
pub mod service;
pub mod validation;

pub use error::ShareError;
pub use grants::GrantService;
pub use service::{ShareOutcome, ShareService};
