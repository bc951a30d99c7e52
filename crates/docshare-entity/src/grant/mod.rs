//! Document grant entities and the access roles derived from them.

pub mod model;
pub mod role;

pub use model::{DocumentGrant, GrantWithUser};
pub use role::DocumentRole;
