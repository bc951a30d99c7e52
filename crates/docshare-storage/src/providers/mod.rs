//! Media storage provider implementations.

pub mod local;

pub use local::LocalMediaStore;
