//! # docshare-storage
//!
//! Media storage providers for DocShare. Avatars and other user media are
//! written through the [`MediaStore`](docshare_core::traits::MediaStore)
//! trait; the local filesystem provider is the only backend shipped.

pub mod providers;

pub use providers::LocalMediaStore;
