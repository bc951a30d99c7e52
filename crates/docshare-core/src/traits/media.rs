//! Media hosting used for profile avatars.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// A stored media object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaObject {
    /// Provider-relative key, e.g. `avatars/<user>/<uuid>.png`.
    pub key: String,
    /// URL under which clients can fetch the object.
    pub url: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

/// Trait for media hosting backends.
#[async_trait]
pub trait MediaStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store bytes under `key`, replacing any existing object.
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<MediaObject>;

    /// Delete the object at `key`. Deleting a missing object is not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Map a public URL produced by this store back to its key.
    fn key_for_url(&self, url: &str) -> Option<String>;
}
