//! Local filesystem media provider.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use docshare_core::config::StorageConfig;
use docshare_core::error::{AppError, ErrorKind};
use docshare_core::result::AppResult;
use docshare_core::traits::{MediaObject, MediaStore};

/// Stores media objects as files under a root directory and serves them
/// from a public base URL.
#[derive(Debug, Clone)]
pub struct LocalMediaStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalMediaStore {
    /// Create a new provider, creating the root directory if needed.
    pub async fn new(root_path: impl Into<PathBuf>, public_base_url: &str) -> AppResult<Self> {
        let root = root_path.into();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create media root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a provider from storage configuration.
    pub async fn from_config(config: &StorageConfig) -> AppResult<Self> {
        Self::new(&config.media_root, &config.public_base_url).await
    }

    /// Root directory on disk.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a key to a path within the root, refusing traversal.
    fn resolve(&self, key: &str) -> AppResult<PathBuf> {
        let clean = key.trim_start_matches('/');
        let relative = Path::new(clean);
        let safe = !clean.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return Err(AppError::validation(format!("Invalid media key: {key}")));
        }
        Ok(self.root.join(relative))
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }

    fn url_for(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key.trim_start_matches('/'))
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.is_dir())
    }

    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<MediaObject> {
        let full_path = self.resolve(key)?;
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write media object: {key}"),
                e,
            )
        })?;

        debug!(key, content_type, bytes = data.len(), "Stored media object");
        Ok(MediaObject {
            key: key.trim_start_matches('/').to_string(),
            url: self.url_for(key),
            size_bytes: data.len() as u64,
        })
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let full_path = self.resolve(key)?;
        match fs::remove_file(&full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete media object: {key}"),
                e,
            )),
        }
    }

    fn key_for_url(&self, url: &str) -> Option<String> {
        url.strip_prefix(&self.public_base_url)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|key| !key.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> (tempfile::TempDir, LocalMediaStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = LocalMediaStore::new(dir.path(), "/media/")
            .await
            .expect("store");
        (dir, store)
    }

    #[tokio::test]
    async fn test_put_writes_file_and_returns_url() {
        let (dir, store) = store().await;
        let obj = store
            .put("avatars/u1/a.png", Bytes::from_static(b"png"), "image/png")
            .await
            .expect("put");

        assert_eq!(obj.url, "/media/avatars/u1/a.png");
        assert_eq!(obj.size_bytes, 3);
        let on_disk = std::fs::read(dir.path().join("avatars/u1/a.png")).expect("read");
        assert_eq!(on_disk, b"png");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (_dir, store) = store().await;
        store
            .put("a/b.gif", Bytes::from_static(b"gif"), "image/gif")
            .await
            .expect("put");
        store.delete("a/b.gif").await.expect("first delete");
        store.delete("a/b.gif").await.expect("second delete");
    }

    #[tokio::test]
    async fn test_rejects_traversal() {
        let (_dir, store) = store().await;
        let err = store
            .put("../escape.png", Bytes::from_static(b"x"), "image/png")
            .await
            .expect_err("must reject");
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_key_for_url() {
        let (_dir, store) = store().await;
        assert_eq!(
            store.key_for_url("/media/avatars/u1/a.png").as_deref(),
            Some("avatars/u1/a.png")
        );
        assert_eq!(store.key_for_url("https://elsewhere/a.png"), None);
        assert_eq!(store.key_for_url("/media/"), None);
    }

    #[tokio::test]
    async fn test_health_check() {
        let (_dir, store) = store().await;
        assert!(store.health_check().await.expect("health"));
        assert_eq!(store.provider_type(), "local");
    }
}
