//! Media storage configuration.

use serde::{Deserialize, Serialize};

/// Media (avatar) storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for locally stored media objects.
    #[serde(default = "default_media_root")]
    pub media_root: String,
    /// Public base URL under which stored media is served.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Maximum avatar upload size in bytes (default 5 MB).
    #[serde(default = "default_max_avatar")]
    pub max_avatar_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            media_root: default_media_root(),
            public_base_url: default_public_base_url(),
            max_avatar_size_bytes: default_max_avatar(),
        }
    }
}

fn default_media_root() -> String {
    "./data/media".to_string()
}

fn default_public_base_url() -> String {
    "/media".to_string()
}

fn default_max_avatar() -> u64 {
    5_242_880 // 5 MB
}
