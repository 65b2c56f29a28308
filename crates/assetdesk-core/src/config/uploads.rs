//! Photo upload configuration.

use serde::{Deserialize, Serialize};

/// Upload handling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory where uploaded files are persisted.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// URL prefix under which uploaded files are served.
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    /// Maximum upload size in bytes (default 5 MiB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            public_prefix: default_public_prefix(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_directory() -> String {
    "./data/uploads".to_string()
}

fn default_public_prefix() -> String {
    "/uploads".to_string()
}

fn default_max_upload() -> u64 {
    5 * 1024 * 1024
}
