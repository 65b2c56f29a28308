//! Asset photo storage on the local filesystem.

use std::path::Path;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use assetdesk_core::config::uploads::UploadConfig;
use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;

/// Fallback extension when the uploaded filename carries none.
const DEFAULT_EXTENSION: &str = "bin";

/// Persists uploaded asset photos and derives their public URLs.
#[derive(Debug, Clone)]
pub struct PhotoStorage {
    config: UploadConfig,
}

impl PhotoStorage {
    /// Create a new photo storage backed by the configured directory.
    pub fn new(config: UploadConfig) -> Self {
        Self { config }
    }

    /// Validate and persist an uploaded asset photo.
    ///
    /// Returns the relative URL under which the photo is served. Only
    /// image content types are accepted and the configured size ceiling
    /// applies.
    pub async fn store_asset_photo(
        &self,
        asset_id: Uuid,
        filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> AppResult<String> {
        self.validate_photo(content_type, data.len() as u64)?;

        let object_path = photo_object_path(asset_id, filename, Utc::now().timestamp());
        let target = Path::new(&self.config.directory).join(&object_path);

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Failed to create upload directory", e)
            })?;
        }
        tokio::fs::write(&target, data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to write uploaded photo", e)
        })?;

        info!(asset_id = %asset_id, path = %target.display(), "Stored asset photo");
        Ok(format!("{}/{}", self.config.public_prefix, object_path))
    }

    fn validate_photo(&self, content_type: &str, size: u64) -> AppResult<()> {
        if !content_type.starts_with("image/") {
            return Err(AppError::validation(format!(
                "Unsupported content type '{content_type}', expected an image"
            )));
        }
        if size > self.config.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "Upload of {size} bytes exceeds the limit of {} bytes",
                self.config.max_upload_size_bytes
            )));
        }
        Ok(())
    }
}

/// Relative storage path for an asset photo.
///
/// The timestamp keeps successive uploads for the same asset from
/// overwriting each other.
fn photo_object_path(asset_id: Uuid, filename: &str, timestamp: i64) -> String {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    format!("assets/{asset_id}-{timestamp}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_with_limit(limit: u64) -> PhotoStorage {
        PhotoStorage::new(UploadConfig {
            directory: "./data/uploads".to_string(),
            public_prefix: "/uploads".to_string(),
            max_upload_size_bytes: limit,
        })
    }

    #[test]
    fn test_rejects_non_image_content_type() {
        let storage = storage_with_limit(1024);
        assert!(storage.validate_photo("application/pdf", 10).is_err());
    }

    #[test]
    fn test_rejects_oversized_upload() {
        let storage = storage_with_limit(100);
        assert!(storage.validate_photo("image/png", 101).is_err());
        assert!(storage.validate_photo("image/png", 100).is_ok());
    }

    #[test]
    fn test_object_path_uses_lowercased_extension() {
        let id = Uuid::nil();
        let path = photo_object_path(id, "Front.JPG", 1_700_000_000);
        assert_eq!(
            path,
            format!("assets/{id}-1700000000.jpg")
        );
    }

    #[test]
    fn test_object_path_falls_back_without_extension() {
        let id = Uuid::nil();
        let path = photo_object_path(id, "photo", 1_700_000_000);
        assert!(path.ends_with(".bin"));
    }

    #[tokio::test]
    async fn test_store_writes_file_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = PhotoStorage::new(UploadConfig {
            directory: dir.path().to_string_lossy().into_owned(),
            public_prefix: "/uploads".to_string(),
            max_upload_size_bytes: 1024,
        });

        let id = Uuid::new_v4();
        let url = storage
            .store_asset_photo(id, "front.png", "image/png", b"not-a-real-png")
            .await
            .unwrap();

        assert!(url.starts_with("/uploads/assets/"));
        let object_path = url.strip_prefix("/uploads/").unwrap();
        let stored = tokio::fs::read(dir.path().join(object_path)).await.unwrap();
        assert_eq!(stored, b"not-a-real-png");
    }
}
