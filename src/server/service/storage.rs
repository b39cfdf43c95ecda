//! Image storage for board uploads.
//!
//! Images are written to an `ObjectStore` under `board/{uuid}_{filename}` and referenced by
//! public URL. Production uses S3 when a bucket is configured and the local filesystem
//! otherwise; tests use the in-memory store.

use std::sync::Arc;

use axum::body::Bytes;
use object_store::{
    aws::AmazonS3Builder, local::LocalFileSystem, memory::InMemory, path::Path, ObjectStore,
    PutPayload,
};
use uuid::Uuid;

use crate::server::{config::Config, error::AppError};

/// Directory prefix of board images inside the store.
const BOARD_PREFIX: &str = "board";

#[derive(Clone)]
pub struct ImageStorage {
    store: Arc<dyn ObjectStore>,
    /// URL under which stored keys are publicly reachable, without trailing slash.
    public_base_url: String,
}

impl ImageStorage {
    pub fn new(store: Arc<dyn ObjectStore>, public_base_url: impl Into<String>) -> Self {
        Self {
            store,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn in_memory(public_base_url: impl Into<String>) -> Self {
        Self::new(Arc::new(InMemory::new()), public_base_url)
    }

    /// Selects the backend from configuration.
    ///
    /// With `AWS_BUCKET_NAME` set, images go to S3 and are served from the bucket URL.
    /// Otherwise they are written below `UPLOAD_DIR` and served by the app at `/uploads`.
    ///
    /// # Returns
    /// - `Ok(ImageStorage)` - Configured storage
    /// - `Err(AppError::StorageErr)` - S3 client could not be built
    /// - `Err(AppError::InternalError)` - Upload directory could not be created
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let storage = &config.storage;

        if let Some(bucket) = &storage.aws_bucket_name {
            let mut builder = AmazonS3Builder::from_env()
                .with_bucket_name(bucket)
                .with_region(&storage.aws_region);

            if let (Some(key_id), Some(secret)) =
                (&storage.aws_access_key_id, &storage.aws_secret_access_key)
            {
                builder = builder
                    .with_access_key_id(key_id)
                    .with_secret_access_key(secret);
            }

            tracing::info!("Storing images in S3 bucket {}", bucket);

            return Ok(Self::new(
                Arc::new(builder.build()?),
                format!("https://{}.s3.amazonaws.com", bucket),
            ));
        }

        std::fs::create_dir_all(&storage.upload_dir).map_err(|e| {
            AppError::InternalError(format!(
                "Failed to create upload directory {}: {}",
                storage.upload_dir, e
            ))
        })?;

        tracing::info!("Storing images in {}", storage.upload_dir);

        Ok(Self::new(
            Arc::new(LocalFileSystem::new_with_prefix(&storage.upload_dir)?),
            format!("{}/uploads", config.app_url.trim_end_matches('/')),
        ))
    }

    /// Stores an uploaded image and returns its public URL.
    pub async fn upload(&self, filename: &str, bytes: Bytes) -> Result<String, AppError> {
        let key = format!(
            "{}/{}_{}",
            BOARD_PREFIX,
            Uuid::new_v4(),
            sanitize_filename(filename)
        );

        self.store
            .put(&Path::from(key.as_str()), PutPayload::from(bytes))
            .await?;

        Ok(format!("{}/{}", self.public_base_url, key))
    }

    /// Deletes the object behind a URL returned by `upload`.
    ///
    /// URLs that do not point into this storage are ignored.
    pub async fn delete(&self, url: &str) -> Result<(), AppError> {
        let Some(key) = self.key_for_url(url) else {
            tracing::debug!("Skipping delete of foreign image URL {}", url);
            return Ok(());
        };

        self.store.delete(&Path::from(key)).await?;

        Ok(())
    }

    fn key_for_url<'u>(&self, url: &'u str) -> Option<&'u str> {
        url.strip_prefix(&self.public_base_url)?
            .strip_prefix('/')
            .filter(|key| !key.is_empty())
    }

    #[cfg(test)]
    pub async fn exists(&self, url: &str) -> bool {
        match self.key_for_url(url) {
            Some(key) => self.store.head(&Path::from(key)).await.is_ok(),
            None => false,
        }
    }
}

/// Keeps ASCII letters, digits, dots, dashes and underscores; anything else becomes `_`.
fn sanitize_filename(filename: &str) -> String {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or_default();

    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = sanitized.trim_start_matches('.');
    if trimmed.is_empty() {
        "image".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests filename sanitizing.
    ///
    /// Expected: directories dropped, unsafe characters replaced, empty names defaulted
    #[test]
    fn sanitizes_filenames() {
        assert_eq!(sanitize_filename("photo.png"), "photo.png");
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("김치 찌개.jpg"), "_____.jpg");
        assert_eq!(sanitize_filename(""), "image");
        assert_eq!(sanitize_filename(".."), "image");
    }

    /// Tests uploading and deleting an image.
    ///
    /// Expected: URL under the public base with a board key, object gone after delete
    #[tokio::test]
    async fn uploads_and_deletes_image() -> Result<(), AppError> {
        let storage = ImageStorage::in_memory("http://localhost:8000/uploads/");

        let url = storage
            .upload("dish.png", Bytes::from_static(b"\x89PNG"))
            .await?;

        assert!(url.starts_with("http://localhost:8000/uploads/board/"));
        assert!(url.ends_with("_dish.png"));
        assert!(storage.exists(&url).await);

        storage.delete(&url).await?;
        assert!(!storage.exists(&url).await);

        Ok(())
    }

    /// Tests deleting a URL from somewhere else.
    ///
    /// Expected: Ok and nothing touched
    #[tokio::test]
    async fn ignores_foreign_urls() -> Result<(), AppError> {
        let storage = ImageStorage::in_memory("http://localhost:8000/uploads");

        storage.delete("https://cdn.example.com/board/x.png").await?;

        Ok(())
    }
}
