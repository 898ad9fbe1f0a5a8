mod s3;

pub use s3::S3Store;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use uuid::Uuid;

/// Largest accepted attachment, 200 MiB.
pub const MAX_ATTACHMENT_SIZE: usize = 200 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("empty file")]
    Empty,
    #[error("file is too large ({size} bytes, the limit is {max} bytes)")]
    TooLarge { size: usize, max: usize },
    #[error("failed to upload {key}: {reason}")]
    Upload { key: String, reason: String },
    #[error("failed to delete {key}: {reason}")]
    Delete { key: String, reason: String },
}

/// Keyed blob storage holding question attachments.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn upload(&self, content: Bytes, key: &str) -> Result<(), StorageError>;
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// A file received from a client, not yet stored.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content: Bytes,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    pub fn validate(&self) -> Result<(), StorageError> {
        if self.content.is_empty() {
            return Err(StorageError::Empty);
        }

        if self.content.len() > MAX_ATTACHMENT_SIZE {
            return Err(StorageError::TooLarge {
                size: self.content.len(),
                max: MAX_ATTACHMENT_SIZE,
            });
        }

        Ok(())
    }

    /// Generates a fresh object key, `questions/{uuid}_{file name}`.
    pub fn key(&self) -> String {
        format!("questions/{}_{}", Uuid::new_v4(), sanitize(&self.file_name))
    }

    /// Validates and uploads the file, returning the key it was stored under.
    pub async fn store<O>(self, storage: &O) -> Result<String, StorageError>
    where
        O: ObjectStore + ?Sized,
    {
        self.validate()?;

        let key = self.key();
        storage.upload(self.content, &key).await?;

        debug!("uploaded attachment: {}", key);

        Ok(key)
    }
}

/// Longest file name kept in a key, so that keys fit the 255 character column.
const MAX_FILE_NAME_LENGTH: usize = 200;

fn sanitize(file_name: &str) -> String {
    let mut name = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '-' | '_' => c,
            _ => '_',
        })
        .collect::<String>();

    // ascii only by now, keep the tail with the extension
    if name.len() > MAX_FILE_NAME_LENGTH {
        name = name.split_off(name.len() - MAX_FILE_NAME_LENGTH);
    }

    if name.is_empty() {
        "file".to_owned()
    } else {
        name
    }
}
