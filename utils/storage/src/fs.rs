//! Filesystem-backed storage.

use std::{
    io::ErrorKind,
    path::{Component, Path, PathBuf},
    pin::pin,
};

use futures::StreamExt;
use serde::{Serialize, de::DeserializeOwned};

use crate::{DirectoryItemType, FileStorage, Result, StorageError};

/// Stores JSON-encoded values in files below a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    /// Creates a storage rooted at `root`. The directory is created lazily.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory all paths are resolved against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a relative path below the root, rejecting anything that
    /// would leave it.
    fn resolve(&self, path: &Path) -> Result<PathBuf> {
        let escapes = path.components().any(|component| {
            matches!(
                component,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(StorageError::InvalidPath(path.to_path_buf()));
        }
        Ok(self.root.join(path))
    }
}

impl FileStorage for FsStorage {
    async fn item_exists(&self, item_path: impl AsRef<Path>) -> Result<bool> {
        let path = self.resolve(item_path.as_ref())?;
        match async_fs::metadata(&path).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn read_file<T: DeserializeOwned>(
        &self,
        file_path: impl AsRef<Path>,
        default: T,
    ) -> Result<T> {
        let path = self.resolve(file_path.as_ref())?;
        let bytes = match async_fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no stored value, using default");
                return Ok(default);
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn read_folder(
        &self,
        folder_path: impl AsRef<Path>,
    ) -> Result<Vec<(DirectoryItemType, String)>> {
        let path = self.resolve(folder_path.as_ref())?;
        let mut entries = pin!(async_fs::read_dir(&path).await?);
        let mut items = Vec::new();

        while let Some(entry) = entries.next().await {
            let entry = entry?;
            let file_type = entry.file_type().await?;
            let kind = if file_type.is_dir() {
                DirectoryItemType::Folder
            } else if file_type.is_file() {
                DirectoryItemType::File
            } else {
                DirectoryItemType::None
            };
            items.push((kind, entry.file_name().to_string_lossy().into_owned()));
        }

        // Directory iteration order is platform dependent.
        items.sort_by(|a, b| a.1.cmp(&b.1));
        Ok(items)
    }

    async fn save_file<T: Serialize + ?Sized>(
        &self,
        file_path: impl AsRef<Path>,
        value: &T,
    ) -> Result<()> {
        let path = self.resolve(file_path.as_ref())?;
        let bytes = serde_json::to_vec(value)?;

        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }
        async_fs::write(&path, bytes).await?;

        tracing::debug!(path = %path.display(), "saved file");
        Ok(())
    }

    async fn save_folder(&self, folder_path: impl AsRef<Path>) -> Result<()> {
        let path = self.resolve(folder_path.as_ref())?;
        async_fs::create_dir_all(&path).await?;
        Ok(())
    }

    async fn delete_item(&self, item_path: impl AsRef<Path>) -> Result<()> {
        let path = self.resolve(item_path.as_ref())?;
        if async_fs::metadata(&path).await?.is_dir() {
            async_fs::remove_dir_all(&path).await?;
        } else {
            async_fs::remove_file(&path).await?;
        }

        tracing::debug!(path = %path.display(), "deleted item");
        Ok(())
    }
}
