//! Path-addressed storage of serialized values.
//!
//! [`FileStorage`] abstracts a tree of files and folders holding serialized
//! values. [`FsStorage`] is the filesystem implementation: every path is
//! resolved relative to a root directory and values are stored as JSON.
//!
//! ```rust,no_run
//! use wrapui_storage::{FileStorage, FsStorage};
//!
//! # async fn demo() -> wrapui_storage::Result<()> {
//! let storage = FsStorage::new("settings");
//! storage.save_file("panel/spacing.json", &8.0_f32).await?;
//! let spacing: f32 = storage.read_file("panel/spacing.json", 0.0).await?;
//! assert_eq!(spacing, 8.0);
//! # Ok(())
//! # }
//! ```

mod error;
mod fs;

pub use error::{Result, StorageError};
pub use fs::FsStorage;

use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;

/// Kind of an entry listed by [`FileStorage::read_folder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DirectoryItemType {
    /// Neither a file nor a folder (for example a dangling link).
    #[default]
    None,
    /// A regular file.
    File,
    /// A folder.
    Folder,
}

/// Storage of files and folders addressed by path.
///
/// There is no notion of a current directory; implementations resolve every
/// path the same way.
#[allow(async_fn_in_trait)]
pub trait FileStorage {
    /// Returns whether a file or folder exists at `item_path`.
    async fn item_exists(&self, item_path: impl AsRef<Path>) -> Result<bool>;

    /// Reads the value stored at `file_path`, or `default` if there is none.
    async fn read_file<T: DeserializeOwned>(
        &self,
        file_path: impl AsRef<Path>,
        default: T,
    ) -> Result<T>;

    /// Lists the immediate entries of a folder.
    async fn read_folder(
        &self,
        folder_path: impl AsRef<Path>,
    ) -> Result<Vec<(DirectoryItemType, String)>>;

    /// Stores `value` at `file_path`, replacing any previous value.
    async fn save_file<T: Serialize + ?Sized>(
        &self,
        file_path: impl AsRef<Path>,
        value: &T,
    ) -> Result<()>;

    /// Ensures a folder exists at `folder_path`.
    async fn save_folder(&self, folder_path: impl AsRef<Path>) -> Result<()>;

    /// Deletes the file or folder at `item_path`.
    async fn delete_item(&self, item_path: impl AsRef<Path>) -> Result<()>;
}
