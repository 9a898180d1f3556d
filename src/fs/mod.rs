mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::{EntryMetadata, FsEntry};

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Direct children of `dir`, in the order the platform yields them.
    /// Symlinks are reported as such and never followed.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;

    /// Size and modification time of `path`, following symlinks.
    async fn metadata(&self, path: &Path) -> Result<EntryMetadata>;

    async fn is_dir(&self, path: &Path) -> bool;
}
