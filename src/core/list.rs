use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};

use crate::core::render::{self, Columns};
use crate::error::ListError;
use crate::fs::FileSystem;
use crate::models::{EntryKind, FsEntry};

/// What to list and how to annotate it. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct ListingOptions {
    pub root_path: PathBuf,
    /// Depth at which listing stops; root's children are at depth 0.
    /// `Some(0)` prints nothing, `None` is unbounded.
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
    pub show_size: bool,
    pub show_time: bool,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            max_depth: Some(1),
            dirs_only: false,
            show_size: false,
            show_time: false,
        }
    }
}

/// Rejects a root that is missing or not a directory.
pub async fn check_root<F: FileSystem>(fs: &F, root: &Path) -> Result<(), ListError> {
    if fs.is_dir(root).await {
        Ok(())
    } else {
        warn!("rejecting root {}", root.display());
        Err(ListError::InvalidRoot(root.to_path_buf()))
    }
}

/// Writes the listing of `options.root_path` to `writer`, one line per entry.
///
/// Children appear in enumeration order, depth-first. The first failure
/// aborts the listing; lines already written are left in place.
pub async fn list<F: FileSystem, W: Write>(
    fs: &F,
    writer: &mut W,
    options: &ListingOptions,
) -> anyhow::Result<()> {
    list_level(fs, writer, &options.root_path, options, 0).await
}

async fn list_level<F: FileSystem, W: Write>(
    fs: &F,
    writer: &mut W,
    dir: &Path,
    options: &ListingOptions,
    level: usize,
) -> anyhow::Result<()> {
    if options.max_depth.is_some_and(|max| level >= max) {
        trace!("depth limit reached at {}", dir.display());
        return Ok(());
    }

    debug!("listing {} at level {level}", dir.display());
    let entries = fs
        .read_dir(dir)
        .await
        .map_err(|reason| ListError::ReadDir {
            path: dir.to_path_buf(),
            reason,
        })?;

    for entry in entries {
        match entry.kind {
            EntryKind::File if !options.dirs_only => {
                let columns = read_columns(fs, &entry, options).await?;
                render::write_entry(writer, level, &entry.name, entry.kind, columns)?;
            }
            EntryKind::Directory => {
                let columns = read_columns(fs, &entry, options).await?;
                render::write_entry(writer, level, &entry.name, entry.kind, columns)?;
                Box::pin(list_level(fs, writer, &entry.path, options, level + 1)).await?;
            }
            EntryKind::File => {}
            EntryKind::Symlink | EntryKind::Other => {
                trace!("skipping {} ({:?})", entry.path.display(), entry.kind);
            }
        }
    }

    Ok(())
}

async fn read_columns<F: FileSystem>(
    fs: &F,
    entry: &FsEntry,
    options: &ListingOptions,
) -> Result<Columns, ListError> {
    if !options.show_size && !options.show_time {
        return Ok(Columns::default());
    }

    let metadata = fs
        .metadata(&entry.path)
        .await
        .map_err(|reason| ListError::Metadata {
            path: entry.path.clone(),
            reason,
        })?;

    Ok(Columns {
        size: options.show_size.then_some(metadata.size),
        modified: options.show_time.then_some(metadata.modified),
    })
}
