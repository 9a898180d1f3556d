use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a listing before or during traversal.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("path {} does not exist or is not a directory", .0.display())]
    InvalidRoot(PathBuf),

    #[error("cannot read directory {}: {reason:#}", .path.display())]
    ReadDir { path: PathBuf, reason: anyhow::Error },

    #[error("cannot read attributes of {}: {reason:#}", .path.display())]
    Metadata { path: PathBuf, reason: anyhow::Error },
}
