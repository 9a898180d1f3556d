pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;

pub use crate::core::{ListingOptions, check_root, list};
pub use crate::error::ListError;
