mod list;
pub mod render;

pub use list::{ListingOptions, check_root, list};
