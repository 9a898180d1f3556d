use clap::Parser;
use std::path::PathBuf;

use crate::core::ListingOptions;

#[derive(Parser, Debug)]
#[command(name = "treels", version)]
#[command(about = "Print a directory's contents as an indented tree", long_about = None)]
pub struct Cli {
    /// Directory to list
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Maximum nesting level to descend to (negative means unlimited)
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub level: i64,

    /// Show only directories
    #[arg(short, long)]
    pub dir: bool,

    /// Show entry sizes in bytes
    #[arg(short, long)]
    pub showsize: bool,

    /// Show modification times
    #[arg(short, long)]
    pub time: bool,
}

impl Cli {
    pub fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            root_path: self.path.clone(),
            max_depth: usize::try_from(self.level).ok(),
            dirs_only: self.dir,
            show_size: self.showsize,
            show_time: self.time,
        }
    }
}
