mod entry;

pub use entry::{EntryKind, EntryMetadata, FsEntry};
