/// Filesystem adapters for path resolution and file access
mod file_opener;

pub use file_opener::FileSystemOpener;
