use crate::shared::error::WordCountError;
use crate::shared::Result;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// FileSystemOpener adapter - resolves user paths and opens the two files
///
/// Paths are joined onto a base directory (the process's working directory in
/// the CLI); absolute paths replace the base entirely. The returned handles
/// close their file when dropped, on every exit path.
pub struct FileSystemOpener {
    base_dir: PathBuf,
}

impl FileSystemOpener {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Opener rooted at the current working directory
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Failed to determine current directory: {}", e))?;
        Ok(Self::new(cwd))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolves a raw, user-supplied path against the base directory
    pub fn resolve(&self, raw: &str) -> PathBuf {
        self.base_dir.join(raw)
    }

    /// Opens `path` for buffered reading
    ///
    /// # Errors
    /// `WordCountError::InputOpenFailure` if the file is missing, unreadable
    /// or a directory
    pub fn open_input(&self, path: &Path) -> std::result::Result<BufReader<File>, WordCountError> {
        let failure = |source: io::Error| WordCountError::InputOpenFailure {
            path: path.to_path_buf(),
            source,
        };

        // Directories open fine on some platforms and only fail on read.
        let metadata = fs::metadata(path).map_err(failure)?;
        if metadata.is_dir() {
            return Err(failure(io::Error::other("is a directory")));
        }

        let file = File::open(path).map_err(failure)?;
        log::debug!("Opened input file {}", path.display());
        Ok(BufReader::new(file))
    }

    /// Creates or truncates `path` for buffered writing
    ///
    /// # Errors
    /// `WordCountError::OutputOpenFailure` if the parent directory is missing
    /// or write permission is denied
    pub fn open_output(&self, path: &Path) -> std::result::Result<BufWriter<File>, WordCountError> {
        let file = File::create(path).map_err(|source| WordCountError::OutputOpenFailure {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Opened output file {}", path.display());
        Ok(BufWriter::new(file))
    }
}
