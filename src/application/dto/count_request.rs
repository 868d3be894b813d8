use super::{OutputFormat, SortOrder};
use std::path::PathBuf;

/// CountRequest - Internal request DTO for the word counting use case
///
/// The paths are only used for diagnostics; the streams themselves are handed
/// to the use case already opened.
#[derive(Debug, Clone)]
pub struct CountRequest {
    /// Resolved path of the file being analyzed
    pub input_path: PathBuf,
    /// Resolved path of the file receiving the report
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub sort: SortOrder,
}

impl CountRequest {
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_path,
            output_path,
            format: OutputFormat::default(),
            sort: SortOrder::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}
