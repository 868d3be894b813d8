//! word-counter - word frequency counting for plain text files
//!
//! Reads a text file, splits it on whitespace, folds every token to its
//! lowercase ASCII-letters-only form and tallies how often each word occurs.
//! The tally is written both to the console and to an output file.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`word_counting`): normalization, tokenizing and counting
//! - **Application Layer** (`application`): the counting use case, DTOs and read models
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): console, filesystem and formatter implementations
//! - **Shared** (`shared`): error types, result alias and logging setup
//!
//! # Example
//!
//! ```
//! use word_counter::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = CountWordsUseCase::new(StdoutProgressReporter::new());
//! let request = CountRequest::new(PathBuf::from("in.txt"), PathBuf::from("out.txt"))
//!     .with_sort(SortOrder::Alphabetical);
//!
//! let mut console = Vec::new();
//! let mut output = Vec::new();
//! let response = use_case.execute(&request, "Cat cat CAT!".as_bytes(), &mut console, &mut output)?;
//!
//! assert_eq!(response.counts.get("cat"), Some(3));
//! assert_eq!(String::from_utf8(output).unwrap().trim_end(), "cat: 3");
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod word_counting;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        ConsolePathPrompt, ConsoleProgressReporter, StdinPathPrompt, StdoutProgressReporter,
    };
    pub use crate::adapters::outbound::filesystem::FileSystemOpener;
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter, LINE_ENDING};
    pub use crate::application::dto::{CountRequest, CountResponse, OutputFormat, SortOrder};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::{WordReport, WordReportBuilder};
    pub use crate::application::use_cases::CountWordsUseCase;
    pub use crate::config::{discover_config, load_config_from_path, ConfigFile, Settings};
    pub use crate::ports::outbound::{PathPrompt, ProgressReporter, ReportFormatter};
    pub use crate::shared::Result;
    pub use crate::word_counting::domain::{NormalizedWord, WordCounts};
    pub use crate::word_counting::services::{Tokenizer, WordAggregator};
}
