//! Read models for report rendering
//!
//! A flattened, already-ordered view of the counts that every formatter
//! renders from, so ordering is decided once.

mod word_report;
mod word_report_builder;

pub use word_report::{ReportEntry, ReportMetadata, ToolInfo, WordReport};
pub use word_report_builder::WordReportBuilder;
