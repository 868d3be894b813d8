use super::LINE_ENDING;
use crate::application::read_models::WordReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter adapter - one `word: count` line per entry
///
/// No padding, no header; an empty report renders as the empty string.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &WordReport) -> Result<String> {
        let mut output = String::new();
        for entry in &report.words {
            write!(output, "{}: {}{}", entry.word, entry.count, LINE_ENDING)?;
        }
        Ok(output)
    }
}
