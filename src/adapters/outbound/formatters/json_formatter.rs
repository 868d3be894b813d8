use super::LINE_ENDING;
use crate::application::read_models::{ReportEntry, WordReport};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Document<'a> {
    generated_at: &'a str,
    tool: Tool<'a>,
    total_tokens: u64,
    counted_words: u64,
    distinct_words: usize,
    words: Vec<Word<'a>>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct Word<'a> {
    word: &'a str,
    count: u64,
}

/// JsonFormatter adapter - pretty-printed JSON document
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_words(entries: &[ReportEntry]) -> Vec<Word<'_>> {
        entries
            .iter()
            .map(|entry| Word {
                word: &entry.word,
                count: entry.count,
            })
            .collect()
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &WordReport) -> Result<String> {
        let document = Document {
            generated_at: &report.metadata.generated_at,
            tool: Tool {
                name: &report.metadata.tool.name,
                version: &report.metadata.tool.version,
            },
            total_tokens: report.total_tokens,
            counted_words: report.counted_words,
            distinct_words: report.distinct_words,
            words: Self::build_words(&report.words),
        };

        let mut json = serde_json::to_string_pretty(&document)?;
        json.push_str(LINE_ENDING);
        Ok(json)
    }
}
