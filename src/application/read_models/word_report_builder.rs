//! Builder for constructing WordReport from the counting result

use super::word_report::{ReportEntry, ReportMetadata, ToolInfo, WordReport};
use crate::application::dto::SortOrder;
use crate::word_counting::domain::WordCounts;
use chrono::{SecondsFormat, Utc};

pub struct WordReportBuilder;

impl WordReportBuilder {
    /// Builds a WordReport stamped with the current UTC time
    pub fn build(counts: &WordCounts, tokens_seen: u64, sort: SortOrder) -> WordReport {
        let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        Self::build_at(counts, tokens_seen, sort, generated_at)
    }

    /// Same as `build` with an explicit timestamp
    pub fn build_at(
        counts: &WordCounts,
        tokens_seen: u64,
        sort: SortOrder,
        generated_at: String,
    ) -> WordReport {
        WordReport {
            metadata: ReportMetadata {
                generated_at,
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
            },
            total_tokens: tokens_seen,
            counted_words: counts.total(),
            distinct_words: counts.len(),
            words: Self::build_entries(counts, sort),
        }
    }

    fn build_entries(counts: &WordCounts, sort: SortOrder) -> Vec<ReportEntry> {
        let ordered: Vec<(&str, u64)> = match sort {
            SortOrder::None => counts.iter().collect(),
            SortOrder::Alphabetical => counts.sorted_by_word(),
            SortOrder::Frequency => counts.sorted_by_count(),
        };
        ordered
            .into_iter()
            .map(|(word, count)| ReportEntry::new(word, count))
            .collect()
    }
}
