/// Query-side view of one counting run
#[derive(Debug, Clone, PartialEq)]
pub struct WordReport {
    pub metadata: ReportMetadata,
    pub total_tokens: u64,
    pub counted_words: u64,
    pub distinct_words: usize,
    /// Entries in the order they must be emitted
    pub words: Vec<ReportEntry>,
}

/// Who produced the report and when
#[derive(Debug, Clone, PartialEq)]
pub struct ReportMetadata {
    pub generated_at: String,
    pub tool: ToolInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub word: String,
    pub count: u64,
}

impl ReportEntry {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}
