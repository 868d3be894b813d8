use crate::application::dto::{CountRequest, CountResponse};
use crate::application::factories::FormatterFactory;
use crate::application::read_models::WordReportBuilder;
use crate::ports::outbound::ProgressReporter;
use crate::shared::error::WordCountError;
use crate::shared::Result;
use crate::word_counting::services::WordAggregator;
use std::io::{BufRead, Write};

/// CountWordsUseCase - Core use case for counting words
///
/// Runs tokenize -> aggregate -> report on streams the caller has already
/// opened. The input reader is consumed (and so released) once counting is
/// done; the output writer is flushed but left to the caller to drop.
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct CountWordsUseCase<PR> {
    progress_reporter: PR,
}

impl<PR> CountWordsUseCase<PR>
where
    PR: ProgressReporter,
{
    /// Creates a new CountWordsUseCase with injected dependencies
    pub fn new(progress_reporter: PR) -> Self {
        Self { progress_reporter }
    }

    /// Executes the word counting use case
    ///
    /// # Arguments
    /// * `request` - Paths (for diagnostics), format and sort order
    /// * `input` - Stream to count words from
    /// * `console` - First report sink, normally stdout
    /// * `output` - Second report sink, normally the save file
    ///
    /// # Errors
    /// Returns `WordCountError::ReadFailure` if the input cannot be read and
    /// `WordCountError::WriteFailure` if the save file rejects the report.
    /// A console failure is reported only after the save file is written.
    pub fn execute<R, C, W>(
        &self,
        request: &CountRequest,
        input: R,
        console: &mut C,
        output: &mut W,
    ) -> Result<CountResponse>
    where
        R: BufRead,
        C: Write,
        W: Write,
    {
        // Step 1: Tokenize and aggregate; the reader is dropped on return
        let mut aggregator = WordAggregator::new();
        aggregator
            .consume(input)
            .map_err(|e| WordCountError::ReadFailure {
                path: request.input_path.clone(),
                details: e.to_string(),
            })?;

        let tokens_seen = aggregator.tokens_seen();
        let counts = aggregator.into_counts();
        log::debug!(
            "Read {} token(s), {} counted, {} distinct",
            tokens_seen,
            counts.total(),
            counts.len()
        );

        // Step 2: Render once for both sinks
        let report = WordReportBuilder::build(&counts, tokens_seen, request.sort);
        let rendered = FormatterFactory::create(request.format).format(&report)?;
        log::debug!(
            "Rendered {} report ({} sort, {} bytes)",
            request.format,
            request.sort,
            rendered.len()
        );

        // Step 3: Console sink; a failure here must not cost the save file
        self.progress_reporter.report("Word counts:");
        let console_result = console
            .write_all(rendered.as_bytes())
            .and_then(|()| console.flush());
        if let Err(e) = &console_result {
            log::warn!("Console sink failed, still writing save file: {}", e);
        }
        self.progress_reporter.report("File closed.");

        // Step 4: Output file sink
        self.progress_reporter.report_inline("Writing to save file...");
        let output_result = output
            .write_all(rendered.as_bytes())
            .and_then(|()| output.flush());
        if output_result.is_ok() {
            self.progress_reporter.report("complete!");
        }

        // First failure wins
        console_result.map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        output_result.map_err(|e| WordCountError::WriteFailure {
            path: request.output_path.clone(),
            details: e.to_string(),
        })?;

        Ok(CountResponse::new(counts, tokens_seen, rendered))
    }
}
