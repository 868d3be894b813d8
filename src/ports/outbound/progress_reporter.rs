/// ProgressReporter port for user-facing status messages
///
/// Status lines ("File opened!", "complete!", ...) are part of the program's
/// console contract and go to stdout, unlike diagnostic log events.
pub trait ProgressReporter {
    /// Reports a status message followed by a line break
    fn report(&self, message: &str);

    /// Reports a status message and leaves the cursor on the same line
    fn report_inline(&self, message: &str);

    /// Reports a human-readable failure notice
    fn report_error(&self, message: &str);
}
