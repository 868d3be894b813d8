use crate::shared::Result;

/// PathPrompt port for asking the user for a file path
///
/// Abstracts the interactive line reading so the session can be driven by
/// flags, tests or a terminal alike.
pub trait PathPrompt {
    /// Shows `message` and returns the raw path the user entered
    ///
    /// Trailing line terminators are stripped; nothing else is touched. When
    /// the input is already closed the result is an empty string.
    ///
    /// # Errors
    /// Returns an error if reading from the underlying input fails
    fn prompt_path(&self, message: &str) -> Result<String>;
}
