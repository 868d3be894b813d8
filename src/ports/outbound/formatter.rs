use crate::application::read_models::WordReport;
use crate::shared::Result;

/// ReportFormatter port for rendering the word report
///
/// The rendered string is written unchanged to both the console and the
/// output file.
pub trait ReportFormatter {
    /// Renders the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &WordReport) -> Result<String>;
}
