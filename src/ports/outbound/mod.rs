/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the console, the user and the report renderers.
pub mod formatter;
pub mod path_prompt;
pub mod progress_reporter;

pub use formatter::ReportFormatter;
pub use path_prompt::PathPrompt;
pub use progress_reporter::ProgressReporter;
