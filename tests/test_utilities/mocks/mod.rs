/// Mock implementations for testing
mod mock_path_prompt;
mod mock_progress_reporter;

pub use mock_path_prompt::MockPathPrompt;
pub use mock_progress_reporter::MockProgressReporter;
