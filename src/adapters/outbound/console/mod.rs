/// Console adapters for status output and interactive prompts
mod path_prompt;
mod progress_reporter;

pub use path_prompt::{ConsolePathPrompt, StdinPathPrompt};
pub use progress_reporter::{ConsoleProgressReporter, StdoutProgressReporter};
