use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Normal completion, including an empty report
    Success = 0,
    /// A file could not be opened, read or written, or the config is invalid
    Failure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for a word counting session.
///
/// The two open failures render exactly as the stderr diagnostic line
/// `Error opening file:<path>`; the underlying I/O error is kept as the source
/// so it shows up in the cause chain.
#[derive(Debug, Error)]
pub enum WordCountError {
    #[error("Error opening file:{}", .path.display())]
    InputOpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error opening file:{}", .path.display())]
    OutputOpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read file: {}\nDetails: {details}", .path.display())]
    ReadFailure { path: PathBuf, details: String },

    #[error("Failed to write to file: {}\nDetails: {details}\n\n💡 Hint: Please verify that the disk is not full and the file is still writable", .path.display())]
    WriteFailure { path: PathBuf, details: String },

    #[error("Invalid config file: {}\nDetails: {details}\n\n💡 Hint: Valid formats are 'text' and 'json'; valid sort orders are 'none', 'alpha' and 'count'", .path.display())]
    InvalidConfig { path: PathBuf, details: String },
}

impl WordCountError {
    /// Whether this error is one of the two terminal open failures that also
    /// print a human-readable notice on stdout.
    pub fn is_open_failure(&self) -> bool {
        matches!(
            self,
            WordCountError::InputOpenFailure { .. } | WordCountError::OutputOpenFailure { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::Failure.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::Failure), "Failure (1)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_input_open_failure_display() {
        let error = WordCountError::InputOpenFailure {
            path: PathBuf::from("/test/missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(format!("{}", error), "Error opening file:/test/missing.txt");
        assert!(error.is_open_failure());
    }

    #[test]
    fn test_output_open_failure_keeps_source() {
        let error = WordCountError::OutputOpenFailure {
            path: PathBuf::from("/no/such/dir/out.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        };
        assert_eq!(format!("{}", error), "Error opening file:/no/such/dir/out.txt");
        let source = std::error::Error::source(&error).unwrap();
        assert!(source.to_string().contains("Permission denied"));
    }

    #[test]
    fn test_read_failure_display() {
        let error = WordCountError::ReadFailure {
            path: PathBuf::from("/test/input.txt"),
            details: "Input/output error".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read file"));
        assert!(display.contains("/test/input.txt"));
        assert!(display.contains("Input/output error"));
        assert!(!error.is_open_failure());
    }

    #[test]
    fn test_write_failure_display() {
        let error = WordCountError::WriteFailure {
            path: PathBuf::from("/test/output.txt"),
            details: "No space left on device".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("No space left on device"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = WordCountError::InvalidConfig {
            path: PathBuf::from("word-counter.config.yml"),
            details: "unknown format 'xml'".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid config file"));
        assert!(display.contains("unknown format 'xml'"));
    }
}
