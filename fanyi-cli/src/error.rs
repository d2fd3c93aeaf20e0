//! Error handling for the CLI application

use thiserror::Error;

/// Custom error type for CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),
    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Nothing to classify or parse
    #[error("No input: {0}")]
    NoInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("reply.txt".to_string());
        assert_eq!(error.to_string(), "File not found: reply.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown field `colour`".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown field `colour`"
        );
    }

    #[test]
    fn test_no_input_error_display() {
        let error = CliError::NoInput("stdin was empty".to_string());
        assert_eq!(error.to_string(), "No input: stdin was empty");
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("回复/答复 文件.txt".to_string());
        assert_eq!(error.to_string(), "File not found: 回复/答复 文件.txt");
    }

    #[test]
    fn test_converts_into_anyhow() {
        let err: anyhow::Error = CliError::NoInput("empty".to_string()).into();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(err.to_string(), "No input: empty");
    }
}
