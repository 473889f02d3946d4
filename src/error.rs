use std::fmt;

/// Errors that fail a scenario step
#[derive(Debug)]
pub enum HarnessError {
    /// A command that had to succeed exited non-zero
    UnexpectedFailure { command: String, exit_code: i32 },

    /// The exit code differs from the one the step asked for
    ExitCodeMismatch {
        command: String,
        expected: i32,
        actual: i32,
    },

    /// The shell could not be started at all
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// `rhc status` printed something that is not the expected document
    StatusParse {
        data: String,
        source: serde_json::Error,
    },

    /// A step that needs a data table was given none
    MissingTable { step: String },

    /// A data table row lacks a required column
    MissingColumn { column: String },

    /// A date given to a faketime step could not be parsed
    InvalidDate { value: String, reason: String },

    /// A `then` step found state that does not match
    AssertionFailed { reason: String },

    /// A step inspected the last result before any command ran
    NoCommandRun,
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::UnexpectedFailure { command, exit_code } => {
                write!(f, "Running command \"{}\" failed: {}", command, exit_code)
            }
            HarnessError::ExitCodeMismatch {
                command,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Running command \"{}\" had unexpected exit code: {} (expected {})",
                    command, actual, expected
                )
            }
            HarnessError::Spawn { command, source } => {
                write!(f, "Cannot start command \"{}\": {}", command, source)
            }
            HarnessError::StatusParse { data, source } => {
                write!(f, "Invalid status document ({}): '{}'", source, data.trim())
            }
            HarnessError::MissingTable { step } => {
                write!(f, "Step '{}' requires a data table", step)
            }
            HarnessError::MissingColumn { column } => {
                write!(f, "Data table row has no '{}' column", column)
            }
            HarnessError::InvalidDate { value, reason } => {
                write!(f, "Invalid date '{}': {}", value, reason)
            }
            HarnessError::AssertionFailed { reason } => write!(f, "Assertion failed: {}", reason),
            HarnessError::NoCommandRun => write!(f, "No command has been run in this scenario"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Spawn { source, .. } => Some(source),
            HarnessError::StatusParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl HarnessError {
    /// Create an unexpected failure error
    pub fn unexpected_failure(command: &str, exit_code: i32) -> Self {
        HarnessError::UnexpectedFailure {
            command: command.to_string(),
            exit_code,
        }
    }

    /// Create an exit code mismatch error
    pub fn exit_code_mismatch(command: &str, expected: i32, actual: i32) -> Self {
        HarnessError::ExitCodeMismatch {
            command: command.to_string(),
            expected,
            actual,
        }
    }

    pub fn spawn(command: &str, source: std::io::Error) -> Self {
        HarnessError::Spawn {
            command: command.to_string(),
            source,
        }
    }

    pub fn status_parse(data: &str, source: serde_json::Error) -> Self {
        HarnessError::StatusParse {
            data: data.to_string(),
            source,
        }
    }

    pub fn missing_table(step: &str) -> Self {
        HarnessError::MissingTable {
            step: step.to_string(),
        }
    }

    pub fn missing_column(column: &str) -> Self {
        HarnessError::MissingColumn {
            column: column.to_string(),
        }
    }

    pub fn invalid_date(value: &str, reason: &str) -> Self {
        HarnessError::InvalidDate {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an assertion error from a message
    pub fn assertion(reason: impl Into<String>) -> Self {
        HarnessError::AssertionFailed {
            reason: reason.into(),
        }
    }

    /// Exit code carried by the two command failure kinds
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            HarnessError::UnexpectedFailure { exit_code, .. } => Some(*exit_code),
            HarnessError::ExitCodeMismatch { actual, .. } => Some(*actual),
            _ => None,
        }
    }
}

/// Result type alias for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_failure_mentions_command_and_code() {
        let err = HarnessError::unexpected_failure("dnf5 install -y foo", 1);
        assert_eq!(
            err.to_string(),
            "Running command \"dnf5 install -y foo\" failed: 1"
        );
        assert_eq!(err.exit_code(), Some(1));
    }

    #[test]
    fn test_exit_code_mismatch_mentions_both_codes() {
        let err = HarnessError::exit_code_mismatch("false", 2, 1);
        let message = err.to_string();
        assert!(message.contains("unexpected exit code: 1"));
        assert!(message.contains("expected 2"));
        assert_eq!(err.exit_code(), Some(1));
    }

    #[test]
    fn test_status_parse_exposes_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = HarnessError::status_parse("{\n", source);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().ends_with("'{'"));
    }

    #[test]
    fn test_errors_without_exit_code() {
        assert_eq!(HarnessError::NoCommandRun.exit_code(), None);
        assert_eq!(HarnessError::missing_column("repo_id").exit_code(), None);
        assert_eq!(
            HarnessError::missing_column("repo_id").to_string(),
            "Data table row has no 'repo_id' column"
        );
    }
}
