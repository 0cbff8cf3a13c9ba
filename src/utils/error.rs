use crate::domain::commands::CommandKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudentMarkError {
    #[error("Invalid student ID {0}")]
    InvalidStudentId(String),

    #[error("Invalid course ID {0}")]
    InvalidCourseId(String),

    #[error("Invalid option \"{0}\".")]
    InvalidChoice(String),

    #[error("Invalid {field} \"{value}\": {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Corrupt record in {file} line {line}: {reason}")]
    CorruptRecord {
        file: String,
        line: u64,
        reason: String,
    },

    #[error("No handler registered for {kind:?} (received {received:?})")]
    UnroutableCommand {
        kind: CommandKind,
        received: CommandKind,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Record file error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad user input; the session shows the message and carries on.
    Low,
    /// Referential errors against the current repository state.
    Medium,
    /// Persisted data or configuration cannot be used.
    High,
    /// Broken wiring or the environment failing underneath us.
    Critical,
}

impl StudentMarkError {
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidChoice(_) | Self::InvalidInput { .. } => ErrorSeverity::Low,
            Self::InvalidStudentId(_) | Self::InvalidCourseId(_) => ErrorSeverity::Medium,
            Self::CorruptRecord { .. }
            | Self::ConfigError { .. }
            | Self::TomlError(_)
            | Self::CsvError(_)
            | Self::ZipError(_) => ErrorSeverity::High,
            Self::UnroutableCommand { .. } | Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Errors the console loop reports and survives.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.severity(), ErrorSeverity::Low | ErrorSeverity::Medium)
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidStudentId(_)
            | Self::InvalidCourseId(_)
            | Self::InvalidChoice(_)
            | Self::InvalidInput { .. } => self.to_string(),
            Self::CorruptRecord { file, line, .. } => {
                format!("Saved data in {} is damaged at line {}", file, line)
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            Self::ZipError(_) => "The saved data archive could not be read or written".to_string(),
            Self::CsvError(_) | Self::IoError(_) => {
                "Saved data could not be read or written".to_string()
            }
            Self::UnroutableCommand { .. } => "Internal error while handling the request".to_string(),
        }
    }

    /// Process exit code for an error that ends the program.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, StudentMarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ids_are_recoverable() {
        assert!(StudentMarkError::InvalidStudentId("s1".into()).is_recoverable());
        assert!(StudentMarkError::InvalidCourseId("c1".into()).is_recoverable());
        assert!(StudentMarkError::InvalidChoice("9".into()).is_recoverable());
    }

    #[test]
    fn test_io_and_routing_errors_are_fatal() {
        let io = StudentMarkError::from(std::io::Error::other("disk gone"));
        assert!(!io.is_recoverable());
        assert_eq!(io.exit_code(), 3);

        let routing = StudentMarkError::UnroutableCommand {
            kind: CommandKind::CalculateGpa,
            received: CommandKind::AddCourse,
        };
        assert_eq!(routing.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_messages_match_console_wording() {
        assert_eq!(
            StudentMarkError::InvalidStudentId("s9".into()).to_string(),
            "Invalid student ID s9"
        );
        assert_eq!(
            StudentMarkError::InvalidChoice("x".into()).user_friendly_message(),
            "Invalid option \"x\"."
        );
    }
}
