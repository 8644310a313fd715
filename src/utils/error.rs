use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("Invalid time '{input}': {reason}")]
    InvalidTime { input: String, reason: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown display command: {name}")]
    UnknownCommand { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

impl ClockError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClockError::InvalidTime { .. } | ClockError::UnknownCommand { .. } => {
                ErrorCategory::Input
            }
            ClockError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ClockError::IoError(_) | ClockError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClockError::InvalidTime { input, .. } => {
                format!("Cannot read '{}' as a time of day", input)
            }
            ClockError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option {} is invalid: {}", field, reason)
            }
            ClockError::UnknownCommand { name } => {
                format!("'{}' is not a display command", name)
            }
            ClockError::IoError(e) => format!("Could not write the clock face: {}", e),
            ClockError::SerializationError(e) => format!("Could not encode the frame: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClockError::InvalidTime { .. } => "Use the 24-hour HH:MM form, e.g. 09:41 or 21:05",
            ClockError::UnknownCommand { .. } => {
                "Valid commands: constrain, unconstrain, show-minutes, hide-minutes, show-numbers, hide-numbers"
            }
            ClockError::InvalidConfigValueError { .. } => "Check the command line options with --help",
            ClockError::IoError(_) => "Check that the output path exists and is writable",
            ClockError::SerializationError(_) => "Try another --format",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => 1,
            ErrorCategory::Output => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_category() {
        let invalid = ClockError::InvalidTime {
            input: "25:00".to_string(),
            reason: "hour out of range".to_string(),
        };
        assert_eq!(invalid.category(), ErrorCategory::Input);
        assert_eq!(invalid.exit_code(), 1);

        let io = ClockError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(io.category(), ErrorCategory::Output);
        assert_eq!(io.exit_code(), 2);
    }

    #[test]
    fn test_exit_codes_for_commands_and_serialization() {
        let unknown = ClockError::UnknownCommand {
            name: "blink".to_string(),
        };
        assert_eq!(unknown.category(), ErrorCategory::Input);
        assert_eq!(unknown.exit_code(), 1);

        let config = ClockError::InvalidConfigValueError {
            field: "interval_ms".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.exit_code(), 1);

        let encode = ClockError::from(serde_json::from_str::<u32>("x").unwrap_err());
        assert_eq!(encode.category(), ErrorCategory::Output);
        assert_eq!(encode.exit_code(), 2);
        assert_eq!(encode.recovery_suggestion(), "Try another --format");
    }

    #[test]
    fn test_user_friendly_message_names_input() {
        let err = ClockError::UnknownCommand {
            name: "blink".to_string(),
        };
        assert!(err.user_friendly_message().contains("blink"));
        assert!(err.recovery_suggestion().contains("hide-minutes"));
    }
}
