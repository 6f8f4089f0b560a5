use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Activity not found: {activity}")]
    ActivityNotFound { activity: String },

    #[error("{participant} is already signed up for {activity}")]
    AlreadySignedUp {
        activity: String,
        participant: String,
    },

    #[error("{participant} is not signed up for {activity}")]
    ParticipantNotFound {
        activity: String,
        participant: String,
    },

    #[error("Validation error on '{field}': {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 請求內容有誤，修正後可重試
    Client,
    /// 活動或參與者不存在
    NotFound,
    /// 啟動時的配置錯誤
    Configuration,
    /// 系統層錯誤 (IO 等)
    System,
}

impl RosterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadySignedUp { .. } | Self::ValidationError { .. } => ErrorCategory::Client,
            Self::ActivityNotFound { .. } | Self::ParticipantNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    /// 是否為呼叫端造成、可修正後重送的錯誤
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Client | ErrorCategory::NotFound
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ActivityNotFound { activity } => {
                format!("Activity '{}' does not exist", activity)
            }
            Self::AlreadySignedUp { .. } => "Student is already signed up".to_string(),
            Self::ParticipantNotFound { .. } => {
                "Participant is not signed up for this activity".to_string()
            }
            Self::ValidationError { field, reason } => format!("Invalid {}: {}", field, reason),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            Self::TomlError(_) => "Configuration file is not valid TOML".to_string(),
            Self::IoError(e) => format!("I/O failure: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ActivityNotFound { .. } => "List activities and use an exact, case-sensitive name",
            Self::AlreadySignedUp { .. } => "No action needed, the participant is already enrolled",
            Self::ParticipantNotFound { .. } => "Check the participant identifier and activity name",
            Self::ValidationError { .. } => "Provide a non-empty participant identifier",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and restart"
            }
            Self::TomlError(_) => "Check the configuration file syntax",
            Self::IoError(_) => "Check that the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_client_errors() {
        let not_found = RosterError::ActivityNotFound {
            activity: "Knitting".to_string(),
        };
        let duplicate = RosterError::AlreadySignedUp {
            activity: "Chess Club".to_string(),
            participant: "a@example.com".to_string(),
        };

        assert_eq!(not_found.category(), ErrorCategory::NotFound);
        assert_eq!(duplicate.category(), ErrorCategory::Client);
        assert!(not_found.is_client_error());
        assert!(duplicate.is_client_error());
    }

    #[test]
    fn test_config_errors_are_not_client_errors() {
        let err = RosterError::ConfigError {
            message: "no activities".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(!err.is_client_error());

        let io = RosterError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.category(), ErrorCategory::System);
    }

    #[test]
    fn test_display_mentions_activity_and_participant() {
        let err = RosterError::ParticipantNotFound {
            activity: "Chess Club".to_string(),
            participant: "ghost@example.com".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("Chess Club"));
        assert!(text.contains("ghost@example.com"));
    }
}
