use thiserror::Error;

#[derive(Error, Debug)]
pub enum PressureError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {resource}")]
    HttpStatusError { resource: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration for {field} ({value}): {reason}")]
    InvalidConfiguration {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No list matches {selector} (board has {available} lists)")]
    ListNotFound { selector: String, available: usize },

    #[error("Malformed due date '{value}': {reason}")]
    MalformedDueDate { value: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PressureError {
    pub fn invalid_configuration(
        field: &str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfiguration {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::HttpStatusError { .. } => ErrorCategory::Network,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfiguration { .. } => ErrorCategory::Configuration,
            Self::SerializationError(_)
            | Self::ListNotFound { .. }
            | Self::MalformedDueDate { .. } => ErrorCategory::Data,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 單張卡片的日期錯誤只影響該卡片
            Self::MalformedDueDate { .. } => ErrorSeverity::Low,
            Self::ApiError(_) | Self::HttpStatusError { .. } => ErrorSeverity::Medium,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfiguration { .. }
            | Self::ListNotFound { .. }
            | Self::SerializationError(_) => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(_) => "Could not reach the board API".to_string(),
            Self::HttpStatusError { resource, status } => {
                format!("The board API rejected the request for {} (HTTP {})", resource, status)
            }
            Self::IoError(e) => format!("File system error: {}", e),
            Self::SerializationError(_) => "The board API returned unexpected data".to_string(),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::MissingConfigError { field } => format!("'{}' is not configured", field),
            Self::InvalidConfiguration { field, reason, .. } => {
                format!("'{}' is invalid: {}", field, reason)
            }
            Self::ListNotFound { selector, available } => {
                format!("List {} does not exist on this board ({} lists)", selector, available)
            }
            Self::MalformedDueDate { value, .. } => {
                format!("Due date '{}' could not be read", value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ApiError(_) => "Check network connectivity and the API base URL".to_string(),
            Self::HttpStatusError { status: 401, .. } | Self::HttpStatusError { status: 403, .. } => {
                "Check TRELLO_API_KEY and TRELLO_TOKEN".to_string()
            }
            Self::HttpStatusError { status: 404, .. } => "Check TRELLO_BOARD_ID".to_string(),
            Self::HttpStatusError { .. } => "Try again on the next polling interval".to_string(),
            Self::IoError(_) => "Check file paths and permissions".to_string(),
            Self::SerializationError(_) => "Verify the API base URL points at a Trello-compatible API".to_string(),
            Self::ConfigError { .. } | Self::MissingConfigError { .. } => {
                "Set the value via command-line flag, environment variable or config file".to_string()
            }
            Self::InvalidConfiguration { field, .. } => {
                format!("Correct '{}' and run again", field)
            }
            Self::ListNotFound { .. } => {
                "Run once without --list-name to see the available lists".to_string()
            }
            Self::MalformedDueDate { .. } => "Fix the card's due date on the board".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PressureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_is_high_severity() {
        let err = PressureError::invalid_configuration("max_threshold", 0.0, "must be positive");
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("max_threshold"));
    }

    #[test]
    fn test_http_status_recovery_suggestions() {
        let server_error = PressureError::HttpStatusError {
            resource: "board lists".to_string(),
            status: 503,
        };
        let auth_error = PressureError::HttpStatusError {
            resource: "board lists".to_string(),
            status: 401,
        };

        assert_eq!(server_error.severity(), ErrorSeverity::Medium);
        assert!(server_error.recovery_suggestion().contains("next polling interval"));
        assert!(auth_error.recovery_suggestion().contains("TRELLO_TOKEN"));
    }

    #[test]
    fn test_malformed_due_date_is_low_severity() {
        let err = PressureError::MalformedDueDate {
            value: "tomorrow".to_string(),
            reason: "input contains invalid characters".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.category(), ErrorCategory::Data);
    }
}
