use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing secret: environment variable {name} is not set")]
    MissingSecret { name: String },

    #[error("No qualifying vacancies for '{language}' from {source_name}")]
    EmptySample {
        source_name: String,
        language: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
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
    Medium,
    High,
    Critical,
}

impl StatsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StatsError::Http(_) => ErrorCategory::Network,
            StatsError::MissingSecret { .. }
            | StatsError::Config { .. }
            | StatsError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            StatsError::EmptySample { .. } | StatsError::Serialization(_) => ErrorCategory::Data,
            StatsError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a run that ended with this error. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StatsError::Http(e) => match e.status() {
                Some(status) => format!("Job board API answered with HTTP {}", status),
                None => "Could not reach the job board API".to_string(),
            },
            StatsError::MissingSecret { name } => {
                format!("Credential {} is not set", name)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StatsError::Http(_) => "Check network access and API availability, then run again",
            StatsError::MissingSecret { .. } => {
                "Export the SuperJob application key or put it into a .env file"
            }
            StatsError::EmptySample { .. } => {
                "Use --empty-sample-policy skip to omit languages without salary data"
            }
            StatsError::Config { .. } | StatsError::InvalidConfigValue { .. } => {
                "Fix the configuration file and run again"
            }
            StatsError::Io(_) | StatsError::Serialization(_) => "Run again with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = [
            StatsError::MissingSecret {
                name: "SJ_SECRET_KEY".to_string(),
            },
            StatsError::EmptySample {
                source_name: "Headhunter".to_string(),
                language: "Go".to_string(),
            },
            StatsError::Config {
                message: "broken".to_string(),
            },
            StatsError::Io(std::io::Error::other("disk")),
        ];

        for error in &errors {
            assert_ne!(error.exit_code(), 0, "{}", error);
        }
    }

    #[test]
    fn test_missing_secret_is_configuration_error() {
        let error = StatsError::MissingSecret {
            name: "SJ_SECRET_KEY".to_string(),
        };
        assert_eq!(error.category(), ErrorCategory::Configuration);
        assert!(error.user_friendly_message().contains("SJ_SECRET_KEY"));
    }
}
