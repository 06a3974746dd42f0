use crate::domain::ports::SecretProvider;
use crate::utils::error::{Result, StatsError};

/// Reads credentials from the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSecrets;

impl EnvSecrets {
    /// Loads `.env` from the working directory if there is one, then reads
    /// from the environment. Variables already set take precedence.
    pub fn with_dotenv() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
        }
        Self
    }
}

impl SecretProvider for EnvSecrets {
    fn get(&self, name: &str) -> Result<String> {
        match std::env::var(name) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(StatsError::MissingSecret {
                name: name.to_string(),
            }),
        }
    }
}
