use crate::config::StatsConfig;
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{
    validate_languages, validate_non_empty_string, validate_range, validate_url, Validate,
};
use regex::Regex;
use std::path::Path;

impl StatsConfig {
    /// Load configuration from a TOML file. Missing keys keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StatsError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatsError::Config {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for StatsConfig {
    fn validate(&self) -> Result<()> {
        validate_languages("languages", &self.languages)?;

        let hh = &self.headhunter;
        validate_url("headhunter.endpoint", &hh.endpoint)?;
        validate_non_empty_string("headhunter.currency", &hh.currency)?;
        validate_range("headhunter.per_page", hh.per_page, 1, 100)?;
        validate_range("headhunter.pages", hh.pages, 1, 20)?;
        validate_range("headhunter.period_days", hh.period_days, 1, 30)?;

        let sj = &self.superjob;
        validate_url("superjob.endpoint", &sj.endpoint)?;
        validate_non_empty_string("superjob.currency", &sj.currency)?;
        validate_non_empty_string("superjob.town", &sj.town)?;
        validate_non_empty_string("superjob.secret_env", &sj.secret_env)?;
        validate_range("superjob.count", sj.count, 1, 100)?;

        Ok(())
    }
}
