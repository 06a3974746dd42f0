use crate::config::{SourceSelection, StatsConfig};
use crate::domain::model::EmptySamplePolicy;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "salary-stats")]
#[command(about = "Vacancy counts and average salaries per programming language")]
pub struct CliConfig {
    #[arg(long, help = "TOML file overriding the built-in defaults")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "all")]
    pub source: SourceSelection,

    #[arg(long, value_enum, help = "Overrides empty_sample_policy from the config file")]
    pub empty_sample_policy: Option<EmptySamplePolicy>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn load_config(&self) -> Result<StatsConfig> {
        let mut config = match &self.config {
            Some(path) => StatsConfig::from_file(path)?,
            None => StatsConfig::default(),
        };
        if let Some(policy) = self.empty_sample_policy {
            config.empty_sample_policy = policy;
        }
        Ok(config)
    }
}
