pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{headhunter::HeadhunterClient, secrets::EnvSecrets, superjob::SuperJobClient};
pub use config::{HeadhunterConfig, SourceSelection, StatsConfig, SuperJobConfig};
pub use core::{
    aggregator::StatisticsAggregator,
    engine::StatsEngine,
    report::{print_report, render_table},
    salary::estimate,
};
pub use domain::model::{EmptySamplePolicy, NormalizedSalary, SalarySample, SourceReport, SummaryRow};
pub use utils::error::{Result, StatsError};
