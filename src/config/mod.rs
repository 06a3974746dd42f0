#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::EmptySamplePolicy;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGES: [&str; 10] = [
    "Kotlin",
    "Go",
    "Javascript",
    "Typescript",
    "Python",
    "Java",
    "PHP",
    "Swift",
    "C++",
    "C#",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Languages in the order they appear in the tables.
    pub languages: Vec<String>,
    /// Prepended to every language to form the vacancy title search.
    pub query_prefix: String,
    pub empty_sample_policy: EmptySamplePolicy,
    pub headhunter: HeadhunterConfig,
    pub superjob: SuperJobConfig,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            query_prefix: "программист".to_string(),
            empty_sample_policy: EmptySamplePolicy::default(),
            headhunter: HeadhunterConfig::default(),
            superjob: SuperJobConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadhunterConfig {
    pub endpoint: String,
    pub title: String,
    /// hh.ru region id, 1 is Moscow.
    pub area: u32,
    pub period_days: u32,
    pub per_page: u32,
    pub pages: u32,
    pub currency: String,
    /// Stop requesting once the response says there are no more pages.
    pub stop_after_last_page: bool,
    /// Count salaries in `currency` that publish neither bound, as zero.
    pub include_unsalaried: bool,
}

impl Default for HeadhunterConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.hh.ru/vacancies/".to_string(),
            title: "Headhunter Moscow".to_string(),
            area: 1,
            period_days: 30,
            per_page: 100,
            pages: 10,
            currency: "RUR".to_string(),
            stop_after_last_page: false,
            include_unsalaried: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
    pub endpoint: String,
    pub title: String,
    pub town: String,
    pub period_days: u32,
    pub count: u32,
    pub currency: String,
    /// Environment variable holding the `X-Api-App-Id` key.
    pub secret_env: String,
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            title: "SuperJob Moscow".to_string(),
            town: "Москва".to_string(),
            period_days: 30,
            count: 100,
            currency: "rub".to_string(),
            secret_env: "SJ_SECRET_KEY".to_string(),
        }
    }
}

/// Which job boards a run queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SourceSelection {
    Hh,
    Sj,
    #[default]
    All,
}

impl SourceSelection {
    pub fn includes_headhunter(self) -> bool {
        matches!(self, SourceSelection::Hh | SourceSelection::All)
    }

    pub fn includes_superjob(self) -> bool {
        matches!(self, SourceSelection::Sj | SourceSelection::All)
    }
}

impl StatsConfig {
    pub fn query_for(&self, language: &str) -> String {
        build_query(&self.query_prefix, language)
    }
}

pub(crate) fn build_query(prefix: &str, language: &str) -> String {
    if prefix.trim().is_empty() {
        language.to_string()
    } else {
        format!("{} {}", prefix.trim(), language)
    }
}
