use crate::config::{build_query, StatsConfig};
use crate::core::{EmptySamplePolicy, Result, SourceReport, SummaryRow, VacancySource};
use crate::utils::error::StatsError;

/// Runs a source across the language list and builds its report.
#[derive(Debug, Clone)]
pub struct StatisticsAggregator {
    languages: Vec<String>,
    query_prefix: String,
    policy: EmptySamplePolicy,
}

impl StatisticsAggregator {
    pub fn new(languages: Vec<String>, query_prefix: String, policy: EmptySamplePolicy) -> Self {
        Self {
            languages,
            query_prefix,
            policy,
        }
    }

    pub fn from_config(config: &StatsConfig) -> Self {
        Self::new(
            config.languages.clone(),
            config.query_prefix.clone(),
            config.empty_sample_policy,
        )
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Queries `source` once per language, in list order. The first error
    /// aborts the pass.
    pub async fn aggregate(&self, source: &dyn VacancySource) -> Result<SourceReport> {
        let policy = self.policy.resolve(source.legacy_empty_policy());
        let mut report = SourceReport {
            title: source.title().to_string(),
            ..SourceReport::default()
        };

        for language in &self.languages {
            let query = build_query(&self.query_prefix, language);
            let sample = source.collect(&query).await?;

            match SummaryRow::from_sample(language, &sample) {
                Some(row) => {
                    tracing::info!(
                        "{} {}: found {}, processed {}, average {}",
                        source.name(),
                        row.language,
                        row.vacancies_found,
                        row.vacancies_processed,
                        row.average_salary
                    );
                    report.rows.push(row);
                }
                None if policy == EmptySamplePolicy::Fail => {
                    return Err(StatsError::EmptySample {
                        source_name: source.name().to_string(),
                        language: language.clone(),
                    });
                }
                None => {
                    tracing::warn!(
                        "{} {}: no qualifying vacancies (found {}), skipped",
                        source.name(),
                        language,
                        sample.vacancies_found
                    );
                    report.skipped.push(language.clone());
                }
            }
        }

        Ok(report)
    }
}
