use crate::domain::model::{EmptySamplePolicy, SalarySample};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A job board that can be queried for salary statistics.
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    /// Title of the rendered table.
    fn title(&self) -> &str;

    /// Policy this source applied before the policy became configurable.
    fn legacy_empty_policy(&self) -> EmptySamplePolicy;

    /// Runs every request needed for one search query and returns the
    /// estimates of the qualifying vacancies.
    async fn collect(&self, query: &str) -> Result<SalarySample>;
}

pub trait SecretProvider: Send + Sync {
    fn get(&self, name: &str) -> Result<String>;
}
