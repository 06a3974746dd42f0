use crate::config::SuperJobConfig;
use crate::domain::model::{EmptySamplePolicy, NormalizedSalary, SalarySample, SummaryRow};
use crate::domain::ports::{SecretProvider, VacancySource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const APP_ID_HEADER: &str = "X-Api-App-Id";

/// Response of the SuperJob `/2.0/vacancies/` search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SjResponse {
    #[serde(default)]
    pub objects: Vec<SjVacancy>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SjVacancy {
    #[serde(default)]
    pub payment_from: Option<u64>,
    #[serde(default)]
    pub payment_to: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl SjVacancy {
    /// Only vacancies publishing both bounds in `currency` qualify.
    pub fn normalized(&self, currency: &str) -> Option<NormalizedSalary> {
        if self.currency.as_deref() != Some(currency) {
            return None;
        }
        let salary = NormalizedSalary::from_bounds(self.payment_from, self.payment_to);
        salary.has_both_bounds().then_some(salary)
    }
}

pub struct SuperJobClient {
    client: Client,
    config: SuperJobConfig,
    app_id: String,
}

impl SuperJobClient {
    /// Resolves the application key up front so a missing key fails before
    /// any request is made.
    pub fn new(config: SuperJobConfig, secrets: &dyn SecretProvider) -> Result<Self> {
        let app_id = secrets.get(&config.secret_env)?;
        Ok(Self {
            client: Client::new(),
            config,
            app_id,
        })
    }

    pub async fn fetch(&self, query: &str) -> Result<SjResponse> {
        let params = [
            ("keyword", query.to_string()),
            ("town", self.config.town.clone()),
            ("period", self.config.period_days.to_string()),
            ("count", self.config.count.to_string()),
        ];
        tracing::debug!("GET {} {:?}", self.config.endpoint, params);

        let response = self
            .client
            .get(&self.config.endpoint)
            .header(APP_ID_HEADER, &self.app_id)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Summary row for one language, `None` when nothing qualified.
    pub async fn fetch_and_summarize(
        &self,
        language: &str,
        query: &str,
    ) -> Result<Option<SummaryRow>> {
        let sample = self.collect(query).await?;
        Ok(SummaryRow::from_sample(language, &sample))
    }
}

#[async_trait]
impl VacancySource for SuperJobClient {
    fn name(&self) -> &str {
        "SuperJob"
    }

    fn title(&self) -> &str {
        &self.config.title
    }

    fn legacy_empty_policy(&self) -> EmptySamplePolicy {
        EmptySamplePolicy::Skip
    }

    async fn collect(&self, query: &str) -> Result<SalarySample> {
        let response = self.fetch(query).await?;

        let mut sample = SalarySample::new(response.total);
        for vacancy in &response.objects {
            if let Some(salary) = vacancy.normalized(&self.config.currency) {
                sample.push(salary.estimate());
            }
        }

        tracing::debug!(
            "'{}': {} of {} vacancies qualify",
            query,
            sample.vacancies_processed(),
            response.total
        );
        Ok(sample)
    }
}
