use crate::config::HeadhunterConfig;
use crate::domain::model::{EmptySamplePolicy, NormalizedSalary, SalarySample};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// One page of the hh.ru `/vacancies` search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HhPage {
    #[serde(default)]
    pub found: u64,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub items: Vec<HhVacancy>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HhVacancy {
    #[serde(default)]
    pub salary: Option<HhSalary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HhSalary {
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub currency: Option<String>,
}

impl HhVacancy {
    /// Salary in `currency`, or `None` when the vacancy does not qualify.
    /// A salary object without bounds only qualifies with `include_unsalaried`,
    /// and then estimates to zero.
    pub fn normalized(
        &self,
        currency: &str,
        include_unsalaried: bool,
    ) -> Option<NormalizedSalary> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some(currency) {
            return None;
        }
        let normalized = NormalizedSalary::from_bounds(salary.from, salary.to);
        (include_unsalaried || !normalized.is_unsalaried()).then_some(normalized)
    }
}

pub struct HeadhunterClient {
    client: Client,
    config: HeadhunterConfig,
}

impl HeadhunterClient {
    pub fn new(config: HeadhunterConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn base_params(&self, query: &str) -> Vec<(&'static str, String)> {
        vec![
            ("text", query.to_string()),
            ("area", self.config.area.to_string()),
            ("period", self.config.period_days.to_string()),
        ]
    }

    async fn get_page(&self, params: &[(&'static str, String)]) -> Result<HhPage> {
        tracing::debug!("GET {} {:?}", self.config.endpoint, params);
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(params)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Total number of vacancies matching `query`, from a zero-sized page.
    pub async fn total_count(&self, query: &str) -> Result<u64> {
        let mut params = self.base_params(query);
        params.push(("clusters", "true".to_string()));
        params.push(("per_page", "0".to_string()));

        let page = self.get_page(&params).await?;
        tracing::debug!("'{}': {} vacancies found", query, page.found);
        Ok(page.found)
    }

    pub async fn fetch_page(&self, query: &str, page: u32) -> Result<HhPage> {
        let mut params = self.base_params(query);
        params.push(("per_page", self.config.per_page.to_string()));
        params.push(("page", page.to_string()));
        self.get_page(&params).await
    }

    pub fn pages<'a>(&'a self, query: &str, page_count: u32) -> PageCursor<'a> {
        PageCursor {
            client: self,
            query: query.to_string(),
            limit: page_count,
            next: 0,
            reported_pages: None,
        }
    }

    /// Fetches pages `0..page_count` and concatenates their items.
    pub async fn fetch_pages(&self, query: &str, page_count: u32) -> Result<Vec<HhVacancy>> {
        let mut cursor = self.pages(query, page_count);
        let mut vacancies = Vec::new();
        while let Some(page) = cursor.next_page().await? {
            vacancies.extend(page.items);
        }
        Ok(vacancies)
    }
}

/// Pulls search pages one request at a time.
pub struct PageCursor<'a> {
    client: &'a HeadhunterClient,
    query: String,
    limit: u32,
    next: u32,
    reported_pages: Option<u32>,
}

impl PageCursor<'_> {
    pub async fn next_page(&mut self) -> Result<Option<HhPage>> {
        if self.next >= self.limit {
            return Ok(None);
        }
        if self.client.config.stop_after_last_page {
            if let Some(pages) = self.reported_pages {
                if self.next >= pages {
                    tracing::debug!("'{}': no pages after {}", self.query, pages);
                    return Ok(None);
                }
            }
        }

        let page = self.client.fetch_page(&self.query, self.next).await?;
        self.reported_pages = Some(page.pages);
        self.next += 1;
        Ok(Some(page))
    }

    pub fn pages_requested(&self) -> u32 {
        self.next
    }

    pub fn restart(&mut self) {
        self.next = 0;
        self.reported_pages = None;
    }
}

#[async_trait]
impl VacancySource for HeadhunterClient {
    fn name(&self) -> &str {
        "Headhunter"
    }

    fn title(&self) -> &str {
        &self.config.title
    }

    fn legacy_empty_policy(&self) -> EmptySamplePolicy {
        EmptySamplePolicy::Fail
    }

    async fn collect(&self, query: &str) -> Result<SalarySample> {
        let mut sample = SalarySample::new(self.total_count(query).await?);

        let mut cursor = self.pages(query, self.config.pages);
        while let Some(page) = cursor.next_page().await? {
            for vacancy in &page.items {
                if let Some(salary) =
                    vacancy.normalized(&self.config.currency, self.config.include_unsalaried)
                {
                    sample.push(salary.estimate());
                }
            }
        }

        tracing::debug!(
            "'{}': {} qualifying vacancies on {} pages",
            query,
            sample.vacancies_processed(),
            cursor.pages_requested()
        );
        Ok(sample)
    }
}
