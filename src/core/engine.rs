use crate::adapters::{headhunter::HeadhunterClient, superjob::SuperJobClient};
use crate::config::{SourceSelection, StatsConfig};
use crate::core::aggregator::StatisticsAggregator;
use crate::core::{EmptySamplePolicy, Result, SecretProvider, SourceReport, VacancySource};

pub struct StatsEngine {
    aggregator: StatisticsAggregator,
    sources: Vec<Box<dyn VacancySource>>,
}

impl StatsEngine {
    pub fn new(aggregator: StatisticsAggregator) -> Self {
        Self {
            aggregator,
            sources: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: Box<dyn VacancySource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Builds the selected sources, Headhunter first. Credentials are
    /// resolved here, so a missing key fails before any request. The legacy
    /// policy also restores Headhunter's counting of salaries without bounds.
    pub fn from_config(
        config: &StatsConfig,
        selection: SourceSelection,
        secrets: &dyn SecretProvider,
    ) -> Result<Self> {
        let mut engine = Self::new(StatisticsAggregator::from_config(config));

        if selection.includes_headhunter() {
            let mut headhunter = config.headhunter.clone();
            if config.empty_sample_policy == EmptySamplePolicy::Legacy {
                headhunter.include_unsalaried = true;
            }
            engine = engine.with_source(Box::new(HeadhunterClient::new(headhunter)));
        }
        if selection.includes_superjob() {
            engine = engine.with_source(Box::new(SuperJobClient::new(
                config.superjob.clone(),
                secrets,
            )?));
        }

        Ok(engine)
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Runs the sources one after another and hands each finished report to
    /// `on_report` before the next source starts.
    pub async fn run_each<F>(&self, mut on_report: F) -> Result<Vec<SourceReport>>
    where
        F: FnMut(&SourceReport) -> Result<()>,
    {
        tracing::info!(
            "Collecting statistics for {} languages from {:?}",
            self.aggregator.languages().len(),
            self.source_names()
        );

        let mut reports = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            let report = self.aggregator.aggregate(source.as_ref()).await?;
            if !report.skipped.is_empty() {
                tracing::warn!(
                    "{}: {} language(s) without salary data omitted: {}",
                    source.name(),
                    report.skipped.len(),
                    report.skipped.join(", ")
                );
            }
            on_report(&report)?;
            reports.push(report);
        }

        Ok(reports)
    }

    pub async fn run(&self) -> Result<Vec<SourceReport>> {
        self.run_each(|_| Ok(())).await
    }
}
