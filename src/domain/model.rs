use serde::{Deserialize, Serialize};

/// Salary bounds in the accepted currency. A zero bound is stored as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizedSalary {
    pub from: Option<u64>,
    pub to: Option<u64>,
}

impl NormalizedSalary {
    // Zero and unknown fold into the same absent bound.
    pub fn from_bounds(from: Option<u64>, to: Option<u64>) -> Self {
        Self {
            from: from.filter(|v| *v != 0),
            to: to.filter(|v| *v != 0),
        }
    }

    pub fn has_both_bounds(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    pub fn is_unsalaried(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Salary estimates collected for one search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalarySample {
    /// Total matches reported by the source, independent of pages fetched.
    pub vacancies_found: u64,
    pub estimates: Vec<u64>,
}

impl SalarySample {
    pub fn new(vacancies_found: u64) -> Self {
        Self {
            vacancies_found,
            estimates: Vec::new(),
        }
    }

    pub fn push(&mut self, estimate: u64) {
        self.estimates.push(estimate);
    }

    pub fn vacancies_processed(&self) -> u64 {
        self.estimates.len() as u64
    }

    /// Mean of the estimates truncated toward zero, `None` for an empty sample.
    pub fn mean(&self) -> Option<u64> {
        if self.estimates.is_empty() {
            return None;
        }
        let sum: u128 = self.estimates.iter().map(|e| u128::from(*e)).sum();
        Some((sum / u128::from(self.vacancies_processed())) as u64)
    }

    pub fn is_empty(&self) -> bool {
        self.vacancies_found == 0 || self.estimates.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub language: String,
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

impl SummaryRow {
    pub fn from_sample(language: &str, sample: &SalarySample) -> Option<Self> {
        if sample.is_empty() {
            return None;
        }
        Some(Self {
            language: language.to_string(),
            vacancies_found: sample.vacancies_found,
            vacancies_processed: sample.vacancies_processed(),
            average_salary: sample.mean()?,
        })
    }

    pub fn cells(&self) -> [String; 4] {
        [
            self.language.clone(),
            self.vacancies_found.to_string(),
            self.vacancies_processed.to_string(),
            self.average_salary.to_string(),
        ]
    }
}

/// What happens to a language without a single qualifying vacancy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum EmptySamplePolicy {
    /// Omit the row and note the language in the report.
    #[default]
    Skip,
    /// Abort the run.
    Fail,
    /// Each source keeps its historical behaviour.
    Legacy,
}

impl EmptySamplePolicy {
    /// Resolves `Legacy` against the source's own historical policy.
    pub fn resolve(self, legacy: EmptySamplePolicy) -> EmptySamplePolicy {
        match self {
            EmptySamplePolicy::Legacy => legacy,
            policy => policy,
        }
    }
}

/// Rows collected from one source, in language-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub title: String,
    pub rows: Vec<SummaryRow>,
    pub skipped: Vec<String>,
}
