pub mod aggregator;
pub mod engine;
pub mod report;
pub mod salary;

pub use crate::domain::model::{
    EmptySamplePolicy, NormalizedSalary, SalarySample, SourceReport, SummaryRow,
};
pub use crate::domain::ports::{SecretProvider, VacancySource};
pub use crate::utils::error::Result;
