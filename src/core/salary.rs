use crate::domain::model::NormalizedSalary;

const FLOOR_ONLY_FACTOR: f64 = 1.2;
const CEILING_ONLY_FACTOR: f64 = 0.8;

impl NormalizedSalary {
    /// Estimated average salary.
    ///
    /// Both bounds give their midpoint. A lone lower bound is raised by 20%,
    /// a lone upper bound lowered by 20%. Results truncate toward zero.
    pub fn estimate(&self) -> u64 {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from / 2 + to / 2 + (from % 2 + to % 2) / 2,
            (Some(from), None) => (from as f64 * FLOOR_ONLY_FACTOR) as u64,
            (None, Some(to)) => (to as f64 * CEILING_ONLY_FACTOR) as u64,
            (None, None) => 0,
        }
    }
}

/// Estimate for raw bounds where `0` means the bound is unknown.
pub fn estimate(from: u64, to: u64) -> u64 {
    NormalizedSalary::from_bounds(Some(from), Some(to)).estimate()
}
