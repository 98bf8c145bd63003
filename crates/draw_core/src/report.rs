//! Report building and JSON export for completed draws.

use std::fs::File;
use std::path::Path;

use crate::config::DrawParams;
use crate::runner::DrawOutcome;

/// Serializable summary of a completed draw run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DrawReport {
    pub min_range: i64,
    pub max_range: i64,
    pub num_sets: usize,
    pub set_size: usize,
    pub seed: Option<u64>,
    /// Each generated set sorted ascending; outer order is generation order.
    pub sets: Vec<Vec<i64>>,
    /// Available numbers, sorted ascending.
    pub available_numbers: Vec<i64>,
    pub available_count: usize,
    pub largest_prime: Option<i64>,
}

impl DrawReport {
    /// Build a report from a finished outcome and the parameters that
    /// produced it.
    pub fn new(params: &DrawParams, outcome: &DrawOutcome) -> Self {
        let sets: Vec<Vec<i64>> = outcome.sets.iter().map(sorted).collect();
        let available_numbers = sorted(&outcome.available);

        Self {
            min_range: params.min_range,
            max_range: params.max_range,
            num_sets: params.num_sets,
            set_size: params.set_size,
            seed: params.seed,
            sets,
            available_count: available_numbers.len(),
            available_numbers,
            largest_prime: outcome.largest_prime,
        }
    }
}

fn sorted(set: &std::collections::HashSet<i64>) -> Vec<i64> {
    let mut values: Vec<i64> = set.iter().copied().collect();
    values.sort_unstable();
    values
}

/// Write a report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn export_report_to_json(
    report: &DrawReport,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}
