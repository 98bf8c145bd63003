//! Pipeline orchestration.
//!
//! Composes the three stages in order: set generation, complement
//! computation, largest-prime selection. The stages stay pure; callers log
//! inputs and outputs at the boundary.

use std::collections::HashSet;

use crate::complement::available_numbers;
use crate::config::{ConfigError, DrawParams};
use crate::generator::{RandomSetGenerator, SetGenerator};
use crate::primes::largest_prime;
use crate::range::IntRange;

/// In-memory result of a single draw run.
#[derive(Debug, Clone)]
pub struct DrawOutcome {
    /// The generated sets, in generation order.
    pub sets: Vec<HashSet<i64>>,
    /// Integers in the range absent from every generated set.
    pub available: HashSet<i64>,
    /// Largest prime among the available numbers, if any. Absence is a
    /// normal outcome, not a failure.
    pub largest_prime: Option<i64>,
}

/// Run the pipeline stages against an arbitrary set source.
///
/// Tests substitute a fixed-data generator here; production runs go
/// through [`run_draw`].
pub fn run_stages(generator: &dyn SetGenerator, range: IntRange) -> DrawOutcome {
    let sets = generator.generate();
    let available = available_numbers(&sets, range);
    let largest_prime = largest_prime(&available);
    DrawOutcome {
        sets,
        available,
        largest_prime,
    }
}

/// Validate `params` and run a full draw with the random generator.
pub fn run_draw(params: &DrawParams) -> Result<DrawOutcome, ConfigError> {
    let range = params.validate()?;
    let mut generator = RandomSetGenerator::new(range, params.set_size, params.num_sets)?;
    if let Some(seed) = params.seed {
        generator = generator.with_seed(seed);
    }
    Ok(run_stages(&generator, range))
}

/// Run a full draw on a dedicated rayon pool.
///
/// `num_threads = None` uses rayon's default sizing.
pub fn run_draw_with_threads(
    params: &DrawParams,
    num_threads: Option<usize>,
) -> Result<DrawOutcome, ConfigError> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = num_threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build().expect("Failed to create thread pool");
    pool.install(|| run_draw(params))
}
