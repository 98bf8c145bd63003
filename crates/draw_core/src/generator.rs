//! Random set generation via rejection sampling.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ConfigError;
use crate::range::IntRange;

/// Trait for producing a sequence of integer sets.
///
/// The pipeline consumes this seam polymorphically: the production
/// implementation draws random sets, while tests substitute fixed data.
pub trait SetGenerator: Send + Sync {
    /// Produce the configured sequence of sets.
    fn generate(&self) -> Vec<HashSet<i64>>;
}

/// Draws `num_sets` sets of `set_size` unique integers from a range.
///
/// Each set is built by rejection sampling: uniform draws land in a
/// `HashSet` until its cardinality reaches `set_size`, so duplicates are
/// discarded and redrawn. The same integer may still appear across
/// different sets.
#[derive(Debug, Clone)]
pub struct RandomSetGenerator {
    range: IntRange,
    set_size: usize,
    num_sets: usize,
    /// Seed for RNG (for reproducibility). If None, seeded from entropy.
    seed: Option<u64>,
}

impl RandomSetGenerator {
    /// Create a generator.
    ///
    /// Rejects set sizes larger than the distinct value space of `range`:
    /// with fewer distinct values than requested, the draw loop would never
    /// terminate, so this is refused up front instead.
    pub fn new(range: IntRange, set_size: usize, num_sets: usize) -> Result<Self, ConfigError> {
        if set_size as u64 > range.span() {
            return Err(ConfigError::SetSizeExceedsRange {
                set_size,
                span: range.span(),
            });
        }
        Ok(Self {
            range,
            set_size,
            num_sets,
            seed: None,
        })
    }

    /// Seed the generator for reproducible draws.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn single_set(&self, rng: &mut StdRng) -> HashSet<i64> {
        let mut integers = HashSet::with_capacity(self.set_size);
        while integers.len() < self.set_size {
            integers.insert(rng.gen_range(self.range.min()..self.range.max()));
        }
        integers
    }
}

impl SetGenerator for RandomSetGenerator {
    fn generate(&self) -> Vec<HashSet<i64>> {
        let mut rng = self.rng();
        (0..self.num_sets).map(|_| self.single_set(&mut rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: i64, max: i64) -> IntRange {
        IntRange::new(min, max).unwrap()
    }

    #[test]
    fn values_are_at_least_min() {
        let generator = RandomSetGenerator::new(range(100, 1000), 5, 1).unwrap();
        let sets = generator.generate();
        for value in &sets[0] {
            assert!(*value >= 100, "value should be >= 100, was {value}");
        }
    }

    #[test]
    fn values_are_below_max() {
        // A single-value range forces every draw to the one possible value.
        let generator = RandomSetGenerator::new(range(0, 1), 1, 1).unwrap();
        let sets = generator.generate();
        let expected: HashSet<i64> = [0].into_iter().collect();
        assert_eq!(sets[0], expected);
    }

    #[test]
    fn set_cardinality_matches_requested_size() {
        let generator = RandomSetGenerator::new(range(0, 10), 5, 1).unwrap();
        let sets = generator.generate();
        assert_eq!(sets[0].len(), 5);
    }

    #[test]
    fn number_of_sets_matches_request() {
        let generator = RandomSetGenerator::new(range(0, 10), 1, 5).unwrap();
        let sets = generator.generate();
        assert_eq!(sets.len(), 5);
    }

    #[test]
    fn zero_sets_yields_empty_sequence() {
        let generator = RandomSetGenerator::new(range(0, 10), 5, 0).unwrap();
        assert!(generator.generate().is_empty());
    }

    #[test]
    fn zero_set_size_yields_empty_sets() {
        let generator = RandomSetGenerator::new(range(0, 10), 0, 3).unwrap();
        let sets = generator.generate();
        assert_eq!(sets.len(), 3);
        assert!(sets.iter().all(HashSet::is_empty));
    }

    #[test]
    fn set_size_equal_to_span_draws_the_full_range() {
        let generator = RandomSetGenerator::new(range(0, 5), 5, 1).unwrap();
        let sets = generator.generate();
        let expected: HashSet<i64> = (0..5).collect();
        assert_eq!(sets[0], expected);
    }

    #[test]
    fn oversized_set_size_is_rejected_at_construction() {
        let result = RandomSetGenerator::new(range(0, 5), 6, 1);
        assert_eq!(
            result.err(),
            Some(ConfigError::SetSizeExceedsRange {
                set_size: 6,
                span: 5
            })
        );
    }

    #[test]
    fn same_seed_reproduces_draws() {
        let a = RandomSetGenerator::new(range(0, 1000), 10, 4)
            .unwrap()
            .with_seed(42)
            .generate();
        let b = RandomSetGenerator::new(range(0, 1000), 10, 4)
            .unwrap()
            .with_seed(42)
            .generate();
        assert_eq!(a, b);
    }
}
