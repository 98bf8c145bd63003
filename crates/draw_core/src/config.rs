//! Run configuration with fail-fast validation.

use std::error::Error;
use std::fmt;

use crate::range::IntRange;

/// Configuration errors detected before any pipeline stage runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `min >= max`: the range contains no values.
    EmptyRange { min: i64, max: i64 },
    /// Requested set cardinality exceeds the distinct values in the range,
    /// so rejection sampling could never terminate.
    SetSizeExceedsRange { set_size: usize, span: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyRange { min, max } => {
                write!(f, "invalid range: min {min} must be less than max {max}")
            }
            ConfigError::SetSizeExceedsRange { set_size, span } => {
                write!(
                    f,
                    "set size {set_size} exceeds the {span} distinct values in the range"
                )
            }
        }
    }
}

impl Error for ConfigError {}

/// Parameters for a single draw run.
#[derive(Debug, Clone)]
pub struct DrawParams {
    /// Inclusive lower bound of the draw range.
    pub min_range: i64,
    /// Exclusive upper bound of the draw range.
    pub max_range: i64,
    /// Number of sets to draw.
    pub num_sets: usize,
    /// Unique integers per set.
    pub set_size: usize,
    /// Optional seed for reproducible draws. If None, seeded from entropy.
    pub seed: Option<u64>,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            min_range: 0,
            max_range: 100,
            num_sets: 5,
            set_size: 5,
            seed: None,
        }
    }
}

impl DrawParams {
    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min_range = min;
        self.max_range = max;
        self
    }

    pub fn with_num_sets(mut self, num_sets: usize) -> Self {
        self.num_sets = num_sets;
        self
    }

    pub fn with_set_size(mut self, set_size: usize) -> Self {
        self.set_size = set_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and return the draw range.
    ///
    /// Both preconditions are checked up front: the range must be non-empty,
    /// and the requested set size must fit within its distinct value space.
    pub fn validate(&self) -> Result<IntRange, ConfigError> {
        let range = IntRange::new(self.min_range, self.max_range)?;
        if self.set_size as u64 > range.span() {
            return Err(ConfigError::SetSizeExceedsRange {
                set_size: self.set_size,
                span: range.span(),
            });
        }
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_external_interface() {
        let params = DrawParams::default();
        assert_eq!(params.min_range, 0);
        assert_eq!(params.max_range, 100);
        assert_eq!(params.num_sets, 5);
        assert_eq!(params.set_size, 5);
        assert_eq!(params.seed, None);
    }

    #[test]
    fn validate_accepts_default_params() {
        let range = DrawParams::default().validate().unwrap();
        assert_eq!(range.min(), 0);
        assert_eq!(range.max(), 100);
    }

    #[test]
    fn validate_rejects_empty_range() {
        let params = DrawParams::default().with_range(100, 0);
        assert!(matches!(
            params.validate(),
            Err(ConfigError::EmptyRange { .. })
        ));
    }

    #[test]
    fn validate_rejects_set_size_beyond_span() {
        let params = DrawParams::default().with_range(0, 10).with_set_size(11);
        assert_eq!(
            params.validate(),
            Err(ConfigError::SetSizeExceedsRange {
                set_size: 11,
                span: 10
            })
        );
    }

    #[test]
    fn validate_accepts_set_size_equal_to_span() {
        let params = DrawParams::default().with_range(0, 10).with_set_size(10);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn config_error_messages_name_the_offending_values() {
        let err = ConfigError::EmptyRange { min: 5, max: 5 };
        assert_eq!(err.to_string(), "invalid range: min 5 must be less than max 5");

        let err = ConfigError::SetSizeExceedsRange {
            set_size: 11,
            span: 10,
        };
        assert_eq!(
            err.to_string(),
            "set size 11 exceeds the 10 distinct values in the range"
        );
    }
}
