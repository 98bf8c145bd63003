//! Number-draw pipeline: random set generation, complement computation,
//! and largest-prime selection over a bounded integer range.
//!
//! The three stages are pure functions composed by [`runner`]; callers log
//! inputs and outputs at the boundary.

pub mod complement;
pub mod config;
pub mod generator;
pub mod primes;
pub mod range;
pub mod report;
pub mod runner;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use config::{ConfigError, DrawParams};
pub use generator::{RandomSetGenerator, SetGenerator};
pub use range::IntRange;
pub use report::{export_report_to_json, DrawReport};
pub use runner::{run_draw, run_draw_with_threads, run_stages, DrawOutcome};
