//! Stable screening constants.
//!
//! Changing a value here affects every evaluation path: the evaluator
//! (`services/evaluator.rs`), report assembly (`services/report.rs`), and the
//! defaults written by `settings init`.

/// Default Tier 1 business-activity benchmark, percent of the denominator.
pub const DEFAULT_TIER1_BENCHMARK: f64 = 5.0;

/// Default Tier 2 financial-ratio threshold, percent of total assets.
pub const DEFAULT_TIER2_THRESHOLD: f64 = 33.0;

/// Lower bound accepted for a configurable percentage.
pub const PERCENT_MIN: f64 = 0.0;

/// Upper bound accepted for a configurable percentage.
pub const PERCENT_MAX: f64 = 100.0;
