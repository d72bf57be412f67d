//! # bayes-rope
//!
//! Bayesian comparison of two paired measurement series (e.g. the accuracies
//! of two classifiers over the same datasets) with a region of practical
//! equivalence (ROPE).
//!
//! Given paired differences, the crate estimates by Monte Carlo simulation:
//! - P(first series is practically better) (`left`)
//! - P(the series are practically equivalent) (`rope`)
//! - P(second series is practically better) (`right`)
//!
//! Two nonparametric models are available:
//! - **Sign test**: Dirichlet posterior over the counts of differences below,
//!   inside and above `[-rope, rope]`.
//! - **Signed-rank test**: Dirichlet Process posterior evaluated through
//!   pairwise dominance kernels (a Bayesian Wilcoxon signed-rank test).
//!
//! ## Quick Start
//!
//! ```
//! use bayes_rope::{signtest, RopeComparison, Region};
//!
//! // Accuracy differences (second - first) over five datasets.
//! let diffs = [0.2, 0.1, -0.05, 0.3, 0.15];
//!
//! let p = signtest(&diffs, 0.05).unwrap();
//! assert!((p.left + p.rope + p.right - 1.0).abs() < 1e-9);
//!
//! // Full control over the prior and reproducibility.
//! let p = RopeComparison::signed_rank(0.05)
//!     .prior_strength(0.6)
//!     .prior_place(Region::Rope)
//!     .samples(5_000)
//!     .seed(1)
//!     .names("svm", "knn")
//!     .run(&diffs)
//!     .unwrap();
//! assert!(p.right > p.left);
//! ```
//!
//! Paired scores can be passed directly; each row `(a, b)` becomes `b - a`:
//!
//! ```
//! let scores = [[0.81, 0.84], [0.77, 0.79], [0.90, 0.90]];
//! let p = bayes_rope::signrank(scores, 0.01).unwrap();
//! assert!(p.left >= 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod comparison;
mod config;
mod error;
mod input;
mod result;
mod thread_pool;
mod types;

// Functional modules
pub mod analysis;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use comparison::RopeComparison;
pub use config::{
    Config, Model, DEFAULT_SAMPLES, SIGNED_RANK_PRIOR_STRENGTH, SIGN_TEST_PRIOR_STRENGTH,
};
pub use error::{Error, Result};
pub use input::{check_differences, Observations};
pub use result::{ComparisonResult, Decision, Metadata, DEFAULT_DECISION_THRESHOLD};
pub use types::{PosteriorSamples, Probabilities, Region, NEGLIGIBLE_MASS};

/// Bayesian sign test with default settings.
///
/// Prior strength 1 placed on the rope, 50,000 Monte Carlo samples, seeded
/// from the operating system.
///
/// # Errors
///
/// See [`RopeComparison::analyze`].
pub fn signtest(x: impl Into<Observations>, rope: f64) -> Result<Probabilities> {
    RopeComparison::sign_test(rope).run(x)
}

/// Bayesian signed-rank test with default settings.
///
/// Prior strength 0.6 placed on the rope, 50,000 Monte Carlo samples, seeded
/// from the operating system.
///
/// # Errors
///
/// See [`RopeComparison::analyze`].
pub fn signrank(x: impl Into<Observations>, rope: f64) -> Result<Probabilities> {
    RopeComparison::signed_rank(rope).run(x)
}
