//! Configuration for posterior comparisons.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, Result};
use crate::types::Region;

/// Default number of Monte Carlo samples.
pub const DEFAULT_SAMPLES: usize = 50_000;

/// Default prior strength of the sign test.
pub const SIGN_TEST_PRIOR_STRENGTH: f64 = 1.0;

/// Default prior strength of the signed-rank test.
pub const SIGNED_RANK_PRIOR_STRENGTH: f64 = 0.6;

/// Posterior model used for the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Model {
    /// Dirichlet-multinomial over the three region counts.
    SignTest,
    /// Dirichlet Process with pairwise dominance kernels.
    SignedRank,
}

impl Model {
    /// Prior strength used when none is configured.
    pub fn default_prior_strength(self) -> f64 {
        match self {
            Model::SignTest => SIGN_TEST_PRIOR_STRENGTH,
            Model::SignedRank => SIGNED_RANK_PRIOR_STRENGTH,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::SignTest => write!(f, "sign test"),
            Model::SignedRank => write!(f, "signed-rank test"),
        }
    }
}

/// Configuration options for [`RopeComparison`](crate::RopeComparison).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Posterior model.
    pub model: Model,

    /// Half-width of the region of practical equivalence (>= 0).
    ///
    /// Differences within `[-rope, rope]` count as practically equivalent.
    pub rope: f64,

    /// Prior strength (>= 0). Default: 1.0 for the sign test, 0.6 for the
    /// signed-rank test.
    pub prior_strength: f64,

    /// Region that receives the prior mass (default: `Rope`).
    pub prior_place: Region,

    /// Monte Carlo samples (default: 50,000).
    pub samples: usize,

    /// Optional deterministic seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Print a one-line summary after each comparison.
    pub verbose: bool,

    /// Names of the two compared series, used in reports.
    pub names: (String, String),
}

impl Config {
    /// Defaults for `model` with the given rope.
    pub fn new(model: Model, rope: f64) -> Self {
        Self {
            model,
            rope,
            prior_strength: model.default_prior_strength(),
            prior_place: Region::Rope,
            samples: DEFAULT_SAMPLES,
            seed: None,
            verbose: false,
            names: ("C1".to_string(), "C2".to_string()),
        }
    }

    /// Sign-test defaults.
    pub fn sign_test(rope: f64) -> Self {
        Self::new(Model::SignTest, rope)
    }

    /// Signed-rank defaults.
    pub fn signed_rank(rope: f64) -> Self {
        Self::new(Model::SignedRank, rope)
    }

    /// Reduced sample count for fast checks (5,000 samples).
    pub fn quick(self) -> Self {
        Self {
            samples: 5_000,
            ..self
        }
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for a
    /// negative or non-finite rope or prior strength.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("rope", self.rope)?;
        ensure_non_negative("prior_strength", self.prior_strength)?;
        Ok(())
    }

    /// Merge overrides from `BAYES_ROPE_*` environment variables.
    ///
    /// Recognised: `BAYES_ROPE_SAMPLES`, `BAYES_ROPE_SEED`,
    /// `BAYES_ROPE_PRIOR_STRENGTH`, `BAYES_ROPE_PRIOR_PLACE`
    /// (`left|rope|right`) and `BAYES_ROPE_VERBOSE` (`1|true`). Values that
    /// do not parse are ignored.
    pub fn merge_env(mut self) -> Self {
        if let Some(samples) = parse_usize_env("BAYES_ROPE_SAMPLES") {
            self.samples = samples;
        }
        if let Some(seed) = parse_u64_env("BAYES_ROPE_SEED") {
            self.seed = Some(seed);
        }
        if let Some(strength) = parse_f64_env("BAYES_ROPE_PRIOR_STRENGTH") {
            self.prior_strength = strength;
        }
        if let Some(place) = parse_region_env("BAYES_ROPE_PRIOR_PLACE") {
            self.prior_place = place;
        }
        if let Ok(val) = env::var("BAYES_ROPE_VERBOSE") {
            self.verbose = val == "1" || val.eq_ignore_ascii_case("true");
        }
        self
    }
}

impl Default for Config {
    /// Sign test with a zero-width rope.
    fn default() -> Self {
        Self::sign_test(0.0)
    }
}

fn parse_usize_env(key: &str) -> Option<usize> {
    env::var(key).ok()?.parse().ok()
}

fn parse_u64_env(key: &str) -> Option<u64> {
    env::var(key).ok()?.parse().ok()
}

fn parse_f64_env(key: &str) -> Option<f64> {
    env::var(key).ok()?.parse().ok()
}

fn parse_region_env(key: &str) -> Option<Region> {
    env::var(key).ok()?.parse().ok()
}
