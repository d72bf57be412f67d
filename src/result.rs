//! Comparison result types.

use serde::{Deserialize, Serialize};

use crate::config::Model;
use crate::types::{PosteriorSamples, Probabilities, Region};

/// Posterior probability at which a region is considered decided.
pub const DEFAULT_DECISION_THRESHOLD: f64 = 0.95;

/// Complete result of a posterior comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Probabilities that each region is the most probable one.
    pub probabilities: Probabilities,

    /// Names of the compared series (first, second).
    pub names: (String, String),

    /// Metadata for debugging and reproduction.
    pub metadata: Metadata,

    /// Raw posterior draws, one row per Monte Carlo sample. Not serialized.
    #[serde(skip)]
    pub samples: PosteriorSamples,
}

impl ComparisonResult {
    /// Most probable region (ties go to the lower index).
    pub fn most_probable(&self) -> Region {
        self.probabilities.most_probable()
    }

    /// Decision at the given probability threshold.
    pub fn decision(&self, threshold: f64) -> Decision {
        Decision::from_probabilities(&self.probabilities, threshold)
    }
}

/// Verdict of a comparison at a probability threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Decision {
    /// The first series is practically better.
    FirstBetter,
    /// The two series are practically equivalent.
    Equivalent,
    /// The second series is practically better.
    SecondBetter,
    /// No region reaches the threshold.
    Undecided,
}

impl Decision {
    /// Pick the region whose probability reaches `threshold`, if any.
    ///
    /// With `threshold > 0.5` at most one region can qualify.
    pub fn from_probabilities(p: &Probabilities, threshold: f64) -> Self {
        let best = p.most_probable();
        if p.get(best) < threshold {
            return Decision::Undecided;
        }
        match best {
            Region::Left => Decision::FirstBetter,
            Region::Rope => Decision::Equivalent,
            Region::Right => Decision::SecondBetter,
        }
    }
}

/// Metadata for debugging and reproduction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Posterior model.
    pub model: Model,
    /// Number of paired observations.
    pub n_observations: usize,
    /// Rope half-width.
    pub rope: f64,
    /// Prior strength.
    pub prior_strength: f64,
    /// Region that received the prior mass.
    pub prior_place: Region,
    /// Monte Carlo samples drawn.
    pub samples: usize,
    /// Seed used, if the run was seeded.
    pub seed: Option<u64>,
    /// Total runtime in seconds.
    pub runtime_secs: f64,
}
