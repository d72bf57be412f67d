//! Main `RopeComparison` entry point and builder.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, warn};

use crate::analysis::{reduce_posterior, sign_test_samples, signed_rank_samples};
use crate::config::{Config, Model};
use crate::error::Result;
use crate::input::Observations;
use crate::output::terminal::summary_line;
use crate::result::{ComparisonResult, Metadata};
use crate::types::{PosteriorSamples, Probabilities, Region};

/// Bayesian comparison of two paired series with a region of practical
/// equivalence.
///
/// Use the builder pattern to configure and run a comparison.
///
/// # Example
///
/// ```
/// use bayes_rope::{Region, RopeComparison};
///
/// let diffs = [0.2, 0.1, -0.05, 0.3, 0.15];
/// let p = RopeComparison::sign_test(0.05)
///     .prior_place(Region::Rope)
///     .samples(10_000)
///     .seed(42)
///     .run(&diffs)
///     .unwrap();
///
/// assert!(p.right > p.left);
/// ```
#[derive(Debug, Clone)]
pub struct RopeComparison {
    config: Config,
}

impl RopeComparison {
    /// Create from a full configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Sign test with default prior (strength 1, placed on the rope).
    pub fn sign_test(rope: f64) -> Self {
        Self::with_config(Config::sign_test(rope))
    }

    /// Signed-rank test with default prior (strength 0.6, placed on the rope).
    pub fn signed_rank(rope: f64) -> Self {
        Self::with_config(Config::signed_rank(rope))
    }

    /// Merge `BAYES_ROPE_*` environment overrides (see [`Config::merge_env`]).
    pub fn from_env(mut self) -> Self {
        self.config = self.config.merge_env();
        self
    }

    /// Reduce the sample count for fast checks.
    pub fn quick(mut self) -> Self {
        self.config = self.config.quick();
        self
    }

    /// Set the rope half-width.
    pub fn rope(mut self, rope: f64) -> Self {
        self.config.rope = rope;
        self
    }

    /// Set the prior strength.
    pub fn prior_strength(mut self, strength: f64) -> Self {
        self.config.prior_strength = strength;
        self
    }

    /// Set the region that receives the prior mass.
    pub fn prior_place(mut self, place: Region) -> Self {
        self.config.prior_place = place;
        self
    }

    /// Set the number of Monte Carlo samples.
    pub fn samples(mut self, n: usize) -> Self {
        self.config.samples = n;
        self
    }

    /// Seed the random source for reproducible results.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Print a one-line summary after each comparison.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Names of the two compared series, used in reports.
    pub fn names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.config.names = (first.into(), second.into());
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the comparison and return the region probabilities.
    ///
    /// # Errors
    ///
    /// See [`RopeComparison::analyze`].
    pub fn run(&self, x: impl Into<Observations>) -> Result<Probabilities> {
        self.analyze(x).map(|result| result.probabilities)
    }

    /// Run the comparison and return probabilities, samples and metadata.
    ///
    /// Uses the configured seed, or an OS-seeded generator when none is set.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`](crate::Error::InvalidArgument) for a
    ///   negative rope or prior strength, or non-finite observations.
    /// - [`Error::InvalidShape`](crate::Error::InvalidShape) if the input is
    ///   neither differences nor two-column pairs.
    /// - [`Error::EmptyInput`](crate::Error::EmptyInput) if there are no
    ///   observations or zero samples were requested.
    pub fn analyze(&self, x: impl Into<Observations>) -> Result<ComparisonResult> {
        let mut rng = match self.config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_rng(&mut rand::rng()),
        };
        self.analyze_with_rng(x, &mut rng)
    }

    /// Run the comparison drawing from a caller-owned random source.
    ///
    /// The configured seed is ignored.
    pub fn analyze_with_rng<R: Rng + ?Sized>(
        &self,
        x: impl Into<Observations>,
        rng: &mut R,
    ) -> Result<ComparisonResult> {
        let start = Instant::now();
        self.config.validate()?;
        let diffs = x.into().differences()?;

        let samples = self.posterior_samples(&diffs, rng)?;
        let probabilities = reduce_posterior(&samples)?;

        debug!(
            model = %self.config.model,
            n = diffs.len(),
            p_left = probabilities.left,
            p_rope = probabilities.rope,
            p_right = probabilities.right,
            "comparison finished"
        );

        for (region, max) in samples.negligible_regions() {
            warn!(region = %region, max, "posterior has negligible mass in region");
        }

        if self.config.verbose {
            let (first, second) = &self.config.names;
            println!("{}", summary_line(first, second, &probabilities));
        }

        Ok(ComparisonResult {
            probabilities,
            names: self.config.names.clone(),
            metadata: Metadata {
                model: self.config.model,
                n_observations: diffs.len(),
                rope: self.config.rope,
                prior_strength: self.config.prior_strength,
                prior_place: self.config.prior_place,
                samples: samples.len(),
                seed: self.config.seed,
                runtime_secs: start.elapsed().as_secs_f64(),
            },
            samples,
        })
    }

    /// Draw the posterior sample matrix without reducing it.
    ///
    /// This is the matrix a simplex plot consumes.
    pub fn sample_posterior<R: Rng + ?Sized>(
        &self,
        x: impl Into<Observations>,
        rng: &mut R,
    ) -> Result<PosteriorSamples> {
        self.config.validate()?;
        let diffs = x.into().differences()?;
        self.posterior_samples(&diffs, rng)
    }

    fn posterior_samples<R: Rng + ?Sized>(
        &self,
        diffs: &[f64],
        rng: &mut R,
    ) -> Result<PosteriorSamples> {
        let Config {
            model,
            rope,
            prior_strength,
            prior_place,
            samples,
            ..
        } = self.config;
        match model {
            Model::SignTest => {
                sign_test_samples(diffs, rope, prior_strength, prior_place, samples, rng)
            }
            Model::SignedRank => {
                signed_rank_samples(diffs, rope, prior_strength, prior_place, samples, rng)
            }
        }
    }
}
