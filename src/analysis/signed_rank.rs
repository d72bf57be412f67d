//! Bayesian signed-rank test.
//!
//! The posterior over the distribution of differences is a Dirichlet Process
//! with a single pseudo-observation (the anchor) carrying the prior mass.
//! For a weight vector `w` over the augmented sample `z = x ++ [anchor]`,
//!
//! ```text
//! p_right = sum_ij w_i w_j H(z_i + z_j - 2 rope)
//! p_left  = sum_ij w_i w_j H(-z_i - z_j - 2 rope)
//! p_rope  = 1 - p_left - p_right
//! ```
//!
//! where `H` is the step function with `H(0) = 1/2`, so ties count as half a
//! win as in the Walsh averages behind the signed-rank statistic. The two
//! kernel matrices are built once per call and shared by every draw.

use nalgebra::{DMatrix, DVector};
use rand::Rng;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{ensure_non_negative, Result};
use crate::input::check_differences;
use crate::statistics::{block_rng, Dirichlet};
use crate::thread_pool;
use crate::types::{PosteriorSamples, Region};

/// Samples drawn from one random stream. Fixed so that results for a given
/// seed do not depend on the number of worker threads.
pub const SAMPLES_PER_BLOCK: usize = 1024;

/// Three-valued step: 1 above zero, 1/2 at zero, 0 below.
#[inline]
pub fn heaviside(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v == 0.0 {
        0.5
    } else {
        0.0
    }
}

/// Value of the prior pseudo-observation for a placement.
pub fn anchor(prior_place: Region) -> f64 {
    match prior_place {
        Region::Left => f64::NEG_INFINITY,
        Region::Rope => 0.0,
        Region::Right => f64::INFINITY,
    }
}

/// Pairwise dominance kernels over the augmented sample.
#[derive(Debug, Clone)]
pub struct SignedRankKernels {
    augmented: Vec<f64>,
    right: DMatrix<f64>,
    left: DMatrix<f64>,
}

impl SignedRankKernels {
    /// Build both kernels for differences `x`.
    ///
    /// The anchor is appended as the last element; an infinite anchor forces
    /// its row and column to dominate in the direction of the prior.
    ///
    /// # Errors
    ///
    /// Rejects a negative rope, and empty or non-finite input.
    pub fn build(x: &[f64], rope: f64, prior_place: Region) -> Result<Self> {
        ensure_non_negative("rope", rope)?;
        check_differences(x)?;

        let mut z = Vec::with_capacity(x.len() + 1);
        z.extend_from_slice(x);
        z.push(anchor(prior_place));

        let m = z.len();
        // `rope` is subtracted twice rather than doubled so that a huge rope
        // cannot overflow to infinity and meet an infinite anchor as NaN.
        let right = DMatrix::from_fn(m, m, |i, j| heaviside(z[i] + z[j] - rope - rope));
        let left = DMatrix::from_fn(m, m, |i, j| heaviside(-z[i] - z[j] - rope - rope));

        Ok(Self {
            augmented: z,
            right,
            left,
        })
    }

    /// Size `m = n + 1` of the augmented sample.
    pub fn size(&self) -> usize {
        self.augmented.len()
    }

    /// Differences followed by the anchor.
    pub fn augmented(&self) -> &[f64] {
        &self.augmented
    }

    /// `H(z_i + z_j - 2 rope)`.
    pub fn right(&self) -> &DMatrix<f64> {
        &self.right
    }

    /// `H(-z_i - z_j - 2 rope)`.
    pub fn left(&self) -> &DMatrix<f64> {
        &self.left
    }

    /// Evaluate `(p_left, p_rope, p_right)` for one weight vector.
    ///
    /// `scratch` must have the same length as `w`.
    pub fn evaluate(&self, w: &DVector<f64>, scratch: &mut DVector<f64>) -> [f64; 3] {
        self.right.mul_to(w, scratch);
        let p_right = w.dot(&*scratch);
        self.left.mul_to(w, scratch);
        let p_left = w.dot(&*scratch);
        [p_left, 1.0 - p_left - p_right, p_right]
    }
}

/// Concentration for the Dirichlet weights: one per observation, `prior_strength`
/// for the anchor.
pub fn signed_rank_concentration(n: usize, prior_strength: f64) -> Vec<f64> {
    let mut alpha = vec![1.0; n + 1];
    alpha[n] = prior_strength;
    alpha
}

/// Draw `nsamples` posterior samples of `(p_left, p_rope, p_right)` for the
/// signed-rank test.
///
/// Rows are not renormalised; they sum to one up to the rounding of the
/// quadratic forms.
///
/// # Arguments
///
/// * `x` - Differences between the paired series
/// * `rope` - Half-width of the region of practical equivalence
/// * `prior_strength` - Dirichlet mass of the anchor
/// * `prior_place` - Where the anchor sits (`-inf`, `0` or `+inf`)
/// * `nsamples` - Number of Monte Carlo samples
/// * `rng` - Caller-owned random source; one `u64` is drawn to seed the
///   per-block streams
pub fn signed_rank_samples<R: Rng + ?Sized>(
    x: &[f64],
    rope: f64,
    prior_strength: f64,
    prior_place: Region,
    nsamples: usize,
    rng: &mut R,
) -> Result<PosteriorSamples> {
    ensure_non_negative("prior_strength", prior_strength)?;
    let kernels = SignedRankKernels::build(x, rope, prior_place)?;
    let dirichlet = Dirichlet::new(&signed_rank_concentration(x.len(), prior_strength))?;
    let base_seed: u64 = rng.random();

    debug!(
        m = kernels.size(),
        nsamples,
        blocks = nsamples.div_ceil(SAMPLES_PER_BLOCK),
        "signed-rank sampling"
    );

    let mut samples = PosteriorSamples::zeros(nsamples);
    let rows = samples.rows_mut();

    thread_pool::install(|| {
        #[cfg(feature = "parallel")]
        rows.par_chunks_mut(SAMPLES_PER_BLOCK)
            .enumerate()
            .for_each(|(k, block)| fill_block(&kernels, &dirichlet, base_seed, k as u64, block));

        #[cfg(not(feature = "parallel"))]
        rows.chunks_mut(SAMPLES_PER_BLOCK)
            .enumerate()
            .for_each(|(k, block)| fill_block(&kernels, &dirichlet, base_seed, k as u64, block));
    });

    Ok(samples)
}

/// Fill one block of rows from its own random stream.
fn fill_block(
    kernels: &SignedRankKernels,
    dirichlet: &Dirichlet,
    base_seed: u64,
    counter: u64,
    block: &mut [[f64; 3]],
) {
    let mut rng = block_rng(base_seed, counter);
    let m = kernels.size();
    let mut w = DVector::zeros(m);
    let mut scratch = DVector::zeros(m);

    for row in block.iter_mut() {
        dirichlet.sample_into(&mut rng, w.as_mut_slice());
        *row = kernels.evaluate(&w, &mut scratch);
    }
}
