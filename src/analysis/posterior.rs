//! Reduction of posterior samples to region probabilities.

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{argmax, PosteriorSamples, Probabilities, Region};

/// Region with the largest value in a sample row; ties go to the lower index.
#[inline]
pub fn winning_region(row: &[f64; 3]) -> Region {
    argmax(row)
}

/// Fraction of samples in which each region has the largest probability.
///
/// The three fractions partition the samples, so they sum to one.
///
/// # Errors
///
/// [`Error::EmptyInput`] if there are no samples.
pub fn reduce_posterior(samples: &PosteriorSamples) -> Result<Probabilities> {
    if samples.is_empty() {
        return Err(Error::EmptyInput { what: "posterior samples" });
    }

    let mut wins = [0usize; 3];
    for row in samples.rows() {
        wins[winning_region(row).index()] += 1;
    }

    let n = samples.len() as f64;
    let probabilities = Probabilities::from_array(wins.map(|w| w as f64 / n));
    debug!(?wins, n = samples.len(), "reduced posterior samples");
    Ok(probabilities)
}
