//! Posterior analysis for paired comparisons.
//!
//! Both models share one pipeline: differences → posterior samples of
//! `(p_left, p_rope, p_right)` → region probabilities.
//!
//! 1. **Sign test** ([`sign_test`]): Dirichlet over the three region counts
//! 2. **Signed-rank test** ([`signed_rank`]): Dirichlet Process evaluated through pairwise dominance kernels
//! 3. **Reduction** ([`posterior`]): how often each region has the largest probability

mod posterior;
mod signed_rank;

pub use posterior::{reduce_posterior, winning_region};
pub use sign_test::{
    count_regions, sign_test_concentration, sign_test_samples, RegionCounts, CONCENTRATION_FLOOR,
};
pub use signed_rank::{
    anchor, heaviside, signed_rank_concentration, signed_rank_samples, SignedRankKernels,
    SAMPLES_PER_BLOCK,
};
