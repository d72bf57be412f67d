//! Dirichlet sampling by Gamma normalisation.
//!
//! A draw from Dirichlet(α) is `g / sum(g)` with independent
//! `g_i ~ Gamma(α_i, 1)`. Components with `α_i = 0` are degenerate and always
//! receive zero weight, which is the limit of a vanishing concentration.

use rand::Rng;
use rand_distr::{Distribution, Gamma};

use crate::error::{Error, Result};

/// Sampler for a fixed concentration vector.
///
/// The per-component Gamma distributions are constructed once and reused for
/// every draw.
#[derive(Debug, Clone)]
pub struct Dirichlet {
    concentration: Vec<f64>,
    gammas: Vec<Option<Gamma<f64>>>,
}

impl Dirichlet {
    /// Create a sampler.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if any component is negative or non-finite,
    /// or if every component is zero.
    pub fn new(concentration: &[f64]) -> Result<Self> {
        if concentration.is_empty() {
            return Err(Error::EmptyInput { what: "concentration" });
        }
        let mut gammas = Vec::with_capacity(concentration.len());
        for (i, &alpha) in concentration.iter().enumerate() {
            if !alpha.is_finite() || alpha < 0.0 {
                return Err(Error::invalid_argument(
                    "concentration",
                    format!("component {i} must be finite and non-negative, got {alpha}"),
                ));
            }
            if alpha == 0.0 {
                gammas.push(None);
            } else {
                let gamma = Gamma::new(alpha, 1.0)
                    .map_err(|e| Error::invalid_argument("concentration", e.to_string()))?;
                gammas.push(Some(gamma));
            }
        }
        if gammas.iter().all(Option::is_none) {
            return Err(Error::invalid_argument(
                "concentration",
                "at least one component must be positive",
            ));
        }
        Ok(Self {
            concentration: concentration.to_vec(),
            gammas,
        })
    }

    /// Dimension of the simplex.
    pub fn len(&self) -> usize {
        self.gammas.len()
    }

    /// Always false; construction rejects empty concentrations.
    pub fn is_empty(&self) -> bool {
        self.gammas.is_empty()
    }

    /// Concentration vector this sampler was built with.
    pub fn concentration(&self) -> &[f64] {
        &self.concentration
    }

    /// Draw one point of the simplex into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != self.len()`.
    pub fn sample_into<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut [f64]) {
        assert_eq!(
            out.len(),
            self.gammas.len(),
            "Output buffer must match the Dirichlet dimension"
        );

        let mut total = 0.0;
        for (slot, gamma) in out.iter_mut().zip(&self.gammas) {
            *slot = match gamma {
                Some(g) => g.sample(rng),
                None => 0.0,
            };
            total += *slot;
        }

        if total > 0.0 {
            for slot in out.iter_mut() {
                *slot /= total;
            }
        } else {
            // Every Gamma draw underflowed (tiny shapes); fall back to the mean.
            let alpha_sum: f64 = self.concentration.iter().sum();
            for (slot, alpha) in out.iter_mut().zip(&self.concentration) {
                *slot = alpha / alpha_sum;
            }
        }
    }

    /// Draw one point of the simplex.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let mut out = vec![0.0; self.gammas.len()];
        self.sample_into(rng, &mut out);
        out
    }
}
