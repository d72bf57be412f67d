//! Sampling primitives shared by both posterior models.
//!
//! - Dirichlet draws via Gamma normalisation
//! - Counter-based seeding for independent per-block random streams

mod dirichlet;
mod seed;

pub use dirichlet::Dirichlet;
pub use seed::{block_rng, counter_rng_seed};
