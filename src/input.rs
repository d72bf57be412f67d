//! Input normalization: paired scores or differences into a difference vector.
//!
//! Comparisons operate on the per-observation difference `b - a` between two
//! series. Callers may hand over the differences directly or the raw pairs;
//! pairs are reduced here, before any sampling. The caller's data is never
//! modified.

use nalgebra::DMatrix;

use crate::error::{Error, Result};

/// Observations of two paired series.
#[derive(Debug, Clone, PartialEq)]
pub enum Observations {
    /// Precomputed differences, one per paired observation.
    Differences(Vec<f64>),
    /// `(series A, series B)` pairs.
    Pairs(Vec<[f64; 2]>),
    /// A dense table; must have exactly two columns (A, B).
    Matrix(DMatrix<f64>),
    /// Row-wise table; every row must have exactly two entries (A, B).
    Rows(Vec<Vec<f64>>),
}

impl Observations {
    /// Reduce to a difference vector (`B - A` for paired forms).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidShape`] if a table does not have exactly two columns.
    /// - [`Error::EmptyInput`] if there are no observations.
    /// - [`Error::InvalidArgument`] if any difference is NaN or infinite.
    pub fn differences(&self) -> Result<Vec<f64>> {
        let diffs = match self {
            Observations::Differences(x) => x.clone(),
            Observations::Pairs(pairs) => pairs.iter().map(|[a, b]| b - a).collect(),
            Observations::Matrix(m) => {
                if m.ncols() != 2 {
                    return Err(Error::InvalidShape {
                        found: format!("a {}x{} matrix", m.nrows(), m.ncols()),
                    });
                }
                m.column(1).iter().zip(m.column(0).iter()).map(|(b, a)| b - a).collect()
            }
            Observations::Rows(rows) => {
                let mut out = Vec::with_capacity(rows.len());
                for (i, row) in rows.iter().enumerate() {
                    match row.as_slice() {
                        [a, b] => out.push(b - a),
                        _ => {
                            return Err(Error::InvalidShape {
                                found: format!("row {} with {} entries", i, row.len()),
                            })
                        }
                    }
                }
                out
            }
        };
        check_differences(&diffs)?;
        Ok(diffs)
    }

    /// Number of rows as given.
    ///
    /// The shape is not checked; a malformed matrix or ragged rows still
    /// report their row count. Use [`Observations::differences`] to validate.
    pub fn len(&self) -> usize {
        match self {
            Observations::Differences(x) => x.len(),
            Observations::Pairs(p) => p.len(),
            Observations::Matrix(m) => m.nrows(),
            Observations::Rows(r) => r.len(),
        }
    }

    /// Whether there are no observations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Validate a difference vector: non-empty and every value finite.
pub fn check_differences(x: &[f64]) -> Result<()> {
    if x.is_empty() {
        return Err(Error::EmptyInput { what: "observations" });
    }
    if let Some((i, v)) = x.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(Error::invalid_argument(
            "x",
            format!("difference {i} is not finite ({v})"),
        ));
    }
    Ok(())
}

impl From<Vec<f64>> for Observations {
    fn from(x: Vec<f64>) -> Self {
        Observations::Differences(x)
    }
}

impl From<&[f64]> for Observations {
    fn from(x: &[f64]) -> Self {
        Observations::Differences(x.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Observations {
    fn from(x: [f64; N]) -> Self {
        Observations::Differences(x.to_vec())
    }
}

impl<const N: usize> From<&[f64; N]> for Observations {
    fn from(x: &[f64; N]) -> Self {
        Observations::Differences(x.to_vec())
    }
}

impl From<Vec<[f64; 2]>> for Observations {
    fn from(pairs: Vec<[f64; 2]>) -> Self {
        Observations::Pairs(pairs)
    }
}

impl From<&[[f64; 2]]> for Observations {
    fn from(pairs: &[[f64; 2]]) -> Self {
        Observations::Pairs(pairs.to_vec())
    }
}

impl<const N: usize> From<[[f64; 2]; N]> for Observations {
    fn from(pairs: [[f64; 2]; N]) -> Self {
        Observations::Pairs(pairs.to_vec())
    }
}

impl From<DMatrix<f64>> for Observations {
    fn from(m: DMatrix<f64>) -> Self {
        Observations::Matrix(m)
    }
}

impl From<&DMatrix<f64>> for Observations {
    fn from(m: &DMatrix<f64>) -> Self {
        Observations::Matrix(m.clone())
    }
}

impl From<Vec<Vec<f64>>> for Observations {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Observations::Rows(rows)
    }
}
