//! Core value types: outcome regions, posterior samples and probability triples.

use std::fmt;
use std::str::FromStr;

use nalgebra::MatrixXx3;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Maximum sampled probability below which a region counts as empty.
///
/// Such a region carries no visible mass on a simplex plot.
pub const NEGLIGIBLE_MASS: f64 = 1e-3;

/// One of the three outcome regions of a ROPE comparison.
///
/// The discriminant doubles as the column index in [`PosteriorSamples`] and
/// selects which region receives the prior mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// The first series is practically better (difference below `-rope`).
    Left = 0,
    /// The series are practically equivalent.
    #[default]
    Rope = 1,
    /// The second series is practically better (difference above `rope`).
    Right = 2,
}

impl Region {
    /// All regions in column order.
    pub const ALL: [Region; 3] = [Region::Left, Region::Rope, Region::Right];

    /// Column index of this region.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Region for a column index, if it is in `0..3`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The region on the other side of zero (`Rope` maps to itself).
    pub fn mirrored(self) -> Self {
        match self {
            Region::Left => Region::Right,
            Region::Rope => Region::Rope,
            Region::Right => Region::Left,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Left => write!(f, "left"),
            Region::Rope => write!(f, "rope"),
            Region::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Region::Left),
            "rope" => Ok(Region::Rope),
            "right" => Ok(Region::Right),
            other => Err(Error::invalid_argument(
                "prior_place",
                format!("expected left, rope or right, got {other:?}"),
            )),
        }
    }
}

/// Posterior probabilities of the three regions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    /// P(first series is practically better).
    pub left: f64,
    /// P(practical equivalence).
    pub rope: f64,
    /// P(second series is practically better).
    pub right: f64,
}

impl Probabilities {
    /// Build from a `[left, rope, right]` array.
    pub fn from_array(values: [f64; 3]) -> Self {
        Self {
            left: values[0],
            rope: values[1],
            right: values[2],
        }
    }

    /// Values in column order.
    pub fn as_array(&self) -> [f64; 3] {
        [self.left, self.rope, self.right]
    }

    /// Probability of a single region.
    pub fn get(&self, region: Region) -> f64 {
        self.as_array()[region.index()]
    }

    /// Sum of the three probabilities (1 up to rounding).
    pub fn total(&self) -> f64 {
        self.left + self.rope + self.right
    }

    /// Region with the highest probability; ties go to the lower index.
    pub fn most_probable(&self) -> Region {
        argmax(&self.as_array())
    }

    /// Swap left and right, as if the two series had been exchanged.
    pub fn mirrored(&self) -> Self {
        Self {
            left: self.right,
            rope: self.rope,
            right: self.left,
        }
    }
}

/// First-occurrence argmax over a row of region values.
#[inline]
pub(crate) fn argmax(row: &[f64; 3]) -> Region {
    let mut best = 0;
    for i in 1..3 {
        if row[i] > row[best] {
            best = i;
        }
    }
    Region::ALL[best]
}

/// N x 3 matrix of posterior draws, one `[p_left, p_rope, p_right]` row per sample.
///
/// Rows are stored contiguously so samplers can fill disjoint blocks in
/// parallel. Use [`PosteriorSamples::to_matrix`] when a column-major
/// `nalgebra` matrix is more convenient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PosteriorSamples {
    rows: Vec<[f64; 3]>,
}

impl PosteriorSamples {
    /// Pre-sized, zero-filled sample matrix.
    pub fn zeros(n: usize) -> Self {
        Self {
            rows: vec![[0.0; 3]; n],
        }
    }

    /// Wrap existing rows.
    pub fn from_rows(rows: Vec<[f64; 3]>) -> Self {
        Self { rows }
    }

    /// Number of samples (rows).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows.
    pub fn rows(&self) -> &[[f64; 3]] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [[f64; 3]] {
        &mut self.rows
    }

    /// One column of the matrix.
    pub fn column(&self, region: Region) -> impl Iterator<Item = f64> + '_ {
        let j = region.index();
        self.rows.iter().map(move |row| row[j])
    }

    /// Column-wise maximum.
    ///
    /// Probabilities are non-negative, so an empty matrix yields `[0.0; 3]`.
    pub fn column_max(&self) -> [f64; 3] {
        let mut max = [0.0_f64; 3];
        for row in &self.rows {
            for j in 0..3 {
                max[j] = max[j].max(row[j]);
            }
        }
        max
    }

    /// Regions whose column maximum is below [`NEGLIGIBLE_MASS`], with that
    /// maximum.
    pub fn negligible_regions(&self) -> Vec<(Region, f64)> {
        let max = self.column_max();
        Region::ALL
            .iter()
            .filter(|r| max[r.index()] < NEGLIGIBLE_MASS)
            .map(|&r| (r, max[r.index()]))
            .collect()
    }

    /// Copy into an `nalgebra` N x 3 matrix.
    pub fn to_matrix(&self) -> MatrixXx3<f64> {
        MatrixXx3::from_fn(self.rows.len(), |i, j| self.rows[i][j])
    }

    /// Project every row onto the 2-D probability triangle.
    ///
    /// Vertices: left at `(0, 0)`, right at `(1, 0)`, rope at `(0.5, sqrt(3)/2)`.
    pub fn simplex_projection(&self) -> Vec<(f64, f64)> {
        let root3 = 3f64.sqrt();
        self.rows
            .iter()
            .map(|&[left, rope, right]| {
                let x = 0.5 + (right - left) / 2.0;
                let y = (2.0 * rope - left - right + 1.0) / (2.0 * root3);
                (x, y)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_ordinals() {
        assert_eq!(Region::Left.index(), 0);
        assert_eq!(Region::Rope.index(), 1);
        assert_eq!(Region::Right.index(), 2);
        assert_eq!(Region::from_index(2), Some(Region::Right));
        assert_eq!(Region::from_index(3), None);
        assert_eq!(Region::default(), Region::Rope);
    }

    #[test]
    fn test_region_parse() {
        assert_eq!("LEFT".parse::<Region>().unwrap(), Region::Left);
        assert_eq!(" rope ".parse::<Region>().unwrap(), Region::Rope);
        assert!("middle".parse::<Region>().is_err());
    }

    #[test]
    fn test_argmax_ties_go_to_first() {
        assert_eq!(argmax(&[0.5, 0.5, 0.0]), Region::Left);
        assert_eq!(argmax(&[0.2, 0.4, 0.4]), Region::Rope);
        assert_eq!(argmax(&[1.0 / 3.0; 3]), Region::Left);
        assert_eq!(argmax(&[0.1, 0.2, 0.7]), Region::Right);
    }

    #[test]
    fn test_probabilities_mirror() {
        let p = Probabilities::from_array([0.1, 0.3, 0.6]);
        let m = p.mirrored();
        assert_eq!(m.as_array(), [0.6, 0.3, 0.1]);
        assert_eq!(p.most_probable(), Region::Right);
        assert_eq!(m.most_probable(), Region::Left);
    }

    #[test]
    fn test_simplex_vertices() {
        let samples = PosteriorSamples::from_rows(vec![
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0],
        ]);
        let pts = samples.simplex_projection();
        let expected = [(0.0, 0.0), (1.0, 0.0), (0.5, 3f64.sqrt() / 2.0)];
        for ((x, y), (ex, ey)) in pts.iter().zip(expected.iter()) {
            assert!((x - ex).abs() < 1e-12 && (y - ey).abs() < 1e-12);
        }
    }

    #[test]
    fn test_to_matrix_layout() {
        let samples = PosteriorSamples::from_rows(vec![[0.1, 0.2, 0.7], [0.3, 0.3, 0.4]]);
        let m = samples.to_matrix();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m[(1, 2)], 0.4);
        assert_eq!(samples.column_max(), [0.3, 0.3, 0.7]);
        assert!(samples.negligible_regions().is_empty());
        assert_eq!(samples.column(Region::Rope).collect::<Vec<_>>(), vec![0.2, 0.3]);
    }

    #[test]
    fn test_negligible_regions() {
        let samples = PosteriorSamples::from_rows(vec![[0.0, 5e-4, 0.9995], [1e-4, 0.0, 0.9999]]);
        assert_eq!(
            samples.negligible_regions(),
            vec![(Region::Left, 1e-4), (Region::Rope, 5e-4)]
        );

        let empty = PosteriorSamples::default();
        assert_eq!(empty.column_max(), [0.0; 3]);
        assert_eq!(empty.negligible_regions().len(), 3);
    }
}
