//! Geometry primitives and the unit-cube scaling used by the driver.
//!
//! All rectangles live in the normalized cube `[0,1]^n`. `Scaling` maps
//! between that cube and the user's box:
//!
//! ```text
//! x_actual[i] = x_norm[i] * (upper[i] - lower[i]) + lower[i]
//! x_norm[i]   = (x_actual[i] - lower[i]) / (upper[i] - lower[i])
//! ```

use crate::error::{DirectError, Result};

/// Saturate `value` to `[lower, upper]`.
#[inline]
pub fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// Unit vector of length `n` with a 1 at position `i`.
pub fn basis(i: usize, n: usize) -> Vec<f64> {
    let mut e = vec![0.0; n];
    e[i] = 1.0;
    e
}

/// Side length of a dimension trisected `depth` times: `3^(-depth)`.
#[inline]
pub fn side_length(depth: u32) -> f64 {
    3.0_f64.powi(-(depth as i32))
}

/// Half-diagonal of a rectangle with the given division depths:
/// `sqrt(sum_i (0.5 * 3^(-d_i))^2)`.
///
/// Terms are summed deepest first, so any permutation of the same depths
/// gives a bit-identical radius. The hull step relies on that to group
/// rectangles of equal size.
pub fn compute_radius(division_depth: &[u32]) -> f64 {
    let mut depths = division_depth.to_vec();
    depths.sort_unstable_by(|a, b| b.cmp(a));
    depths
        .iter()
        .map(|&d| {
            let half = 0.5 * side_length(d);
            half * half
        })
        .sum::<f64>()
        .sqrt()
}

/// Validated box bounds and the affine map to and from the unit cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Scaling {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Scaling {
    /// Validate the bounds and build the map.
    ///
    /// # Errors
    /// - `BoundsLengthMismatch` if the slices differ in length.
    /// - `InvalidArgs` if there are no dimensions.
    /// - `InvalidBounds` if any bound is non-finite or `lower[i] >= upper[i]`.
    pub fn new(lower: &[f64], upper: &[f64]) -> Result<Self> {
        if lower.len() != upper.len() {
            return Err(DirectError::BoundsLengthMismatch {
                lower: lower.len(),
                upper: upper.len(),
            });
        }
        if lower.is_empty() {
            return Err(DirectError::InvalidArgs("dimension must be >= 1".into()));
        }
        for (dim, (&l, &u)) in lower.iter().zip(upper).enumerate() {
            // `!(l < u)` also rejects NaN
            if !l.is_finite() || !u.is_finite() || !(l < u) {
                return Err(DirectError::InvalidBounds {
                    dim,
                    lower: l,
                    upper: u,
                });
            }
        }
        Ok(Self {
            lower: lower.to_vec(),
            upper: upper.to_vec(),
        })
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Map a point of the unit cube into the box.
    pub fn denormalize(&self, x_norm: &[f64]) -> Vec<f64> {
        x_norm
            .iter()
            .zip(self.lower.iter().zip(&self.upper))
            .map(|(&x, (&l, &u))| x * (u - l) + l)
            .collect()
    }

    /// Map a point of the box into the unit cube.
    pub fn normalize(&self, x_actual: &[f64]) -> Vec<f64> {
        x_actual
            .iter()
            .zip(self.lower.iter().zip(&self.upper))
            .map(|(&x, (&l, &u))| (x - l) / (u - l))
            .collect()
    }

    /// Center of the box, the image of the root rectangle's center.
    pub fn midpoint(&self) -> Vec<f64> {
        self.denormalize(&vec![0.5; self.dim()])
    }
}
