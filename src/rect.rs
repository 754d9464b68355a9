//! The hyper-rectangle record of the recursive partition.

use std::fmt;

use serde::Serialize;

use crate::geometry::{clamp, compute_radius, side_length};

/// Tolerance used for center, value and radius comparisons.
pub const EQUAL_TOL: f64 = 1e-9;

/// Stable identity of a rectangle, assigned by [`crate::storage::RectangleSet`]
/// when the rectangle is created. Never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RectId(pub(crate) u64);

impl RectId {
    /// Creation index of the rectangle (0 for the root).
    pub fn index(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One hyper-rectangle in normalized coordinates `[0,1]^n`.
///
/// The radius is derived from the division depths at construction and
/// cannot be set independently; coordinates are clamped to the unit cube.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rectangle {
    id: RectId,
    center: Vec<f64>,
    value: f64,
    division_depth: Vec<u32>,
    radius: f64,
}

impl Rectangle {
    pub(crate) fn new(id: RectId, center: Vec<f64>, value: f64, division_depth: Vec<u32>) -> Self {
        debug_assert_eq!(center.len(), division_depth.len());
        let center = center.into_iter().map(|c| clamp(c, 0.0, 1.0)).collect();
        let radius = compute_radius(&division_depth);
        Self {
            id,
            center,
            value,
            division_depth,
            radius,
        }
    }

    pub fn id(&self) -> RectId {
        self.id
    }

    /// Center in normalized coordinates.
    pub fn center(&self) -> &[f64] {
        &self.center
    }

    /// Objective value at the de-normalized center.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of trisections per dimension.
    pub fn division_depth(&self) -> &[u32] {
        &self.division_depth
    }

    /// Half-diagonal, the size measure used by the hull selection.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn dim(&self) -> usize {
        self.center.len()
    }

    /// Side lengths `3^(-d_i)` in normalized coordinates.
    pub fn side_lengths(&self) -> Vec<f64> {
        self.division_depth.iter().map(|&d| side_length(d)).collect()
    }

    /// Volume as a fraction of the unit cube.
    pub fn volume(&self) -> f64 {
        self.division_depth.iter().map(|&d| side_length(d)).product()
    }

    /// Minimum division depth and the dimensions attaining it, i.e. the
    /// longest sides, in ascending dimension order.
    pub fn longest_sides(&self) -> (u32, Vec<usize>) {
        let d_min = self.division_depth.iter().copied().min().unwrap_or(0);
        let dirs = self
            .division_depth
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d == d_min)
            .map(|(i, _)| i)
            .collect();
        (d_min, dirs)
    }

    /// Tolerance equality: centers, values and radii within [`EQUAL_TOL`],
    /// depth vectors identical. Identity is ignored.
    pub fn approx_eq(&self, other: &Rectangle) -> bool {
        self.center.len() == other.center.len()
            && self
                .center
                .iter()
                .zip(&other.center)
                .all(|(a, b)| (a - b).abs() <= EQUAL_TOL)
            && (self.value - other.value).abs() <= EQUAL_TOL
            && self.division_depth == other.division_depth
            && (self.radius - other.radius).abs() <= EQUAL_TOL
    }
}
