//! Options, results and defaults of the DIRECT optimizer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DirectError, DirectReturnCode, Result};
use crate::hull::DEFAULT_HULL_TOL;

// ──────────────────────────────────────────────────────────────────────────────
// Defaults
// ──────────────────────────────────────────────────────────────────────────────

/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default size floor below which rectangles are no longer split.
pub const DEFAULT_MIN_RADIUS: f64 = 1e-5;

// ──────────────────────────────────────────────────────────────────────────────
// Options
// ──────────────────────────────────────────────────────────────────────────────

/// Configuration of a DIRECT run.
///
/// Deserializable so option sets can live in JSON files; missing fields take
/// their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectOptions {
    /// Number of iterations to run. Every iteration runs, even when nothing
    /// is left to split.
    pub max_iterations: usize,

    /// Rectangles with a radius below this are considered converged and are
    /// never selected. Measured in normalized coordinates, where the root
    /// has radius `sqrt(n)/2`.
    pub min_radius: f64,

    /// Tolerance of the orientation test in the hull selection. Hull points
    /// whose orientation determinant is below it are treated as lying on
    /// the chord and dropped.
    pub hull_tolerance: f64,
}

impl Default for DirectOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_radius: DEFAULT_MIN_RADIUS,
            hull_tolerance: DEFAULT_HULL_TOL,
        }
    }
}

impl DirectOptions {
    /// Check that the numeric options are usable.
    ///
    /// # Errors
    /// `InvalidArgs` for a negative or non-finite `min_radius`, or a
    /// non-finite `hull_tolerance`.
    pub fn validate(&self) -> Result<()> {
        if !self.min_radius.is_finite() || self.min_radius < 0.0 {
            return Err(DirectError::InvalidArgs(format!(
                "min_radius must be finite and >= 0, got {}",
                self.min_radius
            )));
        }
        if !self.hull_tolerance.is_finite() {
            return Err(DirectError::InvalidArgs(format!(
                "hull_tolerance must be finite, got {}",
                self.hull_tolerance
            )));
        }
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Result
// ──────────────────────────────────────────────────────────────────────────────

/// Result of a DIRECT run.
#[derive(Debug, Clone)]
pub struct DirectResult {
    /// Best point found, in the original box.
    pub x: Vec<f64>,

    /// Objective value at `x`.
    pub fun: f64,

    /// Total number of objective evaluations.
    pub nfev: usize,

    /// Iterations run.
    pub nit: usize,

    /// Size of the final partition.
    pub n_rects: usize,

    /// First iteration (0-based) in which nothing was left to split.
    pub converged_at: Option<usize>,

    /// Why the run stopped.
    pub return_code: DirectReturnCode,

    /// Human-readable message describing the termination reason.
    pub message: String,
}

impl DirectResult {
    pub fn new(
        x: Vec<f64>,
        fun: f64,
        nfev: usize,
        nit: usize,
        n_rects: usize,
        converged_at: Option<usize>,
    ) -> Self {
        let return_code = if converged_at.is_some() {
            DirectReturnCode::MinRadiusReached
        } else {
            DirectReturnCode::MaxIterReached
        };
        Self {
            x,
            fun,
            nfev,
            nit,
            n_rects,
            converged_at,
            return_code,
            message: return_code.to_string(),
        }
    }

    pub fn success(&self) -> bool {
        self.return_code.is_success()
    }
}

impl fmt::Display for DirectResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DirectResult {{")?;
        writeln!(f, "  message: {}", self.message)?;
        writeln!(f, "  fun: {:.15e}", self.fun)?;
        write!(f, "  x: [")?;
        for (i, xi) in self.x.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.15e}", xi)?;
        }
        writeln!(f, "]")?;
        writeln!(f, "  nfev: {}", self.nfev)?;
        writeln!(f, "  nit: {}", self.nit)?;
        writeln!(f, "  n_rects: {}", self.n_rects)?;
        if let Some(it) = self.converged_at {
            writeln!(f, "  converged_at: {}", it)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for DirectReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds => write!(f, "Invalid bounds"),
            Self::ObjectiveFailed => write!(f, "Objective evaluation failed"),
            Self::InvalidArgs => write!(f, "Invalid arguments"),
            Self::MaxIterReached => write!(f, "Maximum iterations reached"),
            Self::MinRadiusReached => write!(f, "All hull rectangles below minimum radius"),
        }
    }
}
