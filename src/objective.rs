//! Objective functions accepted by the driver.
//!
//! Any `FnMut(&[f64]) -> f64` is an objective. Objectives that can fail are
//! wrapped in [`Fallible`]; their errors abort the run with
//! [`DirectError::ObjectiveEvaluationFailure`](crate::DirectError).

use crate::error::{BoxError, DirectError, EvaluationFailure, Result};
use crate::geometry::Scaling;

/// A scalar objective over points of the search box.
pub trait Objective {
    /// Evaluate at `x` (actual, de-normalized coordinates).
    fn evaluate(&mut self, x: &[f64]) -> std::result::Result<f64, BoxError>;
}

impl<F> Objective for F
where
    F: FnMut(&[f64]) -> f64,
{
    fn evaluate(&mut self, x: &[f64]) -> std::result::Result<f64, BoxError> {
        Ok(self(x))
    }
}

/// Adapter for objectives returning `Result`.
///
/// ```
/// use divided_rectangles::{Direct, DirectOptions, Fallible};
///
/// let f = Fallible(|x: &[f64]| -> Result<f64, std::io::Error> { Ok(x[0] * x[0]) });
/// let result = Direct::new(f, &[-1.0], &[2.0], DirectOptions::default())
///     .unwrap()
///     .minimize()
///     .unwrap();
/// assert!(result.fun < 1e-6);
/// ```
pub struct Fallible<F>(pub F);

impl<F, E> Objective for Fallible<F>
where
    F: FnMut(&[f64]) -> std::result::Result<f64, E>,
    E: Into<BoxError>,
{
    fn evaluate(&mut self, x: &[f64]) -> std::result::Result<f64, BoxError> {
        (self.0)(x).map_err(Into::into)
    }
}

/// The objective seen by the algorithm: takes normalized points, maps them
/// into the box, evaluates, and rejects errors and non-finite values.
pub(crate) struct ScaledObjective<'a, O: ?Sized> {
    objective: &'a mut O,
    scaling: &'a Scaling,
    nfev: usize,
}

impl<'a, O: Objective + ?Sized> ScaledObjective<'a, O> {
    pub(crate) fn new(objective: &'a mut O, scaling: &'a Scaling) -> Self {
        Self {
            objective,
            scaling,
            nfev: 0,
        }
    }

    /// Evaluate at a point of the unit cube.
    pub(crate) fn eval(&mut self, x_norm: &[f64]) -> Result<f64> {
        let point = self.scaling.denormalize(x_norm);
        self.nfev += 1;
        match self.objective.evaluate(&point) {
            Ok(y) if y.is_finite() => Ok(y),
            Ok(y) => Err(DirectError::ObjectiveEvaluationFailure {
                point,
                cause: EvaluationFailure::NonFinite(y),
            }),
            Err(e) => Err(DirectError::ObjectiveEvaluationFailure {
                point,
                cause: EvaluationFailure::Raised(e),
            }),
        }
    }

    /// Evaluations attempted so far.
    pub(crate) fn nfev(&self) -> usize {
        self.nfev
    }
}
