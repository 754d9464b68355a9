//! Iteration driver and result extraction.
//!
//! | Entry point            | Returns                                        |
//! |------------------------|------------------------------------------------|
//! | [`Direct::minimize`]   | [`DirectResult`] with best point and counters  |
//! | [`Direct::run`]        | result plus the final [`RectangleSet`]         |
//! | [`direct`]             | the final partition as `Vec<Rectangle>`        |
//! | [`optimize`]           | the best point in the original box             |
//!
//! One iteration:
//! 1. select the potentially optimal rectangles (`hull`),
//! 2. notify the observer,
//! 3. split every candidate (`divide`),
//! 4. drop the candidates by identity and append their children.

use std::collections::BTreeSet;

use tracing::debug;

use crate::divide::split_rectangle;
use crate::error::Result;
use crate::geometry::Scaling;
use crate::hull::potentially_optimal;
use crate::objective::{Objective, ScaledObjective};
use crate::rect::{RectId, Rectangle};
use crate::storage::RectangleSet;
use crate::trace::IterationObserver;
use crate::types::{DirectOptions, DirectResult};

/// DIRECT optimizer over a box.
///
/// Holds the objective, the validated bounds, the options and an
/// [`IterationObserver`] (`()` unless one is attached).
pub struct Direct<F, O = ()> {
    objective: F,
    scaling: Scaling,
    options: DirectOptions,
    observer: O,
}

impl<F: Objective> Direct<F, ()> {
    /// Validate bounds and options.
    ///
    /// # Errors
    /// - `BoundsLengthMismatch` / `InvalidBounds` for unusable bounds.
    /// - `InvalidArgs` for an empty box or invalid options.
    ///
    /// Nothing is evaluated here.
    pub fn new(objective: F, lower: &[f64], upper: &[f64], options: DirectOptions) -> Result<Self> {
        let scaling = Scaling::new(lower, upper)?;
        options.validate()?;
        Ok(Self {
            objective,
            scaling,
            options,
            observer: (),
        })
    }
}

impl<F: Objective, O: IterationObserver> Direct<F, O> {
    /// Attach an observer called once per iteration.
    pub fn with_observer<P: IterationObserver>(self, observer: P) -> Direct<F, P> {
        Direct {
            objective: self.objective,
            scaling: self.scaling,
            options: self.options,
            observer,
        }
    }

    pub fn options(&self) -> &DirectOptions {
        &self.options
    }

    pub fn scaling(&self) -> &Scaling {
        &self.scaling
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Run the full iteration budget and return the result together with
    /// the final partition.
    ///
    /// # Errors
    /// `ObjectiveEvaluationFailure` as soon as the objective fails or
    /// returns a non-finite value.
    pub fn run(&mut self) -> Result<(DirectResult, RectangleSet)> {
        let scaling = &self.scaling;
        let options = &self.options;
        let observer = &mut self.observer;
        let n = scaling.dim();
        let mut g = ScaledObjective::new(&mut self.objective, scaling);

        let mut set = RectangleSet::new(n);
        let center = vec![0.5; n];
        let value = g.eval(&center)?;
        set.insert(center, value, vec![0; n]);

        let mut converged_at = None;
        for iteration in 0..options.max_iterations {
            let candidates: Vec<Rectangle> =
                potentially_optimal(set.as_slice(), options.min_radius, options.hull_tolerance)
                    .into_iter()
                    .cloned()
                    .collect();
            observer.on_iteration(iteration, set.as_slice(), &candidates);

            if candidates.is_empty() {
                if converged_at.is_none() {
                    debug!(iteration, rects = set.len(), "no rectangle above min_radius on the hull");
                    converged_at = Some(iteration);
                }
                continue;
            }

            let mut children = Vec::new();
            for rect in &candidates {
                children.extend(split_rectangle(rect, &mut g, &mut set)?);
            }
            let split: BTreeSet<RectId> = candidates.iter().map(Rectangle::id).collect();
            set.remove_ids(&split);
            set.extend(children);

            debug!(
                iteration,
                candidates = candidates.len(),
                rects = set.len(),
                nfev = g.nfev(),
                best = set.best().map(Rectangle::value).unwrap_or(f64::INFINITY),
                "iteration"
            );
        }

        let (x, fun) = match set.best() {
            Some(best) => (scaling.denormalize(best.center()), best.value()),
            None => (scaling.midpoint(), f64::INFINITY),
        };
        let result = DirectResult::new(
            x,
            fun,
            g.nfev(),
            options.max_iterations,
            set.len(),
            converged_at,
        );
        debug!(fun = result.fun, nfev = result.nfev, rects = result.n_rects, "direct finished");
        Ok((result, set))
    }

    /// Run and return only the result.
    pub fn minimize(&mut self) -> Result<DirectResult> {
        self.run().map(|(result, _)| result)
    }
}

/// Run DIRECT and return the final partition in working-set order.
///
/// ```
/// let rects = divided_rectangles::direct(|x: &[f64]| x[0] * x[0], &[-1.0], &[1.0], 1, 1e-5).unwrap();
/// assert_eq!(rects.len(), 3);
/// ```
pub fn direct<F: Objective>(
    objective: F,
    lower: &[f64],
    upper: &[f64],
    max_iterations: usize,
    min_radius: f64,
) -> Result<Vec<Rectangle>> {
    let options = DirectOptions {
        max_iterations,
        min_radius,
        ..Default::default()
    };
    let (_, set) = Direct::new(objective, lower, upper, options)?.run()?;
    Ok(set.into_vec())
}

/// Run DIRECT and return the best point found, in the original box.
///
/// The first rectangle with the lowest value wins ties.
///
/// ```
/// let x = divided_rectangles::optimize(|x: &[f64]| x[0] + x[1], &[-1.0, -1.0], &[1.0, 1.0], 100, 1e-5).unwrap();
/// assert!(x[0] + x[1] < -1.99);
/// ```
pub fn optimize<F: Objective>(
    objective: F,
    lower: &[f64],
    upper: &[f64],
    max_iterations: usize,
    min_radius: f64,
) -> Result<Vec<f64>> {
    let options = DirectOptions {
        max_iterations,
        min_radius,
        ..Default::default()
    };
    Ok(Direct::new(objective, lower, upper, options)?.minimize()?.x)
}
