//! # divided-rectangles: DIRECT global optimization
//!
//! A deterministic, derivative-free global optimizer over a box in ℝⁿ,
//! implementing the DIRECT (DIviding RECTangles) algorithm of Jones et al.
//!
//! ## Overview
//!
//! The search box is mapped to the unit cube `[0,1]^n`, which is partitioned
//! into hyper-rectangles, each sampled at its center. Every iteration selects
//! the *potentially optimal* rectangles (the lower convex hull of the
//! `(radius, value)` scatter) and trisects each of them along its longest
//! sides. Large unexplored rectangles and small rectangles with good values
//! are both refined, which balances global exploration against local
//! exploitation without a Lipschitz constant.
//!
//! The run lasts a fixed number of iterations. Rectangles whose radius falls
//! below `min_radius` are never split again.
//!
//! ```
//! use divided_rectangles::{Direct, DirectOptions};
//!
//! let result = Direct::new(
//!     |x: &[f64]| (x[0] - 1.0).powi(2) + (x[1] + 0.5).powi(2),
//!     &[-2.0, -2.0],
//!     &[2.0, 2.0],
//!     DirectOptions::default(),
//! )?
//! .minimize()?;
//! assert!(result.fun < 1e-4);
//! # Ok::<(), divided_rectangles::DirectError>(())
//! ```
//!
//! ## References
//!
//! - Jones, D.R., Perttunen, C.D. & Stuckman, B.E. "Lipschitzian optimization
//!   without the Lipschitz constant." J Optim Theory Appl 79, 157–181 (1993).

pub mod direct;
mod divide;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod objective;
pub mod rect;
pub mod storage;
pub mod trace;
pub mod types;

// Re-export main types
pub use direct::{direct, optimize, Direct};
pub use error::{BoxError, DirectError, DirectReturnCode, EvaluationFailure, Result};
pub use geometry::{basis, clamp, compute_radius, Scaling};
pub use objective::{Fallible, Objective};
pub use rect::{RectId, Rectangle};
pub use storage::RectangleSet;
pub use trace::{IterationObserver, RowKind, TraceRecorder, TraceRow, TraceScope, TsvWriter};
pub use types::{DirectOptions, DirectResult, DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_RADIUS};
