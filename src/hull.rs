//! Selection of potentially optimal rectangles.
//!
//! A rectangle is potentially optimal when it lies on the lower-right convex
//! envelope of the `(radius, value)` scatter: no rectangle of larger or equal
//! size has a value at least as good, and it is not above the chord joining
//! its hull neighbours. The envelope is built with a monotone-chain sweep:
//!
//! ```text
//! value
//!   |            x        x
//!   |      x         o
//!   |   x      o
//!   |  o   x
//!   +------------------------ radius
//!          (o = hull points)
//! ```

use std::cmp::Ordering;

use crate::rect::{Rectangle, EQUAL_TOL};

/// Default tolerance of the orientation test.
pub const DEFAULT_HULL_TOL: f64 = 1e-6;

/// Orientation determinant of three `(radius, value)` points.
///
/// Positive when `a → b → c` turns counter-clockwise, i.e. `b` lies strictly
/// below the chord from `a` to `c` (radii increasing).
pub fn orientation(a: &Rectangle, b: &Rectangle, c: &Rectangle) -> f64 {
    a.radius() * (b.value() - c.value()) - a.value() * (b.radius() - c.radius())
        + (b.radius() * c.value() - b.value() * c.radius())
}

/// True when `b` does not support the lower hull between `a` and `c`
/// (collinear, above the chord, or within `tol` of it).
#[inline]
fn is_non_supporting(a: &Rectangle, b: &Rectangle, c: &Rectangle, tol: f64) -> bool {
    orientation(a, b, c) < tol
}

fn by_radius_then_value(a: &&Rectangle, b: &&Rectangle) -> Ordering {
    a.radius()
        .total_cmp(&b.radius())
        .then_with(|| a.value().total_cmp(&b.value()))
        .then_with(|| a.id().cmp(&b.id()))
}

/// Lower convex hull of `rects` over `(radius, value)`, ascending in radius.
///
/// Among rectangles whose radii agree within [`EQUAL_TOL`] only the first in
/// `(radius, value, id)` order is considered.
pub fn lower_hull<'a>(rects: &'a [Rectangle], tol: f64) -> Vec<&'a Rectangle> {
    let mut sorted: Vec<&Rectangle> = rects.iter().collect();
    sorted.sort_by(by_radius_then_value);

    let mut hull: Vec<&Rectangle> = Vec::new();
    for rect in sorted {
        if let Some(last) = hull.last() {
            if (rect.radius() - last.radius()).abs() < EQUAL_TOL {
                continue;
            }
        }

        // dominated: a larger rectangle with a value at least as good
        while hull.last().is_some_and(|last| last.value() >= rect.value()) {
            hull.pop();
        }

        while hull.len() >= 2 && is_non_supporting(hull[hull.len() - 2], hull[hull.len() - 1], rect, tol) {
            hull.pop();
        }

        hull.push(rect);
    }
    hull
}

/// Rectangles to split this iteration: the lower hull without the ones
/// whose radius dropped below `min_radius`.
pub fn potentially_optimal<'a>(rects: &'a [Rectangle], min_radius: f64, tol: f64) -> Vec<&'a Rectangle> {
    let mut hull = lower_hull(rects, tol);
    hull.retain(|r| r.radius() >= min_radius - EQUAL_TOL);
    hull
}
