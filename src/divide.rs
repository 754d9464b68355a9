//! Trisection of a selected rectangle along its longest sides.
//!
//! For a rectangle with minimum depth `d_min` and longest sides `dirs`, two
//! points at `center ± 3^-(d_min+1) e_i` are sampled for every `i` in `dirs`.
//! Dimensions are then trisected in ascending order of
//! `min(f(c + δe_i), f(c - δe_i))`, so the best samples end up in the largest
//! children:
//!
//! ```text
//!   +-----+-----+-----+        +-----+-----+-----+
//!   |     |  +  |     |        |     |  +  |     |
//!   +-----+-----+-----+   →    |  -  +-----+  +  |
//!   |  -  |  c  |  +  |        |     |  c  |     |
//!   +-----+-----+-----+        |     +-----+     |
//!   |     |  -  |     |        |     |  -  |     |
//!   +-----+-----+-----+        +-----+-----+-----+
//! ```

use tracing::trace;

use crate::error::Result;
use crate::geometry::{basis, clamp};
use crate::objective::{Objective, ScaledObjective};
use crate::rect::Rectangle;
use crate::storage::RectangleSet;

/// The two samples taken along one longest side.
#[derive(Debug, Clone)]
struct SidePair {
    dir: usize,
    c_plus: Vec<f64>,
    y_plus: f64,
    c_minus: Vec<f64>,
    y_minus: f64,
}

impl SidePair {
    fn best(&self) -> f64 {
        self.y_plus.min(self.y_minus)
    }
}

/// `center + offset * e_dir`, clamped to the unit cube.
fn shifted(center: &[f64], dir: usize, offset: f64) -> Vec<f64> {
    center
        .iter()
        .zip(basis(dir, center.len()))
        .map(|(&c, e)| clamp(c + offset * e, 0.0, 1.0))
        .collect()
}

/// Split `rect` into `2·|dirs| + 1` children.
///
/// Evaluates the objective twice per longest side (plus point first). The
/// center child keeps the parent's value without a new evaluation. Children
/// get fresh identities from `set` but are not inserted.
///
/// # Errors
/// Propagates the first objective failure; no children are produced then.
pub(crate) fn split_rectangle<O: Objective + ?Sized>(
    rect: &Rectangle,
    g: &mut ScaledObjective<'_, O>,
    set: &mut RectangleSet,
) -> Result<Vec<Rectangle>> {
    let (d_min, dirs) = rect.longest_sides();
    let delta = 3.0_f64.powi(-(d_min as i32) - 1);

    let mut pairs = Vec::with_capacity(dirs.len());
    for dir in dirs {
        let c_plus = shifted(rect.center(), dir, delta);
        let c_minus = shifted(rect.center(), dir, -delta);
        let y_plus = g.eval(&c_plus)?;
        let y_minus = g.eval(&c_minus)?;
        pairs.push(SidePair {
            dir,
            c_plus,
            y_plus,
            c_minus,
            y_minus,
        });
    }

    // stable: equal keys keep ascending dimension order
    pairs.sort_by(|a, b| a.best().total_cmp(&b.best()));

    trace!(
        rect = %rect.id(),
        d_min,
        order = ?pairs.iter().map(|p| p.dir).collect::<Vec<_>>(),
        "divide"
    );

    let mut depth = rect.division_depth().to_vec();
    let mut children = Vec::with_capacity(2 * pairs.len() + 1);
    for pair in pairs {
        depth[pair.dir] += 1;
        children.push(set.make(pair.c_plus, pair.y_plus, depth.clone()));
        children.push(set.make(pair.c_minus, pair.y_minus, depth.clone()));
    }
    children.push(set.make(rect.center().to_vec(), rect.value(), depth));
    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectError;
    use crate::geometry::Scaling;

    fn unit(n: usize) -> Scaling {
        Scaling::new(&vec![0.0; n], &vec![1.0; n]).unwrap()
    }

    fn root(set: &mut RectangleSet, value: f64) -> Rectangle {
        let n = set.dim();
        set.make(vec![0.5; n], value, vec![0; n])
    }

    #[test]
    fn test_shifted_moves_one_coordinate() {
        let c = [0.5, 0.25, 0.75];
        assert_eq!(shifted(&c, 1, 0.5), vec![0.5, 0.75, 0.75]);
        assert_eq!(shifted(&c, 0, -1.0 / 3.0)[1..], [0.25, 0.75]);
        assert!((shifted(&c, 0, -1.0 / 3.0)[0] - 1.0 / 6.0).abs() < 1e-15);
        // clamped at the cube faces
        assert_eq!(shifted(&c, 2, 0.5), vec![0.5, 0.25, 1.0]);
        assert_eq!(shifted(&c, 1, -0.5), vec![0.5, 0.0, 0.75]);
    }

    #[test]
    fn test_split_1d() {
        let scaling = unit(1);
        let mut f = |x: &[f64]| x[0];
        let mut g = ScaledObjective::new(&mut f, &scaling);
        let mut set = RectangleSet::new(1);
        let parent = root(&mut set, 0.5);

        let children = split_rectangle(&parent, &mut g, &mut set).unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(g.nfev(), 2);
        assert!((children[0].center()[0] - 5.0 / 6.0).abs() < 1e-15);
        assert!((children[1].center()[0] - 1.0 / 6.0).abs() < 1e-15);
        assert_eq!(children[2].center(), &[0.5]);
        assert_eq!(children[2].value(), 0.5);
        for c in &children {
            assert_eq!(c.division_depth(), &[1]);
            assert!((c.radius() - 1.0 / 6.0).abs() < 1e-15);
        }
    }

    #[test]
    fn test_split_orders_dims_by_best_sample() {
        // dimension 1 has the better samples, so it is trisected first
        let scaling = unit(2);
        let mut f = |x: &[f64]| x[0] + 10.0 * x[1];
        let mut g = ScaledObjective::new(&mut f, &scaling);
        let mut set = RectangleSet::new(2);
        let parent = root(&mut set, 5.5);

        let children = split_rectangle(&parent, &mut g, &mut set).unwrap();
        assert_eq!(children.len(), 5);
        // dimension 1 first: its children keep depth 0 along dimension 0
        assert_eq!(children[0].division_depth(), &[0, 1]);
        assert_eq!(children[1].division_depth(), &[0, 1]);
        assert!((children[1].center()[1] - 1.0 / 6.0).abs() < 1e-15);
        assert_eq!(children[2].division_depth(), &[1, 1]);
        assert_eq!(children[3].division_depth(), &[1, 1]);
        assert_eq!(children[4].division_depth(), &[1, 1]);
        assert_eq!(children[4].value(), 5.5);
    }

    #[test]
    fn test_split_ties_keep_dimension_order() {
        let scaling = unit(3);
        let mut f = |_: &[f64]| 1.0;
        let mut g = ScaledObjective::new(&mut f, &scaling);
        let mut set = RectangleSet::new(3);
        let parent = root(&mut set, 1.0);

        let children = split_rectangle(&parent, &mut g, &mut set).unwrap();
        let depths: Vec<Vec<u32>> = children.iter().map(|c| c.division_depth().to_vec()).collect();
        assert_eq!(
            depths,
            vec![
                vec![1, 0, 0],
                vec![1, 0, 0],
                vec![1, 1, 0],
                vec![1, 1, 0],
                vec![1, 1, 1],
                vec![1, 1, 1],
                vec![1, 1, 1],
            ]
        );
    }

    #[test]
    fn test_split_only_longest_sides() {
        let scaling = unit(3);
        let mut f = |x: &[f64]| x.iter().sum::<f64>();
        let mut g = ScaledObjective::new(&mut f, &scaling);
        let mut set = RectangleSet::new(3);
        let parent = set.make(vec![0.5, 0.5, 0.5], 1.5, vec![1, 2, 1]);

        let children = split_rectangle(&parent, &mut g, &mut set).unwrap();
        assert_eq!(children.len(), 5);
        assert_eq!(g.nfev(), 4);
        for c in &children {
            assert_eq!(c.division_depth()[1], 2);
            assert_eq!(c.center()[1], 0.5);
        }
        let delta = 1.0 / 9.0;
        assert!((children[0].center()[0] - (0.5 + delta)).abs() < 1e-15);
    }

    #[test]
    fn test_children_deeper_and_volume_preserved() {
        let scaling = unit(4);
        let mut f = |x: &[f64]| x.iter().map(|v| (v - 0.3).powi(2)).sum::<f64>();
        let mut g = ScaledObjective::new(&mut f, &scaling);
        let mut set = RectangleSet::new(4);
        let parent = set.make(vec![0.5; 4], 0.16, vec![1, 0, 0, 2]);

        let children = split_rectangle(&parent, &mut g, &mut set).unwrap();
        let total: f64 = children.iter().map(Rectangle::volume).sum();
        assert!((total - parent.volume()).abs() < 1e-15);
        for c in &children {
            let deeper = c
                .division_depth()
                .iter()
                .zip(parent.division_depth())
                .all(|(c, p)| c >= p);
            let strictly = c.division_depth() != parent.division_depth();
            assert!(deeper && strictly);
            assert!(c.radius() < parent.radius());
        }
    }

    #[test]
    fn test_split_propagates_failure() {
        let scaling = unit(2);
        let mut f = |x: &[f64]| if x[1] < 0.3 { f64::NAN } else { 0.0 };
        let mut g = ScaledObjective::new(&mut f, &scaling);
        let mut set = RectangleSet::new(2);
        let parent = root(&mut set, 0.0);
        let err = split_rectangle(&parent, &mut g, &mut set).unwrap_err();
        assert!(matches!(err, DirectError::ObjectiveEvaluationFailure { .. }));
    }
}
