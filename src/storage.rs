//! The driver-owned working set of rectangles.
//!
//! Rectangles keep their insertion order; every rectangle gets a fresh
//! [`RectId`] from a monotonic counter, so removing the rectangles that were
//! split in an iteration is an exact identity check.

use std::collections::BTreeSet;

use crate::rect::{RectId, Rectangle};

/// Ordered collection of the rectangles currently partitioning the unit cube.
#[derive(Debug, Clone)]
pub struct RectangleSet {
    dim: usize,
    rects: Vec<Rectangle>,
    next_id: u64,
}

impl RectangleSet {
    /// Create an empty set for an `dim`-dimensional problem.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            rects: Vec::new(),
            next_id: 0,
        }
    }

    fn alloc_id(&mut self) -> RectId {
        let id = RectId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Create a rectangle with a fresh identity without inserting it.
    pub(crate) fn make(&mut self, center: Vec<f64>, value: f64, division_depth: Vec<u32>) -> Rectangle {
        debug_assert_eq!(center.len(), self.dim);
        let id = self.alloc_id();
        Rectangle::new(id, center, value, division_depth)
    }

    /// Create and append a rectangle, returning its identity.
    pub fn insert(&mut self, center: Vec<f64>, value: f64, division_depth: Vec<u32>) -> RectId {
        let rect = self.make(center, value, division_depth);
        let id = rect.id();
        self.rects.push(rect);
        id
    }

    /// Append rectangles created by [`RectangleSet::make`].
    pub(crate) fn extend(&mut self, rects: impl IntoIterator<Item = Rectangle>) {
        self.rects.extend(rects);
    }

    /// Remove every rectangle whose id is in `ids`; survivors keep their order.
    /// Returns the number of rectangles removed.
    pub fn remove_ids(&mut self, ids: &BTreeSet<RectId>) -> usize {
        let before = self.rects.len();
        self.rects.retain(|r| !ids.contains(&r.id()));
        before - self.rects.len()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn as_slice(&self) -> &[Rectangle] {
        &self.rects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rectangle> {
        self.rects.iter()
    }

    /// Rectangle with the lowest value; the first one in set order wins ties.
    pub fn best(&self) -> Option<&Rectangle> {
        self.rects.iter().fold(None, |best: Option<&Rectangle>, r| match best {
            Some(b) if b.value() <= r.value() => Some(b),
            _ => Some(r),
        })
    }

    /// Summed volume of all rectangles (1 for a complete partition).
    pub fn total_volume(&self) -> f64 {
        self.rects.iter().map(Rectangle::volume).sum()
    }

    /// Consume the set, keeping the rectangles in order.
    pub fn into_vec(self) -> Vec<Rectangle> {
        self.rects
    }
}

impl<'a> IntoIterator for &'a RectangleSet {
    type Item = &'a Rectangle;
    type IntoIter = std::slice::Iter<'a, Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}
