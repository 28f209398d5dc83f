use std::ops::Index;

use geometry::Float;

use crate::ShapeId;

/// A candidate hit, `t` along a ray against a primitive shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub t: Float,
    pub shape: ShapeId,
}

impl Intersection {
    pub fn new(t: Float, shape: ShapeId) -> Self {
        Self { t, shape }
    }
}

/// Reusable accumulator that shapes append their hits into.  Cleared and
/// refilled for every ray so a single allocation serves a whole render.
#[derive(Debug, Clone, Default)]
pub struct Intersections {
    data: Vec<Intersection>,
}

impl Intersections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Append a single hit
    #[inline]
    pub fn push(&mut self, t: Float, shape: ShapeId) {
        self.data.push(Intersection::new(t, shape));
    }

    /// Remove every hit, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Intersection> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[Intersection] {
        &self.data
    }

    /// Sort every hit by distance
    pub fn sort(&mut self) {
        self.sort_from(0);
    }

    /// Sort the hits from `start` onwards by distance, leaving earlier ones
    /// in place.  Stable, so equal distances keep their insertion order.
    pub fn sort_from(&mut self, start: usize) {
        self.data[start..].sort_by(|a, b| a.t.total_cmp(&b.t));
    }

    /// Keep only the hits from `start` onwards that match the predicate,
    /// visiting them in order.  Earlier hits are untouched.
    pub fn retain_from(&mut self, start: usize, mut keep: impl FnMut(&Intersection) -> bool) {
        let mut write = start;
        for read in start..self.data.len() {
            let item = self.data[read];
            if keep(&item) {
                self.data[write] = item;
                write += 1;
            }
        }
        self.data.truncate(write);
    }

    /// Index of the visible hit: the smallest non-negative distance
    pub fn hit_index(&self) -> Option<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, x)| x.t >= 0.0)
            .min_by(|(_, a), (_, b)| a.t.total_cmp(&b.t))
            .map(|(idx, _)| idx)
    }

    /// The visible hit: the smallest non-negative distance
    pub fn hit(&self) -> Option<Intersection> {
        self.hit_index().map(|idx| self.data[idx])
    }
}

impl Index<usize> for Intersections {
    type Output = Intersection;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<'a> IntoIterator for &'a Intersections {
    type Item = &'a Intersection;
    type IntoIter = std::slice::Iter<'a, Intersection>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
