//! PointSet - mutable coordinate collection contract
//!
//! Lets a [`Region`] stand in wherever code expects a set of coordinates.
//! Iteration order for a region is the same as [`Region::as_coords`]; the
//! iterator holds a shared borrow, so structural modification during
//! iteration does not compile.

use crate::{Coord, Region};

/// A mutable set of grid coordinates.
pub trait PointSet {
    /// Whether `point` is in the set.
    fn contains_point(&self, point: Coord) -> bool;

    /// Add `point`; returns `true` if the set changed.
    fn add_point(&mut self, point: Coord) -> bool;

    /// Remove `point`; returns `true` if the set changed.
    fn remove_point(&mut self, point: Coord) -> bool;

    /// Number of points in the set.
    fn point_count(&self) -> usize;

    /// Add every point; returns `true` if the set changed.
    fn add_all<I: IntoIterator<Item = Coord>>(&mut self, points: I) -> bool {
        points
            .into_iter()
            .fold(false, |changed, p| self.add_point(p) | changed)
    }

    /// Remove every point; returns `true` if the set changed.
    fn remove_all<I: IntoIterator<Item = Coord>>(&mut self, points: I) -> bool {
        points
            .into_iter()
            .fold(false, |changed, p| self.remove_point(p) | changed)
    }

    /// Whether every point is in the set.
    fn contains_all_points<I: IntoIterator<Item = Coord>>(&self, points: I) -> bool {
        points.into_iter().all(|p| self.contains_point(p))
    }
}

impl PointSet for Region {
    fn contains_point(&self, point: Coord) -> bool {
        self.contains(point.x, point.y)
    }

    /// Points outside the grid cannot be added and leave the set unchanged.
    fn add_point(&mut self, point: Coord) -> bool {
        if !self.fits(point.x, point.y) || self.contains(point.x, point.y) {
            return false;
        }
        self.insert(point.x, point.y);
        true
    }

    fn remove_point(&mut self, point: Coord) -> bool {
        if !self.contains(point.x, point.y) {
            return false;
        }
        self.remove(point.x, point.y);
        true
    }

    fn point_count(&self) -> usize {
        self.size()
    }
}

impl Region {
    /// Keep only the points that are also in `keep`; returns `true` if the
    /// set changed.
    pub fn retain_all<P: PointSet + ?Sized>(&mut self, keep: &P) -> bool {
        let before = self.size();
        let drop: Vec<Coord> = self.iter().filter(|&c| !keep.contains_point(c)).collect();
        self.remove_several(drop);
        self.size() != before
    }
}

impl Extend<Coord> for Region {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        self.insert_several(iter);
    }
}
