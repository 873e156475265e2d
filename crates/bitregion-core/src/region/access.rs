//! Single-cell access
//!
//! Point mutators silently ignore coordinates outside
//! `[0, width) × [0, height)`. Flood fill, splitting and translation all
//! feed such coordinates through here, so this is load-bearing rather than
//! a validation gap.

use super::Region;
use crate::Coord;

impl Region {
    /// Flat word index and bit for `(x, y)`, or `None` outside the grid.
    #[inline]
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u64)> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((x * self.sections + (y >> 6), 1u64 << (y & 63)))
    }

    /// Whether `(x, y)` lies inside the grid.
    #[inline]
    pub fn fits(&self, x: i32, y: i32) -> bool {
        self.locate(x, y).is_some()
    }

    /// Set `(x, y)` on or off.
    pub fn set(&mut self, on: bool, x: i32, y: i32) -> &mut Self {
        if let Some((i, bit)) = self.locate(x, y) {
            if on {
                self.words[i] |= bit;
            } else {
                self.words[i] &= !bit;
            }
        }
        self
    }

    /// Turn `(x, y)` on.
    pub fn insert(&mut self, x: i32, y: i32) -> &mut Self {
        if let Some((i, bit)) = self.locate(x, y) {
            self.words[i] |= bit;
        }
        self
    }

    /// Turn `(x, y)` off.
    pub fn remove(&mut self, x: i32, y: i32) -> &mut Self {
        if let Some((i, bit)) = self.locate(x, y) {
            self.words[i] &= !bit;
        }
        self
    }

    /// Toggle `(x, y)`.
    pub fn flip(&mut self, x: i32, y: i32) -> &mut Self {
        if let Some((i, bit)) = self.locate(x, y) {
            self.words[i] ^= bit;
        }
        self
    }

    /// Whether `(x, y)` is on. Cells outside the grid are off.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.locate(x, y)
            .is_some_and(|(i, bit)| self.words[i] & bit != 0)
    }

    /// Turn `coord` on.
    pub fn insert_coord(&mut self, coord: Coord) -> &mut Self {
        self.insert(coord.x, coord.y)
    }

    /// Turn `coord` off.
    pub fn remove_coord(&mut self, coord: Coord) -> &mut Self {
        self.remove(coord.x, coord.y)
    }

    /// Whether `coord` is on.
    pub fn contains_coord(&self, coord: Coord) -> bool {
        self.contains(coord.x, coord.y)
    }

    /// Turn on the cell with tight index `x * height + y`.
    pub fn insert_tight(&mut self, index: usize) -> &mut Self {
        if self.height == 0 || index >= self.width * self.height {
            return self;
        }
        let (x, y) = (index / self.height, index % self.height);
        self.words[x * self.sections + (y >> 6)] |= 1u64 << (y & 63);
        self
    }

    /// Turn off the cell with tight index `x * height + y`.
    pub fn remove_tight(&mut self, index: usize) -> &mut Self {
        if self.height == 0 || index >= self.width * self.height {
            return self;
        }
        let (x, y) = (index / self.height, index % self.height);
        self.words[x * self.sections + (y >> 6)] &= !(1u64 << (y & 63));
        self
    }

    /// Turn on every given point.
    pub fn insert_several<I>(&mut self, points: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Coord>,
    {
        for p in points {
            let c = p.into();
            self.insert(c.x, c.y);
        }
        self
    }

    /// Turn off every given point.
    pub fn remove_several<I>(&mut self, points: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Coord>,
    {
        for p in points {
            let c = p.into();
            self.remove(c.x, c.y);
        }
        self
    }

    /// Turn every cell off.
    pub fn empty(&mut self) -> &mut Self {
        self.words.fill(0);
        self
    }

    /// Turn every cell on.
    pub fn all_on(&mut self) -> &mut Self {
        self.words.fill(!0);
        self.apply_tail_mask()
    }

    /// Turn every cell on or off.
    pub fn fill(&mut self, on: bool) -> &mut Self {
        if on { self.all_on() } else { self.empty() }
    }

    /// Number of on cells.
    pub fn size(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Whether no cell is on.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// The lowest-addressed on cell (smallest x, then smallest y).
    pub fn first(&self) -> Option<Coord> {
        let i = self.words.iter().position(|&w| w != 0)?;
        let x = i / self.sections;
        let y = ((i % self.sections) << 6) | self.words[i].trailing_zeros() as usize;
        Some(Coord::new(x as i32, y as i32))
    }

    /// Tight index of [`Region::first`].
    pub fn first_tight(&self) -> Option<usize> {
        self.first()
            .map(|c| c.x as usize * self.height + c.y as usize)
    }

    /// Inclusive bounding box `(min, max)` of the on cells.
    pub fn bounds(&self) -> Option<(Coord, Coord)> {
        let first = self.first()?;
        let (mut min_y, mut max_y, mut max_x) = (usize::MAX, 0usize, 0usize);
        for x in first.x as usize..self.width {
            for (s, &w) in self.column(x).iter().enumerate() {
                if w != 0 {
                    max_x = x;
                    min_y = min_y.min((s << 6) | w.trailing_zeros() as usize);
                    max_y = max_y.max((s << 6) | (63 - w.leading_zeros() as usize));
                }
            }
        }
        Some((
            Coord::new(first.x, min_y as i32),
            Coord::new(max_x as i32, max_y as i32),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut r = Region::new(4, 4);
        r.insert(-1, 0).insert(4, 0).insert(0, 4).insert(0, -7);
        assert!(r.is_empty());
        r.flip(10, 10).remove(-3, 2);
        assert!(r.is_empty());
        assert!(!r.contains(-1, -1));
    }

    #[test]
    fn test_set_and_flip() {
        let mut r = Region::new(3, 70);
        r.set(true, 1, 65);
        assert!(r.contains(1, 65));
        r.flip(1, 65);
        assert!(!r.contains(1, 65));
        r.flip(2, 0);
        assert!(r.contains(2, 0));
        r.set(false, 2, 0);
        assert!(r.is_empty());
    }

    #[test]
    fn test_tight_index() {
        let mut r = Region::new(3, 5);
        r.insert_tight(7);
        assert!(r.contains(1, 2));
        assert_eq!(r.first_tight(), Some(7));
        r.remove_tight(7).insert_tight(15);
        assert!(r.is_empty());
    }

    #[test]
    fn test_first_and_bounds() {
        let mut r = Region::new(6, 100);
        assert_eq!(r.first(), None);
        assert_eq!(r.bounds(), None);
        r.insert(2, 80).insert(4, 3).insert(3, 90);
        assert_eq!(r.first(), Some(Coord::new(2, 80)));
        assert_eq!(r.bounds(), Some((Coord::new(2, 3), Coord::new(4, 90))));
    }

    #[test]
    fn test_fill() {
        let mut r = Region::new(2, 3);
        r.fill(true);
        assert_eq!(r.size(), 6);
        r.fill(false);
        assert!(r.is_empty());
    }
}
