//! Enumeration and indexed access
//!
//! On cells are always visited column by column (increasing x), and within
//! a column from the lowest row up. [`Region::nth`] and friends find the
//! i-th cell in that order by summing word popcounts until the target word
//! is reached, then stripping low set bits inside it, so no list of cells is
//! materialized.

use super::Region;
use crate::Coord;
use rand::Rng;

impl Region {
    /// All on cells, column-major.
    pub fn as_coords(&self) -> Vec<Coord> {
        self.iter().collect()
    }

    /// All on cells packed with [`Coord::encode`].
    pub fn as_encoded(&self) -> Vec<u32> {
        self.iter().map(Coord::encode).collect()
    }

    /// All on cells as tight indices `x * height + y`.
    pub fn as_tight_encoded(&self) -> Vec<usize> {
        self.iter()
            .map(|c| c.x as usize * self.height + c.y as usize)
            .collect()
    }

    /// Iterate over the on cells.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            region: self,
            index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    /// The `index`-th on cell, or `None` if there are not that many.
    pub fn nth(&self, index: usize) -> Option<Coord> {
        let mut remaining = index;
        for (i, &word) in self.words.iter().enumerate() {
            let count = word.count_ones() as usize;
            if remaining < count {
                let mut w = word;
                for _ in 0..remaining {
                    w &= w - 1;
                }
                let x = i / self.sections;
                let y = ((i % self.sections) << 6) | w.trailing_zeros() as usize;
                return Some(Coord::new(x as i32, y as i32));
            }
            remaining -= count;
        }
        None
    }

    /// Tight index of [`Region::nth`].
    pub fn nth_tight(&self, index: usize) -> Option<usize> {
        self.nth(index)
            .map(|c| c.x as usize * self.height + c.y as usize)
    }

    /// The on cell at `fraction` of the way through the enumeration.
    ///
    /// `fraction` wraps into `[0, 1)`.
    pub fn at_fraction(&self, fraction: f64) -> Option<Coord> {
        let size = self.size();
        if size == 0 || !fraction.is_finite() {
            return None;
        }
        let index = (fraction.rem_euclid(1.0) * size as f64) as usize;
        self.nth(index.min(size - 1))
    }

    /// Tight index of [`Region::at_fraction`].
    pub fn at_fraction_tight(&self, fraction: f64) -> Option<usize> {
        self.at_fraction(fraction)
            .map(|c| c.x as usize * self.height + c.y as usize)
    }

    /// A uniformly random on cell.
    pub fn single_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coord> {
        let size = self.size();
        if size == 0 {
            return None;
        }
        self.nth(rng.gen_range(0..size))
    }

    /// Tight index of [`Region::single_random`].
    pub fn single_random_tight<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        self.single_random(rng)
            .map(|c| c.x as usize * self.height + c.y as usize)
    }
}

/// Iterator over the on cells of a [`Region`].
///
/// Holds a shared borrow, so the region cannot be modified while iterating.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    region: &'a Region,
    index: usize,
    current: u64,
}

impl Iterator for Iter<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let words = &self.region.words;
        while self.current == 0 {
            self.index += 1;
            if self.index >= words.len() {
                return None;
            }
            self.current = words[self.index];
        }
        let bit = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        let sections = self.region.sections;
        let x = self.index / sections;
        let y = ((self.index % sections) << 6) | bit;
        Some(Coord::new(x as i32, y as i32))
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = Coord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_corner_points_enumerate_in_order() {
        let mut r = Region::new(5, 5);
        r.insert(4, 4).insert(0, 0);
        assert_eq!(r.as_coords(), vec![Coord::new(0, 0), Coord::new(4, 4)]);
        assert_eq!(r.as_tight_encoded(), vec![0, 24]);
        assert_eq!(r.as_encoded(), vec![0, (4 << 16) | 4]);
    }

    #[test]
    fn test_nth_matches_as_coords() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let r = Region::random(&mut rng, 7, 150);
        let coords = r.as_coords();
        for (i, c) in coords.iter().enumerate() {
            assert_eq!(r.nth(i), Some(*c));
        }
        assert_eq!(r.nth(coords.len()), None);
    }

    #[test]
    fn test_at_fraction() {
        let mut r = Region::new(4, 4);
        r.insert(0, 0).insert(1, 1).insert(2, 2).insert(3, 3);
        assert_eq!(r.at_fraction(0.0), Some(Coord::new(0, 0)));
        assert_eq!(r.at_fraction(0.5), Some(Coord::new(2, 2)));
        assert_eq!(r.at_fraction(1.25), Some(Coord::new(1, 1)));
        assert_eq!(Region::new(4, 4).at_fraction(0.5), None);
    }

    #[test]
    fn test_single_random_is_member() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut r = Region::new(20, 80);
        r.insert(3, 70).insert(19, 1).insert(7, 64);
        for _ in 0..20 {
            let c = r.single_random(&mut rng).unwrap();
            assert!(r.contains_coord(c));
        }
        assert_eq!(Region::new(3, 3).single_random(&mut rng), None);
    }

    #[test]
    fn test_iter_empty_region() {
        assert_eq!(Region::new(0, 0).iter().count(), 0);
        assert_eq!(Region::new(3, 0).iter().count(), 0);
    }
}
