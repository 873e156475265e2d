//! Boolean algebra between regions
//!
//! All binary operators walk the overlapping word range of the two
//! operands: the first `min(width)` columns and, within each, the first
//! `min(sections)` words. Regions of different sizes therefore combine as
//! if clipped to their common top-left rectangle of words; receivers keep
//! their own dimensions and every word outside that rectangle.

use super::Region;

impl Region {
    /// Apply `op(self_word, other_word)` over the overlapping words.
    ///
    /// Receiver words outside the overlap are left as they are.
    fn combine<F>(&mut self, other: &Region, op: F)
    where
        F: Fn(u64, u64) -> u64,
    {
        let cols = self.width.min(other.width);
        let secs = self.sections.min(other.sections);
        for x in 0..cols {
            for s in 0..secs {
                let i = x * self.sections + s;
                self.words[i] = op(self.words[i], other.words[x * other.sections + s]);
            }
        }
    }

    /// Intersection: keep cells on in both.
    ///
    /// Cells outside `other`'s words are not touched.
    pub fn and(&mut self, other: &Region) -> &mut Self {
        self.combine(other, |a, b| a & b);
        self
    }

    /// Union: turn on cells on in either.
    pub fn or(&mut self, other: &Region) -> &mut Self {
        self.combine(other, |a, b| a | b);
        self.apply_tail_mask()
    }

    /// Symmetric difference.
    pub fn xor(&mut self, other: &Region) -> &mut Self {
        self.combine(other, |a, b| a ^ b);
        self.apply_tail_mask()
    }

    /// Difference: remove cells that are on in `other`.
    pub fn and_not(&mut self, other: &Region) -> &mut Self {
        self.combine(other, |a, b| a & !b);
        self
    }

    /// Reverse difference: cells on in `other` but off here, within the
    /// overlap.
    pub fn not_and(&mut self, other: &Region) -> &mut Self {
        self.combine(other, |a, b| !a & b);
        self.apply_tail_mask()
    }

    /// Complement within the grid.
    pub fn not(&mut self) -> &mut Self {
        for word in self.words.iter_mut() {
            *word = !*word;
        }
        self.apply_tail_mask()
    }

    /// Whether any cell is on in both regions.
    pub fn intersects(&self, other: &Region) -> bool {
        let cols = self.width.min(other.width);
        let secs = self.sections.min(other.sections);
        (0..cols).any(|x| {
            (0..secs).any(|s| {
                self.words[x * self.sections + s] & other.words[x * other.sections + s] != 0
            })
        })
    }

    /// Whether every on cell of `other` is also on here.
    ///
    /// Cells of `other` outside this region's words count as missing.
    pub fn contains_all(&self, other: &Region) -> bool {
        (0..other.width).all(|x| {
            (0..other.sections).all(|s| {
                let theirs = other.words[x * other.sections + s];
                theirs & !self.word_at(x as isize, s) == 0
            })
        })
    }

    /// Per-cell count of how many `regions` contain it, as `[x][y]`.
    ///
    /// The grid takes the largest width and height among the inputs.
    /// Cellular-automaton steppers use this on shifted copies to get
    /// neighbour counts for a whole grid at once.
    pub fn sum(regions: &[&Region]) -> Vec<Vec<u32>> {
        let width = regions.iter().map(|r| r.width).max().unwrap_or(0);
        let height = regions.iter().map(|r| r.height).max().unwrap_or(0);
        let mut counts = vec![vec![0u32; height]; width];
        for region in regions {
            for (x, column) in counts.iter_mut().enumerate().take(region.width) {
                for (s, &word) in region.column(x).iter().enumerate() {
                    let mut w = word;
                    while w != 0 {
                        column[(s << 6) | w.trailing_zeros() as usize] += 1;
                        w &= w - 1;
                    }
                }
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Region {
        let mut r = Region::new(5, 70);
        r.insert(0, 0).insert(1, 64).insert(4, 69).insert(2, 2);
        r
    }

    #[test]
    fn test_idempotence() {
        let r = sample();
        assert_eq!(*r.clone().and(&r), r);
        assert_eq!(*r.clone().or(&r), r);
    }

    #[test]
    fn test_complement() {
        let r = sample();
        assert_eq!(*r.clone().not().not(), r);
        assert!(r.clone().not().and(&r).is_empty());
        assert_eq!(r.clone().not().size(), 5 * 70 - r.size());
    }

    #[test]
    fn test_and_not_and_not_and() {
        let a = sample();
        let mut b = Region::new(5, 70);
        b.insert(0, 0).insert(3, 3);
        let diff = a.clone().and_not(&b).as_coords();
        assert_eq!(diff.len(), 3);
        let rev = a.clone().not_and(&b).as_coords();
        assert_eq!(rev, vec![crate::Coord::new(3, 3)]);
    }

    #[test]
    fn test_xor() {
        let a = sample();
        assert!(a.clone().xor(&a).is_empty());
    }

    #[test]
    fn test_mismatched_dimensions_clip() {
        let mut big = Region::full(10, 10);
        let mut small = Region::new(4, 4);
        small.insert(1, 1);
        big.and(&small);
        // columns 0..4 take small's words; columns 4.. are untouched
        assert_eq!(big.size(), 1 + 6 * 10);
        assert_eq!(big.width(), 10);
        assert!(big.contains(1, 1) && !big.contains(1, 7));
        assert!(big.contains(4, 0) && big.contains(9, 9));

        let mut other = Region::new(4, 4);
        other.or(&Region::full(10, 10));
        assert_eq!(other.size(), 16);
    }

    #[test]
    fn test_cells_outside_overlap_survive() {
        let mut r = Region::new(10, 10);
        r.insert(8, 8).insert(1, 1);
        let small = Region::new(4, 4);

        let mut anded = r.clone();
        anded.and(&small);
        assert_eq!(anded.as_coords(), vec![crate::Coord::new(8, 8)]);

        let mut reversed = r.clone();
        reversed.not_and(&small);
        assert_eq!(reversed.as_coords(), vec![crate::Coord::new(8, 8)]);

        // overlap is whole words: rows past a short height still clip
        let mut tall = Region::full(2, 100);
        tall.and(&Region::new(2, 64));
        assert_eq!(tall.size(), 2 * 36);
    }

    #[test]
    fn test_intersects_and_contains_all() {
        let a = sample();
        let mut b = Region::new(5, 70);
        b.insert(1, 64);
        assert!(a.intersects(&b));
        assert!(a.contains_all(&b));
        b.insert(3, 3);
        assert!(!a.contains_all(&b));
        b.remove(1, 64);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_sum() {
        let mut a = Region::new(3, 3);
        a.insert(1, 1).insert(0, 0);
        let mut b = Region::new(3, 3);
        b.insert(1, 1);
        let counts = Region::sum(&[&a, &b]);
        assert_eq!(counts[1][1], 2);
        assert_eq!(counts[0][0], 1);
        assert_eq!(counts[2][2], 0);
    }
}
