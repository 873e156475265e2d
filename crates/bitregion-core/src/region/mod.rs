//! Region - packed bitset over a 2D grid
//!
//! A `Region` records which cells of a `width × height` grid are "on".
//!
//! # Word layout
//!
//! - Cells are stored in 64-bit words, one column at a time
//! - Each column uses `sections = ceil(height / 64)` words
//! - Word `x * sections + s` holds rows `64*s ..= 64*s + 63` of column `x`
//! - Bit `b` of that word is cell `(x, 64*s + b)` (LSB is the lowest row)
//!
//! Rows at or beyond `height` in the last word of a column are always zero.
//! Every operation that could set them re-applies the tail mask before
//! returning.
//!
//! # Mutation model
//!
//! Operations mutate the region in place and return `&mut Self`, so calls
//! chain: `region.not().and(&other).insert(3, 4)`. `remake` and the
//! `refill_*` family reinitialize an existing region, reusing its word
//! buffer whenever the new dimensions need the same number of words.

mod access;
mod algebra;
mod enumerate;
pub mod serial;
mod shadow;
mod transform;

pub use enumerate::Iter;
pub use shadow::Direction;

use crate::bits::{approximate_bits, sections_for, tail_mask_for};
use crate::error::{Error, Result};
use rand::Rng;

/// Packed 2D bitset.
///
/// Cloning produces an independent region with its own word array.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Region {
    width: usize,
    height: usize,
    sections: usize,
    tail_mask: u64,
    words: Vec<u64>,
}

impl Default for Region {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl std::fmt::Debug for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Region")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("size", &self.size())
            .finish()
    }
}

impl Region {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an empty `width × height` region.
    pub fn new(width: usize, height: usize) -> Self {
        let sections = sections_for(height);
        Self {
            width,
            height,
            sections,
            tail_mask: tail_mask_for(height),
            words: vec![0; width * sections],
        }
    }

    /// Create a `width × height` region with every cell on.
    pub fn full(width: usize, height: usize) -> Self {
        let mut region = Self::new(width, height);
        region.all_on();
        region
    }

    /// Create a region from a `[x][y]` grid, turning on cells where `pred`
    /// holds.
    ///
    /// The grid's outer length is the width; the first column's length is
    /// the height.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedGrid`] if a column's length differs from the
    /// first column's.
    pub fn from_grid<T, C, F>(map: &[C], pred: F) -> Result<Self>
    where
        C: AsRef<[T]>,
        F: Fn(&T) -> bool,
    {
        let mut region = Self::new(0, 0);
        region.refill_grid(map, pred)?;
        Ok(region)
    }

    /// Create a region from a `[x][y]` boolean grid.
    pub fn from_booleans<C: AsRef<[bool]>>(map: &[C]) -> Result<Self> {
        Self::from_grid(map, |&b| b)
    }

    /// Create a region from a `[x][y]` char grid, on where the char is `yes`.
    pub fn from_chars<C: AsRef<[char]>>(map: &[C], yes: char) -> Result<Self> {
        Self::from_grid(map, |&c| c == yes)
    }

    /// Create a region from a `[x][y]` char grid, on where the char is any
    /// of `yes`.
    pub fn from_chars_any<C: AsRef<[char]>>(map: &[C], yes: &[char]) -> Result<Self> {
        Self::from_grid(map, |c| yes.contains(c))
    }

    /// Create a region from a `[x][y]` grid of values, on where the value
    /// equals `yes`.
    pub fn from_values<T: PartialEq, C: AsRef<[T]>>(map: &[C], yes: T) -> Result<Self> {
        Self::from_grid(map, |v| *v == yes)
    }

    /// Create a region from a `[x][y]` grid of values, on where
    /// `lower <= value < upper`.
    pub fn from_range<T: PartialOrd, C: AsRef<[T]>>(map: &[C], lower: T, upper: T) -> Result<Self> {
        Self::from_grid(map, |v| *v >= lower && *v < upper)
    }

    /// Create a region from row strings, on where the char is `yes`.
    ///
    /// `lines[y]` is row `y`; the width is the char count of the first line.
    /// Short lines leave their missing cells off and extra chars are ignored.
    pub fn from_lines<S: AsRef<str>>(lines: &[S], yes: char) -> Self {
        let width = lines.first().map_or(0, |l| l.as_ref().chars().count());
        let mut region = Self::new(width, lines.len());
        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.as_ref().chars().take(width).enumerate() {
                if c == yes {
                    region.insert(x as i32, y as i32);
                }
            }
        }
        region
    }

    /// Create a region containing the given points; others are ignored if
    /// they fall outside the grid.
    pub fn from_points<I>(width: usize, height: usize, points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<crate::Coord>,
    {
        let mut region = Self::new(width, height);
        region.insert_several(points);
        region
    }

    /// Create a region from tight indices (`x * height + y`).
    pub fn from_tight<I: IntoIterator<Item = usize>>(width: usize, height: usize, indices: I) -> Self {
        let mut region = Self::new(width, height);
        for index in indices {
            region.insert_tight(index);
        }
        region
    }

    /// Create a region where each cell is on with probability 1/2.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: usize, height: usize) -> Self {
        let mut region = Self::new(width, height);
        region.refill_random(rng, width, height);
        region
    }

    /// Create a region where each cell is on with probability close to
    /// `fraction` (rounded to the nearest 1/64).
    pub fn random_fraction<R: Rng + ?Sized>(
        rng: &mut R,
        fraction: f64,
        width: usize,
        height: usize,
    ) -> Self {
        let mut region = Self::new(width, height);
        region.refill_random_fraction(rng, fraction, width, height);
        region
    }

    // ========================================================================
    // Reinitialization
    // ========================================================================

    /// Resize to `width × height` and clear every cell.
    ///
    /// The word buffer is reused when the word count is unchanged and
    /// reallocated otherwise.
    pub fn reset(&mut self, width: usize, height: usize) -> &mut Self {
        let sections = sections_for(height);
        let len = width * sections;
        if self.words.len() == len {
            self.words.fill(0);
        } else {
            self.words = vec![0; len];
        }
        self.width = width;
        self.height = height;
        self.sections = sections;
        self.tail_mask = tail_mask_for(height);
        self
    }

    /// Make this region a copy of `other`, reusing storage when possible.
    pub fn remake(&mut self, other: &Region) -> &mut Self {
        if self.words.len() == other.words.len() {
            self.words.copy_from_slice(&other.words);
        } else {
            self.words = other.words.clone();
        }
        self.width = other.width;
        self.height = other.height;
        self.sections = other.sections;
        self.tail_mask = other.tail_mask;
        self
    }

    /// Reinitialize from a `[x][y]` grid; see [`Region::from_grid`].
    pub fn refill_grid<T, C, F>(&mut self, map: &[C], pred: F) -> Result<&mut Self>
    where
        C: AsRef<[T]>,
        F: Fn(&T) -> bool,
    {
        let height = map.first().map_or(0, |c| c.as_ref().len());
        if let Some((column, col)) = map
            .iter()
            .enumerate()
            .find(|(_, col)| col.as_ref().len() != height)
        {
            return Err(Error::RaggedGrid {
                column,
                expected: height,
                actual: col.as_ref().len(),
            });
        }
        self.reset(map.len(), height);
        let sections = self.sections;
        for (x, col) in map.iter().enumerate() {
            for (y, value) in col.as_ref().iter().enumerate() {
                if pred(value) {
                    self.words[x * sections + (y >> 6)] |= 1u64 << (y & 63);
                }
            }
        }
        Ok(self)
    }

    /// Reinitialize from a `[x][y]` boolean grid.
    pub fn refill_booleans<C: AsRef<[bool]>>(&mut self, map: &[C]) -> Result<&mut Self> {
        self.refill_grid(map, |&b| b)
    }

    /// Reinitialize from a `[x][y]` char grid, on where the char is `yes`.
    pub fn refill_chars<C: AsRef<[char]>>(&mut self, map: &[C], yes: char) -> Result<&mut Self> {
        self.refill_grid(map, |&c| c == yes)
    }

    /// Reinitialize from a `[x][y]` grid, on where the value equals `yes`.
    pub fn refill_values<T: PartialEq, C: AsRef<[T]>>(
        &mut self,
        map: &[C],
        yes: T,
    ) -> Result<&mut Self> {
        self.refill_grid(map, |v| *v == yes)
    }

    /// Reinitialize from a `[x][y]` grid, on where `lower <= value < upper`.
    pub fn refill_range<T: PartialOrd, C: AsRef<[T]>>(
        &mut self,
        map: &[C],
        lower: T,
        upper: T,
    ) -> Result<&mut Self> {
        self.refill_grid(map, |v| *v >= lower && *v < upper)
    }

    /// Reinitialize from row strings.
    ///
    /// Unlike [`Region::from_lines`], this reads `lines[x]` at char `y`, so
    /// for a square input the result is the transpose of `from_lines`. The
    /// width is the number of lines and the height the first line's length.
    pub fn refill_lines<S: AsRef<str>>(&mut self, lines: &[S], yes: char) -> &mut Self {
        let height = lines.first().map_or(0, |l| l.as_ref().chars().count());
        self.reset(lines.len(), height);
        for (x, line) in lines.iter().enumerate() {
            for (y, c) in line.as_ref().chars().take(height).enumerate() {
                if c == yes {
                    self.insert(x as i32, y as i32);
                }
            }
        }
        self
    }

    /// Reinitialize with each cell on with probability 1/2.
    pub fn refill_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        width: usize,
        height: usize,
    ) -> &mut Self {
        self.reset(width, height);
        for word in self.words.iter_mut() {
            *word = rng.next_u64();
        }
        self.apply_tail_mask()
    }

    /// Reinitialize with each cell on with probability close to `fraction`.
    pub fn refill_random_fraction<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fraction: f64,
        width: usize,
        height: usize,
    ) -> &mut Self {
        let bit_count = (fraction.clamp(0.0, 1.0) * 64.0).round() as u32;
        self.reset(width, height);
        for word in self.words.iter_mut() {
            *word = approximate_bits(rng, bit_count);
        }
        self.apply_tail_mask()
    }

    /// Change the grid size, keeping the cells inside both old and new
    /// bounds.
    pub fn alter_bounds(&mut self, width: usize, height: usize) -> &mut Self {
        if width == self.width && height == self.height {
            return self;
        }
        let mut next = Region::new(width, height);
        let cols = width.min(self.width);
        let secs = next.sections.min(self.sections);
        for x in 0..cols {
            for s in 0..secs {
                next.words[x * next.sections + s] = self.words[x * self.sections + s];
            }
        }
        next.apply_tail_mask();
        *self = next;
        self
    }

    // ========================================================================
    // Dimensions and raw words
    // ========================================================================

    /// Grid width (number of columns).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height (number of rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Words per column.
    #[inline]
    pub fn sections(&self) -> usize {
        self.sections
    }

    /// Mask of valid rows in the last word of each column.
    #[inline]
    pub fn tail_mask(&self) -> u64 {
        self.tail_mask
    }

    /// The packed words, column-major.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Mutable access to the packed words.
    ///
    /// Callers that may set rows at or past `height` must finish with
    /// [`Region::apply_tail_mask`].
    #[inline]
    pub fn words_mut(&mut self) -> &mut [u64] {
        &mut self.words
    }

    /// The words of column `x`, or an empty slice past the right edge.
    #[inline]
    pub fn column(&self, x: usize) -> &[u64] {
        if x < self.width {
            &self.words[x * self.sections..(x + 1) * self.sections]
        } else {
            &[]
        }
    }

    /// Word `s` of column `x`; zero for any position outside the region.
    #[inline]
    pub fn word_at(&self, x: isize, s: usize) -> u64 {
        if x < 0 || x as usize >= self.width || s >= self.sections {
            0
        } else {
            self.words[x as usize * self.sections + s]
        }
    }

    /// Replace the word array with `words`, which must have the same length.
    ///
    /// Used by operators that build their result in a scratch buffer.
    pub fn replace_words(&mut self, words: Vec<u64>) -> &mut Self {
        debug_assert_eq!(words.len(), self.words.len());
        self.words = words;
        self.apply_tail_mask()
    }

    /// Clear rows at or past `height` in the last word of every column.
    pub fn apply_tail_mask(&mut self) -> &mut Self {
        if self.tail_mask != !0 && self.sections > 0 {
            let sections = self.sections;
            let mask = self.tail_mask;
            for word in self.words.iter_mut().skip(sections - 1).step_by(sections) {
                *word &= mask;
            }
        }
        self
    }
}
