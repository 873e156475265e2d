//! Geometric transforms
//!
//! Vertical movement is done a word at a time: a shift by `dy` rows reads
//! the 64-row window starting at `64*s - dy` from the source column, which
//! combines the whole-word part (`dy div 64`) and the in-word part
//! (`dy mod 64`) with the crossing bits carried from the neighboring word.
//! Horizontal movement just reassigns columns.

use super::Region;
use crate::Coord;
use crate::bits::{double_bits, low_bits, span_mask, window};

impl Region {
    /// Words of `source` moved by `(dx, dy)`, laid out for this region's
    /// dimensions. Cells that land outside this grid are dropped.
    fn shifted_from(&self, source: &Region, dx: i64, dy: i64) -> Vec<u64> {
        let mut out = vec![0u64; self.words.len()];
        for x in 0..self.width {
            let sx = x as i64 - dx;
            if sx < 0 || sx >= source.width as i64 {
                continue;
            }
            let column = source.column(sx as usize);
            for s in 0..self.sections {
                out[x * self.sections + s] = window(column, (s as i64) * 64 - dy);
            }
        }
        if self.sections > 0 && self.tail_mask != !0 {
            for word in out.iter_mut().skip(self.sections - 1).step_by(self.sections) {
                *word &= self.tail_mask;
            }
        }
        out
    }

    /// Move every on cell by `(dx, dy)`, dropping cells that leave the grid.
    pub fn translate(&mut self, dx: i32, dy: i32) -> &mut Self {
        if dx == 0 && dy == 0 {
            return self;
        }
        let next = self.shifted_from(self, dx as i64, dy as i64);
        self.words = next;
        self
    }

    /// Union of this region with a copy of itself moved by `(dx, dy)`.
    pub fn insert_translation(&mut self, dx: i32, dy: i32) -> &mut Self {
        let moved = self.shifted_from(self, dx as i64, dy as i64);
        for (word, m) in self.words.iter_mut().zip(moved) {
            *word |= m;
        }
        self
    }

    /// Turn on every cell of `other` placed with its origin at `(x, y)`.
    ///
    /// The offset may be negative; parts of `other` outside this grid are
    /// ignored.
    pub fn insert_region(&mut self, x: i32, y: i32, other: &Region) -> &mut Self {
        let moved = self.shifted_from(other, x as i64, y as i64);
        for (word, m) in self.words.iter_mut().zip(moved) {
            *word |= m;
        }
        self
    }

    /// Turn off every cell of `other` placed with its origin at `(x, y)`.
    pub fn remove_region(&mut self, x: i32, y: i32, other: &Region) -> &mut Self {
        let moved = self.shifted_from(other, x as i64, y as i64);
        for (word, m) in self.words.iter_mut().zip(moved) {
            *word &= !m;
        }
        self
    }

    /// Apply `op(word, mask)` to the rows `[y0, y1)` of columns `[x0, x1)`.
    fn apply_span<F>(&mut self, x0: i64, x1: i64, y0: i64, y1: i64, op: F)
    where
        F: Fn(&mut u64, u64),
    {
        let x0 = x0.max(0) as usize;
        let x1 = x1.min(self.width as i64);
        let y1 = y1.min(self.height as i64);
        if x1 <= x0 as i64 || y1 <= y0 {
            return;
        }
        for x in x0..x1 as usize {
            for s in 0..self.sections {
                let mask = span_mask(s, y0, y1);
                if mask != 0 {
                    op(&mut self.words[x * self.sections + s], mask);
                }
            }
        }
    }

    /// Turn on the `width × height` rectangle with top-left `(x, y)`.
    pub fn insert_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        let (x, y) = (x as i64, y as i64);
        self.apply_span(x, x + width as i64, y, y + height as i64, |w, m| *w |= m);
        self
    }

    /// Turn off the `width × height` rectangle with top-left `(x, y)`.
    pub fn remove_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        let (x, y) = (x as i64, y as i64);
        self.apply_span(x, x + width as i64, y, y + height as i64, |w, m| *w &= !m);
        self
    }

    /// Vertical half-extent of a disc of `radius` at horizontal offset `dx`.
    fn disc_half_height(radius: i64, dx: i64) -> i64 {
        let rem = radius * radius - dx * dx;
        let mut h = (rem as f64).sqrt() as i64;
        while (h + 1) * (h + 1) <= rem {
            h += 1;
        }
        while h > 0 && h * h > rem {
            h -= 1;
        }
        h
    }

    /// Turn on every cell within `radius` (Euclidean) of `center`.
    pub fn insert_circle(&mut self, center: Coord, radius: i32) -> &mut Self {
        if radius < 0 {
            return self;
        }
        let r = radius as i64;
        let (cx, cy) = (center.x as i64, center.y as i64);
        for dx in -r..=r {
            let h = Self::disc_half_height(r, dx);
            self.apply_span(cx + dx, cx + dx + 1, cy - h, cy + h + 1, |w, m| *w |= m);
        }
        self
    }

    /// Turn off every cell within `radius` (Euclidean) of `center`.
    pub fn remove_circle(&mut self, center: Coord, radius: i32) -> &mut Self {
        if radius < 0 {
            return self;
        }
        let r = radius as i64;
        let (cx, cy) = (center.x as i64, center.y as i64);
        for dx in -r..=r {
            let h = Self::disc_half_height(r, dx);
            self.apply_span(cx + dx, cx + dx + 1, cy - h, cy + h + 1, |w, m| *w &= !m);
        }
        self
    }

    /// Double the resolution around `(x, y)`.
    ///
    /// Each on cell becomes a 2×2 block in doubled space, and the doubled
    /// space is shifted so that `(x, y)` lands on the origin: output cell
    /// `(ox, oy)` takes the value of input cell `((ox + x) / 2, (oy + y) / 2)`.
    /// `x` and `y` are clamped into the grid. Each output word is built from
    /// 33 input rows whose bits are duplicated in place.
    pub fn zoom(&mut self, x: i32, y: i32) -> &mut Self {
        if self.width == 0 || self.height == 0 {
            return self;
        }
        let x = (x.max(0) as usize).min(self.width - 1);
        let y = (y.max(0) as usize).min(self.height - 1);
        let mut next = vec![0u64; self.words.len()];
        for ox in 0..self.width {
            let column = self.column((ox + x) / 2);
            for s in 0..self.sections {
                let start = (s as i64) * 32 + (y >> 1) as i64;
                let rows = window(column, start) & low_bits(33);
                next[ox * self.sections + s] = (double_bits(rows) >> (y & 1)) as u64;
            }
        }
        self.replace_words(next)
    }
}
