//! Directional neighbor shadows
//!
//! A shadow replaces every cell with "the neighbor in direction `d` is on".
//! The cell itself does not need to be on. Vertical directions are one-bit
//! shifts within a column that carry the crossing bit from the adjacent
//! section; horizontal directions read the adjacent column's word as is.
//!
//! [`Region::neighbor_word`] is the word-level primitive that the
//! morphology and flood crates compose their operators from.

use super::Region;

/// One of the eight grid directions.
///
/// `Up` is toward row `y - 1`, `Left` toward column `x - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// The four orthogonal directions.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The four diagonal directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Offset `(dx, dy)` of the neighbor in this direction.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }
}

impl Region {
    /// Word `s` of column `x` of the shadow in direction `dir`.
    ///
    /// Bit `b` is set when cell `(x + dx, 64*s + b + dy)` is on. Neighbors
    /// outside the grid are off, and rows past `height` are masked.
    #[inline]
    pub fn neighbor_word(&self, x: usize, s: usize, dir: Direction) -> u64 {
        let (dx, dy) = dir.offset();
        let col = x as isize + dx;
        let word = self.word_at(col, s);
        let shifted = match dy {
            -1 => {
                let carry = if s > 0 { self.word_at(col, s - 1) >> 63 } else { 0 };
                (word << 1) | carry
            }
            1 => (word >> 1) | (self.word_at(col, s + 1) << 63),
            _ => word,
        };
        if s + 1 == self.sections {
            shifted & self.tail_mask
        } else {
            shifted
        }
    }

    /// Replace the contents with the shadow in direction `dir`.
    pub fn neighbor(&mut self, dir: Direction) -> &mut Self {
        let mut next = vec![0u64; self.words.len()];
        for x in 0..self.width {
            for s in 0..self.sections {
                next[x * self.sections + s] = self.neighbor_word(x, s, dir);
            }
        }
        self.words = next;
        self
    }

    /// Cells whose neighbor at `y - 1` is on.
    pub fn neighbor_up(&mut self) -> &mut Self {
        self.neighbor(Direction::Up)
    }

    /// Cells whose neighbor at `y + 1` is on.
    pub fn neighbor_down(&mut self) -> &mut Self {
        self.neighbor(Direction::Down)
    }

    /// Cells whose neighbor at `x - 1` is on.
    pub fn neighbor_left(&mut self) -> &mut Self {
        self.neighbor(Direction::Left)
    }

    /// Cells whose neighbor at `x + 1` is on.
    pub fn neighbor_right(&mut self) -> &mut Self {
        self.neighbor(Direction::Right)
    }

    /// Cells whose neighbor at `(x - 1, y - 1)` is on.
    pub fn neighbor_up_left(&mut self) -> &mut Self {
        self.neighbor(Direction::UpLeft)
    }

    /// Cells whose neighbor at `(x + 1, y - 1)` is on.
    pub fn neighbor_up_right(&mut self) -> &mut Self {
        self.neighbor(Direction::UpRight)
    }

    /// Cells whose neighbor at `(x - 1, y + 1)` is on.
    pub fn neighbor_down_left(&mut self) -> &mut Self {
        self.neighbor(Direction::DownLeft)
    }

    /// Cells whose neighbor at `(x + 1, y + 1)` is on.
    pub fn neighbor_down_right(&mut self) -> &mut Self {
        self.neighbor(Direction::DownRight)
    }
}
