//! Coord - integer grid position
//!
//! Coordinates are signed so callers can pass positions left of or above a
//! region; such positions are simply outside it.

use std::fmt;

/// A cell position `(x, y)`.
///
/// Ordering is by `x` first, then `y`, which is the order regions
/// enumerate their cells in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Create a coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pack into the absolute encoding used by [`crate::Region::as_encoded`].
    ///
    /// `x` occupies the high 16 bits and `y` the low 16 bits.
    #[inline]
    pub fn encode(self) -> u32 {
        ((self.x as u32 & 0xFFFF) << 16) | (self.y as u32 & 0xFFFF)
    }

    /// Inverse of [`Coord::encode`].
    #[inline]
    pub fn decode(code: u32) -> Self {
        Self {
            x: (code >> 16) as i32,
            y: (code & 0xFFFF) as i32,
        }
    }

    /// Translate by `(dx, dy)`.
    #[inline]
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
