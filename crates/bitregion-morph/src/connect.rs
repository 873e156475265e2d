//! Gap bridging
//!
//! Turns on off cells that sit exactly between two on cells, closing
//! one-cell gaps in lines without growing the region anywhere else.

use bitregion_core::{Direction, Region};

/// Which opposite neighbor pairs may bridge a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bridge {
    Orthogonal,
    All,
    Lines,
}

fn bridge(region: &mut Region, kind: Bridge) -> &mut Region {
    let sections = region.sections();
    let mut next = region.words().to_vec();
    for x in 0..region.width() {
        for s in 0..sections {
            let n = |d| region.neighbor_word(x, s, d);
            let straight = (n(Direction::Up) & n(Direction::Down))
                | (n(Direction::Left) & n(Direction::Right));
            let falling = n(Direction::UpLeft) & n(Direction::DownRight);
            let rising = n(Direction::UpRight) & n(Direction::DownLeft);
            next[x * sections + s] |= match kind {
                Bridge::Orthogonal => straight,
                Bridge::All => straight | falling | rising,
                Bridge::Lines => straight | (falling ^ rising),
            };
        }
    }
    region.replace_words(next)
}

/// Fill cells whose two vertical or two horizontal neighbors are on.
pub fn connect(region: &mut Region) -> &mut Region {
    bridge(region, Bridge::Orthogonal)
}

/// Like [`connect`], also bridging across both diagonals.
pub fn connect_8way(region: &mut Region) -> &mut Region {
    bridge(region, Bridge::All)
}

/// Like [`connect_8way`], but a cell bridged by both diagonals at once
/// stays off, so the inside corner of a right angle is not filled.
pub fn connect_lines(region: &mut Region) -> &mut Region {
    bridge(region, Bridge::Lines)
}
