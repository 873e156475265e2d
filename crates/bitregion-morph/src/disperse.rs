//! Dispersal
//!
//! Masks the region with a fixed or random per-row pattern so that
//! remaining cells are spread apart.

use bitregion_core::Region;
use rand::Rng;

const EVEN_ROWS: u64 = 0x5555_5555_5555_5555;
const ODD_ROWS: u64 = !EVEN_ROWS;

/// AND every word with `even` in even columns and `odd` in odd columns.
fn mask_columns(region: &mut Region, even: u64, odd: u64) -> &mut Region {
    let sections = region.sections();
    if sections == 0 {
        return region;
    }
    for (x, column) in region.words_mut().chunks_mut(sections).enumerate() {
        let mask = if x % 2 == 0 { even } else { odd };
        for word in column {
            *word &= mask;
        }
    }
    region
}

/// Keep a checkerboard: even rows of even columns and odd rows of odd
/// columns. No two remaining cells are orthogonally adjacent.
pub fn disperse(region: &mut Region) -> &mut Region {
    mask_columns(region, EVEN_ROWS, ODD_ROWS)
}

/// Keep only even rows of even columns. No two remaining cells touch,
/// including diagonally.
pub fn disperse_8way(region: &mut Region) -> &mut Region {
    mask_columns(region, EVEN_ROWS, 0)
}

/// Draw one random word; even columns keep its bits and odd columns keep
/// the complement. The same row pattern repeats every 64 rows.
pub fn disperse_random<'a, R: Rng + ?Sized>(region: &'a mut Region, rng: &mut R) -> &'a mut Region {
    let pattern = rng.next_u64();
    mask_columns(region, pattern, !pattern)
}
