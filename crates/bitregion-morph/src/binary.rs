//! Binary morphological operations
//!
//! Dilation ("expand") and erosion ("retract") with a plus-shaped (4-way)
//! or 3×3 (8-way) neighborhood, plus the derived fringe and surface
//! operators and their N-step and series forms.
//!
//! Every operator works a word at a time. For each word of the result the
//! eight neighbor shadows come from [`Region::neighbor_word`]: vertical
//! neighbors are one-bit shifts carrying the crossing bit from the adjacent
//! word of the same column, horizontal neighbors are the adjacent column's
//! word as is, and diagonals combine the two. Neighbors outside the grid are
//! off, so erosion always clears the outer ring of cells.

use crate::Connectivity;
use bitregion_core::{Direction, Region};

/// Accumulate `op` over the cell itself and the neighbor shadows `dirs`.
fn accumulate<F>(region: &Region, dirs: &[Direction], op: F) -> Vec<u64>
where
    F: Fn(u64, u64) -> u64,
{
    let sections = region.sections();
    let mut next = region.words().to_vec();
    for x in 0..region.width() {
        for s in 0..sections {
            let i = x * sections + s;
            next[i] = dirs
                .iter()
                .fold(next[i], |acc, &d| op(acc, region.neighbor_word(x, s, d)));
        }
    }
    next
}

fn neighborhood(connectivity: Connectivity) -> &'static [Direction] {
    match connectivity {
        Connectivity::FourWay => &Direction::ORTHOGONAL,
        Connectivity::EightWay => &Direction::ALL,
    }
}

/// One step of dilation: every on cell turns on its neighbors.
pub fn dilate(region: &mut Region, connectivity: Connectivity) -> &mut Region {
    let next = accumulate(region, neighborhood(connectivity), |a, b| a | b);
    region.replace_words(next)
}

/// One step of erosion: a cell stays on only if all its neighbors are on.
pub fn erode(region: &mut Region, connectivity: Connectivity) -> &mut Region {
    let next = accumulate(region, neighborhood(connectivity), |a, b| a & b);
    region.replace_words(next)
}

/// `amount` steps of dilation, stopping early once nothing changes.
pub fn dilate_by(region: &mut Region, amount: usize, connectivity: Connectivity) -> &mut Region {
    repeat_until_stable(region, amount, |r| {
        dilate(r, connectivity);
    })
}

/// `amount` steps of erosion, stopping early once nothing changes.
pub fn erode_by(region: &mut Region, amount: usize, connectivity: Connectivity) -> &mut Region {
    repeat_until_stable(region, amount, |r| {
        erode(r, connectivity);
    })
}

/// Apply `step` up to `amount` times, stopping once the size is unchanged.
pub fn repeat_until_stable<F>(region: &mut Region, amount: usize, mut step: F) -> &mut Region
where
    F: FnMut(&mut Region),
{
    let mut size = region.size();
    for _ in 0..amount {
        step(region);
        let next = region.size();
        if next == size {
            break;
        }
        size = next;
    }
    region
}

/// Snapshots after each of `amount` successive steps.
pub fn series<F>(region: &Region, amount: usize, mut step: F) -> Vec<Region>
where
    F: FnMut(&mut Region),
{
    let mut current = region.clone();
    (0..amount)
        .map(|_| {
            step(&mut current);
            current.clone()
        })
        .collect()
}

/// Snapshots after each step that changed the size; stops at the first
/// step that does not.
pub fn series_to_limit<F>(region: &Region, mut step: F) -> Vec<Region>
where
    F: FnMut(&mut Region),
{
    let mut current = region.clone();
    let mut size = current.size();
    let mut out = Vec::new();
    loop {
        step(&mut current);
        let next = current.size();
        if next == size {
            break;
        }
        size = next;
        out.push(current.clone());
    }
    tracing::trace!(steps = out.len(), size, "series reached its limit");
    out
}

/// Successive dilations.
pub fn dilate_series(region: &Region, amount: usize, connectivity: Connectivity) -> Vec<Region> {
    series(region, amount, |r| {
        dilate(r, connectivity);
    })
}

/// Successive dilations until the region stops growing.
pub fn dilate_series_to_limit(region: &Region, connectivity: Connectivity) -> Vec<Region> {
    series_to_limit(region, |r| {
        dilate(r, connectivity);
    })
}

/// Successive erosions.
pub fn erode_series(region: &Region, amount: usize, connectivity: Connectivity) -> Vec<Region> {
    series(region, amount, |r| {
        erode(r, connectivity);
    })
}

/// Successive erosions until the region stops shrinking.
pub fn erode_series_to_limit(region: &Region, connectivity: Connectivity) -> Vec<Region> {
    series_to_limit(region, |r| {
        erode(r, connectivity);
    })
}

/// Cells gained by `amount` dilations.
pub fn fringe(region: &mut Region, amount: usize, connectivity: Connectivity) -> &mut Region {
    let original = region.clone();
    dilate_by(region, amount, connectivity).and_not(&original)
}

/// The ring gained at each dilation distance `1..=amount`.
pub fn fringe_series(region: &Region, amount: usize, connectivity: Connectivity) -> Vec<Region> {
    let mut previous = region.clone();
    (0..amount)
        .map(|_| {
            let mut ring = previous.clone();
            dilate(&mut ring, connectivity);
            let grown = ring.clone();
            ring.and_not(&previous);
            previous = grown;
            ring
        })
        .collect()
}

/// Cells lost by `amount` erosions.
pub fn surface(region: &mut Region, amount: usize, connectivity: Connectivity) -> &mut Region {
    let mut inner = region.clone();
    erode_by(&mut inner, amount, connectivity);
    region.and_not(&inner)
}

/// The layer lost at each erosion depth `0..amount`, outermost first.
pub fn surface_series(region: &Region, amount: usize, connectivity: Connectivity) -> Vec<Region> {
    let mut previous = region.clone();
    (0..amount)
        .map(|_| {
            let mut inner = previous.clone();
            erode(&mut inner, connectivity);
            let mut layer = previous.clone();
            layer.and_not(&inner);
            previous = inner;
            layer
        })
        .collect()
}

/// Turn off the outer ring of the grid.
pub fn remove_edges(region: &mut Region) -> &mut Region {
    let (w, h) = (region.width() as i32, region.height() as i32);
    region
        .remove_rectangle(0, 0, w, 1)
        .remove_rectangle(0, h - 1, w, 1)
        .remove_rectangle(0, 0, 1, h)
        .remove_rectangle(w - 1, 0, 1, h)
}

/// Turn off convex corners: on cells missing a vertical neighbor and a
/// horizontal neighbor at the same time. Line ends count as corners.
pub fn remove_corners(region: &mut Region) -> &mut Region {
    let sections = region.sections();
    let mut next = region.words().to_vec();
    for x in 0..region.width() {
        for s in 0..sections {
            let up = region.neighbor_word(x, s, Direction::Up);
            let down = region.neighbor_word(x, s, Direction::Down);
            let left = region.neighbor_word(x, s, Direction::Left);
            let right = region.neighbor_word(x, s, Direction::Right);
            next[x * sections + s] &= (up & down) | (left & right);
        }
    }
    region.replace_words(next)
}
