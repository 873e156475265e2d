//! Separated sampling
//!
//! Each strategy picks cells spread across the region's on-cell
//! enumeration rather than clustered in one place. They trade speed for
//! spread:
//!
//! - mixed: a seed-rotated Van der Corput sequence; fastest, may repeat
//! - quasi: the first coordinate of each quasi-random point; may repeat
//! - Z-curve: even strides along the Morton order of the cells; slowest,
//!   never repeats, best 2D spread

use crate::options::SampleOptions;
use crate::quasi::{QuasiRandom, van_der_corput};
use bitregion_core::bits::morton;
use bitregion_core::{Coord, Region};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Map a fraction in `[0, 1)` to an enumeration index below `size`.
fn index_at(fraction: f64, size: usize) -> usize {
    ((fraction * size as f64) as usize).min(size - 1)
}

/// Cells at seed-rotated Van der Corput positions of the enumeration.
pub fn mixed_random_separated(region: &Region, options: &SampleOptions, seed: u64) -> Vec<Coord> {
    let size = region.size();
    let count = options.count(size);
    if count == 0 {
        return Vec::new();
    }
    let shift: f64 = StdRng::seed_from_u64(seed).r#gen();
    let picks: Vec<Coord> = (1..=count as u64)
        .filter_map(|i| {
            let fraction = (van_der_corput(2, i) + shift).fract();
            region.nth(index_at(fraction, size))
        })
        .collect();
    tracing::trace!(size, picked = picks.len(), seed, "mixed random sampling");
    picks
}

/// Cells indexed by the first coordinate of successive quasi-random points.
pub fn quasi_random_separated<Q: QuasiRandom + ?Sized>(
    region: &Region,
    options: &SampleOptions,
    quasi: &mut Q,
) -> Vec<Coord> {
    let size = region.size();
    let count = options.count(size);
    let mut point = [0.0; 2];
    (0..count)
        .filter_map(|_| {
            quasi.fill_vector(&mut point);
            region.nth(index_at(point[0], size))
        })
        .collect()
}

/// Distinct cells at even strides along the Z-order curve, starting from
/// a quasi-random offset within the first stride.
///
/// Collects and Morton-sorts every on cell, so each call costs
/// `O(n log n)` in the region's size where the other two strategies only
/// index into the enumeration. That cost buys picks that never repeat and
/// stay apart in both axes.
pub fn separated_z_curve<Q: QuasiRandom + ?Sized>(
    region: &Region,
    options: &SampleOptions,
    quasi: &mut Q,
) -> Vec<Coord> {
    let mut cells = region.as_coords();
    let count = options.count(cells.len());
    if count == 0 {
        return Vec::new();
    }
    cells.sort_unstable_by_key(|c| morton(c.x as u32, c.y as u32));

    let stride = cells.len() as f64 / count as f64;
    let mut point = [0.0; 2];
    quasi.fill_vector(&mut point);
    let offset = point[0] * stride;
    let last = cells.len() - 1;
    (0..count)
        .map(|i| cells[((offset + i as f64 * stride) as usize).min(last)])
        .collect()
}

/// Build a region of the same dimensions holding only `cells`.
pub(crate) fn region_of(region: &Region, cells: &[Coord]) -> Region {
    Region::from_points(region.width(), region.height(), cells.iter().copied())
}

/// [`mixed_random_separated`] as a region.
pub fn mixed_random_region(region: &Region, options: &SampleOptions, seed: u64) -> Region {
    region_of(region, &mixed_random_separated(region, options, seed))
}

/// [`quasi_random_separated`] as a region.
pub fn quasi_random_region<Q: QuasiRandom + ?Sized>(
    region: &Region,
    options: &SampleOptions,
    quasi: &mut Q,
) -> Region {
    region_of(region, &quasi_random_separated(region, options, quasi))
}

/// [`separated_z_curve`] as a region.
pub fn separated_region_z_curve<Q: QuasiRandom + ?Sized>(
    region: &Region,
    options: &SampleOptions,
    quasi: &mut Q,
) -> Region {
    region_of(region, &separated_z_curve(region, options, quasi))
}
