//! Bounded flood fill
//!
//! A flood step grows the region by one neighborhood and clips it to a
//! bounding region in the same pass over the words, so no intermediate
//! expanded copy is built. Growth beyond the bounds' dimensions is cut off
//! because [`Region::word_at`] reads zero there.

use bitregion_core::{Direction, Region};
use bitregion_morph::{Connectivity, fringe, repeat_until_stable, series, series_to_limit};
use rand::Rng;

fn neighborhood(connectivity: Connectivity) -> &'static [Direction] {
    match connectivity {
        Connectivity::FourWay => &Direction::ORTHOGONAL,
        Connectivity::EightWay => &Direction::ALL,
    }
}

/// One flood step: expand by one neighborhood, then keep only cells that
/// are on in `bounds`.
pub fn flood<'a>(region: &'a mut Region, bounds: &Region, connectivity: Connectivity) -> &'a mut Region {
    let dirs = neighborhood(connectivity);
    let sections = region.sections();
    let mut next = region.words().to_vec();
    for x in 0..region.width() {
        for s in 0..sections {
            let grown = dirs
                .iter()
                .fold(region.words()[x * sections + s], |acc, &d| {
                    acc | region.neighbor_word(x, s, d)
                });
            next[x * sections + s] = grown & bounds.word_at(x as isize, s);
        }
    }
    region.replace_words(next)
}

/// Up to `amount` flood steps, stopping early once the size is unchanged.
pub fn flood_by<'a>(
    region: &'a mut Region,
    bounds: &Region,
    amount: usize,
    connectivity: Connectivity,
) -> &'a mut Region {
    repeat_until_stable(region, amount, |r| {
        flood(r, bounds, connectivity);
    })
}

/// Flood until nothing more can be reached.
pub fn flood_to_limit<'a>(
    region: &'a mut Region,
    bounds: &Region,
    connectivity: Connectivity,
) -> &'a mut Region {
    flood_by(region, bounds, usize::MAX, connectivity)
}

/// Snapshots after each of `amount` flood steps.
pub fn flood_series(
    region: &Region,
    bounds: &Region,
    amount: usize,
    connectivity: Connectivity,
) -> Vec<Region> {
    series(region, amount, |r| {
        flood(r, bounds, connectivity);
    })
}

/// Snapshots after each flood step that reached new cells.
pub fn flood_series_to_limit(
    region: &Region,
    bounds: &Region,
    connectivity: Connectivity,
) -> Vec<Region> {
    series_to_limit(region, |r| {
        flood(r, bounds, connectivity);
    })
}

/// Grow by one random 4-way fringe cell inside `bounds` at a time until the
/// region holds `volume` cells or no fringe cell is left.
pub fn spill<'a, R: Rng + ?Sized>(
    region: &'a mut Region,
    bounds: &Region,
    volume: usize,
    rng: &mut R,
) -> &'a mut Region {
    let mut edge = Region::default();
    while region.size() < volume {
        edge.remake(region);
        fringe(&mut edge, 1, Connectivity::FourWay).and(bounds);
        match edge.single_random(rng) {
            Some(cell) => {
                region.insert_coord(cell);
            }
            None => break,
        }
    }
    tracing::trace!(size = region.size(), volume, "spill finished");
    region
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitregion_core::Coord;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn corridor() -> Region {
        // an L-shaped corridor: row 0 then column 4
        let mut bounds = Region::new(5, 5);
        bounds.insert_rectangle(0, 0, 5, 1).insert_rectangle(4, 0, 1, 5);
        bounds
    }

    #[test]
    fn test_flood_step_clips_to_bounds() {
        let bounds = corridor();
        let mut r = Region::new(5, 5);
        r.insert(0, 0);
        flood(&mut r, &bounds, Connectivity::EightWay);
        assert_eq!(r.as_coords(), vec![Coord::new(0, 0), Coord::new(1, 0)]);
    }

    #[test]
    fn test_flood_drops_cells_outside_bounds() {
        let bounds = corridor();
        let mut r = Region::new(5, 5);
        r.insert(2, 2);
        flood(&mut r, &bounds, Connectivity::FourWay);
        assert!(r.is_empty());
    }

    #[test]
    fn test_flood_to_limit_follows_corridor() {
        let bounds = corridor();
        let mut r = Region::new(5, 5);
        r.insert(0, 0);
        flood_to_limit(&mut r, &bounds, Connectivity::FourWay);
        assert_eq!(r, bounds);

        let steps = flood_series_to_limit(&Region::from_points(5, 5, [(0, 0)]), &bounds, Connectivity::FourWay);
        assert_eq!(steps.len(), 8);
        assert_eq!(steps.last(), Some(&bounds));
    }

    #[test]
    fn test_flood_by_and_series() {
        let bounds = Region::full(10, 1);
        let mut r = Region::new(10, 1);
        r.insert(0, 0);
        flood_by(&mut r, &bounds, 3, Connectivity::FourWay);
        assert_eq!(r.size(), 4);
        let snaps = flood_series(&r, &bounds, 2, Connectivity::FourWay);
        let sizes: Vec<usize> = snaps.iter().map(Region::size).collect();
        assert_eq!(sizes, vec![5, 6]);
    }

    #[test]
    fn test_flood_across_word_boundary() {
        let bounds = Region::full(1, 130);
        let mut r = Region::new(1, 130);
        r.insert(0, 63);
        flood(&mut r, &bounds, Connectivity::FourWay);
        assert_eq!(r.size(), 3);
        assert!(r.contains(0, 64));
    }

    #[test]
    fn test_spill_reaches_volume_inside_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let bounds = corridor();
        let mut r = Region::new(5, 5);
        r.insert(0, 0);
        spill(&mut r, &bounds, 6, &mut rng);
        assert_eq!(r.size(), 6);
        assert!(bounds.contains_all(&r));
    }

    #[test]
    fn test_spill_stops_when_boxed_in() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let bounds = corridor();
        let mut r = Region::new(5, 5);
        r.insert(0, 0);
        spill(&mut r, &bounds, 100, &mut rng);
        assert_eq!(r, bounds);
    }
}
