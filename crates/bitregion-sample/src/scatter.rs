//! Random picks from a region

use bitregion_core::{Coord, Region};
use rand::Rng;

/// Greedily pick random cells at least `min_distance + 1` apart in both
/// axes: after each pick, the `(2d+1)²` square around it is removed from
/// the candidates. Stops when no candidate is left or `limit` is reached.
pub fn random_scatter<R: Rng + ?Sized>(
    region: &Region,
    rng: &mut R,
    min_distance: usize,
    limit: Option<usize>,
) -> Vec<Coord> {
    let d = min_distance.min(i32::MAX as usize / 2) as i32;
    let side = 2 * d + 1;
    let mut candidates = region.clone();
    let mut picks = Vec::new();
    while limit.is_none_or(|limit| picks.len() < limit) {
        let Some(cell) = candidates.single_random(rng) else {
            break;
        };
        candidates.remove_rectangle(cell.x - d, cell.y - d, side, side);
        picks.push(cell);
    }
    tracing::trace!(picked = picks.len(), min_distance, "random scatter");
    picks
}

/// `count` distinct uniformly random cells of the region, or all of them
/// when it holds fewer.
pub fn random_portion<R: Rng + ?Sized>(region: &Region, rng: &mut R, count: usize) -> Region {
    let size = region.size();
    if count >= size {
        return region.clone();
    }
    // pick whichever side of the split is smaller, one cell at a time
    let keep_picked = count <= size / 2;
    let picks = if keep_picked { count } else { size - count };
    let mut remaining = region.clone();
    let mut picked = Region::new(region.width(), region.height());
    for _ in 0..picks {
        let Some(cell) = remaining.single_random(rng) else {
            break;
        };
        remaining.remove_coord(cell);
        picked.insert_coord(cell);
    }
    if keep_picked { picked } else { remaining }
}

/// Keep each cell of the region with probability `fraction`, rounded to a
/// multiple of 1/64.
pub fn random_region<R: Rng + ?Sized>(region: &Region, rng: &mut R, fraction: f64) -> Region {
    let mut noise = Region::random_fraction(rng, fraction, region.width(), region.height());
    noise.and(region);
    noise
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_scatter_keeps_distance() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let r = Region::full(30, 30);
        let picks = random_scatter(&r, &mut rng, 2, None);
        assert!(picks.len() >= 36);
        for (i, a) in picks.iter().enumerate() {
            for b in &picks[i + 1..] {
                let gap = (a.x - b.x).abs().max((a.y - b.y).abs());
                assert!(gap > 2, "{a} and {b} too close");
            }
        }
    }

    #[test]
    fn test_scatter_limit() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let r = Region::full(30, 30);
        assert_eq!(random_scatter(&r, &mut rng, 0, Some(10)).len(), 10);
        assert!(random_scatter(&Region::new(3, 3), &mut rng, 1, None).is_empty());
    }

    #[test]
    fn test_random_portion() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut r = Region::new(20, 20);
        r.insert_rectangle(5, 5, 10, 10);
        for count in [0, 7, 60, 99, 100, 500] {
            let part = random_portion(&r, &mut rng, count);
            assert_eq!(part.size(), count.min(100));
            assert!(r.contains_all(&part));
        }
    }

    #[test]
    fn test_random_region_is_subset() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let r = Region::full(64, 64);
        let half = random_region(&r, &mut rng, 0.5);
        assert!(half.size() > 1500 && half.size() < 2600);
        assert!(random_region(&r, &mut rng, 0.0).is_empty());
        assert_eq!(random_region(&r, &mut rng, 1.0), r);
    }
}
