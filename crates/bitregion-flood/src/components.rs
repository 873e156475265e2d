//! Connected components
//!
//! Components are discovered in column-major order of their lowest cell:
//! the first on cell of what remains seeds a flood bounded by the
//! remaining cells, the flooded part is emitted and subtracted, and the
//! scan repeats until nothing remains.

use crate::fill::{flood_by, flood_to_limit};
use bitregion_core::Region;
use bitregion_morph::Connectivity;

/// Flood steps used to probe a component in [`remove_isolated`].
const ISOLATION_REACH: usize = 8;

/// Components this small or smaller count as isolated.
const ISOLATED_MAX_SIZE: usize = 4;

/// Split the region into its connected components.
///
/// The components are pairwise disjoint and their union is the region.
pub fn split(region: &Region, connectivity: Connectivity) -> Vec<Region> {
    let mut remaining = region.clone();
    let mut parts = Vec::new();
    let mut part = Region::default();
    while let Some(seed) = remaining.first() {
        part.reset(region.width(), region.height()).insert_coord(seed);
        flood_to_limit(&mut part, &remaining, connectivity);
        remaining.and_not(&part);
        parts.push(part.clone());
    }
    tracing::debug!(components = parts.len(), ?connectivity, "split region");
    parts
}

/// Keep only the largest connected component; on a tie the one found
/// first wins.
pub fn largest_part(region: &mut Region, connectivity: Connectivity) -> &mut Region {
    let mut best: Option<Region> = None;
    for part in split(region, connectivity) {
        if best.as_ref().is_none_or(|b| part.size() > b.size()) {
            best = Some(part);
        }
    }
    match best {
        Some(part) => region.remake(&part),
        None => region,
    }
}

/// Remove small specks: a component whose 8-way flood from its lowest cell
/// reaches at most four cells within eight steps is turned off.
///
/// The probe floods through the whole original region, so the far end of a
/// long component already partly covered by an earlier probe is not
/// mistaken for a speck.
pub fn remove_isolated(region: &mut Region) -> &mut Region {
    let original = region.clone();
    let mut remaining = original.clone();
    let mut part = Region::default();
    let mut removed = 0usize;
    while let Some(seed) = remaining.first() {
        part.reset(region.width(), region.height()).insert_coord(seed);
        flood_by(&mut part, &original, ISOLATION_REACH, Connectivity::EightWay);
        remaining.and_not(&part);
        if part.size() <= ISOLATED_MAX_SIZE {
            region.and_not(&part);
            removed += part.size();
        }
    }
    tracing::trace!(removed, "removed isolated cells");
    region
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_blocks() {
        let mut r = Region::new(8, 8);
        r.insert_rectangle(0, 0, 2, 2).insert_rectangle(5, 5, 2, 2);
        let parts = split(&r, Connectivity::FourWay);
        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|p| p.size() == 4));
        assert!(parts[0].contains(0, 0));
        assert!(!parts[0].intersects(&parts[1]));
    }

    #[test]
    fn test_split_diagonal_depends_on_connectivity() {
        let mut r = Region::new(4, 4);
        r.insert(0, 0).insert(1, 1).insert(2, 2);
        assert_eq!(split(&r, Connectivity::FourWay).len(), 3);
        assert_eq!(split(&r, Connectivity::EightWay).len(), 1);
    }

    #[test]
    fn test_split_empty() {
        assert!(split(&Region::new(3, 3), Connectivity::FourWay).is_empty());
    }

    #[test]
    fn test_largest_part() {
        let mut r = Region::new(10, 10);
        r.insert_rectangle(0, 0, 2, 2).insert_rectangle(5, 5, 3, 3);
        largest_part(&mut r, Connectivity::FourWay);
        assert_eq!(r.size(), 9);
        assert!(r.contains(6, 6));

        // equal sizes keep the first discovered
        let mut r = Region::new(10, 10);
        r.insert_rectangle(6, 0, 2, 2).insert_rectangle(0, 6, 2, 2);
        largest_part(&mut r, Connectivity::FourWay);
        assert_eq!(r.size(), 4);
        assert!(r.contains(0, 6));
    }

    #[test]
    fn test_remove_isolated() {
        let mut r = Region::new(20, 20);
        r.insert(0, 0)
            .insert(10, 10)
            .insert(11, 11)
            .insert_rectangle(3, 3, 3, 3)
            .insert_rectangle(15, 0, 1, 12);
        remove_isolated(&mut r);
        assert!(!r.contains(0, 0));
        assert!(!r.contains(10, 10) && !r.contains(11, 11));
        assert_eq!(r.size(), 9 + 12);
    }
}
