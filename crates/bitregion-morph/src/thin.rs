//! Thinning
//!
//! One thinning step keeps the erosion of the region plus every cell of the
//! region adjacent to what opening (erode then dilate, same neighborhood)
//! would lose. Thick areas shrink toward strands two cells wide while thin
//! strands, which opening would erase entirely, survive.
//!
//! Size never increases, so iterating to a fixpoint always terminates.

use crate::Connectivity;
use crate::binary::{dilate, erode};
use bitregion_core::Region;

/// One thinning step.
///
/// `FourWay` opens 8-way and restores with a 4-way dilation; `EightWay`
/// opens 4-way and restores with an 8-way dilation.
pub fn thin(region: &mut Region, connectivity: Connectivity) -> &mut Region {
    let (erode_with, restore_with) = match connectivity {
        Connectivity::FourWay => (Connectivity::EightWay, Connectivity::FourWay),
        Connectivity::EightWay => (Connectivity::FourWay, Connectivity::EightWay),
    };
    let mut core = region.clone();
    erode(&mut core, erode_with);

    let mut lost = core.clone();
    dilate(&mut lost, erode_with).xor(region);
    dilate(&mut lost, restore_with).and(region);

    region.remake(&core).or(&lost)
}

/// Thin until the size stops changing.
pub fn thin_fully(region: &mut Region, connectivity: Connectivity) -> &mut Region {
    let mut size = region.size();
    let mut steps = 0usize;
    loop {
        thin(region, connectivity);
        steps += 1;
        let next = region.size();
        if next == size {
            break;
        }
        size = next;
    }
    tracing::debug!(steps, size, ?connectivity, "thinning reached a fixpoint");
    region
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thin_never_grows() {
        let mut r = Region::new(12, 12);
        r.insert_rectangle(1, 1, 10, 6).insert_rectangle(4, 7, 2, 4);
        let before = r.clone();
        thin(&mut r, Connectivity::FourWay);
        assert!(before.contains_all(&r));
        assert!(r.size() <= before.size());
    }

    #[test]
    fn test_thin_keeps_single_strand() {
        let mut r = Region::new(10, 5);
        r.insert_rectangle(1, 2, 8, 1);
        let before = r.clone();
        thin_fully(&mut r, Connectivity::FourWay);
        assert_eq!(r, before);
    }

    #[test]
    fn test_thin_fully_reduces_block() {
        let mut r = Region::new(20, 20);
        r.insert_rectangle(2, 2, 16, 16);
        thin_fully(&mut r, Connectivity::EightWay);
        assert!(r.size() < 256);
        assert!(!r.is_empty());
        let mut again = r.clone();
        thin(&mut again, Connectivity::EightWay);
        assert_eq!(again.size(), r.size());
    }

    #[test]
    fn test_thin_8way_restores_corners() {
        // opening a square 4-way loses only its corners; each comes back
        // with its 8-way neighbors inside the square
        let mut r = Region::new(20, 20);
        r.insert_rectangle(2, 2, 16, 16);
        thin(&mut r, Connectivity::EightWay);
        assert_eq!(r.size(), 14 * 14 + 4 * 3);
        assert!(r.contains(2, 2) && r.contains(3, 2) && r.contains(2, 3));
        assert!(r.contains(17, 17) && !r.contains(10, 2));
    }

    #[test]
    fn test_thin_narrow_grid_unchanged() {
        let mut r = Region::full(2, 10);
        let before = r.clone();
        thin(&mut r, Connectivity::FourWay);
        assert_eq!(r, before);
    }
}
