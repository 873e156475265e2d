//! bitregion-morph - Morphological operations on packed regions
//!
//! This crate provides word-parallel morphology for [`Region`]:
//!
//! - Binary morphology: expansion (dilation) and retraction (erosion) with a
//!   4-way or 8-way neighborhood, N-step and series forms
//! - Fringe and surface: the cells gained by expanding or lost by retracting
//! - Gap bridging (`connect`, `connect_8way`, `connect_lines`)
//! - Thinning to a fixpoint
//! - Dispersal patterns and edge/corner cleanup
//!
//! The free functions take `&mut Region` and return it for chaining; the
//! [`Morphology`] extension trait exposes the same operations as methods.
//!
//! # Example
//!
//! ```
//! use bitregion_core::Region;
//! use bitregion_morph::Morphology;
//!
//! let mut region = Region::new(5, 5);
//! region.insert(2, 2);
//! region.expand();
//! assert_eq!(region.size(), 5);
//! region.retract();
//! assert_eq!(region.size(), 1);
//! ```

pub mod binary;
pub mod connect;
pub mod disperse;
pub mod thin;

use bitregion_core::Region;
use rand::Rng;

// Re-export commonly used binary morphology functions
pub use binary::{
    dilate, dilate_by, dilate_series, dilate_series_to_limit, erode, erode_by, erode_series,
    erode_series_to_limit, fringe, fringe_series, remove_corners, remove_edges,
    repeat_until_stable, series, series_to_limit, surface, surface_series,
};
pub use connect::{connect, connect_8way, connect_lines};
pub use disperse::{disperse, disperse_8way, disperse_random};
pub use thin::{thin, thin_fully};

/// Neighborhood used by morphology and flood fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connectivity {
    /// Plus-shaped: the four orthogonal neighbors
    #[default]
    FourWay,

    /// 3×3: orthogonal and diagonal neighbors
    EightWay,
}

/// Morphological operations as methods on [`Region`].
///
/// Mutating methods change the region in place and return it for chaining;
/// series methods leave it untouched and return independent snapshots.
pub trait Morphology {
    fn expand(&mut self) -> &mut Self;
    fn expand_8way(&mut self) -> &mut Self;
    fn expand_by(&mut self, amount: usize) -> &mut Self;
    fn expand_8way_by(&mut self, amount: usize) -> &mut Self;
    fn expand_series(&self, amount: usize) -> Vec<Region>;
    fn expand_series_8way(&self, amount: usize) -> Vec<Region>;
    fn expand_series_to_limit(&self) -> Vec<Region>;
    fn expand_series_to_limit_8way(&self) -> Vec<Region>;

    fn retract(&mut self) -> &mut Self;
    fn retract_8way(&mut self) -> &mut Self;
    fn retract_by(&mut self, amount: usize) -> &mut Self;
    fn retract_8way_by(&mut self, amount: usize) -> &mut Self;
    fn retract_series(&self, amount: usize) -> Vec<Region>;
    fn retract_series_8way(&self, amount: usize) -> Vec<Region>;
    fn retract_series_to_limit(&self) -> Vec<Region>;
    fn retract_series_to_limit_8way(&self) -> Vec<Region>;

    fn fringe(&mut self) -> &mut Self;
    fn fringe_8way(&mut self) -> &mut Self;
    fn fringe_by(&mut self, amount: usize) -> &mut Self;
    fn fringe_8way_by(&mut self, amount: usize) -> &mut Self;
    fn fringe_series(&self, amount: usize) -> Vec<Region>;
    fn fringe_series_8way(&self, amount: usize) -> Vec<Region>;

    fn surface(&mut self) -> &mut Self;
    fn surface_8way(&mut self) -> &mut Self;
    fn surface_by(&mut self, amount: usize) -> &mut Self;
    fn surface_8way_by(&mut self, amount: usize) -> &mut Self;
    fn surface_series(&self, amount: usize) -> Vec<Region>;
    fn surface_series_8way(&self, amount: usize) -> Vec<Region>;

    fn connect(&mut self) -> &mut Self;
    fn connect_8way(&mut self) -> &mut Self;
    fn connect_lines(&mut self) -> &mut Self;

    fn thin(&mut self) -> &mut Self;
    fn thin_8way(&mut self) -> &mut Self;
    fn thin_fully(&mut self) -> &mut Self;
    fn thin_fully_8way(&mut self) -> &mut Self;

    fn disperse(&mut self) -> &mut Self;
    fn disperse_8way(&mut self) -> &mut Self;
    fn disperse_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self;

    fn remove_edges(&mut self) -> &mut Self;
    fn remove_corners(&mut self) -> &mut Self;
}

use Connectivity::{EightWay, FourWay};

impl Morphology for Region {
    fn expand(&mut self) -> &mut Self {
        dilate(self, FourWay)
    }
    fn expand_8way(&mut self) -> &mut Self {
        dilate(self, EightWay)
    }
    fn expand_by(&mut self, amount: usize) -> &mut Self {
        dilate_by(self, amount, FourWay)
    }
    fn expand_8way_by(&mut self, amount: usize) -> &mut Self {
        dilate_by(self, amount, EightWay)
    }
    fn expand_series(&self, amount: usize) -> Vec<Region> {
        dilate_series(self, amount, FourWay)
    }
    fn expand_series_8way(&self, amount: usize) -> Vec<Region> {
        dilate_series(self, amount, EightWay)
    }
    fn expand_series_to_limit(&self) -> Vec<Region> {
        dilate_series_to_limit(self, FourWay)
    }
    fn expand_series_to_limit_8way(&self) -> Vec<Region> {
        dilate_series_to_limit(self, EightWay)
    }

    fn retract(&mut self) -> &mut Self {
        erode(self, FourWay)
    }
    fn retract_8way(&mut self) -> &mut Self {
        erode(self, EightWay)
    }
    fn retract_by(&mut self, amount: usize) -> &mut Self {
        erode_by(self, amount, FourWay)
    }
    fn retract_8way_by(&mut self, amount: usize) -> &mut Self {
        erode_by(self, amount, EightWay)
    }
    fn retract_series(&self, amount: usize) -> Vec<Region> {
        erode_series(self, amount, FourWay)
    }
    fn retract_series_8way(&self, amount: usize) -> Vec<Region> {
        erode_series(self, amount, EightWay)
    }
    fn retract_series_to_limit(&self) -> Vec<Region> {
        erode_series_to_limit(self, FourWay)
    }
    fn retract_series_to_limit_8way(&self) -> Vec<Region> {
        erode_series_to_limit(self, EightWay)
    }

    fn fringe(&mut self) -> &mut Self {
        fringe(self, 1, FourWay)
    }
    fn fringe_8way(&mut self) -> &mut Self {
        fringe(self, 1, EightWay)
    }
    fn fringe_by(&mut self, amount: usize) -> &mut Self {
        fringe(self, amount, FourWay)
    }
    fn fringe_8way_by(&mut self, amount: usize) -> &mut Self {
        fringe(self, amount, EightWay)
    }
    fn fringe_series(&self, amount: usize) -> Vec<Region> {
        fringe_series(self, amount, FourWay)
    }
    fn fringe_series_8way(&self, amount: usize) -> Vec<Region> {
        fringe_series(self, amount, EightWay)
    }

    fn surface(&mut self) -> &mut Self {
        surface(self, 1, FourWay)
    }
    fn surface_8way(&mut self) -> &mut Self {
        surface(self, 1, EightWay)
    }
    fn surface_by(&mut self, amount: usize) -> &mut Self {
        surface(self, amount, FourWay)
    }
    fn surface_8way_by(&mut self, amount: usize) -> &mut Self {
        surface(self, amount, EightWay)
    }
    fn surface_series(&self, amount: usize) -> Vec<Region> {
        surface_series(self, amount, FourWay)
    }
    fn surface_series_8way(&self, amount: usize) -> Vec<Region> {
        surface_series(self, amount, EightWay)
    }

    fn connect(&mut self) -> &mut Self {
        connect(self)
    }
    fn connect_8way(&mut self) -> &mut Self {
        connect_8way(self)
    }
    fn connect_lines(&mut self) -> &mut Self {
        connect_lines(self)
    }

    fn thin(&mut self) -> &mut Self {
        thin(self, FourWay)
    }
    fn thin_8way(&mut self) -> &mut Self {
        thin(self, EightWay)
    }
    fn thin_fully(&mut self) -> &mut Self {
        thin_fully(self, FourWay)
    }
    fn thin_fully_8way(&mut self) -> &mut Self {
        thin_fully(self, EightWay)
    }

    fn disperse(&mut self) -> &mut Self {
        disperse(self)
    }
    fn disperse_8way(&mut self) -> &mut Self {
        disperse_8way(self)
    }
    fn disperse_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        disperse_random(self, rng)
    }

    fn remove_edges(&mut self) -> &mut Self {
        remove_edges(self)
    }
    fn remove_corners(&mut self) -> &mut Self {
        remove_corners(self)
    }
}
