//! bitregion-flood - Flood fill and connected components
//!
//! This crate provides connectivity operations on [`Region`]:
//!
//! - Bounded flood fill: one step, N steps, series, and to-limit forms
//! - Connected component decomposition (`split`)
//! - Largest-component extraction and small-speck removal
//! - Stochastic one-cell-at-a-time growth (`spill`)
//!
//! # Example
//!
//! ```
//! use bitregion_core::Region;
//! use bitregion_flood::{Connectivity, Flood};
//!
//! let mut region = Region::new(8, 8);
//! region.insert_rectangle(0, 0, 2, 2).insert_rectangle(5, 5, 2, 2);
//! let parts = region.split(Connectivity::FourWay);
//! assert_eq!(parts.len(), 2);
//! ```

pub mod components;
pub mod fill;

use bitregion_core::Region;
use rand::Rng;

pub use bitregion_morph::Connectivity;
pub use components::{largest_part, remove_isolated, split};
pub use fill::{flood, flood_by, flood_series, flood_series_to_limit, flood_to_limit, spill};

/// Flood fill and connectivity as methods on [`Region`].
pub trait Flood {
    /// One step of growth clipped to `bounds`.
    fn flood(&mut self, bounds: &Region, connectivity: Connectivity) -> &mut Self;

    /// Up to `amount` flood steps, stopping once nothing changes.
    fn flood_by(&mut self, bounds: &Region, amount: usize, connectivity: Connectivity)
    -> &mut Self;

    fn flood_series(&self, bounds: &Region, amount: usize, connectivity: Connectivity)
    -> Vec<Region>;

    fn flood_series_to_limit(&self, bounds: &Region, connectivity: Connectivity) -> Vec<Region>;

    /// Connected components in discovery order.
    fn split(&self, connectivity: Connectivity) -> Vec<Region>;

    fn largest_part(&mut self, connectivity: Connectivity) -> &mut Self;

    fn remove_isolated(&mut self) -> &mut Self;

    /// Add random fringe cells inside `bounds` until the size is `volume`.
    fn spill<R: Rng + ?Sized>(&mut self, bounds: &Region, volume: usize, rng: &mut R)
    -> &mut Self;
}

impl Flood for Region {
    fn flood(&mut self, bounds: &Region, connectivity: Connectivity) -> &mut Self {
        flood(self, bounds, connectivity)
    }

    fn flood_by(
        &mut self,
        bounds: &Region,
        amount: usize,
        connectivity: Connectivity,
    ) -> &mut Self {
        flood_by(self, bounds, amount, connectivity)
    }

    fn flood_series(
        &self,
        bounds: &Region,
        amount: usize,
        connectivity: Connectivity,
    ) -> Vec<Region> {
        flood_series(self, bounds, amount, connectivity)
    }

    fn flood_series_to_limit(&self, bounds: &Region, connectivity: Connectivity) -> Vec<Region> {
        flood_series_to_limit(self, bounds, connectivity)
    }

    fn split(&self, connectivity: Connectivity) -> Vec<Region> {
        split(self, connectivity)
    }

    fn largest_part(&mut self, connectivity: Connectivity) -> &mut Self {
        largest_part(self, connectivity)
    }

    fn remove_isolated(&mut self) -> &mut Self {
        remove_isolated(self)
    }

    fn spill<R: Rng + ?Sized>(
        &mut self,
        bounds: &Region,
        volume: usize,
        rng: &mut R,
    ) -> &mut Self {
        spill(self, bounds, volume, rng)
    }
}
