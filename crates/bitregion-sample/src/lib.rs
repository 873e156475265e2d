//! bitregion-sample - Random and quasi-random sampling of regions
//!
//! This crate picks cells out of a [`Region`]:
//!
//! - Separated sampling that spreads picks across the region, in three
//!   strategies trading speed for spread (mixed, quasi-random, Z-curve)
//! - Random scatter with a minimum spacing
//! - Random subsets of an exact size or an approximate density
//!
//! Quasi-random strategies take any [`QuasiRandom`] source by `&mut`;
//! [`Sobol2`] is provided. Randomized ones take a `rand::Rng`.
//!
//! # Example
//!
//! ```
//! use bitregion_core::Region;
//! use bitregion_sample::{SampleOptions, Sampling, Sobol2};
//!
//! let region = Region::full(16, 16);
//! let options = SampleOptions::default().with_limit(8);
//! let picks = region.separated_z_curve(&options, &mut Sobol2::new());
//! assert_eq!(picks.len(), 8);
//! ```

pub mod options;
pub mod quasi;
pub mod scatter;
pub mod select;

use bitregion_core::{Coord, Region};
use rand::Rng;

pub use options::SampleOptions;
pub use quasi::{QuasiRandom, Sobol2, van_der_corput};
pub use scatter::{random_portion, random_region, random_scatter};
pub use select::{
    mixed_random_region, mixed_random_separated, quasi_random_region, quasi_random_separated,
    separated_region_z_curve, separated_z_curve,
};

/// Sampling operations as methods on [`Region`]. None of them modify the
/// region.
pub trait Sampling {
    fn mixed_random_separated(&self, options: &SampleOptions, seed: u64) -> Vec<Coord>;
    fn mixed_random_region(&self, options: &SampleOptions, seed: u64) -> Region;

    fn quasi_random_separated<Q: QuasiRandom + ?Sized>(
        &self,
        options: &SampleOptions,
        quasi: &mut Q,
    ) -> Vec<Coord>;
    fn quasi_random_region<Q: QuasiRandom + ?Sized>(
        &self,
        options: &SampleOptions,
        quasi: &mut Q,
    ) -> Region;

    fn separated_z_curve<Q: QuasiRandom + ?Sized>(
        &self,
        options: &SampleOptions,
        quasi: &mut Q,
    ) -> Vec<Coord>;
    fn separated_region_z_curve<Q: QuasiRandom + ?Sized>(
        &self,
        options: &SampleOptions,
        quasi: &mut Q,
    ) -> Region;

    fn random_scatter<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        min_distance: usize,
        limit: Option<usize>,
    ) -> Vec<Coord>;
    fn random_portion<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Region;
    fn random_region<R: Rng + ?Sized>(&self, rng: &mut R, fraction: f64) -> Region;
}

impl Sampling for Region {
    fn mixed_random_separated(&self, options: &SampleOptions, seed: u64) -> Vec<Coord> {
        mixed_random_separated(self, options, seed)
    }

    fn mixed_random_region(&self, options: &SampleOptions, seed: u64) -> Region {
        mixed_random_region(self, options, seed)
    }

    fn quasi_random_separated<Q: QuasiRandom + ?Sized>(
        &self,
        options: &SampleOptions,
        quasi: &mut Q,
    ) -> Vec<Coord> {
        quasi_random_separated(self, options, quasi)
    }

    fn quasi_random_region<Q: QuasiRandom + ?Sized>(
        &self,
        options: &SampleOptions,
        quasi: &mut Q,
    ) -> Region {
        quasi_random_region(self, options, quasi)
    }

    fn separated_z_curve<Q: QuasiRandom + ?Sized>(
        &self,
        options: &SampleOptions,
        quasi: &mut Q,
    ) -> Vec<Coord> {
        separated_z_curve(self, options, quasi)
    }

    fn separated_region_z_curve<Q: QuasiRandom + ?Sized>(
        &self,
        options: &SampleOptions,
        quasi: &mut Q,
    ) -> Region {
        separated_region_z_curve(self, options, quasi)
    }

    fn random_scatter<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        min_distance: usize,
        limit: Option<usize>,
    ) -> Vec<Coord> {
        random_scatter(self, rng, min_distance, limit)
    }

    fn random_portion<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Region {
        random_portion(self, rng, count)
    }

    fn random_region<R: Rng + ?Sized>(&self, rng: &mut R, fraction: f64) -> Region {
        random_region(self, rng, fraction)
    }
}
