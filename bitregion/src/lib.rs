//! bitregion - Packed-bitset regions over a 2D grid
//!
//! A [`Region`] records on/off membership for every cell of a
//! `width × height` grid, 64 vertically stacked cells per machine word, and
//! operates on whole words wherever it can.
//!
//! # Overview
//!
//! - Set algebra, shadows, transforms, enumeration and serialization on
//!   [`Region`] itself
//! - Morphology (expand, retract, fringe, surface, thin, ...) through
//!   [`morph::Morphology`]
//! - Flood fill and connected components through [`flood::Flood`]
//! - Random and quasi-random sampling through [`sample::Sampling`]
//!
//! # Example
//!
//! ```
//! use bitregion::prelude::*;
//!
//! let mut cave = Region::new(8, 8);
//! cave.insert_rectangle(0, 0, 2, 2).insert_rectangle(5, 5, 2, 2);
//!
//! let parts = cave.split(Connectivity::FourWay);
//! assert_eq!(parts.len(), 2);
//!
//! cave.expand();
//! assert_eq!(cave.size(), 20);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use bitregion_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use bitregion_flood as flood;
pub use bitregion_morph as morph;
pub use bitregion_sample as sample;

/// Types and extension traits for glob import.
pub mod prelude {
    pub use bitregion_core::{Coord, Direction, PointSet, Region};
    pub use bitregion_flood::Flood;
    pub use bitregion_morph::{Connectivity, Morphology};
    pub use bitregion_sample::{QuasiRandom, SampleOptions, Sampling, Sobol2};
}
