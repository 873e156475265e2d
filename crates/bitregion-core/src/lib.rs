//! bitregion Core - packed-bitset regions over a 2D grid
//!
//! This crate provides the fundamental data structures used throughout
//! bitregion:
//!
//! - [`Region`] - on/off membership for every cell of a `width × height`
//!   grid, stored as column-major 64-bit words
//! - [`Coord`] - integer cell position
//! - [`Direction`] - the eight neighbor directions used by shadow operators
//! - [`PointSet`] - mutable coordinate collection contract
//!
//! Higher crates add morphology (`bitregion-morph`), flood fill and
//! connectivity (`bitregion-flood`) and sampling (`bitregion-sample`) on
//! top of the word-level primitives exposed here.
//!
//! # Example
//!
//! ```
//! use bitregion_core::{Coord, Region};
//!
//! let mut region = Region::new(5, 5);
//! region.insert(0, 0).insert(4, 4);
//! assert_eq!(region.size(), 2);
//! assert_eq!(region.as_coords(), vec![Coord::new(0, 0), Coord::new(4, 4)]);
//!
//! let text = region.serialize_to_string();
//! assert_eq!(Region::deserialize_from_string(&text).unwrap(), region);
//! ```

pub mod bits;
pub mod coord;
pub mod error;
pub mod point_set;
pub mod region;

pub use coord::Coord;
pub use error::{Error, Result};
pub use point_set::PointSet;
pub use region::{Direction, Iter, Region};
