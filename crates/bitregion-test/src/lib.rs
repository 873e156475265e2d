//! bitregion-test - Regression test framework for bitregion
//!
//! Provides [`RegParams`], which numbers each comparison in a regression
//! test, records failures instead of panicking on the first one, and
//! reports a summary at the end, plus grid-art fixtures for building
//! regions from text.
//!
//! # Usage
//!
//! ```
//! use bitregion_test::{RegParams, region_from_art};
//!
//! let region = region_from_art(&[
//!     ".#.",
//!     "###",
//!     ".#.",
//! ]).unwrap();
//!
//! let mut rp = RegParams::new("plus");
//! rp.compare_values(5.0, region.size() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use bitregion_core::Region;

/// Build a region from rows of grid art: `#` is on, `.` is off.
///
/// Each string is one row, top to bottom, so `art[y]` holds the cells of
/// row `y` from left to right. All rows must have the same length.
pub fn region_from_art(art: &[&str]) -> TestResult<Region> {
    let rows: Vec<Vec<char>> = art.iter().map(|row| row.chars().collect()).collect();
    let width = rows.first().map_or(0, Vec::len);
    let mut region = Region::new(width, rows.len());
    for (y, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(TestError::RaggedArt {
                row: y,
                expected: width,
                actual: row.len(),
            });
        }
        for (x, &c) in row.iter().enumerate() {
            match c {
                '#' => {
                    region.insert(x as i32, y as i32);
                }
                '.' => {}
                found => return Err(TestError::BadCell { x, y, found }),
            }
        }
    }
    Ok(region)
}

/// Render a region as grid art, one string per row.
pub fn region_to_art(region: &Region) -> Vec<String> {
    (0..region.height() as i32)
        .map(|y| {
            (0..region.width() as i32)
                .map(|x| if region.contains(x, y) { '#' } else { '.' })
                .collect()
        })
        .collect()
}
