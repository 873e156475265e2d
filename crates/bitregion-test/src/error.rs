//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// A row of grid art has a different length than the first row
    #[error("grid art row {row} has {actual} cells, expected {expected}")]
    RaggedArt {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A character other than `#` or `.` in grid art
    #[error("unexpected character {found:?} at ({x}, {y}) in grid art")]
    BadCell { x: usize, y: usize, found: char },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
