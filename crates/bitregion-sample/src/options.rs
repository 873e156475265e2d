//! Sampling options

/// How many cells a separated-sampling call picks.
///
/// The count is `fraction` of the region's size, rounded to the nearest
/// cell, and never more than `limit` when one is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleOptions {
    /// Share of on cells to pick, clamped to `[0, 1]`
    pub fraction: f64,
    /// Upper bound on the number of cells picked
    pub limit: Option<usize>,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            fraction: 0.5,
            limit: None,
        }
    }
}

impl SampleOptions {
    /// Set the fraction of cells to pick
    pub fn with_fraction(mut self, fraction: f64) -> Self {
        self.fraction = fraction;
        self
    }

    /// Cap the number of cells picked
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of cells to pick from a region holding `size` on cells.
    pub fn count(&self, size: usize) -> usize {
        let fraction = if self.fraction.is_nan() {
            0.0
        } else {
            self.fraction.clamp(0.0, 1.0)
        };
        let wanted = (size as f64 * fraction).round() as usize;
        self.limit.map_or(wanted, |limit| wanted.min(limit)).min(size)
    }
}
