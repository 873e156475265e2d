//! Low-discrepancy sequences
//!
//! [`QuasiRandom`] is the collaborator consumed by quasi-random and
//! Z-curve sampling. [`Sobol2`] is a two-dimensional Sobol generator using
//! Gray-code ordering: each step XORs in one direction number, so both
//! sequential stepping and jumping to an arbitrary index are cheap.

/// A source of 2D points spread evenly over the unit square.
pub trait QuasiRandom {
    /// Position the sequence so the next point produced is point `index`.
    fn skip_to(&mut self, index: u64);

    /// Write the next point into `out`, each coordinate in `[0, 1)`, and
    /// advance.
    fn fill_vector(&mut self, out: &mut [f64; 2]);
}

const BITS: usize = 32;
const SCALE: f64 = 1.0 / (1u64 << BITS) as f64;

/// Direction numbers for both dimensions.
///
/// The first dimension is the base-2 Van der Corput sequence; the second
/// uses the primitive polynomial `x + 1`.
const fn directions() -> [[u32; BITS]; 2] {
    let mut v = [[0u32; BITS]; 2];
    let mut k = 0;
    while k < BITS {
        v[0][k] = 1 << (31 - k);
        v[1][k] = if k == 0 {
            1 << 31
        } else {
            v[1][k - 1] ^ (v[1][k - 1] >> 1)
        };
        k += 1;
    }
    v
}

const DIRECTIONS: [[u32; BITS]; 2] = directions();

/// Two-dimensional Sobol sequence.
///
/// Owned and stepped through `&mut`; two generators never share state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sobol2 {
    index: u64,
    state: [u32; 2],
}

impl Sobol2 {
    /// A generator positioned at point 0, which is `(0, 0)`.
    pub fn new() -> Self {
        Self {
            index: 0,
            state: [0, 0],
        }
    }

    /// A generator positioned at point `index`.
    pub fn starting_at(index: u64) -> Self {
        let mut sobol = Self::new();
        sobol.skip_to(index);
        sobol
    }

    /// Index of the next point.
    pub fn index(&self) -> u64 {
        self.index
    }
}

impl Default for Sobol2 {
    fn default() -> Self {
        Self::new()
    }
}

impl QuasiRandom for Sobol2 {
    fn skip_to(&mut self, index: u64) {
        let gray = index ^ (index >> 1);
        self.index = index;
        for (dim, dirs) in DIRECTIONS.iter().enumerate() {
            self.state[dim] = dirs
                .iter()
                .enumerate()
                .filter(|&(k, _)| gray >> k & 1 == 1)
                .fold(0, |acc, (_, &v)| acc ^ v);
        }
    }

    fn fill_vector(&mut self, out: &mut [f64; 2]) {
        out[0] = self.state[0] as f64 * SCALE;
        out[1] = self.state[1] as f64 * SCALE;
        // the bit that flips in the Gray code between index and index + 1
        let c = (self.index.trailing_ones() as usize).min(BITS - 1);
        self.state[0] ^= DIRECTIONS[0][c];
        self.state[1] ^= DIRECTIONS[1][c];
        self.index = self.index.wrapping_add(1);
    }
}

/// The radical inverse of `index` in `base`: its digits mirrored around
/// the radix point. Returns 0 for a base below 2.
pub fn van_der_corput(base: u32, index: u64) -> f64 {
    if base < 2 {
        return 0.0;
    }
    let base = base as u64;
    let inv = 1.0 / base as f64;
    let (mut n, mut scale, mut out) = (index, inv, 0.0);
    while n > 0 {
        out += (n % base) as f64 * scale;
        n /= base;
        scale *= inv;
    }
    out
}
