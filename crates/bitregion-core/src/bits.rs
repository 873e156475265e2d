//! Word-level bit helpers
//!
//! Small branch-free primitives shared by the region operations: tail masks,
//! row windows that carry bits across word boundaries, bit spreading for
//! Morton codes and zoom, and approximate-density random words.

use rand::Rng;

/// Number of 64-row sections needed for `height` rows.
#[inline]
pub const fn sections_for(height: usize) -> usize {
    height.div_ceil(64)
}

/// Mask of valid rows in the last section of a column.
///
/// All ones when `height` is a multiple of 64 (including 0).
#[inline]
pub const fn tail_mask_for(height: usize) -> u64 {
    match height % 64 {
        0 => !0,
        rem => (1u64 << rem) - 1,
    }
}

/// Mask with the low `n` bits set, saturating at 64.
#[inline]
pub const fn low_bits(n: u32) -> u64 {
    if n >= 64 { !0 } else { (1u64 << n) - 1 }
}

/// 64 consecutive rows of a column, starting at row `start`.
///
/// Bit `b` of the result is row `start + b`. Rows outside the column
/// (negative, or past its last word) read as off.
#[inline]
pub fn window(column: &[u64], start: i64) -> u64 {
    let word = start.div_euclid(64);
    let bit = start.rem_euclid(64) as u32;
    let at = |i: i64| -> u64 {
        if i < 0 || i >= column.len() as i64 {
            0
        } else {
            column[i as usize]
        }
    };
    if bit == 0 {
        at(word)
    } else {
        (at(word) >> bit) | (at(word + 1) << (64 - bit))
    }
}

/// Mask of rows `[y0, y1)` restricted to section `s`.
#[inline]
pub fn span_mask(section: usize, y0: i64, y1: i64) -> u64 {
    let base = (section as i64) * 64;
    let lo = (y0 - base).clamp(0, 64) as u32;
    let hi = (y1 - base).clamp(0, 64) as u32;
    if hi <= lo {
        0
    } else {
        low_bits(hi) & !low_bits(lo)
    }
}

/// Spread the 32 bits of `v` to the even bit positions of a `u64`.
#[inline]
pub fn spread_bits(v: u32) -> u64 {
    let mut x = v as u64;
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    (x | (x << 1)) & 0x5555_5555_5555_5555
}

/// Morton (Z-order) code of `(x, y)`: x bits on even positions, y on odd.
#[inline]
pub fn morton(x: u32, y: u32) -> u64 {
    spread_bits(x) | (spread_bits(y) << 1)
}

/// Duplicate every bit of `v`: bit `i` lands on bits `2i` and `2i + 1`.
#[inline]
pub fn double_bits(v: u64) -> u128 {
    let lo = spread_bits(v as u32) as u128;
    let hi = spread_bits((v >> 32) as u32) as u128;
    let spread = lo | (hi << 64);
    spread | (spread << 1)
}

/// A random word where each bit is set with probability `bit_count / 64`.
///
/// Built from at most six random words: processing the bits of
/// `bit_count` from least significant up, a set bit ORs in a fresh random
/// word and a clear bit ANDs one in, halving the remaining distance to one
/// or to zero.
pub fn approximate_bits<R: Rng + ?Sized>(rng: &mut R, bit_count: u32) -> u64 {
    if bit_count == 0 {
        return 0;
    }
    if bit_count >= 64 {
        return !0;
    }
    let mut result = 0u64;
    for i in bit_count.trailing_zeros()..6 {
        let word = rng.next_u64();
        if (bit_count >> i) & 1 == 1 {
            result |= word;
        } else {
            result &= word;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_tail_mask() {
        assert_eq!(tail_mask_for(0), !0);
        assert_eq!(tail_mask_for(1), 1);
        assert_eq!(tail_mask_for(64), !0);
        assert_eq!(tail_mask_for(65), 1);
        assert_eq!(tail_mask_for(63), !0 >> 1);
    }

    #[test]
    fn test_window_carries_across_words() {
        let column = [1u64 << 63, 1];
        // row 63 and row 64, seen from row 63
        assert_eq!(window(&column, 63), 0b11);
        // row 63 falls just past the window starting at -1
        assert_eq!(window(&column, -1), 0);
        assert_eq!(window(&column, 0), 1u64 << 63);
        assert_eq!(window(&column, 64), 1);
        assert_eq!(window(&column, 128), 0);
        assert_eq!(window(&column, -64), 0);
    }

    #[test]
    fn test_window_negative_start() {
        let column = [1u64];
        assert_eq!(window(&column, -3), 1 << 3);
    }

    #[test]
    fn test_span_mask() {
        assert_eq!(span_mask(0, 2, 5), 0b11100);
        assert_eq!(span_mask(1, 60, 66), 0b11);
        assert_eq!(span_mask(0, 60, 66), 0xF << 60);
        assert_eq!(span_mask(2, 0, 10), 0);
        assert_eq!(span_mask(0, -5, 100), !0);
    }

    #[test]
    fn test_morton() {
        assert_eq!(morton(0, 0), 0);
        assert_eq!(morton(1, 0), 1);
        assert_eq!(morton(0, 1), 2);
        assert_eq!(morton(3, 3), 15);
        assert_eq!(morton(2, 0), 4);
    }

    #[test]
    fn test_double_bits() {
        assert_eq!(double_bits(0b101), 0b11_00_11);
        assert_eq!(double_bits(1 << 32), 0b11u128 << 64);
    }

    #[test]
    fn test_approximate_bits_density() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(approximate_bits(&mut rng, 0), 0);
        assert_eq!(approximate_bits(&mut rng, 64), !0);
        let total: u32 = (0..1000)
            .map(|_| approximate_bits(&mut rng, 16).count_ones())
            .sum();
        // expected 16 per word
        let mean = total as f64 / 1000.0;
        assert!((mean - 16.0).abs() < 1.0, "mean = {mean}");
    }
}
