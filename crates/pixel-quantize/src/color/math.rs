//! Integer color arithmetic shared by palette matching and flood fill.
//!
//! All helpers are pure functions over `i32`/`u32`, wide enough that no
//! channel computation can overflow.

use super::Rgba;

/// Manhattan distance between two colors over R, G and B.
///
/// Alpha is ignored. The result is in `0..=765`.
///
/// # Example
/// ```
/// use pixel_quantize::{color_difference, Rgba};
///
/// let a = Rgba::new(10, 20, 30, 0);
/// let b = Rgba::new(13, 16, 30, 255);
/// assert_eq!(color_difference(a, b), 7);
/// ```
#[inline]
pub fn color_difference(a: Rgba, b: Rgba) -> u32 {
    u32::from(a.r.abs_diff(b.r)) + u32::from(a.g.abs_diff(b.g)) + u32::from(a.b.abs_diff(b.b))
}

/// Clamp `value` into `lo..=hi`.
///
/// `lo <= hi` is a precondition.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    debug_assert!(lo <= hi, "clamp called with lo > hi");
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Round `value` to a multiple of `step` with an asymmetric threshold.
///
/// With `r = value mod step`: multiples are returned unchanged, remainders
/// up to `step / 2 - 1` round down, everything else rounds up. For even
/// steps this means an exact half rounds up.
///
/// `step` must be positive.
///
/// # Example
/// ```
/// use pixel_quantize::closest_multiple;
///
/// assert_eq!(closest_multiple(11, 8), 8);
/// assert_eq!(closest_multiple(12, 8), 16);
/// assert_eq!(closest_multiple(16, 8), 16);
/// ```
#[inline]
pub fn closest_multiple(value: i32, step: i32) -> i32 {
    debug_assert!(step > 0, "closest_multiple step must be positive");
    let remainder = value.rem_euclid(step);
    if remainder == 0 {
        value
    } else if remainder <= step / 2 - 1 {
        value - remainder
    } else {
        value - remainder + step
    }
}
