//! Interpolated-table tier: two reads and a lerp
//!
//! The fractional table index is kept unrounded; its floor picks the
//! lower entry, the duplicate wraparound entry makes `index + 1` always
//! a valid read, and the fractional remainder blends the two. This
//! removes the lookup tier's quantization steps while staying far
//! cheaper than a libm call.
//!
//! Quantization error drops from half a table step (~1.9e-4) to the
//! chord error of linear interpolation (~1.8e-8); at f32 the result is
//! limited by float rounding instead.

use crate::table::{COS_OFFSET, SIN_MASK};
use crate::traits::Scalar;

/// Lerped read at a fractional table index.
///
/// Masking the floored index into `[0, SIN_COUNT)` wraps angles of
/// either sign; `index + 1` then reads at most the duplicate entry.
#[inline(always)]
fn lerp_read<T: Scalar>(index: T) -> T {
    let floor = index.floor();
    let i = floor.to_int() as usize & SIN_MASK;
    let frac = index - floor;
    let from = T::sin_table(i);
    let to = T::sin_table(i + 1);
    from + (to - from) * frac
}

/// Sine of an angle in radians via interpolated lookup
///
/// # Example
///
/// ```rust
/// use vega_math::trig::smoother;
///
/// let s = smoother::sin(core::f64::consts::FRAC_PI_6);
/// assert!((s - 0.5).abs() < 1e-7);
/// ```
#[inline]
pub fn sin<T: Scalar>(radians: T) -> T {
    lerp_read(radians * T::RAD_TO_INDEX)
}

/// Cosine of an angle in radians via interpolated lookup
#[inline]
pub fn cos<T: Scalar>(radians: T) -> T {
    // The quarter-turn offset is an exact integer, so adding it before
    // the floor changes the index but not the fraction.
    lerp_read(radians * T::RAD_TO_INDEX + T::splat(COS_OFFSET as f64))
}

/// Tangent of an angle in radians via interpolated lookup
///
/// Interpolated sine over interpolated cosine from the same fractional
/// index. Far more accurate near the asymptotes than the closed-form
/// rational in [`smooth::tan`](super::smooth::tan), at the cost of the
/// extra division.
#[inline]
pub fn tan<T: Scalar>(radians: T) -> T {
    let index = radians * T::RAD_TO_INDEX;
    lerp_read(index) / lerp_read(index + T::splat(COS_OFFSET as f64))
}

/// Sine of an angle in degrees via interpolated lookup
#[inline]
pub fn sin_deg<T: Scalar>(degrees: T) -> T {
    lerp_read(degrees * T::DEG_TO_INDEX)
}

/// Cosine of an angle in degrees via interpolated lookup
#[inline]
pub fn cos_deg<T: Scalar>(degrees: T) -> T {
    lerp_read(degrees * T::DEG_TO_INDEX + T::splat(COS_OFFSET as f64))
}

/// Tangent of an angle in degrees via interpolated lookup
#[inline]
pub fn tan_deg<T: Scalar>(degrees: T) -> T {
    let index = degrees * T::DEG_TO_INDEX;
    lerp_read(index) / lerp_read(index + T::splat(COS_OFFSET as f64))
}

/// Sine of an angle in turns via interpolated lookup
#[inline]
pub fn sin_turns<T: Scalar>(turns: T) -> T {
    lerp_read(turns * T::TURN_TO_INDEX)
}

/// Cosine of an angle in turns via interpolated lookup
#[inline]
pub fn cos_turns<T: Scalar>(turns: T) -> T {
    lerp_read(turns * T::TURN_TO_INDEX + T::splat(COS_OFFSET as f64))
}

/// Tangent of an angle in turns via interpolated lookup
#[inline]
pub fn tan_turns<T: Scalar>(turns: T) -> T {
    let index = turns * T::TURN_TO_INDEX;
    lerp_read(index) / lerp_read(index + T::splat(COS_OFFSET as f64))
}
