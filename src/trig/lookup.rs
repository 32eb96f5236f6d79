//! Direct-table tier: one rounded read per call
//!
//! The angle is scaled to table steps, rounded to the nearest step, and
//! wrapped with a bitmask. No branches, no interpolation. Output
//! resolution is limited to the table's distinct entries, which shows up
//! as visible steps when the argument sweeps slowly: fine for graphics
//! and animation, wrong for anything statistical.
//!
//! Out-of-range angles of any sign wrap correctly: the mask after a
//! floor-based round is equivalent to reducing the angle modulo one turn.
//! Non-finite angles produce an in-range index (and therefore a garbage
//! but valid value) rather than a panic.

use crate::table::{COS_OFFSET, SIN_MASK};
use crate::traits::Scalar;

/// Round an angle (pre-scaled to table steps) to the nearest index and
/// wrap it into the table.
///
/// `floor(x + 0.5)` rounds half-up for either sign, so an angle just
/// below zero lands on index 0, not on a sign-dependent neighbor; the
/// mask then wraps negatives the same way it wraps overflow.
#[inline(always)]
fn index<T: Scalar>(angle: T, scale: T) -> usize {
    (angle * scale + T::splat(0.5)).floor().to_int() as usize & SIN_MASK
}

/// Sine of an angle in radians via table lookup
///
/// Maximum error is half a table step, about 1.92e-4.
///
/// # Example
///
/// ```rust
/// use vega_math::trig::lookup;
///
/// let s = lookup::sin(core::f32::consts::FRAC_PI_2);
/// assert_eq!(s, 1.0); // cardinal angles are exact
/// ```
#[inline]
pub fn sin<T: Scalar>(radians: T) -> T {
    T::sin_table(index(radians, T::RAD_TO_INDEX))
}

/// Cosine of an angle in radians via table lookup
#[inline]
pub fn cos<T: Scalar>(radians: T) -> T {
    T::sin_table((index(radians, T::RAD_TO_INDEX) + COS_OFFSET) & SIN_MASK)
}

/// Tangent of an angle in radians via table lookup
///
/// Computed as the ratio of the sine and cosine table entries at the
/// same index. Near odd multiples of π/2 the cosine entry is close to
/// zero (or exactly zero at the pinned cardinal), so the result can be
/// huge or ±infinity, matching the true function's asymptotes.
#[inline]
pub fn tan<T: Scalar>(radians: T) -> T {
    let i = index(radians, T::RAD_TO_INDEX);
    T::sin_table(i) / T::sin_table((i + COS_OFFSET) & SIN_MASK)
}

/// Sine of an angle in degrees via table lookup
#[inline]
pub fn sin_deg<T: Scalar>(degrees: T) -> T {
    T::sin_table(index(degrees, T::DEG_TO_INDEX))
}

/// Cosine of an angle in degrees via table lookup
#[inline]
pub fn cos_deg<T: Scalar>(degrees: T) -> T {
    T::sin_table((index(degrees, T::DEG_TO_INDEX) + COS_OFFSET) & SIN_MASK)
}

/// Tangent of an angle in degrees via table lookup
#[inline]
pub fn tan_deg<T: Scalar>(degrees: T) -> T {
    let i = index(degrees, T::DEG_TO_INDEX);
    T::sin_table(i) / T::sin_table((i + COS_OFFSET) & SIN_MASK)
}

/// Sine of an angle in turns (1.0 = full revolution) via table lookup
#[inline]
pub fn sin_turns<T: Scalar>(turns: T) -> T {
    T::sin_table(index(turns, T::TURN_TO_INDEX))
}

/// Cosine of an angle in turns via table lookup
#[inline]
pub fn cos_turns<T: Scalar>(turns: T) -> T {
    T::sin_table((index(turns, T::TURN_TO_INDEX) + COS_OFFSET) & SIN_MASK)
}

/// Tangent of an angle in turns via table lookup
#[inline]
pub fn tan_turns<T: Scalar>(turns: T) -> T {
    let i = index(turns, T::TURN_TO_INDEX);
    T::sin_table(i) / T::sin_table((i + COS_OFFSET) & SIN_MASK)
}
