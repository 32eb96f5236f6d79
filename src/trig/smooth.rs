//! Table-free tier: closed-form rational approximations
//!
//! Sine and cosine use an odd rational refined from Bhaskara I's
//! 7th-century approximation; tangent uses a Padé [5/4] rational. No
//! memory traffic and no quantization steps, in exchange for a little
//! more error than the interpolated table.
//!
//! The crux is the periodic fold: the angle is scaled so one quarter
//! period becomes one unit, the containing half-period segment is found
//! with an even-ceiling step, and the segment's low bits decide the sign
//! of the rational's value. Segment `k` contributes +1 when
//! `(k & 2) == 0`, else -1.

use crate::traits::Scalar;

// (11u - 3u^3) / (7 + u^2) on u in [-1, 1] approximates sin(u * pi/2)
// with max error ~3.55e-4, hits 0 and +/-1 exactly at u = 0, +/-1, and
// has zero derivative at the peaks, so each quarter period stays
// monotone.
const SIN_P1: f64 = 11.0;
const SIN_P3: f64 = -3.0;
const SIN_Q0: f64 = 7.0;

/// Evaluate sin(t * pi/2) for an unbounded t via segment folding.
#[inline(always)]
fn sin_quarter<T: Scalar>(t: T) -> T {
    // Even ceiling: rounds t up to the nearest even integer boundary.
    // `& !1` on the two's-complement value keeps the result even for
    // negative t as well.
    let segment = t.ceil().to_int() & !1;
    let u = t - T::from_int(segment);
    let u2 = u * u;
    let rational = (T::splat(SIN_P1) * u + T::splat(SIN_P3) * u * u2) / (T::splat(SIN_Q0) + u2);
    // (segment & 2) is 0 or 2, so this is +1 or -1.
    rational * T::from_int(1 - (segment & 2))
}

/// Fold an angle (pre-scaled so the period is 1) into (-1/2, 1/2] and
/// map it back to radians for the tangent rational.
#[inline(always)]
fn tan_fold<T: Scalar>(t: T) -> T {
    let t = t + T::splat(0.5);
    let t = t - t.floor();
    (t - T::splat(0.5)) * T::PI
}

/// Padé [5/4] tangent on (-pi/2, pi/2):
/// x(1 - x^2/9 + x^4/945) / (1 - 4x^2/9 + x^4/63).
#[inline(always)]
fn tan_rational<T: Scalar>(x: T) -> T {
    let x2 = x * x;
    let x4 = x2 * x2;
    let num = x * (T::ONE - T::splat(1.0 / 9.0) * x2 + T::splat(1.0 / 945.0) * x4);
    let den = T::ONE - T::splat(4.0 / 9.0) * x2 + T::splat(1.0 / 63.0) * x4;
    num / den
}

/// Sine of an angle in radians, no table
///
/// Maximum error ~3.6e-4; exact at 0, ±π/2, π; continuous everywhere.
///
/// # Example
///
/// ```rust
/// use vega_math::trig::smooth;
///
/// let s = smooth::sin(core::f32::consts::FRAC_PI_6);
/// assert!((s - 0.5).abs() < 4e-4);
/// ```
#[inline]
pub fn sin<T: Scalar>(radians: T) -> T {
    sin_quarter(radians * T::splat(2.0 / core::f64::consts::PI))
}

/// Cosine of an angle in radians, no table
#[inline]
pub fn cos<T: Scalar>(radians: T) -> T {
    // cos(x) = sin(x + pi/2): one quarter unit in the scaled domain.
    sin_quarter(radians * T::splat(2.0 / core::f64::consts::PI) + T::ONE)
}

/// Tangent of an angle in radians via the Padé rational
///
/// Error is below 4e-7 for |x| ≤ π/4 and grows toward the asymptotes;
/// near odd multiples of π/2 prefer [`smoother::tan`](super::smoother::tan).
#[inline]
pub fn tan<T: Scalar>(radians: T) -> T {
    tan_rational(tan_fold(radians * T::splat(1.0 / core::f64::consts::PI)))
}

/// Sine of an angle in degrees, no table
#[inline]
pub fn sin_deg<T: Scalar>(degrees: T) -> T {
    sin_quarter(degrees * T::splat(1.0 / 90.0))
}

/// Cosine of an angle in degrees, no table
#[inline]
pub fn cos_deg<T: Scalar>(degrees: T) -> T {
    sin_quarter(degrees * T::splat(1.0 / 90.0) + T::ONE)
}

/// Tangent of an angle in degrees via the Padé rational
#[inline]
pub fn tan_deg<T: Scalar>(degrees: T) -> T {
    tan_rational(tan_fold(degrees * T::splat(1.0 / 180.0)))
}

/// Sine of an angle in turns, no table
#[inline]
pub fn sin_turns<T: Scalar>(turns: T) -> T {
    sin_quarter(turns * T::splat(4.0))
}

/// Cosine of an angle in turns, no table
#[inline]
pub fn cos_turns<T: Scalar>(turns: T) -> T {
    sin_quarter(turns * T::splat(4.0) + T::ONE)
}

/// Tangent of an angle in turns via the Padé rational
#[inline]
pub fn tan_turns<T: Scalar>(turns: T) -> T {
    tan_rational(tan_fold(turns * T::splat(2.0)))
}
