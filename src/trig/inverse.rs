//! Inverse trigonometric approximations
//!
//! Polynomial only, no tables. asin/acos use a degree-3 polynomial
//! times `sqrt(1 - |a|)` with a sign/offset split across zero; atan
//! squashes the whole positive axis through `c = (n - 1)/(n + 1)` and
//! evaluates one degree-11 odd polynomial, so no domain split is needed.
//!
//! The squash polynomial leaves a ~1.7e-6 residue at its endpoints, so
//! zero arguments and the atan2 axes are special-cased to return exact
//! values instead of going through the polynomial.
//!
//! Out-of-domain asin/acos arguments are clamped to [-1, 1] instead of
//! returning NaN; every function stays total and panic-free. NaN in,
//! NaN out.

use crate::traits::Scalar;

// Degree-3 coefficients for asin/acos (multiplied by sqrt(1 - |a|)).
// Opaque calibrated constants; max error ~6.8e-5 rad.
const AS_C0: f64 = 1.5707288;
const AS_C1: f64 = 0.2121144;
const AS_C2: f64 = 0.0742610;
const AS_C3: f64 = 0.0187293;

// Degree-11 odd-polynomial coefficients in c = (n-1)/(n+1) for atan.
// Opaque calibrated constants; max error ~1.7e-6 rad over [0, inf).
const AT_C1: f64 = 0.99997726;
const AT_C3: f64 = -0.33262347;
const AT_C5: f64 = 0.19354346;
const AT_C7: f64 = -0.11643287;
const AT_C9: f64 = 0.05265332;
const AT_C11: f64 = -0.0117212;

// Magnitudes above this are indistinguishable from infinity for the
// squash transform, and clamping keeps (n - 1)/(n + 1) finite.
const ATAN_CLAMP: f64 = 3.0e18;

/// Pull an argument into [-1, 1]; NaN falls through untouched.
#[inline(always)]
fn clamp_unit<T: Scalar>(a: T) -> T {
    if a > T::ONE {
        T::ONE
    } else if a < -T::ONE {
        -T::ONE
    } else {
        a
    }
}

/// atan for a non-negative magnitude, in radians.
#[inline(always)]
fn atan_positive<T: Scalar>(n: T) -> T {
    // Past the clamp the true value is within 3e-19 of pi/2, closer
    // than the polynomial's own endpoint residue; return it directly.
    // Infinity lands here too. NaN fails the comparison and flows on.
    if n > T::splat(ATAN_CLAMP) {
        return T::HALF_PI;
    }
    let c = (n - T::ONE) / (n + T::ONE);
    let c2 = c * c;
    // Horner over odd powers of c.
    let poly = T::splat(AT_C1)
        + c2 * (T::splat(AT_C3)
            + c2 * (T::splat(AT_C5)
                + c2 * (T::splat(AT_C7) + c2 * (T::splat(AT_C9) + c2 * T::splat(AT_C11)))));
    T::splat(core::f64::consts::FRAC_PI_4) + c * poly
}

/// Arc sine in radians, result in [-π/2, π/2]
///
/// Arguments outside [-1, 1] clamp to the nearest endpoint rather than
/// producing NaN. Maximum error ~7e-5 rad.
///
/// # Example
///
/// ```rust
/// use vega_math::trig::inverse;
///
/// let r = inverse::asin(0.5_f32);
/// assert!((r - core::f32::consts::FRAC_PI_6).abs() < 1e-4);
/// ```
#[inline]
pub fn asin<T: Scalar>(a: T) -> T {
    let a = clamp_unit(a);
    // The polynomial is ~6.8e-5 off at a = 0; zero is exact instead,
    // keeping the sign of a signed zero.
    if a == T::ZERO {
        return a;
    }
    let a2 = a * a;
    let a3 = a * a2;
    if a >= T::ZERO {
        T::HALF_PI
            - (T::ONE - a).sqrt()
                * (T::splat(AS_C0) - T::splat(AS_C1) * a + T::splat(AS_C2) * a2
                    - T::splat(AS_C3) * a3)
    } else {
        -T::HALF_PI
            + (T::ONE + a).sqrt()
                * (T::splat(AS_C0) + T::splat(AS_C1) * a + T::splat(AS_C2) * a2
                    + T::splat(AS_C3) * a3)
    }
}

/// Arc cosine in radians, result in [0, π]
///
/// Same clamping and error characteristics as [`asin`]; the identity
/// `acos(-a) == π - acos(a)` holds by construction.
#[inline]
pub fn acos<T: Scalar>(a: T) -> T {
    let a = clamp_unit(a);
    if a == T::ZERO {
        return T::HALF_PI;
    }
    let a2 = a * a;
    let a3 = a * a2;
    if a >= T::ZERO {
        (T::ONE - a).sqrt()
            * (T::splat(AS_C0) - T::splat(AS_C1) * a + T::splat(AS_C2) * a2
                - T::splat(AS_C3) * a3)
    } else {
        T::PI
            - (T::ONE + a).sqrt()
                * (T::splat(AS_C0) - T::splat(AS_C1) * a.abs() + T::splat(AS_C2) * a2
                    - T::splat(AS_C3) * a3.abs())
    }
}

/// Arc tangent in radians, result in [-π/2, π/2]
///
/// Any argument: zero returns exactly zero, infinities land on exactly
/// ±π/2. Maximum error ~1.7e-6 rad in between.
#[inline]
pub fn atan<T: Scalar>(x: T) -> T {
    if x == T::ZERO {
        return x;
    }
    let r = atan_positive(x.abs());
    if x < T::ZERO {
        -r
    } else {
        r
    }
}

/// Two-argument arc tangent in radians, result in (-π, π]
///
/// Quadrant-correct. Both axes are exact: `atan2(0, x>0) == 0`,
/// `atan2(y>0, 0) == π/2`, `atan2(0, x<0) == π`, and `atan2(0, 0) == 0`
/// by (documented) choice. NaN in either argument propagates.
///
/// # Example
///
/// ```rust
/// use vega_math::trig::inverse;
///
/// let r = inverse::atan2(1.0_f64, -1.0);
/// assert!((r - 3.0 * core::f64::consts::FRAC_PI_4).abs() < 1e-5);
/// ```
#[inline]
pub fn atan2<T: Scalar>(y: T, x: T) -> T {
    if x > T::ZERO {
        // atan of an exact zero ratio is exact zero, keeping its sign.
        atan(y / x)
    } else if x < T::ZERO {
        if y == T::ZERO {
            T::PI
        } else if y > T::ZERO {
            atan(y / x) + T::PI
        } else {
            atan(y / x) - T::PI
        }
    } else if x == T::ZERO {
        if y > T::ZERO {
            T::HALF_PI
        } else if y < T::ZERO {
            -T::HALF_PI
        } else {
            // Origin: 0 by convention; a NaN y propagates.
            y
        }
    } else {
        // x is NaN.
        x + y
    }
}

/// Arc sine in degrees, result in [-90, 90]
#[inline]
pub fn asin_deg<T: Scalar>(a: T) -> T {
    asin(a) * T::RAD_TO_DEG
}

/// Arc cosine in degrees, result in [0, 180]
#[inline]
pub fn acos_deg<T: Scalar>(a: T) -> T {
    acos(a) * T::RAD_TO_DEG
}

/// Arc tangent in degrees, result in [-90, 90]
#[inline]
pub fn atan_deg<T: Scalar>(x: T) -> T {
    atan(x) * T::RAD_TO_DEG
}

/// Arc sine in turns, result in [-0.25, 0.25]
#[inline]
pub fn asin_turns<T: Scalar>(a: T) -> T {
    asin(a) * T::RAD_TO_TURN
}

/// Arc cosine in turns, result in [0, 0.5]
#[inline]
pub fn acos_turns<T: Scalar>(a: T) -> T {
    acos(a) * T::RAD_TO_TURN
}

/// Arc tangent in turns, result in [-0.25, 0.25]
#[inline]
pub fn atan_turns<T: Scalar>(x: T) -> T {
    atan(x) * T::RAD_TO_TURN
}

/// Two-argument arc tangent in degrees, result in (-180, 180]
///
/// Axis cases return exact unit values (0, 90, 180, -90) rather than
/// converted radians.
#[inline]
pub fn atan2_deg<T: Scalar>(y: T, x: T) -> T {
    if x > T::ZERO {
        atan_deg(y / x)
    } else if x < T::ZERO {
        if y == T::ZERO {
            T::splat(180.0)
        } else if y > T::ZERO {
            atan_deg(y / x) + T::splat(180.0)
        } else {
            atan_deg(y / x) - T::splat(180.0)
        }
    } else if x == T::ZERO {
        if y > T::ZERO {
            T::splat(90.0)
        } else if y < T::ZERO {
            T::splat(-90.0)
        } else {
            y
        }
    } else {
        x + y
    }
}

/// Two-argument arc tangent in degrees, result in [0, 360)
///
/// Straight down (`y < 0` on the axis) is exactly 270.
#[inline]
pub fn atan2_deg_360<T: Scalar>(y: T, x: T) -> T {
    let r = atan2_deg(y, x);
    if r < T::ZERO {
        r + T::splat(360.0)
    } else {
        r
    }
}

/// Two-argument arc tangent in turns, result in [0, 1)
#[inline]
pub fn atan2_turns<T: Scalar>(y: T, x: T) -> T {
    let r = if x > T::ZERO {
        atan_turns(y / x)
    } else if x < T::ZERO {
        if y == T::ZERO {
            T::splat(0.5)
        } else if y > T::ZERO {
            atan_turns(y / x) + T::splat(0.5)
        } else {
            atan_turns(y / x) - T::splat(0.5)
        }
    } else if x == T::ZERO {
        if y > T::ZERO {
            T::splat(0.25)
        } else if y < T::ZERO {
            T::splat(-0.25)
        } else {
            y
        }
    } else {
        x + y
    };
    if r < T::ZERO {
        r + T::ONE
    } else {
        r
    }
}
