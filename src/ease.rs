//! Named easing curves and interpolation helpers
//!
//! Every curve maps progress t ∈ [0, 1] to an eased value with
//! f(0) = 0 and f(1) = 1 (back/elastic overshoot in between by design).
//! Inputs outside [0, 1] are not clamped; callers own their parameter.
//!
//! The transcendental curves (sine, expo, elastic) are built on this
//! crate's own approximation tiers rather than libm, so an animation
//! loop using them never leaves the fast path.
//!
//! # Example
//!
//! ```rust
//! use vega_math::ease;
//!
//! let t = 0.25;
//! let eased = ease::smoother(t);
//! let y = ease::lerp(10.0, 20.0, eased);
//! assert!(y > 10.0 && y < 20.0);
//! ```

use crate::exp::fast_expf;
use crate::trig::smoother;

const LN_2: f32 = core::f32::consts::LN_2;

/// 2^x on top of the fast exponential.
#[inline(always)]
fn pow2f(x: f32) -> f32 {
    fast_expf(x * LN_2)
}

/// Linear interpolation between `from` and `to`
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Inverse of [`lerp`]: the t at which `lerp(from, to, t) == value`
///
/// Returns 0 when the range is degenerate (`from == to` would divide
/// by zero); callers interpolating a collapsed range get the start.
#[inline]
pub fn unlerp(from: f32, to: f32, value: f32) -> f32 {
    if to == from {
        0.0
    } else {
        (value - from) / (to - from)
    }
}

/// Shortest-path interpolation between two angles in radians
///
/// Result is wrapped to [0, 2π).
#[inline]
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    let delta = (to - from).rem_euclid(core::f32::consts::TAU);
    let delta = if delta > core::f32::consts::PI {
        delta - core::f32::consts::TAU
    } else {
        delta
    };
    (from + delta * t).rem_euclid(core::f32::consts::TAU)
}

/// Shortest-path interpolation between two angles in degrees, wrapped
/// to [0, 360)
#[inline]
pub fn lerp_angle_deg(from: f32, to: f32, t: f32) -> f32 {
    let delta = (to - from).rem_euclid(360.0);
    let delta = if delta > 180.0 { delta - 360.0 } else { delta };
    (from + delta * t).rem_euclid(360.0)
}

/// Shortest-path interpolation between two angles in turns, wrapped to
/// [0, 1)
#[inline]
pub fn lerp_angle_turns(from: f32, to: f32, t: f32) -> f32 {
    let delta = (to - from).rem_euclid(1.0);
    let delta = if delta > 0.5 { delta - 1.0 } else { delta };
    (from + delta * t).rem_euclid(1.0)
}

/// Identity curve
#[inline]
pub fn linear(t: f32) -> f32 {
    t
}

/// Hermite smoothstep 3t² - 2t³, C1 at the endpoints
#[inline]
pub fn smooth(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// [`smooth`] applied twice; flatter at the endpoints, steeper mid-curve
#[inline]
pub fn smooth2(t: f32) -> f32 {
    smooth(smooth(t))
}

/// Quintic smootherstep 6t⁵ - 15t⁴ + 10t³, C2 at the endpoints
#[inline]
pub fn smoother(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Quadratic ease-in
#[inline]
pub fn pow2_in(t: f32) -> f32 {
    t * t
}

/// Quadratic ease-out
#[inline]
pub fn pow2_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}

/// Quadratic ease-in-out
#[inline]
pub fn pow2(t: f32) -> f32 {
    if t <= 0.5 {
        2.0 * t * t
    } else {
        let inv = 1.0 - t;
        1.0 - 2.0 * inv * inv
    }
}

/// Cubic ease-in
#[inline]
pub fn pow3_in(t: f32) -> f32 {
    t * t * t
}

/// Cubic ease-out
#[inline]
pub fn pow3_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Cubic ease-in-out
#[inline]
pub fn pow3(t: f32) -> f32 {
    if t <= 0.5 {
        4.0 * t * t * t
    } else {
        let inv = 1.0 - t;
        1.0 - 4.0 * inv * inv * inv
    }
}

/// Sinusoidal ease-in: 1 - cos(t·π/2)
#[inline]
pub fn sine_in(t: f32) -> f32 {
    1.0 - smoother::cos_turns(t * 0.25)
}

/// Sinusoidal ease-out: sin(t·π/2)
#[inline]
pub fn sine_out(t: f32) -> f32 {
    smoother::sin_turns(t * 0.25)
}

/// Sinusoidal ease-in-out: (1 - cos(t·π)) / 2
#[inline]
pub fn sine(t: f32) -> f32 {
    (1.0 - smoother::cos_turns(t * 0.5)) * 0.5
}

/// Circular ease-in: 1 - √(1 - t²)
#[inline]
pub fn circle_in(t: f32) -> f32 {
    1.0 - libm::sqrtf(1.0 - t * t)
}

/// Circular ease-out: √(1 - (1-t)²)
#[inline]
pub fn circle_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    libm::sqrtf(1.0 - inv * inv)
}

/// Circular ease-in-out
#[inline]
pub fn circle(t: f32) -> f32 {
    if t <= 0.5 {
        let t = t * 2.0;
        (1.0 - libm::sqrtf(1.0 - t * t)) * 0.5
    } else {
        let t = (t - 1.0) * 2.0;
        (libm::sqrtf(1.0 - t * t) + 1.0) * 0.5
    }
}

// Exponential curves use base 2 and power 10, with the 2^-10 tail
// subtracted and rescaled so the endpoints are exact.
const EXPO_MIN: f32 = 0.000_976_562_5; // 2^-10
const EXPO_SCALE: f32 = 1.0 / (1.0 - EXPO_MIN);

/// Exponential ease-in
#[inline]
pub fn expo_in(t: f32) -> f32 {
    (pow2f(10.0 * (t - 1.0)) - EXPO_MIN) * EXPO_SCALE
}

/// Exponential ease-out
#[inline]
pub fn expo_out(t: f32) -> f32 {
    1.0 - (pow2f(-10.0 * t) - EXPO_MIN) * EXPO_SCALE
}

/// Exponential ease-in-out
#[inline]
pub fn expo(t: f32) -> f32 {
    if t <= 0.5 {
        expo_in(t * 2.0) * 0.5
    } else {
        expo_out(t * 2.0 - 1.0) * 0.5 + 0.5
    }
}

// Overshoot amount for the back curves; the classic constant puts the
// overshoot at exactly 10% of the range.
const BACK_S: f32 = 1.70158;

/// Back ease-in: pulls below 0 before accelerating
#[inline]
pub fn back_in(t: f32) -> f32 {
    t * t * ((BACK_S + 1.0) * t - BACK_S)
}

/// Back ease-out: overshoots 1 before settling
#[inline]
pub fn back_out(t: f32) -> f32 {
    let t = t - 1.0;
    t * t * ((BACK_S + 1.0) * t + BACK_S) + 1.0
}

/// Back ease-in-out
#[inline]
pub fn back(t: f32) -> f32 {
    const S: f32 = BACK_S * 1.525;
    if t <= 0.5 {
        let t = t * 2.0;
        t * t * ((S + 1.0) * t - S) * 0.5
    } else {
        let t = t * 2.0 - 2.0;
        (t * t * ((S + 1.0) * t + S) + 2.0) * 0.5
    }
}

/// Elastic ease-out: decaying oscillation settling on 1
#[inline]
pub fn elastic_out(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    const THIRD_TURN: f32 = 1.0 / 3.0;
    pow2f(-10.0 * t) * smoother::sin_turns((10.0 * t - 0.75) * THIRD_TURN) + 1.0
}

/// Elastic ease-in: mirror of [`elastic_out`]
#[inline]
pub fn elastic_in(t: f32) -> f32 {
    1.0 - elastic_out(1.0 - t)
}

/// Bounce ease-out: three decaying parabolic bounces
#[inline]
pub fn bounce_out(t: f32) -> f32 {
    const STIFFNESS: f32 = 7.5625;
    if t < 1.0 / 2.75 {
        STIFFNESS * t * t
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        STIFFNESS * t * t + 0.75
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        STIFFNESS * t * t + 0.9375
    } else {
        let t = t - 2.625 / 2.75;
        STIFFNESS * t * t + 0.984375
    }
}

/// Bounce ease-in: mirror of [`bounce_out`]
#[inline]
pub fn bounce_in(t: f32) -> f32 {
    1.0 - bounce_out(1.0 - t)
}
