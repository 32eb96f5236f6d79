//! Scalar fast-math exponential, logarithm, and logistic
//!
//! ~3-5x faster than libm with small relative error, for callers that
//! want the same permissive contract as the trig tiers: no validation,
//! no NaN signaling beyond propagation, bounded constant time.
//!
//! # Error Bounds
//!
//! - `fast_expf`: <0.1% relative error over the clamped input range
//!   (float rounding amplified by the squaring steps dominates)
//! - `fast_exp`: <1e-6 relative error over the clamped input range
//! - `fast_logf` / `fast_log`: <1e-5 relative error for positive finite
//!   input; garbage (not NaN) for x ≤ 0
//! - `logisticf` / `logistic`: inherits the exp bound; saturates cleanly
//!   to 0 and 1 in the tails

/// Fast e^x for f32 using a Padé [5/5] approximation with range reduction
///
/// Input is clamped to [-87, 87]; exp(-87) and exp(87) sit near the f32
/// normal range limits, with headroom for the squaring steps.
///
/// # Algorithm
///
/// Repeatedly halves x until |x| < 1 (exp(x) = exp(x/2)²), applies the
/// rational approximation, then squares the result once per halving.
///
/// # Example
///
/// ```rust
/// use vega_math::exp::fast_expf;
///
/// let decay = fast_expf(-5.0);
/// assert!((decay - 0.00674).abs() < 1e-4);
/// ```
#[inline(always)]
pub fn fast_expf(x: f32) -> f32 {
    let x = x.clamp(-87.0, 87.0);

    let mut x_reduced = x;
    let mut squarings = 0u32;
    while x_reduced.abs() > 1.0 && squarings < 8 {
        x_reduced *= 0.5;
        squarings += 1;
    }

    // Padé [5/5] for exp(x), |x| < 1:
    // numerator   1 + x/2 + x²/9 + x³/72 + x⁴/1008 + x⁵/30240
    // denominator mirrors it with alternating signs
    // Core relative error ~1e-10; the squarings amplify it by at most
    // 2^8, so the total stays near f32 rounding noise.
    let x2 = x_reduced * x_reduced;
    let x3 = x2 * x_reduced;
    let x4 = x2 * x2;
    let x5 = x4 * x_reduced;

    let p1 = 0.5;
    let p2 = 0.111_111_11; // 1/9
    let p3 = 0.013_888_889; // 1/72
    let p4 = 0.000_992_063_5; // 1/1008
    let p5 = 0.000_033_068_783; // 1/30240

    let num = 1.0 + p1 * x_reduced + p2 * x2 + p3 * x3 + p4 * x4 + p5 * x5;
    let den = 1.0 - p1 * x_reduced + p2 * x2 - p3 * x3 + p4 * x4 - p5 * x5;

    let mut result = num / den;
    for _ in 0..squarings {
        result *= result;
    }
    result
}

/// Fast e^x for f64; same method as [`fast_expf`] with a wider clamp
///
/// Input is clamped to [-708, 708], just inside the f64 normal range.
#[inline(always)]
pub fn fast_exp(x: f64) -> f64 {
    let x = x.clamp(-708.0, 708.0);

    let mut x_reduced = x;
    let mut squarings = 0u32;
    while x_reduced.abs() > 1.0 && squarings < 10 {
        x_reduced *= 0.5;
        squarings += 1;
    }

    let x2 = x_reduced * x_reduced;
    let x3 = x2 * x_reduced;
    let x4 = x2 * x2;
    let x5 = x4 * x_reduced;

    let p1 = 0.5;
    let p2 = 1.0 / 9.0;
    let p3 = 1.0 / 72.0;
    let p4 = 1.0 / 1008.0;
    let p5 = 1.0 / 30240.0;

    let num = 1.0 + p1 * x_reduced + p2 * x2 + p3 * x3 + p4 * x4 + p5 * x5;
    let den = 1.0 - p1 * x_reduced + p2 * x2 - p3 * x3 + p4 * x4 - p5 * x5;

    let mut result = num / den;
    for _ in 0..squarings {
        result *= result;
    }
    result
}

/// Fast ln(x) for f32 via IEEE 754 exponent extraction
///
/// For x ≤ 0 the result is garbage rather than NaN; callers in hot
/// paths are expected to know their domain.
///
/// # Algorithm
///
/// Splits x = m × 2^e from the bit pattern, folds m down by √2 so the
/// series argument stays in [-0.293, 0.414], then evaluates a 15-term
/// alternating Horner series for ln(1 + t):
///
/// ```text
/// ln(x) = e·ln(2) + ln(m)
/// ```
///
/// # Example
///
/// ```rust
/// use vega_math::exp::fast_logf;
///
/// let l = fast_logf(1000.0);
/// assert!((l - 6.907755).abs() < 1e-3);
/// ```
#[inline(always)]
pub fn fast_logf(x: f32) -> f32 {
    const SQRT_2: f32 = core::f32::consts::SQRT_2;

    let bits = x.to_bits();
    let mut exponent = ((bits >> 23) & 0xFF) as i32 - 127;
    // Clear exponent bits; reinstall bias 127 so m lands in [1, 2).
    let mut m = f32::from_bits((bits & 0x007F_FFFF) | 0x3F80_0000);

    // Fold the upper half of the mantissa range down so the Taylor
    // argument never nears 1, where the series converges too slowly.
    if m > SQRT_2 {
        m *= 0.5;
        exponent += 1;
    }
    let t = m - 1.0;

    let mut series = 1.0 / 15.0;
    series = -1.0 / 14.0 + t * series;
    series = 1.0 / 13.0 + t * series;
    series = -1.0 / 12.0 + t * series;
    series = 1.0 / 11.0 + t * series;
    series = -0.1 + t * series;
    series = 1.0 / 9.0 + t * series;
    series = -0.125 + t * series;
    series = 1.0 / 7.0 + t * series;
    series = -1.0 / 6.0 + t * series;
    series = 0.2 + t * series;
    series = -0.25 + t * series;
    series = 1.0 / 3.0 + t * series;
    series = -0.5 + t * series;
    series = 1.0 + t * series;

    exponent as f32 * core::f32::consts::LN_2 + t * series
}

/// Fast ln(x) for f64; same method as [`fast_logf`] on the 11/52-bit
/// layout
#[inline(always)]
pub fn fast_log(x: f64) -> f64 {
    const SQRT_2: f64 = core::f64::consts::SQRT_2;

    let bits = x.to_bits();
    let mut exponent = ((bits >> 52) & 0x7FF) as i64 - 1023;
    let mut m = f64::from_bits((bits & 0x000F_FFFF_FFFF_FFFF) | 0x3FF0_0000_0000_0000);

    if m > SQRT_2 {
        m *= 0.5;
        exponent += 1;
    }
    let t = m - 1.0;

    let mut series = 1.0 / 15.0;
    series = -1.0 / 14.0 + t * series;
    series = 1.0 / 13.0 + t * series;
    series = -1.0 / 12.0 + t * series;
    series = 1.0 / 11.0 + t * series;
    series = -0.1 + t * series;
    series = 1.0 / 9.0 + t * series;
    series = -0.125 + t * series;
    series = 1.0 / 7.0 + t * series;
    series = -1.0 / 6.0 + t * series;
    series = 0.2 + t * series;
    series = -0.25 + t * series;
    series = 1.0 / 3.0 + t * series;
    series = -0.5 + t * series;
    series = 1.0 + t * series;

    exponent as f64 * core::f64::consts::LN_2 + t * series
}

/// Logistic sigmoid 1/(1 + e^(-x)) for f32
///
/// Saturates to 0 below x ≈ -87 and to 1 above x ≈ 87 via the exp
/// clamp; always finite, never NaN for finite input.
///
/// # Example
///
/// ```rust
/// use vega_math::exp::logisticf;
///
/// assert_eq!(logisticf(0.0), 0.5);
/// assert!(logisticf(10.0) > 0.9999);
/// ```
#[inline(always)]
pub fn logisticf(x: f32) -> f32 {
    1.0 / (1.0 + fast_expf(-x))
}

/// Logistic sigmoid 1/(1 + e^(-x)) for f64
#[inline(always)]
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + fast_exp(-x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative_error(actual: f64, expected: f64) -> f64 {
        if expected.abs() < 1e-10 {
            actual.abs()
        } else {
            ((actual - expected) / expected).abs()
        }
    }

    #[test]
    fn test_fast_expf_zero_and_one() {
        assert!(relative_error(fast_expf(0.0) as f64, 1.0) < 1e-3);
        assert!(relative_error(fast_expf(1.0) as f64, core::f64::consts::E) < 1e-2);
    }

    #[test]
    fn test_fast_expf_across_range() {
        for x in [-20.0f32, -10.0, -5.0, -1.0, -0.5, 0.5, 1.0, 5.0, 10.0, 20.0] {
            let err = relative_error(fast_expf(x) as f64, libm::exp(x as f64));
            assert!(err < 0.01, "exp({}) relative error {}", x, err);
        }
    }

    #[test]
    fn test_fast_expf_clamping() {
        assert!(fast_expf(1000.0).is_finite());
        assert!(fast_expf(-1000.0) > 0.0);
    }

    #[test]
    fn test_fast_exp_f64_across_range() {
        for x in [-50.0f64, -10.0, -2.0, 0.0, 2.0, 10.0, 50.0, 200.0] {
            let err = relative_error(fast_exp(x), libm::exp(x));
            assert!(err < 1e-6, "exp({}) relative error {}", x, err);
        }
        assert!(fast_exp(1e9).is_finite());
    }

    #[test]
    fn test_fast_exp_error_survives_full_squaring_depth() {
        // The deepest reductions amplify the core error the most; the
        // bound must hold at the clamp knees, not just mid-range.
        for x in [100.0f64, 200.0, 500.0, 707.0, 708.0, -500.0, -708.0] {
            let err = relative_error(fast_exp(x), libm::exp(x));
            assert!(err < 1e-6, "exp({}) relative error {}", x, err);
        }
        for x in [40.0f32, 80.0, 87.0, -87.0] {
            let err = relative_error(fast_expf(x) as f64, libm::exp(x as f64));
            assert!(err < 1e-3, "expf({}) relative error {}", x, err);
        }
    }

    #[test]
    fn test_fast_logf_known_values() {
        assert!(fast_logf(1.0).abs() < 1e-6);
        assert!(relative_error(fast_logf(core::f32::consts::E) as f64, 1.0) < 1e-4);
        assert!(relative_error(fast_logf(1000.0) as f64, libm::log(1000.0)) < 1e-4);
        assert!(relative_error(fast_logf(0.01) as f64, libm::log(0.01)) < 1e-4);
    }

    #[test]
    fn test_fast_log_sweep_includes_mantissa_edges() {
        // Values whose mantissa lands near 2.0 used to be the worst
        // case; the sqrt(2) fold keeps them tight.
        for x in [0.01f64, 0.1, 0.5, 0.99, 1.0, 1.5, 1.9, 1.99, 2.0, 10.0, 1e6] {
            let err = relative_error(fast_log(x), libm::log(x));
            assert!(err < 1e-5, "log({}) relative error {}", x, err);
        }
    }

    #[test]
    fn test_roundtrip_exp_log() {
        for x in [0.1f64, 0.5, 1.0, 2.0, 10.0, 100.0, 1000.0] {
            let roundtrip = fast_exp(fast_log(x));
            assert!(
                relative_error(roundtrip, x) < 0.02,
                "exp(log({})) = {}",
                x,
                roundtrip
            );
        }
    }

    #[test]
    fn test_logistic_shape() {
        assert_eq!(logisticf(0.0), 0.5);
        assert_eq!(logistic(0.0), 0.5);
        assert!(logistic(30.0) > 0.999_999);
        assert!(logistic(-30.0) < 1e-6);
        // Monotone over a coarse sweep
        let mut prev = 0.0;
        for i in -40..=40 {
            let v = logistic(i as f64 * 0.25);
            assert!(v >= prev, "logistic not monotone at {}", i);
            prev = v;
        }
        // Point symmetry about (0, 1/2)
        for x in [0.5f64, 1.0, 2.5, 7.0] {
            assert!((logistic(x) + logistic(-x) - 1.0).abs() < 1e-6);
        }
    }
}
