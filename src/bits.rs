//! Power-of-two bit tricks and branch-free float rounding
//!
//! The rounding helpers trade range for speed: they hold for
//! |x| < 16384 and are meant for the angle/coordinate magnitudes a
//! frame loop actually produces. Outside that window use the libm
//! routines.

/// Bias used by the fast rounding helpers. Adding it shifts any input
/// in (-BIAS, BIAS) into positive territory so a single truncating
/// cast rounds toward negative infinity.
const FLOOR_BIAS: f64 = 16384.0;

/// Smallest power of two >= `value`; 1 for inputs <= 0
///
/// Saturates rather than overflowing: anything above 2^31 returns
/// `1 << 31` (the i32 sign bit) like a wrapping shift would.
#[inline]
pub fn next_power_of_two(value: i32) -> i32 {
    if value <= 1 {
        return 1;
    }
    // Smear the top bit across every lower position, then increment.
    let mut v = (value - 1) as u32;
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v.wrapping_add(1) as i32
}

/// Largest power of two <= `value`; 0 for inputs <= 0
#[inline]
pub fn previous_power_of_two(value: i32) -> i32 {
    if value <= 0 {
        return 0;
    }
    let mut v = value as u32;
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    (v - (v >> 1)) as i32
}

/// Whether `value` is an exact power of two (false for <= 0)
#[inline]
pub fn is_power_of_two(value: i32) -> bool {
    value > 0 && value & (value - 1) == 0
}

/// floor(x) as an integer, valid for |x| < 16384
///
/// Shifts the input positive by a fixed bias so the truncating cast
/// rounds down for negatives too, then removes the bias again.
#[inline]
pub fn fast_floor(x: f32) -> i32 {
    (x as f64 + FLOOR_BIAS) as i32 - FLOOR_BIAS as i32
}

/// ceil(x) as an integer, valid for |x| < 16384
#[inline]
pub fn fast_ceil(x: f32) -> i32 {
    FLOOR_BIAS as i32 - ((FLOOR_BIAS - x as f64) as i32)
}

/// Nearest integer to x, halves rounding up, valid for |x| < 16384
#[inline]
pub fn fast_round(x: f32) -> i32 {
    (x as f64 + FLOOR_BIAS + 0.5) as i32 - FLOOR_BIAS as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_power_of_two() {
        assert_eq!(next_power_of_two(-7), 1);
        assert_eq!(next_power_of_two(0), 1);
        assert_eq!(next_power_of_two(1), 1);
        assert_eq!(next_power_of_two(2), 2);
        assert_eq!(next_power_of_two(3), 4);
        assert_eq!(next_power_of_two(17), 32);
        assert_eq!(next_power_of_two(1 << 20), 1 << 20);
        assert_eq!(next_power_of_two((1 << 20) + 1), 1 << 21);
        assert_eq!(next_power_of_two(i32::MAX), i32::MIN); // saturated shift
    }

    #[test]
    fn test_previous_power_of_two() {
        assert_eq!(previous_power_of_two(-3), 0);
        assert_eq!(previous_power_of_two(0), 0);
        assert_eq!(previous_power_of_two(1), 1);
        assert_eq!(previous_power_of_two(2), 2);
        assert_eq!(previous_power_of_two(3), 2);
        assert_eq!(previous_power_of_two(17), 16);
        assert_eq!(previous_power_of_two(i32::MAX), 1 << 30);
    }

    #[test]
    fn test_is_power_of_two() {
        assert!(!is_power_of_two(-4));
        assert!(!is_power_of_two(0));
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(2));
        assert!(!is_power_of_two(3));
        assert!(is_power_of_two(1 << 30));
        assert!(!is_power_of_two(i32::MAX));
    }

    #[test]
    fn test_fast_floor_matches_reference() {
        for i in -20000..=20000 {
            let x = i as f32 * 0.37;
            if x.abs() >= 16384.0 {
                continue;
            }
            assert_eq!(
                fast_floor(x),
                libm::floorf(x) as i32,
                "fast_floor({}) diverged",
                x
            );
        }
        assert_eq!(fast_floor(-0.0001), -1);
        assert_eq!(fast_floor(0.9999), 0);
        assert_eq!(fast_floor(-3.0), -3);
    }

    #[test]
    fn test_fast_ceil_matches_reference() {
        for i in -20000..=20000 {
            let x = i as f32 * 0.37;
            if x.abs() >= 16384.0 {
                continue;
            }
            assert_eq!(
                fast_ceil(x),
                libm::ceilf(x) as i32,
                "fast_ceil({}) diverged",
                x
            );
        }
        assert_eq!(fast_ceil(0.0001), 1);
        assert_eq!(fast_ceil(-0.9999), 0);
        assert_eq!(fast_ceil(5.0), 5);
    }

    #[test]
    fn test_fast_round_half_up() {
        assert_eq!(fast_round(2.5), 3);
        assert_eq!(fast_round(-2.5), -2);
        assert_eq!(fast_round(2.49), 2);
        assert_eq!(fast_round(-2.51), -3);
        for i in -20000..=20000 {
            let x = i as f32 * 0.37;
            if x.abs() >= 16383.0 {
                continue;
            }
            let want = libm::floorf(x as f32 + 0.5) as i32;
            assert_eq!(fast_round(x), want, "fast_round({}) diverged", x);
        }
    }
}
