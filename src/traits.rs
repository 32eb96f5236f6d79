//! Core scalar abstraction trait
//!
//! This module defines the trait that both floating-point widths implement.
//! It lets every approximation kernel be written once and resolve to either
//! f32 or f64 at the call site, instead of hand-duplicating each function
//! per width.

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::table;

/// Scalar abstraction over the two floating-point widths
///
/// Implemented for `f32` and `f64`. Every trigonometric kernel in this
/// crate is generic over `Scalar`, so the same entry point serves both
/// precisions:
///
/// ```rust
/// use vega_math::trig::lookup;
///
/// let single = lookup::sin(0.5_f32);
/// let double = lookup::sin(0.5_f64);
/// assert!((single as f64 - double).abs() < 1e-3);
/// ```
///
/// The unit-to-index conversion constants live here rather than as free
/// functions because their rounding differs per width: each is computed in
/// f64 and narrowed once, at compile time.
pub trait Scalar:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity
    const ZERO: Self;

    /// Multiplicative identity
    const ONE: Self;

    /// π at this width
    const PI: Self;

    /// 2π at this width
    const TAU: Self;

    /// π/2 at this width
    const HALF_PI: Self;

    /// Table indices per radian (`SIN_COUNT / 2π`)
    const RAD_TO_INDEX: Self;

    /// Table indices per degree (`SIN_COUNT / 360`)
    const DEG_TO_INDEX: Self;

    /// Table indices per turn (`SIN_COUNT`)
    const TURN_TO_INDEX: Self;

    /// Degrees per radian
    const RAD_TO_DEG: Self;

    /// Turns per radian (`1 / 2π`)
    const RAD_TO_TURN: Self;

    /// Narrow an f64 constant to this width
    fn splat(value: f64) -> Self;

    /// Largest integer less than or equal to `self`
    fn floor(self) -> Self;

    /// Smallest integer greater than or equal to `self`
    fn ceil(self) -> Self;

    /// Absolute value
    fn abs(self) -> Self;

    /// Square root (NaN for negative input)
    fn sqrt(self) -> Self;

    /// Truncating cast to i64
    ///
    /// Follows Rust `as`-cast semantics: saturates on overflow and maps
    /// NaN to 0, so a garbage angle can never produce an out-of-range
    /// table index.
    fn to_int(self) -> i64;

    /// Exact-ish conversion from a small integer
    fn from_int(value: i64) -> Self;

    /// Read the shared sine table at this width
    ///
    /// `index` must be in `[0, SIN_COUNT]`; callers guarantee this by
    /// masking with [`table::SIN_MASK`] first.
    fn sin_table(index: usize) -> Self;
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const PI: Self = core::f32::consts::PI;
    const TAU: Self = core::f32::consts::TAU;
    const HALF_PI: Self = core::f32::consts::FRAC_PI_2;
    const RAD_TO_INDEX: Self = (table::SIN_COUNT as f64 / core::f64::consts::TAU) as f32;
    const DEG_TO_INDEX: Self = (table::SIN_COUNT as f64 / 360.0) as f32;
    const TURN_TO_INDEX: Self = table::SIN_COUNT as f32;
    const RAD_TO_DEG: Self = (180.0 / core::f64::consts::PI) as f32;
    const RAD_TO_TURN: Self = (1.0 / core::f64::consts::TAU) as f32;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        value as f32
    }

    #[inline(always)]
    fn floor(self) -> Self {
        libm::floorf(self)
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        libm::ceilf(self)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        libm::fabsf(self)
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }

    #[inline(always)]
    fn to_int(self) -> i64 {
        self as i64
    }

    #[inline(always)]
    fn from_int(value: i64) -> Self {
        value as f32
    }

    #[inline(always)]
    fn sin_table(index: usize) -> Self {
        table::sin_table_f32()[index]
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const PI: Self = core::f64::consts::PI;
    const TAU: Self = core::f64::consts::TAU;
    const HALF_PI: Self = core::f64::consts::FRAC_PI_2;
    const RAD_TO_INDEX: Self = table::SIN_COUNT as f64 / core::f64::consts::TAU;
    const DEG_TO_INDEX: Self = table::SIN_COUNT as f64 / 360.0;
    const TURN_TO_INDEX: Self = table::SIN_COUNT as f64;
    const RAD_TO_DEG: Self = 180.0 / core::f64::consts::PI;
    const RAD_TO_TURN: Self = 1.0 / core::f64::consts::TAU;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        value
    }

    #[inline(always)]
    fn floor(self) -> Self {
        libm::floor(self)
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        libm::ceil(self)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        libm::fabs(self)
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    #[inline(always)]
    fn to_int(self) -> i64 {
        self as i64
    }

    #[inline(always)]
    fn from_int(value: i64) -> Self {
        value as f64
    }

    #[inline(always)]
    fn sin_table(index: usize) -> Self {
        table::sin_table_f64()[index]
    }
}
