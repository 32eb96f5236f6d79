//! Shared sine lookup table
//!
//! One sine table per floating-point width, built on first access and
//! immutable afterward. The table covers a full turn in `SIN_COUNT`
//! uniform steps plus one duplicate wraparound entry, so a masked index
//! and its `+1` neighbor are always both valid reads.
//!
//! Cosine has no table of its own: it is the same table read a quarter
//! turn ahead.
//!
//! # Invariants
//!
//! - length is `SIN_COUNT + 1`, `SIN_COUNT` a power of two
//! - `table[0] == table[SIN_COUNT]` (bitwise)
//! - entries at 0, N/4, N/2, 3N/4 are forced to 0, 1, 0, -1 after
//!   sampling, correcting the float error libm sin leaves at the
//!   cardinal angles

use once_cell::sync::Lazy;

/// Bits of angle resolution in the table index
pub const SIN_BITS: u32 = 14;

/// Number of distinct table steps per full turn (16384)
pub const SIN_COUNT: usize = 1 << SIN_BITS;

/// Mask that wraps any index into `[0, SIN_COUNT)`
pub const SIN_MASK: usize = SIN_COUNT - 1;

/// Index offset from sine to cosine (a quarter turn)
pub const COS_OFFSET: usize = SIN_COUNT / 4;

/// Table indices per radian
pub const RADIANS_TO_INDEX: f32 = (SIN_COUNT as f64 / core::f64::consts::TAU) as f32;

/// Table indices per degree
pub const DEGREES_TO_INDEX: f32 = (SIN_COUNT as f64 / 360.0) as f32;

/// Table indices per turn
pub const TURNS_TO_INDEX: f32 = SIN_COUNT as f32;

/// Radians per table index
pub const INDEX_TO_RADIANS: f32 = (core::f64::consts::TAU / SIN_COUNT as f64) as f32;

/// Degrees per table index
pub const INDEX_TO_DEGREES: f32 = (360.0 / SIN_COUNT as f64) as f32;

/// Turns per table index
pub const INDEX_TO_TURNS: f32 = (1.0 / SIN_COUNT as f64) as f32;

static SIN_TABLE_F64: Lazy<Box<[f64; SIN_COUNT + 1]>> = Lazy::new(build_f64);

static SIN_TABLE_F32: Lazy<Box<[f32; SIN_COUNT + 1]>> = Lazy::new(|| {
    // Narrowed from the f64 samples so both widths describe the same
    // curve, then re-pinned at the cardinals (narrowing preserves the
    // exact values anyway, but the pinning is the documented contract).
    let mut table = Box::new([0.0f32; SIN_COUNT + 1]);
    let wide = sin_table_f64();
    for (narrow, sample) in table.iter_mut().zip(wide.iter()) {
        *narrow = *sample as f32;
    }
    pin_cardinals_f32(&mut table);
    table
});

fn build_f64() -> Box<[f64; SIN_COUNT + 1]> {
    let mut table = Box::new([0.0f64; SIN_COUNT + 1]);
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = libm::sin(i as f64 / SIN_COUNT as f64 * core::f64::consts::TAU);
    }
    // Force the axis-aligned angles to their exact values. Sampled sin
    // at these points is only near-exact (e.g. sin(pi) ~ 1.2e-16), and
    // downstream identities rely on table reads at the cardinals being
    // exactly 0 / 1 / -1.
    table[0] = 0.0;
    table[SIN_COUNT / 4] = 1.0;
    table[SIN_COUNT / 2] = 0.0;
    table[SIN_COUNT / 4 * 3] = -1.0;
    table[SIN_COUNT] = 0.0;
    table
}

fn pin_cardinals_f32(table: &mut [f32; SIN_COUNT + 1]) {
    table[0] = 0.0;
    table[SIN_COUNT / 4] = 1.0;
    table[SIN_COUNT / 2] = 0.0;
    table[SIN_COUNT / 4 * 3] = -1.0;
    table[SIN_COUNT] = 0.0;
}

/// Single-precision sine table, built on first access
#[inline]
pub fn sin_table_f32() -> &'static [f32; SIN_COUNT + 1] {
    &SIN_TABLE_F32
}

/// Double-precision sine table, built on first access
#[inline]
pub fn sin_table_f64() -> &'static [f64; SIN_COUNT + 1] {
    &SIN_TABLE_F64
}
