//! Sine table construction tests
//!
//! Validates the shared lookup table from the public surface: length,
//! wraparound duplication, pinned cardinal entries, and agreement
//! between the two widths.

use vega_math::table::{
    self, sin_table_f32, sin_table_f64, DEGREES_TO_INDEX, RADIANS_TO_INDEX, TURNS_TO_INDEX,
};

#[test]
fn test_table_has_duplicate_wraparound_entry() {
    let t32 = sin_table_f32();
    let t64 = sin_table_f64();
    assert_eq!(t32.len(), table::SIN_COUNT + 1);
    assert_eq!(t64.len(), table::SIN_COUNT + 1);
    assert_eq!(t32[table::SIN_COUNT].to_bits(), t32[0].to_bits());
    assert_eq!(t64[table::SIN_COUNT].to_bits(), t64[0].to_bits());
}

#[test]
fn test_cardinal_entries_are_exact() {
    let t32 = sin_table_f32();
    let t64 = sin_table_f64();
    let quarter = table::SIN_COUNT / 4;

    assert_eq!(t32[0], 0.0);
    assert_eq!(t32[quarter], 1.0);
    assert_eq!(t32[2 * quarter], 0.0);
    assert_eq!(t32[3 * quarter], -1.0);

    assert_eq!(t64[0], 0.0);
    assert_eq!(t64[quarter], 1.0);
    assert_eq!(t64[2 * quarter], 0.0);
    assert_eq!(t64[3 * quarter], -1.0);
}

#[test]
fn test_non_cardinal_entries_match_reference() {
    let t64 = sin_table_f64();
    for i in (1..table::SIN_COUNT).step_by(97) {
        let quarter = table::SIN_COUNT / 4;
        if i % quarter == 0 {
            continue; // pinned, not sampled
        }
        let want = libm::sin(i as f64 / table::SIN_COUNT as f64 * core::f64::consts::TAU);
        assert_eq!(t64[i], want, "entry {} is not a raw sample", i);
    }
}

#[test]
fn test_f32_table_is_narrowed_f64_table() {
    let t32 = sin_table_f32();
    let t64 = sin_table_f64();
    for i in (0..=table::SIN_COUNT).step_by(61) {
        assert_eq!(t32[i], t64[i] as f32, "width mismatch at entry {}", i);
    }
}

#[test]
fn test_index_scales_are_consistent() {
    // One full revolution in any unit maps onto the full table.
    let count = table::SIN_COUNT as f32;
    assert!((core::f32::consts::TAU * RADIANS_TO_INDEX - count).abs() < 1e-2);
    assert!((360.0 * DEGREES_TO_INDEX - count).abs() < 1e-2);
    assert_eq!(1.0 * TURNS_TO_INDEX, count);
}

#[test]
fn test_mask_covers_table() {
    assert_eq!(table::SIN_COUNT, 1 << table::SIN_BITS);
    assert_eq!(table::SIN_MASK, table::SIN_COUNT - 1);
    // Mask wraps any index back into range without a modulo.
    assert_eq!((table::SIN_COUNT + 5) & table::SIN_MASK, 5);
}
