//! Trigonometric approximation tiers
//!
//! Three precision/performance tiers over the same angle units, each a
//! submodule. Pick one directly; nothing here depends on anything else in
//! the crate except the shared sine table.
//!
//! # Tiers
//!
//! - [`lookup`]: one rounded table read. Fastest, visibly quantized
//!   (~2e-4 max error, output limited to table resolution).
//! - [`smooth`]: no table at all. Rational approximations, continuous
//!   output, ~3.6e-4 max error for sin/cos.
//! - [`smoother`]: two table reads with linear interpolation. Most
//!   accurate (~2e-8 at f64, float-rounding-limited at f32).
//!
//! Inverse functions ([`inverse`]) are polynomial only; no tier split.
//!
//! # Units
//!
//! Radians take the bare name, degrees a `_deg` suffix, turns a `_turns`
//! suffix. One turn is a full revolution: `sin_turns(0.25) == 1.0`.
//!
//! # Example
//!
//! ```rust
//! use vega_math::trig::{lookup, smooth, smoother};
//!
//! let x = core::f32::consts::FRAC_PI_6;
//! assert!((lookup::sin(x) - 0.5).abs() < 3e-4);
//! assert!((smooth::sin(x) - 0.5).abs() < 4e-4);
//! assert!((smoother::sin(x) - 0.5).abs() < 1e-6);
//! ```

pub mod inverse;
pub mod lookup;
pub mod smooth;
pub mod smoother;
