#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! vega-math: Fast scalar trigonometry and numeric helpers for game loops
//!
//! This library trades a few decimal digits of accuracy for throughput:
//! every routine is branch-light, allocation-free after table init, and
//! total over all inputs: garbage in, garbage out, never a panic.
//!
//! # Features
//!
//! - **Three sin/cos tiers**: raw table lookup, table-free smooth
//!   approximation, and lerped-table "smoother" lookup
//! - **Three angle units**: radians, degrees, and turns as first-class
//!   entry points, never converted through each other
//! - **Both widths**: f32 and f64 through the [`Scalar`] trait
//! - **Inverse trig**: polynomial asin/acos/atan and a total atan2
//! - **Fast exp/log**: Padé and series kernels lifted from the same
//!   accuracy-for-speed tradition
//! - **Easing and interpolation**: the classic curve families plus
//!   shortest-path angle lerp
//! - **Bit tricks**: power-of-two helpers and bias-trick rounding
//!
//! # Quick Start
//!
//! ```rust
//! use vega_math::trig::{lookup, smoother, inverse};
//!
//! // Direct table lookup: fastest, ~2e-4 absolute error
//! let s = lookup::sin(1.0_f32);
//!
//! // Lerped table: ~5e-6 in f32, still just two loads and a multiply
//! let c = smoother::cos_deg(45.0_f64);
//!
//! // Total atan2: no NaN for (0, 0), quadrant-correct everywhere else
//! let heading = inverse::atan2_deg_360(-1.0_f32, 0.0);
//! assert_eq!(heading, 270.0);
//! # let _ = (s, c);
//! ```

// Reference implementations for tests come from libm, as do the few
// exact operations (sqrt, floor) the approximations are built on.
extern crate libm;

// Width abstraction
pub mod traits;

// The shared quarter-offset sine table
pub mod table;

// Forward and inverse trigonometry tiers
pub mod trig;

// Exponential, logarithm, logistic
pub mod exp;

// Easing curves and interpolation
pub mod ease;

// Power-of-two and rounding bit tricks
pub mod bits;

pub use traits::Scalar;
