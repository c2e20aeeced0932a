//! Bit-level reinterpretation between `f32` and `i32`.
//!
//! Every approximation in this crate works by reading a float's IEEE-754
//! encoding as an integer (or writing one back). This module is the single
//! place that cast happens, implemented with [`bytemuck::cast`] — a
//! guaranteed same-size, same-bits transmute. No pointer punning anywhere.

use bytemuck::cast;

/// Reinterpret the bits of an `f32` as an `i32`.
///
/// This is a bit copy, not a numeric conversion: `to_bits(1.0)` is
/// `0x3f80_0000`, not `1`.
#[inline(always)]
pub fn to_bits(x: f32) -> i32 {
    cast(x)
}

/// Reinterpret the bits of an `i32` as an `f32`.
///
/// Inverse of [`to_bits`]; round-trips exactly, including NaN payloads.
#[inline(always)]
pub fn from_bits(bits: i32) -> f32 {
    cast(bits)
}
