//! Recommended API with compile-time regime selection.
//!
//! Every function here picks its implementation once, at build time:
//!
//! - **`fast-math` feature** (default on): [`pow`], [`log`], [`exp`],
//!   [`sqrt`], [`inv_sqrt`] use the bit-trick approximations from
//!   [`exp_log`](crate::exp_log) and [`sqrt`](crate::sqrt). Disabled, they
//!   delegate to the standard library.
//! - **`fast-trig` feature** (default on): [`sin`], [`cos`], [`tan`] use the
//!   parabola approximations from [`trig`](crate::trig). Disabled, they
//!   delegate to the standard library.
//! - [`asin`], [`acos`], [`atan`] are always the polynomial approximations;
//!   there is no exact variant.
//! - [`ldexp`] always scales exactly, regardless of either feature.
//!
//! The selection is a `cfg!` branch on a compile-time constant, so the
//! untaken side is dead code the optimizer removes; there is no runtime
//! switch and no per-call choice.
//!
//! # Quick Start
//!
//! ```rust
//! use fastmath::default::{pow, sqrt, sin};
//!
//! let y = pow(2.0, 10.0);
//! assert!((y - 1024.0).abs() / 1024.0 < 1e-3);
//!
//! let r = sqrt(4.0);
//! assert!((r - 2.0).abs() < 0.02);
//!
//! assert!(sin(0.0).abs() < 1e-6);
//! ```

// ============================================================================
// Power / log / exp / sqrt family (fast-math switch)
// ============================================================================

/// `base^exponent` — bit-trick approximation with `fast-math`, `powf`
/// otherwise. Valid for `base > 0` in the fast regime.
#[inline]
pub fn pow(base: f32, exponent: f32) -> f32 {
    if cfg!(feature = "fast-math") {
        crate::exp_log::pow(base, exponent)
    } else {
        base.powf(exponent)
    }
}

/// Natural logarithm — fast [`crate::exp_log::log`] with `fast-math`,
/// `f32::ln` otherwise. Valid for `x > 0`.
#[inline]
pub fn log(x: f32) -> f32 {
    if cfg!(feature = "fast-math") {
        crate::exp_log::log(x)
    } else {
        x.ln()
    }
}

/// Natural exponential — fast [`crate::exp_log::exp`] with `fast-math`,
/// `f32::exp` otherwise.
#[inline]
pub fn exp(x: f32) -> f32 {
    if cfg!(feature = "fast-math") {
        crate::exp_log::exp(x)
    } else {
        x.exp()
    }
}

/// Square root — two Babylonian steps with `fast-math`, `f32::sqrt`
/// otherwise. Undefined for negative input in the fast regime.
#[inline]
pub fn sqrt(x: f32) -> f32 {
    if cfg!(feature = "fast-math") {
        crate::sqrt::sqrt(x)
    } else {
        x.sqrt()
    }
}

/// Inverse square root — the magic-constant Newton seed with `fast-math`,
/// `1.0 / x.sqrt()` otherwise.
#[inline]
pub fn inv_sqrt(x: f32) -> f32 {
    if cfg!(feature = "fast-math") {
        crate::sqrt::inv_sqrt(x)
    } else {
        1.0 / x.sqrt()
    }
}

/// `x * 2^n`, always exact regardless of the `fast-math` feature.
///
/// Kept for interface symmetry with the rest of the family; scaling by a
/// power of two never benefits from an approximation. The scale is applied
/// in two halves so a finite result survives even when `2^n` itself
/// overflows or underflows f32 (e.g. `ldexp(1e-30, 200)`).
#[inline]
pub fn ldexp(x: f32, n: i32) -> f32 {
    let half = n / 2;
    x * 2f32.powi(half) * 2f32.powi(n - half)
}

// ============================================================================
// Trigonometric family (fast-trig switch)
// ============================================================================

/// Sine — corrected parabola with `fast-trig`, `f32::sin` otherwise.
#[inline]
pub fn sin(x: f32) -> f32 {
    if cfg!(feature = "fast-trig") {
        crate::trig::sin(x)
    } else {
        x.sin()
    }
}

/// Cosine — `sin(x + pi/2)` with `fast-trig`, `f32::cos` otherwise.
#[inline]
pub fn cos(x: f32) -> f32 {
    if cfg!(feature = "fast-trig") {
        crate::trig::cos(x)
    } else {
        x.cos()
    }
}

/// Tangent — `sin(x)/cos(x)` with `fast-trig`, `f32::tan` otherwise.
/// Unguarded near the poles in the fast regime.
#[inline]
pub fn tan(x: f32) -> f32 {
    if cfg!(feature = "fast-trig") {
        crate::trig::tan(x)
    } else {
        x.tan()
    }
}

// ============================================================================
// Inverse trig (always polynomial) and angle helpers
// ============================================================================

pub use crate::trig::{acos, asin, atan, deg_to_rad, rad_to_deg};
