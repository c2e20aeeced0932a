//! Fast approximate `f32` math primitives for rendering inner loops.
//!
//! This crate trades bounded accuracy for speed on the transcendental
//! functions that dominate shading and sampling code: power, logarithm,
//! exponential, square root, inverse square root, and the trigonometric
//! family. Every approximation works by reinterpreting a float's IEEE-754
//! bit pattern as an integer (and back) and correcting with a low-degree
//! polynomial; there is no state, no allocation, and no I/O anywhere.
//!
//! # Module Organization
//!
//! - [`default`] - **Recommended API** with compile-time fast/exact selection
//! - [`exp_log`] - Always-fast `exp2`/`log2` and the derived `pow`/`log`/`exp`
//! - [`sqrt`] - Always-fast Babylonian square root and inverse square root
//! - [`trig`] - Always-fast trig, inverse trig, and degree↔radian helpers
//! - [`bits`] - The shared `f32`↔`i32` bit-reinterpretation utility
//!
//! # Quick Start
//!
//! ```rust
//! use fastmath::default::{pow, sqrt, sin, deg_to_rad};
//!
//! // Approximate 2^10 within the family's error bound
//! let y = pow(2.0, 10.0);
//! assert!((y - 1024.0).abs() / 1024.0 < 1e-3);
//!
//! // Two Babylonian steps from a bit-pattern seed
//! let r = sqrt(2.0);
//! assert!((r - core::f32::consts::SQRT_2).abs() < 0.01);
//!
//! // Corrected-parabola sine
//! let s = sin(deg_to_rad(90.0));
//! assert!((s - 1.0).abs() < 0.002);
//! ```
//!
//! # Choosing the Right Functions
//!
//! | Use Case | Function set |
//! |----------|--------------|
//! | Build-wide fast/exact switch | [`default`] |
//! | Unconditionally fast, regardless of features | [`exp_log`], [`sqrt`], [`trig`] |
//! | Rolling your own bit trick | [`bits`] |
//!
//! # Feature Flags
//!
//! - `fast-math` (default): bit-trick `pow`/`log`/`exp`/`sqrt`/`inv_sqrt` in
//!   [`default`]; disabled, those delegate to the standard library.
//! - `fast-trig` (default): parabola `sin`/`cos`/`tan` in [`default`];
//!   disabled, those delegate to the standard library.
//!
//! The two flags are independent, resolved at compile time, and never become
//! runtime branches. `asin`/`acos`/`atan` are polynomial-only either way.
//!
//! # Accuracy and Domains
//!
//! Error bounds are empirical, measured against the standard library over
//! the domain each approximation was designed for, and asserted as
//! regression thresholds in the test suite. Out-of-domain input (negative
//! values into the sqrt family, `|x| > 1` into `asin`, zero into `log2`) is
//! **not** validated: the functions are total and simply return a
//! well-defined but meaningless float. The only defensive behavior in the
//! crate is the silent input clamp inside [`exp_log::exp2`].

#![warn(missing_docs)]

pub mod bits;
pub mod default;
pub mod exp_log;
pub mod sqrt;
pub mod trig;

mod mlaf;

#[cfg(test)]
mod tests {
    use crate::default::*;
    use core::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    // Concrete end-to-end scenarios across the recommended surface. These
    // hold in both regimes; the per-module tests carry the tight bounds.

    #[test]
    fn test_scenario_log_exp() {
        assert!(log(1.0).abs() < 1e-6, "log(1) = {}", log(1.0));
        assert!((exp(0.0) - 1.0).abs() < 1e-5);
        assert!((crate::exp_log::log2(1.0)).abs() < 1e-6);
        assert!((crate::exp_log::exp2(0.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_scenario_sqrt_family() {
        assert!((sqrt(4.0) - 2.0).abs() / 2.0 < 0.01);
        assert!((inv_sqrt(4.0) - 0.5).abs() / 0.5 < 0.01);
        for x in [0.3f32, 1.0, 9.0, 144.0, 2e4] {
            let product = sqrt(x) * inv_sqrt(x);
            assert!(
                (product - 1.0).abs() < 5e-3,
                "sqrt * inv_sqrt at {x} = {product}"
            );
        }
    }

    #[test]
    fn test_scenario_trig() {
        assert!(sin(0.0).abs() < 1e-6);
        assert!((tan(FRAC_PI_4) - 1.0).abs() < 0.01);
        assert!((asin(0.5) - 0.5f32.asin()).abs() < 1e-3);
        assert!((acos(0.5) + asin(0.5) - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_scenario_pow_round_trip() {
        for x in [0.2f32, 1.7, 12.0, 400.0] {
            let rt = exp(log(x));
            assert!((rt - x).abs() / x < 2e-3, "exp(log({x})) = {rt}");
        }
    }

    #[test]
    fn test_angle_helpers_roundtrip() {
        for deg in [0.0f32, 30.0, 90.0, 180.0, 270.0, 360.0] {
            let back = rad_to_deg(deg_to_rad(deg));
            assert!((back - deg).abs() < 1e-3, "{deg} deg round-tripped to {back}");
        }
    }
}
