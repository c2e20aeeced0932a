//! Fast square root and inverse square root.
//!
//! Both functions seed from the input's bit pattern: halving the integer view
//! of a float roughly halves its exponent, which is already a crude square
//! root. [`sqrt`] refines the seed with two Babylonian steps (folded into one
//! expression); [`inv_sqrt`] is the classic `0x5f3759df` trick with a single
//! Newton iteration.
//!
//! Measured accuracy: [`sqrt`] relative error well under 0.1%; [`inv_sqrt`]
//! relative error under 0.18% (the known bound for the magic constant plus
//! one Newton step).
//!
//! Domain: `x >= 0`. Negative input is not checked and produces a
//! meaningless result.

use crate::bits::{from_bits, to_bits};

// Seed for 1/sqrt: the famous Quake III magic constant.
const INV_SQRT_MAGIC: i32 = 0x5f37_59df;

/// Fast approximate `sqrt(x)` using two Babylonian steps.
///
/// The seed `(1 << 29) + (bits >> 1) - (1 << 22)` halves the exponent field
/// with bias correction. The two refinement steps
/// `a = 0.5 * (a + x / a)` are folded algebraically: the first step skips its
/// halving, the second compensates with the `0.25` factor.
#[inline]
pub fn sqrt(x: f32) -> f32 {
    let a = from_bits((1 << 29) + (to_bits(x) >> 1) - (1 << 22));

    let a = a + x / a;
    0.25 * a + x / a
}

/// Fast approximate `1 / sqrt(x)`.
///
/// Seeds with `0x5f3759df - (bits >> 1)`, then applies one Newton iteration
/// for `1/sqrt`: `a * (1.5 - 0.5 * x * a * a)`.
#[inline]
pub fn inv_sqrt(x: f32) -> f32 {
    let half = 0.5 * x;
    let a = from_bits(INV_SQRT_MAGIC - (to_bits(x) >> 1));

    a * (1.5 - half * a * a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_known_values() {
        assert!((sqrt(4.0) - 2.0).abs() / 2.0 < 0.01);
        assert!((sqrt(1.0) - 1.0).abs() < 0.01);
        assert!((sqrt(2.0) - core::f32::consts::SQRT_2).abs() < 0.01);
        assert!((sqrt(10_000.0) - 100.0).abs() / 100.0 < 0.01);
    }

    #[test]
    fn test_inv_sqrt_known_values() {
        assert!((inv_sqrt(4.0) - 0.5).abs() / 0.5 < 0.01);
        assert!((inv_sqrt(1.0) - 1.0).abs() < 0.01);
        assert!((inv_sqrt(0.25) - 2.0).abs() / 2.0 < 0.01);
    }

    #[test]
    fn test_sqrt_accuracy_sweep() {
        // Logarithmic sweep across twelve decades of normal floats.
        let mut x = 1e-6f32;
        while x < 1e6 {
            let approx = sqrt(x);
            let exact = x.sqrt();
            let rel = (approx - exact).abs() / exact;
            assert!(
                rel < 1e-3,
                "sqrt({x}) = {approx}, exact {exact}, rel err {rel}"
            );
            x *= 1.07;
        }
    }

    #[test]
    fn test_inv_sqrt_accuracy_sweep() {
        let mut x = 1e-6f32;
        while x < 1e6 {
            let approx = inv_sqrt(x);
            let exact = 1.0 / x.sqrt();
            let rel = (approx - exact).abs() / exact;
            assert!(
                rel < 5e-3,
                "inv_sqrt({x}) = {approx}, exact {exact}, rel err {rel}"
            );
            x *= 1.07;
        }
    }

    #[test]
    fn test_sqrt_inv_sqrt_product() {
        for i in 1..=1000 {
            let x = i as f32 * 0.73;
            let product = sqrt(x) * inv_sqrt(x);
            assert!(
                (product - 1.0).abs() < 5e-3,
                "sqrt({x}) * inv_sqrt({x}) = {product}"
            );
        }
    }
}
