//! Fast base-2 exponential and logarithm, plus the `pow`/`log`/`exp` family
//! derived from them.
//!
//! Both primitives exploit the IEEE-754 layout directly: `exp2` writes the
//! integer part of the exponent straight into a float's exponent field and
//! corrects the fractional part with a degree-5 polynomial; `log2` reads the
//! exponent field back out and corrects the mantissa the same way. The
//! polynomial approach follows Jose Fonseca's "Fast SSE2 pow: tables or
//! polynomials?" writeup, scalarized.
//!
//! Measured accuracy: `exp2` relative error < 2e-4 over `[-30, 30]` (worst
//! near the half-integer split boundaries, e.g. x = -12.5); `log2` absolute
//! error < 5e-4 over the positive normals. Errors compound through [`pow`]
//! as roughly `|b|` times the `log2` error.

use crate::bits::{from_bits, to_bits};
use crate::mlaf::fmla;

// Clamp range for the exp2 exponent-field trick. Inputs outside this range
// are silently clamped; below the low end the constructed scale flushes to
// zero, above the high end it saturates to the infinity bit pattern.
const EXP2_HI: f32 = 129.00000;
const EXP2_LO: f32 = -126.99999;

const EXPONENT_MASK: i32 = 0x7f80_0000;
const MANTISSA_MASK: i32 = 0x007f_ffff;
const ONE_BITS: i32 = 0x3f80_0000; // 1.0

// Degree-5 polynomial for 2^f, fitted over the fractional range the
// trunc(x - 0.5) split produces. C0 is the highest-degree coefficient.
const EXP2_C0: f32 = 1.877_576_7e-3;
const EXP2_C1: f32 = 8.989_339_7e-3;
const EXP2_C2: f32 = 5.582_631_8e-2;
const EXP2_C3: f32 = 2.401_536_1e-1;
const EXP2_C4: f32 = 6.931_530_8e-1;
const EXP2_C5: f32 = 9.999_999_4e-1;

// Degree-5 polynomial for log2(m) / (m - 1) with m in [1, 2).
const LOG2_C0: f32 = -3.443_600_6e-2;
const LOG2_C1: f32 = 3.182_133_7e-1;
const LOG2_C2: f32 = -1.231_530_3;
const LOG2_C3: f32 = 2.598_845_2;
const LOG2_C4: f32 = -3.324_199;
const LOG2_C5: f32 = 3.115_789_9;

/// Fast approximate `2^x`.
///
/// Splits `x` into an integer part written directly into a float's exponent
/// field (`(n + 127) << 23`) and a fractional remainder corrected by a
/// degree-5 polynomial. The input is **silently clamped** to
/// `[-126.99999, 129.0]`; callers rely on this never signaling. At the low
/// clamp the result flushes to `0.0`, at the high clamp it saturates to
/// infinity.
#[inline]
pub fn exp2(x: f32) -> f32 {
    let x = x.clamp(EXP2_LO, EXP2_HI);

    // Truncation, not floor: matches the split the polynomial was fitted to.
    let n = (x - 0.5) as i32;
    let f = x - n as f32;
    let scale = from_bits((n + 127) << 23);

    let mut u = EXP2_C0;
    u = fmla(u, f, EXP2_C1);
    u = fmla(u, f, EXP2_C2);
    u = fmla(u, f, EXP2_C3);
    u = fmla(u, f, EXP2_C4);
    u = fmla(u, f, EXP2_C5);

    scale * u
}

/// Fast approximate `log2(x)` for positive `x`.
///
/// Reads the raw exponent field for the integer part, forces the mantissa
/// into `[1, 2)` by OR-ing in the bit pattern of 1.0, and corrects with a
/// degree-5 polynomial multiplied by `(m - 1)`.
///
/// Not validated: zero, negative, and non-finite inputs produce meaningless
/// (but well-defined) results.
#[inline]
pub fn log2(x: f32) -> f32 {
    let bits = to_bits(x);
    let e = (((bits & EXPONENT_MASK) >> 23) - 127) as f32;
    let m = from_bits((bits & MANTISSA_MASK) | ONE_BITS);

    let mut u = LOG2_C0;
    u = fmla(u, m, LOG2_C1);
    u = fmla(u, m, LOG2_C2);
    u = fmla(u, m, LOG2_C3);
    u = fmla(u, m, LOG2_C4);
    u = fmla(u, m, LOG2_C5);

    fmla(u, m - 1.0, e)
}

/// Fast approximate `base^exponent` via `exp2(log2(base) * exponent)`.
///
/// Valid only for `base > 0` (inherits the [`log2`] domain).
#[inline]
pub fn pow(base: f32, exponent: f32) -> f32 {
    exp2(log2(base) * exponent)
}

/// Fast approximate natural logarithm via base change from [`log2`].
///
/// Valid only for `x > 0`.
#[inline]
pub fn log(x: f32) -> f32 {
    log2(x) * core::f32::consts::LN_2
}

/// Fast approximate natural exponential via base change from [`exp2`].
#[inline]
pub fn exp(x: f32) -> f32 {
    exp2(x * core::f32::consts::LOG2_E)
}
