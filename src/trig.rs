//! Fast trigonometric functions and angle conversion helpers.
//!
//! `sin`/`cos`/`tan` use the parabola approximation from Nick's "Fast and
//! Accurate sine/cosine" DevMaster thread: a quadratic through the sine's
//! zeros and peak, followed by an empirical correction blend that pulls the
//! peak error down to about 0.001 over a full period. `cos` and `tan` are
//! defined in terms of `sin`, so their error tracks it.
//!
//! The inverse functions are truncated odd-power series with no bit tricks
//! and no exact fallback anywhere in the crate; their accuracy is good near
//! zero and degrades toward the edge of `[-1, 1]` (see each function).

use core::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::mlaf::fmla;

const FRAC_1_TAU: f32 = 0.159_154_94;
const FRAC_4_PI: f32 = 1.273_239_5; // 4/pi
const FRAC_4_PI_SQ: f32 = 0.405_284_73; // 4/pi^2

// Empirical blend weight between the raw parabola and its square; 0.225
// minimizes peak error (raw parabola alone peaks at ~0.056).
const SIN_CORRECTION: f32 = 0.225;

// Truncated Maclaurin coefficients for asin, highest degree first:
// x^11, x^9, x^7, x^5, x^3.
const ASIN_C0: f32 = 0.022_372_159;
const ASIN_C1: f32 = 0.030_381_944;
const ASIN_C2: f32 = 0.044_642_857;
const ASIN_C3: f32 = 0.075;
const ASIN_C4: f32 = 0.166_666_67;

// Alternating series coefficients for atan, highest degree first.
const ATAN_C0: f32 = 0.090_909_09; // 1/11
const ATAN_C1: f32 = -0.111_111_11; // -1/9
const ATAN_C2: f32 = 0.142_857_14; // 1/7
const ATAN_C3: f32 = -0.2; // -1/5
const ATAN_C4: f32 = 0.333_333_34; // 1/3

#[allow(clippy::excessive_precision)]
const DEG_TO_RAD: f32 = 0.017_453_292_519_943_295; // pi/180
#[allow(clippy::excessive_precision)]
const RAD_TO_DEG: f32 = 57.295_779_513_082_32; // 180/pi

/// Fast approximate `sin(x)`.
///
/// Range-reduces into `[-pi, pi]`, then evaluates the corrected parabola.
/// Maximum absolute error is about 0.001 over `[-2pi, 2pi]`; `sin(0.0)`
/// is exactly `0.0`.
///
/// The reduction for `|x| > 2pi` is an approximate float modulo (truncating
/// multiply by 1/2pi), not an exact remainder; its accuracy decays as `|x|`
/// grows. Callers depend on this exact formula, so it stays as written.
#[inline]
pub fn sin(x: f32) -> f32 {
    let mut x = x;
    if x > TAU || x < -TAU {
        x -= (x * FRAC_1_TAU) as i32 as f32 * TAU;
    }
    if x < -PI {
        x += TAU;
    } else if x > PI {
        x -= TAU;
    }

    let y = FRAC_4_PI * x - FRAC_4_PI_SQ * x * x.abs();
    fmla(SIN_CORRECTION, y * y.abs() - y, y)
}

/// Fast approximate `cos(x)`, defined as `sin(x + pi/2)`.
#[inline]
pub fn cos(x: f32) -> f32 {
    sin(x + FRAC_PI_2)
}

/// Fast approximate `tan(x)`, defined as `sin(x) / cos(x)`.
///
/// Not guarded near the poles: where `cos(x)` is close to zero the result is
/// large and inaccurate.
#[inline]
pub fn tan(x: f32) -> f32 {
    sin(x) / cos(x)
}

/// Approximate `asin(x)` as a truncated odd Maclaurin series (through x^11).
///
/// Intended domain is `[-1, 1]`; the series converges slowly near the edges,
/// so accuracy is ~1e-4 on `[-0.5, 0.5]` but drops to ~0.25 absolute at
/// `|x| = 1`. No domain check, no exact fallback.
#[inline]
pub fn asin(x: f32) -> f32 {
    let x2 = x * x;

    let mut u = ASIN_C0;
    u = fmla(u, x2, ASIN_C1);
    u = fmla(u, x2, ASIN_C2);
    u = fmla(u, x2, ASIN_C3);
    u = fmla(u, x2, ASIN_C4);

    fmla(u * x2, x, x)
}

/// Approximate `acos(x)` as `pi/2 - asin(x)`.
///
/// Shares the domain and accuracy profile of [`asin`].
#[inline]
pub fn acos(x: f32) -> f32 {
    FRAC_PI_2 - asin(x)
}

/// Approximate `atan(x)` as a truncated odd alternating series (through x^11).
///
/// Accuracy is ~1e-3 on `[-0.7, 0.7]` and about 0.04 absolute at `|x| = 1`;
/// outside `[-1, 1]` the series diverges and the result is meaningless. No
/// domain check, no exact fallback.
#[inline]
pub fn atan(x: f32) -> f32 {
    let x2 = x * x;

    let mut u = ATAN_C0;
    u = fmla(u, x2, ATAN_C1);
    u = fmla(u, x2, ATAN_C2);
    u = fmla(u, x2, ATAN_C3);
    u = fmla(u, x2, ATAN_C4);

    x - u * x2 * x
}

/// Convert degrees to radians.
///
/// # Example
/// ```
/// use fastmath::trig::deg_to_rad;
///
/// let r = deg_to_rad(90.0);
/// assert!((r - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
/// ```
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Convert radians to degrees.
///
/// # Example
/// ```
/// use fastmath::trig::rad_to_deg;
///
/// let d = rad_to_deg(core::f32::consts::PI);
/// assert!((d - 180.0).abs() < 1e-4);
/// ```
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}
