//! Scalar Math Facade
//!
//! General-purpose numeric helpers shared by the geometry code: the crate's
//! numeric constants and the single shared epsilon, trig wrappers with an
//! optional table-lookup fast path, exponential/log functions, rounding,
//! type-generic clamp/wrap helpers, and interpolation/curve evaluation.

use std::ops::{Add, Mul, Neg, Rem, Sub};

use crate::angle::Radian;
use crate::trig_table::TrigTable;

// --- Constants --------------------------------------------------------------

/// Archimedes' constant.
pub const PI: f32 = std::f32::consts::PI;
/// PI / 2.
pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;
/// 2 * PI, one full turn.
pub const TWO_PI: f32 = std::f32::consts::TAU;
/// Euler's number.
pub const E: f32 = std::f32::consts::E;
/// Square root of two.
pub const SQRT_2: f32 = std::f32::consts::SQRT_2;
/// Natural log of two, for change-of-base.
pub const LOG_2: f32 = std::f32::consts::LN_2;
/// Degrees per radian.
pub const DEG_PER_RAD: f32 = 180.0 / PI;
/// Radians per degree.
pub const RAD_PER_DEG: f32 = PI / 180.0;
/// Positive infinity.
pub const POS_INFINITY: f32 = f32::INFINITY;
/// Negative infinity.
pub const NEG_INFINITY: f32 = f32::NEG_INFINITY;

/// The fixed tolerance used by every near-zero / near-equal comparison in the
/// crate that does not take an explicit tolerance parameter.
pub const EPSILON: f32 = 1e-6;

// --- Zero and equality ------------------------------------------------------

/// True when `value` is within [`EPSILON`] of zero.
pub fn is_zero(value: f32) -> bool {
    value.abs() < EPSILON
}

/// True when `a` and `b` differ by less than [`EPSILON`].
pub fn near_equal(a: f32, b: f32) -> bool {
    is_zero(a - b)
}

/// Compares two values with a caller-supplied tolerance.
pub fn real_equal(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

/// True when `value` is NaN. Useful for catching degenerate geometry results
/// before they propagate.
pub fn is_nan(value: f32) -> bool {
    value.is_nan()
}

// --- Unit conversion --------------------------------------------------------

/// Degrees to radians.
pub fn rad(degrees: f32) -> f32 {
    degrees * RAD_PER_DEG
}

/// Radians to degrees.
pub fn deg(radians: f32) -> f32 {
    radians * DEG_PER_RAD
}

// --- Trigonometry -----------------------------------------------------------

/// Sine.
///
/// With `use_tables` set, the value comes from the shared lookup table:
/// faster, lower precision (see [`TrigTable`] for the error bound). The
/// default path is a direct call.
pub fn sin(angle: Radian, use_tables: bool) -> f32 {
    if use_tables {
        TrigTable::shared().sin_lookup(angle.to_radians())
    } else {
        angle.to_radians().sin()
    }
}

/// Cosine. Table mode reuses the sine table shifted by a quarter period.
pub fn cos(angle: Radian, use_tables: bool) -> f32 {
    if use_tables {
        TrigTable::shared().cos_lookup(angle.to_radians())
    } else {
        angle.to_radians().cos()
    }
}

/// Tangent. Table mode is unreliable near odd multiples of PI/2.
pub fn tan(angle: Radian, use_tables: bool) -> f32 {
    if use_tables {
        TrigTable::shared().tan_lookup(angle.to_radians())
    } else {
        angle.to_radians().tan()
    }
}

/// Arc sine. Input is saturated into [-1, 1] so slightly out-of-range dot
/// products do not produce NaN.
pub fn asin(value: f32) -> Radian {
    Radian::new(value.clamp(-1.0, 1.0).asin())
}

/// Arc cosine. Input is saturated into [-1, 1].
pub fn acos(value: f32) -> Radian {
    Radian::new(value.clamp(-1.0, 1.0).acos())
}

/// Arc tangent.
pub fn atan(value: f32) -> Radian {
    Radian::new(value.atan())
}

/// Four-quadrant arc tangent of `y / x`.
pub fn atan2(y: f32, x: f32) -> Radian {
    Radian::new(y.atan2(x))
}

// --- Exponential and logarithmic --------------------------------------------

/// Square root.
pub fn sqrt(value: f32) -> f32 {
    value.sqrt()
}

/// Reciprocal square root, `1 / sqrt(x)`.
pub fn inv_sqrt(value: f32) -> f32 {
    1.0 / value.sqrt()
}

/// `x * x`.
pub fn sqr(value: f32) -> f32 {
    value * value
}

/// Sign-preserving cube root.
pub fn cubic_root(value: f32) -> f32 {
    value.cbrt()
}

/// `e^x`.
pub fn exp(value: f32) -> f32 {
    value.exp()
}

/// `base^exponent`.
pub fn pow(base: f32, exponent: f32) -> f32 {
    base.powf(exponent)
}

/// Natural logarithm.
pub fn log(value: f32) -> f32 {
    value.ln()
}

/// Base-2 logarithm.
pub fn log2(value: f32) -> f32 {
    value.ln() / LOG_2
}

/// Base-10 logarithm. Genuinely base 10: some legacy math layers evaluate
/// the natural log under this name, so check call sites when porting.
pub fn log10(value: f32) -> f32 {
    value.log10()
}

/// Logarithm with an arbitrary base, via change-of-base.
pub fn log_base(base: f32, value: f32) -> f32 {
    value.ln() / base.ln()
}

// --- Rounding ---------------------------------------------------------------

/// Rounds up.
pub fn ceil(value: f32) -> f32 {
    value.ceil()
}

/// Rounds down.
pub fn floor(value: f32) -> f32 {
    value.floor()
}

/// Rounds half-up: `floor(x + 0.5)`.
pub fn round(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Rounds up to an integer.
pub fn ceil_to_int(value: f32) -> i32 {
    value.ceil() as i32
}

/// Rounds down to an integer.
pub fn floor_to_int(value: f32) -> i32 {
    value.floor() as i32
}

/// Rounds half-up to an integer.
pub fn round_to_int(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}

/// Integer absolute value.
pub fn iabs(value: i32) -> i32 {
    value.abs()
}

/// Integer sign: -1, 0 or 1.
pub fn isign(value: i32) -> i32 {
    value.signum()
}

// --- Type-generic helpers ---------------------------------------------------

/// Ordered numeric scalar with additive and multiplicative identities.
///
/// Implemented for the primitive numeric types the generic helpers below are
/// used with; anything ordered with the usual arithmetic operators can opt in.
pub trait Scalar:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Rem<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
}

/// A [`Scalar`] that supports negation.
pub trait SignedScalar: Scalar + Neg<Output = Self> {}

macro_rules! impl_scalar {
    ($($t:ty => $zero:expr, $one:expr);* $(;)?) => {$(
        impl Scalar for $t {
            const ZERO: Self = $zero;
            const ONE: Self = $one;
        }
    )*};
}

impl_scalar! {
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
    i32 => 0, 1;
    i64 => 0, 1;
    u32 => 0, 1;
    u64 => 0, 1;
}

impl SignedScalar for f32 {}
impl SignedScalar for f64 {}
impl SignedScalar for i32 {}
impl SignedScalar for i64 {}

/// Sign of a value: -1, 0 or 1 in the value's own type.
pub fn sign<T: SignedScalar>(value: T) -> T {
    if value > T::ZERO {
        T::ONE
    } else if value < T::ZERO {
        -T::ONE
    } else {
        T::ZERO
    }
}

/// Absolute value.
pub fn abs<T: SignedScalar>(value: T) -> T {
    if value < T::ZERO { -value } else { value }
}

/// The smaller of two values.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// The larger of two values.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

/// Clamps `value` into the inclusive range [`min`, `max`].
///
/// # Panics
/// Panics if `min > max`.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    assert!(min <= max, "invalid clamp range: min > max");
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps into [0, 1].
pub fn clamp01<T: Scalar>(value: T) -> T {
    clamp(value, T::ZERO, T::ONE)
}

/// Wraps `value` into the half-open range [`min`, `max`).
///
/// Periodic with period `max - min`: adding any whole number of periods to
/// `value` leaves the result unchanged. Requires `min < max`.
pub fn wrap<T: Scalar>(value: T, min: T, max: T) -> T {
    let length = max - min;
    let offset = (value - min) % length;
    if offset < T::ZERO {
        offset + length + min
    } else {
        offset + min
    }
}

// --- Interpolation ----------------------------------------------------------

/// Linear interpolation from `a` to `b` at parameter `t`.
///
/// Works for scalars and glam vectors alike; `t` is not clamped.
pub fn lerp<T>(t: f32, a: T, b: T) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    a + (b - a) * t
}

/// Smooth hermite-eased interpolation from `a` to `b`; `t` is clamped to
/// [0, 1] and remapped through `t^2 * (3 - 2t)`.
pub fn ease_in_out<T>(t: f32, a: T, b: T) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    let t = clamp01(t);
    lerp(t * t * (3.0 - 2.0 * t), a, b)
}

/// A curve point with its first and second derivative at the same parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample<V> {
    /// Position on the curve.
    pub position: V,
    /// First derivative (tangent) with respect to `t`.
    pub tangent: V,
    /// Second derivative (acceleration) with respect to `t`.
    pub acceleration: V,
}

/// Evaluates a cubic Bezier curve at `t` in [0, 1].
///
/// `v0` and `v3` are the endpoints, `v1` and `v2` the control points.
pub fn bezier<V>(v0: V, v1: V, v2: V, v3: V, t: f32) -> CurveSample<V>
where
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<f32, Output = V>,
{
    let u = 1.0 - t;

    let position =
        v0 * (u * u * u) + v1 * (3.0 * u * u * t) + v2 * (3.0 * u * t * t) + v3 * (t * t * t);
    let tangent =
        (v1 - v0) * (3.0 * u * u) + (v2 - v1) * (6.0 * u * t) + (v3 - v2) * (3.0 * t * t);
    let acceleration =
        (v2 - v1 * 2.0 + v0) * (6.0 * u) + (v3 - v2 * 2.0 + v1) * (6.0 * t);

    CurveSample {
        position,
        tangent,
        acceleration,
    }
}

/// Evaluates a cubic Hermite curve at `t` in [0, 1].
///
/// `p0`/`p1` are the endpoints, `t0`/`t1` the endpoint tangents.
pub fn hermite<V>(p0: V, p1: V, t0: V, t1: V, t: f32) -> CurveSample<V>
where
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<f32, Output = V>,
{
    let t2 = t * t;
    let t3 = t2 * t;

    let position = p0 * (2.0 * t3 - 3.0 * t2 + 1.0)
        + t0 * (t3 - 2.0 * t2 + t)
        + p1 * (-2.0 * t3 + 3.0 * t2)
        + t1 * (t3 - t2);
    let tangent = p0 * (6.0 * t2 - 6.0 * t)
        + t0 * (3.0 * t2 - 4.0 * t + 1.0)
        + p1 * (-6.0 * t2 + 6.0 * t)
        + t1 * (3.0 * t2 - 2.0 * t);
    let acceleration = p0 * (12.0 * t - 6.0)
        + t0 * (6.0 * t - 4.0)
        + p1 * (-12.0 * t + 6.0)
        + t1 * (6.0 * t - 2.0);

    CurveSample {
        position,
        tangent,
        acceleration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_wrap_scenarios() {
        assert_eq!(wrap(370.0_f32, 0.0, 360.0), 10.0);
        assert_eq!(wrap(-10.0_f32, 0.0, 360.0), 350.0);
        assert_eq!(wrap(0.0_f32, 0.0, 360.0), 0.0);
        // Integer wrap behaves the same way
        assert_eq!(wrap(370_i32, 0, 360), 10);
        assert_eq!(wrap(-10_i32, 0, 360), 350);
    }

    #[test]
    fn test_wrap_periodicity() {
        for v in [-900.0_f32, -360.0, -1.5, 0.0, 17.25, 359.0, 1234.5] {
            let base = wrap(v, 0.0, 360.0);
            assert!((0.0..360.0).contains(&base), "wrap left range: {}", base);
            for k in [-2.0_f32, -1.0, 1.0, 3.0] {
                let shifted = wrap(v + k * 360.0, 0.0, 360.0);
                assert!(
                    (shifted - base).abs() < 1e-3,
                    "wrap not periodic at {} + {}*360: {} vs {}",
                    v,
                    k,
                    shifted,
                    base
                );
            }
        }
    }

    #[test]
    fn test_clamp_contains_and_identity() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
        assert_eq!(clamp01(7.0_f32), 1.0);
        assert_eq!(clamp01(-2_i32), 0);
    }

    #[test]
    #[should_panic(expected = "invalid clamp range")]
    fn test_clamp_inverted_range_panics() {
        let _ = clamp(0.5, 1.0, 0.0);
    }

    #[test]
    fn test_sign_and_abs() {
        assert_eq!(sign(-4.0_f32), -1.0);
        assert_eq!(sign(0.0_f32), 0.0);
        assert_eq!(sign(9_i64), 1);
        assert_eq!(abs(-4.5_f32), 4.5);
        assert_eq!(abs(3_i32), 3);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -2.0);
        assert_eq!(round_to_int(0.49), 0);
        assert_eq!(round_to_int(0.5), 1);
        assert_eq!(ceil_to_int(1.01), 2);
        assert_eq!(floor_to_int(-1.01), -2);
    }

    #[test]
    fn test_logs() {
        assert!((log2(8.0) - 3.0).abs() < 1e-5);
        assert!((log10(1000.0) - 3.0).abs() < 1e-5);
        assert!((log_base(5.0, 125.0) - 3.0).abs() < 1e-5);
        assert!((log(E) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_inverse_trig_saturates() {
        // 1 + 1e-7 would be NaN through a raw acos
        assert!((acos(1.0000001).to_radians() - 0.0).abs() < 1e-6);
        assert!((asin(-1.0000001).to_radians() + HALF_PI).abs() < 1e-6);
        assert!((acos(-1.0).to_radians() - PI).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_scalar_and_vector() {
        assert_eq!(lerp(0.25, 0.0, 8.0), 2.0);
        let v = lerp(0.5, Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_ease_in_out_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0, 1.0, 5.0), 1.0);
        assert_eq!(ease_in_out(1.0, 1.0, 5.0), 5.0);
        assert_eq!(ease_in_out(0.5, 0.0, 1.0), 0.5);
        // Clamps out-of-range parameters
        assert_eq!(ease_in_out(2.0, 1.0, 5.0), 5.0);
    }

    #[test]
    fn test_bezier_endpoints_and_tangents() {
        let p0 = Vec3::ZERO;
        let p1 = Vec3::new(1.0, 0.0, 0.0);
        let p2 = Vec3::new(2.0, 1.0, 0.0);
        let p3 = Vec3::new(3.0, 1.0, 0.0);

        let start = bezier(p0, p1, p2, p3, 0.0);
        assert!((start.position - p0).length() < 1e-6);
        // Tangent at t=0 is 3 * (p1 - p0)
        assert!((start.tangent - (p1 - p0) * 3.0).length() < 1e-6);

        let end = bezier(p0, p1, p2, p3, 1.0);
        assert!((end.position - p3).length() < 1e-6);
        assert!((end.tangent - (p3 - p2) * 3.0).length() < 1e-6);
    }

    #[test]
    fn test_hermite_endpoints_and_tangents() {
        let p0 = Vec3::ZERO;
        let p1 = Vec3::new(4.0, 0.0, 0.0);
        let t0 = Vec3::new(0.0, 2.0, 0.0);
        let t1 = Vec3::new(0.0, -2.0, 0.0);

        let start = hermite(p0, p1, t0, t1, 0.0);
        assert!((start.position - p0).length() < 1e-6);
        assert!((start.tangent - t0).length() < 1e-6);

        let end = hermite(p0, p1, t0, t1, 1.0);
        assert!((end.position - p1).length() < 1e-6);
        assert!((end.tangent - t1).length() < 1e-6);
    }

    #[test]
    fn test_misc_facade() {
        assert!(is_zero(1e-7));
        assert!(!is_zero(1e-3));
        assert!(is_nan(f32::NAN));
        assert!(!is_nan(0.0));
        assert!(near_equal(1.0, 1.0 + 1e-7));
        assert!(real_equal(1.0, 1.1, 0.2));
        assert!((rad(180.0) - PI).abs() < 1e-6);
        assert!((deg(PI) - 180.0).abs() < 1e-4);
        assert_eq!(cubic_root(-8.0), -2.0);
        assert!((inv_sqrt(4.0) - 0.5).abs() < 1e-6);
        assert_eq!(sqr(3.0), 9.0);
        assert_eq!(iabs(-7), 7);
        assert_eq!(isign(-7), -1);
    }
}
