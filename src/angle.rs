//! Angle Types
//!
//! Strongly-typed angle wrappers that keep radians and degrees from being
//! confused at compile time. [`Radian`] and [`Degree`] convert into each other
//! freely (and exactly, up to float rounding); a bare `f32` never converts
//! implicitly - construction always goes through an explicit `new`.
//!
//! Mixed arithmetic canonicalizes to radians: any operator combining a
//! `Radian` and a `Degree` converts the degree operand and yields a `Radian`.
//!
//! [`Angle`] is the odd one out: it wraps a value whose unit is whatever the
//! angle-unit policy says *at the moment of conversion*. It exists for parsing
//! authored content where the unit is ambiguous, and should not be stored.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

use crate::scalar::{DEG_PER_RAD, RAD_PER_DEG};

/// An angle measured in radians.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radian(f32);

/// An angle measured in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degree(f32);

impl Radian {
    /// Wraps a raw radian value.
    pub const fn new(radians: f32) -> Self {
        Self(radians)
    }

    /// The wrapped value in radians.
    pub const fn to_radians(self) -> f32 {
        self.0
    }

    /// The wrapped value converted to degrees.
    pub fn to_degrees(self) -> f32 {
        self.0 * DEG_PER_RAD
    }

    /// The wrapped value converted to the current global angle unit.
    pub fn to_angle_units(self) -> f32 {
        angle_unit().radians_to_units(self.0)
    }

    /// Absolute value.
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl Degree {
    /// Wraps a raw degree value.
    pub const fn new(degrees: f32) -> Self {
        Self(degrees)
    }

    /// The wrapped value in degrees.
    pub const fn to_degrees(self) -> f32 {
        self.0
    }

    /// The wrapped value converted to radians.
    pub fn to_radians(self) -> f32 {
        self.0 * RAD_PER_DEG
    }

    /// The wrapped value converted to the current global angle unit.
    pub fn to_angle_units(self) -> f32 {
        angle_unit().degrees_to_units(self.0)
    }

    /// Absolute value.
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl From<Degree> for Radian {
    fn from(d: Degree) -> Self {
        Radian(d.to_radians())
    }
}

impl From<Radian> for Degree {
    fn from(r: Radian) -> Self {
        Degree(r.to_degrees())
    }
}

// --- Radian arithmetic ------------------------------------------------------

impl Add for Radian {
    type Output = Radian;
    fn add(self, rhs: Radian) -> Radian {
        Radian(self.0 + rhs.0)
    }
}

impl Sub for Radian {
    type Output = Radian;
    fn sub(self, rhs: Radian) -> Radian {
        Radian(self.0 - rhs.0)
    }
}

impl Neg for Radian {
    type Output = Radian;
    fn neg(self) -> Radian {
        Radian(-self.0)
    }
}

impl Mul<f32> for Radian {
    type Output = Radian;
    fn mul(self, rhs: f32) -> Radian {
        Radian(self.0 * rhs)
    }
}

impl Mul<Radian> for f32 {
    type Output = Radian;
    fn mul(self, rhs: Radian) -> Radian {
        Radian(self * rhs.0)
    }
}

impl Div<f32> for Radian {
    type Output = Radian;
    fn div(self, rhs: f32) -> Radian {
        Radian(self.0 / rhs)
    }
}

impl AddAssign for Radian {
    fn add_assign(&mut self, rhs: Radian) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Radian {
    fn sub_assign(&mut self, rhs: Radian) {
        self.0 -= rhs.0;
    }
}

impl MulAssign<f32> for Radian {
    fn mul_assign(&mut self, rhs: f32) {
        self.0 *= rhs;
    }
}

impl DivAssign<f32> for Radian {
    fn div_assign(&mut self, rhs: f32) {
        self.0 /= rhs;
    }
}

// --- Degree arithmetic ------------------------------------------------------

impl Add for Degree {
    type Output = Degree;
    fn add(self, rhs: Degree) -> Degree {
        Degree(self.0 + rhs.0)
    }
}

impl Sub for Degree {
    type Output = Degree;
    fn sub(self, rhs: Degree) -> Degree {
        Degree(self.0 - rhs.0)
    }
}

impl Neg for Degree {
    type Output = Degree;
    fn neg(self) -> Degree {
        Degree(-self.0)
    }
}

impl Mul<f32> for Degree {
    type Output = Degree;
    fn mul(self, rhs: f32) -> Degree {
        Degree(self.0 * rhs)
    }
}

impl Mul<Degree> for f32 {
    type Output = Degree;
    fn mul(self, rhs: Degree) -> Degree {
        Degree(self * rhs.0)
    }
}

impl Div<f32> for Degree {
    type Output = Degree;
    fn div(self, rhs: f32) -> Degree {
        Degree(self.0 / rhs)
    }
}

impl AddAssign for Degree {
    fn add_assign(&mut self, rhs: Degree) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Degree {
    fn sub_assign(&mut self, rhs: Degree) {
        self.0 -= rhs.0;
    }
}

impl MulAssign<f32> for Degree {
    fn mul_assign(&mut self, rhs: f32) {
        self.0 *= rhs;
    }
}

impl DivAssign<f32> for Degree {
    fn div_assign(&mut self, rhs: f32) {
        self.0 /= rhs;
    }
}

// --- Mixed arithmetic: the degree operand converts, radians win -------------

impl Add<Degree> for Radian {
    type Output = Radian;
    fn add(self, rhs: Degree) -> Radian {
        Radian(self.0 + rhs.to_radians())
    }
}

impl Sub<Degree> for Radian {
    type Output = Radian;
    fn sub(self, rhs: Degree) -> Radian {
        Radian(self.0 - rhs.to_radians())
    }
}

impl Add<Radian> for Degree {
    type Output = Radian;
    fn add(self, rhs: Radian) -> Radian {
        Radian(self.to_radians() + rhs.0)
    }
}

impl Sub<Radian> for Degree {
    type Output = Radian;
    fn sub(self, rhs: Radian) -> Radian {
        Radian(self.to_radians() - rhs.0)
    }
}

impl AddAssign<Degree> for Radian {
    fn add_assign(&mut self, rhs: Degree) {
        self.0 += rhs.to_radians();
    }
}

impl SubAssign<Degree> for Radian {
    fn sub_assign(&mut self, rhs: Degree) {
        self.0 -= rhs.to_radians();
    }
}

// --- Angle-unit policy ------------------------------------------------------

/// The unit assumed for ambiguous angle values.
///
/// Parsing contexts that know their unit should carry an `AngleUnit` value and
/// use its conversion methods directly; the process-wide policy behind
/// [`set_angle_unit`] / [`angle_unit`] is a convenience for simple
/// single-threaded setups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// Raw values are radians.
    Radians,
    /// Raw values are degrees.
    Degrees,
}

impl Default for AngleUnit {
    /// Degrees, matching the content-authoring convention.
    fn default() -> Self {
        AngleUnit::Degrees
    }
}

impl AngleUnit {
    /// Converts a value in this unit to radians.
    pub fn units_to_radians(self, units: f32) -> f32 {
        match self {
            AngleUnit::Radians => units,
            AngleUnit::Degrees => units * RAD_PER_DEG,
        }
    }

    /// Converts radians to a value in this unit.
    pub fn radians_to_units(self, radians: f32) -> f32 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians * DEG_PER_RAD,
        }
    }

    /// Converts a value in this unit to degrees.
    pub fn units_to_degrees(self, units: f32) -> f32 {
        match self {
            AngleUnit::Radians => units * DEG_PER_RAD,
            AngleUnit::Degrees => units,
        }
    }

    /// Converts degrees to a value in this unit.
    pub fn degrees_to_units(self, degrees: f32) -> f32 {
        match self {
            AngleUnit::Radians => degrees * RAD_PER_DEG,
            AngleUnit::Degrees => degrees,
        }
    }
}

const UNIT_RADIANS: u8 = 0;
const UNIT_DEGREES: u8 = 1;

// Process-wide policy. Read-mostly; reads and writes are individually atomic,
// so a policy change is visible to subsequent conversions without tearing.
// Conversions are eager: values already converted are never reinterpreted.
static ANGLE_UNIT: AtomicU8 = AtomicU8::new(UNIT_DEGREES);

/// Sets the process-wide angle unit used for subsequent [`Angle`] conversions.
pub fn set_angle_unit(unit: AngleUnit) {
    let raw = match unit {
        AngleUnit::Radians => UNIT_RADIANS,
        AngleUnit::Degrees => UNIT_DEGREES,
    };
    ANGLE_UNIT.store(raw, Ordering::Relaxed);
}

/// Returns the process-wide angle unit. Defaults to [`AngleUnit::Degrees`].
pub fn angle_unit() -> AngleUnit {
    match ANGLE_UNIT.load(Ordering::Relaxed) {
        UNIT_RADIANS => AngleUnit::Radians,
        _ => AngleUnit::Degrees,
    }
}

/// Converts a value in the current global angle unit to radians.
pub fn units_to_radians(units: f32) -> f32 {
    angle_unit().units_to_radians(units)
}

/// Converts radians to the current global angle unit.
pub fn radians_to_units(radians: f32) -> f32 {
    angle_unit().radians_to_units(radians)
}

/// Converts a value in the current global angle unit to degrees.
pub fn units_to_degrees(units: f32) -> f32 {
    angle_unit().units_to_degrees(units)
}

/// Converts degrees to the current global angle unit.
pub fn degrees_to_units(degrees: f32) -> f32 {
    angle_unit().degrees_to_units(degrees)
}

// --- Angle ------------------------------------------------------------------

/// An angle value in the *current* angle unit.
///
/// The unit is resolved when the value is converted, not when it is
/// constructed: the same `Angle` yields different radians before and after a
/// [`set_angle_unit`] call. Use it transiently while parsing ambiguous
/// external data and convert to [`Radian`] or [`Degree`] immediately; never
/// store it long-term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f32);

impl Angle {
    /// Wraps a raw angle value in the (not yet resolved) current unit.
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// The raw, unit-less value.
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Resolves against an explicit unit, bypassing the global policy.
    pub fn resolve(self, unit: AngleUnit) -> Radian {
        Radian(unit.units_to_radians(self.0))
    }
}

impl From<Angle> for Radian {
    /// Resolves against the global policy at conversion time.
    fn from(a: Angle) -> Radian {
        Radian(units_to_radians(a.0))
    }
}

impl From<Angle> for Degree {
    /// Resolves against the global policy at conversion time.
    fn from(a: Angle) -> Degree {
        Degree(units_to_degrees(a.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::PI;

    #[test]
    fn test_degree_radian_round_trip() {
        for deg in [-720.0, -90.0, 0.0, 30.0, 45.0, 180.0, 359.5, 1080.0] {
            let d = Degree::new(deg);
            let back = Degree::from(Radian::from(d));
            assert!(
                (back.to_degrees() - deg).abs() < 1e-3,
                "round trip failed for {} degrees: got {}",
                deg,
                back.to_degrees()
            );
        }
    }

    #[test]
    fn test_radian_scalar_multiply_is_linear() {
        let r = Radian::new(0.75);
        for k in [-3.0, 0.0, 0.5, 2.0, 10.0] {
            assert_eq!((r * k).to_radians(), 0.75 * k);
            assert_eq!((k * r).to_radians(), k * 0.75);
        }
    }

    #[test]
    fn test_mixed_arithmetic_yields_radians() {
        let sum = Radian::new(PI) + Degree::new(180.0);
        assert!((sum.to_radians() - 2.0 * PI).abs() < 1e-5);

        let sum = Degree::new(90.0) + Radian::new(0.0);
        assert!((sum.to_radians() - PI / 2.0).abs() < 1e-6);

        let diff = Degree::new(180.0) - Radian::new(PI);
        assert!(diff.to_radians().abs() < 1e-6);
    }

    #[test]
    fn test_compound_assignment() {
        let mut r = Radian::new(1.0);
        r += Radian::new(0.5);
        r -= Degree::new(0.0);
        r *= 2.0;
        r /= 3.0;
        assert!((r.to_radians() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ordering() {
        assert!(Radian::new(1.0) < Radian::new(2.0));
        assert!(Degree::new(-5.0) <= Degree::new(-5.0));
        assert!(Radian::new(3.0) > Radian::new(-3.0));
    }

    #[test]
    fn test_explicit_unit_resolution() {
        // Explicit units bypass the global policy entirely.
        let a = Angle::new(90.0);
        assert!((a.resolve(AngleUnit::Degrees).to_radians() - PI / 2.0).abs() < 1e-6);
        assert!((a.resolve(AngleUnit::Radians).to_radians() - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_unit_conversion_methods() {
        assert!((AngleUnit::Degrees.units_to_radians(180.0) - PI).abs() < 1e-6);
        assert!((AngleUnit::Degrees.radians_to_units(PI) - 180.0).abs() < 1e-4);
        assert_eq!(AngleUnit::Radians.units_to_radians(2.5), 2.5);
        assert!((AngleUnit::Radians.units_to_degrees(PI) - 180.0).abs() < 1e-4);
        assert!((AngleUnit::Radians.degrees_to_units(180.0) - PI).abs() < 1e-6);
        assert_eq!(AngleUnit::Degrees.degrees_to_units(42.0), 42.0);
    }
}
