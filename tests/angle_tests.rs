//! Angle Tests - Unit Types and Policy
//!
//! Tests for the Radian/Degree/Angle wrappers, their arithmetic, and the
//! angle-unit policy resolution.

use geomath::scalar::{HALF_PI, PI};
use geomath::{Angle, AngleUnit, Degree, Radian, angle_unit, set_angle_unit};

// ============================================================================
// Radian / Degree conversion
// ============================================================================

#[test]
fn test_round_trip_through_radians() {
    for value in [-540.0_f32, -90.0, -0.25, 0.0, 1.0, 33.3, 90.0, 720.0] {
        let original = Degree::new(value);
        let converted = Radian::from(original);
        let back = Degree::from(converted);
        assert!(
            (back.to_degrees() - value).abs() <= value.abs().max(1.0) * 1e-5,
            "round trip drifted: {} -> {}",
            value,
            back.to_degrees()
        );
    }
}

#[test]
fn test_conversion_constants() {
    assert!((Degree::new(180.0).to_radians() - PI).abs() < 1e-6);
    assert!((Degree::new(90.0).to_radians() - HALF_PI).abs() < 1e-6);
    assert!((Radian::new(PI).to_degrees() - 180.0).abs() < 1e-4);
}

#[test]
fn test_scalar_multiplication_is_linear() {
    let r = Radian::new(1.25);
    for k in [-2.0_f32, 0.0, 0.5, 3.0] {
        assert_eq!((r * k).to_radians(), 1.25 * k);
    }
    let d = Degree::new(45.0);
    assert_eq!((d * 2.0).to_degrees(), 90.0);
    assert_eq!((2.0 * d).to_degrees(), 90.0);
    assert_eq!((d / 2.0).to_degrees(), 22.5);
}

// ============================================================================
// Mixed arithmetic canonicalizes to radians
// ============================================================================

#[test]
fn test_mixed_operators_return_radians() {
    let full_turn = Radian::new(PI) + Degree::new(180.0);
    assert!((full_turn.to_radians() - 2.0 * PI).abs() < 1e-5);

    let zero = Degree::new(90.0) - Radian::new(HALF_PI);
    assert!(zero.to_radians().abs() < 1e-5);

    let mut acc = Radian::new(0.0);
    acc += Degree::new(360.0);
    acc -= Degree::new(180.0);
    assert!((acc.to_radians() - PI).abs() < 1e-5);
}

#[test]
fn test_comparisons_order_by_value() {
    assert!(Radian::new(-1.0) < Radian::new(0.0));
    assert!(Degree::new(10.0) > Degree::new(9.5));
    assert!(Radian::new(2.0) >= Radian::new(2.0));
    assert_eq!(-Radian::new(1.5), Radian::new(-1.5));
    assert_eq!(Degree::new(30.0).abs(), (-Degree::new(30.0)).abs());
}

// ============================================================================
// Angle-unit policy
// ============================================================================

// The scenarios below mutate the process-wide policy, so they all live in a
// single test function; everything else uses explicit units.
#[test]
fn test_policy_reinterprets_ambiguous_angles() {
    // Default policy is degrees
    assert_eq!(angle_unit(), AngleUnit::Degrees);

    set_angle_unit(AngleUnit::Degrees);
    let parsed = Radian::from(Angle::new(90.0));
    assert!((parsed.to_radians() - HALF_PI).abs() < 1e-5);

    // Flipping the policy reinterprets the same raw value...
    set_angle_unit(AngleUnit::Radians);
    let parsed = Radian::from(Angle::new(90.0));
    assert!((parsed.to_radians() - 90.0).abs() < 1e-5);

    // ...but never rewrites a value that was already converted
    set_angle_unit(AngleUnit::Degrees);
    assert!((parsed.to_radians() - 90.0).abs() < 1e-5);

    // Degree-directed conversion follows the policy too
    let as_degree = Degree::from(Angle::new(180.0));
    assert!((as_degree.to_degrees() - 180.0).abs() < 1e-5);

    // to_angle_units routes back through the current policy
    assert!((Radian::new(HALF_PI).to_angle_units() - 90.0).abs() < 1e-4);
    assert!((Degree::new(45.0).to_angle_units() - 45.0).abs() < 1e-5);

    set_angle_unit(AngleUnit::Degrees);
}

#[test]
fn test_explicit_unit_resolution_ignores_global() {
    let ambiguous = Angle::new(180.0);
    assert!((ambiguous.resolve(AngleUnit::Degrees).to_radians() - PI).abs() < 1e-5);
    assert!((ambiguous.resolve(AngleUnit::Radians).to_radians() - 180.0).abs() < 1e-5);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_angle_types_serialize_transparently() {
    let json = serde_json::to_string(&Radian::new(1.5)).unwrap();
    assert_eq!(json, "1.5");
    let back: Radian = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Radian::new(1.5));

    let unit: AngleUnit = serde_json::from_str("\"radians\"").unwrap();
    assert_eq!(unit, AngleUnit::Radians);
}
