// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fixture-driven validation for `Vector3`.
//!
//! Keeps arithmetic, magnitude, angle, rotation, and distance behaviour pinned
//! to the documented values in `fixtures/vector3-fixtures.json`.

#![allow(missing_docs)]
use once_cell::sync::Lazy;
use serde::Deserialize;

use launcher_math::{Vector3, VectorError};

static RAW_FIXTURES: &str = include_str!("fixtures/vector3-fixtures.json");

static FIXTURES: Lazy<Vector3Fixtures> = Lazy::new(|| {
    let fixtures: Vector3Fixtures =
        serde_json::from_str(RAW_FIXTURES).expect("failed to parse vector3 fixtures");
    fixtures.validate();
    fixtures
});

#[derive(Debug, Deserialize)]
struct Vector3Fixtures {
    #[serde(default)]
    tolerance: Tolerance,
    plus: Vec<BinaryFixture>,
    minus: Vec<BinaryFixture>,
    dot: Vec<ScalarBinaryFixture>,
    cross: Vec<BinaryFixture>,
    magnitude: Vec<MagnitudeFixture>,
    with_magnitude: Vec<WithMagnitudeFixture>,
    divided: Vec<DividedFixture>,
    angle_degrees: Vec<ScalarBinaryFixture>,
    rotate_degrees: Vec<RotateFixture>,
    distance: Vec<ScalarBinaryFixture>,
    distance_2d: Vec<ScalarBinaryFixture>,
}

impl Vector3Fixtures {
    fn validate(&self) {
        fn ensure<T>(name: &str, slice: &[T]) {
            assert!(
                !slice.is_empty(),
                "vector3 fixtures set '{name}' must not be empty (len={})",
                slice.len()
            );
        }

        ensure("plus", &self.plus);
        ensure("minus", &self.minus);
        ensure("dot", &self.dot);
        ensure("cross", &self.cross);
        ensure("magnitude", &self.magnitude);
        ensure("with_magnitude", &self.with_magnitude);
        ensure("divided", &self.divided);
        ensure("angle_degrees", &self.angle_degrees);
        ensure("rotate_degrees", &self.rotate_degrees);
        ensure("distance", &self.distance);
        ensure("distance_2d", &self.distance_2d);
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Tolerance {
    #[serde(default = "Tolerance::default_absolute")]
    absolute: f32,
    #[serde(default = "Tolerance::default_relative")]
    relative: f32,
}

impl Tolerance {
    const fn default_absolute() -> f32 {
        1e-6
    }

    const fn default_relative() -> f32 {
        1e-6
    }

    fn allowed_error(&self, reference: f32) -> f32 {
        self.absolute.max(self.relative * reference.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::default_absolute(),
            relative: Self::default_relative(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BinaryFixture {
    a: [f32; 3],
    b: [f32; 3],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct ScalarBinaryFixture {
    a: [f32; 3],
    b: [f32; 3],
    expected: f32,
}

#[derive(Debug, Deserialize)]
struct MagnitudeFixture {
    value: [f32; 3],
    expected: f32,
}

/// `expected: null` marks a degenerate input that must be rejected.
#[derive(Debug, Deserialize)]
struct WithMagnitudeFixture {
    value: [f32; 3],
    magnitude: f32,
    expected: Option<[f32; 3]>,
}

/// `expected: null` marks a divisor that must be rejected.
#[derive(Debug, Deserialize)]
struct DividedFixture {
    value: [f32; 3],
    divisor: f32,
    expected: Option<[f32; 3]>,
}

#[derive(Debug, Deserialize)]
struct RotateFixture {
    value: [f32; 3],
    axis: [f32; 3],
    degrees: f32,
    expected: [f32; 3],
}

fn assert_scalar(actual: f32, expected: f32, tol: &Tolerance, ctx: &str) {
    let diff = (actual - expected).abs();
    let allowed = tol.allowed_error(expected);
    assert!(
        diff <= allowed,
        "{ctx}: expected {expected}, got {actual} (diff {diff} > {allowed})"
    );
}

fn assert_vector3(actual: Vector3, expected: [f32; 3], tol: &Tolerance, ctx: &str) {
    let arr = actual.to_array();
    for (i, (a, e)) in arr.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        let allowed = tol.allowed_error(*e);
        assert!(
            diff <= allowed,
            "{ctx}[{i}]: expected {e}, got {a} (diff {diff} > {allowed})"
        );
    }
}

#[test]
fn arithmetic_fixtures_match() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.plus {
        let actual = Vector3::from(fix.a).plus(&Vector3::from(fix.b));
        assert_vector3(actual, fix.expected, tol, &format!("plus a={:?} b={:?}", fix.a, fix.b));
    }

    for fix in &FIXTURES.minus {
        let actual = Vector3::from(fix.a).minus(&Vector3::from(fix.b));
        assert_vector3(actual, fix.expected, tol, &format!("minus a={:?} b={:?}", fix.a, fix.b));
    }

    for fix in &FIXTURES.dot {
        let actual = Vector3::from(fix.a).dot(&Vector3::from(fix.b));
        assert_scalar(actual, fix.expected, tol, &format!("dot a={:?} b={:?}", fix.a, fix.b));
    }

    for fix in &FIXTURES.cross {
        let actual = Vector3::from(fix.a).cross_product(&Vector3::from(fix.b));
        assert_vector3(actual, fix.expected, tol, &format!("cross a={:?} b={:?}", fix.a, fix.b));
    }
}

#[test]
fn magnitude_fixtures_match() {
    let tol = &FIXTURES.tolerance;
    for (idx, fix) in FIXTURES.magnitude.iter().enumerate() {
        let actual = Vector3::from(fix.value).magnitude();
        assert_scalar(
            actual,
            fix.expected,
            tol,
            &format!("magnitude#[{idx}] value={:?}", fix.value),
        );
    }

    for (idx, fix) in FIXTURES.with_magnitude.iter().enumerate() {
        let ctx = format!("with_magnitude#[{idx}] value={:?}", fix.value);
        let actual = Vector3::from(fix.value).with_magnitude(fix.magnitude);
        match (actual, fix.expected) {
            (Ok(v), Some(exp)) => assert_vector3(v, exp, tol, &ctx),
            (Err(VectorError::DegenerateVector), None) => {}
            (other, exp) => panic!("{ctx}: expected {exp:?}, got {other:?}"),
        }
    }
}

#[test]
fn division_fixtures_match() {
    let tol = &FIXTURES.tolerance;
    for (idx, fix) in FIXTURES.divided.iter().enumerate() {
        let ctx = format!("divided#[{idx}] value={:?} divisor={}", fix.value, fix.divisor);
        let actual = Vector3::from(fix.value).divided(fix.divisor);
        match (actual, fix.expected) {
            (Ok(v), Some(exp)) => assert_vector3(v, exp, tol, &ctx),
            (Err(VectorError::DivisionByZero { divisor }), None) => {
                assert_eq!(divisor, fix.divisor, "{ctx}");
            }
            (other, exp) => panic!("{ctx}: expected {exp:?}, got {other:?}"),
        }
    }
}

#[test]
fn angle_and_rotation_fixtures_match() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.angle_degrees {
        let actual = Vector3::from(fix.a).angle_to_degrees(&Vector3::from(fix.b));
        assert_scalar(
            actual,
            fix.expected,
            tol,
            &format!("angle_degrees a={:?} b={:?}", fix.a, fix.b),
        );
    }

    for fix in &FIXTURES.rotate_degrees {
        let actual =
            Vector3::from(fix.value).rotated_around_degrees(&Vector3::from(fix.axis), fix.degrees);
        assert_vector3(
            actual,
            fix.expected,
            tol,
            &format!(
                "rotate_degrees value={:?} axis={:?} degrees={}",
                fix.value, fix.axis, fix.degrees
            ),
        );
    }
}

#[test]
fn distance_fixtures_match() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.distance {
        let actual = Vector3::distance(&Vector3::from(fix.a), &Vector3::from(fix.b));
        assert_scalar(actual, fix.expected, tol, &format!("distance a={:?} b={:?}", fix.a, fix.b));
    }

    for fix in &FIXTURES.distance_2d {
        let actual = Vector3::distance_2d(&Vector3::from(fix.a), &Vector3::from(fix.b));
        assert_scalar(
            actual,
            fix.expected,
            tol,
            &format!("distance_2d a={:?} b={:?}", fix.a, fix.b),
        );
    }
}
