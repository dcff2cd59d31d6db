// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use tracing::debug;

use crate::math::{deg_to_rad, is_float_zero, rad_to_deg};
use crate::VectorError;

/// 3D vector used for positions, velocities, and orientations.
///
/// * Components are unitless `f32` scalars; the caller decides whether a value
///   is a point or a direction and which world units apply.
/// * Mutating operations take `&mut self` and return the receiver so calls can
///   be chained; their value-returning twins leave the receiver untouched.
/// * Fallible operations check their precondition before writing any
///   component.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3 {
    /// X component.
    pub x: f32,
    /// Y component (up).
    pub y: f32,
    /// Z component (front).
    pub z: f32,
}

impl Vector3 {
    /// `(1, 1, 1)`.
    pub const UNIT: Self = Self::new(1.0, 1.0, 1.0);

    /// `(0, 0, 0)`.
    pub const NULL: Self = Self::new(0.0, 0.0, 0.0);

    /// `(0, 1, 0)`.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    /// `(0, -1, 0)`.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);

    /// `(-1, 0, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);

    /// `(1, 0, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);

    /// `(0, 0, 1)`.
    pub const FRONT: Self = Self::new(0.0, 0.0, 1.0);

    /// `(0, 0, -1)`.
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Overwrites every component with those of `other`.
    pub fn assign(&mut self, other: &Self) -> &mut Self {
        *self = *other;
        self
    }

    /// Adds `other` in place.
    pub fn add(&mut self, other: &Self) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self
    }

    /// Returns `self + other`.
    pub fn plus(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Subtracts `other` in place.
    pub fn subtract(&mut self, other: &Self) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self
    }

    /// Returns `self - other`.
    pub fn minus(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Multiplies every component by `scalar` in place.
    pub fn scale(&mut self, scalar: f32) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self
    }

    /// Returns the vector multiplied by `scalar`.
    pub fn scaled(&self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Divides every component by `divisor` in place.
    ///
    /// Computed as a multiply by `1 / divisor`. Returns
    /// [`VectorError::DivisionByZero`] without touching the receiver when the
    /// divisor is within `EPSILON` of zero.
    pub fn divide(&mut self, divisor: f32) -> Result<&mut Self, VectorError> {
        if is_float_zero(divisor) {
            debug!(divisor, "rejected near-zero vector divisor");
            return Err(VectorError::DivisionByZero { divisor });
        }
        Ok(self.scale(1.0 / divisor))
    }

    /// Returns the vector divided by `divisor`; see [`Vector3::divide`].
    pub fn divided(&self, divisor: f32) -> Result<Self, VectorError> {
        let mut ret = *self;
        ret.divide(divisor)?;
        Ok(ret)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`.
    pub fn cross_product(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared magnitude of the vector.
    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Vector length (magnitude).
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Returns `true` when every component is within `EPSILON` of zero.
    pub fn is_null(&self) -> bool {
        is_float_zero(self.x) && is_float_zero(self.y) && is_float_zero(self.z)
    }

    /// Rescales the vector in place to length `magnitude`, keeping its
    /// direction.
    ///
    /// Null vectors have no direction; they yield
    /// [`VectorError::DegenerateVector`] and are left as they were.
    pub fn set_magnitude(&mut self, magnitude: f32) -> Result<&mut Self, VectorError> {
        if self.is_null() {
            debug!(magnitude, "rejected magnitude change on null vector");
            return Err(VectorError::DegenerateVector);
        }
        // Measure the direction at unit scale so large finite components
        // cannot overflow the squared length.
        let largest = self.x.abs().max(self.y.abs()).max(self.z.abs());
        let direction = Self::new(self.x / largest, self.y / largest, self.z / largest);
        let length = direction.magnitude();
        self.x = (direction.x * magnitude) / length;
        self.y = (direction.y * magnitude) / length;
        self.z = (direction.z * magnitude) / length;
        Ok(self)
    }

    /// Returns a copy rescaled to length `magnitude`; see
    /// [`Vector3::set_magnitude`].
    pub fn with_magnitude(&self, magnitude: f32) -> Result<Self, VectorError> {
        let mut ret = *self;
        ret.set_magnitude(magnitude)?;
        Ok(ret)
    }

    /// Unit-length copy of the vector. Fails for null vectors.
    pub fn normalized(&self) -> Result<Self, VectorError> {
        self.with_magnitude(1.0)
    }

    /// Returns `true` when the vector's own magnitude is at most `range`.
    ///
    /// This measures the receiver from the origin. Use
    /// [`Vector3::is_in_range_of`] to measure from another point.
    pub fn is_in_range(&self, range: f32) -> bool {
        self.magnitude_squared() <= range * range
    }

    /// Returns `true` when `point` lies within `range` of `self`.
    pub fn is_in_range_of(&self, point: &Self, range: f32) -> bool {
        self.minus(point).magnitude_squared() <= range * range
    }

    /// Angle between the two vectors in radians, in `[0, π]`.
    ///
    /// Uses `atan2(|a × b|, a · b)`, which stays accurate near 0 and π where
    /// an `acos` formulation loses precision.
    pub fn angle_to(&self, other: &Self) -> f32 {
        self.cross_product(other).magnitude().atan2(self.dot(other))
    }

    /// Angle between the two vectors in degrees.
    pub fn angle_to_degrees(&self, other: &Self) -> f32 {
        rad_to_deg(self.angle_to(other))
    }

    /// Rotates the vector in place by `radians` about `axis`.
    ///
    /// Applies `v·cos θ + (axis × v)·sin θ + axis·(axis · v)·(1 − cos θ)`.
    /// `axis` must be unit length for the magnitude to be preserved; it is
    /// not normalised here.
    pub fn rotate_around(&mut self, axis: &Self, radians: f32) -> &mut Self {
        *self = rodrigues(self, axis, radians);
        self
    }

    /// Returns a copy rotated by `radians` about `axis`.
    pub fn rotated_around(&self, axis: &Self, radians: f32) -> Self {
        rodrigues(self, axis, radians)
    }

    /// Degree variant of [`Vector3::rotate_around`].
    pub fn rotate_around_degrees(&mut self, axis: &Self, degrees: f32) -> &mut Self {
        self.rotate_around(axis, deg_to_rad(degrees))
    }

    /// Degree variant of [`Vector3::rotated_around`].
    pub fn rotated_around_degrees(&self, axis: &Self, degrees: f32) -> Self {
        self.rotated_around(axis, deg_to_rad(degrees))
    }

    /// Legacy rotation that always uses [`Vector3::UNIT`] as the axis.
    ///
    /// `UNIT` is not unit length, so this does not preserve magnitude. Kept
    /// for callers whose stored data was produced by the old behaviour.
    pub fn rotate_around_legacy(&mut self, radians: f32) -> &mut Self {
        *self = rodrigues(self, &Self::UNIT, radians);
        self
    }

    /// Value-returning form of [`Vector3::rotate_around_legacy`].
    pub fn rotated_around_legacy(&self, radians: f32) -> Self {
        rodrigues(self, &Self::UNIT, radians)
    }

    /// Flips the sign of every component in place.
    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Returns the negated vector.
    pub fn negated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// Euclidean distance between two points.
    pub fn distance(p1: &Self, p2: &Self) -> f32 {
        p1.minus(p2).magnitude()
    }

    /// Planar distance using only `x` and `y`; `z` is ignored.
    pub fn distance_2d(p1: &Self, p2: &Self) -> f32 {
        let dx = p1.x - p2.x;
        let dy = p1.y - p2.y;
        (dx * dx + dy * dy).sqrt()
    }
}

fn rodrigues(v: &Vector3, axis: &Vector3, radians: f32) -> Vector3 {
    let (sin, cos) = radians.sin_cos();
    let along = axis.scaled(axis.dot(v) * (1.0 - cos));
    v.scaled(cos)
        .plus(&axis.cross_product(v).scaled(sin))
        .plus(&along)
}

/// Converts a 3-element `[f32; 3]` array into a `Vector3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use launcher_math::Vector3;
/// let v = Vector3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vector3 {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
