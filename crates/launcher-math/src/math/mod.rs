// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar helpers and the `Vector3` primitive.
//!
//! All operations stay in `f32` to match the server's float32 world units.

use std::f32::consts::TAU;

mod ops;
mod vector3;

pub use vector3::Vector3;

/// Global epsilon used when deciding whether a scalar is zero.
pub const EPSILON: f32 = 1e-6;

/// Returns `true` when `value` is within [`EPSILON`] of zero.
pub fn is_float_zero(value: f32) -> bool {
    value.abs() <= EPSILON
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}
