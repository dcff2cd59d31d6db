// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Compatibility switches for behaviour that older server builds got wrong.
//!
//! Old builds rotated about a fixed `(1, 1, 1)` axis regardless of the axis
//! argument, and measured range checks from the origin while ignoring the
//! reference point. Defaults select the corrected behaviour; deployments whose
//! persisted data depends on the old results can opt back in.

use serde::{Deserialize, Serialize};

use crate::math::Vector3;

/// Which axis `VectorPolicy::rotate_around` rotates about.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationAxisMode {
    /// Rotate about the caller-supplied axis.
    #[default]
    Supplied,
    /// Ignore the supplied axis and rotate about `Vector3::UNIT`.
    LegacyUnit,
}

/// Where `VectorPolicy::is_in_range` measures distance from.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeOrigin {
    /// Compare the receiver's own magnitude; the point is ignored.
    #[default]
    Receiver,
    /// Compare the distance between the receiver and the point.
    Point,
}

/// Persistable selection of rotation and range semantics.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorPolicy {
    /// Axis selection for rotations.
    pub rotation_axis: RotationAxisMode,
    /// Origin for range checks.
    pub range_origin: RangeOrigin,
}

impl VectorPolicy {
    /// Policy that reproduces the old server behaviour for both switches.
    pub const LEGACY: Self = Self {
        rotation_axis: RotationAxisMode::LegacyUnit,
        range_origin: RangeOrigin::Receiver,
    };

    /// Returns `true` when rotations ignore the supplied axis.
    pub fn uses_legacy_rotation(&self) -> bool {
        self.rotation_axis == RotationAxisMode::LegacyUnit
    }

    /// Rotates `v` by `radians` according to `rotation_axis`.
    pub fn rotate_around(&self, v: &Vector3, axis: &Vector3, radians: f32) -> Vector3 {
        match self.rotation_axis {
            RotationAxisMode::Supplied => v.rotated_around(axis, radians),
            RotationAxisMode::LegacyUnit => v.rotated_around_legacy(radians),
        }
    }

    /// Range check according to `range_origin`.
    pub fn is_in_range(&self, v: &Vector3, point: &Vector3, range: f32) -> bool {
        match self.range_origin {
            RangeOrigin::Receiver => v.is_in_range(range),
            RangeOrigin::Point => v.is_in_range_of(point, range),
        }
    }
}
