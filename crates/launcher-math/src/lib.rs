// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Launcher math: the `Vector3` primitive used for positions, velocities,
and orientations across the server.

This crate provides:
- `Vector3` with in-place and value-returning arithmetic, magnitude control,
  angles, axis rotation, and point distances.
- Scalar helpers (`EPSILON`, degree/radian conversion).
- `VectorPolicy`, which selects between corrected and legacy semantics for
  rotation and range checks.
- A small config port (`ConfigStore`/`ConfigService`) for loading the policy.

Design notes:
- Float32 throughout.
- Operations that are undefined for their input (near-zero divisor, null
  vector rescale) return `VectorError` and leave the receiver untouched.
"]

pub mod config;
mod error;
pub mod math;
mod policy;

pub use error::VectorError;
pub use math::Vector3;
pub use policy::{RangeOrigin, RotationAxisMode, VectorPolicy};
