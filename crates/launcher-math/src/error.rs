// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Failures raised by fallible `Vector3` operations.
///
/// Both variants are raised before any component is written, so a receiver
/// that produced an error still holds its previous value.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum VectorError {
    /// Divisor was within `EPSILON` of zero.
    #[error("division by zero (divisor {divisor})")]
    DivisionByZero {
        /// The rejected divisor.
        divisor: f32,
    },
    /// The vector is null, so it has no direction to preserve.
    #[error("vector is null; direction is undefined")]
    DegenerateVector,
}
