// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Geometry that cannot be turned into a transform.
///
/// Gesture handlers never surface this to the caller: they log it and leave
/// the [`TransformState`](crate::TransformState) untouched. It is returned
/// directly only from the pure helpers and from
/// [`Viewport::set_transform`](crate::Viewport::set_transform).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    /// A zoom anchor was NaN or infinite, typically because a touch left the
    /// content or the scale was zero.
    NonFiniteAnchor {
        /// Horizontal anchor coordinate in content space.
        x: f64,
        /// Vertical anchor coordinate in content space.
        y: f64,
    },
    /// A pinch distance was negative, zero where a divisor was needed, or not
    /// finite.
    InvalidDistance(f64),
    /// A requested scale or position was NaN or infinite.
    NonFiniteTransform,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteAnchor { x, y } => {
                write!(f, "zoom anchor ({x}, {y}) is not a finite point")
            }
            Self::InvalidDistance(d) => write!(f, "pinch distance {d} is not usable"),
            Self::NonFiniteTransform => f.write_str("transform contains a non-finite value"),
        }
    }
}

impl core::error::Error for GeometryError {}
