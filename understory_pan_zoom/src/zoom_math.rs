// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale arithmetic shared by every zooming input.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round` and `sqrt`
use kurbo::Point;

use crate::bounds::Bounds;
use crate::error::GeometryError;

/// Decimal places kept on every committed scale.
pub const SCALE_PRECISION: u32 = 2;

/// Smallest scale ever committed, the finest step [`SCALE_PRECISION`] can
/// represent. Padding never lowers the floor below it.
pub const SMALLEST_SCALE: f64 = 0.01;

/// Rounds `value` to `decimals` places.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = (0..decimals).fold(1.0_f64, |f, _| f * 10.0);
    (value * factor).round() / factor
}

/// Clamps a candidate scale into `[min_scale - padding, max_scale]`.
///
/// The padding only lowers the floor when `padding_enabled` is set, and the
/// floor never drops below [`SMALLEST_SCALE`]. In-range
/// candidates are rounded to [`SCALE_PRECISION`] so float noise never reads as
/// a scale change.
#[must_use]
pub fn clamp_scale(
    candidate: f64,
    min_scale: f64,
    max_scale: f64,
    padding: f64,
    padding_enabled: bool,
) -> f64 {
    let floor = (min_scale - if padding_enabled { padding } else { 0.0 }).max(SMALLEST_SCALE);
    if candidate >= max_scale {
        max_scale
    } else if candidate <= floor {
        floor
    } else {
        round_to(candidate, SCALE_PRECISION)
    }
}

/// Computes the position that keeps `anchor` visually fixed while the scale
/// goes from `scale` to `new_scale`.
///
/// `anchor` is in content-local (unscaled) coordinates. The result is clamped
/// into `bounds` when `limited`.
pub fn anchor_zoom(
    position: Point,
    scale: f64,
    anchor: Point,
    new_scale: f64,
    bounds: &Bounds,
    limited: bool,
) -> Result<Point, GeometryError> {
    if !anchor.is_finite() {
        return Err(GeometryError::NonFiniteAnchor {
            x: anchor.x,
            y: anchor.y,
        });
    }
    let diff = new_scale - scale;
    let moved = Point::new(position.x - anchor.x * diff, position.y - anchor.y * diff);
    Ok(bounds.clamp(moved, limited))
}

/// Distance between two touch points.
#[must_use]
pub fn touch_distance(a: Point, b: Point) -> f64 {
    let d = b - a;
    (d.x * d.x + d.y * d.y).sqrt()
}
