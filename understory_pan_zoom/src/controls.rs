// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zooming that is not driven by a continuous gesture: zoom buttons, double
//! click, and the padding settle that ends a wheel or pinch gesture.

use kurbo::Point;

use crate::state::TransformState;
use crate::zoom_math::{anchor_zoom, clamp_scale};

/// Zooms to `target` (clamped to the hard scale limits, no padding) keeping
/// `anchor` fixed. Returns `true` if the transform changed.
pub(crate) fn zoom_to_point(state: &mut TransformState, target: f64, anchor: Point) -> bool {
    let zoom = state.config().zoom;
    let new_scale = clamp_scale(target, zoom.min_scale, zoom.max_scale, 0.0, false);
    if new_scale == state.scale() {
        return false;
    }
    let bounds = state.bounds_for_scale(new_scale, false);
    match anchor_zoom(
        state.position(),
        state.scale(),
        anchor,
        new_scale,
        &bounds,
        zoom.limit_to_bounds,
    ) {
        Ok(position) => state.commit_zoom(new_scale, position, bounds),
        Err(err) => {
            log::warn!("zoom to point rejected: {err}");
            false
        }
    }
}

/// Zooms by `step` percent of the current scale in `direction` (`1.0` in,
/// `-1.0` out) around `anchor`.
pub(crate) fn step_zoom(
    state: &mut TransformState,
    direction: f64,
    step: f64,
    anchor: Point,
) -> bool {
    let scale = state.scale();
    let target = scale + step * direction * (scale / 100.0);
    zoom_to_point(state, target, anchor)
}

/// Pulls a padded scale back up to `min_scale` around the wrapper centre.
pub(crate) fn settle_padding(state: &mut TransformState) -> bool {
    let zoom = state.config().zoom;
    if zoom.padding.disabled || state.scale() >= zoom.min_scale {
        return false;
    }
    let anchor = state.wrapper_center_in_content();
    zoom_to_point(state, zoom.min_scale, anchor)
}
