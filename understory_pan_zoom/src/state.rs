// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::bounds::Bounds;
use crate::config::ViewportConfig;
use crate::error::GeometryError;
use crate::zoom_math::{SCALE_PRECISION, SMALLEST_SCALE, round_to};

/// Scale and translation of the content inside its wrapper.
///
/// This is what the host paints: the content is translated by `position`
/// (relative to the wrapper origin) and then scaled by `scale` about its own
/// top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Zoom factor; `1.0` is natural size.
    pub scale: f64,
    /// Translation of the content origin relative to the wrapper origin.
    pub position: Point,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        position: Point::ZERO,
    };

    /// Content space to wrapper space.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.position.to_vec2()) * Affine::scale(self.scale)
    }

    /// Maps a content-local point into wrapper coordinates.
    #[must_use]
    pub fn content_to_wrapper(&self, pt: Point) -> Point {
        Point::new(
            self.position.x + pt.x * self.scale,
            self.position.y + pt.y * self.scale,
        )
    }

    /// Maps a wrapper point into content-local coordinates.
    ///
    /// The result is not finite when `scale` is zero.
    #[must_use]
    pub fn wrapper_to_content(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.position.x) / self.scale,
            (pt.y - self.position.y) / self.scale,
        )
    }
}

/// Geometry of the host elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// The wrapper's bounding box in client coordinates.
    pub wrapper: Rect,
    /// The content's unscaled size.
    pub content: Size,
}

/// Transient per-gesture data. Only exists while a pan or pinch is active.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Session {
    /// A drag is in progress.
    pub is_panning: bool,
    /// Pointer position minus content position at drag start.
    pub start_offset: Option<Vec2>,
    /// Last accepted drag sample, used for velocity.
    pub last_pan_sample: Option<(Point, u64)>,
    /// Velocity of the last accepted drag move, in pixels per millisecond.
    pub pan_velocity: Vec2,
    /// A two-finger pinch is in progress.
    pub is_pinching: bool,
    /// Finger distance when the pinch began.
    pub pinch_start_distance: Option<f64>,
    /// Scale when the pinch began.
    pub pinch_start_scale: Option<f64>,
    /// Finger distance at the last committed pinch move.
    pub last_distance: Option<f64>,
}

impl Session {
    pub(crate) fn clear_pan(&mut self) {
        self.is_panning = false;
        self.start_offset = None;
        self.last_pan_sample = None;
        self.pan_velocity = Vec2::ZERO;
    }

    pub(crate) fn clear_pinch(&mut self) {
        self.is_pinching = false;
        self.pinch_start_distance = None;
        self.pinch_start_scale = None;
        self.last_distance = None;
    }
}

/// The mutable record every gesture handler reads and writes.
///
/// One instance belongs to exactly one viewport. All writes go through setters
/// that keep the scale inside `[min_scale - padding, max_scale]` and drop the
/// cached bounds whenever the scale changes.
#[derive(Clone, Debug)]
pub struct TransformState {
    scale: f64,
    previous_scale: f64,
    position: Point,
    bounds: Option<Bounds>,
    config: ViewportConfig,
    layout: Layout,
    session: Session,
}

impl TransformState {
    /// Creates state for `layout` at the configured initial transform.
    #[must_use]
    pub fn new(config: ViewportConfig, layout: Layout) -> Self {
        let config = config.normalized();
        let mut state = Self {
            scale: config.initial.scale,
            previous_scale: config.initial.scale,
            position: Point::new(config.initial.position_x, config.initial.position_y),
            bounds: None,
            config,
            layout,
            session: Session::default(),
        };
        state.scale = state.clamp_to_limits(state.scale, true);
        state.previous_scale = state.scale;
        state
    }

    /// Current zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Zoom factor before the last committed scale change.
    #[must_use]
    pub fn previous_scale(&self) -> f64 {
        self.previous_scale
    }

    /// Content translation relative to the wrapper origin.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current scale and position.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform {
            scale: self.scale,
            position: self.position,
        }
    }

    /// Bounds cached for the current scale, if they have been computed.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// The normalized configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Host element geometry.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Gesture session data.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.session.is_panning
    }

    /// Returns `true` while a pinch is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.session.is_pinching
    }

    /// Velocity of the last accepted drag move, or zero when not panning.
    #[must_use]
    pub fn pan_velocity(&self) -> Vec2 {
        self.session.pan_velocity
    }

    /// Translation bounds for `scale`, computed from the current layout.
    #[must_use]
    pub fn bounds_for_scale(&self, scale: f64, limit_to_wrapper: bool) -> Bounds {
        let content = Size::new(
            self.layout.content.width * scale,
            self.layout.content.height * scale,
        );
        Bounds::compute(self.layout.wrapper.size(), content, limit_to_wrapper)
    }

    /// Recomputes and caches bounds for the current scale.
    pub fn refresh_bounds(&mut self, limit_to_wrapper: bool) -> Bounds {
        let bounds = self.bounds_for_scale(self.scale, limit_to_wrapper);
        self.bounds = Some(bounds);
        bounds
    }

    /// Converts a client point into content-local coordinates at the current
    /// transform.
    #[must_use]
    pub fn client_to_content(&self, client: Point) -> Point {
        let local = client - self.layout.wrapper.origin().to_vec2();
        self.transform().wrapper_to_content(local)
    }

    /// The wrapper centre in content-local coordinates.
    #[must_use]
    pub fn wrapper_center_in_content(&self) -> Point {
        self.client_to_content(self.layout.wrapper.center())
    }

    /// Smallest scale a gesture may currently reach. Always positive.
    #[must_use]
    pub fn scale_floor(&self) -> f64 {
        (self.config.zoom.min_scale - self.config.zoom.padding.effective()).max(SMALLEST_SCALE)
    }

    /// Whether zoom positions are clamped to bounds after wheel or pinch input.
    ///
    /// Padded gestures stay free so the overshoot can be seen; they are only
    /// clamped when padding is off or wrapper-relative bounds are in use.
    #[must_use]
    pub fn gesture_limited(&self) -> bool {
        let zoom = &self.config.zoom;
        zoom.limit_to_bounds
            && (zoom.padding.disabled
                || zoom.padding.size == 0.0
                || self.config.wheel.disable_limits_on_wheel)
    }

    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub(crate) fn set_layout(&mut self, layout: Layout) {
        if self.layout != layout {
            self.layout = layout;
            self.bounds = None;
        }
    }

    /// Commits a zoom result. Returns `true` if anything changed.
    pub(crate) fn commit_zoom(&mut self, scale: f64, position: Point, bounds: Bounds) -> bool {
        let scale = self.clamp_to_limits(scale, true);
        if scale == self.scale && position == self.position {
            return false;
        }
        if scale != self.scale {
            self.previous_scale = self.scale;
            self.scale = scale;
        }
        self.position = position;
        self.bounds = Some(bounds);
        true
    }

    /// Commits a translation at the current scale. Returns `true` if it moved.
    pub(crate) fn commit_position(&mut self, position: Point) -> bool {
        if position == self.position {
            return false;
        }
        self.position = position;
        true
    }

    /// Sets scale and position directly, enforcing limits and bounds.
    pub(crate) fn set_transform(
        &mut self,
        scale: f64,
        position: Point,
    ) -> Result<bool, GeometryError> {
        if !scale.is_finite() || !position.is_finite() {
            return Err(GeometryError::NonFiniteTransform);
        }
        let scale = self.clamp_to_limits(round_to(scale, SCALE_PRECISION), false);
        let bounds = self.bounds_for_scale(scale, false);
        let position = bounds.clamp(position, self.config.zoom.limit_to_bounds);
        Ok(self.commit_zoom(scale, position, bounds))
    }

    /// Restores the configured initial transform exactly.
    pub(crate) fn restore_initial(&mut self) -> bool {
        let initial = self.config.initial;
        let scale = self.clamp_to_limits(initial.scale, true);
        let position = Point::new(initial.position_x, initial.position_y);
        let changed = scale != self.scale || position != self.position;
        self.previous_scale = self.scale;
        self.scale = scale;
        self.position = position;
        self.bounds = None;
        changed
    }

    fn clamp_to_limits(&self, scale: f64, allow_padding: bool) -> f64 {
        let zoom = &self.config.zoom;
        let floor = if allow_padding {
            self.scale_floor()
        } else {
            zoom.min_scale
        };
        // NaN input lands on the floor.
        scale.max(floor).min(zoom.max_scale)
    }
}
