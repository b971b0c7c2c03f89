// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch zoom.
//!
//! The scale follows the ratio between the current finger distance and the
//! distance at pinch start, multiplied by the scale at pinch start. The
//! midpoint between the fingers is the zoom anchor.

use kurbo::Point;

use crate::controls::settle_padding;
use crate::error::GeometryError;
use crate::event::{GestureEvent, GestureEvents};
use crate::state::TransformState;
use crate::zoom_math::{SCALE_PRECISION, anchor_zoom, clamp_scale, round_to, touch_distance};

/// Pinch state machine: idle or pinching. The session itself lives in
/// [`TransformState`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PinchHandler;

impl PinchHandler {
    /// Creates an idle handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Begins a pinch with exactly two touches. Ends an active drag.
    pub fn start(&self, state: &mut TransformState, first: Point, second: Point) -> GestureEvents {
        let mut events = GestureEvents::new();
        let config = *state.config();
        if config.pinch.disabled || config.zoom.disabled {
            return events;
        }
        let distance = touch_distance(first, second);
        if !distance.is_finite() || distance <= 0.0 {
            let err = GeometryError::InvalidDistance(distance);
            log::warn!("pinch start rejected: {err}");
            return events;
        }

        if state.is_panning() {
            let velocity = state.pan_velocity();
            state.session_mut().clear_pan();
            events.push(GestureEvent::PanStop { velocity });
        }
        let scale = state.scale();
        let session = state.session_mut();
        session.is_pinching = true;
        session.pinch_start_distance = Some(distance);
        session.pinch_start_scale = Some(scale);
        session.last_distance = Some(distance);

        log::debug!("pinch started at distance {distance}, scale {scale}");
        events.push(GestureEvent::PinchStart);
        events
    }

    /// Rescales around the touch midpoint.
    pub fn move_to(
        &self,
        state: &mut TransformState,
        first: Point,
        second: Point,
    ) -> GestureEvents {
        let mut events = GestureEvents::new();
        let config = *state.config();
        if !state.is_pinching() || config.pinch.disabled || config.zoom.disabled {
            return events;
        }
        let session = state.session();
        let (Some(start_distance), Some(start_scale)) =
            (session.pinch_start_distance, session.pinch_start_scale)
        else {
            return events;
        };

        let distance = touch_distance(first, second);
        if !distance.is_finite() || distance < 0.0 {
            let err = GeometryError::InvalidDistance(distance);
            log::warn!("pinch move rejected: {err}");
            return events;
        }
        let ratio = distance / start_distance;
        let padding = config.zoom.padding;
        let new_scale = clamp_scale(
            round_to(ratio * start_scale, SCALE_PRECISION),
            config.zoom.min_scale,
            config.zoom.max_scale,
            padding.size,
            !padding.disabled,
        );
        if new_scale == state.scale() {
            return events;
        }

        let anchor = state.client_to_content(first.midpoint(second));
        let bounds = state.bounds_for_scale(new_scale, false);
        let position = match anchor_zoom(
            state.position(),
            state.scale(),
            anchor,
            new_scale,
            &bounds,
            state.gesture_limited(),
        ) {
            Ok(position) => position,
            Err(err) => {
                log::warn!("pinch zoom rejected: {err}");
                return events;
            }
        };

        if state.commit_zoom(new_scale, position, bounds) {
            events.push(GestureEvent::Transformed);
        }
        state.session_mut().last_distance = Some(distance);
        events
    }

    /// Ends the pinch and settles a padded scale back to `min_scale`.
    pub fn stop(&self, state: &mut TransformState) -> GestureEvents {
        let mut events = self.cancel(state);
        if !events.is_empty() && settle_padding(state) {
            events.push(GestureEvent::Transformed);
        }
        events
    }

    /// Ends the pinch without settling.
    pub fn cancel(&self, state: &mut TransformState) -> GestureEvents {
        let mut events = GestureEvents::new();
        if !state.is_pinching() {
            return events;
        }
        state.session_mut().clear_pinch();
        log::debug!("pinch stopped");
        events.push(GestureEvent::PinchStop);
        events
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::PinchHandler;
    use crate::config::{ViewportConfig, ZoomConfig};
    use crate::event::GestureEvent;
    use crate::state::{Layout, TransformState};

    fn state(config: ViewportConfig) -> TransformState {
        TransformState::new(
            config,
            Layout {
                wrapper: Rect::new(0.0, 0.0, 400.0, 300.0),
                content: Size::new(400.0, 300.0),
            },
        )
    }

    #[test]
    fn distance_ratio_drives_scale() {
        let mut s = state(ViewportConfig::default());
        let pinch = PinchHandler::new();
        let events = pinch.start(&mut s, Point::new(150.0, 150.0), Point::new(250.0, 150.0));
        assert_eq!(events.as_slice(), &[GestureEvent::PinchStart]);
        assert_eq!(s.session().pinch_start_distance, Some(100.0));
        assert_eq!(s.session().pinch_start_scale, Some(1.0));

        let events = pinch.move_to(&mut s, Point::new(125.0, 150.0), Point::new(275.0, 150.0));
        assert_eq!(events.as_slice(), &[GestureEvent::Transformed]);
        assert_eq!(s.scale(), 1.5);
        assert_eq!(s.session().last_distance, Some(150.0));
    }

    #[test]
    fn pinch_clamps_to_max_scale() {
        let mut s = state(ViewportConfig::default());
        let pinch = PinchHandler::new();
        pinch.start(&mut s, Point::new(199.0, 150.0), Point::new(201.0, 150.0));
        pinch.move_to(&mut s, Point::new(0.0, 150.0), Point::new(400.0, 150.0));
        assert_eq!(s.scale(), 8.0);
    }

    #[test]
    fn midpoint_anchor_is_preserved() {
        let mut s = state(ViewportConfig {
            zoom: ZoomConfig {
                limit_to_bounds: false,
                ..Default::default()
            },
            ..Default::default()
        });
        let pinch = PinchHandler::new();
        let (a, b) = (Point::new(100.0, 80.0), Point::new(160.0, 160.0));
        pinch.start(&mut s, a, b);
        let (a2, b2) = (Point::new(60.0, 40.0), Point::new(200.0, 200.0));
        let mid = a2.midpoint(b2);
        let before = s.client_to_content(mid);
        pinch.move_to(&mut s, a2, b2);
        let after = s.client_to_content(mid);
        assert!(s.scale() > 1.0);
        assert!((before.x - after.x).abs() < 1e-3);
        assert!((before.y - after.y).abs() < 1e-3);
    }

    #[test]
    fn coincident_touches_do_not_start_a_pinch() {
        let mut s = state(ViewportConfig::default());
        let pinch = PinchHandler::new();
        let p = Point::new(10.0, 10.0);
        assert!(pinch.start(&mut s, p, p).is_empty());
        assert!(!s.is_pinching());
    }

    #[test]
    fn move_without_session_is_ignored() {
        let mut s = state(ViewportConfig::default());
        let pinch = PinchHandler::new();
        let events = pinch.move_to(&mut s, Point::new(0.0, 0.0), Point::new(300.0, 0.0));
        assert!(events.is_empty());
        assert_eq!(s.scale(), 1.0);
    }

    #[test]
    fn stop_settles_padding_and_clears_session() {
        let mut s = state(ViewportConfig::default());
        let pinch = PinchHandler::new();
        pinch.start(&mut s, Point::new(100.0, 150.0), Point::new(300.0, 150.0));
        pinch.move_to(&mut s, Point::new(150.0, 150.0), Point::new(250.0, 150.0));
        assert_eq!(s.scale(), 0.55);

        let events = pinch.stop(&mut s);
        assert_eq!(
            events.as_slice(),
            &[GestureEvent::PinchStop, GestureEvent::Transformed]
        );
        assert_eq!(s.scale(), 1.0);
        let session = s.session();
        assert!(!session.is_pinching);
        assert_eq!(session.pinch_start_distance, None);
        assert_eq!(session.pinch_start_scale, None);
        assert_eq!(session.last_distance, None);
    }

    #[test]
    fn new_session_is_independent_of_the_previous_one() {
        let mut s = state(ViewportConfig::default());
        let pinch = PinchHandler::new();
        pinch.start(&mut s, Point::new(150.0, 150.0), Point::new(250.0, 150.0));
        pinch.move_to(&mut s, Point::new(100.0, 150.0), Point::new(300.0, 150.0));
        assert_eq!(s.scale(), 2.0);
        pinch.stop(&mut s);

        pinch.start(&mut s, Point::new(190.0, 150.0), Point::new(210.0, 150.0));
        assert_eq!(s.session().pinch_start_distance, Some(20.0));
        assert_eq!(s.session().pinch_start_scale, Some(2.0));
        pinch.move_to(&mut s, Point::new(185.0, 150.0), Point::new(215.0, 150.0));
        assert_eq!(s.scale(), 3.0);
    }

    #[test]
    fn non_finite_move_distance_is_rejected() {
        let mut s = state(ViewportConfig::default());
        let pinch = PinchHandler::new();
        pinch.start(&mut s, Point::new(150.0, 150.0), Point::new(250.0, 150.0));
        let events = pinch.move_to(&mut s, Point::new(0.0, 150.0), Point::new(f64::INFINITY, 150.0));
        assert!(events.is_empty());
        assert_eq!(s.scale(), 1.0);
        assert_eq!(s.session().last_distance, Some(100.0));
    }

    #[test]
    fn touches_that_meet_keep_scale_positive() {
        let mut s = state(ViewportConfig {
            zoom: ZoomConfig {
                min_scale: 0.25,
                ..Default::default()
            },
            ..Default::default()
        });
        let pinch = PinchHandler::new();
        pinch.start(&mut s, Point::new(150.0, 150.0), Point::new(250.0, 150.0));
        let meet = Point::new(200.0, 150.0);
        pinch.move_to(&mut s, meet, meet);
        assert_eq!(s.scale(), crate::SMALLEST_SCALE);
        assert!(s.wrapper_center_in_content().is_finite());

        let events = pinch.stop(&mut s);
        assert_eq!(
            events.as_slice(),
            &[GestureEvent::PinchStop, GestureEvent::Transformed]
        );
        assert_eq!(s.scale(), 0.25);
    }
}
