// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag panning for mouse pointers and single touches.
//!
//! 1) [`PanHandler::start`] records the offset between the pointer and the
//!    content origin and caches bounds for the current scale.
//! 2) Each [`PanHandler::move_to`] places the content at `pointer - offset`,
//!    holding locked axes and clamping into the cached bounds.
//! 3) [`PanHandler::stop`] clears the session and reports the last velocity.

use kurbo::{Point, Rect, Vec2};

use crate::event::{GestureEvent, GestureEvents};
use crate::state::TransformState;

/// Minimum travel, in pixels, before a touch sample moves the content.
const TOUCH_SLOP: f64 = 1.0;

/// Where a drag sample came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanSource {
    /// Mouse or pen.
    Pointer,
    /// A single finger. Sub-pixel jitter is filtered out.
    Touch,
}

/// Pan state machine: idle or panning. The session itself lives in
/// [`TransformState`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PanHandler {
    last_touch: Option<Point>,
}

impl PanHandler {
    /// Creates an idle handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a drag at `pointer` (client coordinates).
    ///
    /// Ignored when panning or zooming is disabled, while the scale is padded
    /// below `min_scale`, or when `pointer` is outside the wrapper. Points on
    /// the wrapper's edges count as inside. Ends an active pinch.
    pub fn start(
        &mut self,
        state: &mut TransformState,
        pointer: Point,
        time: u64,
        source: PanSource,
    ) -> GestureEvents {
        let mut events = GestureEvents::new();
        let config = *state.config();
        if config.pan.disabled
            || config.zoom.disabled
            || state.scale() < config.zoom.min_scale
            || !contains_inclusive(state.layout().wrapper, pointer)
        {
            return events;
        }

        if state.is_pinching() {
            state.session_mut().clear_pinch();
            events.push(GestureEvent::PinchStop);
        }
        state.refresh_bounds(config.pan.limit_to_wrapper_bounds);

        let offset = pointer - state.position();
        let was_panning = state.is_panning();
        let session = state.session_mut();
        session.is_panning = true;
        session.start_offset = Some(offset);
        session.last_pan_sample = Some((pointer, time));
        session.pan_velocity = Vec2::ZERO;
        self.last_touch = match source {
            PanSource::Touch => Some(pointer),
            PanSource::Pointer => None,
        };

        if !was_panning {
            log::debug!("pan started at ({}, {})", pointer.x, pointer.y);
            events.push(GestureEvent::PanStart);
        }
        events
    }

    /// Moves the content with the pointer.
    pub fn move_to(
        &mut self,
        state: &mut TransformState,
        pointer: Point,
        time: u64,
        source: PanSource,
    ) -> GestureEvents {
        let mut events = GestureEvents::new();
        let config = *state.config();
        if !state.is_panning() || config.pan.disabled || config.zoom.disabled {
            return events;
        }
        let Some(offset) = state.session().start_offset else {
            return events;
        };
        let (lock_x, lock_y) = (config.pan.lock_axis_x, config.pan.lock_axis_y);

        if source == PanSource::Touch {
            if let Some(last) = self.last_touch {
                let moved_x = !lock_x && (pointer.x - last.x).abs() >= TOUCH_SLOP;
                let moved_y = !lock_y && (pointer.y - last.y).abs() >= TOUCH_SLOP;
                if !moved_x && !moved_y {
                    return events;
                }
            }
        }

        let current = state.position();
        let mut candidate = pointer - offset;
        if lock_x {
            candidate.x = current.x;
        }
        if lock_y {
            candidate.y = current.y;
        }
        if candidate == current {
            return events;
        }

        let bounds = match state.bounds() {
            Some(bounds) => bounds,
            None => state.refresh_bounds(config.pan.limit_to_wrapper_bounds),
        };
        let position = bounds.clamp(candidate, config.zoom.limit_to_bounds);

        if source == PanSource::Touch {
            self.last_touch = Some(pointer);
        }
        let session = state.session_mut();
        if let Some((last, last_time)) = session.last_pan_sample {
            let dt = time.saturating_sub(last_time);
            if dt > 0 {
                session.pan_velocity = (pointer - last) / dt as f64;
            }
        }
        session.last_pan_sample = Some((pointer, time));

        if state.commit_position(position) {
            events.push(GestureEvent::Transformed);
        }
        events
    }

    /// Re-anchors an active drag after the scale changed underneath it, so the
    /// next move continues from the current position.
    pub(crate) fn rebase(&self, state: &mut TransformState) {
        if !state.is_panning() {
            return;
        }
        let limit_to_wrapper = state.config().pan.limit_to_wrapper_bounds;
        state.refresh_bounds(limit_to_wrapper);
        if let Some((pointer, _)) = state.session().last_pan_sample {
            let offset = pointer - state.position();
            state.session_mut().start_offset = Some(offset);
        }
    }

    /// Ends the drag, if any.
    pub fn stop(&mut self, state: &mut TransformState) -> GestureEvents {
        let mut events = GestureEvents::new();
        self.last_touch = None;
        if !state.is_panning() {
            return events;
        }
        let velocity = state.pan_velocity();
        state.session_mut().clear_pan();
        log::debug!("pan stopped");
        events.push(GestureEvent::PanStop { velocity });
        events
    }
}

fn contains_inclusive(rect: Rect, pt: Point) -> bool {
    let rect = rect.abs();
    (rect.x0..=rect.x1).contains(&pt.x) && (rect.y0..=rect.y1).contains(&pt.y)
}
