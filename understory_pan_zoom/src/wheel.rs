// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel zoom: turns wheel ticks into anchor-preserving scale changes.
//!
//! ## Gesture boundaries
//!
//! A wheel gesture starts with the first tick that changes the scale while the
//! handler is idle. It ends when any of these happens:
//!
//! - no effective tick arrives for [`WheelConfig::stop_delay`] milliseconds;
//! - the wheel direction reverses (the reversing tick starts a new gesture);
//! - the committed scale lands on `max_scale` or on the padded floor.
//!
//! The debounce deadline stays armed after an early stop so that a padded
//! scale is still settled back to `min_scale` once the wheel goes quiet.
//!
//! [`WheelConfig::stop_delay`]: crate::WheelConfig::stop_delay

use crate::controls::settle_padding;
use crate::event::{GestureEvent, GestureEvents};
use crate::input::WheelInput;
use crate::state::TransformState;
use crate::timer::Debounce;
use crate::zoom_math::{SCALE_PRECISION, anchor_zoom, clamp_scale, round_to};

/// Wheel zoom state machine: idle or wheeling.
#[derive(Clone, Copy, Debug, Default)]
pub struct WheelZoomHandler {
    timer: Debounce,
    wheeling: bool,
    last_direction: Option<i8>,
}

impl WheelZoomHandler {
    /// Creates an idle handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` between a wheel start and the matching stop.
    #[must_use]
    pub fn is_wheeling(&self) -> bool {
        self.wheeling
    }

    /// The gesture-end timer.
    #[must_use]
    pub fn timer(&self) -> &Debounce {
        &self.timer
    }

    /// Applies one wheel tick.
    pub fn on_wheel(&mut self, state: &mut TransformState, input: &WheelInput) -> GestureEvents {
        let mut events = GestureEvents::new();
        let config = *state.config();
        if config.wheel.disabled
            || config.zoom.disabled
            || state.is_panning()
            || state.is_pinching()
        {
            return events;
        }
        if input.ctrl_key && !config.wheel.touch_pad_enabled {
            return events;
        }
        if !input.ctrl_key && !config.wheel.wheel_enabled {
            return events;
        }

        let direction: i8 = if input.delta_y < 0.0 { 1 } else { -1 };
        let scale = state.scale();
        let target = scale + config.wheel.step * f64::from(direction) * (scale / 100.0);
        let padding = config.zoom.padding;
        let new_scale = clamp_scale(
            round_to(target, SCALE_PRECISION),
            config.zoom.min_scale,
            config.zoom.max_scale,
            padding.size,
            !padding.disabled,
        );
        if new_scale == scale {
            return events;
        }

        let bounds = state.bounds_for_scale(new_scale, config.wheel.disable_limits_on_wheel);
        let anchor = state.client_to_content(input.position);
        let position = match anchor_zoom(
            state.position(),
            scale,
            anchor,
            new_scale,
            &bounds,
            state.gesture_limited(),
        ) {
            Ok(position) => position,
            Err(err) => {
                log::warn!("wheel zoom rejected: {err}");
                return events;
            }
        };

        let reversed = self.wheeling && self.last_direction != Some(direction);
        if reversed {
            log::debug!("wheel gesture reversed direction");
            events.push(GestureEvent::WheelStop);
        }
        if !self.wheeling || reversed {
            log::debug!("wheel gesture started at scale {scale}");
            events.push(GestureEvent::WheelStart);
        }
        self.wheeling = true;
        self.last_direction = Some(direction);

        if state.commit_zoom(new_scale, position, bounds) {
            events.push(GestureEvent::Transformed);
        }

        if new_scale >= config.zoom.max_scale || new_scale <= state.scale_floor() {
            log::debug!("wheel gesture stopped at scale limit {new_scale}");
            self.end_gesture(&mut events);
        }
        self.timer.schedule(input.time, config.wheel.stop_delay);
        events
    }

    /// Fires the debounce timer if `now` has reached it.
    ///
    /// A padded scale is settled only when no pan or pinch owns the transform;
    /// a pinch settles on its own stop.
    pub fn poll(&mut self, state: &mut TransformState, now: u64) -> GestureEvents {
        let mut events = GestureEvents::new();
        if !self.timer.poll(now) {
            return events;
        }
        if self.wheeling {
            log::debug!("wheel gesture went quiet");
            self.end_gesture(&mut events);
        }
        if state.is_pinching() || state.is_panning() {
            return events;
        }
        if settle_padding(state) {
            events.push(GestureEvent::Transformed);
        }
        events
    }

    /// Ends any gesture and disarms the timer without settling.
    pub fn cancel(&mut self) -> GestureEvents {
        let mut events = GestureEvents::new();
        self.timer.cancel();
        if self.wheeling {
            self.end_gesture(&mut events);
        }
        events
    }

    fn end_gesture(&mut self, events: &mut GestureEvents) {
        self.wheeling = false;
        self.last_direction = None;
        events.push(GestureEvent::WheelStop);
    }
}
