// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch of raw input to the gesture handlers.
//!
//! - Wheel events go to [`WheelZoomHandler`].
//! - Pointer events go to [`PanHandler`].
//! - Touch events are split by touch count: one touch pans, two touches pinch,
//!   any other count is ignored.
//!
//! Pan and pinch never run together: each handler's start ends the other's
//! session first.

use kurbo::Point;

use crate::config::DoubleClickMode;
use crate::controls::step_zoom;
use crate::event::{GestureEvent, GestureEvents};
use crate::input::{InputEvent, PointerInput, TouchInput};
use crate::pan::{PanHandler, PanSource};
use crate::pinch::PinchHandler;
use crate::state::TransformState;
use crate::wheel::WheelZoomHandler;

/// Owns one instance of each gesture handler.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureRouter {
    wheel: WheelZoomHandler,
    pan: PanHandler,
    pinch: PinchHandler,
}

impl GestureRouter {
    /// Creates a router with every handler idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The wheel handler.
    #[must_use]
    pub fn wheel(&self) -> &WheelZoomHandler {
        &self.wheel
    }

    /// Routes one input event.
    pub fn route(&mut self, state: &mut TransformState, event: &InputEvent<'_>) -> GestureEvents {
        match *event {
            InputEvent::Wheel(ref input) => self.wheel.on_wheel(state, input),
            InputEvent::PointerDown(PointerInput { position, time }) => {
                self.pan.start(state, position, time, PanSource::Pointer)
            }
            InputEvent::PointerMove(PointerInput { position, time }) => {
                self.pan.move_to(state, position, time, PanSource::Pointer)
            }
            InputEvent::PointerUp(_) | InputEvent::PointerCancel(_) => self.pan.stop(state),
            InputEvent::DoubleClick(PointerInput { position, .. }) => {
                self.double_click(state, position)
            }
            InputEvent::TouchStart(TouchInput { touches, time }) => match *touches {
                [touch] => self.pan.start(state, touch, time, PanSource::Touch),
                [first, second] => self.pinch.start(state, first, second),
                _ => GestureEvents::new(),
            },
            InputEvent::TouchMove(TouchInput { touches, time }) => match *touches {
                [touch] => self.pan.move_to(state, touch, time, PanSource::Touch),
                [first, second] => self.pinch.move_to(state, first, second),
                _ => GestureEvents::new(),
            },
            InputEvent::TouchEnd(TouchInput { touches, .. }) => {
                let mut events = GestureEvents::new();
                if touches.len() < 2 {
                    events.extend(self.pinch.stop(state));
                }
                if touches.is_empty() {
                    events.extend(self.pan.stop(state));
                }
                events
            }
        }
    }

    /// Advances the wheel debounce timer.
    pub fn tick(&mut self, state: &mut TransformState, now: u64) -> GestureEvents {
        self.wheel.poll(state, now)
    }

    /// Ends every active gesture without settling padding.
    pub fn end_all(&mut self, state: &mut TransformState) -> GestureEvents {
        let mut events = self.wheel.cancel();
        events.extend(self.pan.stop(state));
        events.extend(self.pinch.cancel(state));
        events
    }

    /// Ends all gestures and restores the initial transform.
    ///
    /// Does nothing while zooming is disabled.
    pub fn reset(&mut self, state: &mut TransformState) -> GestureEvents {
        if state.config().zoom.disabled {
            return GestureEvents::new();
        }
        let mut events = self.end_all(state);
        if state.restore_initial() {
            events.push(GestureEvent::Transformed);
        }
        events
    }

    /// Zoom button step: `direction` is `1.0` to zoom in, `-1.0` to zoom out.
    pub fn zoom_step(&mut self, state: &mut TransformState, direction: f64) -> GestureEvents {
        let mut events = GestureEvents::new();
        let config = *state.config();
        if config.zoom.disabled || config.zoom_buttons.disabled {
            return events;
        }
        let anchor = state.wrapper_center_in_content();
        if step_zoom(state, direction, config.zoom_buttons.step, anchor) {
            self.pan.rebase(state);
            events.push(GestureEvent::Transformed);
        }
        events
    }

    fn double_click(&mut self, state: &mut TransformState, position: Point) -> GestureEvents {
        let config = *state.config();
        if config.zoom.disabled || config.double_click.disabled {
            return GestureEvents::new();
        }
        let direction = match config.double_click.mode {
            DoubleClickMode::Reset => return self.reset(state),
            DoubleClickMode::ZoomIn => 1.0,
            DoubleClickMode::ZoomOut => -1.0,
        };
        let mut events = GestureEvents::new();
        let anchor = state.client_to_content(position);
        if step_zoom(state, direction, config.double_click.step, anchor) {
            self.pan.rebase(state);
            events.push(GestureEvent::Transformed);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::GestureRouter;
    use crate::config::{
        DoubleClickConfig, DoubleClickMode, InitialTransform, ViewportConfig, ZoomButtonConfig,
        ZoomConfig,
    };
    use crate::event::GestureEvent;
    use crate::input::{InputEvent, PointerInput, TouchInput, WheelInput};
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

    fn pointer(x: f64, y: f64, time: u64) -> PointerInput {
        PointerInput {
            position: Point::new(x, y),
            time,
        }
    }

    #[test]
    fn touch_count_selects_handler() {
        let mut s = state(ViewportConfig::default());
        let mut router = GestureRouter::new();

        let one = [Point::new(100.0, 100.0)];
        let events = router.route(&mut s, &InputEvent::TouchStart(TouchInput {
            touches: &one,
            time: 0,
        }));
        assert_eq!(events.as_slice(), &[GestureEvent::PanStart]);

        let two = [Point::new(150.0, 150.0), Point::new(250.0, 150.0)];
        let events = router.route(&mut s, &InputEvent::TouchStart(TouchInput {
            touches: &two,
            time: 5,
        }));
        assert!(matches!(events[0], GestureEvent::PanStop { .. }));
        assert_eq!(events[1], GestureEvent::PinchStart);
        assert!(!s.is_panning());
        assert!(s.is_pinching());

        let three = [Point::ZERO, Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        let events = router.route(&mut s, &InputEvent::TouchMove(TouchInput {
            touches: &three,
            time: 6,
        }));
        assert!(events.is_empty());
        assert!(s.is_pinching());

        let events = router.route(&mut s, &InputEvent::TouchEnd(TouchInput {
            touches: &one,
            time: 7,
        }));
        assert_eq!(events.as_slice(), &[GestureEvent::PinchStop]);
        assert!(!s.is_pinching());
    }

    #[test]
    fn pointer_down_ends_pinch() {
        let mut s = state(ViewportConfig::default());
        let mut router = GestureRouter::new();
        let two = [Point::new(150.0, 150.0), Point::new(250.0, 150.0)];
        router.route(&mut s, &InputEvent::TouchStart(TouchInput {
            touches: &two,
            time: 0,
        }));
        let events = router.route(&mut s, &InputEvent::PointerDown(pointer(20.0, 20.0, 1)));
        assert_eq!(
            events.as_slice(),
            &[GestureEvent::PinchStop, GestureEvent::PanStart]
        );
        assert!(s.is_panning() && !s.is_pinching());
    }

    #[test]
    fn wheel_is_ignored_while_panning() {
        let mut s = state(ViewportConfig::default());
        let mut router = GestureRouter::new();
        router.route(&mut s, &InputEvent::PointerDown(pointer(20.0, 20.0, 0)));
        let wheel = WheelInput {
            delta_y: -1.0,
            ctrl_key: false,
            position: Point::new(20.0, 20.0),
            time: 1,
        };
        assert!(router.route(&mut s, &InputEvent::Wheel(wheel)).is_empty());
        assert_eq!(s.scale(), 1.0);
    }

    #[test]
    fn double_click_modes() {
        let mut s = state(ViewportConfig::default());
        let mut router = GestureRouter::new();
        let click = InputEvent::DoubleClick(pointer(100.0, 100.0, 0));
        assert_eq!(
            router.route(&mut s, &click).as_slice(),
            &[GestureEvent::Transformed]
        );
        assert_eq!(s.scale(), 1.7);

        let mut s = state(ViewportConfig {
            initial: InitialTransform {
                scale: 3.0,
                ..Default::default()
            },
            double_click: DoubleClickConfig {
                mode: DoubleClickMode::Reset,
                ..Default::default()
            },
            ..Default::default()
        });
        s.set_transform(5.0, Point::new(-300.0, -300.0)).unwrap();
        router.route(&mut s, &click);
        assert_eq!(s.scale(), 3.0);
        assert_eq!(s.position(), Point::ZERO);

        let mut s = state(ViewportConfig {
            double_click: DoubleClickConfig {
                disabled: true,
                ..Default::default()
            },
            ..Default::default()
        });
        assert!(router.route(&mut s, &click).is_empty());
    }

    #[test]
    fn zoom_buttons_step_around_center() {
        let mut s = state(ViewportConfig::default());
        let mut router = GestureRouter::new();
        assert_eq!(
            router.zoom_step(&mut s, 1.0).as_slice(),
            &[GestureEvent::Transformed]
        );
        assert_eq!(s.scale(), 1.7);
        assert!((s.position().x - -140.0).abs() < 1e-9);
        assert!((s.position().y - -105.0).abs() < 1e-9);

        let mut s = state(ViewportConfig {
            zoom_buttons: ZoomButtonConfig {
                disabled: true,
                ..Default::default()
            },
            ..Default::default()
        });
        assert!(router.zoom_step(&mut s, 1.0).is_empty());
    }

    #[test]
    fn reset_is_a_no_op_when_zoom_is_disabled() {
        let mut s = state(ViewportConfig {
            initial: InitialTransform {
                scale: 2.0,
                position_x: -50.0,
                position_y: -40.0,
            },
            zoom: ZoomConfig {
                disabled: true,
                ..Default::default()
            },
            ..Default::default()
        });
        let mut router = GestureRouter::new();
        s.set_transform(4.0, Point::new(-200.0, -200.0)).unwrap();
        assert!(router.reset(&mut s).is_empty());
        assert_eq!(s.scale(), 4.0);
    }

    #[test]
    fn reset_ends_gestures_and_restores_exactly() {
        let mut s = state(ViewportConfig {
            initial: InitialTransform {
                scale: 2.0,
                position_x: -50.0,
                position_y: -40.0,
            },
            ..Default::default()
        });
        let mut router = GestureRouter::new();
        s.set_transform(4.0, Point::new(-200.0, -200.0)).unwrap();
        router.route(&mut s, &InputEvent::PointerDown(pointer(20.0, 20.0, 0)));

        let events = router.reset(&mut s);
        assert!(matches!(events[0], GestureEvent::PanStop { .. }));
        assert_eq!(events.last(), Some(&GestureEvent::Transformed));
        assert_eq!(s.scale(), 2.0);
        assert_eq!(s.previous_scale(), 4.0);
        assert_eq!(s.position(), Point::new(-50.0, -40.0));
        assert!(s.bounds().is_none());
        assert!(!s.is_panning());
    }

    #[test]
    fn wheel_quiet_during_pinch_keeps_pinch_scale() {
        let mut s = state(ViewportConfig::default());
        let mut router = GestureRouter::new();
        let wheel = WheelInput {
            delta_y: 100.0,
            ctrl_key: false,
            position: Point::new(200.0, 150.0),
            time: 0,
        };
        router.route(&mut s, &InputEvent::Wheel(wheel));
        let padded = s.scale();
        assert!(padded < 1.0);

        let two = [Point::new(150.0, 150.0), Point::new(250.0, 150.0)];
        router.route(&mut s, &InputEvent::TouchStart(TouchInput {
            touches: &two,
            time: 10,
        }));
        assert!(s.is_pinching());

        let events = router.tick(&mut s, 200);
        assert_eq!(events.as_slice(), &[GestureEvent::WheelStop]);
        assert_eq!(s.scale(), padded);
        assert_eq!(s.session().pinch_start_scale, Some(padded));
    }

    #[test]
    fn zoom_button_during_drag_keeps_pointer_attached() {
        let mut s = state(ViewportConfig::default());
        let mut router = GestureRouter::new();
        s.set_transform(2.0, Point::new(-100.0, -100.0)).unwrap();
        router.route(&mut s, &InputEvent::PointerDown(pointer(200.0, 150.0, 0)));
        assert!(s.is_panning());

        router.zoom_step(&mut s, 1.0);
        assert!((s.scale() - 3.4).abs() < 1e-9);
        let limit_to_wrapper = s.config().pan.limit_to_wrapper_bounds;
        assert_eq!(s.bounds(), Some(s.bounds_for_scale(s.scale(), limit_to_wrapper)));
        let zoomed = s.position();

        let events = router.route(&mut s, &InputEvent::PointerMove(pointer(210.0, 150.0, 16)));
        assert_eq!(events.as_slice(), &[GestureEvent::Transformed]);
        assert!((s.position().x - (zoomed.x + 10.0)).abs() < 1e-9);
        assert!((s.position().y - zoomed.y).abs() < 1e-9);
    }
}
