// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Pan Zoom: a headless pan, zoom and pinch gesture engine.
//!
//! A [`Viewport`] turns raw input (wheel ticks, pointer drags, one and two
//! finger touches, double clicks) into a [`Transform`]: a uniform `scale` plus
//! a `position` of the content inside a fixed wrapper rectangle. The host
//! paints the content with [`Transform::to_affine`].
//!
//! The crate does **not** own a window, a scene or a timer. Callers are
//! expected to:
//! - Implement [`InputSource`] over their event system and [`Viewport::attach`]
//!   it together with the wrapper rectangle and the content size.
//! - Forward events as [`InputEvent`]s with millisecond timestamps.
//! - Call [`Viewport::tick`] with the current time so the wheel gesture can end
//!   after a quiet period.
//! - Repaint whenever a call reports [`GestureEvent::Transformed`].
//!
//! ## Behavior
//!
//! - Zooming keeps the content point under the cursor (or under the midpoint
//!   of a pinch) fixed on screen.
//! - The scale stays in `[min_scale - padding, max_scale]`. Padding lets wheel
//!   and pinch gestures overshoot `min_scale`; the scale settles back when the
//!   gesture ends.
//! - The position is clamped into [`Bounds`] recomputed for every scale.
//! - Pan and pinch are mutually exclusive. Wheel input is ignored while either
//!   is active.
//! - Disabled features and no-op inputs leave the state untouched and report
//!   nothing. Invalid geometry is logged through the [`log`] facade.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_pan_zoom::{
//!     GestureEvent, InputEvent, InputKind, InputSource, Viewport, ViewportConfig, WheelConfig,
//!     WheelInput,
//! };
//!
//! struct Host;
//!
//! impl InputSource for Host {
//!     type Listener = InputKind;
//!     fn on(&mut self, kind: InputKind) -> InputKind {
//!         kind
//!     }
//!     fn off(&mut self, _: InputKind) {}
//! }
//!
//! let config = ViewportConfig {
//!     wheel: WheelConfig { step: 1.0, ..Default::default() },
//!     ..Default::default()
//! };
//! let mut viewport = Viewport::new(config);
//! viewport.attach(Host, Rect::new(0.0, 0.0, 400.0, 300.0), Size::new(400.0, 300.0));
//!
//! let events = viewport.handle_event(&InputEvent::Wheel(WheelInput {
//!     delta_y: -100.0,
//!     ctrl_key: false,
//!     position: Point::new(200.0, 150.0),
//!     time: 0,
//! }));
//! assert!(events.contains(&GestureEvent::Transformed));
//! assert_eq!(viewport.transform().unwrap().scale, 1.01);
//!
//! // The wheel gesture ends once the wheel has been quiet for `stop_delay`.
//! let events = viewport.tick(180);
//! assert_eq!(events.as_slice(), &[GestureEvent::WheelStop]);
//! ```
//!
//! ## Building blocks
//!
//! The gesture handlers ([`WheelZoomHandler`], [`PanHandler`],
//! [`PinchHandler`]) and the [`GestureRouter`] operate on a plain
//! [`TransformState`] and can be driven without a [`Viewport`]. The pure
//! helpers [`Bounds::compute`], [`clamp_scale`], [`anchor_zoom`] and
//! [`bound_limiter`] carry the arithmetic.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod config;
mod controls;
mod error;
mod event;
mod input;
mod pan;
mod pinch;
mod router;
mod state;
mod timer;
mod viewport;
mod wheel;
mod zoom_math;

pub use bounds::{Bounds, bound_limiter};
pub use config::{
    DoubleClickConfig, DoubleClickMode, InitialTransform, PanConfig, PinchConfig, ScalePadding,
    ViewportConfig, WheelConfig, ZoomButtonConfig, ZoomConfig,
};
pub use error::GeometryError;
pub use event::{GestureEvent, GestureEvents};
pub use input::{InputEvent, InputKind, PointerInput, TouchInput, WheelInput};
pub use pan::{PanHandler, PanSource};
pub use pinch::PinchHandler;
pub use router::GestureRouter;
pub use state::{Layout, Session, Transform, TransformState};
pub use timer::Debounce;
pub use viewport::{InputSource, Viewport};
pub use wheel::WheelZoomHandler;
pub use zoom_math::{
    SCALE_PRECISION, SMALLEST_SCALE, anchor_zoom, clamp_scale, round_to, touch_distance,
};
