// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input accepted by the viewport.
//!
//! Positions are client (window) coordinates in pixels, the same space the
//! wrapper rectangle is expressed in. Times are host-supplied milliseconds
//! from any monotonic origin.

use kurbo::Point;

/// A mouse wheel tick or touchpad scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Vertical delta; negative values zoom in.
    pub delta_y: f64,
    /// Control modifier. Browsers and most toolkits report touchpad pinches
    /// as control-wheel events.
    pub ctrl_key: bool,
    /// Cursor position.
    pub position: Point,
    /// Event time in milliseconds.
    pub time: u64,
}

/// A mouse or pen pointer sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Pointer position.
    pub position: Point,
    /// Event time in milliseconds.
    pub time: u64,
}

/// The set of touches currently on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchInput<'a> {
    /// Active touch positions, in contact order.
    pub touches: &'a [Point],
    /// Event time in milliseconds.
    pub time: u64,
}

/// One input event forwarded by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent<'a> {
    /// Wheel or touchpad zoom.
    Wheel(WheelInput),
    /// Pointer pressed.
    PointerDown(PointerInput),
    /// Pointer moved.
    PointerMove(PointerInput),
    /// Pointer released.
    PointerUp(PointerInput),
    /// Pointer stream interrupted by the platform.
    PointerCancel(PointerInput),
    /// Double click.
    DoubleClick(PointerInput),
    /// A finger touched down; carries all current touches.
    TouchStart(TouchInput<'a>),
    /// Fingers moved; carries all current touches.
    TouchMove(TouchInput<'a>),
    /// A finger lifted; carries the touches that remain.
    TouchEnd(TouchInput<'a>),
}

impl InputEvent<'_> {
    /// The listener kind this event is delivered through.
    #[must_use]
    pub fn kind(&self) -> InputKind {
        match self {
            Self::Wheel(_) => InputKind::Wheel,
            Self::PointerDown(_) => InputKind::PointerDown,
            Self::PointerMove(_) => InputKind::PointerMove,
            Self::PointerUp(_) => InputKind::PointerUp,
            Self::PointerCancel(_) => InputKind::PointerCancel,
            Self::DoubleClick(_) => InputKind::DoubleClick,
            Self::TouchStart(_) => InputKind::TouchStart,
            Self::TouchMove(_) => InputKind::TouchMove,
            Self::TouchEnd(_) => InputKind::TouchEnd,
        }
    }
}

/// Listener kinds a viewport registers with its [`InputSource`](crate::InputSource).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// [`InputEvent::Wheel`].
    Wheel,
    /// [`InputEvent::PointerDown`].
    PointerDown,
    /// [`InputEvent::PointerMove`].
    PointerMove,
    /// [`InputEvent::PointerUp`].
    PointerUp,
    /// [`InputEvent::PointerCancel`].
    PointerCancel,
    /// [`InputEvent::DoubleClick`].
    DoubleClick,
    /// [`InputEvent::TouchStart`].
    TouchStart,
    /// [`InputEvent::TouchMove`].
    TouchMove,
    /// [`InputEvent::TouchEnd`].
    TouchEnd,
}

impl InputKind {
    /// Every kind, in registration order.
    pub const ALL: [Self; 9] = [
        Self::Wheel,
        Self::PointerDown,
        Self::PointerMove,
        Self::PointerUp,
        Self::PointerCancel,
        Self::DoubleClick,
        Self::TouchStart,
        Self::TouchMove,
        Self::TouchEnd,
    ];
}
