// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use smallvec::SmallVec;

/// Notification produced while handling input.
///
/// Hosts repaint on [`GestureEvent::Transformed`] and may use the boundary
/// notifications to drive their own affordances (cursor changes, inertia).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Scale or position changed.
    Transformed,
    /// First effective wheel tick of a gesture.
    WheelStart,
    /// The wheel gesture ended.
    WheelStop,
    /// A drag began.
    PanStart,
    /// A drag ended.
    PanStop {
        /// Velocity of the last accepted move, in pixels per millisecond.
        velocity: Vec2,
    },
    /// A two-finger pinch began.
    PinchStart,
    /// The pinch ended.
    PinchStop,
}

/// Events emitted by one call; rarely more than two.
pub type GestureEvents = SmallVec<[GestureEvent; 4]>;
