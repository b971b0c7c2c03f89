// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport options, grouped by the input they govern.
//!
//! Every group implements [`Default`] with the documented defaults, so callers
//! override only what they need:
//!
//! ```
//! use understory_pan_zoom::{PanConfig, ViewportConfig, ZoomConfig};
//!
//! let config = ViewportConfig {
//!     zoom: ZoomConfig { max_scale: 4.0, ..Default::default() },
//!     pan: PanConfig { lock_axis_y: true, ..Default::default() },
//!     ..Default::default()
//! };
//! assert_eq!(config.zoom.min_scale, 1.0);
//! ```

use crate::zoom_math::SMALLEST_SCALE;

/// Transform restored by [`Viewport::reset_transform`](crate::Viewport::reset_transform)
/// and used when a viewport attaches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialTransform {
    /// Default: `1.0`.
    pub scale: f64,
    /// Default: `0.0`.
    pub position_x: f64,
    /// Default: `0.0`.
    pub position_y: f64,
}

impl Default for InitialTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            position_x: 0.0,
            position_y: 0.0,
        }
    }
}

/// Soft tolerance below `min_scale` that zoom gestures may overshoot into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePadding {
    /// Disables the tolerance entirely. Default: `false`.
    pub disabled: bool,
    /// How far below `min_scale` gestures may go. Default: `0.45`.
    pub size: f64,
}

impl ScalePadding {
    /// Returns the padding that actually applies, or `0.0` when disabled.
    #[must_use]
    pub fn effective(&self) -> f64 {
        if self.disabled { 0.0 } else { self.size }
    }
}

impl Default for ScalePadding {
    fn default() -> Self {
        Self {
            disabled: false,
            size: 0.45,
        }
    }
}

/// Scale limits and the global kill switch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Default: `1.0`.
    pub min_scale: f64,
    /// Default: `8.0`.
    pub max_scale: f64,
    /// Gesture overshoot allowance below `min_scale`.
    pub padding: ScalePadding,
    /// Clamp the position into the computed bounds. Default: `true`.
    pub limit_to_bounds: bool,
    /// Disables zooming, panning, and pinching. Default: `false`.
    pub disabled: bool,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 8.0,
            padding: ScalePadding::default(),
            limit_to_bounds: true,
            disabled: false,
        }
    }
}

/// Mouse wheel and touchpad zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelConfig {
    /// Zoom speed: percent of the current scale per wheel tick. Default: `6.5`.
    pub step: f64,
    /// Default: `false`.
    pub disabled: bool,
    /// Accept plain wheel ticks. Default: `true`.
    pub wheel_enabled: bool,
    /// Accept touchpad pinches (wheel ticks with the control modifier).
    /// Default: `true`.
    pub touch_pad_enabled: bool,
    /// Use wrapper-relative bounds while wheeling. Default: `true`.
    pub disable_limits_on_wheel: bool,
    /// Quiet period, in milliseconds, after which a wheel gesture is over.
    /// Default: `180`.
    pub stop_delay: u64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            step: 6.5,
            disabled: false,
            wheel_enabled: true,
            touch_pad_enabled: true,
            disable_limits_on_wheel: true,
            stop_delay: 180,
        }
    }
}

/// Pointer and single-touch dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PanConfig {
    /// Default: `false`.
    pub disabled: bool,
    /// Freeze the horizontal position while dragging. Default: `false`.
    pub lock_axis_x: bool,
    /// Freeze the vertical position while dragging. Default: `false`.
    pub lock_axis_y: bool,
    /// Let undersized content travel across the whole wrapper instead of
    /// staying centred. Default: `false`.
    pub limit_to_wrapper_bounds: bool,
}

/// Two-finger pinch zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchConfig {
    /// Default: `false`.
    pub disabled: bool,
    /// Reserved scaling multiplier; pinch scale currently follows the finger
    /// distance ratio exactly. Default: `1.0`.
    pub step: f64,
}

impl Default for PinchConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            step: 1.0,
        }
    }
}

/// Programmatic [`zoom_in`](crate::Viewport::zoom_in) /
/// [`zoom_out`](crate::Viewport::zoom_out).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomButtonConfig {
    /// Default: `false`.
    pub disabled: bool,
    /// Percent of the current scale per call. Default: `70.0`.
    pub step: f64,
}

impl Default for ZoomButtonConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            step: 70.0,
        }
    }
}

/// What a double click does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DoubleClickMode {
    /// Zoom in around the cursor.
    #[default]
    ZoomIn,
    /// Zoom out around the cursor.
    ZoomOut,
    /// Restore the initial transform.
    Reset,
}

/// Double click zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoubleClickConfig {
    /// Default: `false`.
    pub disabled: bool,
    /// Percent of the current scale per double click. Default: `70.0`.
    pub step: f64,
    /// Default: [`DoubleClickMode::ZoomIn`].
    pub mode: DoubleClickMode,
}

impl Default for DoubleClickConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            step: 70.0,
            mode: DoubleClickMode::ZoomIn,
        }
    }
}

/// Complete configuration of one viewport.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewportConfig {
    /// Transform at attach time and after a reset.
    pub initial: InitialTransform,
    /// Scale limits.
    pub zoom: ZoomConfig,
    /// Wheel zoom.
    pub wheel: WheelConfig,
    /// Dragging.
    pub pan: PanConfig,
    /// Pinch zoom.
    pub pinch: PinchConfig,
    /// Zoom in / out operations.
    pub zoom_buttons: ZoomButtonConfig,
    /// Double click zoom.
    pub double_click: DoubleClickConfig,
}

impl ViewportConfig {
    /// Returns a copy with usable scale limits and padding.
    ///
    /// Non-finite limits fall back to their defaults, inverted limits are
    /// swapped, and both limits are raised to at least [`SMALLEST_SCALE`].
    /// Negative or non-finite padding becomes `0`.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let defaults = ZoomConfig::default();
        let zoom = &mut self.zoom;
        if !zoom.min_scale.is_finite() {
            zoom.min_scale = defaults.min_scale;
        }
        if !zoom.max_scale.is_finite() {
            zoom.max_scale = defaults.max_scale;
        }
        if zoom.min_scale > zoom.max_scale {
            core::mem::swap(&mut zoom.min_scale, &mut zoom.max_scale);
        }
        zoom.min_scale = zoom.min_scale.max(SMALLEST_SCALE);
        zoom.max_scale = zoom.max_scale.max(zoom.min_scale);
        zoom.padding.size = if zoom.padding.size.is_finite() {
            zoom.padding.size.max(0.0)
        } else {
            0.0
        };
        self
    }
}
