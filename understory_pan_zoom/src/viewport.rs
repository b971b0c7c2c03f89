// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport: lifecycle, listener bookkeeping and the public operations.

use core::fmt;

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::config::ViewportConfig;
use crate::error::GeometryError;
use crate::event::{GestureEvent, GestureEvents};
use crate::input::{InputEvent, InputKind};
use crate::router::GestureRouter;
use crate::state::{Layout, Transform, TransformState};

/// Where a viewport's input comes from.
///
/// A host implements this over its windowing or DOM layer. The viewport calls
/// [`on`](Self::on) once per [`InputKind`] when attached and hands every
/// returned listener back to [`off`](Self::off) when detached. Tests implement
/// it with a recorder and feed synthetic events through
/// [`Viewport::handle_event`].
pub trait InputSource {
    /// Handle identifying one registration.
    type Listener;

    /// Starts delivering events of `kind`.
    fn on(&mut self, kind: InputKind) -> Self::Listener;

    /// Stops delivering events for `listener`.
    fn off(&mut self, listener: Self::Listener);
}

struct Attachment<S: InputSource> {
    source: S,
    listeners: SmallVec<[(InputKind, S::Listener); 9]>,
    state: TransformState,
    router: GestureRouter,
}

/// A zoomable viewport bound to at most one input source at a time.
///
/// While detached, every operation is a no-op returning no events.
///
/// ```rust
/// use kurbo::{Point, Rect, Size};
/// use understory_pan_zoom::{InputEvent, InputKind, InputSource, PointerInput, Viewport, ViewportConfig};
///
/// struct Host;
///
/// impl InputSource for Host {
///     type Listener = InputKind;
///     fn on(&mut self, kind: InputKind) -> InputKind {
///         kind
///     }
///     fn off(&mut self, _: InputKind) {}
/// }
///
/// let mut viewport = Viewport::new(ViewportConfig::default());
/// viewport.attach(Host, Rect::new(0.0, 0.0, 400.0, 300.0), Size::new(400.0, 300.0));
/// viewport.zoom_in();
/// let down = PointerInput { position: Point::new(200.0, 150.0), time: 0 };
/// viewport.handle_event(&InputEvent::PointerDown(down));
/// assert!(viewport.state().unwrap().is_panning());
/// assert!(viewport.detach().is_some());
/// ```
pub struct Viewport<S: InputSource> {
    config: ViewportConfig,
    attached: Option<Attachment<S>>,
}

impl<S: InputSource> Viewport<S> {
    /// Creates a detached viewport.
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            config: config.normalized(),
            attached: None,
        }
    }

    /// The normalized configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Returns `true` while bound to a source.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    /// Binds to `source`, registers one listener per [`InputKind`] and starts
    /// from the configured initial transform.
    ///
    /// A previously attached source is detached first and returned.
    pub fn attach(&mut self, mut source: S, wrapper: Rect, content: Size) -> Option<S> {
        let previous = self.detach();
        let listeners = InputKind::ALL
            .iter()
            .map(|&kind| (kind, source.on(kind)))
            .collect();
        let state = TransformState::new(self.config, Layout { wrapper, content });
        log::debug!(
            "viewport attached: wrapper {}x{}, content {}x{}",
            wrapper.width(),
            wrapper.height(),
            content.width,
            content.height
        );
        self.attached = Some(Attachment {
            source,
            listeners,
            state,
            router: GestureRouter::new(),
        });
        previous
    }

    /// Releases every listener and returns the source.
    ///
    /// Active gestures are dropped without notification.
    pub fn detach(&mut self) -> Option<S> {
        let Attachment {
            mut source,
            listeners,
            ..
        } = self.attached.take()?;
        for (_, listener) in listeners {
            source.off(listener);
        }
        log::debug!("viewport detached");
        Some(source)
    }

    /// Transform state, while attached.
    #[must_use]
    pub fn state(&self) -> Option<&TransformState> {
        self.attached.as_ref().map(|a| &a.state)
    }

    /// Current transform, while attached.
    #[must_use]
    pub fn transform(&self) -> Option<Transform> {
        self.state().map(TransformState::transform)
    }

    /// Returns `true` between a wheel gesture's start and stop.
    #[must_use]
    pub fn is_wheeling(&self) -> bool {
        self.attached
            .as_ref()
            .is_some_and(|a| a.router.wheel().is_wheeling())
    }

    /// Delivers one input event.
    ///
    /// Ignored while detached or if no listener is registered for its kind.
    pub fn handle_event(&mut self, event: &InputEvent<'_>) -> GestureEvents {
        let Some(a) = self.attached.as_mut() else {
            return GestureEvents::new();
        };
        let kind = event.kind();
        if !a.listeners.iter().any(|(k, _)| *k == kind) {
            return GestureEvents::new();
        }
        a.router.route(&mut a.state, event)
    }

    /// Advances host time to `now` (milliseconds), firing the wheel debounce
    /// timer if it is due.
    pub fn tick(&mut self, now: u64) -> GestureEvents {
        match self.attached.as_mut() {
            Some(a) => a.router.tick(&mut a.state, now),
            None => GestureEvents::new(),
        }
    }

    /// Ends all gestures and restores the initial transform.
    pub fn reset_transform(&mut self) -> GestureEvents {
        match self.attached.as_mut() {
            Some(a) => a.router.reset(&mut a.state),
            None => GestureEvents::new(),
        }
    }

    /// Zooms in by the zoom button step around the wrapper centre.
    pub fn zoom_in(&mut self) -> GestureEvents {
        self.zoom_step(1.0)
    }

    /// Zooms out by the zoom button step around the wrapper centre.
    pub fn zoom_out(&mut self) -> GestureEvents {
        self.zoom_step(-1.0)
    }

    /// Sets the transform directly.
    ///
    /// The scale is clamped into `[min_scale, max_scale]` and the position into
    /// bounds when `limit_to_bounds` is set.
    pub fn set_transform(
        &mut self,
        scale: f64,
        position_x: f64,
        position_y: f64,
    ) -> Result<GestureEvents, GeometryError> {
        let mut events = GestureEvents::new();
        let Some(a) = self.attached.as_mut() else {
            return Ok(events);
        };
        match a.state.set_transform(scale, Point::new(position_x, position_y)) {
            Ok(true) => events.push(GestureEvent::Transformed),
            Ok(false) => {}
            Err(err) => {
                log::warn!("set_transform rejected: {err}");
                return Err(err);
            }
        }
        Ok(events)
    }

    /// Updates the wrapper's client rectangle.
    pub fn set_wrapper_rect(&mut self, wrapper: Rect) {
        if let Some(a) = self.attached.as_mut() {
            let layout = a.state.layout();
            a.state.set_layout(Layout { wrapper, ..layout });
        }
    }

    /// Updates the content's unscaled size.
    pub fn set_content_size(&mut self, content: Size) {
        if let Some(a) = self.attached.as_mut() {
            let layout = a.state.layout();
            a.state.set_layout(Layout { content, ..layout });
        }
    }

    fn zoom_step(&mut self, direction: f64) -> GestureEvents {
        match self.attached.as_mut() {
            Some(a) => a.router.zoom_step(&mut a.state, direction),
            None => GestureEvents::new(),
        }
    }
}

impl<S: InputSource> Drop for Viewport<S> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<S: InputSource> fmt::Debug for Viewport<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewport")
            .field("config", &self.config)
            .field("attached", &self.is_attached())
            .field("transform", &self.transform())
            .finish_non_exhaustive()
    }
}
