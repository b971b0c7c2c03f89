// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

/// Admissible translation rectangle for the content at one particular scale.
///
/// Each edge is optional: `None` means the axis is unconstrained on that side,
/// and clamping skips it instead of treating it as zero. Bounds produced by
/// [`Bounds::compute`] always have all four edges set.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    /// Smallest allowed `position.x`.
    pub min_x: Option<f64>,
    /// Largest allowed `position.x`.
    pub max_x: Option<f64>,
    /// Smallest allowed `position.y`.
    pub min_y: Option<f64>,
    /// Largest allowed `position.y`.
    pub max_y: Option<f64>,
}

impl Bounds {
    /// Bounds that constrain nothing.
    pub const UNBOUNDED: Self = Self {
        min_x: None,
        max_x: None,
        min_y: None,
        max_y: None,
    };

    /// Computes the translation bounds of `content` (already scaled) inside
    /// `wrapper`.
    ///
    /// When the content is smaller than the wrapper along an axis, the slack is
    /// split: with `limit_to_wrapper` the content may travel across the whole
    /// wrapper, otherwise it is pinned to the centre. When the content is larger,
    /// its edges may not move inside the wrapper edges.
    #[must_use]
    pub fn compute(wrapper: Size, content: Size, limit_to_wrapper: bool) -> Self {
        let factor = if limit_to_wrapper { 1.0 } else { 0.5 };
        let (min_x, max_x) = axis_range(wrapper.width, content.width, factor);
        let (min_y, max_y) = axis_range(wrapper.height, content.height, factor);
        Self {
            min_x: Some(min_x),
            max_x: Some(max_x),
            min_y: Some(min_y),
            max_y: Some(max_y),
        }
    }

    /// Clamps a position into these bounds when `active`, skipping open edges.
    #[must_use]
    pub fn clamp(&self, position: Point, active: bool) -> Point {
        if !active {
            return position;
        }
        Point::new(
            clamp_axis(position.x, self.min_x, self.max_x),
            clamp_axis(position.y, self.min_y, self.max_y),
        )
    }

    /// Returns `true` if `position` satisfies every set edge.
    #[must_use]
    pub fn contains(&self, position: Point) -> bool {
        self.clamp(position, true) == position
    }
}

fn axis_range(wrapper: f64, content: f64, factor: f64) -> (f64, f64) {
    let diff = wrapper - content;
    let slack = if wrapper > content { diff * factor } else { 0.0 };
    (diff - slack, slack)
}

fn clamp_axis(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let value = match min {
        Some(min) if value < min => min,
        _ => value,
    };
    match max {
        Some(max) if value > max => max,
        _ => value,
    }
}

/// Keeps `value` inside `[min, max]` when `active`; returns it unchanged
/// otherwise.
///
/// ```
/// use understory_pan_zoom::bound_limiter;
///
/// assert_eq!(bound_limiter(2.0, 0.0, 3.0, true), 2.0);
/// assert_eq!(bound_limiter(4.0, 0.0, 3.0, true), 3.0);
/// assert_eq!(bound_limiter(-2.0, 0.0, 3.0, true), 0.0);
/// assert_eq!(bound_limiter(10.0, 0.0, 3.0, false), 10.0);
/// ```
#[must_use]
pub fn bound_limiter(value: f64, min: f64, max: f64, active: bool) -> f64 {
    if !active {
        return value;
    }
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{Bounds, bound_limiter};

    #[test]
    fn content_equal_to_wrapper_is_pinned() {
        let size = Size::new(400.0, 300.0);
        let b = Bounds::compute(size, size, false);
        assert_eq!(b.min_x, Some(0.0));
        assert_eq!(b.max_x, Some(0.0));
        assert_eq!(b.min_y, Some(0.0));
        assert_eq!(b.max_y, Some(0.0));
    }

    #[test]
    fn larger_content_keeps_edges_outside_wrapper() {
        let wrapper = Size::new(400.0, 300.0);
        let content = Size::new(800.0, 600.0);
        for limit in [false, true] {
            let b = Bounds::compute(wrapper, content, limit);
            assert_eq!(b.min_x, Some(-400.0));
            assert_eq!(b.max_x, Some(0.0));
            assert_eq!(b.min_y, Some(-300.0));
            assert_eq!(b.max_y, Some(0.0));
        }
    }

    #[test]
    fn smaller_content_is_centered_unless_limited_to_wrapper() {
        let wrapper = Size::new(400.0, 300.0);
        let content = Size::new(200.0, 100.0);

        let centered = Bounds::compute(wrapper, content, false);
        assert_eq!(centered.min_x, Some(100.0));
        assert_eq!(centered.max_x, Some(100.0));
        assert_eq!(centered.min_y, Some(100.0));
        assert_eq!(centered.max_y, Some(100.0));

        let free = Bounds::compute(wrapper, content, true);
        assert_eq!(free.min_x, Some(0.0));
        assert_eq!(free.max_x, Some(200.0));
        assert_eq!(free.min_y, Some(0.0));
        assert_eq!(free.max_y, Some(200.0));
    }

    #[test]
    fn clamp_skips_open_edges() {
        let b = Bounds {
            min_x: Some(-10.0),
            max_x: None,
            min_y: None,
            max_y: Some(5.0),
        };
        let p = b.clamp(Point::new(-50.0, -50.0), true);
        assert_eq!(p, Point::new(-10.0, -50.0));
        let p = b.clamp(Point::new(500.0, 500.0), true);
        assert_eq!(p, Point::new(500.0, 5.0));
        assert_eq!(Bounds::UNBOUNDED.clamp(Point::new(1e9, -1e9), true), Point::new(1e9, -1e9));
    }

    #[test]
    fn inactive_clamp_is_identity() {
        let b = Bounds::compute(Size::new(10.0, 10.0), Size::new(10.0, 10.0), false);
        let p = Point::new(42.0, -7.0);
        assert_eq!(b.clamp(p, false), p);
        assert!(!b.contains(p));
    }

    #[test]
    fn bound_limiter_stays_in_range() {
        for v in [-1e6, -3.5, 0.0, 0.25, 1.0, 2.5, 7.0, 1e6] {
            let c = bound_limiter(v, -1.0, 2.0, true);
            assert!((-1.0..=2.0).contains(&c));
            assert_eq!(bound_limiter(v, -1.0, 2.0, false), v);
        }
    }
}
