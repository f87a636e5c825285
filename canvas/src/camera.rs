//! Coordinate spaces of the editing surface.
//!
//! Four spaces are in play:
//!
//! - **screen**: CSS pixels relative to the browser viewport, as delivered by
//!   pointer events (`clientX`/`clientY`);
//! - **local**: CSS pixels relative to the container's top-left corner;
//! - **percent**: `0..100` of the container on each axis, used for element
//!   positions so layouts survive resizing;
//! - **ink**: `0..1000` on each axis, the fixed resolution of the ink layer.
//!
//! A zero-sized container maps everything to the origin instead of dividing
//! by zero.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::INK_SPACE;

/// A point in any of the spaces above.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        let d = self.sub(other);
        d.x.hypot(d.y)
    }
}

/// The container's bounding rect in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Whether either dimension is zero or negative.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Screen point to container-local pixels.
    #[must_use]
    pub fn to_local(&self, screen: Point) -> Point {
        Point::new(screen.x - self.left, screen.y - self.top)
    }

    /// Container-local pixels to screen point.
    #[must_use]
    pub fn to_screen(&self, local: Point) -> Point {
        Point::new(local.x + self.left, local.y + self.top)
    }

    /// Container-local pixels to percentages.
    #[must_use]
    pub fn local_to_percent(&self, local: Point) -> Point {
        Point::new(ratio(local.x, self.width) * 100.0, ratio(local.y, self.height) * 100.0)
    }

    /// Percentages to container-local pixels.
    #[must_use]
    pub fn percent_to_local(&self, percent: Point) -> Point {
        Point::new(percent.x / 100.0 * self.width, percent.y / 100.0 * self.height)
    }

    /// Percentages to screen point.
    #[must_use]
    pub fn percent_to_screen(&self, percent: Point) -> Point {
        self.to_screen(self.percent_to_local(percent))
    }

    /// Screen point to ink space.
    #[must_use]
    pub fn screen_to_ink(&self, screen: Point) -> Point {
        let local = self.to_local(screen);
        Point::new(ratio(local.x, self.width) * INK_SPACE, ratio(local.y, self.height) * INK_SPACE)
    }

    /// Ink space to container-local pixels.
    #[must_use]
    pub fn ink_to_local(&self, ink: Point) -> Point {
        Point::new(ink.x / INK_SPACE * self.width, ink.y / INK_SPACE * self.height)
    }
}

fn ratio(value: f64, extent: f64) -> f64 {
    if extent > 0.0 { value / extent } else { 0.0 }
}
