//! Export crop box: the padded extent of everything on the surface.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use crate::camera::{Point, Viewport};
use crate::consts::EXPORT_PADDING_PX;
use crate::doc::Scene;

/// Crop rectangle in container pixels, plus its center in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Center x in percent of the container.
    pub center_x: f64,
    /// Center y in percent of the container.
    pub center_y: f64,
}

impl ExportBounds {
    /// Center in percent, where the saved drawing is placed on the card.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }
}

/// Padded bounding box of all elements and ink, clamped to the container.
///
/// Elements contribute their estimated extents around the center; every ink
/// point contributes itself. Returns `None` when there is nothing to export.
#[must_use]
pub fn export_bounds(scene: &Scene, viewport: &Viewport) -> Option<ExportBounds> {
    let mut extent: Option<(Point, Point)> = None;
    let mut include = |lo: Point, hi: Point| {
        extent = Some(match extent {
            None => (lo, hi),
            Some((min, max)) => (
                Point::new(min.x.min(lo.x), min.y.min(lo.y)),
                Point::new(max.x.max(hi.x), max.y.max(hi.y)),
            ),
        });
    };

    for el in &scene.elements {
        let center = viewport.percent_to_local(el.center());
        let (half_w, half_h) = el.estimated_half_extents();
        include(
            Point::new(center.x - half_w, center.y - half_h),
            Point::new(center.x + half_w, center.y + half_h),
        );
    }
    for point in scene.paths.iter().flat_map(|path| path.points.iter()) {
        let local = viewport.ink_to_local((*point).into());
        include(local, local);
    }

    let (min, max) = extent?;
    let x = (min.x - EXPORT_PADDING_PX).max(0.0);
    let y = (min.y - EXPORT_PADDING_PX).max(0.0);
    let width = (viewport.width - x).min(max.x - min.x + EXPORT_PADDING_PX * 2.0);
    let height = (viewport.height - y).min(max.y - min.y + EXPORT_PADDING_PX * 2.0);
    let center = viewport.local_to_percent(Point::new(x + width / 2.0, y + height / 2.0));

    Some(ExportBounds { x, y, width, height, center_x: center.x, center_y: center.y })
}
