#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use std::collections::HashMap;

use crate::camera::{Point, Viewport};
use crate::consts::{DELETE_HANDLE_OUTSET_PX, HANDLE_RADIUS_PX, ROTATE_HANDLE_OFFSET_PX};
use crate::doc::{Element, ElementId, Scene};
use crate::transform::{from_local_frame, to_local_frame};

/// Which part of an element was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    DeleteButton,
    RotateHandle,
    ResizeHandle,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub element_id: ElementId,
    pub part: HitPart,
}

/// Handle centers of an element, in its unrotated local frame (pixels from
/// the element center).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleOffsets {
    pub delete: Point,
    pub rotate: Point,
    pub resize: Point,
}

/// Handle layout for a box with the given half extents: delete button just
/// outside the top-right corner, rotate handle above the top edge, resize
/// handle on the bottom-right corner.
#[must_use]
pub fn handle_offsets(half_w: f64, half_h: f64) -> HandleOffsets {
    HandleOffsets {
        delete: Point::new(half_w + DELETE_HANDLE_OUTSET_PX, -half_h - DELETE_HANDLE_OUTSET_PX),
        rotate: Point::new(0.0, -half_h - ROTATE_HANDLE_OFFSET_PX),
        resize: Point::new(half_w, half_h),
    }
}

/// Screen-space handle centers of an element.
#[must_use]
pub fn handle_positions(el: &Element, viewport: &Viewport, measured_height: Option<f64>) -> [(HitPart, Point); 3] {
    let center = viewport.percent_to_screen(el.center());
    let (half_w, half_h) = el.half_extents(measured_height);
    let offsets = handle_offsets(half_w, half_h);
    [
        (HitPart::DeleteButton, from_local_frame(offsets.delete, center, el.rotation)),
        (HitPart::RotateHandle, from_local_frame(offsets.rotate, center, el.rotation)),
        (HitPart::ResizeHandle, from_local_frame(offsets.resize, center, el.rotation)),
    ]
}

/// Whether `screen_pt` lies inside the element's rotated box.
#[must_use]
pub fn point_in_element(screen_pt: Point, el: &Element, viewport: &Viewport, measured_height: Option<f64>) -> bool {
    let center = viewport.percent_to_screen(el.center());
    let local = to_local_frame(screen_pt, center, el.rotation);
    let (half_w, half_h) = el.half_extents(measured_height);
    local.x.abs() <= half_w && local.y.abs() <= half_h
}

/// Test which element (if any) is under `screen_pt`.
///
/// Handles of the selected element win over everything, then the selected
/// element's body (it is drawn raised), then the remaining bodies top-most
/// first.
#[must_use]
pub fn hit_test(
    screen_pt: Point,
    scene: &Scene,
    viewport: &Viewport,
    heights: &HashMap<ElementId, f64>,
    selected_id: Option<ElementId>,
) -> Option<Hit> {
    let selected = selected_id.and_then(|id| scene.get(&id));

    if let Some(el) = selected {
        let measured = heights.get(&el.id).copied();
        for (part, center) in handle_positions(el, viewport, measured) {
            if screen_pt.distance(center) <= HANDLE_RADIUS_PX {
                return Some(Hit { element_id: el.id, part });
            }
        }
        if point_in_element(screen_pt, el, viewport, measured) {
            return Some(Hit { element_id: el.id, part: HitPart::Body });
        }
    }

    scene
        .elements
        .iter()
        .rev()
        .filter(|el| Some(el.id) != selected_id)
        .find(|el| point_in_element(screen_pt, el, viewport, heights.get(&el.id).copied()))
        .map(|el| Hit { element_id: el.id, part: HitPart::Body })
}
