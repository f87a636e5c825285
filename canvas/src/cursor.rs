//! CSS cursors for the active tool.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::consts::{ERASER_CURSOR_STROKE, MIN_CURSOR_RADIUS_PX};
use crate::hit::HitPart;
use crate::input::Tool;

pub const DEFAULT: &str = "default";

/// Cursor for the surface with the given tool. Ink tools show a circle the
/// size of the brush, centered on the hotspot.
#[must_use]
pub fn for_tool(tool: Tool, ink_color: &str, brush_size: f64) -> String {
    match tool {
        Tool::Select => DEFAULT.to_owned(),
        Tool::Pen => brush_cursor(ink_color, brush_size),
        Tool::Eraser => brush_cursor(ERASER_CURSOR_STROKE, brush_size),
    }
}

/// Cursor while hovering part of an element with the select tool.
#[must_use]
pub fn for_hover(part: Option<HitPart>) -> &'static str {
    match part {
        None => DEFAULT,
        Some(HitPart::Body) => "grab",
        Some(HitPart::DeleteButton) => "pointer",
        Some(HitPart::RotateHandle) => "ew-resize",
        Some(HitPart::ResizeHandle) => "nwse-resize",
    }
}

/// SVG circle cursor, base64-encoded, with a crosshair fallback.
#[must_use]
pub fn brush_cursor(stroke: &str, brush_size: f64) -> String {
    let size = (brush_size / 2.0).max(MIN_CURSOR_RADIUS_PX);
    let side = size * 2.0;
    let r = size - 1.0;
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{side}" height="{side}" viewBox="0 0 {side} {side}"><circle cx="{size}" cy="{size}" r="{r}" fill="none" stroke="{stroke}" stroke-width="1" /></svg>"#
    );
    let encoded = STANDARD.encode(svg.as_bytes());
    format!("url('data:image/svg+xml;base64,{encoded}') {size} {size}, crosshair")
}
