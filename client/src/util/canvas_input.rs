//! Canvas input mapping and pointer helper utilities.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use canvas::camera::Point as CanvasPoint;
use canvas::input::{Key as CanvasKey, Modifiers as CanvasModifiers};

pub fn map_modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> CanvasModifiers {
    CanvasModifiers { shift, ctrl, alt, meta }
}

/// Keys the editor consumes; the browser default is suppressed for them.
pub fn should_prevent_default_key(key: &str, modifiers: CanvasModifiers) -> bool {
    match key {
        "Delete" | "Backspace" | "Escape" => true,
        "z" | "Z" | "y" | "Y" => modifiers.command(),
        _ => false,
    }
}

pub fn map_key(key: &str) -> CanvasKey {
    CanvasKey(key.to_owned())
}

/// Pointer position in viewport (client) coordinates, the space the engine's
/// viewport rect is measured in.
#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[cfg(feature = "csr")]
pub fn mouse_point(ev: &leptos::ev::MouseEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}
