//! Inline styles positioning items by their center in percent.
//!
//! Both editor elements and saved card items are placed the same way: the box
//! is anchored at its center (`translate(-50%, -50%)`) and rotated about it,
//! which is what the engines' hit tests assume.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use canvas::arrange::Placement;
use canvas::doc::Element;

fn centered(x: f64, y: f64, width: f64, rotation: f64) -> String {
    format!("left: {x}%; top: {y}%; width: {width}px; transform: translate(-50%, -50%) rotate({rotation}deg);")
}

/// Style of an editor element, including text styling for text boxes.
#[must_use]
pub fn element_style(el: &Element) -> String {
    let base = centered(el.x, el.y, el.width_px(), el.rotation);
    if !el.is_text() {
        return base;
    }
    format!(
        "{base} font-size: {}px; color: {}; text-align: {};",
        el.font_size_px(),
        el.text_color(),
        el.align().as_str()
    )
}

/// Style of a saved message or drawing on the card.
#[must_use]
pub fn placement_style(placement: &Placement) -> String {
    centered(placement.x, placement.y, placement.width, placement.rotation)
}
