//! Shared numeric constants for the canvas crate.

// ── Ink ─────────────────────────────────────────────────────────

/// Side of the square logical ink space. Stroke points are stored in
/// `0..INK_SPACE` on both axes regardless of container size.
pub const INK_SPACE: f64 = 1000.0;

/// Default ink color for the pen.
pub const DEFAULT_INK_COLOR: &str = "#2C2C2C";

/// Default brush diameter in ink units.
pub const DEFAULT_BRUSH_SIZE: f64 = 5.0;

/// Smallest and largest brush diameter offered by the editor.
pub const MIN_BRUSH_SIZE: f64 = 1.0;
pub const MAX_BRUSH_SIZE: f64 = 50.0;

/// Swatches offered for the pen.
pub const PEN_PALETTE: [&str; 10] = [
    "#1a1a1a", "#FF5252", "#448AFF", "#66BB6A", "#FFD740", "#AB47BC", "#FF9800", "#00BCD4", "#E91E63", "#8BC34A",
];

/// Stroke color recorded for eraser paths. Only the alpha matters once
/// composited with `destination-out`.
pub const ERASER_COLOR: &str = "white";

/// Outline color of the eraser cursor.
pub const ERASER_CURSOR_STROKE: &str = "#333";

/// Smallest cursor circle radius in CSS pixels.
pub const MIN_CURSOR_RADIUS_PX: f64 = 4.0;

// ── Elements ────────────────────────────────────────────────────

/// Width assumed for elements saved without one.
pub const DEFAULT_ELEMENT_WIDTH: f64 = 200.0;

/// Width of a freshly added text element.
pub const DEFAULT_TEXT_WIDTH: f64 = 250.0;

/// Estimated half-height of a text element when the host has not measured it.
pub const TEXT_HALF_HEIGHT: f64 = 50.0;

/// Font size of a freshly added text element, and the fallback when absent.
pub const DEFAULT_FONT_SIZE: f64 = 24.0;
pub const MIN_FONT_SIZE: f64 = 12.0;
pub const MAX_FONT_SIZE: f64 = 100.0;

/// Text color of a freshly added text element.
pub const DEFAULT_TEXT_COLOR: &str = "#1a1a1a";

/// Placeholder content of a freshly added text element.
pub const NEW_TEXT_CONTENT: &str = "Double click to edit";

/// Smallest width reachable by resizing in the editor.
pub const EDITOR_MIN_WIDTH: f64 = 50.0;

// ── Card arrangement ────────────────────────────────────────────

/// Width assumed for saved messages without one.
pub const MESSAGE_DEFAULT_WIDTH: f64 = 300.0;

/// Width assumed for saved drawings without one.
pub const DRAWING_DEFAULT_WIDTH: f64 = 400.0;

/// Smallest width reachable by resizing on the card.
pub const ARRANGE_MIN_WIDTH: f64 = 100.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Radius of the circular handles (delete, rotate, resize) in CSS pixels.
pub const HANDLE_RADIUS_PX: f64 = 12.0;

/// Distance from the top edge to the rotate handle center.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 28.0;

/// How far the delete button center sits outside the top-right corner.
pub const DELETE_HANDLE_OUTSET_PX: f64 = 3.0;

// ── Export ──────────────────────────────────────────────────────

/// Margin kept around content when cropping an export.
pub const EXPORT_PADDING_PX: f64 = 40.0;

/// Pixel density of exported images.
pub const EXPORT_SCALE: f64 = 2.0;

/// Inner padding of text elements, matching the editor's text box.
pub const TEXT_PADDING_PX: f64 = 10.0;

/// Line height multiplier for text elements.
pub const TEXT_LINE_HEIGHT: f64 = 1.4;

// ── History ─────────────────────────────────────────────────────

/// Most snapshots kept; the oldest are dropped beyond this.
pub const MAX_HISTORY: usize = 100;
