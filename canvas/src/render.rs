//! Rendering: paints the ink layer and rasterizes the scene for export.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the scene and produces pixels; it does not
//! mutate any application state. Elements themselves are laid out by the
//! host as DOM nodes while editing; only export draws them here.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<_, JsValue>`.

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::camera::Viewport;
use crate::consts::{EXPORT_SCALE, INK_SPACE, TEXT_LINE_HEIGHT, TEXT_PADDING_PX};
use crate::doc::{Element, ElementId, ElementKind, InkPath, Scene, TextAlign};

/// Serif stack used for text elements.
const TEXT_FONT_FAMILY: &str = "Georgia, 'Times New Roman', serif";

/// Region of the container to export, in container pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crop {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything export needs to read.
pub struct ExportInput<'a> {
    pub scene: &'a Scene,
    pub viewport: &'a Viewport,
    /// The live ink layer, already painted.
    pub ink: &'a HtmlCanvasElement,
    /// Decoded images keyed by element id.
    pub images: &'a HashMap<ElementId, HtmlImageElement>,
    /// Host-measured element heights.
    pub heights: &'a HashMap<ElementId, f64>,
    pub crop: Crop,
}

/// Fetch the 2D context of a canvas.
///
/// # Errors
///
/// Returns `Err` when the browser refuses a 2D context.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

// =============================================================
// Ink layer
// =============================================================

/// Repaint every committed stroke plus the one in progress, in ink space.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_ink(ctx: &CanvasRenderingContext2d, paths: &[InkPath], active: Option<&InkPath>) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, INK_SPACE, INK_SPACE);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    for path in paths.iter().chain(active) {
        draw_path(ctx, path)?;
    }

    ctx.set_global_composite_operation("source-over")?;
    Ok(())
}

fn draw_path(ctx: &CanvasRenderingContext2d, path: &InkPath) -> Result<(), JsValue> {
    let Some((first, rest)) = path.points.split_first() else {
        return Ok(());
    };
    ctx.set_global_composite_operation(if path.is_eraser { "destination-out" } else { "source-over" })?;
    ctx.set_stroke_style_str(&path.color);
    ctx.set_line_width(path.width);
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    if rest.is_empty() {
        // A tap still leaves a dot.
        ctx.line_to(first.x, first.y);
    }
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.stroke();
    Ok(())
}

// =============================================================
// Export
// =============================================================

/// Rasterize the scene onto an offscreen canvas and return a PNG data URL.
///
/// Layers bottom to top: white background, the ink layer stretched over the
/// container, then elements in stacking order. The output is the crop region
/// at [`EXPORT_SCALE`]× density.
///
/// # Errors
///
/// Returns `Err` if the document is unavailable or any draw call fails.
pub fn export_png(input: &ExportInput<'_>) -> Result<String, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let canvas = document.create_element("canvas")?.dyn_into::<HtmlCanvasElement>()?;
    canvas.set_width(scaled_px(input.crop.width));
    canvas.set_height(scaled_px(input.crop.height));

    let ctx = context_2d(&canvas)?;
    ctx.scale(EXPORT_SCALE, EXPORT_SCALE)?;
    ctx.translate(-input.crop.x, -input.crop.y)?;

    let vp = input.viewport;
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, vp.width, vp.height);
    ctx.draw_image_with_html_canvas_element_and_dw_and_dh(input.ink, 0.0, 0.0, vp.width, vp.height)?;

    for el in &input.scene.elements {
        draw_element(&ctx, el, input)?;
    }

    canvas.to_data_url_with_type("image/png")
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_px(css: f64) -> u32 {
    (css * EXPORT_SCALE).round().max(1.0) as u32
}

fn draw_element(ctx: &CanvasRenderingContext2d, el: &Element, input: &ExportInput<'_>) -> Result<(), JsValue> {
    let center = input.viewport.percent_to_local(el.center());
    ctx.save();
    ctx.translate(center.x, center.y)?;
    ctx.rotate(el.rotation.to_radians())?;
    let result = match el.kind {
        ElementKind::Image => draw_image(ctx, el, input.images.get(&el.id)),
        ElementKind::Text => draw_text(ctx, el, input.heights.get(&el.id).copied()),
    };
    ctx.restore();
    result
}

fn draw_image(ctx: &CanvasRenderingContext2d, el: &Element, img: Option<&HtmlImageElement>) -> Result<(), JsValue> {
    let Some(img) = img.filter(|img| img.complete() && img.natural_width() > 0) else {
        return Ok(());
    };
    let w = el.width_px();
    let h = w * f64::from(img.natural_height()) / f64::from(img.natural_width());
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, -w / 2.0, -h / 2.0, w, h)
}

/// Draw a text element's plain text, wrapped to its width, top-aligned in
/// its box.
fn draw_text(ctx: &CanvasRenderingContext2d, el: &Element, measured_height: Option<f64>) -> Result<(), JsValue> {
    let (half_w, half_h) = el.half_extents(measured_height);
    let size = el.font_size_px();
    let max_w = (half_w * 2.0 - TEXT_PADDING_PX * 2.0).max(1.0);

    ctx.set_font(&format!("{size}px {TEXT_FONT_FAMILY}"));
    ctx.set_fill_style_str(el.text_color());
    ctx.set_text_baseline("top");

    let (align, x) = match el.align() {
        TextAlign::Left | TextAlign::Justify => ("left", -half_w + TEXT_PADDING_PX),
        TextAlign::Center => ("center", 0.0),
        TextAlign::Right => ("right", half_w - TEXT_PADDING_PX),
    };
    ctx.set_text_align(align);

    let line_h = size * TEXT_LINE_HEIGHT;
    let mut y = -half_h + TEXT_PADDING_PX;
    for paragraph in el.plain_text().split('\n') {
        for line in wrap_text_lines(ctx, paragraph, max_w)? {
            ctx.fill_text(&line, x, y)?;
            y += line_h;
        }
    }
    Ok(())
}

/// Greedy word wrap using the context's current font.
fn wrap_text_lines(ctx: &CanvasRenderingContext2d, text: &str, max_w: f64) -> Result<Vec<String>, JsValue> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() { word.to_owned() } else { format!("{current} {word}") };
        if current.is_empty() || ctx.measure_text(&candidate)?.width() <= max_w {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_owned()));
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    Ok(lines)
}
