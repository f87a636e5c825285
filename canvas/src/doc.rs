//! Document model: placed elements, ink strokes and the scene that owns them.
//!
//! `Element` is a text box or image sticker positioned by its center in
//! percent of the container. `InkPath` is one freehand stroke in the fixed
//! 1000×1000 ink space. `Scene` holds both and is the unit of undo history
//! and of persistence (`contentJson` on a saved drawing).
//!
//! The wire format is camelCase JSON. Older saves stored only the element
//! array; [`Scene::from_content_json`] accepts both shapes.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::consts::{
    DEFAULT_ELEMENT_WIDTH, DEFAULT_FONT_SIZE, DEFAULT_TEXT_COLOR, DEFAULT_TEXT_WIDTH, NEW_TEXT_CONTENT,
    TEXT_HALF_HEIGHT,
};

/// Unique identifier for an element.
pub type ElementId = Uuid;

/// What an element shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Rich text; `content` holds HTML.
    Text,
    /// Image sticker; `src` holds a data URL.
    Image,
}

/// Horizontal alignment of a text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
    Justify,
}

impl TextAlign {
    /// CSS keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

/// A text box or image placed on the editing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// HTML content of a text element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Data URL of an image element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Center x in percent of the container.
    pub x: f64,
    /// Center y in percent of the container.
    pub y: f64,
    /// Width in CSS pixels; [`DEFAULT_ELEMENT_WIDTH`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Clockwise rotation in degrees around the center.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

impl Element {
    /// A new text element in the middle of the surface.
    #[must_use]
    pub fn new_text() -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ElementKind::Text,
            content: Some(NEW_TEXT_CONTENT.to_owned()),
            src: None,
            x: 50.0,
            y: 50.0,
            width: Some(DEFAULT_TEXT_WIDTH),
            rotation: 0.0,
            color: Some(DEFAULT_TEXT_COLOR.to_owned()),
            font_size: Some(DEFAULT_FONT_SIZE),
            text_align: Some(TextAlign::Center),
        }
    }

    /// A new image element in the middle of the surface.
    #[must_use]
    pub fn new_image(src: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ElementKind::Image,
            content: None,
            src: Some(src.into()),
            x: 50.0,
            y: 50.0,
            width: Some(DEFAULT_ELEMENT_WIDTH),
            rotation: 0.0,
            color: None,
            font_size: None,
            text_align: None,
        }
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        self.kind == ElementKind::Text
    }

    /// Center in percent of the container.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width in CSS pixels, falling back to the default.
    #[must_use]
    pub fn width_px(&self) -> f64 {
        self.width.unwrap_or(DEFAULT_ELEMENT_WIDTH)
    }

    #[must_use]
    pub fn font_size_px(&self) -> f64 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    #[must_use]
    pub fn align(&self) -> TextAlign {
        self.text_align.unwrap_or_default()
    }

    #[must_use]
    pub fn text_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_TEXT_COLOR)
    }

    /// Estimated half extents `(half_w, half_h)` in CSS pixels: text boxes
    /// are assumed 100 px tall, images square.
    #[must_use]
    pub fn estimated_half_extents(&self) -> (f64, f64) {
        let half_w = self.width_px() / 2.0;
        let half_h = if self.is_text() { TEXT_HALF_HEIGHT } else { half_w };
        (half_w, half_h)
    }

    /// Half extents using a measured height when the host reported one.
    #[must_use]
    pub fn half_extents(&self, measured_height: Option<f64>) -> (f64, f64) {
        let (half_w, half_h) = self.estimated_half_extents();
        match measured_height {
            Some(h) if h > 0.0 => (half_w, h / 2.0),
            _ => (half_w, half_h),
        }
    }

    /// Text content with markup removed, block breaks kept as newlines and
    /// common entities decoded.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.content.as_deref().map(strip_html).unwrap_or_default()
    }

    /// Apply a sparse update. Returns true if any field changed.
    pub fn apply(&mut self, partial: &PartialElement) -> bool {
        let before = self.clone();
        if let Some(ref content) = partial.content {
            self.content = Some(content.clone());
        }
        if let Some(ref src) = partial.src {
            self.src = Some(src.clone());
        }
        if let Some(x) = partial.x {
            self.x = x;
        }
        if let Some(y) = partial.y {
            self.y = y;
        }
        if let Some(w) = partial.width {
            self.width = Some(w);
        }
        if let Some(r) = partial.rotation {
            self.rotation = r;
        }
        if let Some(ref color) = partial.color {
            self.color = Some(color.clone());
        }
        if let Some(size) = partial.font_size {
            self.font_size = Some(size);
        }
        if let Some(align) = partial.text_align {
            self.text_align = Some(align);
        }
        *self != before
    }
}

/// Sparse update for an element. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

/// One freehand stroke. Points are in ink space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InkPath {
    pub points: Vec<InkPoint>,
    pub color: String,
    /// Line width in ink units.
    pub width: f64,
    /// Eraser strokes remove ink instead of adding it.
    #[serde(default)]
    pub is_eraser: bool,
}

/// A stroke sample in ink space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InkPoint {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for InkPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<InkPoint> for Point {
    fn from(p: InkPoint) -> Self {
        Point::new(p.x, p.y)
    }
}

/// Everything on the editing surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub paths: Vec<InkPath>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredScene {
    Legacy(Vec<Element>),
    Full(Scene),
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a saved `contentJson`, accepting the legacy bare element array.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when the text matches neither shape.
    pub fn from_content_json(raw: &str) -> Result<Self, serde_json::Error> {
        Ok(match serde_json::from_str::<StoredScene>(raw)? {
            StoredScene::Legacy(elements) => Self { elements, paths: Vec::new() },
            StoredScene::Full(scene) => scene,
        })
    }

    /// Serialize as `{"elements": [...], "paths": [...]}`.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_content_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.paths.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == *id)
    }

    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == *id)
    }

    /// Append an element on top of the others.
    pub fn insert(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove an element by id, returning it if it was present.
    pub fn remove(&mut self, id: &ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|el| el.id == *id)?;
        Some(self.elements.remove(index))
    }

    /// Apply a partial update. Returns true if the element exists and changed.
    pub fn apply_partial(&mut self, id: &ElementId, partial: &PartialElement) -> bool {
        self.get_mut(id).is_some_and(|el| el.apply(partial))
    }
}

/// Reduce an HTML fragment to plain text.
fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        out.push_str(&decode_entities(&rest[..start]));
        let Some(end) = rest[start..].find('>') else {
            rest = "";
            break;
        };
        let tag = rest[start + 1..start + end].trim().to_ascii_lowercase();
        if breaks_line(&tag) && !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        rest = &rest[start + end + 1..];
    }
    out.push_str(&decode_entities(rest));
    out.trim_end_matches('\n').to_owned()
}

fn breaks_line(tag: &str) -> bool {
    let name = tag.trim_start_matches('/').split(|c: char| c.is_whitespace() || c == '/').next().unwrap_or("");
    matches!(name, "br" | "div" | "p" | "li")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
