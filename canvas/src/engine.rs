use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::{HtmlCanvasElement, HtmlImageElement};

use crate::bounds::{ExportBounds, export_bounds};
use crate::camera::{Point, Viewport};
use crate::consts::{
    DEFAULT_FONT_SIZE, EDITOR_MIN_WIDTH, ERASER_COLOR, INK_SPACE, MAX_BRUSH_SIZE, MAX_FONT_SIZE, MIN_BRUSH_SIZE,
    MIN_FONT_SIZE,
};
use crate::cursor;
use crate::doc::{Element, ElementId, InkPath, PartialElement, Scene, TextAlign};
use crate::hit::{self, HitPart};
use crate::history::History;
use crate::input::{Button, InputState, Key, Modifiers, Tool, UiState};
use crate::render;
use crate::transform;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from engine operations for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ElementAdded(Element),
    ElementUpdated { id: ElementId, fields: PartialElement },
    ElementRemoved { id: ElementId },
    /// A finished ink stroke was added to the scene.
    PathCommitted(InkPath),
    SelectionChanged(Option<ElementId>),
    /// The host should open an in-place editor for this text element.
    EditTextRequested { id: ElementId, html: String },
    /// History moved; the scene may have been replaced wholesale.
    HistoryChanged { can_undo: bool, can_redo: bool },
    SetCursor(String),
    /// The ink layer needs repainting.
    RenderNeeded,
}

/// Core engine state: all logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub scene: Scene,
    pub history: History,
    pub ui: UiState,
    pub input: InputState,
    pub viewport: Viewport,
    pub dpr: f64,
    /// Rendered heights reported by the host, used for hit-testing.
    heights: HashMap<ElementId, f64>,
    cursor: String,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            scene: Scene::new(),
            history: History::default(),
            ui: UiState::default(),
            input: InputState::default(),
            viewport: Viewport::default(),
            dpr: 1.0,
            heights: HashMap::new(),
            cursor: cursor::DEFAULT.to_owned(),
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace the scene, e.g. when re-editing a saved drawing. History
    /// restarts from the loaded content.
    pub fn load_content(&mut self, scene: Scene) -> Vec<Action> {
        self.history.reset(scene.clone());
        self.scene = scene;
        self.heights.clear();
        self.input = InputState::Idle;
        let mut actions = self.clear_selection();
        actions.push(self.history_changed());
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Parse and load a saved `contentJson`.
    ///
    /// # Errors
    ///
    /// Returns the JSON error; the current scene is left untouched.
    pub fn load_content_json(&mut self, raw: &str) -> Result<Vec<Action>, serde_json::Error> {
        let scene = Scene::from_content_json(raw)?;
        Ok(self.load_content(scene))
    }

    /// Serialized scene for persistence.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn content_json(&self) -> Result<String, serde_json::Error> {
        self.scene.to_content_json()
    }

    /// Update the container rect (screen CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, left: f64, top: f64, width: f64, height: f64, dpr: f64) {
        self.viewport = Viewport::new(left, top, width, height);
        self.dpr = dpr;
    }

    /// Record the rendered height of an element as laid out by the host.
    pub fn set_element_height(&mut self, id: ElementId, height: f64) {
        if height > 0.0 {
            self.heights.insert(id, height);
        } else {
            self.heights.remove(&id);
        }
    }

    // --- Tools ---

    /// Switch tools. Any selection is dropped.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.ui.tool = tool;
        self.input = InputState::Idle;
        let mut actions = self.clear_selection();
        actions.extend(self.refresh_cursor());
        actions
    }

    pub fn set_ink_color(&mut self, color: &str) -> Vec<Action> {
        color.clone_into(&mut self.ui.ink_color);
        self.refresh_cursor()
    }

    /// Set the brush diameter, clamped to the editor's range.
    pub fn set_brush_size(&mut self, size: f64) -> Vec<Action> {
        self.ui.brush_size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        self.refresh_cursor()
    }

    // --- Elements ---

    /// Add a placeholder text box in the middle and select it.
    pub fn add_text(&mut self) -> Vec<Action> {
        self.add_element(Element::new_text())
    }

    /// Add an image sticker in the middle and select it.
    pub fn add_image(&mut self, src: &str) -> Vec<Action> {
        self.add_element(Element::new_image(src))
    }

    fn add_element(&mut self, element: Element) -> Vec<Action> {
        let id = element.id;
        self.scene.insert(element.clone());
        self.ui.tool = Tool::Select;
        self.ui.selected_id = Some(id);
        self.ui.editing_id = None;
        self.input = InputState::Idle;
        let mut actions = vec![Action::ElementAdded(element), Action::SelectionChanged(Some(id))];
        actions.extend(self.refresh_cursor());
        actions.push(self.record());
        actions
    }

    /// Apply a sparse update. With `record`, a history snapshot is taken when
    /// anything changed.
    pub fn update_element(&mut self, id: &ElementId, fields: PartialElement, record: bool) -> Vec<Action> {
        if !self.scene.apply_partial(id, &fields) {
            return Vec::new();
        }
        let mut actions = vec![Action::ElementUpdated { id: *id, fields }];
        if record {
            actions.push(self.record());
        }
        actions
    }

    /// Store HTML typed into a text element and finish editing it.
    pub fn commit_text(&mut self, id: &ElementId, html: String) -> Vec<Action> {
        if self.ui.editing_id == Some(*id) {
            self.ui.editing_id = None;
        }
        let fields = PartialElement { content: Some(html), ..PartialElement::default() };
        self.update_element(id, fields, true)
    }

    pub fn remove_element(&mut self, id: &ElementId) -> Vec<Action> {
        if self.scene.remove(id).is_none() {
            return Vec::new();
        }
        self.heights.remove(id);
        if self.input.element_id() == Some(*id) {
            self.input = InputState::Idle;
        }
        let mut actions = vec![Action::ElementRemoved { id: *id }];
        if self.ui.selected_id == Some(*id) || self.ui.editing_id == Some(*id) {
            actions.extend(self.clear_selection());
        }
        actions.push(self.record());
        actions
    }

    pub fn delete_selected(&mut self) -> Vec<Action> {
        match self.ui.selected_id {
            Some(id) => self.remove_element(&id),
            None => Vec::new(),
        }
    }

    /// Step the selected text's font size by `delta`, clamped to 12..=100.
    pub fn change_font_size(&mut self, delta: f64) -> Vec<Action> {
        let Some(el) = self.selected_text() else {
            return Vec::new();
        };
        let (id, size) = (el.id, el.font_size_px());
        let next = (size + delta).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self.update_element(&id, PartialElement { font_size: Some(next), ..PartialElement::default() }, true)
    }

    /// Set the selected text's font size directly. Sizes below 1 reset to the
    /// default.
    pub fn set_font_size(&mut self, size: f64) -> Vec<Action> {
        let Some(id) = self.selected_text().map(|el| el.id) else {
            return Vec::new();
        };
        let size = if size < 1.0 { DEFAULT_FONT_SIZE } else { size.min(MAX_FONT_SIZE) };
        self.update_element(&id, PartialElement { font_size: Some(size), ..PartialElement::default() }, true)
    }

    pub fn set_text_align(&mut self, align: TextAlign) -> Vec<Action> {
        let Some(id) = self.selected_text().map(|el| el.id) else {
            return Vec::new();
        };
        self.update_element(&id, PartialElement { text_align: Some(align), ..PartialElement::default() }, true)
    }

    /// Select an element, or clear the selection with `None`.
    pub fn select(&mut self, id: Option<ElementId>) -> Vec<Action> {
        let id = id.filter(|id| self.scene.get(id).is_some());
        if id == self.ui.selected_id {
            return Vec::new();
        }
        self.ui.selected_id = id;
        if self.ui.editing_id.is_some() && self.ui.editing_id != id {
            self.ui.editing_id = None;
        }
        vec![Action::SelectionChanged(id)]
    }

    // --- History ---

    pub fn undo(&mut self) -> Vec<Action> {
        let Some(snapshot) = self.history.undo().cloned() else {
            return Vec::new();
        };
        self.restore(snapshot)
    }

    pub fn redo(&mut self) -> Vec<Action> {
        let Some(snapshot) = self.history.redo().cloned() else {
            return Vec::new();
        };
        self.restore(snapshot)
    }

    fn restore(&mut self, snapshot: Scene) -> Vec<Action> {
        self.scene = snapshot;
        self.input = InputState::Idle;
        let mut actions = self.clear_selection();
        actions.push(self.history_changed());
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Snapshot the live scene into history.
    fn record(&mut self) -> Action {
        self.history.push(self.scene.clone());
        self.history_changed()
    }

    fn history_changed(&self) -> Action {
        Action::HistoryChanged { can_undo: self.history.can_undo(), can_redo: self.history.can_redo() }
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }

        if self.ui.tool.is_ink() {
            let is_eraser = self.ui.tool == Tool::Eraser;
            let path = InkPath {
                points: vec![self.viewport.screen_to_ink(screen_pt).into()],
                color: if is_eraser { ERASER_COLOR.to_owned() } else { self.ui.ink_color.clone() },
                width: self.ui.brush_size,
                is_eraser,
            };
            self.input = InputState::Inking { path };
            return vec![Action::RenderNeeded];
        }

        let Some(hit) = hit::hit_test(screen_pt, &self.scene, &self.viewport, &self.heights, self.ui.selected_id)
        else {
            return self.clear_selection();
        };
        let Some(el) = self.scene.get(&hit.element_id) else {
            return Vec::new();
        };
        let id = el.id;

        match hit.part {
            HitPart::DeleteButton => self.remove_element(&id),
            HitPart::RotateHandle => {
                self.input = InputState::RotatingElement {
                    id,
                    center: self.viewport.percent_to_screen(el.center()),
                    start_screen: screen_pt,
                    orig_rotation: el.rotation,
                };
                Vec::new()
            }
            HitPart::ResizeHandle => {
                self.input = InputState::ResizingElement { id, start_screen: screen_pt, orig_width: el.width_px() };
                Vec::new()
            }
            HitPart::Body => {
                if self.ui.editing_id == Some(id) {
                    // Pointer goes to the host's text editor.
                    return Vec::new();
                }
                self.input = InputState::DraggingElement { id, start_screen: screen_pt, orig: el.center() };
                let mut actions = self.select(Some(id));
                actions.extend(self.set_cursor("grabbing"));
                actions
            }
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        match &mut self.input {
            InputState::Idle => self.hover(screen_pt),
            InputState::Inking { path } => {
                path.points.push(self.viewport.screen_to_ink(screen_pt).into());
                vec![Action::RenderNeeded]
            }
            InputState::DraggingElement { id, start_screen, orig } => {
                let id = *id;
                let pos = transform::drag(*orig, screen_pt.sub(*start_screen), &self.viewport);
                let fields = PartialElement { x: Some(pos.x), y: Some(pos.y), ..PartialElement::default() };
                self.update_element(&id, fields, false)
            }
            InputState::ResizingElement { id, start_screen, orig_width } => {
                let id = *id;
                let width = transform::resize(*orig_width, screen_pt.x - start_screen.x, EDITOR_MIN_WIDTH);
                let fields = PartialElement { width: Some(width), ..PartialElement::default() };
                self.update_element(&id, fields, false)
            }
            InputState::RotatingElement { id, center, start_screen, orig_rotation } => {
                let id = *id;
                let rotation = transform::rotate(*orig_rotation, *center, *start_screen, screen_pt);
                let fields = PartialElement { rotation: Some(rotation), ..PartialElement::default() };
                self.update_element(&id, fields, false)
            }
        }
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        self.finish_gesture()
    }

    /// Leaving the surface ends a stroke. Element gestures continue since the
    /// host captures the pointer for them.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        if matches!(self.input, InputState::Inking { .. }) {
            return self.finish_gesture();
        }
        Vec::new()
    }

    /// Double-clicking a text element opens it for editing.
    pub fn on_double_click(&mut self, screen_pt: Point) -> Vec<Action> {
        if self.ui.tool != Tool::Select {
            return Vec::new();
        }
        let hit = hit::hit_test(screen_pt, &self.scene, &self.viewport, &self.heights, self.ui.selected_id);
        let Some(el) = hit.filter(|h| h.part == HitPart::Body).and_then(|h| self.scene.get(&h.element_id)) else {
            return Vec::new();
        };
        if !el.is_text() {
            return Vec::new();
        }
        let (id, html) = (el.id, el.content.clone().unwrap_or_default());
        let mut actions = self.select(Some(id));
        self.ui.editing_id = Some(id);
        actions.push(Action::EditTextRequested { id, html });
        actions
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        let name = key.0.as_str();

        if self.ui.editing_id.is_some() {
            // Everything but Escape belongs to the text editor.
            return if name == "Escape" { self.clear_selection() } else { Vec::new() };
        }

        if modifiers.command() {
            return match name {
                "z" | "Z" if modifiers.shift => self.redo(),
                "z" | "Z" => self.undo(),
                "y" | "Y" => self.redo(),
                _ => Vec::new(),
            };
        }

        match name {
            "Delete" | "Backspace" => self.delete_selected(),
            "Escape" => self.clear_selection(),
            _ => Vec::new(),
        }
    }

    fn finish_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Inking { path } => {
                if path.points.is_empty() {
                    return Vec::new();
                }
                self.scene.paths.push(path.clone());
                vec![Action::PathCommitted(path), self.record(), Action::RenderNeeded]
            }
            InputState::DraggingElement { id, .. }
            | InputState::ResizingElement { id, .. }
            | InputState::RotatingElement { id, .. } => {
                let mut actions = self.set_cursor("grab");
                let before = self.history.current().and_then(|s| s.get(&id));
                if before != self.scene.get(&id) {
                    actions.push(self.record());
                }
                actions
            }
        }
    }

    fn hover(&mut self, screen_pt: Point) -> Vec<Action> {
        if self.ui.tool != Tool::Select {
            return Vec::new();
        }
        let part = hit::hit_test(screen_pt, &self.scene, &self.viewport, &self.heights, self.ui.selected_id)
            .map(|h| h.part);
        self.set_cursor(cursor::for_hover(part))
    }

    // --- Selection / cursor helpers ---

    fn clear_selection(&mut self) -> Vec<Action> {
        let had = self.ui.selected_id.is_some() || self.ui.editing_id.is_some();
        self.ui.selected_id = None;
        self.ui.editing_id = None;
        if had { vec![Action::SelectionChanged(None)] } else { Vec::new() }
    }

    fn refresh_cursor(&mut self) -> Vec<Action> {
        let next = cursor::for_tool(self.ui.tool, &self.ui.ink_color, self.ui.brush_size);
        self.set_cursor(&next)
    }

    fn set_cursor(&mut self, next: &str) -> Vec<Action> {
        if self.cursor == next {
            return Vec::new();
        }
        next.clone_into(&mut self.cursor);
        vec![Action::SetCursor(next.to_owned())]
    }

    fn selected_text(&self) -> Option<&Element> {
        self.ui.selected_id.and_then(|id| self.scene.get(&id)).filter(|el| el.is_text())
    }

    // --- Export ---

    /// Crop box for the export image, or `None` for an empty scene.
    #[must_use]
    pub fn export_bounds(&self) -> Option<ExportBounds> {
        export_bounds(&self.scene, &self.viewport)
    }

    /// Where the saved drawing goes on the card: the content center, or the
    /// middle when there is no content.
    #[must_use]
    pub fn drawing_position(&self) -> Point {
        self.export_bounds().map_or(Point::new(50.0, 50.0), |b| b.center())
    }

    /// Drop selection chrome and tool state before rasterizing.
    pub fn prepare_for_export(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        self.ui.tool = Tool::Select;
        let mut actions = self.clear_selection();
        actions.extend(self.set_cursor(cursor::DEFAULT));
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.ui.selected_id
    }

    #[must_use]
    pub fn editing(&self) -> Option<ElementId> {
        self.ui.editing_id
    }

    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.scene.get(id)
    }

    #[must_use]
    pub fn selected_element(&self) -> Option<&Element> {
        self.ui.selected_id.and_then(|id| self.scene.get(&id))
    }

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.scene.elements
    }

    #[must_use]
    pub fn measured_height(&self, id: &ElementId) -> Option<f64> {
        self.heights.get(id).copied()
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    #[must_use]
    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The stroke being drawn, if any.
    #[must_use]
    pub fn active_path(&self) -> Option<&InkPath> {
        match &self.input {
            InputState::Inking { path } => Some(path),
            _ => None,
        }
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the ink layer canvas.
pub struct Engine {
    canvas: HtmlCanvasElement,
    images: HashMap<ElementId, HtmlImageElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given ink canvas. The canvas backing
    /// store is fixed to the ink space; CSS stretches it over the container.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let side = INK_SPACE as u32;
        canvas.set_width(side);
        canvas.set_height(side);
        Self { canvas, images: HashMap::new(), core: EngineCore::new() }
    }

    // --- Delegated data inputs ---

    pub fn load_content(&mut self, scene: Scene) -> Vec<Action> {
        let actions = self.core.load_content(scene);
        self.sync_images();
        actions
    }

    /// # Errors
    ///
    /// Returns the JSON error when the content cannot be parsed.
    pub fn load_content_json(&mut self, raw: &str) -> Result<Vec<Action>, serde_json::Error> {
        let actions = self.core.load_content_json(raw)?;
        self.sync_images();
        Ok(actions)
    }

    pub fn set_viewport(&mut self, left: f64, top: f64, width: f64, height: f64, dpr: f64) {
        self.core.set_viewport(left, top, width, height, dpr);
    }

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.core.set_tool(tool)
    }

    pub fn add_text(&mut self) -> Vec<Action> {
        self.core.add_text()
    }

    pub fn add_image(&mut self, src: &str) -> Vec<Action> {
        let actions = self.core.add_image(src);
        self.sync_images();
        actions
    }

    pub fn undo(&mut self) -> Vec<Action> {
        let actions = self.core.undo();
        self.sync_images();
        actions
    }

    pub fn redo(&mut self) -> Vec<Action> {
        let actions = self.core.redo();
        self.sync_images();
        actions
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt, modifiers)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button, modifiers)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_double_click(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_double_click(screen_pt)
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        let actions = self.core.on_key_down(key, modifiers);
        self.sync_images();
        actions
    }

    // --- Render ---

    /// Repaint the ink layer.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = render::context_2d(&self.canvas)?;
        render::draw_ink(&ctx, &self.core.scene.paths, self.core.active_path())
    }

    /// Rasterize the scene as a PNG data URL, cropped to the export bounds
    /// (or the whole surface when empty).
    ///
    /// # Errors
    ///
    /// Returns `Err` if an offscreen canvas cannot be created or drawn.
    pub fn export_png(&mut self) -> Result<String, JsValue> {
        self.sync_images();
        let viewport = self.core.viewport;
        let crop = self.core.export_bounds().map_or(
            render::Crop { x: 0.0, y: 0.0, width: viewport.width, height: viewport.height },
            |b| render::Crop { x: b.x, y: b.y, width: b.width, height: b.height },
        );
        render::export_png(&render::ExportInput {
            scene: &self.core.scene,
            viewport: &viewport,
            ink: &self.canvas,
            images: &self.images,
            heights: &self.core.heights,
            crop,
        })
    }

    /// Keep one decoded image per image element, for export.
    fn sync_images(&mut self) {
        let scene = &self.core.scene;
        self.images.retain(|id, _| scene.get(id).is_some_and(|el| el.src.is_some()));
        for el in &scene.elements {
            let Some(src) = el.src.as_deref() else {
                continue;
            };
            if self.images.get(&el.id).is_some_and(|img| img.src() == src) {
                continue;
            }
            match HtmlImageElement::new() {
                Ok(img) => {
                    img.set_src(src);
                    self.images.insert(el.id, img);
                }
                Err(err) => log_js_error(&err),
            }
        }
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.core.selection()
    }

    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.core.element(id)
    }
}

fn log_js_error(err: &JsValue) {
    web_sys::console::error_1(err);
}
