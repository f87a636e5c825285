//! Reactive mirror of the drawing editor's engine state.
//!
//! DESIGN
//! ======
//! The engine lives outside the reactive graph (`Rc<RefCell<..>>`). After
//! every batch of engine actions the host folds them into an [`EditorUi`]
//! held in a signal, which the toolbar and the element layer render from.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use canvas::doc::{Element, ElementId};
use canvas::engine::{Action, EngineCore};
use canvas::input::Tool;

#[derive(Clone, Debug, PartialEq)]
pub struct EditorUi {
    pub tool: Tool,
    pub ink_color: String,
    pub brush_size: f64,
    pub can_undo: bool,
    pub can_redo: bool,
    pub selected: Option<ElementId>,
    /// Text element open for in-place editing.
    pub editing: Option<ElementId>,
    pub cursor: String,
    /// Elements in stacking order, as the host lays them out.
    pub elements: Vec<Element>,
    /// A save is in flight; the toolbar is disabled.
    pub saving: bool,
}

impl EditorUi {
    /// Snapshot everything from the engine.
    #[must_use]
    pub fn from_core(core: &EngineCore) -> Self {
        Self {
            tool: core.tool(),
            ink_color: core.ui.ink_color.clone(),
            brush_size: core.ui.brush_size,
            can_undo: core.can_undo(),
            can_redo: core.can_redo(),
            selected: core.selection(),
            editing: core.editing(),
            cursor: core.cursor().to_owned(),
            elements: core.elements().to_vec(),
            saving: false,
        }
    }

    /// Fold a batch of engine actions in. Returns true when the ink layer
    /// needs repainting.
    pub fn apply(&mut self, actions: &[Action], core: &EngineCore) -> bool {
        let mut repaint = false;
        let mut elements_dirty = false;
        for action in actions {
            match action {
                Action::ElementAdded(_) | Action::ElementUpdated { .. } | Action::ElementRemoved { .. } => {
                    elements_dirty = true;
                }
                Action::PathCommitted(_) | Action::RenderNeeded => repaint = true,
                Action::SelectionChanged(id) => self.selected = *id,
                Action::EditTextRequested { id, .. } => self.editing = Some(*id),
                Action::HistoryChanged { can_undo, can_redo } => {
                    self.can_undo = *can_undo;
                    self.can_redo = *can_redo;
                    elements_dirty = true;
                }
                Action::SetCursor(cursor) => cursor.clone_into(&mut self.cursor),
            }
        }
        if elements_dirty {
            self.elements = core.elements().to_vec();
        }
        self.tool = core.tool();
        self.editing = core.editing();
        core.ui.ink_color.clone_into(&mut self.ink_color);
        self.brush_size = core.ui.brush_size;
        repaint
    }

    #[must_use]
    pub fn selected_element(&self) -> Option<&Element> {
        let id = self.selected?;
        self.elements.iter().find(|el| el.id == id)
    }

    /// Font size of the selected text, for the toolbar.
    #[must_use]
    pub fn selected_font_size(&self) -> Option<f64> {
        self.selected_element().filter(|el| el.is_text()).map(Element::font_size_px)
    }
}

impl Default for EditorUi {
    fn default() -> Self {
        Self::from_core(&EngineCore::new())
    }
}
