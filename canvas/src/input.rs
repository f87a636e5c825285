//! Input model: tools, modifier keys, mouse buttons, and the gesture state machine.
//!
//! `Tool` and `Modifiers` capture the user's intent at the time of a pointer
//! event. `InputState` is the gesture tracked between pointer-down and
//! pointer-up, carrying the values captured at gesture start so each move can
//! be computed from scratch and the release can decide whether anything
//! changed.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::consts::{DEFAULT_BRUSH_SIZE, DEFAULT_INK_COLOR};
use crate::doc::{ElementId, InkPath};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Select, move, resize and rotate elements (default).
    #[default]
    Select,
    /// Freehand ink.
    Pen,
    /// Erase ink.
    Eraser,
}

impl Tool {
    /// Whether this tool draws strokes on the ink layer.
    #[must_use]
    pub fn is_ink(self) -> bool {
        matches!(self, Self::Pen | Self::Eraser)
    }

    /// Parse the name used by the host toolbar.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "select" => Some(Self::Select),
            "pen" => Some(Self::Pen),
            "eraser" => Some(Self::Eraser),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Pen => "pen",
            Self::Eraser => "eraser",
        }
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Meta / Command key.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button, pen contact, or single-finger touch.
    Primary,
    Middle,
    Secondary,
}

impl Button {
    /// Map a DOM `PointerEvent.button` value.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// A keyboard key as reported by the browser (e.g. `"Delete"`, `"z"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Persistent UI state visible to the host.
#[derive(Debug, Clone)]
pub struct UiState {
    pub tool: Tool,
    pub selected_id: Option<ElementId>,
    /// Text element whose HTML is being edited in place by the host.
    pub editing_id: Option<ElementId>,
    pub ink_color: String,
    /// Brush diameter in ink units.
    pub brush_size: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            tool: Tool::Select,
            selected_id: None,
            editing_id: None,
            ink_color: DEFAULT_INK_COLOR.to_owned(),
            brush_size: DEFAULT_BRUSH_SIZE,
        }
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Moving an element with the pointer.
    DraggingElement {
        id: ElementId,
        /// Screen position at pointer-down.
        start_screen: Point,
        /// Element center (percent) at pointer-down.
        orig: Point,
    },
    /// Dragging the resize handle.
    ResizingElement {
        id: ElementId,
        start_screen: Point,
        orig_width: f64,
    },
    /// Dragging the rotate handle.
    RotatingElement {
        id: ElementId,
        /// Screen-space pivot (the element center).
        center: Point,
        start_screen: Point,
        orig_rotation: f64,
    },
    /// Capturing a freehand stroke.
    Inking {
        path: InkPath,
    },
}

impl InputState {
    /// Element the current gesture operates on.
    #[must_use]
    pub fn element_id(&self) -> Option<ElementId> {
        match self {
            Self::DraggingElement { id, .. } | Self::ResizingElement { id, .. } | Self::RotatingElement { id, .. } => {
                Some(*id)
            }
            Self::Idle | Self::Inking { .. } => None,
        }
    }
}
