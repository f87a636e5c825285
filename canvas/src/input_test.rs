use uuid::Uuid;

use super::*;
use crate::doc::InkPoint;

#[test]
fn tool_default_is_select() {
    assert_eq!(Tool::default(), Tool::Select);
}

#[test]
fn ink_tools() {
    assert!(!Tool::Select.is_ink());
    assert!(Tool::Pen.is_ink());
    assert!(Tool::Eraser.is_ink());
}

#[test]
fn tool_names_round_trip() {
    for tool in [Tool::Select, Tool::Pen, Tool::Eraser] {
        assert_eq!(Tool::from_name(tool.name()), Some(tool));
    }
    assert_eq!(Tool::from_name("lasso"), None);
}

#[test]
fn command_modifier_is_ctrl_or_meta() {
    assert!(!Modifiers::default().command());
    assert!(Modifiers { ctrl: true, ..Default::default() }.command());
    assert!(Modifiers { meta: true, ..Default::default() }.command());
    assert!(!Modifiers { shift: true, alt: true, ..Default::default() }.command());
}

#[test]
fn dom_buttons() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
    assert_eq!(Button::from_dom(-1), Button::Primary);
}

#[test]
fn ui_state_defaults() {
    let ui = UiState::default();
    assert_eq!(ui.tool, Tool::Select);
    assert_eq!(ui.selected_id, None);
    assert_eq!(ui.editing_id, None);
    assert_eq!(ui.ink_color, "#2C2C2C");
    assert!((ui.brush_size - 5.0).abs() < f64::EPSILON);
}

#[test]
fn input_state_default_is_idle() {
    assert!(matches!(InputState::default(), InputState::Idle));
}

#[test]
fn gesture_element_ids() {
    let id = Uuid::new_v4();
    let drag = InputState::DraggingElement { id, start_screen: Point::default(), orig: Point::default() };
    let resize = InputState::ResizingElement { id, start_screen: Point::default(), orig_width: 200.0 };
    let rotate = InputState::RotatingElement {
        id,
        center: Point::default(),
        start_screen: Point::default(),
        orig_rotation: 0.0,
    };
    assert_eq!(drag.element_id(), Some(id));
    assert_eq!(resize.element_id(), Some(id));
    assert_eq!(rotate.element_id(), Some(id));

    let ink = InputState::Inking {
        path: InkPath {
            points: vec![InkPoint { x: 0.0, y: 0.0 }],
            color: "#000".to_owned(),
            width: 5.0,
            is_eraser: false,
        },
    };
    assert_eq!(ink.element_id(), None);
    assert_eq!(InputState::Idle.element_id(), None);
}
