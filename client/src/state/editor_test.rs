#![allow(clippy::float_cmp)]

use canvas::camera::Point;
use canvas::input::{Button, Modifiers};

use super::*;

fn core() -> EngineCore {
    let mut core = EngineCore::new();
    core.set_viewport(0.0, 0.0, 1000.0, 500.0, 1.0);
    core
}

#[test]
fn default_matches_fresh_engine() {
    let ui = EditorUi::default();
    assert_eq!(ui.tool, Tool::Select);
    assert!(!ui.can_undo && !ui.can_redo);
    assert!(ui.elements.is_empty());
    assert!(!ui.saving);
}

#[test]
fn adding_text_lists_and_selects_it() {
    let mut core = core();
    let mut ui = EditorUi::from_core(&core);
    let actions = core.add_text();
    ui.apply(&actions, &core);
    assert_eq!(ui.elements.len(), 1);
    assert!(ui.can_undo);
    assert_eq!(ui.selected, core.selection());
    assert!(ui.selected_font_size().is_some());
}

#[test]
fn undo_refreshes_elements() {
    let mut core = core();
    let mut ui = EditorUi::from_core(&core);
    let actions = core.add_text();
    ui.apply(&actions, &core);
    let actions = core.undo();
    let repaint = ui.apply(&actions, &core);
    assert!(repaint);
    assert!(ui.elements.is_empty());
    assert!(ui.can_redo);
    assert_eq!(ui.selected, None);
}

#[test]
fn ink_stroke_requests_repaint() {
    let mut core = core();
    let mut ui = EditorUi::from_core(&core);
    let actions = core.set_tool(Tool::Pen);
    ui.apply(&actions, &core);
    assert_eq!(ui.tool, Tool::Pen);

    let mut batch = core.on_pointer_down(Point::new(100.0, 100.0), Button::Primary, Modifiers::default());
    batch.extend(core.on_pointer_move(Point::new(200.0, 150.0), Modifiers::default()));
    batch.extend(core.on_pointer_up(Point::new(200.0, 150.0), Button::Primary, Modifiers::default()));
    assert!(ui.apply(&batch, &core));
    assert!(ui.can_undo);
}

#[test]
fn brush_and_color_follow_engine() {
    let mut core = core();
    let mut ui = EditorUi::from_core(&core);
    let mut actions = core.set_ink_color("#FF0000");
    actions.extend(core.set_brush_size(80.0));
    ui.apply(&actions, &core);
    assert_eq!(ui.ink_color, "#FF0000");
    assert_eq!(ui.brush_size, 50.0);
}

#[test]
fn selected_font_size_ignores_images() {
    let mut core = core();
    let mut ui = EditorUi::from_core(&core);
    let actions = core.add_image("data:image/png;base64,AAAA");
    ui.apply(&actions, &core);
    assert!(ui.selected_element().is_some());
    assert_eq!(ui.selected_font_size(), None);
}
