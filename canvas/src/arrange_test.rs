#![allow(clippy::float_cmp)]

use cards::{Card, Drawing, ItemPatch, Message};

use super::*;

const ME: &str = "user-me";

fn message(id: i64, user: &str, width: Option<f64>) -> Message {
    Message {
        id,
        content: "<p>hi</p>".to_owned(),
        author_name: None,
        user_id: Some(user.to_owned()),
        x: 50.0,
        y: 50.0,
        rotation: 0.0,
        width,
        height: None,
        font_family: None,
    }
}

fn drawing(id: i64, user: &str) -> Drawing {
    Drawing {
        id,
        image_data: "data:x".to_owned(),
        content_json: None,
        author_name: None,
        user_id: Some(user.to_owned()),
        x: 25.0,
        y: 75.0,
        rotation: 10.0,
        width: None,
        height: None,
    }
}

fn card() -> Card {
    let mut card = Card::new("abc", None, Some("Grandma".to_owned()));
    card.messages = vec![message(1, ME, None), message(2, "someone-else", Some(180.0))];
    card.drawings = vec![drawing(3, ME)];
    card
}

fn arrange() -> Arrange {
    let mut arrange = Arrange::from_card(&card(), Some(ME));
    arrange.set_viewport(Viewport::new(0.0, 0.0, 1000.0, 500.0));
    arrange
}

// =============================================================
// Placements
// =============================================================

#[test]
fn placements_use_default_widths() {
    let a = arrange();
    assert_eq!(a.items().len(), 3);
    assert_eq!(a.get(ItemKind::Message, 1).map(|p| p.width), Some(300.0));
    assert_eq!(a.get(ItemKind::Message, 2).map(|p| p.width), Some(180.0));
    assert_eq!(a.get(ItemKind::Drawing, 3).map(|p| p.width), Some(400.0));
}

#[test]
fn ownership_requires_matching_user() {
    let a = arrange();
    assert!(a.can_edit(ItemKind::Message, 1));
    assert!(!a.can_edit(ItemKind::Message, 2));
    assert!(a.can_edit(ItemKind::Drawing, 3));
    assert!(!a.can_edit(ItemKind::Drawing, 1));

    let anonymous = Arrange::from_card(&card(), None);
    assert!(!anonymous.can_edit(ItemKind::Message, 1));
}

// =============================================================
// Gestures
// =============================================================

#[test]
fn drag_moves_in_percent_and_reports_once() {
    let mut a = arrange();
    assert!(a.begin(ItemKind::Message, 1, ArrangeHandle::Body, Point::new(500.0, 250.0), None));
    a.update(Point::new(550.0, 260.0));
    let live = a.update(Point::new(600.0, 300.0)).cloned().unwrap();
    assert_eq!((live.x, live.y), (60.0, 60.0));

    let change = a.end().unwrap();
    assert_eq!(change.kind, ItemKind::Message);
    assert_eq!((change.x, change.y), (60.0, 60.0));
    assert_eq!(change.width, 300.0);
    assert!(!a.is_active());
    assert!(a.end().is_none());
}

#[test]
fn resize_clamps_at_one_hundred() {
    let mut a = arrange();
    assert!(a.begin(ItemKind::Drawing, 3, ArrangeHandle::Resize, Point::new(400.0, 400.0), None));
    assert_eq!(a.update(Point::new(450.0, 0.0)).map(|p| p.width), Some(450.0));
    assert_eq!(a.update(Point::new(0.0, 0.0)).map(|p| p.width), Some(100.0));
    assert_eq!(a.end().map(|c| c.width), Some(100.0));
}

#[test]
fn rotate_around_given_center() {
    let mut a = arrange();
    let center = Point::new(250.0, 375.0);
    assert!(a.begin(ItemKind::Drawing, 3, ArrangeHandle::Rotate, Point::new(350.0, 375.0), Some(center)));
    let rotation = a.update(Point::new(250.0, 475.0)).map(|p| p.rotation).unwrap();
    assert!((rotation - 100.0).abs() < 1e-9);
}

#[test]
fn rotate_center_defaults_to_placement() {
    let mut a = arrange();
    // Drawing 3 sits at (25%, 75%) of 1000×500, i.e. screen (250, 375).
    assert!(a.begin(ItemKind::Drawing, 3, ArrangeHandle::Rotate, Point::new(250.0, 275.0), None));
    let rotation = a.update(Point::new(350.0, 375.0)).map(|p| p.rotation).unwrap();
    assert!((rotation - 100.0).abs() < 1e-9);
}

#[test]
fn gesture_without_movement_reports_nothing() {
    let mut a = arrange();
    assert!(a.begin(ItemKind::Message, 1, ArrangeHandle::Body, Point::new(10.0, 10.0), None));
    a.update(Point::new(10.0, 10.0));
    assert!(a.end().is_none());
}

#[test]
fn foreign_items_can_be_arranged_but_not_removed() {
    let mut a = arrange();
    assert!(a.can_arrange(ItemKind::Message, 2));
    assert!(!a.can_edit(ItemKind::Message, 2));
    assert!(a.begin(ItemKind::Message, 2, ArrangeHandle::Body, Point::new(500.0, 500.0), None));
    assert!(a.update(Point::new(600.0, 500.0)).is_some());
    let change = a.end().expect("moved");
    assert_eq!((change.kind, change.id), (ItemKind::Message, 2));
    assert!(!a.remove(ItemKind::Message, 2));
    assert!(a.get(ItemKind::Message, 2).is_some());
}

#[test]
fn unknown_items_refuse_gestures() {
    let mut a = arrange();
    assert!(!a.can_arrange(ItemKind::Message, 99));
    assert!(!a.begin(ItemKind::Message, 99, ArrangeHandle::Body, Point::new(0.0, 0.0), None));
    assert!(a.update(Point::new(50.0, 50.0)).is_none());
}

#[test]
fn view_mode_locks_and_cancels() {
    let mut a = arrange();
    assert!(a.begin(ItemKind::Message, 1, ArrangeHandle::Body, Point::new(500.0, 250.0), None));
    a.update(Point::new(600.0, 250.0));
    a.set_view_mode(true);
    assert!(!a.is_active());
    assert_eq!(a.get(ItemKind::Message, 1).map(|p| p.x), Some(50.0));
    assert!(!a.can_edit(ItemKind::Message, 1));
    assert!(!a.can_arrange(ItemKind::Message, 2));
    assert!(!a.begin(ItemKind::Message, 1, ArrangeHandle::Body, Point::new(0.0, 0.0), None));
    assert!(!a.begin(ItemKind::Message, 2, ArrangeHandle::Body, Point::new(0.0, 0.0), None));

    a.set_view_mode(false);
    assert!(a.can_edit(ItemKind::Message, 1));
}

#[test]
fn reload_keeps_live_placement_of_active_item() {
    let mut a = arrange();
    assert!(a.begin(ItemKind::Message, 1, ArrangeHandle::Body, Point::new(500.0, 250.0), None));
    a.update(Point::new(600.0, 250.0));
    a.load(&card(), Some(ME));
    assert_eq!(a.get(ItemKind::Message, 1).map(|p| p.x), Some(60.0));
    assert!(a.end().is_some());
}

#[test]
fn reload_drops_gesture_on_vanished_item() {
    let mut a = arrange();
    assert!(a.begin(ItemKind::Message, 1, ArrangeHandle::Body, Point::new(500.0, 250.0), None));
    let mut trimmed = card();
    trimmed.messages.retain(|m| m.id != 1);
    a.load(&trimmed, Some(ME));
    assert!(!a.is_active());
}

#[test]
fn remove_owned_item() {
    let mut a = arrange();
    assert!(a.remove(ItemKind::Drawing, 3));
    assert!(a.get(ItemKind::Drawing, 3).is_none());
}

#[test]
fn change_becomes_placement_patch() {
    let change = PlacementChange { kind: ItemKind::Drawing, id: 3, x: 1.0, y: 2.0, width: 150.0, rotation: 45.0 };
    let ItemPatch::Drawing(patch) = change.to_patch() else {
        panic!("expected a drawing patch");
    };
    assert_eq!(patch.x, Some(1.0));
    assert_eq!(patch.width, Some(150.0));
    assert_eq!(patch.rotation, Some(45.0));
    assert_eq!(patch.image_data, None);
}
