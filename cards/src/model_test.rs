use super::*;
use serde_json::json;

fn sample_card() -> Card {
    serde_json::from_value(json!({
        "id": "grandma-90",
        "creatorName": "Ana",
        "recipientName": "Grandma",
        "messages": [
            { "id": 1, "content": "<p>Happy birthday</p>", "authorName": "Ana",
              "userId": "u-1", "x": 20.0, "y": 30.0, "rotation": 0.0, "width": 300.0 },
            { "id": 2, "content": "<b>Love you</b>", "userId": "u-2", "x": 60.0, "y": 40.0, "rotation": 5.0 }
        ],
        "drawings": [
            { "id": 7, "imageData": "data:image/png;base64,AAAA", "contentJson": "[]",
              "userId": "u-1", "x": 50.0, "y": 50.0, "rotation": -10.0, "width": 400.0 }
        ],
        "wrappedData": null,
        "createdAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap()
}

#[test]
fn card_decodes_camel_case_and_ignores_unknown_fields() {
    let card = sample_card();
    assert_eq!(card.id, "grandma-90");
    assert_eq!(card.recipient_name.as_deref(), Some("Grandma"));
    assert_eq!(card.messages.len(), 2);
    assert_eq!(card.messages[0].author_name.as_deref(), Some("Ana"));
    assert_eq!(card.messages[1].width, None);
    assert_eq!(card.drawings[0].content_json.as_deref(), Some("[]"));
    assert_eq!(card.wrapped_data, None);
}

#[test]
fn card_with_missing_collections_decodes_empty() {
    let card: Card = serde_json::from_value(json!({ "id": "abc" })).unwrap();
    assert!(card.is_empty());
    assert!(card.needs_recipient());
    assert_eq!(card.recipient_or("friend"), "friend");
}

#[test]
fn blank_recipient_counts_as_missing() {
    let card = Card::new("abc", None, Some("  ".to_owned()));
    assert!(card.needs_recipient());
    assert!(!sample_card().needs_recipient());
}

#[test]
fn message_patch_serializes_only_present_fields() {
    let patch = MessagePatch {
        x: Some(12.5),
        rotation: Some(90.0),
        ..MessagePatch::default()
    };
    assert_eq!(
        serde_json::to_value(&patch).unwrap(),
        json!({ "x": 12.5, "rotation": 90.0 })
    );
    assert!(!patch.is_empty());
    assert!(MessagePatch::default().is_empty());
}

#[test]
fn drawing_patch_uses_camel_case_keys() {
    let patch = DrawingPatch {
        image_data: Some("data:x".to_owned()),
        content_json: Some("{}".to_owned()),
        ..DrawingPatch::default()
    };
    assert_eq!(
        serde_json::to_value(&patch).unwrap(),
        json!({ "imageData": "data:x", "contentJson": "{}" })
    );
}

#[test]
fn apply_to_merges_only_present_fields() {
    let mut card = sample_card();
    let patch = MessagePatch {
        content: Some("<p>edited</p>".to_owned()),
        width: Some(180.0),
        ..MessagePatch::default()
    };
    assert!(card.patch_message(1, &patch));
    let message = card.message(1).unwrap();
    assert_eq!(message.content, "<p>edited</p>");
    assert_eq!(message.width, Some(180.0));
    assert!((message.x - 20.0).abs() < f64::EPSILON);
    assert!(!card.patch_message(99, &patch));
}

#[test]
fn placement_patch_targets_the_right_collection() {
    let mut card = sample_card();
    let patch = ItemPatch::placement(ItemKind::Drawing, 10.0, 15.0, 250.0, 45.0);
    assert_eq!(patch.kind(), ItemKind::Drawing);
    assert!(card.patch_item(7, &patch));
    let drawing = card.drawing(7).unwrap();
    assert!((drawing.x - 10.0).abs() < f64::EPSILON);
    assert!((drawing.y - 15.0).abs() < f64::EPSILON);
    assert_eq!(drawing.width, Some(250.0));
    assert!((drawing.rotation - 45.0).abs() < f64::EPSILON);
    // Message 7 does not exist.
    let message_patch = ItemPatch::placement(ItemKind::Message, 1.0, 1.0, 100.0, 0.0);
    assert!(!card.patch_item(7, &message_patch));
}

#[test]
fn remove_item_reports_whether_anything_was_removed() {
    let mut card = sample_card();
    assert!(card.remove_item(ItemKind::Message, 2));
    assert_eq!(card.messages.len(), 1);
    assert!(!card.remove_item(ItemKind::Message, 2));
    assert!(card.remove_item(ItemKind::Drawing, 7));
    assert!(card.drawings.is_empty());
}

#[test]
fn ownership_follows_user_id() {
    let card = sample_card();
    assert!(card.is_owner(ItemKind::Message, 1, "u-1"));
    assert!(!card.is_owner(ItemKind::Message, 2, "u-1"));
    assert!(card.is_owner(ItemKind::Drawing, 7, "u-1"));
    assert!(!card.is_owner(ItemKind::Drawing, 8, "u-1"));
}

#[test]
fn new_message_omits_absent_optionals() {
    let body = NewMessage {
        content: "<p>hi</p>".to_owned(),
        author_name: Some("Ana".to_owned()),
        user_id: None,
        x: 50.0,
        y: 50.0,
        rotation: 0.0,
        width: None,
        font_family: None,
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({ "content": "<p>hi</p>", "authorName": "Ana", "x": 50.0, "y": 50.0, "rotation": 0.0 })
    );
}

#[test]
fn item_kind_names() {
    assert_eq!(ItemKind::Message.as_str(), "message");
    assert_eq!(serde_json::to_value(ItemKind::Drawing).unwrap(), json!("drawing"));
}
