#![allow(clippy::float_cmp)]

use super::*;

fn exported() -> ExportedDrawing {
    ExportedDrawing {
        image_data: "data:image/png;base64,AAAA".to_owned(),
        content_json: r#"{"elements":[],"paths":[]}"#.to_owned(),
        x: 42.5,
        y: 60.0,
    }
}

fn named() -> Identity {
    Identity { user_id: "u1".to_owned(), user_name: Some("Sam".to_owned()) }
}

#[test]
fn new_drawing_is_signed_by_identity() {
    let DrawingSave::Create(body) = plan_save(exported(), None, &named()) else {
        panic!("expected a new drawing");
    };
    assert_eq!(body.user_id.as_deref(), Some("u1"));
    assert_eq!(body.author_name.as_deref(), Some("Sam"));
    assert_eq!((body.x, body.y), (42.5, 60.0));
    assert!(body.image_data.starts_with("data:image/png"));
}

#[test]
fn anonymous_drawing_uses_fallback_name() {
    let who = Identity { user_id: "u2".to_owned(), user_name: None };
    let DrawingSave::Create(body) = plan_save(exported(), None, &who) else {
        panic!("expected a new drawing");
    };
    assert_eq!(body.author_name.as_deref(), Some("Anonymous"));
}

#[test]
fn re_edit_updates_image_scene_and_position_only() {
    let DrawingSave::Update { id, patch } = plan_save(exported(), Some(7), &named()) else {
        panic!("expected an update");
    };
    assert_eq!(id, 7);
    assert_eq!(patch.content_json.as_deref(), Some(r#"{"elements":[],"paths":[]}"#));
    assert_eq!((patch.x, patch.y), (Some(42.5), Some(60.0)));
    assert_eq!(patch.width, None);
    assert_eq!(patch.rotation, None);
}

#[test]
fn drawing_id_parses_from_query() {
    assert_eq!(parse_drawing_id(Some("12")), Some(12));
    assert_eq!(parse_drawing_id(Some(" 12 ")), Some(12));
    assert_eq!(parse_drawing_id(Some("abc")), None);
    assert_eq!(parse_drawing_id(None), None);
}
