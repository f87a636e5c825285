#![allow(clippy::float_cmp)]

use cards::{Drawing, Message};

use super::*;

fn card() -> Card {
    let mut card = Card::new("abc", None, Some("Jo".to_owned()));
    card.messages.push(Message {
        id: 1,
        content: "<p>Hi</p>".to_owned(),
        author_name: None,
        user_id: Some("u1".to_owned()),
        x: 20.0,
        y: 30.0,
        rotation: 5.0,
        width: Some(250.0),
        height: None,
        font_family: None,
    });
    card.drawings.push(Drawing {
        id: 2,
        image_data: "data:image/png;base64,AAAA".to_owned(),
        content_json: None,
        author_name: Some("Sam".to_owned()),
        user_id: Some("u2".to_owned()),
        x: 60.0,
        y: 40.0,
        rotation: 0.0,
        width: None,
        height: None,
    });
    card
}

#[test]
fn gallery_lists_messages_then_drawings() {
    let items = gallery(&card());
    let keys: Vec<_> = items.iter().map(|i| (i.placement.kind, i.placement.id)).collect();
    assert_eq!(keys, vec![(ItemKind::Message, 1), (ItemKind::Drawing, 2)]);
    assert_eq!(items[0].placement.width, 250.0);
    assert_eq!(items[1].placement.width, 400.0);
    assert_eq!(items[1].content, ItemContent::Drawing { src: "data:image/png;base64,AAAA".to_owned() });
}

#[test]
fn gallery_of_empty_card_is_empty() {
    assert!(gallery(&Card::new("abc", None, None)).is_empty());
}

#[test]
fn heading_greets_recipient_until_customized() {
    let mut card = card();
    assert_eq!(heading(&card), "For Jo");

    card.wrapped_data = Some(r#"{"welcome":{"title":"Happy 30th!"}}"#.to_owned());
    assert_eq!(heading(&card), "Happy 30th!");
}

#[test]
fn heading_falls_back_without_recipient() {
    let card = Card::new("abc", None, None);
    assert_eq!(heading(&card), format!("For {RECIPIENT_FALLBACK}"));
}
