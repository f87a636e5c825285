use cards::{Drawing, Message};

use super::*;

fn card() -> Card {
    let mut card = Card::new("abc", None, Some("Jo".to_owned()));
    card.messages.push(Message {
        id: 1,
        content: "<p>Hi</p>".to_owned(),
        author_name: Some("Sam".to_owned()),
        user_id: None,
        x: 10.0,
        y: 10.0,
        rotation: 0.0,
        width: None,
        height: None,
        font_family: None,
    });
    card.drawings.push(Drawing {
        id: 2,
        image_data: "data:image/png;base64,AAAA".to_owned(),
        content_json: None,
        author_name: Some(" ".to_owned()),
        user_id: None,
        x: 50.0,
        y: 50.0,
        rotation: 0.0,
        width: None,
        height: None,
    });
    card
}

#[test]
fn message_content_carries_author() {
    assert_eq!(
        item_content(&card(), ItemKind::Message, 1),
        Some(ItemContent::Message { html: "<p>Hi</p>".to_owned(), author: Some("Sam".to_owned()) })
    );
}

#[test]
fn drawing_content_is_image() {
    assert_eq!(
        item_content(&card(), ItemKind::Drawing, 2),
        Some(ItemContent::Drawing { src: "data:image/png;base64,AAAA".to_owned() })
    );
}

#[test]
fn unknown_or_mismatched_items_have_no_content() {
    assert_eq!(item_content(&card(), ItemKind::Message, 2), None);
    assert_eq!(item_content(&card(), ItemKind::Drawing, 9), None);
}
