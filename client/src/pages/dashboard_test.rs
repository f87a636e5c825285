#![allow(clippy::float_cmp)]

use super::*;

fn named() -> Identity {
    Identity { user_id: "u1".to_owned(), user_name: Some("Sam".to_owned()) }
}

#[test]
fn first_note_lands_top_left() {
    assert_eq!(quick_note_position(0), (20.0, 15.0));
}

#[test]
fn notes_cascade_and_wrap() {
    assert_eq!(quick_note_position(1), (30.0, 30.0));
    assert_eq!(quick_note_position(7), (20.0, 45.0));
}

#[test]
fn quick_note_is_signed_and_escaped() {
    let message = quick_note("hi <3\nlove", &named(), None).expect("note");
    assert_eq!(message.content, "hi &lt;3<br>love");
    assert_eq!(message.author_name.as_deref(), Some("Sam"));
    assert_eq!(message.user_id.as_deref(), Some("u1"));
    assert_eq!((message.x, message.y), (20.0, 15.0));
}

#[test]
fn quick_note_skips_blank_text() {
    assert_eq!(quick_note("  \n", &named(), None), None);
}

#[test]
fn quick_note_cascades_past_existing_messages() {
    let mut card = Card::new("abc", None, None);
    let first = quick_note("one", &named(), Some(&card)).expect("note");
    card.messages.push(cards::Message {
        id: 1,
        content: first.content,
        author_name: first.author_name,
        user_id: first.user_id,
        x: first.x,
        y: first.y,
        rotation: 0.0,
        width: None,
        height: None,
        font_family: None,
    });
    let second = quick_note("two", &named(), Some(&card)).expect("note");
    assert_eq!((second.x, second.y), (30.0, 30.0));
}
