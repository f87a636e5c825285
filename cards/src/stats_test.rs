use super::*;
use crate::model::{Drawing, Message};

fn message(id: i64, user: Option<&str>) -> Message {
    Message {
        id,
        content: String::new(),
        author_name: None,
        user_id: user.map(str::to_owned),
        x: 50.0,
        y: 50.0,
        rotation: 0.0,
        width: None,
        height: None,
        font_family: None,
    }
}

fn drawing(id: i64, user: Option<&str>) -> Drawing {
    Drawing {
        id,
        image_data: String::new(),
        content_json: None,
        author_name: None,
        user_id: user.map(str::to_owned),
        x: 50.0,
        y: 50.0,
        rotation: 0.0,
        width: None,
        height: None,
    }
}

#[test]
fn empty_card_has_no_contributors() {
    let stats = CardStats::of(&Card::new("abc", None, None));
    assert_eq!(stats, CardStats::default());
    assert_eq!(stats.item_count(), 0);
}

#[test]
fn contributors_are_distinct_across_collections() {
    let mut card = Card::new("abc", None, None);
    card.messages = vec![message(1, Some("a")), message(2, Some("b")), message(3, Some("a"))];
    card.drawings = vec![drawing(4, Some("b")), drawing(5, Some("c"))];

    let stats = CardStats::from(&card);
    assert_eq!(stats.message_count, 3);
    assert_eq!(stats.drawing_count, 2);
    assert_eq!(stats.contributor_count, 3);
    assert_eq!(stats.item_count(), 5);
}

#[test]
fn anonymous_items_count_as_one_contributor() {
    let mut card = Card::new("abc", None, None);
    card.messages = vec![message(1, None), message(2, None)];
    card.drawings = vec![drawing(3, None), drawing(4, Some("a"))];
    assert_eq!(CardStats::of(&card).contributor_count, 2);
}
