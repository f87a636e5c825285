use super::*;

#[test]
fn endpoint_joins_onto_api_base() {
    assert_eq!(endpoint("/abc"), format!("{}/abc", api_base().trim_end_matches('/')));
}

#[test]
fn items_url_appends_encoded_recipient() {
    let url = items_url("abc", ItemKind::Message, Some("Ana María"));
    assert!(url.ends_with("/abc/messages?recipientName=Ana+Mar%C3%ADa"), "{url}");
}

#[test]
fn items_url_skips_blank_recipient() {
    let url = items_url("abc", ItemKind::Drawing, Some("   "));
    assert!(url.ends_with("/abc/drawings"), "{url}");
    assert_eq!(url, items_url("abc", ItemKind::Drawing, None));
}

#[test]
fn item_url_targets_one_item() {
    assert!(item_url("abc", ItemKind::Drawing, 7).ends_with("/abc/drawings/7"));
    assert!(item_url("abc", ItemKind::Message, 3).ends_with("/abc/messages/3"));
}
