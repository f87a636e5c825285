use super::*;

fn config() -> Config {
    Config {
        api_url: routes::DEFAULT_API_BASE.to_owned(),
        app_origin: "https://scribl.example/".to_owned(),
        user_id: "u1".to_owned(),
        user_name: None,
    }
}

#[test]
fn author_falls_back_to_anonymous() {
    let mut config = config();
    assert_eq!(config.author(), "Anonymous");
    config.user_name = Some("  ".to_owned());
    assert_eq!(config.author(), "Anonymous");
    config.user_name = Some("Sam".to_owned());
    assert_eq!(config.author(), "Sam");
}

#[test]
fn invite_link_carries_encoded_recipient() {
    assert_eq!(
        config().invite_link("abc", Some("Ana María")),
        "https://scribl.example/card/abc?recipient=Ana+Mar%C3%ADa"
    );
    assert_eq!(config().invite_link("abc", None), "https://scribl.example/card/abc");
}

#[test]
fn gift_links_point_at_reveal_and_editor() {
    assert_eq!(config().gift_link("abc"), "https://scribl.example/gift/abc");
    assert_eq!(config().gift_edit_link("abc"), "https://scribl.example/gift/abc/edit");
}
