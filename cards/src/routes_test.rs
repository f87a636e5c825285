use super::*;

#[test]
fn endpoint_paths() {
    assert_eq!(cards(), "/");
    assert_eq!(card("abc"), "/abc");
    assert_eq!(items("abc", ItemKind::Message), "/abc/messages");
    assert_eq!(items("abc", ItemKind::Drawing), "/abc/drawings");
    assert_eq!(item("abc", ItemKind::Message, 12), "/abc/messages/12");
    assert_eq!(item("abc", ItemKind::Drawing, 3), "/abc/drawings/3");
    assert_eq!(wrapped("abc"), "/abc/wrapped");
}

#[test]
fn card_ids_are_one_path_segment() {
    assert_eq!(segment("abc-123"), "abc-123");
    assert_eq!(card("a/b"), "/a%2Fb");
    assert_eq!(wrapped("a?b"), "/a%3Fb/wrapped");
    assert_eq!(item("ana maría", ItemKind::Message, 1), "/ana%20mar%C3%ADa/messages/1");
    assert_eq!(card_page("x+y"), "/card/x%2By");
}

#[test]
fn join_handles_trailing_slash_and_root() {
    assert_eq!(join(DEFAULT_API_BASE, &card("x")), "http://localhost:8080/api/cards/x");
    assert_eq!(join("http://h/api/cards/", &wrapped("x")), "http://h/api/cards/x/wrapped");
    assert_eq!(join("http://h/api/cards/", &cards()), "http://h/api/cards");
}

#[test]
fn page_paths() {
    assert_eq!(card_page("abc"), "/card/abc");
    assert_eq!(write_page("abc"), "/card/abc/write");
    assert_eq!(view_page("abc"), "/card/abc/view");
    assert_eq!(gift_page("abc"), "/gift/abc");
    assert_eq!(recipient_page("abc"), "/card/abc/recipient");
    assert_eq!(gift_edit_page("abc"), "/gift/abc/edit");
}

#[test]
fn slug_lowercases_dashes_and_strips() {
    assert_eq!(card_slug("Grandma's  90th Birthday!"), "grandmas-90th-birthday");
    assert_eq!(card_slug("  Team\tParty "), "team-party");
    assert_eq!(card_slug("already-ok-1"), "already-ok-1");
    assert_eq!(card_slug("¡¿!"), "");
}

#[test]
fn random_ids_are_nine_base36_chars() {
    for _ in 0..50 {
        let id = random_card_id();
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
    assert_ne!(random_card_id(), random_card_id());
}

#[test]
fn random_ids_cover_the_alphabet() {
    let seen: std::collections::HashSet<char> =
        (0..500).flat_map(|_| random_card_id().chars().collect::<Vec<_>>()).collect();
    assert_eq!(seen.len(), 36);
}

#[test]
fn card_id_for_prefers_slug() {
    assert_eq!(card_id_for("Mom Rocks"), "mom-rocks");
    assert_eq!(card_id_for("   ").len(), 9);
    assert_eq!(card_id_for("!!!").len(), 9);
}
