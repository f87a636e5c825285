use super::*;

fn card(recipient: Option<&str>) -> Card {
    Card::new("abc", Some("Sam".to_owned()), recipient.map(str::to_owned))
}

// =============================================================
// Loading
// =============================================================

#[test]
fn open_without_cache_is_loading() {
    let state = CardState::open("abc", None);
    assert!(state.loading);
    assert_eq!(state.card, None);
}

#[test]
fn open_with_cache_shows_it() {
    let state = CardState::open("abc", Some(card(Some("Jo"))));
    assert!(!state.loading);
    assert!(state.card.is_some());
}

#[test]
fn revalidated_replaces_card() {
    let mut state = CardState::open("abc", Some(card(Some("Jo"))));
    state.revalidated(Ok(Some(card(Some("Kim")))));
    assert_eq!(state.recipient(None), "Kim");
}

#[test]
fn revalidated_absent_keeps_cached_card() {
    let mut state = CardState::open("abc", Some(card(Some("Jo"))));
    state.revalidated(Ok(None));
    assert_eq!(state.recipient(None), "Jo");
    assert!(!state.loading);
}

#[test]
fn revalidated_error_is_recorded() {
    let mut state = CardState::open("abc", None);
    state.revalidated(Err(ApiError::from_status(500, "boom")));
    assert_eq!(state.error.as_deref(), Some("boom"));
    assert!(!state.loading);
}

#[test]
fn mutate_without_card_is_noop() {
    let mut state = CardState::open("abc", None);
    assert!(!state.mutate(|_| true));
}

#[test]
fn mutate_applies_edit() {
    let mut state = CardState::open("abc", Some(card(None)));
    assert!(state.mutate(|c| {
        c.recipient_name = Some("Jo".to_owned());
        true
    }));
    assert_eq!(state.recipient(None), "Jo");
}

// =============================================================
// Recipient
// =============================================================

#[test]
fn recipient_prefers_card_then_url_then_fallback() {
    let with_card = CardState::open("abc", Some(card(Some("Jo"))));
    assert_eq!(with_card.recipient(Some("Kim")), "Jo");

    let unnamed = CardState::open("abc", Some(card(None)));
    assert_eq!(unnamed.recipient(Some("Kim")), "Kim");
    assert_eq!(unnamed.recipient(Some("  ")), RECIPIENT_FALLBACK);

    let missing = CardState::open("abc", None);
    assert_eq!(missing.recipient(None), RECIPIENT_FALLBACK);
}

// =============================================================
// Sync planning
// =============================================================

#[test]
fn plan_sync_waits_for_first_load() {
    let state = CardState::open("abc", None);
    assert_eq!(plan_sync(&state, Some("Jo"), "Ann"), None);
}

#[test]
fn plan_sync_backfills_missing_recipient() {
    let state = CardState::open("abc", Some(card(None)));
    assert_eq!(
        plan_sync(&state, Some("Jo"), "Ann"),
        Some(CardSync::Backfill { creator: "Sam".to_owned(), recipient: "Jo".to_owned() })
    );
}

#[test]
fn plan_sync_creates_absent_card() {
    let mut state = CardState::open("abc", None);
    state.revalidated(Ok(None));
    assert_eq!(
        plan_sync(&state, Some(" Jo "), "Ann"),
        Some(CardSync::Create { creator: "Ann".to_owned(), recipient: "Jo".to_owned() })
    );
}

#[test]
fn plan_sync_needs_url_recipient() {
    let mut state = CardState::open("abc", None);
    state.revalidated(Ok(None));
    assert_eq!(plan_sync(&state, None, "Ann"), None);
    assert_eq!(plan_sync(&state, Some(""), "Ann"), None);
}

#[test]
fn plan_sync_leaves_named_card_alone() {
    let state = CardState::open("abc", Some(card(Some("Jo"))));
    assert_eq!(plan_sync(&state, Some("Kim"), "Ann"), None);
}
