//! REST endpoint paths, app page paths and card id helpers.
//!
//! Endpoint paths are relative to the API base (`…/api/cards`); callers join
//! them onto whatever base they were configured with. Card ids are
//! percent-encoded as a single path segment. Query values are left to the
//! caller so each side can use its own URL encoder.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use rand::Rng;
use url::form_urlencoded;

use crate::model::{ItemId, ItemKind};

/// API base used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/cards";

/// Query key naming the recipient when adding messages or drawings.
pub const RECIPIENT_NAME_QUERY: &str = "recipientName";
/// Query key carrying the recipient between app pages.
pub const RECIPIENT_QUERY: &str = "recipient";
/// Query key selecting an existing drawing to re-edit.
pub const DRAWING_ID_QUERY: &str = "drawingId";

const CARD_ID_LEN: usize = 9;
const CARD_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A card id as one path segment, so `/` or `?` in it cannot change the route.
#[must_use]
pub fn segment(id: &str) -> String {
    // The form encoder escapes a literal `+`, so any `+` left is a space.
    form_urlencoded::byte_serialize(id.as_bytes()).collect::<String>().replace('+', "%20")
}

// ---- API endpoints ----

/// `POST` target for creating a card.
#[must_use]
pub fn cards() -> String {
    String::from("/")
}

#[must_use]
pub fn card(id: &str) -> String {
    format!("/{}", segment(id))
}

/// Collection endpoint for adding an item of `kind`.
#[must_use]
pub fn items(id: &str, kind: ItemKind) -> String {
    match kind {
        ItemKind::Message => format!("/{}/messages", segment(id)),
        ItemKind::Drawing => format!("/{}/drawings", segment(id)),
    }
}

/// Endpoint for updating or deleting one item.
#[must_use]
pub fn item(id: &str, kind: ItemKind, item_id: ItemId) -> String {
    format!("{}/{item_id}", items(id, kind))
}

#[must_use]
pub fn wrapped(id: &str) -> String {
    format!("/{}/wrapped", segment(id))
}

/// Join an endpoint path onto an API base, tolerating a trailing slash.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path == "/" {
        return base.to_owned();
    }
    format!("{base}{path}")
}

// ---- App pages ----

/// Card dashboard.
#[must_use]
pub fn card_page(id: &str) -> String {
    format!("/card/{}", segment(id))
}

/// Drawing editor.
#[must_use]
pub fn write_page(id: &str) -> String {
    format!("/card/{}/write", segment(id))
}

/// Arrange and view page.
#[must_use]
pub fn view_page(id: &str) -> String {
    format!("/card/{}/view", segment(id))
}

/// Read-only card as the recipient sees it.
#[must_use]
pub fn recipient_page(id: &str) -> String {
    format!("/card/{}/recipient", segment(id))
}

/// The recipient's gift link; shows the same read-only card.
#[must_use]
pub fn gift_page(id: &str) -> String {
    format!("/gift/{}", segment(id))
}

/// Wrapped customization editor.
#[must_use]
pub fn gift_edit_page(id: &str) -> String {
    format!("/gift/{}/edit", segment(id))
}

// ---- Card ids ----

/// Turn a user-chosen link into a card id: lowercase, whitespace runs become
/// `-`, and anything outside `[a-z0-9-]` is dropped.
#[must_use]
pub fn card_slug(custom: &str) -> String {
    let lowered = custom.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_space = false;
    for ch in lowered.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            out.push(ch);
        }
    }
    out
}

/// A fresh 9-character lowercase alphanumeric card id.
#[must_use]
pub fn random_card_id() -> String {
    let mut rng = rand::rng();
    (0..CARD_ID_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CARD_ID_ALPHABET.len());
            CARD_ID_ALPHABET[idx] as char
        })
        .collect()
}

/// Card id for the home form: the slug of `custom` when it yields anything,
/// otherwise a random id.
#[must_use]
pub fn card_id_for(custom: &str) -> String {
    let slug = card_slug(custom);
    if slug.is_empty() { random_card_id() } else { slug }
}
