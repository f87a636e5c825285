//! App links carried between pages and shared with contributors.
//!
//! Page paths come from `cards::routes`; this module adds the query strings
//! (recipient, drawing id) and the absolute origin for shareable links.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use cards::ItemId;
use cards::routes::{self, DRAWING_ID_QUERY, RECIPIENT_QUERY};

/// Append URL-encoded query pairs to `path`.
#[must_use]
pub fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return path.to_owned();
    }
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        query.append_pair(key, value);
    }
    format!("{path}?{}", query.finish())
}

/// Card dashboard, keeping the recipient in the URL.
#[must_use]
pub fn dashboard_link(card_id: &str, recipient: &str) -> String {
    with_query(&routes::card_page(card_id), &[(RECIPIENT_QUERY, recipient)])
}

#[must_use]
pub fn view_link(card_id: &str, recipient: &str) -> String {
    with_query(&routes::view_page(card_id), &[(RECIPIENT_QUERY, recipient)])
}

/// Drawing editor; `drawing_id` re-opens a saved drawing.
#[must_use]
pub fn write_link(card_id: &str, recipient: &str, drawing_id: Option<ItemId>) -> String {
    let path = routes::write_page(card_id);
    match drawing_id {
        Some(id) => with_query(&path, &[(DRAWING_ID_QUERY, &id.to_string()), (RECIPIENT_QUERY, recipient)]),
        None => with_query(&path, &[(RECIPIENT_QUERY, recipient)]),
    }
}

/// Absolute link contributors use to join the card.
#[must_use]
pub fn invite_link(origin: &str, card_id: &str, recipient: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), dashboard_link(card_id, recipient))
}

/// Absolute link to the recipient's wrapped reveal.
#[must_use]
pub fn gift_link(origin: &str, card_id: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), routes::gift_page(card_id))
}

/// The page origin (`scheme://host[:port]`), empty outside the browser.
#[must_use]
pub fn origin() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
