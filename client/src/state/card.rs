//! The card a page is looking at, with stale-while-revalidate loading.
//!
//! DESIGN
//! ======
//! A page opens with whatever the local cache holds and fetches in the
//! background. The fetched card replaces the shown one only when the server
//! returned one; a missing card leaves the cached copy alone so a flaky
//! backend never blanks the page. Optimistic edits go through [`mutate`] so
//! the cache sees them too.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use cards::{ApiError, Card};
use leptos::prelude::*;

use crate::util::card_cache::CardCache;

/// Recipient shown when neither the card nor the URL names one.
pub const RECIPIENT_FALLBACK: &str = "Friend";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardState {
    pub id: String,
    pub card: Option<Card>,
    /// True while no card is shown and a fetch is in flight.
    pub loading: bool,
    pub error: Option<String>,
}

impl CardState {
    /// Start from the cached card, if any.
    #[must_use]
    pub fn open(id: impl Into<String>, cached: Option<Card>) -> Self {
        Self { id: id.into(), loading: cached.is_none(), card: cached, error: None }
    }

    /// Fold in the result of a background fetch.
    pub fn revalidated(&mut self, result: Result<Option<Card>, ApiError>) {
        self.loading = false;
        match result {
            Ok(Some(card)) => {
                self.card = Some(card);
                self.error = None;
            }
            Ok(None) => self.error = None,
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Apply an edit to the shown card. Returns false when nothing changed.
    pub fn mutate(&mut self, edit: impl FnOnce(&mut Card) -> bool) -> bool {
        self.card.as_mut().is_some_and(edit)
    }

    /// Recipient to greet: the card's, then the URL's, then a generic one.
    #[must_use]
    pub fn recipient(&self, url_recipient: Option<&str>) -> String {
        let from_url = url_recipient.map(str::trim).filter(|r| !r.is_empty());
        match (&self.card, from_url) {
            (Some(card), Some(url)) => card.recipient_or(url).to_owned(),
            (Some(card), None) => card.recipient_or(RECIPIENT_FALLBACK).to_owned(),
            (None, Some(url)) => url.to_owned(),
            (None, None) => RECIPIENT_FALLBACK.to_owned(),
        }
    }
}

/// Follow-up request that makes the backend agree with the link the user
/// arrived on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardSync {
    /// The card exists but has no recipient; store the one from the URL.
    Backfill { creator: String, recipient: String },
    /// No card exists yet; create it for the URL's recipient.
    Create { creator: String, recipient: String },
}

/// Decide whether the dashboard must post the card. Nothing is planned while
/// the first load is still in flight or when the URL names no recipient.
#[must_use]
pub fn plan_sync(state: &CardState, url_recipient: Option<&str>, creator: &str) -> Option<CardSync> {
    if state.loading {
        return None;
    }
    let recipient = url_recipient.map(str::trim).filter(|r| !r.is_empty())?.to_owned();
    match &state.card {
        Some(card) if card.needs_recipient() => Some(CardSync::Backfill {
            creator: card.creator_name.clone().filter(|c| !c.trim().is_empty()).unwrap_or_else(|| creator.to_owned()),
            recipient,
        }),
        Some(_) => None,
        None => Some(CardSync::Create { creator: creator.to_owned(), recipient }),
    }
}

// =============================================================
// Signal helpers
// =============================================================

/// Open `card_id` from the cache and revalidate it in the background.
pub fn open_card(card_id: &str) -> RwSignal<CardState> {
    let cached = CardCache::default().read(card_id);
    let state = RwSignal::new(CardState::open(card_id, cached));
    revalidate(state);
    state
}

/// Fetch the card again without blanking what is shown.
pub fn revalidate(state: RwSignal<CardState>) {
    #[cfg(feature = "csr")]
    {
        let id = state.with_untracked(|s| s.id.clone());
        leptos::task::spawn_local(async move {
            let result = crate::net::api::get_card(&id).await;
            if let Ok(Some(card)) = &result {
                CardCache::default().write(card);
            }
            if let Err(err) = &result {
                log::warn!("card {id} fetch failed: {err}");
            }
            state.update(|s| s.revalidated(result));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        state.update(|s| s.loading = false);
    }
}

/// Drop the cached copy and fetch from the server.
pub fn refresh(state: RwSignal<CardState>) {
    let id = state.with_untracked(|s| s.id.clone());
    CardCache::default().clear(&id);
    state.update(|s| s.loading = s.card.is_none());
    revalidate(state);
}

/// Optimistically edit the shown card and write it through to the cache.
pub fn mutate(state: RwSignal<CardState>, edit: impl FnOnce(&mut Card) -> bool) -> bool {
    let mut changed = false;
    state.update(|s| {
        changed = s.mutate(edit);
        if changed {
            if let Some(card) = &s.card {
                CardCache::default().write(card);
            }
        }
    });
    changed
}

/// Replace the shown card, e.g. with the server's answer to a create.
pub fn replace(state: RwSignal<CardState>, card: Card) {
    CardCache::default().write(&card);
    state.update(|s| {
        s.card = Some(card);
        s.loading = false;
        s.error = None;
    });
}
