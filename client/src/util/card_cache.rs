//! Read-through cache of fetched cards.
//!
//! DESIGN
//! ======
//! Pages show the cached card immediately and revalidate in the background.
//! Optimistic mutations write through so a reload shows the edited card even
//! before the server confirms. The backend is a trait so tests can swap the
//! browser's `localStorage` for an in-memory map.

#[cfg(test)]
#[path = "card_cache_test.rs"]
mod card_cache_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use cards::Card;

use crate::util::storage;

const CACHE_PREFIX: &str = "scribl_card_";

/// Storage key for a cached card.
#[must_use]
pub fn cache_key(card_id: &str) -> String {
    format!("{CACHE_PREFIX}{card_id}")
}

/// String key/value store backing the cache.
pub trait CacheBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

impl CacheBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        storage::load_string(key)
    }

    fn set(&self, key: &str, value: &str) {
        storage::save_string(key, value);
    }

    fn remove(&self, key: &str) {
        storage::remove(key);
    }
}

/// Shared in-memory map. Clones see the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend(Rc<RefCell<HashMap<String, String>>>);

impl CacheBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

#[derive(Clone, Debug, Default)]
pub struct CardCache<B: CacheBackend = LocalStorageBackend> {
    backend: B,
}

impl<B: CacheBackend> CardCache<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The cached card, if present and parseable. Corrupt entries are dropped.
    pub fn read(&self, card_id: &str) -> Option<Card> {
        let key = cache_key(card_id);
        let raw = self.backend.get(&key)?;
        match serde_json::from_str(&raw) {
            Ok(card) => Some(card),
            Err(_) => {
                self.backend.remove(&key);
                None
            }
        }
    }

    pub fn write(&self, card: &Card) {
        if let Ok(raw) = serde_json::to_string(card) {
            self.backend.set(&cache_key(&card.id), &raw);
        }
    }

    /// Forget the card so the next load fetches from the server.
    pub fn clear(&self, card_id: &str) {
        self.backend.remove(&cache_key(card_id));
    }
}
