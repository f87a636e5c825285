//! Browser localStorage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize csr-only read/write behavior so state modules can
//! persist identity and cached cards without repeating web-sys glue. Outside
//! the browser every read misses and every write is dropped.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a raw string from `localStorage` for `key`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a raw string to `localStorage` for `key`.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {key}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_string(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    save_string(key, &raw);
}
