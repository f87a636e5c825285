//! Local identity of the person using this browser.
//!
//! There are no accounts. A random `userId` is minted on first visit and
//! decides which messages and drawings the user may rearrange or delete; the
//! display name is asked for once and reused as the author name.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use uuid::Uuid;

use crate::util::storage;

pub const USER_ID_KEY: &str = "userId";
pub const USER_NAME_KEY: &str = "userName";

/// Author and creator name used when the user never gave one.
pub const ANONYMOUS: &str = "Anonymous";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub user_name: Option<String>,
}

impl Identity {
    /// Build from stored values. Returns the identity and whether a new user
    /// id had to be minted.
    #[must_use]
    pub fn from_stored(user_id: Option<String>, user_name: Option<String>) -> (Self, bool) {
        let user_name = user_name.map(|n| n.trim().to_owned()).filter(|n| !n.is_empty());
        match user_id.filter(|id| !id.trim().is_empty()) {
            Some(user_id) => (Self { user_id, user_name }, false),
            None => (Self { user_id: Uuid::new_v4().to_string(), user_name }, true),
        }
    }

    /// Read the identity from `localStorage`, persisting a fresh id if needed.
    #[must_use]
    pub fn load() -> Self {
        let (identity, created) =
            Self::from_stored(storage::load_string(USER_ID_KEY), storage::load_string(USER_NAME_KEY));
        if created {
            storage::save_string(USER_ID_KEY, &identity.user_id);
        }
        identity
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or(ANONYMOUS)
    }

    /// Whether the identity prompt should be shown before contributing.
    #[must_use]
    pub fn needs_name(&self) -> bool {
        self.user_name.is_none()
    }

    /// The identity with a new display name, or `None` for a blank name.
    #[must_use]
    pub fn with_name(&self, raw: &str) -> Option<Self> {
        let name = raw.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self { user_id: self.user_id.clone(), user_name: Some(name.to_owned()) })
    }

    pub fn save(&self) {
        storage::save_string(USER_ID_KEY, &self.user_id);
        if let Some(name) = &self.user_name {
            storage::save_string(USER_NAME_KEY, name);
        }
    }
}
