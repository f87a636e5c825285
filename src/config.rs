//! Settings shared by every command.
//!
//! Values come from flags, then the environment (`SCRIBL_*`, optionally from a
//! `.env` file), then defaults. See [`crate::commands::Cli`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use cards::routes::{self, RECIPIENT_QUERY};
use reqwest::Url;

/// Where the browser app is served when nothing else is configured.
pub const DEFAULT_APP_ORIGIN: &str = "http://localhost:5173";

/// Author name used when no user name is configured.
pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub app_origin: String,
    /// Identity stamped on added messages and drawings.
    pub user_id: String,
    pub user_name: Option<String>,
}

impl Config {
    #[must_use]
    pub fn author(&self) -> &str {
        self.user_name.as_deref().map(str::trim).filter(|n| !n.is_empty()).unwrap_or(ANONYMOUS)
    }

    /// Absolute app link for `path`, with an optional recipient query.
    fn app_link(&self, path: &str, recipient: Option<&str>) -> String {
        let joined = format!("{}{path}", self.app_origin.trim_end_matches('/'));
        let Ok(mut url) = Url::parse(&joined) else {
            return joined;
        };
        if let Some(name) = recipient.map(str::trim).filter(|r| !r.is_empty()) {
            url.query_pairs_mut().append_pair(RECIPIENT_QUERY, name);
        }
        url.into()
    }

    /// Link contributors use to join the card.
    #[must_use]
    pub fn invite_link(&self, card_id: &str, recipient: Option<&str>) -> String {
        self.app_link(&routes::card_page(card_id), recipient)
    }

    /// Link to the recipient's wrapped reveal.
    #[must_use]
    pub fn gift_link(&self, card_id: &str) -> String {
        self.app_link(&routes::gift_page(card_id), None)
    }

    #[must_use]
    pub fn gift_edit_link(&self, card_id: &str) -> String {
        self.app_link(&routes::gift_edit_page(card_id), None)
    }
}
