//! Customization blob for the wrapped reveal shown to the recipient.
//!
//! The backend stores it opaquely as the card's `wrappedData` string. Every
//! section and field defaults to a placeholder so partial or older blobs still
//! render a complete reveal.

#[cfg(test)]
#[path = "wrapped_test.rs"]
mod wrapped_test;

use serde::{Deserialize, Serialize};

use crate::model::Card;

const TITLE: &str = "Title here";
const SUBTITLE: &str = "Subtitle here";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WrappedData {
    pub welcome: WelcomeSection,
    pub stats: StatsSection,
    pub hidden: HiddenSection,
}

/// Opening slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WelcomeSection {
    pub title: String,
    pub subtitle: String,
    pub message: String,
    /// Optional portrait as a data URL.
    pub image: Option<String>,
}

/// Pictures slide shown next to the card statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsSection {
    pub title: String,
    pub subtitle: String,
    pub label: String,
    pub description: String,
    /// Photo data URLs in display order.
    pub photos: Vec<String>,
}

/// Final slide revealed by opening the gift box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HiddenSection {
    pub title: String,
    pub subtitle: String,
    pub message: String,
}

impl Default for WelcomeSection {
    fn default() -> Self {
        Self {
            title: TITLE.to_owned(),
            subtitle: SUBTITLE.to_owned(),
            message: "Message here".to_owned(),
            image: None,
        }
    }
}

impl Default for StatsSection {
    fn default() -> Self {
        Self {
            title: TITLE.to_owned(),
            subtitle: SUBTITLE.to_owned(),
            label: "Label here".to_owned(),
            description: "Description here".to_owned(),
            photos: Vec::new(),
        }
    }
}

impl Default for HiddenSection {
    fn default() -> Self {
        Self {
            title: TITLE.to_owned(),
            subtitle: SUBTITLE.to_owned(),
            message: "Hidden message here".to_owned(),
        }
    }
}

/// Editable sections, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrappedSection {
    Welcome,
    Stats,
    Hidden,
}

impl WrappedSection {
    pub const ALL: [Self; 3] = [Self::Welcome, Self::Stats, Self::Hidden];

    /// Tab label in the editor.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Stats => "Pictures",
            Self::Hidden => "Hidden Message",
        }
    }

    /// JSON key of the section.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Stats => "stats",
            Self::Hidden => "hidden",
        }
    }
}

impl WrappedData {
    /// Parse a stored blob, filling anything missing with defaults.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when the blob is malformed.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The card's blob merged over defaults. A missing or malformed blob
    /// yields the defaults.
    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        card.wrapped_data
            .as_deref()
            .and_then(|raw| Self::parse(raw).ok())
            .unwrap_or_default()
    }

    /// Serialized form stored as the card's `wrappedData`.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
