//! Figures shown on the recipient's stats slide.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use std::collections::HashSet;

use serde::Serialize;

use crate::model::Card;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStats {
    pub message_count: usize,
    pub drawing_count: usize,
    /// Distinct author ids across messages and drawings. Items without an id
    /// count together as one anonymous contributor.
    pub contributor_count: usize,
}

impl CardStats {
    #[must_use]
    pub fn of(card: &Card) -> Self {
        let contributors: HashSet<Option<&str>> = card
            .messages
            .iter()
            .map(|m| m.user_id.as_deref())
            .chain(card.drawings.iter().map(|d| d.user_id.as_deref()))
            .collect();
        Self {
            message_count: card.messages.len(),
            drawing_count: card.drawings.len(),
            contributor_count: contributors.len(),
        }
    }

    /// Messages and drawings together.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.message_count + self.drawing_count
    }
}

impl From<&Card> for CardStats {
    fn from(card: &Card) -> Self {
        Self::of(card)
    }
}
