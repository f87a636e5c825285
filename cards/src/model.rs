//! Card documents as the backend stores them, plus request bodies.
//!
//! Positions (`x`, `y`) are percentages of the card canvas so layout survives
//! any screen size. `width`/`height` are CSS pixels and optional: items saved
//! before they were resized carry no width and fall back to per-kind defaults
//! on the client.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// Backend identifier of a message or drawing.
pub type ItemId = i64;

/// A shared card for one recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card id; either a user-chosen slug or a random id.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    /// Text messages in creation order.
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Drawings in creation order.
    #[serde(default)]
    pub drawings: Vec<Drawing>,
    /// Wrapped-experience customization, stored by the backend as a JSON string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapped_data: Option<String>,
}

/// A rich-text note placed on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: ItemId,
    /// HTML content.
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Local identity of the author; only the author may rearrange or delete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

/// A rasterized drawing placed on a card, with its editable source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drawing {
    pub id: ItemId,
    /// PNG data URL rendered by the editor.
    #[serde(default)]
    pub image_data: String,
    /// Serialized editor scene (`{elements, paths}`) for re-editing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_json: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Which collection of a card an item lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Message,
    Drawing,
}

impl ItemKind {
    /// Lowercase name used in logs and CLI output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Drawing => "drawing",
        }
    }
}

/// Body of `POST /cards`: create a card or persist an existing id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    pub id: String,
    pub creator_name: String,
    pub recipient_name: String,
}

/// Body of `POST /cards/:id/messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

/// Body of `POST /cards/:id/drawings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDrawing {
    pub image_data: String,
    pub content_json: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub x: f64,
    pub y: f64,
}

/// Sparse update for a message. Only present fields are sent and applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl MessagePatch {
    /// True when the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge this patch into a local message.
    pub fn apply_to(&self, message: &mut Message) {
        if let Some(ref content) = self.content {
            message.content.clone_from(content);
        }
        if let Some(x) = self.x {
            message.x = x;
        }
        if let Some(y) = self.y {
            message.y = y;
        }
        if let Some(width) = self.width {
            message.width = Some(width);
        }
        if let Some(height) = self.height {
            message.height = Some(height);
        }
        if let Some(rotation) = self.rotation {
            message.rotation = rotation;
        }
        if let Some(ref font) = self.font_family {
            message.font_family = Some(font.clone());
        }
    }
}

/// Sparse update for a drawing. Only present fields are sent and applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_json: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl DrawingPatch {
    /// True when the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge this patch into a local drawing.
    pub fn apply_to(&self, drawing: &mut Drawing) {
        if let Some(ref data) = self.image_data {
            drawing.image_data.clone_from(data);
        }
        if let Some(ref json) = self.content_json {
            drawing.content_json = Some(json.clone());
        }
        if let Some(x) = self.x {
            drawing.x = x;
        }
        if let Some(y) = self.y {
            drawing.y = y;
        }
        if let Some(width) = self.width {
            drawing.width = Some(width);
        }
        if let Some(height) = self.height {
            drawing.height = Some(height);
        }
        if let Some(rotation) = self.rotation {
            drawing.rotation = rotation;
        }
    }
}

/// A sparse update addressed to either collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemPatch {
    Message(MessagePatch),
    Drawing(DrawingPatch),
}

impl ItemPatch {
    /// Layout-only patch, as produced by rearranging an item on the card.
    #[must_use]
    pub fn placement(kind: ItemKind, x: f64, y: f64, width: f64, rotation: f64) -> Self {
        match kind {
            ItemKind::Message => Self::Message(MessagePatch {
                x: Some(x),
                y: Some(y),
                width: Some(width),
                rotation: Some(rotation),
                ..MessagePatch::default()
            }),
            ItemKind::Drawing => Self::Drawing(DrawingPatch {
                x: Some(x),
                y: Some(y),
                width: Some(width),
                rotation: Some(rotation),
                ..DrawingPatch::default()
            }),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Message(_) => ItemKind::Message,
            Self::Drawing(_) => ItemKind::Drawing,
        }
    }
}

impl Card {
    /// An empty card, as the client shows it before the backend answers.
    #[must_use]
    pub fn new(id: impl Into<String>, creator_name: Option<String>, recipient_name: Option<String>) -> Self {
        Self {
            id: id.into(),
            creator_name,
            recipient_name,
            messages: Vec::new(),
            drawings: Vec::new(),
            wrapped_data: None,
        }
    }

    /// Recipient name, or `fallback` when the card has none yet.
    #[must_use]
    pub fn recipient_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.recipient_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => fallback,
        }
    }

    /// Whether the stored card lacks a recipient name.
    #[must_use]
    pub fn needs_recipient(&self) -> bool {
        self.recipient_name
            .as_deref()
            .is_none_or(|name| name.trim().is_empty())
    }

    /// True when nobody has contributed anything yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.drawings.is_empty()
    }

    #[must_use]
    pub fn message(&self, id: ItemId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    #[must_use]
    pub fn drawing(&self, id: ItemId) -> Option<&Drawing> {
        self.drawings.iter().find(|d| d.id == id)
    }

    /// Apply a message patch locally. Returns false if the message is unknown.
    pub fn patch_message(&mut self, id: ItemId, patch: &MessagePatch) -> bool {
        let Some(message) = self.messages.iter_mut().find(|m| m.id == id) else {
            return false;
        };
        patch.apply_to(message);
        true
    }

    /// Apply a drawing patch locally. Returns false if the drawing is unknown.
    pub fn patch_drawing(&mut self, id: ItemId, patch: &DrawingPatch) -> bool {
        let Some(drawing) = self.drawings.iter_mut().find(|d| d.id == id) else {
            return false;
        };
        patch.apply_to(drawing);
        true
    }

    /// Apply either kind of patch locally. Returns false if the item is unknown.
    pub fn patch_item(&mut self, id: ItemId, patch: &ItemPatch) -> bool {
        match patch {
            ItemPatch::Message(p) => self.patch_message(id, p),
            ItemPatch::Drawing(p) => self.patch_drawing(id, p),
        }
    }

    /// Remove a message or drawing. Returns false if nothing matched.
    pub fn remove_item(&mut self, kind: ItemKind, id: ItemId) -> bool {
        match kind {
            ItemKind::Message => {
                let before = self.messages.len();
                self.messages.retain(|m| m.id != id);
                self.messages.len() != before
            }
            ItemKind::Drawing => {
                let before = self.drawings.len();
                self.drawings.retain(|d| d.id != id);
                self.drawings.len() != before
            }
        }
    }

    /// Whether `user_id` authored the given item.
    #[must_use]
    pub fn is_owner(&self, kind: ItemKind, id: ItemId, user_id: &str) -> bool {
        let owner = match kind {
            ItemKind::Message => self.message(id).and_then(|m| m.user_id.as_deref()),
            ItemKind::Drawing => self.drawing(id).and_then(|d| d.user_id.as_deref()),
        };
        owner == Some(user_id)
    }
}
