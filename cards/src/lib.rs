//! Shared wire model for the card REST API.
//!
//! This crate owns the JSON representation exchanged with the card backend by
//! both the browser `client` and the `scribl` CLI. The backend speaks
//! camelCase JSON; every type here carries the serde attributes needed to
//! match it, and tolerates fields it does not know about.
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Cards, messages, drawings, request bodies, sparse patches |
//! | [`wrapped`] | The wrapped-experience customization blob |
//! | [`note`] | Plain note text to message HTML |
//! | [`stats`] | Derived card statistics |
//! | [`routes`] | Endpoint and page paths, card id helpers |
//! | [`error`] | [`ApiError`] shared by every HTTP caller |

pub mod error;
pub mod model;
pub mod note;
pub mod routes;
pub mod stats;
pub mod wrapped;

pub use error::ApiError;
pub use model::{
    Card, Drawing, DrawingPatch, ItemId, ItemKind, ItemPatch, Message, MessagePatch, NewCard,
    NewDrawing, NewMessage,
};
pub use note::note_html;
pub use stats::CardStats;
pub use wrapped::{HiddenSection, StatsSection, WelcomeSection, WrappedData, WrappedSection};
