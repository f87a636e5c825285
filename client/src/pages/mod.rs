//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose state and components for each route: creating a card, the
//! card dashboard, arranging items, drawing, customizing the wrapped
//! reveal, and the read-only card the recipient opens.

pub mod card_view;
pub mod dashboard;
pub mod home;
pub mod recipient;
pub mod wrapped_editor;
pub mod write;
