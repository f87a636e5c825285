//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the pure parts stay testable without a browser.

pub mod canvas_input;
pub mod card_cache;
pub mod files;
pub mod layout;
pub mod links;
pub mod storage;
