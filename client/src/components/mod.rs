//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components here are shared across pages; page-specific layout lives in
//! `pages`.

pub mod editor_host;
pub mod identity_modal;
