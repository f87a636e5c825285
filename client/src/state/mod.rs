//! Reactive client state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs with pure transition methods; pages wrap them in
//! `RwSignal`s. Keeping transitions pure lets them be tested natively.

pub mod card;
pub mod editor;
pub mod identity;
pub mod wrapped_form;
