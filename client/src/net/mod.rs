//! Networking for the card REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every backend call. Wire types live in the shared `cards`
//! crate so the browser app and the CLI agree on the schema.

pub mod api;
