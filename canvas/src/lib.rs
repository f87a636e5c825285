//! Interaction engine for the greeting-card drawing canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! drawing editor's document: text and image elements positioned in percent
//! of the container, freehand ink in a fixed 1000×1000 space, snapshot
//! undo/redo, and the gesture state machine behind drag, resize and rotate.
//! The host renders elements as DOM nodes, forwards raw input to the engine,
//! and persists the resulting [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Elements, ink paths and the scene they form |
//! | [`camera`] | Container viewport and coordinate conversions |
//! | [`transform`] | Drag, resize and rotate geometry |
//! | [`input`] | Tools, input event types and the gesture state machine |
//! | [`hit`] | Hit-testing against elements and their handles |
//! | [`history`] | Bounded snapshot undo/redo |
//! | [`bounds`] | Export bounding box |
//! | [`cursor`] | CSS cursors for tools and hover targets |
//! | [`arrange`] | Layout editing of saved messages and drawings |
//! | [`render`] | Ink painting and PNG export |
//! | [`consts`] | Shared constants (sizes, limits, palette) |

pub mod arrange;
pub mod bounds;
pub mod camera;
pub mod consts;
pub mod cursor;
pub mod doc;
pub mod engine;
pub mod history;
pub mod hit;
pub mod input;
pub mod render;
pub mod transform;
