//! # scribl
//!
//! Command-line client for the Scribl card API.
//!
//! Wraps every REST operation the browser app uses (cards, messages,
//! drawings, the wrapped blob) and adds offline inspection of saved drawings:
//! the `canvas` crate computes where a saved scene would be cropped on export.
//!
//! | Module | Role |
//! |--------|------|
//! | [`client`] | `reqwest` client for the card API |
//! | [`commands`] | `clap` command tree and runners |
//! | [`config`] | Shared settings and app links |
//! | [`payload`] | Request bodies from local files |
//! | [`error`] | [`CliError`] |

pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod payload;

pub use error::CliError;
