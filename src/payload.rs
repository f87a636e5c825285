//! Request bodies built from local files and flags.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use std::fs;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use canvas::bounds::{ExportBounds, export_bounds};
use canvas::camera::Viewport;
use canvas::doc::Scene;
use cards::WrappedData;
use serde::Serialize;

use crate::error::CliError;

fn read(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::Read { path: path.display().to_string(), source })
}

fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read { path: path.display().to_string(), source })
}

/// MIME type guessed from the file extension; PNG when unknown.
#[must_use]
pub fn image_mime(path: &Path) -> &'static str {
    let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}

#[must_use]
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read an image file as a data URL.
///
/// # Errors
///
/// Returns [`CliError::Read`] when the file cannot be read.
pub fn image_data_url(path: &Path) -> Result<String, CliError> {
    Ok(data_url(image_mime(path), &read(path)?))
}

/// Read a saved scene, normalized to `{elements, paths}`. Without a file the
/// scene is empty.
///
/// # Errors
///
/// Returns the read failure or the JSON error for an unrecognized scene.
pub fn scene_json(path: Option<&Path>) -> Result<String, CliError> {
    let scene = match path {
        Some(path) => Scene::from_content_json(&read_text(path)?)?,
        None => Scene::new(),
    };
    Ok(scene.to_content_json()?)
}

/// Read a wrapped blob, filling anything missing with defaults.
///
/// # Errors
///
/// Returns the read failure or the JSON error for a malformed blob.
pub fn wrapped_data(path: &Path) -> Result<WrappedData, CliError> {
    Ok(WrappedData::parse(&read_text(path)?)?)
}

/// Export crop box as printed by `drawing bounds`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundsReport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl From<ExportBounds> for BoundsReport {
    fn from(b: ExportBounds) -> Self {
        Self { x: b.x, y: b.y, width: b.width, height: b.height, center_x: b.center_x, center_y: b.center_y }
    }
}

/// Where a saved scene would be cropped in a container of the given size.
/// `None` for an empty scene.
///
/// # Errors
///
/// Returns the JSON error for an unrecognized scene.
pub fn scene_bounds(content_json: &str, width: f64, height: f64) -> Result<Option<BoundsReport>, CliError> {
    let scene = Scene::from_content_json(content_json)?;
    let viewport = Viewport::new(0.0, 0.0, width, height);
    Ok(export_bounds(&scene, &viewport).map(BoundsReport::from))
}
