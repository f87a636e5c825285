#![allow(clippy::float_cmp)]

use std::path::PathBuf;

use super::*;

#[test]
fn mime_follows_extension() {
    assert_eq!(image_mime(Path::new("a.JPG")), "image/jpeg");
    assert_eq!(image_mime(Path::new("a.webp")), "image/webp");
    assert_eq!(image_mime(Path::new("a.png")), "image/png");
    assert_eq!(image_mime(Path::new("noext")), "image/png");
}

#[test]
fn data_url_is_base64() {
    assert_eq!(data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
}

#[test]
fn missing_file_names_the_path() {
    let err = image_data_url(Path::new("/nonexistent/scribl.png")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/scribl.png"));
}

#[test]
fn empty_scene_without_file() {
    assert_eq!(scene_json(None).unwrap(), r#"{"elements":[],"paths":[]}"#);
}

#[test]
fn legacy_scene_file_is_normalized() {
    let path: PathBuf = std::env::temp_dir().join(format!("scribl-legacy-{}.json", std::process::id()));
    fs::write(&path, "[]").unwrap();
    let json = scene_json(Some(&path)).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(json, r#"{"elements":[],"paths":[]}"#);
}

#[test]
fn bounds_of_empty_scene_is_none() {
    assert_eq!(scene_bounds("[]", 800.0, 600.0).unwrap(), None);
}

#[test]
fn bounds_pad_a_centered_image() {
    let scene = r#"{"elements":[{"id":"6f1c1b0e-8a4e-4a51-9a53-6b1f0b3f7c11","type":"image","src":"data:,","x":50,"y":50,"width":200}],"paths":[]}"#;
    let bounds = scene_bounds(scene, 800.0, 600.0).unwrap().expect("bounds");
    assert_eq!((bounds.x, bounds.y), (260.0, 160.0));
    assert_eq!((bounds.width, bounds.height), (280.0, 280.0));
    assert_eq!((bounds.center_x, bounds.center_y), (50.0, 50.0));
}

#[test]
fn malformed_scene_is_an_error() {
    assert!(matches!(scene_bounds("{", 800.0, 600.0), Err(CliError::InvalidJson(_))));
}
