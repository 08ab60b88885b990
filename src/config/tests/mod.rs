// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Settings tests
//!
//! Tests for defaults, file loading and override precedence.

use std::{fs, path::PathBuf};
use tempfile::TempDir;

use crate::{
    config::{ConfigError, Settings},
    core::{AssetResolver, AssetSource},
};

/// Helper: Writes a settings file and returns its path
fn write_settings(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

#[test]
fn test_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.images_dir, None);
    assert_eq!(settings.window_width, 1000);
    assert_eq!(settings.window_height, 700);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_load_partial_file_keeps_defaults() {
    let (_temp_dir, path) = write_settings(r#"{ "window_width": 1280 }"#);

    let settings = Settings::load(&path).unwrap();

    assert_eq!(settings.window_width, 1280);
    assert_eq!(settings.window_height, 700);
}

#[test]
fn test_relative_images_dir_is_relative_to_file() {
    let (temp_dir, path) = write_settings(r#"{ "images_dir": "pics" }"#);

    let settings = Settings::load(&path).unwrap();

    assert_eq!(settings.images_dir, Some(temp_dir.path().join("pics")));
}

#[test]
fn test_absolute_images_dir_is_kept() {
    let (_temp_dir, path) = write_settings(r#"{ "images_dir": "/opt/demo/images" }"#);

    let settings = Settings::load(&path).unwrap();

    assert_eq!(settings.images_dir, Some(PathBuf::from("/opt/demo/images")));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.json");

    assert!(matches!(Settings::load(&path), Err(ConfigError::NotFound(_))));
}

#[test]
fn test_malformed_file() {
    let (_temp_dir, path) = write_settings("{ not json");
    assert!(matches!(Settings::load(&path), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_unknown_field_is_rejected() {
    let (_temp_dir, path) = write_settings(r#"{ "colour": "red" }"#);
    assert!(matches!(Settings::load(&path), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_non_positive_size_is_rejected() {
    let (_temp_dir, path) = write_settings(r#"{ "window_height": 0 }"#);

    let result = Settings::load(&path);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue {
            field: "window_height",
            ..
        })
    ));
}

#[test]
fn test_cli_override_wins() {
    let (_temp_dir, path) = write_settings(r#"{ "images_dir": "/from/file" }"#);
    let override_dir = PathBuf::from("/from/cli");

    let settings = Settings::resolve(Some(path.as_path()), Some(override_dir.as_path())).unwrap();

    assert_eq!(settings.images_dir, Some(override_dir));
}

#[test]
fn test_resolve_without_file_uses_defaults() {
    let settings = Settings::resolve(None, None).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_default_settings_resolve_every_image_from_any_directory() {
    let elsewhere = TempDir::new().unwrap();
    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(elsewhere.path()).unwrap();

    let resolver = AssetResolver::with_images_dir(Settings::default().images_dir);
    let report = resolver.check_all();

    std::env::set_current_dir(original_dir).unwrap();

    assert_eq!(report.len(), 4);
    for (choice, result) in report {
        assert!(
            matches!(result, Ok(AssetSource::Bundled(_))),
            "{} should resolve without an images directory",
            choice
        );
    }
}
