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

//! Application settings
//!
//! Settings come from three layers, later layers winning:
//!
//! 1. Built-in defaults
//! 2. An optional JSON settings file (`--config`)
//! 3. Command-line overrides (`--images-dir`)
//!
//! Every field is optional in the file; missing fields keep their default.
//! Without an `images_dir` the images compiled into the binary are used.
//! A relative `images_dir` in a settings file is taken relative to the
//! directory containing that file.
//!
//! # Example
//!
//! ```no_run
//! use observer_demo::config::Settings;
//! use std::path::Path;
//!
//! let settings = Settings::load(Path::new("~/.config/observer-demo/settings.json"))?;
//! if let Some(dir) = &settings.images_dir {
//!     println!("Images from {}", dir.display());
//! }
//! # Ok::<(), observer_demo::config::ConfigError>(())
//! ```

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default GTK application id
pub const DEFAULT_APPLICATION_ID: &str = "com.tidynest.observer-demo";

/// Runtime settings for the GUI
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// GTK application id (reverse-DNS)
    pub application_id: String,
    /// Directory whose `<key>.png` files override the bundled images
    pub images_dir: Option<PathBuf>,
    /// Initial window width in pixels
    pub window_width: i32,
    /// Initial window height in pixels
    pub window_height: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            application_id: DEFAULT_APPLICATION_ID.to_string(),
            images_dir: None,
            window_width: 1000,
            window_height: 700,
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - File parsed and validated
    /// * `Err(ConfigError::NotFound)` - No file at `path`
    /// * `Err(ConfigError::Parse)` - Malformed JSON or unknown field
    /// * `Err(ConfigError::InvalidValue)` - Non-positive window size
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let path = expand_path(path)?;
        if !path.exists() {
            return Err(ConfigError::NotFound(path));
        }

        let content = fs::read_to_string(&path)?;
        let mut settings: Settings =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;

        if let Some(dir) = settings.images_dir.take() {
            let dir = expand_path(&dir)?;
            settings.images_dir = Some(match path.parent() {
                Some(parent) if dir.is_relative() => parent.join(dir),
                _ => dir,
            });
        }

        settings.validate()?;
        tracing::debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Builds settings from an optional file plus command-line overrides
    pub fn resolve(
        config_path: Option<&Path>,
        images_dir: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let mut settings = match config_path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(dir) = images_dir {
            settings.images_dir = Some(expand_path(dir)?);
        }

        Ok(settings)
    }

    /// Checks value ranges that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "window_width",
                reason: format!("must be positive, got {}", self.window_width),
            });
        }
        if self.window_height <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "window_height",
                reason: format!("must be positive, got {}", self.window_height),
            });
        }
        if self.application_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "application_id",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Expands a leading `~` to the home directory
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let text = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_path_buf()))?;
    Ok(PathBuf::from(shellexpand::tilde(text).as_ref()))
}

#[cfg(test)]
mod tests;
