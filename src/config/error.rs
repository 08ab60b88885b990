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

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading application settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file does not exist.
    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),
    /// Settings file is not valid JSON for `Settings`.
    #[error("Failed to parse settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A setting has a value outside its allowed range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    /// Path is not valid UTF-8 and cannot be expanded.
    #[error("Invalid path encoding: {0}")]
    InvalidPath(PathBuf),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
