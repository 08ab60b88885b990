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

//! Error types for the display-free core
//!
//! Every mutator on the model is total, so the only failures in the core
//! are resolving an image asset and parsing a colour from text.

use thiserror::Error;

/// Errors that can occur while resolving an image key to a file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    /// No `<key>.png` in the images directory and no bundled image.
    #[error("Image asset not found: {0}")]
    NotFound(String),
    /// Key would escape the images directory or is empty.
    #[error("Invalid image key: {0:?}")]
    InvalidKey(String),
    /// Data was found but could not be decoded as an image.
    #[error("Failed to decode image {asset}: {reason}")]
    DecodeFailed { asset: String, reason: String },
}

/// Errors that can occur when parsing a colour from a hex string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// Missing `#` or `0x` prefix.
    #[error("Colour must start with '#' or '0x': {0:?}")]
    MissingPrefix(String),
    /// Wrong number of hex digits (expected 6 or 8).
    #[error("Colour must have 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),
    /// Non-hex character in the digits.
    #[error("Invalid hex digit in colour: {0:?}")]
    InvalidDigit(String),
}
