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

//! src/core/color.rs
//!
//! RGBA colour value held by the model
//!
//! Components are stored as `f32` in `0.0..=1.0`, the same representation
//! GTK4 uses for `gdk::RGBA`. The textual form is `0xrrggbbaa`, which is what
//! the colour label in the side panel shows.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

use crate::core::error::ColorParseError;

/// An RGBA colour
///
/// No validation is applied when a colour is stored in the model; any value
/// the colour picker produces is accepted verbatim.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Rgba {
    /// Opaque white, the model's initial colour
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    /// Opaque black
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Builds a colour from 8-bit channels
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::new(
            f32::from(red) / 255.0,
            f32::from(green) / 255.0,
            f32::from(blue) / 255.0,
            f32::from(alpha) / 255.0,
        )
    }

    /// Returns the channels quantised to 8 bits, clamped to the valid range
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha].map(channel_to_u8)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

fn channel_to_u8(value: f32) -> u8 {
    // NaN clamps to 0
    let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    (clamped * 255.0).round() as u8
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        write!(f, "0x{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    /// Parses `#rrggbb`, `#rrggbbaa`, `0xrrggbb` or `0xrrggbbaa`
    ///
    /// Six-digit forms are opaque. Hex digits are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| ColorParseError::MissingPrefix(s.to_string()))?;

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(digits.to_string()));
        }

        // All characters are ASCII hex digits, so byte slicing is safe
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidDigit(digits.to_string()))
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Rgba::from_rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

/// Written as the `0xrrggbbaa` display form
///
/// The string carries 8 bits per channel, so a value whose channels are not
/// multiples of 1/255 comes back as the nearest 8-bit colour.
impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
