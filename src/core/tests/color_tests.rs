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

//! Colour tests
//!
//! Tests for `Rgba` parsing, display and serde form.

use crate::core::{ColorParseError, Rgba};

#[test]
fn test_white_displays_as_javafx_hex() {
    assert_eq!(Rgba::WHITE.to_string(), "0xffffffff");
    assert_eq!(Rgba::default(), Rgba::WHITE);
}

#[test]
fn test_display_rounds_channels() {
    let color = Rgba::new(1.0, 0.5, 0.0, 1.0);
    assert_eq!(color.to_string(), "0xff8000ff");
}

#[test]
fn test_display_clamps_out_of_range() {
    let color = Rgba::new(2.0, -1.0, f32::NAN, 0.0);
    assert_eq!(color.to_string(), "0xff000000");
}

#[test]
fn test_parse_hash_six_digits_is_opaque() {
    let color: Rgba = "#FF0000".parse().unwrap();
    assert_eq!(color, Rgba::from_rgba8(255, 0, 0, 255));
}

#[test]
fn test_parse_javafx_form_with_alpha() {
    let color: Rgba = "0x336699cc".parse().unwrap();
    assert_eq!(color.to_rgba8(), [0x33, 0x66, 0x99, 0xcc]);
    assert_eq!(color.to_string(), "0x336699cc");
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        "ff0000".parse::<Rgba>(),
        Err(ColorParseError::MissingPrefix("ff0000".to_string()))
    );
    assert_eq!("#fff".parse::<Rgba>(), Err(ColorParseError::InvalidLength(3)));
    assert_eq!(
        "#gg0000".parse::<Rgba>(),
        Err(ColorParseError::InvalidDigit("gg0000".to_string()))
    );
}

#[test]
fn test_serde_uses_hex_string() {
    let json = serde_json::to_string(&Rgba::BLACK).unwrap();
    assert_eq!(json, "\"0x000000ff\"");

    let back: Rgba = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Rgba::BLACK);

    assert!(serde_json::from_str::<Rgba>("\"black\"").is_err());
}

#[test]
fn test_serde_quantises_to_eight_bits() {
    let grey = Rgba::new(0.5, 0.5, 0.5, 1.0);

    let json = serde_json::to_string(&grey).unwrap();
    let back: Rgba = serde_json::from_str(&json).unwrap();

    assert_ne!(back, grey, "0.5 is not representable in 8 bits");
    assert_eq!(back.to_rgba8(), grey.to_rgba8());
    assert_eq!(back.to_rgba8(), [128, 128, 128, 255]);
}
