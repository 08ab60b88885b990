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

//! Fit decision tests
//!
//! Tests for choosing between fit-by-width and fit-by-height.

use proptest::prelude::*;

use crate::core::fit::{
    fit_image, FitDecision, ImageSize, Size, FIT_MARGIN, SIDE_PANEL_FOOTPRINT, SIDE_PANEL_WIDTH,
};

#[test]
fn test_narrow_container_fits_by_width() {
    // (800 - 200) = 600 < 600 * 1.5 = 900
    let decision = fit_image(Size::new(800.0, 600.0), 200.0, 1.5);
    assert_eq!(decision, FitDecision::Width(590.0));
}

#[test]
fn test_wide_container_fits_by_height() {
    // (1000 - 200) = 800 > 400 * 1.0 = 400
    let decision = fit_image(Size::new(1000.0, 400.0), 200.0, 1.0);
    assert_eq!(decision, FitDecision::Height(390.0));
}

#[test]
fn test_exact_match_fits_by_width() {
    // 600 > 600 is false, so the width branch wins a tie
    let decision = fit_image(Size::new(800.0, 400.0), 200.0, 1.5);
    assert_eq!(decision, FitDecision::Width(590.0));
}

#[test]
fn test_tiny_container_clamps_to_zero() {
    let decision = fit_image(Size::new(150.0, 5.0), SIDE_PANEL_WIDTH, 1.0);
    assert_eq!(decision, FitDecision::Width(0.0));

    let decision = fit_image(Size::new(1000.0, 4.0), SIDE_PANEL_WIDTH, 1.0);
    assert_eq!(decision, FitDecision::Height(0.0));
}

#[test]
fn test_nan_aspect_falls_to_width() {
    let decision = fit_image(Size::new(1000.0, 400.0), 200.0, f64::NAN);
    assert_eq!(decision, FitDecision::Width(1000.0 - 200.0 - FIT_MARGIN));
}

#[test]
fn test_extent() {
    assert_eq!(FitDecision::Height(390.0).extent(), 390.0);
    assert_eq!(FitDecision::Width(590.0).extent(), 590.0);
}

#[test]
fn test_aspect_ratio() {
    assert_eq!(ImageSize::new(300, 200).aspect_ratio(), Some(1.5));
    assert_eq!(ImageSize::new(300, 0).aspect_ratio(), None);
}

#[test]
fn test_panel_footprint_includes_margins() {
    assert_eq!(SIDE_PANEL_FOOTPRINT, 220.0);

    // 1000x700 window, 4:3 image: 780 > 933 is false
    let decision = fit_image(Size::new(1000.0, 700.0), SIDE_PANEL_FOOTPRINT, 4.0 / 3.0);
    assert_eq!(decision, FitDecision::Width(770.0));
}

proptest! {
    /// Image plus panel plus margin never needs more room than the container
    /// offers, so applying a decision cannot force the window to grow.
    #[test]
    fn prop_fit_stays_inside_container(
        width in 0.0f64..4000.0,
        height in 0.0f64..4000.0,
        aspect in 0.1f64..10.0,
    ) {
        match fit_image(Size::new(width, height), SIDE_PANEL_FOOTPRINT, aspect) {
            FitDecision::Width(w) => {
                prop_assert!(w >= 0.0);
                prop_assert!(w <= (width - SIDE_PANEL_FOOTPRINT - FIT_MARGIN).max(0.0));
            }
            FitDecision::Height(h) => {
                prop_assert!(h >= 0.0);
                prop_assert!(h <= (height - FIT_MARGIN).max(0.0));
                // Height branch: the scaled width also fits beside the panel
                prop_assert!(h * aspect < width - SIDE_PANEL_FOOTPRINT);
            }
        }
    }
}
