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

//! src/core/fit.rs
//!
//! Decides how the displayed image is scaled inside the window
//!
//! The window is a horizontal box: the image on the left and a side panel
//! of fixed width on the right. The image keeps its aspect ratio, so only
//! one axis is constrained at a time:
//!
//! ```text
//! (W - P) > H * a   →  fit by height: displayed height = H - 10
//! otherwise         →  fit by width:  displayed width  = W - P - 10
//! ```

/// Margin kept between the image and the window edges
pub const FIT_MARGIN: f64 = 10.0;

/// Width requested by the side panel with the form controls
pub const SIDE_PANEL_WIDTH: f64 = 200.0;

/// Margin on each horizontal side of the side panel
pub const SIDE_PANEL_MARGIN: f64 = 10.0;

/// Horizontal space the side panel occupies before it is allocated:
/// requested width plus both margins
pub const SIDE_PANEL_FOOTPRINT: f64 = SIDE_PANEL_WIDTH + 2.0 * SIDE_PANEL_MARGIN;

/// Width and height of a container, in logical pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Intrinsic pixel size of an image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height, or `None` for a zero-height image
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.height == 0 {
            None
        } else {
            Some(f64::from(self.width) / f64::from(self.height))
        }
    }
}

/// Which axis constrains the displayed image, and its new extent
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FitDecision {
    /// Container is relatively wide: set the displayed height
    Height(f64),
    /// Container is relatively narrow: set the displayed width
    Width(f64),
}

impl FitDecision {
    /// The extent to apply, regardless of axis
    pub fn extent(&self) -> f64 {
        match self {
            FitDecision::Height(h) | FitDecision::Width(h) => *h,
        }
    }
}

/// Computes the fit decision for an image in a container
///
/// # Arguments
///
/// * `container` - Size of the whole window content (image area + side panel)
/// * `panel_width` - Horizontal space taken by the side panel, margins included
/// * `aspect_ratio` - Intrinsic width / height of the image
///
/// Extents are clamped at zero. A non-finite aspect ratio compares false and
/// falls through to the width branch.
///
/// # Example
///
/// ```
/// use observer_demo::core::fit::{fit_image, FitDecision, Size};
///
/// let decision = fit_image(Size::new(800.0, 600.0), 200.0, 1.5);
/// assert_eq!(decision, FitDecision::Width(590.0));
/// ```
pub fn fit_image(container: Size, panel_width: f64, aspect_ratio: f64) -> FitDecision {
    let available_width = container.width - panel_width;

    if available_width > container.height * aspect_ratio {
        FitDecision::Height((container.height - FIT_MARGIN).max(0.0))
    } else {
        FitDecision::Width((available_width - FIT_MARGIN).max(0.0))
    }
}
