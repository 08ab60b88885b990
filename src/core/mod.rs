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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the display-free half of the application:
//! - The observable `Model` and the `Observer` capability
//! - The `Rgba` colour value
//! - The image fit decision
//! - Image choices and asset path resolution
//!
//! Nothing here touches GTK, so all of it is unit tested without a
//! display server.

pub mod assets;
pub mod color;
pub mod error;
pub mod fit;
pub mod model;

pub use assets::{bundled_image, AssetResolver, AssetSource, ImageChoice};
pub use color::Rgba;
pub use error::{AssetError, ColorParseError};
pub use fit::{fit_image, FitDecision, ImageSize, Size};
pub use model::{Model, ModelState, Observer};

#[cfg(test)]
mod tests;
