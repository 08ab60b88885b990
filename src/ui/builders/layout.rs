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

//! Layout builder
//!
//! Creates the application window and the main view inside it.

use gtk4::{Application, ApplicationWindow};

use crate::{
    config::Settings,
    core::{AssetResolver, Rgba},
    ui::components::MainView,
};

/// Window title
pub const WINDOW_TITLE: &str = "Modelo-Vista-Controlador";

/// Builds the main window and its content
///
/// Creates an `ApplicationWindow` sized from `settings` containing a
/// horizontal split with:
///   - Left: the image area (grows and shrinks with the window)
///   - Right: the side panel (keeps its natural width)
///
/// # Returns
///
/// Tuple of (window, main_view)
pub fn build_main_layout(
    app: &Application,
    settings: &Settings,
    initial_color: Rgba,
) -> (ApplicationWindow, MainView) {
    let window = ApplicationWindow::builder()
        .application(app)
        .title(WINDOW_TITLE)
        .default_width(settings.window_width)
        .default_height(settings.window_height)
        .build();

    let resolver = AssetResolver::with_images_dir(settings.images_dir.clone());
    let main_view = MainView::new(&window, resolver, initial_color);

    (window, main_view)
}
