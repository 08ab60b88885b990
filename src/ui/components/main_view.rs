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

//! Main view component
//!
//! The GTK4 implementation of [`RenderSurface`]: an image area on the left
//! and the [`SidePanel`] on the right, split by a [`Paned`] that keeps the
//! panel at its natural width while the image area follows the window.
//!
//! The picture sits in a scrolled window with external scrolling, so the
//! size requests made when fitting never become the window's minimum size.
//!
//! Images come from the resolver (override directory or bundled copy). A key
//! that cannot be resolved or decoded shows a grey placeholder and logs a
//! warning instead of taking the application down.

use gtk4::{
    gdk, glib, prelude::*, ApplicationWindow, ContentFit, Orientation, Paned, Picture,
    PolicyType, ScrolledWindow,
};
use std::cell::Cell;

use crate::{
    core::{
        fit::SIDE_PANEL_FOOTPRINT, AssetError, AssetResolver, AssetSource, FitDecision, ImageSize,
        Rgba, Size,
    },
    ui::{components::SidePanel, controller::RenderSurface},
};

/// Placeholder dimensions (4:3)
const PLACEHOLDER_WIDTH: i32 = 4;
const PLACEHOLDER_HEIGHT: i32 = 3;

/// Root view: image area plus side panel
pub struct MainView {
    /// Root widget; its allocation is the container size
    paned: Paned,
    /// Displays the selected image
    picture: Picture,
    side_panel: SidePanel,
    /// Window whose default size stands in before the first allocation
    window: ApplicationWindow,
    resolver: AssetResolver,
    /// Intrinsic size of the texture currently shown
    image_size: Cell<Option<ImageSize>>,
}

impl MainView {
    /// Builds the view and places it in `window`
    pub fn new(window: &ApplicationWindow, resolver: AssetResolver, initial_color: Rgba) -> Self {
        let paned = Paned::new(Orientation::Horizontal);

        let picture = Picture::builder()
            .can_shrink(true)
            .content_fit(ContentFit::Contain)
            .build();

        let image_area = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::External)
            .vscrollbar_policy(PolicyType::External)
            .hexpand(true)
            .vexpand(true)
            .child(&picture)
            .build();

        let side_panel = SidePanel::new(initial_color);

        paned.set_start_child(Some(&image_area));
        paned.set_resize_start_child(true);
        paned.set_shrink_start_child(true);

        paned.set_end_child(Some(side_panel.widget()));
        paned.set_resize_end_child(false);
        paned.set_shrink_end_child(false);

        paned.set_position((f64::from(window.default_width()) - SIDE_PANEL_FOOTPRINT) as i32);

        window.set_child(Some(&paned));

        Self {
            paned,
            picture,
            side_panel,
            window: window.clone(),
            resolver,
            image_size: Cell::new(None),
        }
    }

    pub fn side_panel(&self) -> &SidePanel {
        &self.side_panel
    }

    /// Moves the divider so the side panel keeps its footprint at the right edge
    pub fn dock_side_panel(&self) {
        let position = self.container_size().width - self.panel_width();
        self.paned.set_position(position.max(0.0) as i32);
    }

    /// Resolves and decodes the asset for `key`
    fn load_texture(&self, key: &str) -> Result<gdk::Texture, AssetError> {
        let source = self.resolver.resolve(key)?;
        let texture = match &source {
            AssetSource::File(path) => gdk::Texture::from_filename(path),
            AssetSource::Bundled(bytes) => {
                gdk::Texture::from_bytes(&glib::Bytes::from_static(bytes))
            }
        };

        texture.map_err(|e| AssetError::DecodeFailed {
            asset: source.to_string(),
            reason: e.to_string(),
        })
    }
}

impl RenderSurface for MainView {
    fn show_image(&self, key: &str) {
        let texture = match self.load_texture(key) {
            Ok(texture) => texture,
            Err(e) => {
                tracing::warn!("{}; showing placeholder", e);
                placeholder_texture()
            }
        };

        let size = match (u32::try_from(texture.width()), u32::try_from(texture.height())) {
            (Ok(width), Ok(height)) => Some(ImageSize::new(width, height)),
            _ => None,
        };
        self.image_size.set(size);
        self.picture.set_paintable(Some(&texture));
    }

    fn show_text(&self, text: &str) {
        self.side_panel.text_label().set_text(text);
    }

    fn show_counter(&self, counter: &str) {
        self.side_panel.counter_label().set_text(counter);
    }

    fn show_color(&self, color: &str) {
        self.side_panel.color_label().set_text(color);
    }

    fn image_size(&self) -> Option<ImageSize> {
        self.image_size.get()
    }

    fn container_size(&self) -> Size {
        let (width, height) = (self.paned.width(), self.paned.height());
        if width > 0 && height > 0 {
            return Size::new(f64::from(width), f64::from(height));
        }

        // Not allocated yet
        Size::new(
            f64::from(self.window.default_width()),
            f64::from(self.window.default_height()),
        )
    }

    fn panel_width(&self) -> f64 {
        let panel = self.side_panel.widget();
        if panel.width() <= 0 {
            return SIDE_PANEL_FOOTPRINT;
        }
        f64::from(panel.width() + panel.margin_start() + panel.margin_end())
    }

    fn apply_fit(&self, decision: FitDecision) {
        let extent = decision.extent().round() as i32;
        match decision {
            FitDecision::Height(_) => self.picture.set_size_request(-1, extent),
            FitDecision::Width(_) => self.picture.set_size_request(extent, -1),
        }
    }
}

/// Flat grey texture shown when an image asset is unavailable
fn placeholder_texture() -> gdk::Texture {
    let pixel_count = (PLACEHOLDER_WIDTH * PLACEHOLDER_HEIGHT) as usize;
    let pixels = [0xcc_u8, 0xcc, 0xcc, 0xff].repeat(pixel_count);
    let bytes = glib::Bytes::from_owned(pixels);

    gdk::MemoryTexture::new(
        PLACEHOLDER_WIDTH,
        PLACEHOLDER_HEIGHT,
        gdk::MemoryFormat::R8g8b8a8,
        &bytes,
        (PLACEHOLDER_WIDTH * 4) as usize,
    )
    .upcast()
}
