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

//! MVC Controller - Observes the Model and drives a render surface
//!
//! # Responsibilities
//!
//! - Subscribe to the Model and re-render on every change
//! - Translate user input into exactly one Model mutation each
//! - Keep the image scaled to its container (fit by width or by height)
//!
//! # Architecture
//!
//! The Controller holds the shared Model but doesn't know about GTK4
//! widgets. It talks to the view through [`RenderSurface`], which the GTK
//! `MainView` implements and tests replace with a recorder.
//!
//! ```text
//! input event → Controller handler → Model mutator
//!                                       ↓ notify_observers
//!               RenderSurface  ←  Controller::on_change
//! ```

use std::{
    cell::Cell,
    rc::{Rc, Weak},
};

use crate::core::{
    fit::fit_image,
    FitDecision, ImageChoice, ImageSize, Model, Observer, Rgba, Size,
};

/// Render commands and geometry the Controller needs from a view
pub trait RenderSurface {
    /// Shows the image asset for `key`
    fn show_image(&self, key: &str);
    fn show_text(&self, text: &str);
    fn show_counter(&self, counter: &str);
    fn show_color(&self, color: &str);
    /// Intrinsic size of the image currently shown, if any
    fn image_size(&self) -> Option<ImageSize>;
    /// Size of the whole content area (image area plus side panel)
    fn container_size(&self) -> Size;
    /// Horizontal space taken by the side panel, margins included
    fn panel_width(&self) -> f64;
    fn apply_fit(&self, decision: FitDecision);
}

/// MVC Controller coordinating Model and View
///
/// Registered with the Model as an [`Observer`]. Call [`Controller::detach`]
/// when the view goes away so the Model stops holding it.
pub struct Controller<S: RenderSurface> {
    /// Shared application model
    model: Rc<Model>,
    /// View receiving render commands
    surface: S,
    /// Handle to ourselves, for unsubscribing
    this: Weak<Controller<S>>,
    /// Cleared by `detach`; a detached Controller renders nothing
    attached: Cell<bool>,
}

impl<S: RenderSurface + 'static> Controller<S> {
    /// Creates a Controller, subscribes it and renders the initial state
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use observer_demo::core::{FitDecision, ImageSize, Model, Size};
    /// # use observer_demo::ui::{Controller, RenderSurface};
    /// # use std::rc::Rc;
    /// # struct Null;
    /// # impl RenderSurface for Null {
    /// #     fn show_image(&self, _: &str) {}
    /// #     fn show_text(&self, _: &str) {}
    /// #     fn show_counter(&self, _: &str) {}
    /// #     fn show_color(&self, _: &str) {}
    /// #     fn image_size(&self) -> Option<ImageSize> { None }
    /// #     fn container_size(&self) -> Size { Size::new(0.0, 0.0) }
    /// #     fn panel_width(&self) -> f64 { 0.0 }
    /// #     fn apply_fit(&self, _: FitDecision) {}
    /// # }
    /// let model = Rc::new(Model::new());
    /// let controller = Controller::attach(model.clone(), Null);
    ///
    /// controller.on_increment_pressed();
    /// assert_eq!(model.counter(), 1);
    /// ```
    pub fn attach(model: Rc<Model>, surface: S) -> Rc<Self> {
        let controller = Rc::new_cyclic(|this| Self {
            model,
            surface,
            this: this.clone(),
            attached: Cell::new(true),
        });

        let observer: Rc<dyn Observer> = controller.clone();
        controller.model.subscribe(observer);

        controller.render();
        controller.fit_image();

        controller
    }

    /// Unsubscribes from the Model and stops rendering
    ///
    /// Later `refresh`/`fit_image` calls (e.g. from a timer that outlives
    /// the window) do nothing.
    ///
    /// # Returns
    ///
    /// `true` if the Controller was subscribed
    pub fn detach(&self) -> bool {
        self.attached.set(false);
        match self.this.upgrade() {
            Some(this) => {
                let observer: Rc<dyn Observer> = this;
                self.model.unsubscribe(&observer)
            }
            None => false,
        }
    }

    /// Whether the Controller still observes the Model
    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    /// Pushes all four model fields to the surface
    pub fn render(&self) {
        if !self.is_attached() {
            return;
        }
        let state = self.model.snapshot();

        self.surface.show_image(&state.image);
        self.surface.show_counter(&state.counter.to_string());
        self.surface.show_text(&state.text);
        self.surface.show_color(&state.color.to_string());
    }

    /// Recomputes how the image fits its container
    ///
    /// # Returns
    ///
    /// The decision applied, or `None` when detached or no image size is known
    pub fn fit_image(&self) -> Option<FitDecision> {
        if !self.is_attached() {
            return None;
        }
        let aspect_ratio = self.surface.image_size()?.aspect_ratio()?;
        let decision = fit_image(
            self.surface.container_size(),
            self.surface.panel_width(),
            aspect_ratio,
        );

        tracing::trace!(?decision, "Image fit");
        self.surface.apply_fit(decision);
        Some(decision)
    }

    /// Re-renders without touching the Model (e.g. an asset file changed)
    pub fn refresh(&self) {
        self.render();
        self.fit_image();
    }

    /// Text entry submitted
    pub fn on_text_submitted(&self, text: &str) {
        self.model.set_text(text);
        tracing::info!(text = %text, "Text updated");
    }

    /// Increment button pressed
    pub fn on_increment_pressed(&self) {
        self.model.increment_counter();
        tracing::info!(counter = self.model.counter(), "Counter incremented");
    }

    /// Colour picked
    pub fn on_color_chosen(&self, color: Rgba) {
        self.model.set_color(color);
        tracing::info!(color = %color, "Colour changed");
    }

    /// Image selected in the drop-down
    pub fn on_choice_selected(&self, choice: ImageChoice) {
        self.model.set_image(choice.label());
        tracing::info!(image = %choice, "Image changed");
    }

    /// Container width or height changed
    pub fn on_resized(&self) {
        self.fit_image();
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: RenderSurface + 'static> Observer for Controller<S> {
    /// Pulls the full state and re-renders; never mutates the Model
    fn on_change(&self) {
        self.refresh();
    }
}
