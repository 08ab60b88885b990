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

//! Event handler setup
//!
//! Wires up all event handlers for the main window:
//! - Text entry (Enter submits)
//! - Increment button
//! - Colour button
//! - Image drop-down
//! - Window resize, maximise and fullscreen
//! - Window close (detaches the Controller from the Model)

use gtk4::{glib, prelude::*, ApplicationWindow};
use std::rc::Rc;

use crate::{
    core::ImageChoice,
    ui::{
        components::{from_gdk_rgba, MainView},
        Controller,
    },
};

/// Wires up all event handlers for the main window
///
/// Each input handler calls exactly one Controller method, which in turn
/// calls exactly one Model mutator. No input is validated.
pub fn wire_up_handlers(window: &ApplicationWindow, controller: Rc<Controller<MainView>>) {
    let side_panel = controller.surface().side_panel();

    // ============================================================================
    // Text entry
    // ============================================================================
    let controller_for_text = controller.clone();
    side_panel.text_entry().connect_activate(move |entry| {
        controller_for_text.on_text_submitted(&entry.text());
    });

    // ============================================================================
    // Increment button
    // ============================================================================
    let controller_for_increment = controller.clone();
    side_panel.increment_button().connect_clicked(move |_| {
        controller_for_increment.on_increment_pressed();
    });

    // ============================================================================
    // Colour button
    // ============================================================================
    let controller_for_color = controller.clone();
    side_panel.color_button().connect_rgba_notify(move |button| {
        controller_for_color.on_color_chosen(from_gdk_rgba(&button.rgba()));
    });

    // ============================================================================
    // Image selector
    // ============================================================================
    let controller_for_image = controller.clone();
    side_panel.image_selector().connect_selected_notify(move |dropdown| {
        // INVALID_LIST_POSITION when nothing is selected
        match ImageChoice::from_index(dropdown.selected()) {
            Some(choice) => controller_for_image.on_choice_selected(choice),
            None => tracing::debug!("Image selection cleared"),
        }
    });

    // ============================================================================
    // Resize listener
    // ============================================================================
    let controller_for_width = controller.clone();
    window.connect_default_width_notify(move |_| {
        schedule_refit(&controller_for_width);
    });

    let controller_for_height = controller.clone();
    window.connect_default_height_notify(move |_| {
        schedule_refit(&controller_for_height);
    });

    // Maximise and fullscreen leave default-width/height untouched
    let controller_for_maximized = controller.clone();
    window.connect_maximized_notify(move |_| {
        schedule_refit(&controller_for_maximized);
    });

    let controller_for_fullscreened = controller.clone();
    window.connect_fullscreened_notify(move |_| {
        schedule_refit(&controller_for_fullscreened);
    });

    // ============================================================================
    // Close
    // ============================================================================
    window.connect_close_request(move |_| {
        if controller.detach() {
            tracing::debug!("Controller detached from model");
        }
        glib::Propagation::Proceed
    });
}

/// Refits once GTK has allocated the new window size
///
/// Size notifications arrive before the layout pass, so the allocation read
/// by `container_size` is only current from the next main loop iteration.
fn schedule_refit(controller: &Rc<Controller<MainView>>) {
    let controller = controller.clone();
    glib::idle_add_local_once(move || {
        controller.surface().dock_side_panel();
        controller.on_resized();
    });
}
