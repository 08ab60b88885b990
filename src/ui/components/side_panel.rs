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

//! Side panel component
//!
//! Fixed-width column to the right of the image holding the three value
//! labels and the four input controls.

use gtk4::{
    gdk, prelude::*, Align, Box as GtkBox, Button, ColorDialog, ColorDialogButton, DropDown,
    Entry, Label, Orientation, Separator,
};

use crate::core::{
    fit::{SIDE_PANEL_MARGIN, SIDE_PANEL_WIDTH},
    ImageChoice, Rgba,
};

/// Side panel with labels and form controls
///
/// The panel only builds widgets. Event handlers are connected by
/// `builders::wire_up_handlers`, which routes them to the Controller.
pub struct SidePanel {
    /// Root widget (vertical box)
    widget: GtkBox,
    /// Shows the model text
    text_label: Label,
    /// Shows the model counter
    counter_label: Label,
    /// Shows the model colour as `0xrrggbbaa`
    color_label: Label,
    text_entry: Entry,
    increment_button: Button,
    color_button: ColorDialogButton,
    image_selector: DropDown,
}

impl SidePanel {
    /// Helper to create a header + value label pair
    ///
    /// # Returns
    ///
    /// Tuple of (row_box, value_label)
    fn create_label_row(header_text: &str) -> (GtkBox, Label) {
        let row = GtkBox::new(Orientation::Horizontal, 6);

        let header = Label::builder()
            .label(header_text)
            .halign(Align::Start)
            .build();
        header.add_css_class("dim-label");

        let value = Label::builder()
            .halign(Align::Start)
            .xalign(0.0)
            .wrap(true)
            .selectable(true)
            .build();

        row.append(&header);
        row.append(&value);
        (row, value)
    }

    /// Creates the panel with every control in its initial state
    ///
    /// # Arguments
    ///
    /// * `initial_color` - Colour preselected in the colour button
    pub fn new(initial_color: Rgba) -> Self {
        let widget = GtkBox::new(Orientation::Vertical, 10);
        widget.set_width_request(SIDE_PANEL_WIDTH as i32);
        widget.set_hexpand(false);
        let margin = SIDE_PANEL_MARGIN as i32;
        widget.set_margin_start(margin);
        widget.set_margin_end(margin);
        widget.set_margin_top(margin);
        widget.set_margin_bottom(margin);

        let (text_row, text_label) = Self::create_label_row("Cadena:");
        let (counter_row, counter_label) = Self::create_label_row("Entero:");
        let (color_row, color_label) = Self::create_label_row("Color:");
        widget.append(&text_row);
        widget.append(&counter_row);
        widget.append(&color_row);

        widget.append(&Separator::new(Orientation::Horizontal));

        let text_entry = Entry::builder()
            .placeholder_text("Nueva cadena (Enter)")
            .build();
        widget.append(&text_entry);

        let increment_button = Button::builder().label("+1").build();
        widget.append(&increment_button);

        let color_button = ColorDialogButton::new(Some(ColorDialog::new()));
        color_button.set_rgba(&to_gdk_rgba(initial_color));
        widget.append(&color_button);

        let image_selector = DropDown::from_strings(&ImageChoice::labels());
        image_selector.set_selected(ImageChoice::Portada.index());
        widget.append(&image_selector);

        Self {
            widget,
            text_label,
            counter_label,
            color_label,
            text_entry,
            increment_button,
            color_button,
            image_selector,
        }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    pub fn text_label(&self) -> &Label {
        &self.text_label
    }

    pub fn counter_label(&self) -> &Label {
        &self.counter_label
    }

    pub fn color_label(&self) -> &Label {
        &self.color_label
    }

    pub fn text_entry(&self) -> &Entry {
        &self.text_entry
    }

    pub fn increment_button(&self) -> &Button {
        &self.increment_button
    }

    pub fn color_button(&self) -> &ColorDialogButton {
        &self.color_button
    }

    pub fn image_selector(&self) -> &DropDown {
        &self.image_selector
    }
}

pub fn to_gdk_rgba(color: Rgba) -> gdk::RGBA {
    gdk::RGBA::new(color.red, color.green, color.blue, color.alpha)
}

pub fn from_gdk_rgba(color: &gdk::RGBA) -> Rgba {
    Rgba::new(color.red(), color.green(), color.blue(), color.alpha())
}
