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

//! GTK Action setup for the application
//!
//! This module contains the application-level actions and their
//! keyboard accelerators.

use gtk4::{gio, prelude::*, Application};

/// Sets up the quit action
///
/// Creates a GTK action that quits the application when triggered,
/// bound to Ctrl+Q.
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        tracing::debug!("Quit requested");
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &["<Control>q"]);
}
