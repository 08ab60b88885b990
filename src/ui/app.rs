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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. The single `Model` is created here and handed to the
//! Controller; nothing else owns application state.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Owns Rc<Model>
//!   ├─ Builds main window + MainView
//!   ├─ Attaches Controller (subscribes to Model, first render + fit)
//!   ├─ Wires input handlers to Controller
//!   └─ Polls the override images directory, if any, until the window closes
//! ```

use gtk4::{glib, prelude::*, Application, ApplicationWindow};
use std::{cell::RefCell, path::Path, rc::Rc, time::Duration};

use crate::{
    config::Settings,
    core::Model,
    ui::{
        actions::setup_quit_action,
        asset_watcher::AssetWatcher,
        builders::{build_main_layout, wire_up_handlers},
        Controller, MainView,
    },
};

/// How often the images directory is checked for changes
const ASSET_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// GTK4 Application for the demo
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// Runtime settings
    settings: Rc<Settings>,
    /// Shared application model
    model: Rc<Model>,
}

impl App {
    /// Creates a new App with a fresh default Model
    ///
    /// # Example
    ///
    /// ```no_run
    /// use observer_demo::{config::Settings, ui::App};
    ///
    /// let app = App::new(Settings::default());
    /// app.run(); // Blocks until window closes
    /// ```
    pub fn new(settings: Settings) -> Self {
        let app = Application::builder()
            .application_id(settings.application_id.as_str())
            .build();

        Self {
            app,
            settings: Rc::new(settings),
            model: Rc::new(Model::new()),
        }
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop and blocks until the application
    /// exits. Command-line arguments are not forwarded to GTK.
    pub fn run(self) -> glib::ExitCode {
        let settings = self.settings.clone();
        let model = self.model.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, &settings, model.clone());
        });

        self.app.run_with_args::<&str>(&[])
    }

    /// Builds the main window UI
    ///
    /// This is called when the application activates.
    fn build_ui(app: &Application, settings: &Settings, model: Rc<Model>) {
        setup_quit_action(app);

        let (window, main_view) = build_main_layout(app, settings, model.color());
        let controller = Controller::attach(model, main_view);

        wire_up_handlers(&window, controller.clone());

        match &settings.images_dir {
            Some(dir) => {
                let poll = Self::watch_assets(dir, controller);
                Self::stop_on_close(&window, poll);
                tracing::info!(images_dir = %dir.display(), "Main window ready");
            }
            None => tracing::info!("Main window ready (bundled images)"),
        }
        window.present();
    }

    /// Re-renders when files in the images directory change
    ///
    /// Returns the polling source, or `None` when the directory can't be watched.
    fn watch_assets(
        images_dir: &Path,
        controller: Rc<Controller<MainView>>,
    ) -> Option<glib::SourceId> {
        let watcher = match AssetWatcher::new(images_dir) {
            Ok(watcher) => watcher,
            Err(e) => {
                tracing::warn!("Not watching {} for changes: {}", images_dir.display(), e);
                return None;
            }
        };

        let source = glib::timeout_add_local(ASSET_POLL_INTERVAL, move || {
            if watcher.check_for_changes() {
                tracing::info!("Images changed on disk, reloading");
                controller.refresh();
            }
            glib::ControlFlow::Continue
        });
        Some(source)
    }

    /// Removes the polling source when the window closes
    ///
    /// Dropping the source also drops its watcher and Controller handle.
    fn stop_on_close(window: &ApplicationWindow, poll: Option<glib::SourceId>) {
        let poll = RefCell::new(poll);
        window.connect_close_request(move |_| {
            if let Some(source) = poll.borrow_mut().take() {
                source.remove();
                tracing::debug!("Stopped watching images directory");
            }
            glib::Propagation::Proceed
        });
    }
}
