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

//! Observer Demo
//!
//! A small GTK4 desktop application showing the Model-View-Controller
//! pattern with observer notifications. A window displays an image, a
//! counter, a text string and a colour, all editable through form controls;
//! the view re-renders whenever the model changes.
//!
//! # Architecture
//!
//! - **`core`:** Display-free logic (model + observers, colour, image fit, assets)
//! - **`config`:** Runtime settings (JSON file + command-line overrides)
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//! - **`logging`:** tracing subscriber setup
//!
//! Control flow is synchronous and single-threaded:
//!
//! ```text
//! user input → Controller handler → Model mutator
//!            → Model notifies observers → Controller::on_change → widgets
//! ```
//!
//! # Examples
//!
//! ## Observing the model
//!
//! ```
//! use observer_demo::core::{Model, Observer};
//! use std::{cell::Cell, rc::Rc};
//!
//! struct Printer(Cell<u32>);
//! impl Observer for Printer {
//!     fn on_change(&self) {
//!         self.0.set(self.0.get() + 1);
//!     }
//! }
//!
//! let model = Model::new();
//! let printer = Rc::new(Printer(Cell::new(0)));
//! model.subscribe(printer.clone());
//! model.set_text("Hola");
//! assert_eq!(printer.0.get(), 1);
//! assert_eq!(model.text(), "Hola");
//! ```
//!
//! ## Deciding how to fit an image
//!
//! ```
//! use observer_demo::core::{fit_image, FitDecision, Size};
//!
//! let decision = fit_image(Size::new(1000.0, 400.0), 200.0, 1.0);
//! assert_eq!(decision, FitDecision::Height(390.0));
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use observer_demo::{config::Settings, ui::App};
//!
//! let app = App::new(Settings::default());
//! app.run(); // Blocks until window closes
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{Model, Observer, Rgba};
