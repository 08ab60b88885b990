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

//! src/core/model.rs
//!
//! The Subject in the observer pattern
//!
//! `Model` owns the canonical application state (image key, text, counter,
//! colour) and an ordered registry of observers. Every mutator updates the
//! state and then synchronously notifies each observer once, in
//! registration order, before returning.
//!
//! Observers receive no payload: they read what they need through the
//! getters. State and registry sit behind `RefCell`s so that mutators take
//! `&self` and observers can call getters while a notification is running.
//!
//! The model is single-threaded (`Rc`, `RefCell`) and owned by the
//! application root, which hands `Rc<Model>` to every consumer.

use serde::Serialize;
use std::{cell::RefCell, rc::Rc};

use crate::core::{assets::ImageChoice, color::Rgba};

/// Text shown before the user submits anything
pub const DEFAULT_TEXT: &str = "Cadena de ejemplo";

/// Something that wants to know when the model changed
pub trait Observer {
    /// Called once per model mutation, after the state has been updated
    fn on_change(&self);
}

/// Plain copy of the model's four fields
///
/// Serialises for display only. The colour is written at 8 bits per
/// channel, so a snapshot does not read back to an equal state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModelState {
    pub image: String,
    pub text: String,
    pub counter: i64,
    pub color: Rgba,
}

impl Default for ModelState {
    fn default() -> Self {
        Self {
            image: ImageChoice::Portada.label().to_string(),
            text: DEFAULT_TEXT.to_string(),
            counter: 0,
            color: Rgba::WHITE,
        }
    }
}

/// Application state with change notification
///
/// # Example
///
/// ```
/// use observer_demo::core::{Model, Observer};
/// use std::{cell::Cell, rc::Rc};
///
/// struct Counter(Cell<u32>);
/// impl Observer for Counter {
///     fn on_change(&self) {
///         self.0.set(self.0.get() + 1);
///     }
/// }
///
/// let model = Model::new();
/// let counter = Rc::new(Counter(Cell::new(0)));
/// model.subscribe(counter.clone());
///
/// model.set_text("hola");
/// model.increment_counter();
/// assert_eq!(counter.0.get(), 2);
/// ```
#[derive(Default)]
pub struct Model {
    state: RefCell<ModelState>,
    observers: RefCell<Vec<Rc<dyn Observer>>>,
}

impl Model {
    /// Creates a model with the default state and no observers
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observer to the registry
    ///
    /// Duplicates are allowed: an observer subscribed twice is notified twice.
    pub fn subscribe(&self, observer: Rc<dyn Observer>) {
        self.observers.borrow_mut().push(observer);
    }

    /// Removes the first registry entry that is the same observer
    ///
    /// Identity is the `Rc` allocation, not value equality. If the observer
    /// was subscribed several times only one entry is removed.
    ///
    /// # Returns
    ///
    /// `true` if an entry was removed, `false` if the observer was not registered
    pub fn unsubscribe(&self, observer: &Rc<dyn Observer>) -> bool {
        let mut observers = self.observers.borrow_mut();
        match observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            Some(index) => {
                observers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of registry entries (duplicates counted)
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Notifies every registered observer once, in registration order
    ///
    /// The registry is snapshotted first. Observers may subscribe or
    /// unsubscribe from inside `on_change`; the change applies from the next
    /// notification onwards.
    pub fn notify_observers(&self) {
        let snapshot: Vec<Rc<dyn Observer>> = self.observers.borrow().clone();
        for observer in snapshot {
            observer.on_change();
        }
    }

    /// Key of the selected image asset
    pub fn image(&self) -> String {
        self.state.borrow().image.clone()
    }

    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    pub fn counter(&self) -> i64 {
        self.state.borrow().counter
    }

    pub fn color(&self) -> Rgba {
        self.state.borrow().color
    }

    /// Copy of all four fields at once
    pub fn snapshot(&self) -> ModelState {
        self.state.borrow().clone()
    }

    /// Selects an image by key and notifies
    ///
    /// The key is not checked against the available assets.
    pub fn set_image(&self, key: impl Into<String>) {
        self.state.borrow_mut().image = key.into();
        self.notify_observers();
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.state.borrow_mut().text = text.into();
        self.notify_observers();
    }

    pub fn set_color(&self, color: Rgba) {
        self.state.borrow_mut().color = color;
        self.notify_observers();
    }

    /// Adds one to the counter and notifies
    ///
    /// The counter wraps at `i64::MAX` instead of panicking.
    pub fn increment_counter(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.counter = state.counter.wrapping_add(1);
        }
        self.notify_observers();
    }
}
