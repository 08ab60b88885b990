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

//! Controller tests
//!
//! Tests for the MVC Controller logic, using a recording surface in place
//! of GTK widgets.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::core::{
    fit::SIDE_PANEL_FOOTPRINT, FitDecision, ImageChoice, ImageSize, Model, Observer, Rgba, Size,
};
use crate::ui::{Controller, RenderSurface};

/// A render command as received by the surface
#[derive(Clone, Debug, PartialEq)]
enum Command {
    Image(String),
    Text(String),
    Counter(String),
    Color(String),
    Fit(FitDecision),
}

/// Helper: Surface that records every command it receives
struct RecordingSurface {
    commands: RefCell<Vec<Command>>,
    container: Cell<Size>,
    panel_width: Cell<f64>,
    image_size: Cell<Option<ImageSize>>,
}

impl RecordingSurface {
    fn new(container: Size, image_size: Option<ImageSize>) -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            container: Cell::new(container),
            panel_width: Cell::new(200.0),
            image_size: Cell::new(image_size),
        }
    }

    fn take(&self) -> Vec<Command> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }

    fn fits(&self) -> Vec<FitDecision> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|command| match command {
                Command::Fit(decision) => Some(*decision),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn show_image(&self, key: &str) {
        self.commands.borrow_mut().push(Command::Image(key.to_string()));
    }

    fn show_text(&self, text: &str) {
        self.commands.borrow_mut().push(Command::Text(text.to_string()));
    }

    fn show_counter(&self, counter: &str) {
        self.commands
            .borrow_mut()
            .push(Command::Counter(counter.to_string()));
    }

    fn show_color(&self, color: &str) {
        self.commands.borrow_mut().push(Command::Color(color.to_string()));
    }

    fn image_size(&self) -> Option<ImageSize> {
        self.image_size.get()
    }

    fn container_size(&self) -> Size {
        self.container.get()
    }

    fn panel_width(&self) -> f64 {
        self.panel_width.get()
    }

    fn apply_fit(&self, decision: FitDecision) {
        self.commands.borrow_mut().push(Command::Fit(decision));
    }
}

/// Helper: Controller over a fresh Model, 800x600 window, 3:2 image
fn create_controller() -> (Rc<Model>, Rc<Controller<RecordingSurface>>) {
    let model = Rc::new(Model::new());
    let surface = RecordingSurface::new(Size::new(800.0, 600.0), Some(ImageSize::new(300, 200)));
    let controller = Controller::attach(model.clone(), surface);
    (model, controller)
}

#[test]
fn test_attach_subscribes_and_renders_initial_state() {
    let (model, controller) = create_controller();

    assert_eq!(model.observer_count(), 1);
    assert_eq!(
        controller.surface().take(),
        vec![
            Command::Image("Portada".to_string()),
            Command::Counter("0".to_string()),
            Command::Text("Cadena de ejemplo".to_string()),
            Command::Color("0xffffffff".to_string()),
            Command::Fit(FitDecision::Width(590.0)),
        ]
    );
}

#[test]
fn test_text_submitted_updates_model_and_view() {
    let (model, controller) = create_controller();
    controller.surface().take();

    controller.on_text_submitted("Hola, mundo!");

    assert_eq!(model.text(), "Hola, mundo!");
    assert!(controller
        .surface()
        .take()
        .contains(&Command::Text("Hola, mundo!".to_string())));
}

#[test]
fn test_empty_text_is_accepted() {
    let (model, controller) = create_controller();

    controller.on_text_submitted("");

    assert_eq!(model.text(), "");
}

#[test]
fn test_increment_pressed() {
    let (model, controller) = create_controller();
    controller.surface().take();

    controller.on_increment_pressed();
    controller.on_increment_pressed();

    assert_eq!(model.counter(), 2);
    let commands = controller.surface().take();
    assert!(commands.contains(&Command::Counter("1".to_string())));
    assert!(commands.contains(&Command::Counter("2".to_string())));
}

#[test]
fn test_color_chosen() {
    let (model, controller) = create_controller();
    controller.surface().take();

    controller.on_color_chosen(Rgba::from_rgba8(0x12, 0x34, 0x56, 0xff));

    assert_eq!(model.color().to_rgba8(), [0x12, 0x34, 0x56, 0xff]);
    assert!(controller
        .surface()
        .take()
        .contains(&Command::Color("0x123456ff".to_string())));
}

#[test]
fn test_choice_selected() {
    let (model, controller) = create_controller();
    controller.surface().take();

    controller.on_choice_selected(ImageChoice::Notificacion);

    assert_eq!(model.image(), "Notificación");
    assert!(controller
        .surface()
        .take()
        .contains(&Command::Image("Notificación".to_string())));
}

#[test]
fn test_each_mutation_renders_once() {
    let (_model, controller) = create_controller();
    controller.surface().take();

    controller.on_increment_pressed();

    let images = controller
        .surface()
        .take()
        .into_iter()
        .filter(|command| matches!(command, Command::Image(_)))
        .count();
    assert_eq!(images, 1, "One notification should render one frame");
}

#[test]
fn test_view_follows_mutations_from_elsewhere() {
    let (model, controller) = create_controller();
    controller.surface().take();

    // Another component mutating the shared model
    model.set_text("desde fuera");

    assert!(controller
        .surface()
        .take()
        .contains(&Command::Text("desde fuera".to_string())));
}

#[test]
fn test_resize_refits_height_constrained() {
    let (_model, controller) = create_controller();
    controller.surface().take();

    controller.surface().container.set(Size::new(1000.0, 400.0));
    controller.surface().image_size.set(Some(ImageSize::new(500, 500)));
    controller.on_resized();

    assert_eq!(controller.surface().fits(), vec![FitDecision::Height(390.0)]);
}

#[test]
fn test_fit_without_image_is_skipped() {
    let model = Rc::new(Model::new());
    let surface = RecordingSurface::new(Size::new(800.0, 600.0), None);
    let controller = Controller::attach(model, surface);

    assert_eq!(controller.fit_image(), None);
    assert!(controller.surface().fits().is_empty());
}

#[test]
fn test_fit_with_zero_height_image_is_skipped() {
    let model = Rc::new(Model::new());
    let surface = RecordingSurface::new(Size::new(800.0, 600.0), Some(ImageSize::new(10, 0)));
    let controller = Controller::attach(model, surface);

    assert_eq!(controller.fit_image(), None);
}

#[test]
fn test_detach_stops_rendering() {
    let (model, controller) = create_controller();
    controller.surface().take();

    assert!(controller.detach());
    assert_eq!(model.observer_count(), 0);

    model.increment_counter();
    assert!(controller.surface().take().is_empty());

    assert!(!controller.detach(), "Second detach is a no-op");
}

#[test]
fn test_detach_leaves_other_observers() {
    struct Tally(Cell<usize>);
    impl Observer for Tally {
        fn on_change(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    let (model, controller) = create_controller();
    let tally = Rc::new(Tally(Cell::new(0)));
    model.subscribe(tally.clone());

    controller.detach();
    model.set_text("X");

    assert_eq!(tally.0.get(), 1);
}

#[test]
fn test_two_views_share_one_model() {
    let model = Rc::new(Model::new());
    let first = Controller::attach(
        model.clone(),
        RecordingSurface::new(Size::new(800.0, 600.0), None),
    );
    let second = Controller::attach(
        model.clone(),
        RecordingSurface::new(Size::new(800.0, 600.0), None),
    );
    first.surface().take();
    second.surface().take();

    first.on_increment_pressed();

    assert!(second
        .surface()
        .take()
        .contains(&Command::Counter("1".to_string())));
}

#[test]
fn test_fit_uses_panel_width_from_surface() {
    let (_model, controller) = create_controller();
    controller.surface().take();

    controller.surface().container.set(Size::new(1000.0, 700.0));
    controller.surface().panel_width.set(SIDE_PANEL_FOOTPRINT);
    controller.surface().image_size.set(Some(ImageSize::new(400, 300)));
    controller.on_resized();

    // 1000 - 220 - 10, leaving room for the panel and its margins
    assert_eq!(controller.surface().fits(), vec![FitDecision::Width(770.0)]);
}

#[test]
fn test_repeated_resize_to_same_size_is_stable() {
    let (_model, controller) = create_controller();
    controller.surface().take();

    controller.on_resized();
    controller.on_resized();
    controller.on_resized();

    let fits = controller.surface().fits();
    assert_eq!(fits.len(), 3);
    assert!(
        fits.iter().all(|fit| *fit == fits[0]),
        "Refitting an unchanged container must not drift"
    );
}

#[test]
fn test_detached_controller_ignores_refresh() {
    let (_model, controller) = create_controller();
    controller.surface().take();

    controller.detach();
    controller.refresh();
    controller.on_resized();

    assert!(!controller.is_attached());
    assert!(controller.surface().take().is_empty());
    assert_eq!(controller.fit_image(), None);
}
