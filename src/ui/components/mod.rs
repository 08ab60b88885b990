//! UI Components
//!
//! GTK4 widgets for the demo window.
//!
//! # Components
//!
//! - `main_view.rs` - Image area + side panel, implements `RenderSurface`
//! - `side_panel.rs` - Value labels and input controls

mod main_view;
mod side_panel;

pub use main_view::MainView;
pub use side_panel::{from_gdk_rgba, to_gdk_rgba, SidePanel};
