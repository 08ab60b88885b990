//! UI builder modules
//!
//! Contains modular builders for constructing the main application UI:
//! - Window and layout construction
//! - Event handler wiring

pub mod handlers;
pub mod layout;

pub use handlers::wire_up_handlers;
pub use layout::build_main_layout;
