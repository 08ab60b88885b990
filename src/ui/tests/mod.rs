//! UI module tests
//!
//! Contains display-free tests for the MVC Controller.

#[cfg(test)]
mod controller_tests;
