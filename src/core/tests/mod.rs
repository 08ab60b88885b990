//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Model notification and state tests
//! - Colour parsing and display tests
//! - Image fit decision tests
//! - Asset resolution tests

#[cfg(test)]
mod color_tests;
#[cfg(test)]
mod fit_tests;
