//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;

/// Creates a test App with default configuration.
pub fn test_app() -> App {
    App::new()
}

/// Creates a test App whose composer already holds `text`.
pub fn app_with_composer(text: &str) -> App {
    let mut app = App::new();
    app.composer = text.to_string();
    app
}
