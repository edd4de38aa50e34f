//! Output formatting for validation reports.
//!
//! - [`terminal`] - colored text for a person at a terminal
//! - [`json`] - machine readable report

mod json;
mod terminal;

pub use json::render_json;
pub use terminal::{describe_host, format_field, render_terminal};
