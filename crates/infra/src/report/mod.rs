//! Report rendering

pub mod render;

pub use render::{format_hours, render, render_json, render_text};
