//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities

mod field_renderer;

pub use field_renderer::{draw_field, draw_help_text, field_height, FieldView};
