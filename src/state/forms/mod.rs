//! Contact form domain layer
//!
//! Field identifiers, the form snapshot, the error map, and the pure
//! sanitize/validate stages of the submission pipeline.

mod contact_form;
mod field;

pub use contact_form::{sanitize, validate, ErrorMap, FormSnapshot};
pub use field::ContactField;
