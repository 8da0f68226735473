//! Form rendering module
//!
//! - `field_renderer`: text, radio, checkbox and error line widgets
//! - `contact_form`: the contact form layout

mod contact_form;
mod field_renderer;

pub use contact_form::{draw as draw_contact_form, FORM_MAX_WIDTH};
