//! Contact form validation
//!
//! - `schema`: declarative per-field rules and the validator
//! - `email`: email address syntax
//! - `error`: violation types

mod email;
mod error;
mod schema;

pub use error::ValidationErrors;
pub use schema::{validate, ValidatedContact};
