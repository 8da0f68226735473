//! Form domain layer
//!
//! Field identifiers, the contact form state holder and its error map.

mod error_map;
mod field;
mod form_state;

pub use error_map::ErrorMap;
pub use field::{FieldName, InputKind, QueryType};
pub use form_state::{ContactForm, Form, FormData, SubmitOutcome, FOCUS_ORDER};
