//! Success notification for accepted submissions

mod log;
mod traits;

pub use log::LogNotifier;
pub use traits::{Submission, SubmitNotifier};

#[cfg(test)]
pub use traits::MockSubmitNotifier;
