//! # Form Module
//!
//! Submit-time coordination of the registration form:
//! - Field descriptors built from raw input
//! - Validation of every field and rendering of error state
//! - Submission through the request dispatcher and completion notice

pub mod models;
pub mod orchestrator;

#[cfg(test)]
mod tests;

pub use models::{registration_form, FieldCheck, FieldDescriptor, FieldValue, RegistrationInput};
pub use orchestrator::{
    ErrorBoard, ErrorDisplay, FormOrchestrator, FormValidator, LogNotifier, Notifier,
    SubmitOutcome,
};
