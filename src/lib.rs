//! Registration form validation and submission.
//!
//! Field validators, a nested query-string encoder, a request dispatcher,
//! and the submit-time orchestrator that ties them together.

pub mod common;
pub mod encoding;
pub mod form;
pub mod services;
pub mod validators;
