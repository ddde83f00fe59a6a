// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod helpers;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::SubmitConfig;
pub use error::{ConfigError, DispatchError};
pub use helpers::{safe_email_log, trim};
pub use validation::{FieldReport, FormReport, ValidationResult, Validator};
