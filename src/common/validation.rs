// Common validation types and traits

use serde::Serialize;

pub const DEFAULT_ERROR_MESSAGE: &str = "Field has invalid value";

/// Outcome of a single field check.
///
/// Fields are private so a message can only exist on a failed result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    error: bool,
    error_message: String,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            error: false,
            error_message: String::new(),
        }
    }

    /// A blank message is replaced with [`DEFAULT_ERROR_MESSAGE`].
    pub fn fail(message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = DEFAULT_ERROR_MESSAGE.to_string();
        }
        Self {
            error: true,
            error_message: message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub key: String,
    pub result: ValidationResult,
}

/// Results for every field of a form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormReport {
    pub fields: Vec<FieldReport>,
}

impl FormReport {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn push(&mut self, key: &str, result: ValidationResult) {
        self.fields.push(FieldReport {
            key: key.to_string(),
            result,
        });
    }

    pub fn is_valid(&self) -> bool {
        !self.fields.iter().any(|f| f.result.is_error())
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields.iter().filter(|f| f.result.is_error())
    }

    pub fn summary(&self) -> String {
        let error_messages: Vec<String> = self
            .errors()
            .map(|e| format!("{}: {}", e.key, e.result.error_message()))
            .collect();
        error_messages.join(", ")
    }
}

pub trait Validator<T: ?Sized> {
    fn validate(&self, data: &T) -> FormReport;
}
