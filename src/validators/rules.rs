// src/validators/rules.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::common::{trim, ValidationResult};

// ============================================================================
// Patterns
// ============================================================================

pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern compiles")
});

/// Unanchored: a date anywhere in the value is accepted.
pub static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)(-|/)(\d+)(?:-|/)(?:(\d+)\s+(\d+):(\d+)(?::(\d+))?(?:\.(\d+))?)?")
        .expect("date pattern compiles")
});

pub static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9][0-9 ()\-]{5,}[0-9]$").expect("phone pattern compiles")
});

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const QUOTE_CHARS: &[char] = &['\'', '"'];

// ============================================================================
// Messages
// ============================================================================

pub fn empty_text(field_name: &str) -> String {
    format!("Field {} is Empty", field_name)
}

pub fn wrong_email(field_name: &str) -> String {
    format!("Field {} has wrong email address", field_name)
}

pub fn wrong_phone(field_name: &str) -> String {
    format!("Field {} has wrong phone number", field_name)
}

pub fn select_error_text(field_name: &str) -> String {
    format!("Choose a value in field {}", field_name)
}

pub fn check_fieldset_text(field_name: &str) -> String {
    format!("Choose an option in field {}", field_name)
}

pub fn forbidden_quotes_text(field_name: &str) -> String {
    format!(r#"The field {} has " ' " or " " ""#, field_name)
}

pub const WRONG_PASSWORD_LENGTH: &str = "Password must have length of at least 6 symbols";
pub const WRONG_DATE: &str = "Unknown format date, (dd/mm/yyyy)";

// ============================================================================
// Ordered rules
// ============================================================================

/// One check applied to a text value. Rules run in order and the first
/// failure decides the result.
#[derive(Debug)]
pub enum Rule<'a> {
    NotEmpty,
    Matches(&'a Regex, String),
    MinLength(usize, String),
    Forbids(&'a [char], String),
}

impl Rule<'_> {
    fn check(&self, value: &str, field_name: &str) -> Option<String> {
        match self {
            Rule::NotEmpty => trim(Some(value))
                .is_empty()
                .then(|| empty_text(field_name)),
            Rule::Matches(regex, message) => (!regex.is_match(value)).then(|| message.clone()),
            Rule::MinLength(min, message) => {
                (value.chars().count() < *min).then(|| message.clone())
            }
            Rule::Forbids(chars, message) => value
                .contains(|c: char| chars.contains(&c))
                .then(|| message.clone()),
        }
    }
}

pub fn invalid_text(field_name: &str) -> String {
    format!("Field {} has invalid value", field_name)
}

/// A rule built with a blank message reports [`invalid_text`] instead.
pub fn run_rules(value: &str, field_name: &str, rules: &[Rule<'_>]) -> ValidationResult {
    rules
        .iter()
        .find_map(|rule| rule.check(value, field_name))
        .map(|message| {
            if message.trim().is_empty() {
                ValidationResult::fail(invalid_text(field_name))
            } else {
                ValidationResult::fail(message)
            }
        })
        .unwrap_or_else(ValidationResult::ok)
}
