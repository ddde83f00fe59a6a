//! # Field Validators
//!
//! One pure function per field kind. Every function returns a fresh
//! [`ValidationResult`]; text validators are built from ordered [`Rule`]
//! lists so an empty value is always reported before a format problem.

pub mod rules;


use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::common::ValidationResult;
pub use rules::{run_rules, Rule};
use rules::*;

/// A selectable input inside a group (radio button or checkbox).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    #[serde(default)]
    pub checked: bool,
}

impl Choice {
    pub fn new(value: impl Into<String>, checked: bool) -> Self {
        Self {
            value: value.into(),
            checked,
        }
    }
}

pub fn on_empty(value: &str, field_name: &str) -> ValidationResult {
    run_rules(value, field_name, &[Rule::NotEmpty])
}

pub fn on_email(email: &str, field_name: &str) -> ValidationResult {
    run_rules(
        email,
        field_name,
        &[
            Rule::NotEmpty,
            Rule::Matches(&*EMAIL_REGEX, wrong_email(field_name)),
        ],
    )
}

pub fn on_password(password: &str, field_name: &str) -> ValidationResult {
    run_rules(
        password,
        field_name,
        &[
            Rule::NotEmpty,
            Rule::MinLength(MIN_PASSWORD_LENGTH, WRONG_PASSWORD_LENGTH.to_string()),
        ],
    )
}

pub fn on_date(date: &str, field_name: &str) -> ValidationResult {
    run_rules(
        date,
        field_name,
        &[
            Rule::NotEmpty,
            Rule::Matches(&*DATE_REGEX, WRONG_DATE.to_string()),
        ],
    )
}

/// Passes a phone number against `custom` when given, otherwise the
/// default international pattern.
pub fn on_phone_number(number: &str, field_name: &str, custom: Option<&Regex>) -> ValidationResult {
    let regex = custom.unwrap_or(&*PHONE_REGEX);
    run_rules(
        number,
        field_name,
        &[Rule::NotEmpty, Rule::Matches(regex, wrong_phone(field_name))],
    )
}

pub fn on_valid_text_without_quotes(text: &str, field_name: &str) -> ValidationResult {
    run_rules(
        text,
        field_name,
        &[Rule::Forbids(QUOTE_CHARS, forbidden_quotes_text(field_name))],
    )
}

pub fn check_fieldset(items: &[Choice], field_name: &str) -> ValidationResult {
    if items.iter().any(|item| item.checked) {
        ValidationResult::ok()
    } else {
        ValidationResult::fail(check_fieldset_text(field_name))
    }
}

pub fn on_check_select(current: &str, default: &str, field_name: &str) -> ValidationResult {
    if current != default {
        ValidationResult::ok()
    } else {
        ValidationResult::fail(select_error_text(field_name))
    }
}
