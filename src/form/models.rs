// src/form/models.rs

use serde::{Deserialize, Serialize};

use crate::common::ValidationResult;
use crate::validators::{self, Choice};

// ============================================================================
// Field descriptors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Choices(Vec<Choice>),
}

impl FieldValue {
    /// Text view of the value; a choice group yields its checked values
    /// joined with commas.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Choices(choices) => choices
                .iter()
                .filter(|c| c.checked)
                .map(|c| c.value.as_str())
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Choice view of the value; plain text counts as one choice that is
    /// checked when non-empty.
    pub fn as_choices(&self) -> Vec<Choice> {
        match self {
            FieldValue::Choices(choices) => choices.clone(),
            FieldValue::Text(text) => vec![Choice::new(text.clone(), !text.is_empty())],
        }
    }
}

/// Which validator runs against a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldCheck {
    Empty,
    Email,
    Password,
    MinLength { min: usize },
    Date,
    Select { default: String },
    Fieldset,
    TextWithoutQuotes,
    Phone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Form control name, used as the payload key.
    pub key: String,
    /// Human-readable name interpolated into error messages.
    pub label: String,
    pub value: FieldValue,
    pub check: FieldCheck,
}

impl FieldDescriptor {
    pub fn text(key: &str, label: &str, value: &str, check: FieldCheck) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(value.to_string()),
            check,
        }
    }

    pub fn choices(key: &str, label: &str, choices: Vec<Choice>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            value: FieldValue::Choices(choices),
            check: FieldCheck::Fieldset,
        }
    }

    pub fn validate(&self) -> ValidationResult {
        let label = self.label.as_str();
        match &self.check {
            FieldCheck::Empty => validators::on_empty(&self.value.as_text(), label),
            FieldCheck::Email => validators::on_email(&self.value.as_text(), label),
            FieldCheck::Password => validators::on_password(&self.value.as_text(), label),
            FieldCheck::MinLength { min } => validators::run_rules(
                &self.value.as_text(),
                label,
                &[
                    validators::Rule::NotEmpty,
                    validators::Rule::MinLength(
                        *min,
                        format!("Field {} must have length of at least {} symbols", label, min),
                    ),
                ],
            ),
            FieldCheck::Date => validators::on_date(&self.value.as_text(), label),
            FieldCheck::Select { default } => {
                validators::on_check_select(&self.value.as_text(), default, label)
            }
            FieldCheck::Fieldset => validators::check_fieldset(&self.value.as_choices(), label),
            FieldCheck::TextWithoutQuotes => {
                validators::on_valid_text_without_quotes(&self.value.as_text(), label)
            }
            FieldCheck::Phone => validators::on_phone_number(&self.value.as_text(), label, None),
        }
    }
}

// ============================================================================
// Registration form
// ============================================================================

pub const SEX_OPTIONS: [&str; 2] = ["male", "female"];

/// Raw values of the registration form as submitted by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationInput {
    pub first_name: String,
    pub last_name: String,
    pub birthday: String,
    pub country: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub sex: Option<String>,
    pub comment: String,
}

/// Field layout of the registration form, in display order.
pub fn registration_form(input: &RegistrationInput) -> Vec<FieldDescriptor> {
    let sex = SEX_OPTIONS
        .iter()
        .map(|option| Choice::new(*option, input.sex.as_deref() == Some(*option)))
        .collect();

    vec![
        FieldDescriptor::text("first_name", "First name", &input.first_name, FieldCheck::Empty),
        FieldDescriptor::text("last_name", "Last name", &input.last_name, FieldCheck::Empty),
        FieldDescriptor::text("email", "Email", &input.email, FieldCheck::Email),
        FieldDescriptor::text("password", "Password", &input.password, FieldCheck::Password),
        FieldDescriptor::text(
            "address",
            "Address",
            &input.address,
            FieldCheck::MinLength { min: 6 },
        ),
        FieldDescriptor::text(
            "country",
            "Country",
            &input.country,
            FieldCheck::Select {
                default: String::new(),
            },
        ),
        FieldDescriptor::choices("sex", "Sex", sex),
        FieldDescriptor::text("birthday", "Birthday", &input.birthday, FieldCheck::Date),
        FieldDescriptor::text(
            "comment",
            "Comment",
            &input.comment,
            FieldCheck::TextWithoutQuotes,
        ),
    ]
}
