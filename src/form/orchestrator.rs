// src/form/orchestrator.rs

use std::collections::HashMap;

use tracing::{debug, info};

use super::models::{FieldDescriptor, FieldValue};
use crate::common::{FormReport, SubmitConfig, ValidationResult, Validator};
use crate::services::request::{
    Dispatcher, FormData, RequestOutcome, RequestParams, Transport,
};

// ============================================================================
// Error display
// ============================================================================

/// Where per-field error state is rendered.
pub trait ErrorDisplay {
    fn show(&mut self, key: &str, result: &ValidationResult);
    fn any_active(&self) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSlot {
    pub message: String,
    pub active: bool,
}

/// In-memory error display keyed by field.
#[derive(Debug, Default)]
pub struct ErrorBoard {
    slots: HashMap<String, ErrorSlot>,
}

impl ErrorBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, key: &str) -> Option<&ErrorSlot> {
        self.slots.get(key)
    }
}

impl ErrorDisplay for ErrorBoard {
    fn show(&mut self, key: &str, result: &ValidationResult) {
        let slot = self.slots.entry(key.to_string()).or_default();
        slot.message = result.error_message().to_string();
        slot.active = result.is_error();
    }

    fn any_active(&self) -> bool {
        self.slots.values().any(|slot| slot.active)
    }
}

// ============================================================================
// Completion notification
// ============================================================================

pub trait Notifier {
    fn open_dialog(&self);
}

/// Reports completion through the log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn open_dialog(&self) {
        info!("Form submitted, confirmation dialog opened");
    }
}

// ============================================================================
// Validation and submission
// ============================================================================

/// Runs every field; never stops at the first failure.
pub struct FormValidator;

impl Validator<[FieldDescriptor]> for FormValidator {
    fn validate(&self, data: &[FieldDescriptor]) -> FormReport {
        let mut report = FormReport::new();
        for field in data {
            report.push(&field.key, field.validate());
        }
        report
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// At least one field failed; nothing was sent.
    Rejected(FormReport),
    /// All fields passed but sending is disabled.
    Validated(FormReport),
    Submitted(RequestOutcome),
}

/// Text fields are sent as-is; choice groups contribute each checked value.
pub fn build_form_data(fields: &[FieldDescriptor]) -> FormData {
    let mut form = FormData::new();
    for field in fields {
        match &field.value {
            FieldValue::Text(text) => form.append(&field.key, text),
            FieldValue::Choices(choices) => choices
                .iter()
                .filter(|c| c.checked)
                .for_each(|c| form.append(&field.key, &c.value)),
        }
    }
    form
}

pub struct FormOrchestrator<T: Transport, N: Notifier> {
    dispatcher: Dispatcher<T>,
    notifier: N,
    config: SubmitConfig,
}

impl<T: Transport, N: Notifier> FormOrchestrator<T, N> {
    pub fn new(transport: T, notifier: N, config: SubmitConfig) -> Self {
        let dispatcher = Dispatcher::new(transport).with_success_status(config.success_status);
        Self {
            dispatcher,
            notifier,
            config,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.dispatcher
    }

    pub async fn submit<D: ErrorDisplay>(
        &self,
        fields: &[FieldDescriptor],
        display: &mut D,
    ) -> SubmitOutcome {
        let report = FormValidator.validate(fields);
        for field in &report.fields {
            display.show(&field.key, &field.result);
        }

        if display.any_active() {
            info!(errors = %report.summary(), "Form rejected");
            return SubmitOutcome::Rejected(report);
        }

        if !self.config.send_enabled {
            info!("Form valid, sending disabled");
            return SubmitOutcome::Validated(report);
        }

        let form = build_form_data(fields);
        debug!(fields = form.entries().len(), url = %self.config.url, "Submitting form");

        let mut params = RequestParams::new(self.config.url.clone())
            .with_form(form)
            .with_data_type(self.config.data_type);
        if let Some(content_type) = &self.config.content_type {
            params = params.with_content_type(content_type.clone());
        }

        let outcome = self.dispatcher.send_form(params).await;
        self.notifier.open_dialog();

        SubmitOutcome::Submitted(outcome)
    }
}
