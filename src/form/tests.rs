//! Tests for form module
//!
//! These tests verify submit-time behaviour including:
//! - Every field is validated and rendered, even after a failure
//! - Submission is gated on the error display
//! - Payload shape and completion notification

#[cfg(test)]
mod tests {
    use super::super::orchestrator::build_form_data;
    use super::super::*;
    use crate::common::{SubmitConfig, Validator};
    use crate::services::mock::RecordingTransport;
    use crate::services::request::{RequestBody, RequestOutcome, ResponseData};
    use crate::validators::Choice;
    use serde_json::json;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingNotifier {
        opened: Cell<usize>,
    }

    impl Notifier for &CountingNotifier {
        fn open_dialog(&self) {
            self.opened.set(self.opened.get() + 1);
        }
    }

    fn valid_input() -> RegistrationInput {
        RegistrationInput {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            birthday: "12/05/1990".to_string(),
            country: "ua".to_string(),
            email: "john@example.com".to_string(),
            password: "secret123".to_string(),
            address: "Main street 1".to_string(),
            sex: Some("male".to_string()),
            comment: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_registration_form_layout() {
        let fields = registration_form(&valid_input());
        let keys: Vec<&str> = fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "first_name",
                "last_name",
                "email",
                "password",
                "address",
                "country",
                "sex",
                "birthday",
                "comment"
            ]
        );
        assert_eq!(
            fields[6].value,
            FieldValue::Choices(vec![Choice::new("male", true), Choice::new("female", false)])
        );
    }

    #[test]
    fn test_form_validator_reports_every_field() {
        let fields = registration_form(&RegistrationInput::default());
        let report = FormValidator.validate(&fields);

        assert_eq!(report.fields.len(), fields.len());
        // comment is the only field an empty form passes
        let failing: Vec<&str> = report.errors().map(|f| f.key.as_str()).collect();
        assert_eq!(failing.len(), fields.len() - 1);
        assert!(!failing.contains(&"comment"));
        assert_eq!(
            report.fields[0].result.error_message(),
            "Field First name is Empty"
        );
    }

    #[test]
    fn test_field_checks_use_label_in_messages() {
        let field = FieldDescriptor::text("addr", "Address", "abc", FieldCheck::MinLength { min: 6 });
        assert_eq!(
            field.validate().error_message(),
            "Field Address must have length of at least 6 symbols"
        );

        let field = FieldDescriptor::text("phone", "Phone", "12", FieldCheck::Phone);
        assert_eq!(
            field.validate().error_message(),
            "Field Phone has wrong phone number"
        );
    }

    #[test]
    fn test_field_descriptor_deserializes_from_json() {
        let field: FieldDescriptor = serde_json::from_value(json!({
            "key": "country",
            "label": "Country",
            "value": "",
            "check": { "type": "select", "default": "" }
        }))
        .unwrap();

        assert!(field.validate().is_error());
    }

    #[test]
    fn test_build_form_data_includes_checked_choices_only() {
        let fields = registration_form(&valid_input());
        let form = build_form_data(&fields);

        assert_eq!(form.get("sex"), Some("male"));
        assert_eq!(form.get("email"), Some("john@example.com"));
        assert_eq!(form.entries().iter().filter(|(k, _)| k == "sex").count(), 1);
    }

    #[test]
    fn test_error_board_toggles_slots() {
        let mut board = ErrorBoard::new();
        board.show("email", &crate::common::ValidationResult::fail("bad"));
        assert!(board.any_active());
        assert_eq!(board.slot("email").unwrap().message, "bad");

        board.show("email", &crate::common::ValidationResult::ok());
        assert!(!board.any_active());
        assert_eq!(board.slot("email").unwrap().message, "");
        assert!(board.slot("missing").is_none());
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let notifier = CountingNotifier::default();
        let orchestrator =
            FormOrchestrator::new(RecordingTransport::new(), &notifier, SubmitConfig::default());
        let mut input = valid_input();
        input.email = "not-an-email".to_string();
        input.comment = "O'Brien".to_string();
        let mut board = ErrorBoard::new();

        let outcome = orchestrator.submit(&registration_form(&input), &mut board).await;

        match outcome {
            SubmitOutcome::Rejected(report) => assert_eq!(report.errors().count(), 2),
            other => panic!("expected rejection, got {:?}", other),
        }
        assert!(board.slot("email").unwrap().active);
        assert!(board.slot("comment").unwrap().active);
        assert!(!board.slot("first_name").unwrap().active);
        assert!(orchestrator.dispatcher().transport().requests().is_empty());
        assert_eq!(notifier.opened.get(), 0);
    }

    #[tokio::test]
    async fn test_valid_form_is_sent_and_dialog_opened() {
        let notifier = CountingNotifier::default();
        let orchestrator = FormOrchestrator::new(
            RecordingTransport::new().respond(200, r#"{"id":7}"#),
            &notifier,
            SubmitConfig::default(),
        );
        let mut board = ErrorBoard::new();

        let outcome = orchestrator
            .submit(&registration_form(&valid_input()), &mut board)
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Submitted(RequestOutcome::Success(ResponseData::Json(Some(
                json!({"id": 7})
            ))))
        );
        let requests = orchestrator.dispatcher().transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://test");
        match &requests[0].body {
            RequestBody::Form(form) => assert_eq!(form.get("first_name"), Some("John")),
            other => panic!("expected form body, got {:?}", other),
        }
        assert_eq!(notifier.opened.get(), 1);
    }

    #[tokio::test]
    async fn test_dialog_opens_after_failed_exchange() {
        let notifier = CountingNotifier::default();
        let orchestrator = FormOrchestrator::new(
            RecordingTransport::new().respond(500, ""),
            &notifier,
            SubmitConfig::default(),
        );

        let outcome = orchestrator
            .submit(&registration_form(&valid_input()), &mut ErrorBoard::new())
            .await;

        assert_eq!(outcome, SubmitOutcome::Submitted(RequestOutcome::Failure));
        assert_eq!(notifier.opened.get(), 1);
    }

    #[tokio::test]
    async fn test_stale_active_slot_blocks_submission() {
        let notifier = CountingNotifier::default();
        let orchestrator =
            FormOrchestrator::new(RecordingTransport::new(), &notifier, SubmitConfig::default());
        let mut board = ErrorBoard::new();
        board.show("captcha", &crate::common::ValidationResult::fail("solve it"));

        let outcome = orchestrator
            .submit(&registration_form(&valid_input()), &mut board)
            .await;

        assert!(matches!(outcome, SubmitOutcome::Rejected(ref r) if r.is_valid()));
        assert!(orchestrator.dispatcher().transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_dry_run_validates_without_sending() {
        let notifier = CountingNotifier::default();
        let config = SubmitConfig {
            send_enabled: false,
            ..SubmitConfig::default()
        };
        let orchestrator = FormOrchestrator::new(RecordingTransport::new(), &notifier, config);

        let outcome = orchestrator
            .submit(&registration_form(&valid_input()), &mut ErrorBoard::new())
            .await;

        assert!(matches!(outcome, SubmitOutcome::Validated(ref r) if r.is_valid()));
        assert!(orchestrator.dispatcher().transport().requests().is_empty());
        assert_eq!(notifier.opened.get(), 0);
    }
}
