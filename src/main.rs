// src/main.rs
use anyhow::{bail, Context};
use dotenv::dotenv;
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use form_submit::common::config::apply_cli_override;
use form_submit::common::{safe_email_log, SubmitConfig};
use form_submit::form::{
    registration_form, ErrorBoard, FormOrchestrator, LogNotifier, RegistrationInput, SubmitOutcome,
};
use form_submit::services::{RequestOutcome, ReqwestTransport};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    let args: Vec<String> = env::args().skip(1).collect();
    let config = apply_cli_override(SubmitConfig::from_env()?, &args);

    let form_path = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .context("usage: form_submit [--dry-run|--send] <form.json>")?;

    // ========================================================================
    // FORM INPUT
    // ========================================================================

    let raw = tokio::fs::read_to_string(form_path)
        .await
        .with_context(|| format!("failed to read {}", form_path))?;
    let input: RegistrationInput =
        serde_json::from_str(&raw).with_context(|| format!("invalid form data in {}", form_path))?;

    info!(
        email = %safe_email_log(&input.email),
        url = %config.url,
        send_enabled = config.send_enabled,
        "Validating registration form"
    );

    // ========================================================================
    // VALIDATION AND SUBMISSION
    // ========================================================================

    let fields = registration_form(&input);
    let orchestrator = FormOrchestrator::new(ReqwestTransport::new()?, LogNotifier, config);
    let mut board = ErrorBoard::new();

    match orchestrator.submit(&fields, &mut board).await {
        SubmitOutcome::Rejected(report) => {
            for field in report.errors() {
                error!(field = %field.key, "{}", field.result.error_message());
            }
            bail!("form rejected: {} invalid field(s)", report.errors().count());
        }
        SubmitOutcome::Validated(_) => info!("Form is valid"),
        SubmitOutcome::Submitted(RequestOutcome::Success(data)) => {
            info!(response = ?data, "Submission accepted")
        }
        SubmitOutcome::Submitted(RequestOutcome::Failure) => bail!("submission failed"),
    }

    Ok(())
}
