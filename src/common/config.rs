// src/common/config.rs
//! Submission settings loaded from the environment

use std::env;

use tracing::info;

use super::error::ConfigError;
use crate::services::request::{DataType, STATUS_SUCCESS};

#[derive(Debug, Clone)]
pub struct SubmitConfig {
    pub url: String,
    pub success_status: u16,
    pub data_type: DataType,
    pub content_type: Option<String>,
    /// When false the form is validated but nothing is sent.
    pub send_enabled: bool,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            url: "http://test".to_string(),
            success_status: STATUS_SUCCESS,
            data_type: DataType::Json,
            content_type: None,
            send_enabled: true,
        }
    }
}

impl SubmitConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = env::var("SUBMIT_URL") {
            if !url.trim().is_empty() {
                config.url = url.trim().to_string();
            }
        }

        if let Ok(status) = env::var("SUBMIT_SUCCESS_STATUS") {
            config.success_status =
                status
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: "SUBMIT_SUCCESS_STATUS".to_string(),
                        value: status.clone(),
                    })?;
        }

        if let Ok(data_type) = env::var("SUBMIT_DATA_TYPE") {
            config.data_type = DataType::parse(&data_type);
        }

        config.content_type = env::var("SUBMIT_CONTENT_TYPE")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Ok(config)
    }
}

/// CLI argument parsing for dry-run mode
pub fn parse_send_args<I: IntoIterator<Item = String>>(args: I) -> Option<bool> {
    let mut result = None;
    for arg in args {
        match arg.as_str() {
            "--dry-run" => result = Some(false),
            "--send" => result = Some(true),
            _ => {}
        }
    }
    result
}

/// Override sending from CLI args
pub fn apply_cli_override(mut config: SubmitConfig, args: &[String]) -> SubmitConfig {
    if let Some(send) = parse_send_args(args.iter().cloned()) {
        info!(send_enabled = send, "CLI override");
        config.send_enabled = send;
    }

    config
}
