#![warn(missing_docs)]
//! # gradebook-status-app
//!
//! ## Purpose
//! Hosts the submission status resolver for command-line and embedding use.
//!
//! ## Responsibilities
//! - Load runtime configuration from environment variables.
//! - Apply the global post-policy override to decoded inputs.
//! - Decode JSON input, resolve indicators and render them as text or JSON.
//! - Install the tracing subscriber for the binary.
//!
//! ## Data flow
//! Raw JSON -> [`StatusInput`] -> [`apply_config`] -> resolver ->
//! [`render_plain`] / [`render_json`].
//!
//! ## Ownership and lifetimes
//! Inputs are decoded into owned values and dropped after each resolution; the
//! app keeps no state between calls.
//!
//! ## Error model
//! Decode, render and I/O failures are wrapped in [`AppError`]. Resolution
//! itself cannot fail.

use std::io::Read;
use std::path::Path;

use gradebook_status_core::{CoreError, StatusInput};
use gradebook_status_ui::{IndicatorList, resolve_indicators};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Build-time application version loaded from root `VERSION` file.
pub const APP_VERSION: &str = env!("GRADEBOOK_STATUS_VERSION");

/// Env var forcing the post-policies toggle on or off.
pub const POST_POLICIES_ENV: &str = "GRADEBOOK_STATUS_POST_POLICIES";

/// Env var holding the tracing filter directive.
pub const LOG_FILTER_ENV: &str = "GRADEBOOK_STATUS_LOG";

/// Filter used when [`LOG_FILTER_ENV`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Returns the app version sourced from root `VERSION`.
pub fn app_version() -> &'static str {
    APP_VERSION
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Forced post-policies toggle; `None` keeps the per-input value.
    pub post_policies_override: Option<bool>,
    /// Tracing `EnvFilter` directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            post_policies_override: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// Semantics for [`POST_POLICIES_ENV`]:
    /// - Unset => no override.
    /// - `1`, `true`, `on` (case-insensitive) => forced on.
    /// - `0`, `false`, `off` (case-insensitive) => forced off.
    /// - Any other value => no override.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let post_policies_override = lookup(POST_POLICIES_ENV).and_then(|raw| parse_toggle(&raw));
        let log_filter = lookup(LOG_FILTER_ENV)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            post_policies_override,
            log_filter,
        }
    }
}

fn parse_toggle(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" => Some(true),
        "0" | "false" | "off" => Some(false),
        _ => None,
    }
}

/// Returns `input` with the configured post-policy override applied.
pub fn apply_config(mut input: StatusInput, config: &AppConfig) -> StatusInput {
    if let Some(enabled) = config.post_policies_override {
        input.post_policies_enabled = enabled;
    }
    input
}

/// Decodes one JSON input and resolves its indicators.
///
/// # Errors
/// Returns [`AppError::Core`] when the input cannot be decoded.
pub fn resolve_from_json(raw: &str, config: &AppConfig) -> Result<IndicatorList, AppError> {
    let input = apply_config(StatusInput::from_json_str(raw)?, config);
    debug!(
        assignment_id = %input.submission.assignment_id,
        post_policies_enabled = input.post_policies_enabled,
        "decoded status input"
    );
    Ok(resolve_indicators(&input))
}

/// Reads raw input from `path`, or from stdin when `path` is `None`.
///
/// # Errors
/// Returns [`AppError::Io`] when reading fails.
pub fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "reading status input file");
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

/// Renders indicators one per line, for terminals and logs.
pub fn render_plain(indicators: &IndicatorList) -> String {
    if indicators.is_empty() {
        return "No status indicators".to_string();
    }

    indicators
        .iter()
        .map(|indicator| format!("[{}] {}", indicator.kind(), indicator.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders indicators as a pretty JSON array of `{kind, label}` descriptors.
///
/// # Errors
/// Returns [`AppError::Render`] when serialization fails.
pub fn render_json(indicators: &IndicatorList) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(indicators)?)
}

/// Installs a stderr fmt subscriber filtered by `config.log_filter`.
///
/// Invalid directives fall back to [`DEFAULT_LOG_FILTER`]. Later calls are
/// no-ops.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

/// App integration error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input decoding error.
    #[error("input error: {0}")]
    Core(#[from] CoreError),
    /// Output rendering error.
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),
    /// Input read error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    //! Unit tests for toggle parsing.

    use super::*;

    #[test]
    fn toggle_parsing_accepts_common_spellings() {
        assert_eq!(parse_toggle(" TRUE "), Some(true));
        assert_eq!(parse_toggle("on"), Some(true));
        assert_eq!(parse_toggle("0"), Some(false));
        assert_eq!(parse_toggle("Off"), Some(false));
        assert_eq!(parse_toggle("maybe"), None);
    }
}
