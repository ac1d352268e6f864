//! Tracing bootstrap for the binary.
//!
//! Events go to stderr so that the menu output on stdout stays clean.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::errors::AppError;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Installs the global subscriber with `level` as the filter directive
/// (e.g. `info`, `debug`, `menu_rolodex=trace`).
///
/// Fails when the directive does not parse or a subscriber is already set.
pub fn init_tracing(level: &str) -> Result<(), AppError> {
    let env_filter = build_filter(level)?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn build_filter(level: &str) -> Result<EnvFilter, AppError> {
    let level = level.trim();
    let directive = if level.is_empty() {
        DEFAULT_LOG_LEVEL
    } else {
        level
    };

    EnvFilter::try_new(directive).map_err(|e| AppError::Logging(e.to_string()))
}
