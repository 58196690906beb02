//! Tracing initialization
//!
//! Log verbosity is read from `RUST_LOG`; the output format comes from
//! configuration.

use resizer_core::LogFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Info for every workspace crate (`resizer` is the CLI binary), warn for the
/// AWS SDK.
const DEFAULT_FILTER: &str = "resizer=info,resizer_cli=info,resizer_core=info,resizer_infra=info,\
resizer_lambda=info,resizer_storage=info,resizer_processing=info,aws_config=warn,aws_smithy_runtime=warn";

/// Build the filter from `RUST_LOG`, falling back to info for resizer crates.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Install the global tracing subscriber.
///
/// In Lambda mode ANSI colours and timestamps are disabled; CloudWatch adds
/// its own. Calling this more than once is harmless: later calls keep the
/// first subscriber.
pub fn init_telemetry(format: LogFormat, lambda_mode: bool) {
    let registry = tracing_subscriber::registry().with(env_filter());

    let result = match (format, lambda_mode) {
        (LogFormat::Json, true) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_ansi(false)
                    .without_time()
                    .with_target(true),
            )
            .try_init(),
        (LogFormat::Json, false) => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
        (LogFormat::Text, true) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .without_time()
                    .with_target(false),
            )
            .try_init(),
        (LogFormat::Text, false) => registry
            .with(tracing_subscriber::fmt::layer())
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    } else {
        tracing::info!(format = %format, lambda_mode, "Tracing initialized");
    }
}
