//! Per-invocation handler
//!
//! Parses the payload, binds a store to the resolved region, runs the resize
//! service and folds the outcome into the response envelope. Errors never
//! escape: every failure becomes a 500 response.

use crate::error::ResizeError;
use crate::event::parse_value;
use crate::state::AppState;
use resizer_core::{ErrorMetadata, LogLevel, Summary};
use resizer_infra::InvocationResponse;
use serde_json::Value;

pub const MESSAGE_SKIPPED: &str = "skipped";
pub const MESSAGE_COMPLETED: &str = "image resize completed";

/// Handle one trigger payload.
#[tracing::instrument(skip(state, payload))]
pub async fn handle_invocation(state: &AppState, payload: Value) -> InvocationResponse {
    respond(process(state, payload).await)
}

async fn process(state: &AppState, payload: Value) -> Result<Summary, ResizeError> {
    let object = parse_value(payload, state.fallback_region())?;
    tracing::info!(
        bucket = %object.bucket,
        key = %object.key,
        region = %object.region,
        "Processing object"
    );

    let store = state.stores.store_for_region(&object.region)?;
    state.service.handle(store.as_ref(), &object).await
}

/// Convert an outcome into the response envelope, logging failures.
pub fn respond(outcome: Result<Summary, ResizeError>) -> InvocationResponse {
    match outcome {
        Ok(summary) => {
            tracing::info!(?summary, "Invocation finished");
            if summary.is_skipped() {
                InvocationResponse::success(MESSAGE_SKIPPED)
            } else {
                InvocationResponse::success(MESSAGE_COMPLETED)
            }
        }
        Err(err) => {
            match err.log_level() {
                LogLevel::Warn => tracing::warn!(
                    error = %err,
                    error_code = err.error_code(),
                    retryable = err.is_retryable(),
                    "Invocation failed"
                ),
                LogLevel::Error => tracing::error!(
                    error = ?err,
                    error_code = err.error_code(),
                    retryable = err.is_retryable(),
                    "Invocation failed"
                ),
            }
            InvocationResponse::failure(&format!("error: {}", err))
        }
    }
}
