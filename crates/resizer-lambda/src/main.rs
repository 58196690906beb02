use anyhow::Context;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use resizer_core::ResizerConfig;
use resizer_infra::init_telemetry;
use resizer_lambda::{handle_invocation, initialize_state};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = ResizerConfig::from_env().context("Failed to load configuration")?;
    init_telemetry(config.log_format, true);

    // Clients are built once here and reused across invocations.
    let state = initialize_state(config).await?;
    let state = &state;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        tracing::debug!(request_id = %event.context.request_id, "Invocation received");
        Ok::<_, Error>(handle_invocation(state, event.payload).await)
    }))
    .await
}
