mod lambda;

use anyhow::Context;
use lambda_core::config::RunnerConfig;
use lambda_core::local::LocalRuntime;
use lambda_core::start;
use lambda_core::telemetry::init_tracing;
use lambda_runtime::Error;
use serde_json::json;
use tracing::info;

use crate::lambda::LambdaRuntime;

/// Entry point for the function.
///
/// Inside AWS Lambda the handler is registered with the runtime API and this
/// blocks forever. Anywhere else the configured events are replayed locally
/// and each result is printed as one JSON line.
#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = RunnerConfig::from_env()?;

    if config.is_lambda() {
        info!("Running in AWS Lambda environment");
        start(LambdaRuntime).await?;
        return Ok(());
    }

    info!("Running in local development mode");
    let events = config
        .local_events()
        .context("Failed to load local events")?;

    let runtime = LocalRuntime::new(events);
    let log = runtime.log();
    start(runtime).await?;

    let log = log
        .lock()
        .map_err(|e| format!("Invocation log poisoned: {}", e))?;
    for invocation in log.iter() {
        let line = match &invocation.result {
            Ok(response) => json!({"request_id": invocation.request_id, "response": response}),
            Err(error) => json!({"request_id": invocation.request_id, "error": error}),
        };
        println!("{}", line);
    }

    info!("Local processing completed successfully");
    Ok(())
}
