use std::sync::Arc;

use lambda_core::errors::{Result, RuntimeError};
use lambda_core::{Handler, InvocationContext, Runtime};
use lambda_runtime::{Context, Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::{debug, error, info};

/// Adapter onto the hosted AWS Lambda runtime API.
pub struct LambdaRuntime;

impl Runtime for LambdaRuntime {
    async fn serve<H: Handler>(self, handler: H) -> Result<()> {
        info!("Registering handler with the Lambda runtime API");

        let handler = Arc::new(handler);
        lambda_runtime::run(service_fn(move |event: LambdaEvent<H::Request>| {
            let handler = Arc::clone(&handler);
            async move { invoke(handler.as_ref(), event) }
        }))
        .await
        .map_err(|e| RuntimeError::Dispatch {
            reason: e.to_string(),
        })
    }
}

pub fn invocation_context(context: &Context) -> InvocationContext {
    InvocationContext {
        request_id: context.request_id.clone(),
        deadline_ms: context.deadline,
        invoked_function_arn: context.invoked_function_arn.clone(),
    }
}

/// Runs one invocation; handler errors go back to the runtime untouched.
pub fn invoke<H: Handler>(
    handler: &H,
    event: LambdaEvent<H::Request>,
) -> std::result::Result<Value, Error> {
    let ctx = invocation_context(&event.context);
    debug!(request_id = %ctx.request_id, "Invoking handler");

    let response = handler.call(Some(&ctx), event.payload).map_err(|e| {
        error!(request_id = %ctx.request_id, "Invocation failed: {}", e);
        e
    })?;

    Ok(serde_json::to_value(response).map_err(RuntimeError::Encode)?)
}
