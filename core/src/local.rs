use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::{debug, error, info};

use crate::context::InvocationContext;
use crate::errors::{Result, RuntimeError};
use crate::runtime::{Handler, Runtime};

/// Outcome of one local invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub request_id: String,
    /// Encoded response, or the error message the hosted runtime would report.
    pub result: std::result::Result<Value, String>,
}

/// Shared, append-only record of completed invocations.
pub type InvocationLog = Arc<Mutex<Vec<Invocation>>>;

/// In-process runtime fed from a list of JSON events.
///
/// Stands in for the hosted runtime during local development and tests.
pub struct LocalRuntime {
    events: Vec<(InvocationContext, Value)>,
    log: InvocationLog,
}

impl LocalRuntime {
    pub fn new(events: Vec<Value>) -> Self {
        let events = events
            .into_iter()
            .enumerate()
            .map(|(i, event)| (InvocationContext::new(format!("local-{}", i + 1)), event))
            .collect();

        Self {
            events,
            log: InvocationLog::default(),
        }
    }

    pub fn with_contexts(events: Vec<(InvocationContext, Value)>) -> Self {
        Self {
            events,
            log: InvocationLog::default(),
        }
    }

    /// Handle to the invocation record, readable after `serve` returns.
    pub fn log(&self) -> InvocationLog {
        Arc::clone(&self.log)
    }

    /// Decodes `event`, runs the handler, and encodes its response.
    ///
    /// A payload that does not decode never reaches the handler.
    pub fn invoke<H: Handler>(
        handler: &H,
        ctx: Option<&InvocationContext>,
        event: Value,
    ) -> Result<Value> {
        let request: H::Request = serde_json::from_value(event).map_err(RuntimeError::Decode)?;
        let response = handler.call(ctx, request)?;
        serde_json::to_value(response).map_err(RuntimeError::Encode)
    }
}

impl Runtime for LocalRuntime {
    async fn serve<H: Handler>(self, handler: H) -> Result<()> {
        info!("Dispatching {} local invocation(s)", self.events.len());

        for (ctx, event) in self.events {
            debug!(request_id = %ctx.request_id, "Invoking handler");

            let result = match Self::invoke(&handler, Some(&ctx), event) {
                Ok(value) => Ok(value),
                Err(e) => {
                    error!(request_id = %ctx.request_id, "Invocation failed: {}", e);
                    Err(e.to_string())
                }
            };

            let mut log = self.log.lock().map_err(|e| RuntimeError::Dispatch {
                reason: e.to_string(),
            })?;
            log.push(Invocation {
                request_id: ctx.request_id,
                result,
            });
        }

        Ok(())
    }
}
