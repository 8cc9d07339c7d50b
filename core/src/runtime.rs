use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::context::InvocationContext;
use crate::errors::{HandlerError, Result};
use crate::handler::TemplateHandler;

/// A unit of work invoked once per incoming request.
///
/// Handlers know nothing about the hosting runtime; adapters decode the
/// payload into `Request` and encode `Response` back for the caller.
pub trait Handler: Send + Sync + 'static {
    type Request: DeserializeOwned + Send;
    type Response: Serialize + Send;

    fn call(
        &self,
        ctx: Option<&InvocationContext>,
        request: Self::Request,
    ) -> std::result::Result<Self::Response, HandlerError>;
}

/// A dispatch loop that delivers invocations to a handler.
///
/// Implementations deliver one invocation at a time and propagate handler
/// errors verbatim to whoever is waiting on the result.
pub trait Runtime {
    async fn serve<H: Handler>(self, handler: H) -> Result<()>;
}

/// Registers the template handler with `runtime` and runs its loop.
pub async fn start<R: Runtime>(runtime: R) -> Result<()> {
    runtime.serve(TemplateHandler::new()).await
}
