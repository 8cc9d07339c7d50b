pub mod config;
pub mod context;
pub mod errors;
pub mod handler;
pub mod local;
pub mod request;
pub mod runtime;
pub mod telemetry;

pub use context::InvocationContext;
pub use errors::{HandlerError, Result, RuntimeError};
pub use handler::{LAMBDA_NAME, TemplateHandler, handle};
pub use request::Request;
pub use runtime::{Handler, Runtime, start};
