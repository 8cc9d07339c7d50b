use crate::context::InvocationContext;
use crate::errors::HandlerError;
use crate::request::Request;
use crate::runtime::Handler;

/// Display name of this function instance.
///
/// Baked in at build time. Instantiation tooling substitutes it by exporting
/// `LAMBDA_NAME` to the compiler; otherwise the placeholder token is kept.
pub const LAMBDA_NAME: &str = match option_env!("LAMBDA_NAME") {
    Some(name) => name,
    None => "LAMBDA_NAME",
};

/// Formats the canned response for `request`.
///
/// The context is accepted for parity with the hosting runtime's function
/// shape and is never read. This never fails; the error type exists for
/// instantiations that replace the body.
pub fn handle(_ctx: Option<&InvocationContext>, request: Request) -> Result<String, HandlerError> {
    Ok(format!(
        "This is the lambda {}! request.Input={}",
        LAMBDA_NAME, request.input
    ))
}

/// [`handle`] packaged for runtime adapters.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateHandler;

impl TemplateHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Handler for TemplateHandler {
    type Request = Request;
    type Response = String;

    fn call(
        &self,
        ctx: Option<&InvocationContext>,
        request: Self::Request,
    ) -> Result<Self::Response, HandlerError> {
        handle(ctx, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(input: &str) -> String {
        format!("This is the lambda {LAMBDA_NAME}! request.Input={input}")
    }

    #[test]
    fn test_handle_populated_request() {
        let msg = handle(None, Request::new("HelloWorld!")).unwrap();
        assert_eq!(msg, expected("HelloWorld!"));
    }

    #[test]
    fn test_handle_empty_input() {
        let msg = handle(None, Request::new("")).unwrap();
        assert_eq!(msg, format!("This is the lambda {LAMBDA_NAME}! request.Input="));
    }

    #[test]
    fn test_formatting_characters_are_verbatim() {
        for input in ["100%", "%s %d", "{}", "{input}", "line1\nline2", "tab\there"] {
            let msg = handle(None, Request::new(input)).unwrap();
            assert_eq!(msg, expected(input));
        }
    }

    #[test]
    fn test_context_does_not_affect_result() {
        let ctx = InvocationContext::new("abc-123").with_deadline_ms(42);
        let with_ctx = handle(Some(&ctx), Request::new("same")).unwrap();
        let without_ctx = handle(None, Request::new("same")).unwrap();
        assert_eq!(with_ctx, without_ctx);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = handle(None, Request::new("again")).unwrap();
        for _ in 0..10 {
            assert_eq!(handle(None, Request::new("again")).unwrap(), first);
        }
    }

    #[test]
    fn test_template_handler_delegates() {
        let handler = TemplateHandler::new();
        let msg = handler.call(None, Request::new("via trait")).unwrap();
        assert_eq!(msg, expected("via trait"));
    }
}
