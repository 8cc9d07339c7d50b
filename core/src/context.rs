use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Invocation metadata handed to a handler, independent of any runtime crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct InvocationContext {
    pub request_id: String,
    /// Epoch milliseconds after which the hosting runtime kills the invocation.
    pub deadline_ms: u64,
    pub invoked_function_arn: String,
}

impl InvocationContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            ..Default::default()
        }
    }

    pub fn with_deadline_ms(mut self, deadline_ms: u64) -> Self {
        self.deadline_ms = deadline_ms;
        self
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.deadline_ms).ok()?;
        DateTime::from_timestamp_millis(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_conversion() {
        let ctx = InvocationContext::new("req-1").with_deadline_ms(1_700_000_000_000);
        let deadline = ctx.deadline().unwrap();
        assert_eq!(deadline.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_out_of_range_deadline() {
        let ctx = InvocationContext::new("req-1").with_deadline_ms(u64::MAX);
        assert!(ctx.deadline().is_none());
    }
}
