use thiserror::Error;

/// Failures a handler may report back to the hosting runtime.
///
/// The template handler never produces one; instantiations replace the
/// handler body and populate these for their own failure cases.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Downstream call failed")]
    Downstream {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Failed to decode invocation payload: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode handler response: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Dispatch loop failed: {reason}")]
    Dispatch { reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Failed to load configuration from {origin}: {error}")]
    LoadFailed {
        origin: String,
        #[source]
        error: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

impl RuntimeError {
    /// Whether the failure happened before the handler ran.
    pub fn is_decode(&self) -> bool {
        matches!(self, RuntimeError::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_passes_through_verbatim() {
        let err = RuntimeError::from(HandlerError::InvalidInput {
            reason: "input must not be blank".to_string(),
        });

        assert_eq!(
            err.to_string(),
            "Handler error: Invalid input: input must not be blank"
        );
        assert!(!err.is_decode());
    }

    #[test]
    fn test_downstream_keeps_source() {
        let io = std::io::Error::other("connection reset");
        let err = HandlerError::Downstream {
            source: Box::new(io),
        };

        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("connection reset"));
    }
}
