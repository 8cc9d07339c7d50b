use serde::{Deserialize, Serialize};

/// Payload delivered by the hosting runtime, `{"input": "<string>"}`.
///
/// A missing `input` key decodes to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Request {
    #[serde(default)]
    pub input: String,
}

impl Request {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
