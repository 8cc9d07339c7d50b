use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use crate::errors::ConfigError;

pub const RUNTIME_API_VAR: &str = "AWS_LAMBDA_RUNTIME_API";
pub const LOCAL_EVENTS_VAR: &str = "LOCAL_EVENTS_FILE";

/// Where the process gets its invocations from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Register with the hosted runtime API at this address.
    Lambda { runtime_api: String },
    /// Replay events locally, from a file when one is given.
    Local { events_file: Option<PathBuf> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub mode: RunMode,
}

impl RunnerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::from_vars(
            std::env::var(RUNTIME_API_VAR).ok(),
            std::env::var(LOCAL_EVENTS_VAR).ok(),
        ))
    }

    pub fn from_vars(runtime_api: Option<String>, events_file: Option<String>) -> Self {
        let mode = match runtime_api {
            Some(runtime_api) if !runtime_api.is_empty() => RunMode::Lambda { runtime_api },
            _ => RunMode::Local {
                events_file: events_file.filter(|p| !p.is_empty()).map(PathBuf::from),
            },
        };
        Self { mode }
    }

    pub fn is_lambda(&self) -> bool {
        matches!(self.mode, RunMode::Lambda { .. })
    }

    /// Events to replay in local mode.
    ///
    /// Without a file this is the single sample event `{"input": "HelloWorld!"}`.
    pub fn local_events(&self) -> anyhow::Result<Vec<Value>> {
        match &self.mode {
            RunMode::Local {
                events_file: Some(path),
            } => Ok(load_events(path)?),
            RunMode::Local { events_file: None } => Ok(vec![json!({"input": "HelloWorld!"})]),
            RunMode::Lambda { .. } => Err(ConfigError::Invalid {
                message: "local events are not available in Lambda mode".to_string(),
            }
            .into()),
        }
    }
}

/// Reads a YAML or JSON list of events. A single event is accepted as a list of one.
pub fn load_events(path: &Path) -> Result<Vec<Value>, ConfigError> {
    let load_failed = |error: Box<dyn std::error::Error + Send + Sync>| ConfigError::LoadFailed {
        origin: path.display().to_string(),
        error,
    };

    let content = std::fs::read_to_string(path).map_err(|e| load_failed(Box::new(e)))?;
    let value: Value = serde_yaml::from_str(&content).map_err(|e| load_failed(Box::new(e)))?;

    match value {
        Value::Array(events) => Ok(events),
        Value::Object(_) => Ok(vec![value]),
        other => Err(ConfigError::Invalid {
            message: format!("expected a list of events, found {other}"),
        }),
    }
}
