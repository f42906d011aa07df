//! Error types for scale-pct

use thiserror::Error;

/// Main error type for scale-pct
#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Resource not found: {kind}/{name}")]
    NotFound { kind: String, name: String },

    #[error("no context is currently set, use \"kubectl config use-context <context>\" to select one")]
    NoContext,

    #[error("either one or no arguments are allowed, got {0}")]
    TooManyArguments(usize),

    #[error("percentage (--pct) must be in the [-100, 100] range, got {0}")]
    PercentageOutOfRange(i32),

    #[error("Cannot scale resource type '{0}'. Supported types: deployment, statefulset, replicaset")]
    UnknownResourceType(String),

    #[error("failed to scale {kind}/{name}: {source}")]
    ScaleFailed {
        kind: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("{failed} of {total} targets failed to scale")]
    PartialFailure { failed: usize, total: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<serde_json::Error> for ScaleError {
    fn from(e: serde_json::Error) -> Self {
        ScaleError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for ScaleError {
    fn from(e: serde_yaml::Error) -> Self {
        ScaleError::Serialization(e.to_string())
    }
}

/// Result type alias for scale-pct
pub type Result<T> = std::result::Result<T, ScaleError>;
