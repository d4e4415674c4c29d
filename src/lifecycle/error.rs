use thiserror::Error;

use crate::lifecycle::format::capitalize;
use crate::lifecycle::types::EvaluationResult;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Server returned status {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum EvaluateError {
    /// The registry could not be queried; the cause is kept only for display
    #[error("lookup failed for {name}: {reason}")]
    LookupFailed { name: String, reason: String },

    #[error("Version not found: {name} {cycle}")]
    VersionNotFound { name: String, cycle: String },

    #[error("{0} must not be empty")]
    EmptyArgument(&'static str),
}

impl EvaluateError {
    pub(crate) fn lookup_failed(name: &str, source: RegistryError) -> Self {
        EvaluateError::LookupFailed {
            name: name.to_string(),
            reason: source.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),

    #[error("{} {version} is not supported anymore", capitalize(.name))]
    UnsupportedRequested { name: String, version: String },

    #[error("EOL")]
    EolDetected {
        name: String,
        version: String,
        result: EvaluationResult,
    },
}

impl CheckError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            CheckError::Evaluate(_) => 1,
            CheckError::EolDetected { .. } => 2,
            CheckError::UnsupportedRequested { .. } => 3,
        }
    }
}
