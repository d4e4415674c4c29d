//! Pass/fail policy for a single (product, version) check

use chrono::NaiveDate;
use tracing::info;

use crate::lifecycle::error::{CheckError, EvaluateError};
use crate::lifecycle::evaluator::evaluate;
use crate::lifecycle::registry::ReleaseRegistry;
use crate::lifecycle::report;
use crate::lifecycle::types::{EolStatus, EvaluationResult};

/// Flags controlling which outcomes of a single check count as failures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckPolicy {
    /// Fail when the version does not exist in the registry
    pub fail_on_missing: bool,
    /// Fail even when the version is not EOL yet
    pub fail_on_unsupported: bool,
}

/// Non-failing outcome of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The version is not EOL and the policy lets it pass
    Passed {
        name: String,
        version: String,
        result: EvaluationResult,
    },
    /// The version is unknown to the registry and the policy tolerates that
    Missing { name: String, version: String },
}

impl CheckOutcome {
    /// Console line describing this outcome
    pub fn message(&self) -> String {
        match self {
            CheckOutcome::Passed {
                name,
                version,
                result,
            } => report::single_line(name, version, result),
            CheckOutcome::Missing { name, version } => report::missing_line(name, version),
        }
    }
}

/// Evaluate one version and apply `policy` to the classification
///
/// EOL always fails. A version that is not EOL passes unless
/// `fail_on_unsupported` is set.
pub async fn check(
    registry: &dyn ReleaseRegistry,
    name: &str,
    version: &str,
    policy: CheckPolicy,
    today: NaiveDate,
) -> Result<CheckOutcome, CheckError> {
    let result = match evaluate(registry, name, version, today).await {
        Ok(result) => result,
        Err(EvaluateError::VersionNotFound { .. }) if !policy.fail_on_missing => {
            info!("{} {} not found, tolerated by policy", name, version);
            return Ok(CheckOutcome::Missing {
                name: name.to_string(),
                version: version.to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    match result.status {
        EolStatus::NotEol if policy.fail_on_unsupported => Err(CheckError::UnsupportedRequested {
            name: name.to_string(),
            version: version.to_string(),
        }),
        EolStatus::NotEol => Ok(CheckOutcome::Passed {
            name: name.to_string(),
            version: version.to_string(),
            result,
        }),
        EolStatus::Eol => Err(CheckError::EolDetected {
            name: name.to_string(),
            version: version.to_string(),
            result,
        }),
    }
}
