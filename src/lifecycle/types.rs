//! Common types for release lifecycle records

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Label shown when a release line has no separate support window
pub const NO_SUPPORT_LABEL: &str = "No Support";

/// Label shown when the support window cannot be determined
pub const UNKNOWN_SUPPORT_LABEL: &str = "Unknown";

/// One release line of a product as published by the registry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRecord {
    /// Release-line identifier (e.g. "20", "3.12")
    pub cycle: String,
    #[serde(default)]
    pub release_date: Option<String>,
    /// End-of-life date in `YYYY-MM-DD` form
    pub eol: String,
    #[serde(default)]
    pub support: Support,
    #[serde(default)]
    pub latest: Option<String>,
    #[serde(default)]
    pub latest_release_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub lts: bool,
}

impl ReleaseRecord {
    /// Creates a record with only the fields the evaluator consults
    pub fn new(cycle: &str, eol: &str, support: Support) -> Self {
        Self {
            cycle: cycle.to_string(),
            release_date: None,
            eol: eol.to_string(),
            support,
            latest: None,
            latest_release_date: None,
            lts: false,
        }
    }
}

/// Active support window of a release line
///
/// The registry publishes this field as a date string, a boolean, or not at all.
/// It is resolved once while decoding and never inspected as raw JSON afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Support {
    /// `false`: no separate support window
    NoSupport,
    /// Active support ends on the given date
    Until(String),
    /// `true`, absent, or any other shape
    #[default]
    Unknown,
}

impl Support {
    /// Classifies a raw registry value
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(date) => Support::Until(date.clone()),
            Value::Bool(false) => Support::NoSupport,
            _ => Support::Unknown,
        }
    }

    /// Human-readable form used in reports
    pub fn label(&self) -> &str {
        match self {
            Support::NoSupport => NO_SUPPORT_LABEL,
            Support::Until(date) => date.as_str(),
            Support::Unknown => UNKNOWN_SUPPORT_LABEL,
        }
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Support {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Support::from_value(&value))
    }
}

/// Reads a boolean that the registry sometimes replaces with a date string
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::String(date) => !date.is_empty(),
        _ => false,
    };
    Ok(flag)
}

/// EOL classification of a release line relative to a date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EolStatus {
    /// The EOL date has been reached (the EOL date itself counts)
    Eol,
    /// The EOL date is still in the future
    NotEol,
}

/// Outcome of evaluating one (product, cycle) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub status: EolStatus,
    /// EOL date of the matched record
    pub eol: String,
    /// Resolved support window of the matched record
    pub support: Support,
}

impl EvaluationResult {
    pub fn is_eol(&self) -> bool {
        self.status == EolStatus::Eol
    }
}
