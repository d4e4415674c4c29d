//! Console report lines for single checks

use crate::lifecycle::format::capitalize;
use crate::lifecycle::types::{EolStatus, EvaluationResult};

/// Line describing the classification of `name` `version`
pub fn single_line(name: &str, version: &str, result: &EvaluationResult) -> String {
    let name = capitalize(name);
    match result.status {
        EolStatus::NotEol => format!(
            "{} {} is not EOL yet. It will be EOL on {}. Support ends on {}",
            name, version, result.eol, result.support
        ),
        EolStatus::Eol => format!(
            "{} {} is EOL since {}. Support ended on: {}",
            name, version, result.eol, result.support
        ),
    }
}

/// Line for a version the registry does not list
pub fn missing_line(name: &str, version: &str) -> String {
    format!("{} {} was not found in the registry", capitalize(name), version)
}
