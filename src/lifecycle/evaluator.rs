//! EOL determination for a single release line

use chrono::NaiveDate;
use tracing::debug;

use crate::lifecycle::error::EvaluateError;
use crate::lifecycle::registry::ReleaseRegistry;
use crate::lifecycle::types::{EolStatus, EvaluationResult, ReleaseRecord};

/// Date format used by the registry. Zero-padded, so string order is date order.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current local calendar date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Formats a date the same way the registry does
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Classifies an EOL date against `today`, both in `YYYY-MM-DD` form
///
/// A release line reaches EOL on its EOL date, so equality counts as EOL.
pub fn classify(eol: &str, today: &str) -> EolStatus {
    if eol > today {
        EolStatus::NotEol
    } else {
        EolStatus::Eol
    }
}

/// Returns the first record whose cycle equals `cycle` exactly
pub fn find_release<'a>(records: &'a [ReleaseRecord], cycle: &str) -> Option<&'a ReleaseRecord> {
    records.iter().find(|record| record.cycle == cycle)
}

/// Evaluate whether `cycle` of product `name` is EOL on `today`
pub async fn evaluate(
    registry: &dyn ReleaseRegistry,
    name: &str,
    cycle: &str,
    today: NaiveDate,
) -> Result<EvaluationResult, EvaluateError> {
    if name.trim().is_empty() {
        return Err(EvaluateError::EmptyArgument("name"));
    }
    if cycle.trim().is_empty() {
        return Err(EvaluateError::EmptyArgument("version"));
    }

    let records = registry
        .fetch_releases(name)
        .await
        .map_err(|e| EvaluateError::lookup_failed(name, e))?;

    let record = find_release(&records, cycle).ok_or_else(|| EvaluateError::VersionNotFound {
        name: name.to_string(),
        cycle: cycle.to_string(),
    })?;

    let today = format_date(today);
    let status = classify(&record.eol, &today);
    debug!(
        "{} {}: eol={} today={} status={:?}",
        name, cycle, record.eol, today, status
    );

    Ok(EvaluationResult {
        status,
        eol: record.eol.clone(),
        support: record.support.clone(),
    })
}
