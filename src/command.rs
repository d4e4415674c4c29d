//! Command bodies behind the `date-reaper` binary
//!
//! Each command writes its report lines to `out` and returns an error for a
//! failed check. `exit_code` maps that error to the process status.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::lifecycle::batch::{ChunkSummary, evaluate_chunk};
use crate::lifecycle::error::CheckError;
use crate::lifecycle::policy::{CheckPolicy, check};
use crate::lifecycle::registry::ReleaseRegistry;
use crate::lifecycle::report;
use crate::parser::load_chunk;

/// Status for any failure that is not a classified check error
pub const GENERIC_FAILURE: u8 = 1;

/// Check one version and print its report line
///
/// On EOL the report line is written before the error is returned.
pub async fn run_check<W: Write>(
    registry: &dyn ReleaseRegistry,
    name: &str,
    version: &str,
    policy: CheckPolicy,
    today: NaiveDate,
    out: &mut W,
) -> anyhow::Result<()> {
    match check(registry, name, version, policy, today).await {
        Ok(outcome) => {
            writeln!(out, "{}", outcome.message())?;
            Ok(())
        }
        Err(error) => {
            if let CheckError::EolDetected {
                name,
                version,
                result,
            } = &error
            {
                writeln!(out, "{}", report::single_line(name, version, result))?;
            }
            Err(error.into())
        }
    }
}

/// Check every variant of the chunk file at `path` and print one line per variant
/// followed by the summary
pub async fn run_check_chunk<W: Write>(
    registry: &dyn ReleaseRegistry,
    path: &Path,
    tool: &str,
    today: NaiveDate,
    out: &mut W,
) -> anyhow::Result<()> {
    let chunk = load_chunk(path)?;
    info!(
        "Checking {} variants of {} from {}",
        chunk.variants.len(),
        tool,
        path.display()
    );

    let reports = evaluate_chunk(registry, tool, &chunk.variants, today).await;
    for report in &reports {
        writeln!(out, "{}", report)?;
    }
    writeln!(out, "{}", ChunkSummary::from_reports(&reports))?;

    Ok(())
}

/// Process status for a failed command
pub fn exit_code(error: &anyhow::Error) -> u8 {
    error
        .downcast_ref::<CheckError>()
        .map_or(GENERIC_FAILURE, CheckError::exit_code)
}
