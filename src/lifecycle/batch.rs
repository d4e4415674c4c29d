//! Batch evaluation of the variants of one chunk

use std::fmt;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::lifecycle::error::EvaluateError;
use crate::lifecycle::evaluator::evaluate;
use crate::lifecycle::registry::ReleaseRegistry;
use crate::lifecycle::types::{EolStatus, EvaluationResult};
use crate::parser::types::Variant;

/// Outcome for one variant of a chunk
#[derive(Debug)]
pub struct VariantReport {
    /// Version identifier checked (the variant's name)
    pub version: String,
    pub outcome: Result<EvaluationResult, EvaluateError>,
}

impl fmt::Display for VariantReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Err(e) => write!(f, "Error checking version {}: {}", self.version, e),
            Ok(result) => match result.status {
                EolStatus::Eol => write!(
                    f,
                    "Version {} is EOL since {}. Support ended on: {}",
                    self.version, result.eol, result.support
                ),
                EolStatus::NotEol => write!(
                    f,
                    "Version {} is not EOL yet. It will be EOL on {}.",
                    self.version, result.eol
                ),
            },
        }
    }
}

/// Tally of a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkSummary {
    pub total: usize,
    pub eol: usize,
    pub not_eol: usize,
    pub failed: usize,
}

impl ChunkSummary {
    pub fn from_reports(reports: &[VariantReport]) -> Self {
        reports
            .iter()
            .fold(Self::default(), |mut summary, report| {
                summary.total += 1;
                match &report.outcome {
                    Ok(result) if result.is_eol() => summary.eol += 1,
                    Ok(_) => summary.not_eol += 1,
                    Err(_) => summary.failed += 1,
                }
                summary
            })
    }
}

impl fmt::Display for ChunkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Checked {} variants: {} EOL, {} not EOL, {} failed",
            self.total, self.eol, self.not_eol, self.failed
        )
    }
}

/// Evaluate every variant of a chunk against `tool`, in order
///
/// Each variant is looked up sequentially. Failures are recorded in the
/// variant's report and never stop the remaining variants.
pub async fn evaluate_chunk(
    registry: &dyn ReleaseRegistry,
    tool: &str,
    variants: &[Variant],
    today: NaiveDate,
) -> Vec<VariantReport> {
    let mut reports = Vec::with_capacity(variants.len());

    for variant in variants {
        let outcome = evaluate(registry, tool, &variant.name, today).await;

        if let Err(e) = &outcome {
            warn!("Failed to check {} {}: {}", tool, variant.name, e);
        }

        reports.push(VariantReport {
            version: variant.name.clone(),
            outcome,
        });
    }

    info!("Evaluated {} variants of {}", reports.len(), tool);

    reports
}
