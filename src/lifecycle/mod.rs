//! Release lifecycle layer for EOL checking
//!
//! This module fetches release records for a product, matches a requested
//! release cycle against them, and classifies it as EOL or not.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│  Evaluator  │◀────│   Policy    │
//! │  (fetch)    │     │ (classify)  │     │(single check│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   ▲
//!        ▼                   │
//! ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │    Batch    │
//! │(endoflife)  │     │  (chunks)   │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Registry trait for fetching release records
//! - [`registries`]: Concrete registry implementations (endoflife.date)
//! - [`evaluator`]: Cycle matching and EOL classification
//! - [`policy`]: Pass/fail decision for a single check
//! - [`batch`]: Sequential evaluation of a chunk's variants
//! - [`report`]: Console lines for single checks
//! - [`format`]: Text helpers
//! - [`error`]: Error types for lookups, evaluations and checks
//! - [`types`]: Release records, support windows and results

pub mod batch;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod policy;
pub mod registries;
pub mod registry;
pub mod report;
pub mod types;
