#![allow(dead_code)]

pub mod registry;

use chrono::NaiveDate;

pub use registry::{StaticRegistry, node_releases};

/// Parse a `YYYY-MM-DD` date
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}
