//! Registry test utilities

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use date_reaper::lifecycle::error::RegistryError;
use date_reaper::lifecycle::registry::ReleaseRegistry;
use date_reaper::lifecycle::types::{ReleaseRecord, Support};

/// In-memory registry serving a fixed snapshot of release records
#[derive(Default)]
pub struct StaticRegistry {
    releases: HashMap<String, Vec<ReleaseRecord>>,
    failing: HashMap<String, u16>,
    requests: Mutex<Vec<String>>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_releases(mut self, product: &str, releases: Vec<ReleaseRecord>) -> Self {
        self.releases.insert(product.to_string(), releases);
        self
    }

    /// Make every lookup of `product` fail with the given HTTP status
    pub fn with_failure(mut self, product: &str, status: u16) -> Self {
        self.failing.insert(product.to_string(), status);
        self
    }

    /// Products requested so far, in request order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReleaseRegistry for StaticRegistry {
    async fn fetch_releases(&self, product: &str) -> Result<Vec<ReleaseRecord>, RegistryError> {
        self.requests.lock().unwrap().push(product.to_string());

        if let Some(status) = self.failing.get(product) {
            return Err(RegistryError::UnexpectedStatus(*status));
        }

        match self.releases.get(product) {
            Some(releases) => Ok(releases.clone()),
            None => Err(RegistryError::NotFound(product.to_string())),
        }
    }
}

/// A snapshot of node release lines
pub fn node_releases() -> Vec<ReleaseRecord> {
    vec![
        ReleaseRecord::new("22", "2027-04-30", Support::Until("2025-10-21".to_string())),
        ReleaseRecord::new("20", "2026-04-30", Support::Until("2025-10-01".to_string())),
        ReleaseRecord::new("18", "2025-04-30", Support::Unknown),
        ReleaseRecord::new("14", "2024-04-30", Support::NoSupport),
    ]
}
