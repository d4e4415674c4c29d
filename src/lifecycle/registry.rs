//! Registry trait for fetching release lifecycles from remote sources

#[cfg(test)]
use mockall::automock;

use crate::lifecycle::error::RegistryError;
use crate::lifecycle::types::ReleaseRecord;

/// Trait for fetching the release records of a product
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseRegistry: Send + Sync {
    /// Fetches all release lines for a product
    ///
    /// # Arguments
    /// * `product` - The product name as known to the registry (e.g., "node")
    ///
    /// # Returns
    /// * `Ok(Vec<ReleaseRecord>)` - Release lines in the order the registry lists them
    /// * `Err(RegistryError)` - If the fetch or decoding fails
    async fn fetch_releases(&self, product: &str) -> Result<Vec<ReleaseRecord>, RegistryError>;
}
