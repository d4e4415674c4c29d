//! endoflife.date API implementation

use std::time::Duration;

use crate::config::RegistryConfig;
use crate::lifecycle::error::RegistryError;
use crate::lifecycle::registry::ReleaseRegistry;
use crate::lifecycle::types::ReleaseRecord;
use tracing::{debug, warn};

/// Registry implementation for the endoflife.date API
pub struct EndOfLifeRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl EndOfLifeRegistry {
    /// Creates a new EndOfLifeRegistry from the registry settings
    pub fn new(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a registry with default settings pointed at `base_url`
    pub fn with_base_url(base_url: &str) -> Result<Self, RegistryError> {
        Self::new(&RegistryConfig {
            base_url: base_url.to_string(),
            ..RegistryConfig::default()
        })
    }
}

#[async_trait::async_trait]
impl ReleaseRegistry for EndOfLifeRegistry {
    async fn fetch_releases(&self, product: &str) -> Result<Vec<ReleaseRecord>, RegistryError> {
        let url = format!("{}/{}.json", self.base_url, product);
        debug!("Fetching release cycles from {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(product.to_string()));
        }

        if !status.is_success() {
            warn!("endoflife.date returned status {}: {}", status, url);
            return Err(RegistryError::UnexpectedStatus(status.as_u16()));
        }

        let releases: Vec<ReleaseRecord> = response.json().await.map_err(|e| {
            warn!("Failed to parse endoflife.date response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        debug!("Fetched {} release cycles for {}", releases.len(), product);

        Ok(releases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::types::Support;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn fetch_releases_returns_records_in_registry_order() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/node.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"cycle": "22", "releaseDate": "2024-04-24", "eol": "2027-04-30", "support": "2025-10-21", "latest": "22.1.0", "latestReleaseDate": "2024-05-02", "lts": false},
                    {"cycle": "20", "releaseDate": "2023-04-18", "eol": "2026-04-30", "support": "2024-10-22", "latest": "20.12.2", "latestReleaseDate": "2024-04-10", "lts": "2023-10-24"},
                    {"cycle": "14", "releaseDate": "2020-04-21", "eol": "2023-04-30", "support": false, "latest": "14.21.3", "latestReleaseDate": "2023-02-16", "lts": true}
                ]"#,
            )
            .create_async()
            .await;

        let registry = EndOfLifeRegistry::with_base_url(&server.url()).unwrap();
        let result = registry.fetch_releases("node").await.unwrap();

        mock.assert_async().await;
        let cycles: Vec<&str> = result.iter().map(|r| r.cycle.as_str()).collect();
        assert_eq!(cycles, vec!["22", "20", "14"]);
        assert_eq!(result[0].support, Support::Until("2025-10-21".to_string()));
        assert_eq!(result[2].support, Support::NoSupport);
        assert!(result[1].lts);
    }

    #[tokio::test]
    async fn fetch_releases_sends_user_agent() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/python.json")
            .match_header("user-agent", "date-reaper-cli")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let registry = EndOfLifeRegistry::with_base_url(&server.url()).unwrap();
        let result = registry.fetch_releases("python").await.unwrap();

        mock.assert_async().await;
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn fetch_releases_uses_configured_user_agent() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/go.json")
            .match_header("user-agent", Matcher::Exact("pipeline-gate".to_string()))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let registry = EndOfLifeRegistry::new(&RegistryConfig {
            base_url: format!("{}/", server.url()),
            user_agent: "pipeline-gate".to_string(),
            ..RegistryConfig::default()
        })
        .unwrap();
        registry.fetch_releases("go").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_releases_returns_not_found_for_unknown_product() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/nonexistent.json")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let registry = EndOfLifeRegistry::with_base_url(&server.url()).unwrap();
        let result = registry.fetch_releases("nonexistent").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }

    #[tokio::test]
    async fn fetch_releases_returns_unexpected_status_for_server_error() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/node.json")
            .with_status(503)
            .create_async()
            .await;

        let registry = EndOfLifeRegistry::with_base_url(&server.url()).unwrap();
        let result = registry.fetch_releases("node").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::UnexpectedStatus(503))));
    }

    #[tokio::test]
    async fn fetch_releases_returns_invalid_response_for_malformed_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/node.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"cycle": "20"}"#)
            .create_async()
            .await;

        let registry = EndOfLifeRegistry::with_base_url(&server.url()).unwrap();
        let result = registry.fetch_releases("node").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }
}
