//! Test helpers for integration tests
//!
//! Provides utilities for spawning the API next to a stub upstream and
//! making HTTP requests against it.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use guild_api::{create_app, create_app_state};
use guild_common::AppConfig;
use guild_upstream::CombinedDataResponse;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::upstream::{StubUpstream, STUB_API_KEY};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub upstream: StubUpstream,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start the API against a stub upstream serving `roster`
    pub async fn start(roster: CombinedDataResponse) -> Result<Self> {
        let upstream = StubUpstream::start(roster).await?;
        let config = test_config(&upstream.base_url(), &[])?;
        Self::start_with_config(upstream, config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(upstream: StubUpstream, config: AppConfig) -> Result<Self> {
        // Create app state; no monitor task, tests drive refreshes explicitly
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state)?;

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            upstream,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a POST request without a body
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        Ok(self.client.post(self.url(path)).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.put(self.url(path)).json(body).send().await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }

    /// Trigger a refresh cycle and return its body
    pub async fn refresh(&self) -> Result<serde_json::Value> {
        let response = self.post_empty("/api/v1/roster/refresh").await?;
        assert_json(response, StatusCode::OK).await
    }
}

/// Build a configuration pointing at `upstream_url`, in memory storage
///
/// `overrides` replace or add environment variables.
pub fn test_config(upstream_url: &str, overrides: &[(&str, &str)]) -> Result<AppConfig> {
    let mut vars: Vec<(String, String)> = vec![
        ("API_HOST".to_string(), "127.0.0.1".to_string()),
        ("API_PORT".to_string(), "0".to_string()),
        ("UPSTREAM_URL".to_string(), upstream_url.to_string()),
        ("UPSTREAM_API_KEY".to_string(), STUB_API_KEY.to_string()),
        ("UPSTREAM_TIMEOUT_SECS".to_string(), "5".to_string()),
        ("RATE_LIMIT_BURST".to_string(), "1000".to_string()),
        ("RATE_LIMIT_REQUESTS_PER_SECOND".to_string(), "1000".to_string()),
    ];
    for (key, value) in overrides {
        vars.retain(|(k, _)| k != key);
        vars.push(((*key).to_string(), (*value).to_string()));
    }

    AppConfig::from_lookup(|key: &str| {
        vars.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status only
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
