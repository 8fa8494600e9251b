//! reqwest implementation of the roster ports

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use tracing::{debug, instrument, warn};

use guild_core::entities::RosterSnapshot;
use guild_core::traits::{RepoResult, RosterCommands, RosterSource};
use guild_core::value_objects::CharacterName;

use super::config::UpstreamClientConfig;
use crate::error::{UpstreamError, UpstreamResult};
use crate::wire::{AddExternalRequest, CombinedDataResponse};

/// Header carrying the upstream credential
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Client for the upstream tracker backend
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl UpstreamClient {
    /// Create a client; fails on an unparsable base URL
    pub fn new(config: UpstreamClientConfig) -> UpstreamResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| UpstreamError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(config.base_url));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| UpstreamError::Build(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
        })
    }

    /// Build `base/segments...`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> UpstreamResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| UpstreamError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&AddExternalRequest>,
    ) -> UpstreamResult<reqwest::Response> {
        let path = url.path().to_string();
        let mut request = self
            .http
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), %path, "Upstream rejected request");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                path,
            });
        }
        Ok(response)
    }

    /// Send a body-less or JSON command and ignore the response payload
    async fn command(&self, method: Method, segments: &[&str]) -> UpstreamResult<()> {
        let url = self.endpoint(segments)?;
        self.send(method, url, None).await?;
        Ok(())
    }

    /// Pull the combined roster
    #[instrument(skip(self))]
    pub async fn combined_data(&self) -> UpstreamResult<CombinedDataResponse> {
        let url = self.endpoint(&["api", "external-characters", "combined-data"])?;
        let response = self.send(Method::GET, url, None).await?;
        let payload = response
            .json::<CombinedDataResponse>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        debug!(
            members = payload.guild.members.len(),
            external = payload.external_characters.len(),
            "Fetched combined roster"
        );
        Ok(payload)
    }
}

#[async_trait]
impl RosterSource for UpstreamClient {
    async fn fetch_roster(&self) -> RepoResult<RosterSnapshot> {
        Ok(self.combined_data().await?.into())
    }
}

#[async_trait]
impl RosterCommands for UpstreamClient {
    #[instrument(skip(self))]
    async fn mark_exited(&self, name: &CharacterName) -> RepoResult<()> {
        self.command(Method::POST, &["api", "guild", "mark-exited", name.as_str()])
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self))]
    async fn unmark_exited(&self, name: &CharacterName) -> RepoResult<()> {
        self.command(Method::POST, &["api", "guild", "unmark-exited", name.as_str()])
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self))]
    async fn mark_external_exited(&self, name: &CharacterName) -> RepoResult<()> {
        self.command(
            Method::POST,
            &["api", "external-characters", "mark-exited", name.as_str()],
        )
        .await
        .map_err(Into::into)
    }

    #[instrument(skip(self))]
    async fn unmark_external_exited(&self, name: &CharacterName) -> RepoResult<()> {
        self.command(
            Method::POST,
            &["api", "external-characters", "unmark-exited", name.as_str()],
        )
        .await
        .map_err(Into::into)
    }

    #[instrument(skip(self))]
    async fn add_external(&self, name: &CharacterName) -> RepoResult<()> {
        let url = self.endpoint(&["api", "external-characters", "add"])?;
        let body = AddExternalRequest {
            name: name.to_string(),
        };
        self.send(Method::POST, url, Some(&body)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_external(&self, name: &CharacterName) -> RepoResult<()> {
        self.command(
            Method::DELETE,
            &["api", "external-characters", "remove", name.as_str()],
        )
        .await
        .map_err(Into::into)
    }
}
