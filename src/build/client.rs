// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the build endpoint.

use super::{parse_response, BuildOutcome, BuildRequest};
use crate::config::ServerConfig;
use crate::error::{BuildError, Error, Result};

const USER_AGENT: &str = concat!("dtb_client/", env!("CARGO_PKG_VERSION"));

/// Sends build requests to the configured server.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct BuildClient {
    http: reqwest::Client,
    url: String,
}

impl BuildClient {
    /// Creates a client for `server`, applying its request timeout.
    pub fn new(server: &ServerConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(server.request_timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Build(BuildError::from(e)))?;

        Ok(Self {
            http,
            url: server.build_url(),
        })
    }

    /// Full URL requests are posted to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Posts `request` and interprets the answer.
    pub async fn submit(&self, request: &BuildRequest) -> std::result::Result<BuildOutcome, BuildError> {
        tracing::info!(url = %self.url, "submitting build request");

        let response = self.http.post(&self.url).json(request).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        let outcome = parse_response(status, &body);
        match &outcome {
            Ok(result) => tracing::info!(
                status,
                server_logs = result.logs.len(),
                "build request succeeded"
            ),
            Err(err) => tracing::warn!(status, "build request failed: {err}"),
        }
        outcome
    }
}
