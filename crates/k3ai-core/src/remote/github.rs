//! GitHub contents API transport
//!
//! Lists plugin directories through `GET /repos/{owner}/{repo}/contents/{path}`
//! and downloads descriptor files through the same endpoint with the raw
//! media type, so a single base URL (including `?ref=`) drives both.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use super::{ContentEntry, ContentFetcher, DirectoryLister};
use crate::config::RemoteSettings;

const GITHUB_JSON: &str = "application/vnd.github+json";
const GITHUB_RAW: &str = "application/vnd.github.raw";

/// One item of a contents API listing.
#[derive(Debug, Clone, Deserialize)]
struct GithubContent {
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

/// Blocking GitHub client.
///
/// Drives async reqwest on an owned single-threaded runtime; must not be
/// called from inside another tokio runtime.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    runtime: Arc<tokio::runtime::Runtime>,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(settings: &RemoteSettings) -> anyhow::Result<Self> {
        Self::with_builder(reqwest::Client::builder(), settings)
    }

    /// Same as [`GithubClient::new`], starting from a caller-supplied
    /// builder (proxy or TLS setup).
    pub fn with_builder(
        builder: reqwest::ClientBuilder,
        settings: &RemoteSettings,
    ) -> anyhow::Result<Self> {
        let mut builder = builder.user_agent(settings.user_agent.as_str());
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to create tokio runtime")?;

        Ok(Self {
            http,
            runtime: Arc::new(runtime),
            token: settings.token.clone(),
        })
    }

    async fn get(&self, url: &str, accept: &str) -> anyhow::Result<reqwest::Response> {
        let mut request = self.http.get(url).header(ACCEPT, accept);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP {} from {}", response.status(), url);
        }
        Ok(response)
    }
}

impl DirectoryLister for GithubClient {
    fn list(&self, url: &str) -> anyhow::Result<Vec<ContentEntry>> {
        let contents = self.runtime.block_on(async {
            self.get(url, GITHUB_JSON)
                .await?
                .json::<Vec<GithubContent>>()
                .await
                .context("Failed to parse GitHub contents listing")
        })?;
        Ok(directories(contents))
    }
}

impl ContentFetcher for GithubClient {
    fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        let bytes = self.runtime.block_on(async {
            self.get(url, GITHUB_RAW)
                .await?
                .bytes()
                .await
                .with_context(|| format!("Failed to read response body from {}", url))
        })?;
        Ok(bytes.to_vec())
    }
}

/// Keep directory entries only; each plugin lives in its own directory.
fn directories(contents: Vec<GithubContent>) -> Vec<ContentEntry> {
    contents
        .into_iter()
        .filter_map(|c| {
            if c.kind == "dir" {
                Some(ContentEntry::new(c.name))
            } else {
                tracing::warn!(name = %c.name, kind = %c.kind, "Skipping non-directory entry");
                None
            }
        })
        .collect()
}
