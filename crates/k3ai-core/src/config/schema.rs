//! Configuration schema for config.toml

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_PLUGINS_URL: &str =
    "https://api.github.com/repos/kf5i/k3ai-plugins/contents/v2/plugins?ref=main";
pub const DEFAULT_GROUPS_URL: &str =
    "https://api.github.com/repos/kf5i/k3ai-plugins/contents/v2/groups?ref=main";

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub remote: RemoteSettings,
}

/// Where descriptors are listed from and how they are requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    /// Directory whose subdirectories each hold a `plugin.yaml`
    pub plugins_url: String,

    /// Directory whose subdirectories each hold a `group.yaml`
    pub groups_url: String,

    pub user_agent: String,

    /// GitHub token, sent as a bearer token when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Per-request timeout; the transport default applies when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            plugins_url: DEFAULT_PLUGINS_URL.to_string(),
            groups_url: DEFAULT_GROUPS_URL.to_string(),
            user_agent: format!("k3ai/{}", env!("CARGO_PKG_VERSION")),
            token: None,
            timeout_secs: None,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that both listing URLs are absolute http(s) URLs.
    pub fn validate(&self) -> Result<()> {
        check_url("plugins_url", &self.remote.plugins_url)?;
        check_url("groups_url", &self.remote.groups_url)?;
        if self.remote.timeout_secs == Some(0) {
            return Err(Error::Config {
                message: "timeout_secs must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn check_url(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::Config {
            message: format!("{field} must not be empty"),
        });
    }
    let url = Url::parse(value).map_err(|e| Error::Config {
        message: format!("{field} is not a valid URL ({e}): {value}"),
    })?;
    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(Error::Config {
            message: format!("{field} must use http or https: {value}"),
        });
    }
    Ok(())
}
