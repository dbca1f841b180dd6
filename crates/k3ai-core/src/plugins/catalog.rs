//! Remote descriptor catalog
//!
//! Lists a remote directory, fetches one descriptor per entry and fills in
//! defaults. Entries are processed strictly in listing order and the first
//! failure aborts the whole aggregation; no partial collection is returned.

use serde::de::DeserializeOwned;

use super::defaults::{Defaults, Normalize};
use super::schema::{Group, Groups, Plugin, Plugins};
use super::{DEFAULT_GROUP_FILE_NAME, DEFAULT_PLUGIN_FILE_NAME};
use crate::config::RemoteSettings;
use crate::error::{Error, Result};
use crate::remote::{
    ContentFetcher, Decoder, DirectoryLister, GithubClient, UrlJoiner, UrlPathJoiner, YamlDecoder,
};

/// Descriptor file names looked up inside each listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorFiles {
    pub plugin: String,
    pub group: String,
}

impl Default for DescriptorFiles {
    fn default() -> Self {
        Self {
            plugin: DEFAULT_PLUGIN_FILE_NAME.to_string(),
            group: DEFAULT_GROUP_FILE_NAME.to_string(),
        }
    }
}

/// Fetches and aggregates descriptors through injected capabilities.
///
/// # Example
/// ```ignore
/// let catalog = Catalog::from_settings(&settings.remote)?;
/// let plugins = catalog.list_plugins(&settings.remote.plugins_url)?;
/// ```
#[derive(Debug, Clone)]
pub struct Catalog<L, F, D = YamlDecoder, J = UrlPathJoiner> {
    lister: L,
    fetcher: F,
    decoder: D,
    joiner: J,
    defaults: Defaults,
    files: DescriptorFiles,
}

impl<L, F> Catalog<L, F> {
    pub fn new(lister: L, fetcher: F) -> Self {
        Self {
            lister,
            fetcher,
            decoder: YamlDecoder,
            joiner: UrlPathJoiner,
            defaults: Defaults::default(),
            files: DescriptorFiles::default(),
        }
    }
}

impl Catalog<GithubClient, GithubClient> {
    /// Catalog backed by the GitHub contents API.
    pub fn from_settings(settings: &RemoteSettings) -> anyhow::Result<Self> {
        let client = GithubClient::new(settings)?;
        Ok(Self::new(client.clone(), client))
    }
}

impl<L, F, D, J> Catalog<L, F, D, J> {
    pub fn with_decoder<D2>(self, decoder: D2) -> Catalog<L, F, D2, J> {
        Catalog {
            lister: self.lister,
            fetcher: self.fetcher,
            decoder,
            joiner: self.joiner,
            defaults: self.defaults,
            files: self.files,
        }
    }

    pub fn with_joiner<J2>(self, joiner: J2) -> Catalog<L, F, D, J2> {
        Catalog {
            lister: self.lister,
            fetcher: self.fetcher,
            decoder: self.decoder,
            joiner,
            defaults: self.defaults,
            files: self.files,
        }
    }

    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_files(mut self, files: DescriptorFiles) -> Self {
        self.files = files;
        self
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    pub fn files(&self) -> &DescriptorFiles {
        &self.files
    }
}

impl<L, F, D, J> Catalog<L, F, D, J>
where
    F: ContentFetcher,
    D: Decoder,
{
    /// Fetch a single `plugin.yaml` and apply defaults.
    pub fn fetch_plugin(&self, url: &str) -> Result<Plugin> {
        self.fetch_descriptor(url)
    }

    /// Fetch a single `group.yaml`.
    pub fn fetch_group(&self, url: &str) -> Result<Group> {
        self.fetch_descriptor(url)
    }

    fn fetch_descriptor<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Normalize,
    {
        tracing::debug!(url, "Fetching descriptor");

        let bytes = self.fetcher.fetch(url).map_err(|e| Error::Fetch {
            url: url.to_string(),
            source: e.into(),
        })?;

        let mut descriptor: T = self.decoder.decode(&bytes).map_err(|e| Error::Decode {
            url: url.to_string(),
            source: e.into(),
        })?;

        descriptor.normalize(&self.defaults);
        Ok(descriptor)
    }
}

impl<L, F, D, J> Catalog<L, F, D, J>
where
    L: DirectoryLister,
    F: ContentFetcher,
    D: Decoder,
    J: UrlJoiner,
{
    /// Fetch `<base_url>/<entry>/plugin.yaml` for every listed entry.
    pub fn list_plugins(&self, base_url: &str) -> Result<Plugins> {
        let items = self.list_descriptors(base_url, &self.files.plugin)?;
        Ok(Plugins::new(items))
    }

    /// Fetch `<base_url>/<entry>/group.yaml` for every listed entry.
    pub fn list_groups(&self, base_url: &str) -> Result<Groups> {
        let items = self.list_descriptors(base_url, &self.files.group)?;
        Ok(Groups::new(items))
    }

    fn list_descriptors<T>(&self, base_url: &str, file_name: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Normalize,
    {
        tracing::debug!(url = base_url, "Listing remote entries");

        let entries = self.lister.list(base_url).map_err(|e| Error::Listing {
            url: base_url.to_string(),
            source: e.into(),
        })?;

        let descriptors = entries
            .iter()
            .map(|entry| {
                let dir = self.joiner.join(base_url, &entry.name);
                self.fetch_descriptor(&self.joiner.join(&dir, file_name))
            })
            .collect::<Result<Vec<T>>>()?;

        tracing::info!(
            url = base_url,
            file = file_name,
            count = descriptors.len(),
            "Fetched descriptors"
        );
        Ok(descriptors)
    }
}
