//! Remote access capabilities
//!
//! The catalog never talks to the network directly. It is handed a
//! directory lister, a content fetcher, a decoder and a URL joiner, so tests
//! can substitute in-memory fakes and production code can plug in GitHub.

mod github;
mod join;
mod yaml;

use serde::de::DeserializeOwned;

pub use github::GithubClient;
pub use join::UrlPathJoiner;
pub use yaml::YamlDecoder;

/// One entry of a remote directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    pub name: String,
}

impl ContentEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Enumerates the entries below a remote location.
pub trait DirectoryLister {
    /// List entries at `url`, in the order the remote returns them.
    fn list(&self, url: &str) -> anyhow::Result<Vec<ContentEntry>>;
}

/// Retrieves raw bytes from a URL.
pub trait ContentFetcher {
    fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>>;
}

/// Turns raw bytes into a typed record.
pub trait Decoder {
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> anyhow::Result<T>;
}

/// Builds a child location from a base URL and a relative segment.
pub trait UrlJoiner {
    fn join(&self, base: &str, segment: &str) -> String;
}

impl<T: DirectoryLister + ?Sized> DirectoryLister for &T {
    fn list(&self, url: &str) -> anyhow::Result<Vec<ContentEntry>> {
        (**self).list(url)
    }
}

impl<T: ContentFetcher + ?Sized> ContentFetcher for &T {
    fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        (**self).fetch(url)
    }
}
