//! In-memory stand-ins for the remote capabilities.

use std::cell::RefCell;
use std::collections::HashMap;

use k3ai_core::remote::{ContentEntry, ContentFetcher, DirectoryLister};

/// Serves canned listings and files; anything unknown is a 404.
#[derive(Default)]
pub struct FakeRemote {
    listings: HashMap<String, Vec<String>>,
    files: HashMap<String, Vec<u8>>,
    pub fetched: RefCell<Vec<String>>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listing(mut self, url: &str, names: &[&str]) -> Self {
        self.listings.insert(
            url.to_string(),
            names.iter().map(|n| n.to_string()).collect(),
        );
        self
    }

    pub fn file(mut self, url: &str, content: &str) -> Self {
        self.files
            .insert(url.to_string(), content.as_bytes().to_vec());
        self
    }
}

impl DirectoryLister for FakeRemote {
    fn list(&self, url: &str) -> anyhow::Result<Vec<ContentEntry>> {
        self.listings
            .get(url)
            .map(|names| names.iter().map(ContentEntry::new).collect())
            .ok_or_else(|| anyhow::anyhow!("HTTP 404 Not Found from {}", url))
    }
}

impl ContentFetcher for FakeRemote {
    fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        self.fetched.borrow_mut().push(url.to_string());
        self.files
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("HTTP 404 Not Found from {}", url))
    }
}
