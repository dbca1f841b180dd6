//! YAML decoder backed by serde_yaml.

use anyhow::Context;
use serde::de::DeserializeOwned;

use super::Decoder;

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlDecoder;

impl Decoder for YamlDecoder {
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> anyhow::Result<T> {
        serde_yaml::from_slice(bytes).context("Failed to parse YAML descriptor")
    }
}
