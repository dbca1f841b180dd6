//! Plugin and group descriptor schema
//!
//! Mirrors the `plugin.yaml` / `group.yaml` files published in the k3ai
//! plugin repository. Every key is optional on decode; defaults are filled
//! in afterwards by [`Defaults`](super::Defaults).

use serde::{Deserialize, Deserializer, Serialize};

/// One YAML manifest applied during installation.
///
/// `url` is required: decoding rejects a step without it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YamlStep {
    /// Location of the manifest (or kustomization directory)
    pub url: String,

    /// Either `file` or `kustomize`; empty until normalized
    #[serde(
        default,
        rename = "type",
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub step_type: String,
}

impl YamlStep {
    pub fn new(url: impl Into<String>, step_type: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            step_type: step_type.into(),
        }
    }
}

/// Command to run once every install step has been applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInstall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// A k3ai plugin descriptor (`plugin.yaml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plugin {
    /// Target namespace; `default` when unset
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub namespace: String,

    /// Free-form tags
    #[serde(deserialize_with = "null_as_default")]
    pub labels: Vec<String>,

    /// Plugin name (identifier)
    #[serde(rename = "plugin-name", deserialize_with = "null_as_default")]
    pub plugin_name: String,

    /// Human readable description
    #[serde(rename = "plugin-description", deserialize_with = "null_as_default")]
    pub plugin_description: String,

    /// YAML manifests, applied in order
    #[serde(rename = "yaml", deserialize_with = "null_as_default")]
    pub yaml_steps: Vec<YamlStep>,

    /// Shell commands, run in order
    #[serde(rename = "bash", deserialize_with = "null_as_default")]
    pub bash_steps: Vec<String>,

    /// Helm commands, run in order
    #[serde(rename = "helm", deserialize_with = "null_as_default")]
    pub helm_steps: Vec<String>,

    #[serde(rename = "post-install", deserialize_with = "null_as_default")]
    pub post_install: PostInstall,
}

/// Plugins aggregated from a remote listing, in listing order.
///
/// Names are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugins {
    #[serde(default)]
    pub items: Vec<Plugin>,
}

impl Plugins {
    pub fn new(items: Vec<Plugin>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Plugin> {
        self.items.iter()
    }

    /// First plugin whose `plugin-name` matches.
    pub fn find(&self, name: &str) -> Option<&Plugin> {
        self.items.iter().find(|p| p.plugin_name == name)
    }
}

impl IntoIterator for Plugins {
    type Item = Plugin;
    type IntoIter = std::vec::IntoIter<Plugin>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Reference from a group to one of its plugins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// A named bundle of plugins (`group.yaml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    #[serde(rename = "group-name", deserialize_with = "null_as_default")]
    pub group_name: String,

    #[serde(rename = "group-description", deserialize_with = "null_as_default")]
    pub group_description: String,

    #[serde(deserialize_with = "null_as_default")]
    pub plugins: Vec<GroupMember>,
}

impl Group {
    /// Names of the members that are switched on.
    pub fn enabled_plugins(&self) -> impl Iterator<Item = &str> {
        self.plugins
            .iter()
            .filter(|m| m.enabled)
            .map(|m| m.name.as_str())
    }
}

/// Groups aggregated from a remote listing, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Groups {
    #[serde(default)]
    pub items: Vec<Group>,
}

impl Groups {
    pub fn new(items: Vec<Group>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.items.iter()
    }
}

/// Treats an explicit `null` (e.g. `labels:` with nothing after it) like
/// an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
