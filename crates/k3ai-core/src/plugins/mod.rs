//! Plugin descriptors
//!
//! Fetches `plugin.yaml` / `group.yaml` descriptors from a remote listing,
//! fills in defaults and checks them against the structural rules.

pub mod catalog;
pub mod defaults;
pub mod schema;
mod validate;


pub use catalog::{Catalog, DescriptorFiles};
pub use defaults::{Defaults, Normalize};
pub use schema::{Group, GroupMember, Groups, Plugin, Plugins, PostInstall, YamlStep};

/// Every plugin directory must contain this file, otherwise it is ignored.
pub const DEFAULT_PLUGIN_FILE_NAME: &str = "plugin.yaml";
/// Every group directory must contain this file, otherwise it is ignored.
pub const DEFAULT_GROUP_FILE_NAME: &str = "group.yaml";

pub const DEFAULT_NAMESPACE: &str = "default";

pub const YAML_TYPE_FILE: &str = "file";
pub const YAML_TYPE_KUSTOMIZE: &str = "kustomize";
