//! Default values for unset descriptor fields.

use super::schema::{Group, Plugin};
use super::{DEFAULT_NAMESPACE, YAML_TYPE_FILE};

/// Fallback values filled into a freshly decoded descriptor.
///
/// Applying them is total and idempotent: empty fields are filled, anything
/// already set is left untouched (including step types the validator will
/// later reject).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    /// Used when `namespace` is empty
    pub namespace: String,
    /// Used when a YAML step has no `type`
    pub yaml_type: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            yaml_type: YAML_TYPE_FILE.to_string(),
        }
    }
}

impl Defaults {
    pub fn apply(&self, plugin: &mut Plugin) {
        if plugin.namespace.is_empty() {
            plugin.namespace = self.namespace.clone();
        }
        for step in &mut plugin.yaml_steps {
            if step.step_type.is_empty() {
                step.step_type = self.yaml_type.clone();
            }
        }
    }
}

/// Descriptor kinds that can be filled from [`Defaults`].
pub trait Normalize {
    fn normalize(&mut self, defaults: &Defaults);
}

impl Normalize for Plugin {
    fn normalize(&mut self, defaults: &Defaults) {
        defaults.apply(self);
    }
}

// Groups carry no optional fields with fallbacks.
impl Normalize for Group {
    fn normalize(&mut self, _defaults: &Defaults) {}
}
