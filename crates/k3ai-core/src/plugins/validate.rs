//! Structural checks on normalized descriptors.
//!
//! Checks run in order and stop at the first failure. They never mutate the
//! descriptor, so an un-normalized plugin with an empty namespace or step
//! type fails here; run [`Defaults::apply`](super::Defaults::apply) first.

use crate::error::ValidationError;

use super::schema::{Group, Plugin, Plugins};
use super::{YAML_TYPE_FILE, YAML_TYPE_KUSTOMIZE};

impl Plugin {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.namespace.is_empty() {
            return Err(ValidationError::EmptyNamespace);
        }
        for (index, step) in self.yaml_steps.iter().enumerate() {
            if step.step_type != YAML_TYPE_KUSTOMIZE && step.step_type != YAML_TYPE_FILE {
                return Err(ValidationError::InvalidYamlType {
                    index,
                    found: step.step_type.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Plugins {
    /// Validate every plugin, returning the name and first failure of each
    /// invalid one in collection order.
    pub fn validate_all(&self) -> Vec<(String, ValidationError)> {
        self.items
            .iter()
            .filter_map(|p| p.validate().err().map(|e| (p.plugin_name.clone(), e)))
            .collect()
    }
}

impl Group {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.group_name.is_empty() {
            return Err(ValidationError::EmptyGroupName);
        }
        if let Some(index) = self.plugins.iter().position(|m| m.name.is_empty()) {
            return Err(ValidationError::EmptyMemberName { index });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::schema::{GroupMember, YamlStep};

    fn valid_plugin() -> Plugin {
        Plugin {
            namespace: "default".to_string(),
            plugin_name: "demo".to_string(),
            yaml_steps: vec![
                YamlStep::new("https://example.com/a.yaml", "file"),
                YamlStep::new("https://example.com/b", "kustomize"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn accepts_valid_plugin() {
        assert!(valid_plugin().validate().is_ok());
    }

    #[test]
    fn accepts_plugin_without_steps() {
        let plugin = Plugin {
            namespace: "ml".to_string(),
            ..Default::default()
        };
        assert!(plugin.validate().is_ok());
    }

    #[test]
    fn rejects_empty_namespace() {
        let plugin = Plugin {
            namespace: String::new(),
            ..valid_plugin()
        };
        let err = plugin.validate().unwrap_err();
        assert_eq!(err, ValidationError::EmptyNamespace);
        assert!(err.to_string().contains("namespace"));
    }

    #[test]
    fn namespace_checked_before_step_types() {
        let plugin = Plugin {
            namespace: String::new(),
            yaml_steps: vec![YamlStep::new("x", "helm")],
            ..Default::default()
        };
        assert_eq!(plugin.validate(), Err(ValidationError::EmptyNamespace));
    }

    #[test]
    fn rejects_unknown_step_type() {
        let mut plugin = valid_plugin();
        plugin.yaml_steps.push(YamlStep::new("https://example.com/c", "helm"));

        let err = plugin.validate().unwrap_err();
        assert!(err.to_string().contains("type must be file or kustomize"));
        assert_eq!(
            err,
            ValidationError::InvalidYamlType {
                index: 2,
                found: "helm".to_string()
            }
        );
    }

    #[test]
    fn reports_first_bad_step_only() {
        let plugin = Plugin {
            namespace: "default".to_string(),
            yaml_steps: vec![
                YamlStep::new("a", "helm"),
                YamlStep::new("b", "raw"),
            ],
            ..Default::default()
        };
        assert_eq!(
            plugin.validate(),
            Err(ValidationError::InvalidYamlType {
                index: 0,
                found: "helm".to_string()
            })
        );
    }

    #[test]
    fn empty_step_type_is_rejected_before_normalization() {
        let plugin = Plugin {
            namespace: "default".to_string(),
            yaml_steps: vec![YamlStep::new("a", "")],
            ..Default::default()
        };
        assert!(plugin.validate().is_err());
    }

    #[test]
    fn validate_all_collects_each_invalid_plugin() {
        let plugins = Plugins::new(vec![
            valid_plugin(),
            Plugin {
                plugin_name: "no-ns".to_string(),
                ..Default::default()
            },
            Plugin {
                namespace: "x".to_string(),
                plugin_name: "bad-step".to_string(),
                yaml_steps: vec![YamlStep::new("a", "helm")],
                ..Default::default()
            },
        ]);

        let failures = plugins.validate_all();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].0, "no-ns");
        assert_eq!(failures[1].0, "bad-step");
    }

    #[test]
    fn group_rules() {
        let mut group = Group {
            group_name: "ml".to_string(),
            plugins: vec![GroupMember {
                name: "argo".to_string(),
                enabled: true,
            }],
            ..Default::default()
        };
        assert!(group.validate().is_ok());

        group.plugins.push(GroupMember {
            name: String::new(),
            enabled: false,
        });
        assert_eq!(
            group.validate(),
            Err(ValidationError::EmptyMemberName { index: 1 })
        );

        group.group_name.clear();
        assert_eq!(group.validate(), Err(ValidationError::EmptyGroupName));
    }
}
