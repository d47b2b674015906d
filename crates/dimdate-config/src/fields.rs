//! Field selection: id encoding, group switches, per-field overrides.

use std::collections::BTreeMap;

use dimdate_core::{FieldGroup, FieldOverride, FieldRegistry, IdMode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_semantic() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct IdsConfig {
    /// `YYYYMMDD` ids when true, day offsets from the range start otherwise.
    #[serde(default = "default_semantic")]
    pub semantic: bool,
}

impl Default for IdsConfig {
    fn default() -> Self {
        Self {
            semantic: default_semantic(),
        }
    }
}

impl IdsConfig {
    pub const fn mode(&self) -> IdMode {
        if self.semantic {
            IdMode::Semantic
        } else {
            IdMode::Sequential
        }
    }
}

/// Whole-group switches. Unset groups keep each field's own default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct GroupsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiscal: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<bool>,
}

impl GroupsConfig {
    pub const fn get(&self, group: FieldGroup) -> Option<bool> {
        match group {
            FieldGroup::Basic => self.basic,
            FieldGroup::Calendar => self.calendar,
            FieldGroup::Fiscal => self.fiscal,
            FieldGroup::Flags => self.flags,
        }
    }
}

/// Build the registry: catalogue defaults, then group switches, then the id
/// mode, then per-field overrides in key order.
pub fn build_registry(
    ids: &IdsConfig,
    groups: &GroupsConfig,
    fields: &BTreeMap<String, FieldOverride>,
) -> Result<FieldRegistry, ConfigError> {
    let mut registry = FieldRegistry::defaults();
    for group in FieldGroup::ALL {
        if let Some(active) = groups.get(group) {
            registry = registry.with_group_active(group, active);
        }
    }
    registry = registry.with_id_mode(ids.mode());

    for (key, change) in fields {
        registry = registry.with_override(key, change)?;
    }
    Ok(registry)
}
