//! The per-request field registry.
//!
//! A [`FieldRegistry`] is an immutable snapshot: every adjustment
//! (`with_override`, `with_group_active`, `with_id_mode`) consumes the
//! registry and returns a new one. Validation is deliberately separate from
//! adjustment so that a sequence of overrides may pass through intermediate
//! states (two fields swapping orders, for example).

use std::collections::{BTreeMap, HashMap};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{ConfigurationError, CoreError};
use crate::fields::{FieldDescriptor, FieldFormat, FieldGroup, FieldKey};
use crate::format;
use crate::request::IdMode;

/// Caller adjustments for one field. Unset members keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    /// Format pattern; an empty string switches the field to raw output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Column header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Groups of field descriptors keyed by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRegistry {
    groups: BTreeMap<FieldGroup, BTreeMap<FieldKey, FieldDescriptor>>,
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::defaults()
    }
}

impl FieldRegistry {
    /// Registry holding every catalogue field with its default settings.
    #[must_use]
    pub fn defaults() -> Self {
        Self::from_unchecked(FieldKey::ALL.iter().map(|key| FieldDescriptor::default_for(*key)))
    }

    /// Build a registry from explicit descriptors and validate it.
    ///
    /// Later descriptors for the same key replace earlier ones.
    #[cfg(test)]
    pub(crate) fn from_descriptors(
        descriptors: impl IntoIterator<Item = FieldDescriptor>,
    ) -> Result<Self, CoreError> {
        let registry = Self::from_unchecked(descriptors);
        registry.validate()?;
        Ok(registry)
    }

    fn from_unchecked(descriptors: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        let mut groups: BTreeMap<FieldGroup, BTreeMap<FieldKey, FieldDescriptor>> =
            BTreeMap::new();
        for descriptor in descriptors {
            groups
                .entry(descriptor.group())
                .or_default()
                .insert(descriptor.key, descriptor);
        }
        Self { groups }
    }

    /// Look a descriptor up by its configuration key.
    pub fn get(&self, key: &str) -> Result<&FieldDescriptor, CoreError> {
        let parsed: FieldKey = key.parse()?;
        self.descriptor(parsed)
    }

    pub fn descriptor(&self, key: FieldKey) -> Result<&FieldDescriptor, CoreError> {
        self.groups
            .get(&key.group())
            .and_then(|fields| fields.get(&key))
            .ok_or_else(|| CoreError::UnknownField {
                key: key.as_str().to_string(),
            })
    }

    fn descriptor_mut(&mut self, key: FieldKey) -> Result<&mut FieldDescriptor, CoreError> {
        self.groups
            .get_mut(&key.group())
            .and_then(|fields| fields.get_mut(&key))
            .ok_or_else(|| CoreError::UnknownField {
                key: key.as_str().to_string(),
            })
    }

    pub fn is_active(&self, key: &str) -> Result<bool, CoreError> {
        self.get(key).map(|d| d.active)
    }

    pub fn order_of(&self, key: &str) -> Result<u32, CoreError> {
        self.get(key).map(|d| d.order)
    }

    pub fn format_of(&self, key: &str) -> Result<Option<&str>, CoreError> {
        self.get(key).map(|d| d.format.pattern())
    }

    /// Id encoding selected through the `Id` field's options.
    #[must_use]
    pub fn id_mode(&self) -> IdMode {
        let semantic = self
            .descriptor(FieldKey::Id)
            .ok()
            .and_then(|d| d.options.semantic_ids)
            .unwrap_or(true);
        if semantic {
            IdMode::Semantic
        } else {
            IdMode::Sequential
        }
    }

    /// Apply `change` to the field named `key`.
    pub fn with_override(mut self, key: &str, change: &FieldOverride) -> Result<Self, CoreError> {
        let parsed: FieldKey = key.parse()?;
        let descriptor = self.descriptor_mut(parsed)?;

        if let Some(active) = change.active {
            descriptor.active = active;
        }
        if let Some(order) = change.order {
            descriptor.order = order;
        }
        if let Some(pattern) = &change.format {
            descriptor.format = if pattern.is_empty() {
                FieldFormat::Raw
            } else {
                FieldFormat::Pattern(pattern.clone())
            };
        }
        if let Some(name) = &change.name {
            descriptor.display_name.clone_from(name);
        }
        Ok(self)
    }

    /// Switch every field of `group` on or off.
    #[must_use]
    pub fn with_group_active(mut self, group: FieldGroup, active: bool) -> Self {
        if let Some(fields) = self.groups.get_mut(&group) {
            for descriptor in fields.values_mut() {
                descriptor.active = active;
            }
        }
        self
    }

    #[must_use]
    pub fn with_id_mode(mut self, mode: IdMode) -> Self {
        if let Ok(id) = self.descriptor_mut(FieldKey::Id) {
            id.options.semantic_ids = Some(mode == IdMode::Semantic);
        }
        self
    }

    /// Every descriptor, group by group in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.groups.values().flat_map(BTreeMap::values)
    }

    pub fn group(&self, group: FieldGroup) -> impl Iterator<Item = &FieldDescriptor> {
        self.groups.get(&group).into_iter().flat_map(BTreeMap::values)
    }

    /// Active descriptors sorted by ascending order.
    #[must_use]
    pub fn active_fields(&self) -> Vec<&FieldDescriptor> {
        let mut active: Vec<&FieldDescriptor> = self.iter().filter(|d| d.active).collect();
        active.sort_by_key(|d| d.order);
        active
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check order uniqueness across the whole registry and every field's
    /// format against its kind.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut seen: HashMap<u32, FieldKey> = HashMap::new();
        for descriptor in self.iter() {
            if let Some(first) = seen.insert(descriptor.order, descriptor.key) {
                return Err(ConfigurationError::DuplicateOrder {
                    order: descriptor.order,
                    first: first.as_str().to_string(),
                    second: descriptor.key.as_str().to_string(),
                });
            }

            let kind = descriptor.key.kind();
            match &descriptor.format {
                FieldFormat::Raw if kind.requires_pattern() => {
                    return Err(ConfigurationError::MissingFormat {
                        key: descriptor.key.as_str().to_string(),
                    });
                }
                FieldFormat::Pattern(_) if !kind.accepts_pattern() => {
                    return Err(ConfigurationError::FormatNotSupported {
                        key: descriptor.key.as_str().to_string(),
                    });
                }
                FieldFormat::Pattern(pattern) if !format::is_valid_pattern(pattern) => {
                    return Err(ConfigurationError::InvalidFormat {
                        key: descriptor.key.as_str().to_string(),
                        pattern: pattern.clone(),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}
