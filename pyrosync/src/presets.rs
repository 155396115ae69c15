//! In-memory collection of presets keyed by name.
//!
//! Insertion order is kept. Inserting a preset whose name is already present
//! replaces the earlier definition in place and hands the old one back.

use tracing::{debug, warn};

use crate::errors::{PresetError, PresetResult};
use crate::preset::{Preset, PresetField};

/// Ordered list of presets with unique names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetList {
    presets: Vec<Preset>,
}

impl PresetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a preset, returning the definition it replaced if the name was taken
    pub fn insert(&mut self, preset: Preset) -> Option<Preset> {
        match self.position(preset.name()) {
            Some(index) => {
                debug!("Preset '{}' overrides previous definition", preset.name());
                Some(std::mem::replace(&mut self.presets[index], preset))
            }
            None => {
                debug!("Added preset '{}'", preset.name());
                self.presets.push(preset);
                None
            }
        }
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name() == name)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Preset> {
        self.presets.iter_mut().find(|p| p.name() == name)
    }

    /// Look up a preset, failing with `PresetNotFound` when it is missing
    pub fn get(&self, name: &str) -> PresetResult<&Preset> {
        self.find_by_name(name).ok_or_else(|| PresetError::PresetNotFound {
            name: name.to_string(),
        })
    }

    pub fn remove(&mut self, name: &str) -> Option<Preset> {
        let index = self.position(name)?;
        debug!("Removed preset '{}'", name);
        Some(self.presets.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Presets with every field set
    pub fn complete(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter().filter(|p| p.is_complete())
    }

    /// Names and missing fields of presets that are still being configured
    pub fn incomplete(&self) -> Vec<(&str, Vec<PresetField>)> {
        self.presets
            .iter()
            .filter(|p| !p.is_complete())
            .map(|p| (p.name(), p.missing_fields()))
            .collect()
    }

    /// Warn about every preset that is not fully configured
    pub fn log_incomplete(&self) {
        for (name, missing) in self.incomplete() {
            let fields: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
            warn!("Preset '{}' is missing: {}", name, fields.join(", "));
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.presets.iter().position(|p| p.name() == name)
    }
}

impl FromIterator<Preset> for PresetList {
    fn from_iter<I: IntoIterator<Item = Preset>>(iter: I) -> Self {
        let mut list = PresetList::new();
        for preset in iter {
            list.insert(preset);
        }
        list
    }
}

impl<'a> IntoIterator for &'a PresetList {
    type Item = &'a Preset;
    type IntoIter = std::slice::Iter<'a, Preset>;

    fn into_iter(self) -> Self::IntoIter {
        self.presets.iter()
    }
}
