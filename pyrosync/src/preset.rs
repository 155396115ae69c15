//! Named rsync synchronization presets.
//!
//! A [`Preset`] is created with only a name. Its description, options, source
//! and destination are populated afterwards, in any order, and stay unset until
//! then. Reading an unset field returns [`PresetError::UnsetField`] rather than
//! an empty default, so a preset that was set to an empty value can always be
//! told apart from one that was never configured.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{PresetError, PresetResult};

/// The configurable fields of a preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetField {
    Description,
    Options,
    Source,
    Destination,
}

impl PresetField {
    /// All fields, in display order
    pub const ALL: [PresetField; 4] = [
        PresetField::Description,
        PresetField::Options,
        PresetField::Source,
        PresetField::Destination,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PresetField::Description => "description",
            PresetField::Options => "options",
            PresetField::Source => "source",
            PresetField::Destination => "destination",
        }
    }
}

impl fmt::Display for PresetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A saved rsync synchronization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Identifier of the preset, fixed at construction
    name: String,
    /// Human readable summary of what the preset synchronizes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// rsync flags, in the order they are passed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
    /// Source path or URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    /// Destination path or URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    destination: Option<String>,
}

impl Preset {
    /// Create a preset with only its name populated
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            options: None,
            source: None,
            destination: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the description for this preset
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Sets the rsync options for this preset, replacing any previous ones
    pub fn set_options<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
    }

    /// Sets the source for this preset
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = Some(source.into());
    }

    /// Sets the destination for this preset
    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = Some(destination.into());
    }

    /// Returns the description, or `UnsetField` if it was never set
    pub fn get_description(&self) -> PresetResult<&str> {
        self.require(PresetField::Description, self.description.as_deref())
    }

    /// Returns the rsync options, or `UnsetField` if they were never set
    pub fn get_options(&self) -> PresetResult<&[String]> {
        self.require(PresetField::Options, self.options.as_deref())
    }

    /// Returns the source, or `UnsetField` if it was never set
    pub fn get_source(&self) -> PresetResult<&str> {
        self.require(PresetField::Source, self.source.as_deref())
    }

    /// Returns the destination, or `UnsetField` if it was never set
    pub fn get_destination(&self) -> PresetResult<&str> {
        self.require(PresetField::Destination, self.destination.as_deref())
    }

    fn require<'a, T: ?Sized>(
        &self,
        field: PresetField,
        value: Option<&'a T>,
    ) -> PresetResult<&'a T> {
        value.ok_or_else(|| PresetError::unset(&self.name, field))
    }

    /// Whether a value has been stored for `field`
    pub fn is_set(&self, field: PresetField) -> bool {
        match field {
            PresetField::Description => self.description.is_some(),
            PresetField::Options => self.options.is_some(),
            PresetField::Source => self.source.is_some(),
            PresetField::Destination => self.destination.is_some(),
        }
    }

    /// Fields that have not been set yet
    pub fn missing_fields(&self) -> Vec<PresetField> {
        PresetField::ALL
            .into_iter()
            .filter(|field| !self.is_set(*field))
            .collect()
    }

    /// Whether every field has been set
    pub fn is_complete(&self) -> bool {
        PresetField::ALL.iter().all(|field| self.is_set(*field))
    }
}

/// Renders the name followed by whichever fields are set, e.g.
/// `backup-home (options=["-a", "-z"], source="/home/user")`.
impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;

        let mut parts = Vec::new();
        if let Some(description) = &self.description {
            parts.push(format!("description={:?}", description));
        }
        if let Some(options) = &self.options {
            parts.push(format!("options={:?}", options));
        }
        if let Some(source) = &self.source {
            parts.push(format!("source={:?}", source));
        }
        if let Some(destination) = &self.destination {
            parts.push(format!("destination={:?}", destination));
        }

        if !parts.is_empty() {
            write!(f, " ({})", parts.join(", "))?;
        }
        Ok(())
    }
}
