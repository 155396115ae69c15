use thiserror::Error;

use crate::preset::PresetField;

/// Errors raised by presets and preset collections
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    #[error("Preset '{preset}' has no {field} set")]
    UnsetField { preset: String, field: PresetField },

    #[error("Preset '{preset}' has an empty {field} argument")]
    EmptyArgument { preset: String, field: PresetField },

    #[error("Preset not found: {name}")]
    PresetNotFound { name: String },

    #[error("Invalid sync configuration: {0}")]
    Config(#[from] ConfigError),
}

impl PresetError {
    /// Create an UnsetField error for the given preset name and field
    pub fn unset(preset: &str, field: PresetField) -> Self {
        PresetError::UnsetField {
            preset: preset.to_string(),
            field,
        }
    }

    /// Whether this error reports a field read before it was set
    pub fn is_unset_field(&self) -> bool {
        matches!(self, PresetError::UnsetField { .. })
    }
}

/// Sync configuration specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rsync program cannot be empty")]
    EmptyProgram,

    #[error("default option at index {index} is empty")]
    EmptyOption { index: usize },
}

/// Result type aliases for convenience
pub type PresetResult<T> = Result<T, PresetError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
