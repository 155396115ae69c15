//! Sync configuration shared by every preset.
//!
//! Holds the rsync executable to call and the options prepended to each
//! preset's own options when a command is built.

use crate::errors::{ConfigError, ConfigResult};

/// Default rsync executable, resolved through `PATH`
pub const DEFAULT_PROGRAM: &str = "rsync";

/// Configuration applied when turning presets into rsync commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub program: String,
    pub default_options: Vec<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncConfig {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            default_options: Vec::new(),
        }
    }

    /// Use a different rsync executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Options passed before every preset's own options
    pub fn with_default_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Validate sync configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.program.trim().is_empty() {
            return Err(ConfigError::EmptyProgram);
        }

        if let Some(index) = self.default_options.iter().position(|o| o.is_empty()) {
            return Err(ConfigError::EmptyOption { index });
        }

        Ok(())
    }
}
