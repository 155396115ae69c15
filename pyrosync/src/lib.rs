//! Saved rsync synchronizations for PyroSync.
//!
//! A [`Preset`] names one synchronization: a description, the rsync options
//! to use, a source and a destination. Presets are created with a name and
//! filled in afterwards; reading a field that was never set is an error
//! rather than an empty default.
//!
//! # Key Components
//!
//! * [`Preset`] - A named synchronization with independently set fields
//! * [`PresetField`] - The fields a preset can be missing
//! * [`PresetList`] - Ordered in-memory collection of presets keyed by name
//! * [`SyncConfig`] - The rsync executable and options shared by all presets
//! * [`RsyncCommand`] - The rsync invocation a preset describes, never run here
//!
//! # Example
//!
//! ```
//! use pyrosync::{Preset, RsyncCommand, SyncConfig};
//!
//! let mut preset = Preset::new("backup-home");
//! preset.set_source("/home/user");
//! preset.set_destination("remote:/backup/home");
//! preset.set_options(["-a", "-z"]);
//!
//! assert!(preset.get_description().is_err());
//!
//! let cmd = RsyncCommand::from_preset(&preset, &SyncConfig::default()).unwrap();
//! assert_eq!(cmd.to_string(), "rsync -a -z /home/user remote:/backup/home");
//! ```

pub mod command;
pub mod config;
pub mod errors;
pub mod preset;
pub mod presets;

pub use command::RsyncCommand;
pub use config::SyncConfig;
pub use errors::{ConfigError, ConfigResult, PresetError, PresetResult};
pub use preset::{Preset, PresetField};
pub use presets::PresetList;
