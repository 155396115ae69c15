//! rsync command generation from presets.
//!
//! [`RsyncCommand`] turns a fully configured [`Preset`] into the argument
//! vector rsync expects. Building never spawns a process; callers decide
//! whether and how to run the resulting [`Command`].

use std::fmt;
use std::process::Command;
use tracing::debug;

use crate::config::SyncConfig;
use crate::errors::{PresetError, PresetResult};
use crate::preset::{Preset, PresetField};

/// Built and validated rsync command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsyncCommand {
    preset: String,
    program: String,
    options: Vec<String>,
    source: String,
    destination: String,
}

impl RsyncCommand {
    /// Build the command for `preset`.
    ///
    /// Options, source and destination must all be set; the first unset one
    /// is reported as `UnsetField`. An empty option, source or destination
    /// string is reported as `EmptyArgument`. The description is not needed.
    pub fn from_preset(preset: &Preset, config: &SyncConfig) -> PresetResult<Self> {
        config.validate()?;

        let preset_options = preset.get_options()?;
        if preset_options.iter().any(|o| o.is_empty()) {
            return Err(empty_argument(preset, PresetField::Options));
        }
        let source = non_empty(preset, PresetField::Source, preset.get_source()?)?;
        let destination = non_empty(
            preset,
            PresetField::Destination,
            preset.get_destination()?,
        )?;

        let mut options = config.default_options.clone();
        options.extend(preset_options.iter().cloned());

        debug!(
            "Built rsync command for preset '{}' with {} options",
            preset.name(),
            options.len()
        );

        Ok(Self {
            preset: preset.name().to_string(),
            program: config.program.clone(),
            options,
            source,
            destination,
        })
    }

    /// Name of the preset this command was built from
    pub fn preset_name(&self) -> &str {
        &self.preset
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program: options, then source, then destination
    pub fn to_args(&self) -> Vec<String> {
        let mut args = self.options.clone();
        args.push(self.source.clone());
        args.push(self.destination.clone());
        args
    }

    /// Convert to a system command without running it
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.to_args());
        cmd
    }
}

fn empty_argument(preset: &Preset, field: PresetField) -> PresetError {
    PresetError::EmptyArgument {
        preset: preset.name().to_string(),
        field,
    }
}

fn non_empty(preset: &Preset, field: PresetField, value: &str) -> PresetResult<String> {
    if value.is_empty() {
        return Err(empty_argument(preset, field));
    }
    Ok(value.to_string())
}

/// Characters a shell passes through unchanged outside of quotes
fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '_' | '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-'
        )
}

/// Quote an argument for display when a shell would split or reinterpret it
fn shell_quote(arg: &str) -> String {
    let needs_quotes = arg.is_empty() || !arg.chars().all(is_shell_safe);

    if needs_quotes {
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        arg.to_string()
    }
}

impl fmt::Display for RsyncCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in self.to_args() {
            write!(f, " {}", shell_quote(&arg))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;

    fn backup_home() -> Preset {
        let mut preset = Preset::new("backup-home");
        preset.set_options(["-a", "-z"]);
        preset.set_source("/home/user");
        preset.set_destination("remote:/backup/home");
        preset
    }

    #[test]
    fn test_basic_command() {
        let cmd = RsyncCommand::from_preset(&backup_home(), &SyncConfig::default()).unwrap();

        assert_eq!(cmd.program(), "rsync");
        assert_eq!(cmd.preset_name(), "backup-home");
        assert_eq!(
            cmd.to_args(),
            ["-a", "-z", "/home/user", "remote:/backup/home"]
        );
        assert_eq!(cmd.to_string(), "rsync -a -z /home/user remote:/backup/home");
    }

    #[test]
    fn test_default_options_come_first() {
        let config = SyncConfig::new()
            .with_program("/opt/bin/rsync")
            .with_default_options(["--progress"]);
        let cmd = RsyncCommand::from_preset(&backup_home(), &config).unwrap();

        assert_eq!(
            cmd.to_args(),
            ["--progress", "-a", "-z", "/home/user", "remote:/backup/home"]
        );

        let command = cmd.to_command();
        assert_eq!(command.get_program(), "/opt/bin/rsync");
        assert_eq!(command.get_args().count(), 5);
    }

    #[test]
    fn test_unset_field_propagates() {
        let mut preset = Preset::new("incomplete");
        preset.set_options(["-a"]);
        preset.set_source("/home/user");

        let err = RsyncCommand::from_preset(&preset, &SyncConfig::default()).unwrap_err();
        assert_eq!(
            err,
            PresetError::unset("incomplete", PresetField::Destination)
        );
    }

    #[test]
    fn test_empty_options_are_allowed() {
        let mut preset = backup_home();
        preset.set_options(Vec::<String>::new());

        let cmd = RsyncCommand::from_preset(&preset, &SyncConfig::default()).unwrap();
        assert_eq!(cmd.to_args(), ["/home/user", "remote:/backup/home"]);
    }

    #[test]
    fn test_empty_option_rejected() {
        let mut preset = backup_home();
        preset.set_options(["-a", ""]);

        let err = RsyncCommand::from_preset(&preset, &SyncConfig::default()).unwrap_err();
        assert_eq!(
            err,
            PresetError::EmptyArgument {
                preset: "backup-home".to_string(),
                field: PresetField::Options,
            }
        );
    }

    #[test]
    fn test_empty_source_and_destination_rejected() {
        let mut preset = backup_home();
        preset.set_source("");

        let err = RsyncCommand::from_preset(&preset, &SyncConfig::default()).unwrap_err();
        assert_eq!(
            err,
            PresetError::EmptyArgument {
                preset: "backup-home".to_string(),
                field: PresetField::Source,
            }
        );

        let mut preset = backup_home();
        preset.set_destination("");

        let err = RsyncCommand::from_preset(&preset, &SyncConfig::default()).unwrap_err();
        assert_eq!(
            err,
            PresetError::EmptyArgument {
                preset: "backup-home".to_string(),
                field: PresetField::Destination,
            }
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SyncConfig::new().with_program("");
        let err = RsyncCommand::from_preset(&backup_home(), &config).unwrap_err();
        assert_eq!(err, PresetError::Config(ConfigError::EmptyProgram));
    }

    #[test]
    fn test_display_quotes_arguments() {
        let mut preset = backup_home();
        preset.set_options(["--exclude", "*.tmp files", "--rsh=ssh -p 2222"]);
        preset.set_source("/home/user/it's mine");

        let cmd = RsyncCommand::from_preset(&preset, &SyncConfig::default()).unwrap();
        assert_eq!(
            cmd.to_string(),
            r"rsync --exclude '*.tmp files' '--rsh=ssh -p 2222' '/home/user/it'\''s mine' remote:/backup/home"
        );
    }

    #[test]
    fn test_display_quotes_shell_metacharacters() {
        let mut preset = backup_home();
        preset.set_options(["-a", "--exclude=*.tmp", "--filter=- [abc]?"]);
        preset.set_source("/a&b|c>d");
        preset.set_destination("~/backup;#1");

        let cmd = RsyncCommand::from_preset(&preset, &SyncConfig::default()).unwrap();
        assert_eq!(
            cmd.to_string(),
            "rsync -a '--exclude=*.tmp' '--filter=- [abc]?' '/a&b|c>d' '~/backup;#1'"
        );
    }
}
