//! Configuration management for the maintenance tool
//!
//! Values come from built-in platform defaults, overridden by an optional
//! fsmaint.toml and FSMAINT-prefixed environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;

#[cfg(target_os = "macos")]
const DEFAULT_VERIFY_COMMAND: &str = "diskutil verifyVolume";
#[cfg(target_os = "macos")]
const DEFAULT_REPAIR_COMMAND: &str = "diskutil repairVolume";

#[cfg(not(target_os = "macos"))]
const DEFAULT_VERIFY_COMMAND: &str = "fsck -n";
#[cfg(not(target_os = "macos"))]
const DEFAULT_REPAIR_COMMAND: &str = "fsck -y";

/// Complete tool configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ToolConfig {
    pub volume: VolumeConfig,
    pub backup: BackupConfig,
}

/// Volume maintenance settings
#[derive(Debug, Deserialize, Clone)]
pub struct VolumeConfig {
    /// Command prefix for the volume verification utility; the volume path
    /// is appended as the final argument
    pub verify_command: String,

    /// Command prefix for the volume repair utility
    pub repair_command: String,

    /// Octal permission bits applied recursively by the widen step
    pub widen_mode: String,
}

/// Backup settings
#[derive(Debug, Deserialize, Clone)]
pub struct BackupConfig {
    /// Directory where backup copies are stored
    pub directory: String,

    /// Suffix inserted between the base name and the timestamp
    pub suffix: String,
}

impl ToolConfig {
    /// Load configuration with environment overrides.
    ///
    /// fsmaint.toml is optional; a missing file falls back to the built-in
    /// defaults so the tool works out of the box.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("volume.verify_command", DEFAULT_VERIFY_COMMAND)?
            .set_default("volume.repair_command", DEFAULT_REPAIR_COMMAND)?
            .set_default("volume.widen_mode", "777")?
            .set_default("backup.directory", "backups")?
            .set_default("backup.suffix", "_backup")?
            .add_source(File::with_name("fsmaint").required(false))
            .add_source(Environment::with_prefix("FSMAINT").separator("__"))
            .build()?;

        let config: ToolConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.volume.verify_command.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "volume.verify_command cannot be empty".into(),
            ));
        }

        if self.volume.repair_command.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "volume.repair_command cannot be empty".into(),
            ));
        }

        match u32::from_str_radix(&self.volume.widen_mode, 8) {
            Ok(mode) if mode <= 0o7777 => {}
            _ => {
                return Err(config::ConfigError::Message(format!(
                    "volume.widen_mode is not a valid octal mode: {}",
                    self.volume.widen_mode
                )));
            }
        }

        if self.backup.directory.is_empty() {
            return Err(config::ConfigError::Message(
                "backup.directory cannot be empty".into(),
            ));
        }

        if self.backup.suffix.is_empty() {
            return Err(config::ConfigError::Message(
                "backup.suffix cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

impl VolumeConfig {
    /// Widen mode as permission bits
    pub fn widen_mode_bits(&self) -> u32 {
        // validate() guarantees this parses
        u32::from_str_radix(&self.widen_mode, 8).unwrap_or(0o777)
    }
}
