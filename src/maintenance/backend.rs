//! Volume backend
//!
//! Capability trait over the external OS utilities consumed by the volume
//! maintainer, with a shell-out implementation driven by the configured
//! command templates.

use log::{debug, info};
use std::process::Command;

use crate::config::VolumeConfig;
use crate::error::VolumeError;

/// Platform utilities consumed by the volume maintainer
pub trait VolumeBackend {
    /// Run the volume verification utility
    fn verify(&self, volume: &str) -> Result<(), VolumeError>;

    /// Run the volume repair utility
    fn repair(&self, volume: &str) -> Result<(), VolumeError>;

    /// Recursively grant the configured permission bits under `path`
    fn widen_permissions(&self, path: &str) -> Result<(), VolumeError>;
}

/// Backend that shells out to the configured platform utilities.
///
/// Command templates are split on whitespace; the target path is appended
/// as the final argument.
pub struct ShellBackend {
    verify_command: String,
    repair_command: String,
    widen_mode: String,
}

impl ShellBackend {
    pub fn new(config: &VolumeConfig) -> Self {
        ShellBackend {
            verify_command: config.verify_command.clone(),
            repair_command: config.repair_command.clone(),
            widen_mode: config.widen_mode.clone(),
        }
    }

    fn run(&self, action: &'static str, template: &str, target: &str) -> Result<(), VolumeError> {
        let mut parts = template.split_whitespace();
        let program = parts.next().ok_or(VolumeError::EmptyCommand(action))?;

        debug!("Running {}: {} {}", action, template, target);

        let display = format!("{} {}", template, target);
        let status = Command::new(program)
            .args(parts)
            .arg(target)
            .status()
            .map_err(|e| VolumeError::SpawnFailed(display.clone(), e))?;

        if status.success() {
            info!("{} succeeded for {}", action, target);
            Ok(())
        } else {
            Err(VolumeError::CommandFailed {
                command: display,
                code: status.code(),
            })
        }
    }
}

impl VolumeBackend for ShellBackend {
    fn verify(&self, volume: &str) -> Result<(), VolumeError> {
        self.run("volume verification", &self.verify_command, volume)
    }

    fn repair(&self, volume: &str) -> Result<(), VolumeError> {
        self.run("volume repair", &self.repair_command, volume)
    }

    fn widen_permissions(&self, path: &str) -> Result<(), VolumeError> {
        let template = format!("chmod -R {}", self.widen_mode);
        self.run("permission widening", &template, path)
    }
}
