//! Volume maintainer
//!
//! Coarse-grained maintenance actions against a named volume: integrity
//! check with automatic repair, recursive permission widening, and free
//! space reporting.

use log::error;
use std::fs;
use std::path::PathBuf;
use sysinfo::Disks;

use crate::error::VolumeError;
use crate::maintenance::backend::VolumeBackend;

pub struct VolumeMaintainer<B: VolumeBackend> {
    backend: B,
}

impl<B: VolumeBackend> VolumeMaintainer<B> {
    pub fn new(backend: B) -> Self {
        VolumeMaintainer { backend }
    }

    /// Verifies volume integrity, repairing automatically when the check
    /// reports a failure.
    pub fn check_integrity(&self, volume: &str) -> Result<(), VolumeError> {
        match self.backend.verify(volume) {
            Ok(()) => Ok(()),
            Err(e) => {
                error!("Integrity check failed for {}: {}", volume, e);
                self.repair(volume)
            }
        }
    }

    /// Runs the volume repair utility. Irreversible; a failure is always
    /// reported, never swallowed.
    pub fn repair(&self, volume: &str) -> Result<(), VolumeError> {
        self.backend.repair(volume)
    }

    /// Recursively grants the configured permission bits under `path`.
    /// Blunt by design of the underlying utility; never scoped down.
    pub fn widen_permissions(&self, path: &str) -> Result<(), VolumeError> {
        self.backend.widen_permissions(path)
    }

    /// Available space on the filesystem containing `path`, in
    /// integer-truncated megabytes
    pub fn free_space_mb(&self, path: &str) -> Result<u64, VolumeError> {
        let canonical = fs::canonicalize(path).unwrap_or_else(|_| PathBuf::from(path));
        let disks = Disks::new_with_refreshed_list();

        // Deepest mount point containing the path wins
        let mut best: Option<(usize, u64)> = None;
        for disk in disks.list() {
            let mount = disk.mount_point();
            if canonical.starts_with(mount) {
                let depth = mount.components().count();
                if best.is_none_or(|(d, _)| depth >= d) {
                    best = Some((depth, disk.available_space()));
                }
            }
        }

        best.map(|(_, bytes)| bytes / (1024 * 1024))
            .ok_or_else(|| VolumeError::UnknownMount(path.to_string()))
    }

    /// Runs the full maintenance pass in fixed order: integrity check,
    /// permission widening, free space report. Each step runs regardless
    /// of earlier failures.
    pub fn run_all(&self, path: &str) {
        if let Err(e) = self.check_integrity(path) {
            error!("Integrity step failed for {}: {}", path, e);
        }

        if let Err(e) = self.widen_permissions(path) {
            error!("Permission widening failed for {}: {}", path, e);
        }

        match self.free_space_mb(path) {
            Ok(mb) => println!("Free space: {}MB", mb),
            Err(e) => error!("Free space report failed for {}: {}", path, e),
        }
    }
}
