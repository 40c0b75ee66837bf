//! Backup operations
//!
//! Backups are plain copies stored in the configured backup directory as
//! `<basename><suffix>_<timestamp>`. The timestamp keeps earlier backups
//! from being overwritten and makes the lexicographically greatest name
//! the most recent one.

use chrono::Local;
use log::info;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::BackupConfig;
use crate::error::BackupError;

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

fn base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

fn backup_prefix(path: &str, config: &BackupConfig) -> String {
    format!("{}{}", base_name(path), config.suffix)
}

/// Creates a timestamped backup copy of `path`, returning the backup path
pub fn backup_file(path: &str, config: &BackupConfig) -> Result<PathBuf, BackupError> {
    fs::create_dir_all(&config.directory)?;

    let timestamp = Local::now().format(TIMESTAMP_FORMAT);
    let backup_name = format!("{}_{}", backup_prefix(path, config), timestamp);

    // The timestamp has second granularity; a counter suffix keeps a second
    // backup within the same second from overwriting the first
    let mut backup_path = Path::new(&config.directory).join(&backup_name);
    let mut counter = 1;
    while backup_path.exists() {
        backup_path = Path::new(&config.directory).join(format!("{}_{}", backup_name, counter));
        counter += 1;
    }

    fs::copy(path, &backup_path)?;

    info!("Backup of {} created at {}", path, backup_path.display());
    Ok(backup_path)
}

/// Lists existing backup names for `path`, sorted ascending (oldest first)
pub fn list_backups(path: &str, config: &BackupConfig) -> Result<Vec<String>, BackupError> {
    let prefix = backup_prefix(path, config);

    let mut names = Vec::new();
    for entry in fs::read_dir(&config.directory)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with(&prefix) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

/// Restores the latest backup of `path` over the original, returning the
/// backup path that was used
pub fn restore_backup(path: &str, config: &BackupConfig) -> Result<PathBuf, BackupError> {
    let backups = list_backups(path, config)?;
    let latest = backups
        .last()
        .ok_or_else(|| BackupError::NoBackupFound(path.to_string()))?;

    let backup_path = Path::new(&config.directory).join(latest);
    fs::copy(&backup_path, path)?;

    info!("File {} restored from backup at {}", path, backup_path.display());
    Ok(backup_path)
}

/// SHA-256 digest of a file's content, as lowercase hex
pub fn checksum(path: &str) -> Result<String, BackupError> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;

    let digest = hasher.finalize();
    Ok(digest.iter().map(|b| format!("{:02x}", b)).collect())
}

/// Compares the digests of an original and a backup copy; a mismatch
/// means the backup cannot be trusted
pub fn verify_backup(original: &str, backup: &str) -> Result<(), BackupError> {
    if checksum(original)? != checksum(backup)? {
        return Err(BackupError::ChecksumMismatch {
            original: original.to_string(),
            backup: backup.to_string(),
        });
    }
    Ok(())
}
