//! File operation result types
//!
//! Defines result structures returned by file operations.

use chrono::{DateTime, Local};
use std::fs::Metadata;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Metadata snapshot of a single filesystem entry
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    pub mode: u32,
    pub modified: Option<DateTime<Local>>,
    pub is_dir: bool,
}

impl FileInfo {
    pub fn from_metadata(path: &str, metadata: &Metadata) -> Self {
        let name = Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string());

        FileInfo {
            name,
            size: metadata.len(),
            mode: metadata.permissions().mode() & 0o7777,
            modified: metadata.modified().ok().map(DateTime::<Local>::from),
            is_dir: metadata.is_dir(),
        }
    }
}
