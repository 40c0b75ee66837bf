//! File operation primitives
//!
//! Each function maps to a single underlying filesystem call. Operations are
//! synchronous and one-shot; handles are released before the function returns.

use log::info;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::error::FileOpError;
use crate::fileops::results::FileInfo;

fn map_open_error(path: &str, error: io::Error) -> FileOpError {
    if error.kind() == io::ErrorKind::NotFound {
        FileOpError::NotFound(path.to_string())
    } else {
        FileOpError::IoError(error)
    }
}

/// Creates an empty file, truncating any existing content
pub fn create_file(path: &str) -> Result<(), FileOpError> {
    File::create(path)?;
    info!("Created file {}", path);
    Ok(())
}

/// Deletes a file
pub fn delete_file(path: &str) -> Result<(), FileOpError> {
    fs::remove_file(path).map_err(|e| map_open_error(path, e))?;
    info!("Deleted file {}", path);
    Ok(())
}

/// Renames a file; atomic where the OS supports it
pub fn rename_file(old_path: &str, new_path: &str) -> Result<(), FileOpError> {
    fs::rename(old_path, new_path).map_err(|e| map_open_error(old_path, e))?;
    info!("Renamed {} to {}", old_path, new_path);
    Ok(())
}

/// Moves a file; a rename under the same-filesystem assumption
pub fn move_file(source: &str, destination: &str) -> Result<(), FileOpError> {
    fs::rename(source, destination).map_err(|e| map_open_error(source, e))?;
    info!("Moved {} to {}", source, destination);
    Ok(())
}

/// Copies a file, overwriting the destination if it exists
pub fn copy_file(source: &str, destination: &str) -> Result<(), FileOpError> {
    fs::copy(source, destination).map_err(|e| map_open_error(source, e))?;
    info!("Copied {} to {}", source, destination);
    Ok(())
}

/// Lists the entry names of a directory, sorted lexicographically
pub fn list_directory(path: &str) -> Result<Vec<String>, FileOpError> {
    let dir = Path::new(path);
    if !dir.exists() {
        return Err(FileOpError::NotFound(path.to_string()));
    }
    if !dir.is_dir() {
        return Err(FileOpError::NotADirectory(path.to_string()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        entries.push(entry.file_name().to_string_lossy().to_string());
    }

    // Lexicographic order keeps listings stable across platforms
    entries.sort();

    info!("Listed directory {} - {} entries", path, entries.len());
    Ok(entries)
}

/// Appends raw text to a file, creating it if missing
pub fn append_to_file(path: &str, data: &str) -> Result<(), FileOpError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| map_open_error(path, e))?;
    file.write_all(data.as_bytes())?;
    info!("Appended {} bytes to {}", data.len(), path);
    Ok(())
}

/// Reads a file as an ordered sequence of newline-delimited lines.
///
/// An empty file yields `Ok` with no lines; an unreadable file is an error.
/// The two cases are deliberately distinct.
pub fn read_lines(path: &str) -> Result<Vec<String>, FileOpError> {
    let file = File::open(path).map_err(|e| map_open_error(path, e))?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}

/// Returns the size of a regular file in bytes.
///
/// A zero-byte file yields `Ok(0)`; a missing path or a directory is an
/// error, never a zero.
pub fn file_size(path: &str) -> Result<u64, FileOpError> {
    let metadata = fs::metadata(path).map_err(|e| map_open_error(path, e))?;
    if metadata.is_dir() {
        return Err(FileOpError::NotAFile(path.to_string()));
    }
    Ok(metadata.len())
}

/// Creates a directory and any missing parents
pub fn create_directory(path: &str) -> Result<(), FileOpError> {
    fs::create_dir_all(path)?;
    info!("Created directory {}", path);
    Ok(())
}

/// Removes a directory tree
pub fn remove_directory(path: &str) -> Result<(), FileOpError> {
    let dir = Path::new(path);
    if !dir.exists() {
        return Err(FileOpError::NotFound(path.to_string()));
    }
    if !dir.is_dir() {
        return Err(FileOpError::NotADirectory(path.to_string()));
    }
    fs::remove_dir_all(dir)?;
    info!("Removed directory {}", path);
    Ok(())
}

/// Fetches the metadata of a file or directory
pub fn file_info(path: &str) -> Result<FileInfo, FileOpError> {
    let metadata = fs::metadata(path).map_err(|e| map_open_error(path, e))?;
    Ok(FileInfo::from_metadata(path, &metadata))
}

/// Returns the permission bits of a single entry
pub fn permissions(path: &str) -> Result<u32, FileOpError> {
    let metadata = fs::metadata(path).map_err(|e| map_open_error(path, e))?;
    Ok(metadata.permissions().mode() & 0o7777)
}

/// Sets the permission bits of a single entry (non-recursive)
pub fn set_permissions(path: &str, mode: u32) -> Result<(), FileOpError> {
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .map_err(|e| map_open_error(path, e))?;
    info!("Set permissions of {} to {:o}", path, mode);
    Ok(())
}
