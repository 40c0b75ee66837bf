//! File backups
//!
//! Handles timestamped backup copies, restore, and checksum verification.

pub mod operations;

pub use operations::{backup_file, checksum, list_backups, restore_backup, verify_backup};
