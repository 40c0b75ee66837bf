//! Error types
//!
//! Defines domain-specific error types for each module of the maintenance tool.

use std::fmt;
use std::io;

/// File operation errors
#[derive(Debug)]
pub enum FileOpError {
    NotFound(String),
    NotADirectory(String),
    NotAFile(String),
    IoError(io::Error),
}

impl fmt::Display for FileOpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOpError::NotFound(p) => write!(f, "No such file or directory: {}", p),
            FileOpError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
            FileOpError::NotAFile(p) => write!(f, "Not a regular file: {}", p),
            FileOpError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for FileOpError {}

impl From<io::Error> for FileOpError {
    fn from(error: io::Error) -> Self {
        FileOpError::IoError(error)
    }
}

/// Volume maintenance errors
#[derive(Debug)]
pub enum VolumeError {
    EmptyCommand(&'static str),
    CommandFailed { command: String, code: Option<i32> },
    SpawnFailed(String, io::Error),
    UnknownMount(String),
}

impl fmt::Display for VolumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolumeError::EmptyCommand(action) => {
                write!(f, "No command configured for {}", action)
            }
            VolumeError::CommandFailed { command, code } => match code {
                Some(code) => write!(f, "Command `{}` exited with status {}", command, code),
                None => write!(f, "Command `{}` terminated by signal", command),
            },
            VolumeError::SpawnFailed(command, e) => {
                write!(f, "Failed to run `{}`: {}", command, e)
            }
            VolumeError::UnknownMount(p) => {
                write!(f, "No mounted filesystem found for: {}", p)
            }
        }
    }
}

impl std::error::Error for VolumeError {}

/// Backup module errors
#[derive(Debug)]
pub enum BackupError {
    NoBackupFound(String),
    ChecksumMismatch { original: String, backup: String },
    IoError(io::Error),
}

impl fmt::Display for BackupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackupError::NoBackupFound(p) => write!(f, "No backup found for: {}", p),
            BackupError::ChecksumMismatch { original, backup } => {
                write!(f, "Checksum mismatch between {} and {}", original, backup)
            }
            BackupError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for BackupError {}

impl From<io::Error> for BackupError {
    fn from(error: io::Error) -> Self {
        BackupError::IoError(error)
    }
}

/// Command-line usage errors, produced before any operation runs
#[derive(Debug, PartialEq)]
pub enum UsageError {
    MissingVerb,
    UnknownVerb(String),
    MissingArguments { verb: String, expected: usize },
    InvalidMode(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::MissingVerb => write!(f, "No operation given"),
            UsageError::UnknownVerb(v) => write!(f, "Unknown operation: {}", v),
            UsageError::MissingArguments { verb, expected } => {
                let noun = if *expected == 1 { "argument" } else { "arguments" };
                write!(f, "Operation {} requires {} {}", verb, expected, noun)
            }
            UsageError::InvalidMode(m) => write!(f, "Invalid octal mode: {}", m),
        }
    }
}

impl std::error::Error for UsageError {}

/// General tool error that encompasses all error types
#[derive(Debug)]
pub enum MaintError {
    FileOp(FileOpError),
    Volume(VolumeError),
    Backup(BackupError),
    Usage(UsageError),
    Config(config::ConfigError),
}

impl fmt::Display for MaintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintError::FileOp(e) => write!(f, "File operation error: {}", e),
            MaintError::Volume(e) => write!(f, "Volume maintenance error: {}", e),
            MaintError::Backup(e) => write!(f, "Backup error: {}", e),
            MaintError::Usage(e) => write!(f, "Usage error: {}", e),
            MaintError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for MaintError {}

impl From<FileOpError> for MaintError {
    fn from(error: FileOpError) -> Self {
        MaintError::FileOp(error)
    }
}

impl From<VolumeError> for MaintError {
    fn from(error: VolumeError) -> Self {
        MaintError::Volume(error)
    }
}

impl From<BackupError> for MaintError {
    fn from(error: BackupError) -> Self {
        MaintError::Backup(error)
    }
}

impl From<UsageError> for MaintError {
    fn from(error: UsageError) -> Self {
        MaintError::Usage(error)
    }
}

impl From<config::ConfigError> for MaintError {
    fn from(error: config::ConfigError) -> Self {
        MaintError::Config(error)
    }
}
