//! Volume maintenance
//!
//! Handles volume integrity checks, repair, permission widening, and free
//! space reporting.

pub mod backend;
pub mod volume;

pub use backend::{ShellBackend, VolumeBackend};
pub use volume::VolumeMaintainer;
