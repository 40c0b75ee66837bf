//! Utilities
//!
//! Shared helpers for the maintenance tool.

pub mod logging;
