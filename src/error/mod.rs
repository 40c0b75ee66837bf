//! Error handling
//!
//! Defines error types and handling for the maintenance tool.

pub mod handlers;
pub mod types;

pub use types::*;
