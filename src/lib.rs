pub mod backup;
pub mod commands;
pub mod config;
pub mod error;
pub mod fileops;
pub mod maintenance;
pub mod utils;

pub use config::ToolConfig;
