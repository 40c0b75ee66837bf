//! Command dispatch
//!
//! Parses the command-line verb into a typed command and routes it to the
//! matching handler.

pub mod handlers;
pub mod parser;

pub use handlers::handle_command;
pub use parser::{Command, parse_command, usage};
