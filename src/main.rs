//! fsmaint - Entry Point
//!
//! A command-line utility for file and volume maintenance: one verb per
//! invocation, dispatched to a file operation or a volume maintenance pass.

use log::debug;
use std::env;
use std::process::ExitCode;

use fsmaint::commands;
use fsmaint::config::ToolConfig;
use fsmaint::error::handlers::{error_to_exit_code, handle_error};
use fsmaint::error::MaintError;
use fsmaint::utils::logging;

fn main() -> ExitCode {
    // env_logger picks up the RUST_LOG environment variable
    logging::setup_logging();

    let args: Vec<String> = env::args().collect();
    ExitCode::from(run(&args) as u8)
}

fn run(args: &[String]) -> i32 {
    let program = args.first().map(String::as_str).unwrap_or("fsmaint");

    let command = match commands::parse_command(args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", commands::usage(program));
            return 1;
        }
    };

    let config = match ToolConfig::load() {
        Ok(config) => config,
        Err(e) => {
            let e = MaintError::from(e);
            handle_error(&e);
            return error_to_exit_code(&e);
        }
    };

    debug!("Dispatching {:?}", command);

    match commands::handle_command(&command, &config) {
        Ok(()) => 0,
        Err(e) => {
            handle_error(&e);
            error_to_exit_code(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_unknown_verb_exits_one() {
        assert_eq!(run(&args(&["fsmaint", "frobnicate", "x"])), 1);
    }

    #[test]
    fn test_missing_arguments_exit_one() {
        assert_eq!(run(&args(&["fsmaint", "rename", "only-one"])), 1);
        assert_eq!(run(&args(&["fsmaint", "create"])), 1);
        assert_eq!(run(&args(&["fsmaint"])), 1);
    }

    #[test]
    fn test_successful_verb_exits_zero() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("ok.txt");
        std::fs::write(&file, b"x").unwrap();
        assert_eq!(
            run(&args(&["fsmaint", "getsize", file.to_str().unwrap()])),
            0
        );
    }

    #[test]
    fn test_failed_single_verb_exits_one() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        assert_eq!(
            run(&args(&["fsmaint", "getsize", missing.to_str().unwrap()])),
            1
        );
    }
}
