//! Error handlers
//!
//! Maps errors to process exit codes and reports them.

use crate::error::types::MaintError;
use log::error;

/// Report a tool error on the error stream
pub fn handle_error(err: &MaintError) {
    error!("{}", err);
}

/// Convert an error to the process exit code
pub fn error_to_exit_code(err: &MaintError) -> i32 {
    match err {
        // Usage and configuration problems, and failed single-verb
        // operations, all surface as exit status 1.
        MaintError::Usage(_) => 1,
        MaintError::Config(_) => 1,
        MaintError::FileOp(_) => 1,
        MaintError::Volume(_) => 1,
        MaintError::Backup(_) => 1,
    }
}
