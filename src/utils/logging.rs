//! Logging utilities
//!
//! Provides logging setup and configuration.

/// Setup logging for the tool (env_logger picks up RUST_LOG; errors are
/// shown by default)
pub fn setup_logging() {
    env_logger::init();
}
