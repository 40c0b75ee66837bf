//! File operations
//!
//! Elementary one-shot file primitives and their result types.

pub mod operations;
pub mod results;

pub use results::FileInfo;
