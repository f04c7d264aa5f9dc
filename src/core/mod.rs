// Public modules
pub mod build;
pub mod config;
pub mod environment;
pub mod error;
pub mod git;
pub mod identity;
pub mod runner;
pub mod toolchain;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
