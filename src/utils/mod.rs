//! Generic utility primitives with zero domain knowledge.
//!
//! - `command` - Read-only command queries that degrade to `None`
//! - `io` - File I/O with consistent error handling

pub mod command;
pub mod io;
