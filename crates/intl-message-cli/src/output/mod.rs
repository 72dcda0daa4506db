//! Output helpers for CLI commands.

pub mod diagnostic;
pub mod table;
