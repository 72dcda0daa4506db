//! CLI command implementations.

mod check;
mod format;
mod plural;

pub use check::{run_check, CheckArgs};
pub use format::{run_format, FormatArgs};
pub use plural::{run_plural, PluralArgs};
