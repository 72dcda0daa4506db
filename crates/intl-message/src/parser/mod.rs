//! Message template parser.
//!
//! This module turns the lightweight template syntax into the token model
//! consumed by the interpreter. The token model is public so templates can
//! also be built directly, including placeholders the string syntax cannot
//! express (plural, select and gender branches).

pub mod ast;
mod template;

pub use ast::*;
pub use template::{parse_template, unrecognized_spans};
pub(crate) use template::spanned_segments;
