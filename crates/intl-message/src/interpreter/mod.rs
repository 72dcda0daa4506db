//! Message interpreter.
//!
//! This module provides the evaluation engine that takes parsed templates
//! and produces formatted strings. It resolves placeholders against a value
//! bag, selects plural, select and gender branches, and applies formatters.

mod context;
mod error;
mod evaluator;
mod formatters;
mod message;
mod plural;
mod selector;

pub use context::{EvalContext, NUMBER_TOKEN, Values};
pub use error::{FormatError, MessageError, compute_suggestions};
pub use evaluator::{eval_template, substitute_lenient};
pub use formatters::FormatterRegistry;
pub use message::Message;
pub use plural::{CldrPluralRules, PluralRules, plural_category};
pub use selector::{Selection, select_branch};
