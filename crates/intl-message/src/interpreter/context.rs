//! Evaluation context for tracking state during recursive evaluation.

use std::collections::HashMap;

use icu_locale_core::Locale;

use crate::interpreter::error::{FormatError, compute_suggestions};
use crate::interpreter::{FormatterRegistry, PluralRules};
use crate::types::Value;

/// The value bag passed to `format`: placeholder names mapped to values.
pub type Values = HashMap<String, Value>;

/// The placeholder name that renders the offset-adjusted plural number.
pub const NUMBER_TOKEN: &str = "#";

/// Evaluation context carrying state through recursive evaluation.
///
/// The context tracks:
/// - The value bag, if one was supplied
/// - The locale and the collaborators that depend on it
/// - A stack of offset-adjusted numbers bound to `#` by enclosing plural
///   branches
pub struct EvalContext<'a> {
    values: Option<&'a Values>,
    locale: &'a Locale,
    formatters: &'a FormatterRegistry,
    plural_rules: &'a dyn PluralRules,
    /// Innermost plural number last.
    numbers: Vec<Value>,
}

impl<'a> EvalContext<'a> {
    /// Create a new context.
    pub fn new(
        values: Option<&'a Values>,
        locale: &'a Locale,
        formatters: &'a FormatterRegistry,
        plural_rules: &'a dyn PluralRules,
    ) -> Self {
        Self {
            values,
            locale,
            formatters,
            plural_rules,
            numbers: Vec::new(),
        }
    }

    pub fn locale(&self) -> &Locale {
        self.locale
    }

    pub fn formatters(&self) -> &FormatterRegistry {
        self.formatters
    }

    pub fn plural_rules(&self) -> &dyn PluralRules {
        self.plural_rules
    }

    /// Get a value without reporting why it is missing.
    ///
    /// `#` resolves to the innermost plural number when one is bound.
    pub fn value(&self, name: &str) -> Option<&Value> {
        if name == NUMBER_TOKEN
            && let Some(number) = self.numbers.last()
        {
            return Some(number);
        }
        self.values.and_then(|values| values.get(name))
    }

    /// Look up a value, failing with the matching error kind.
    pub fn lookup(&self, name: &str) -> Result<Value, FormatError> {
        if let Some(value) = self.value(name) {
            return Ok(value.clone());
        }
        let Some(values) = self.values else {
            return Err(FormatError::ValueBagMissing {
                name: name.to_string(),
            });
        };
        let available: Vec<String> = values.keys().cloned().collect();
        Err(FormatError::ValueNameNotFound {
            name: name.to_string(),
            suggestions: compute_suggestions(name, &available),
        })
    }

    /// Bind `#` to a plural number for the duration of a branch.
    pub fn push_number(&mut self, number: Value) {
        self.numbers.push(number);
    }

    /// Release the number bound by the matching `push_number`.
    pub fn pop_number(&mut self) {
        self.numbers.pop();
    }
}
