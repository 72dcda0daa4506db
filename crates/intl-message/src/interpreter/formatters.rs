//! Formatter registry for plain placeholder values.
//!
//! Formatters are functions that turn a raw bound value into text (e.g.
//! `${name:upper}`). The registry has two tiers: caller-supplied custom
//! formatters take precedence over the base set. An unknown name is not an
//! error; the raw value is substituted unchanged.

use std::collections::HashMap;

use icu_casemap::CaseMapper;
use icu_locale_core::Locale;
use unicode_segmentation::UnicodeSegmentation;

use crate::parser::FormatterFn;
use crate::types::Value;

/// Registry for formatter functions.
///
/// # Example
///
/// ```
/// use intl_message::{FormatterRegistry, Locale, Value};
///
/// let registry = FormatterRegistry::new().with("twice", |value, _| format!("{value}{value}"));
/// let twice = registry.get("twice").unwrap();
///
/// let en: Locale = "en".parse().unwrap();
/// assert_eq!(twice(&Value::from("ab"), &en), "abab");
/// assert!(registry.get("upper").is_some());
/// assert!(registry.get("missing").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct FormatterRegistry {
    /// Formatters available to every message (`upper`, `lower`, `cap`, `number`).
    base: HashMap<String, FormatterFn>,
    /// Caller-supplied formatters, consulted before the base set.
    custom: HashMap<String, FormatterFn>,
}

impl FormatterRegistry {
    /// Create a registry holding the base formatters and no custom ones.
    pub fn new() -> Self {
        let base: [(&str, FormatterFn); 4] = [
            ("upper", upper),
            ("lower", lower),
            ("cap", cap),
            ("number", number),
        ];
        Self {
            base: base
                .into_iter()
                .map(|(name, f)| (name.to_string(), f))
                .collect(),
            custom: HashMap::new(),
        }
    }

    /// Create a registry with no formatters at all.
    pub fn empty() -> Self {
        Self {
            base: HashMap::new(),
            custom: HashMap::new(),
        }
    }

    /// Add a custom formatter, returning the updated registry.
    pub fn with(mut self, name: impl Into<String>, f: FormatterFn) -> Self {
        self.register(name, f);
        self
    }

    /// Register a custom formatter, replacing any custom one with that name.
    pub fn register(&mut self, name: impl Into<String>, f: FormatterFn) {
        self.custom.insert(name.into(), f);
    }

    /// Register a base formatter, replacing any base one with that name.
    pub fn register_base(&mut self, name: impl Into<String>, f: FormatterFn) {
        self.base.insert(name.into(), f);
    }

    /// Get a formatter by name.
    ///
    /// Checks custom formatters first, then falls back to the base set.
    pub fn get(&self, name: &str) -> Option<FormatterFn> {
        // Custom takes precedence
        if let Some(f) = self.custom.get(name) {
            return Some(*f);
        }
        // Fall back to base
        self.base.get(name).copied()
    }

    /// Check if a formatter exists under `name`.
    pub fn has_formatter(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Resolve the formatter for a plain placeholder.
    ///
    /// An inline formatter always wins; otherwise the name is looked up.
    pub fn resolve(&self, inline: Option<FormatterFn>, name: Option<&str>) -> Option<FormatterFn> {
        inline.or_else(|| name.and_then(|name| self.get(name)))
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Uppercase the value's text using the locale's case mapping.
fn upper(value: &Value, locale: &Locale) -> String {
    CaseMapper::new()
        .uppercase_to_string(&value.to_string(), &locale.id)
        .to_string()
}

/// Lowercase the value's text using the locale's case mapping.
fn lower(value: &Value, locale: &Locale) -> String {
    CaseMapper::new()
        .lowercase_to_string(&value.to_string(), &locale.id)
        .to_string()
}

/// Uppercase the first grapheme of the value's text.
fn cap(value: &Value, locale: &Locale) -> String {
    let text = value.to_string();
    let mut graphemes = text.graphemes(true);
    let Some(first) = graphemes.next() else {
        return text;
    };
    let mut result = CaseMapper::new()
        .uppercase_to_string(first, &locale.id)
        .to_string();
    result.push_str(graphemes.as_str());
    result
}

/// Render numbers and numeric strings as plain numbers (`"010"` -> `10`).
fn number(value: &Value, _locale: &Locale) -> String {
    value.to_numeric().unwrap_or_else(|| value.clone()).to_string()
}
