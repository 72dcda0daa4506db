//! Token model for parsed messages.
//!
//! A [`Template`] is an ordered list of literal and placeholder segments.
//! Branching placeholders (plural, select, gender) own a nested template per
//! branch key, so a message is a tree evaluated by recursion.

use std::collections::BTreeMap;

use icu_locale_core::Locale;

use crate::parser::template::{normalize_parts, parse_template};
use crate::types::Value;

/// Transformer applied to the raw value of a plain placeholder.
///
/// Receives the value exactly as bound in the value bag and the message
/// locale, and returns the text to substitute.
pub type FormatterFn = fn(&Value, &Locale) -> String;

/// Branch templates of a plural, select or gender placeholder, keyed by
/// category tag or select key.
pub type Branches = BTreeMap<String, Template>;

/// The branch key every selecting placeholder must define.
pub const OTHER: &str = "other";

/// A parsed message: literal text interleaved with placeholders.
#[derive(Debug, Clone, Default)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// Returns true if the template has no segments at all.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over the top-level placeholders.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(p) => Some(p),
            Segment::Literal(_) => None,
        })
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        parse_template(source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        parse_template(&source)
    }
}

impl From<Vec<Part>> for Template {
    fn from(parts: Vec<Part>) -> Self {
        normalize_parts(parts)
    }
}

impl FromIterator<Part> for Template {
    fn from_iter<T: IntoIterator<Item = Part>>(iter: T) -> Self {
        normalize_parts(iter.into_iter().collect())
    }
}

/// A segment within a template.
#[derive(Debug, Clone)]
pub enum Segment {
    /// Literal text, copied to the output verbatim.
    Literal(String),
    /// A dynamic slot resolved against the value bag.
    Placeholder(Placeholder),
}

/// A dynamic slot in a template.
#[derive(Debug, Clone)]
pub struct Placeholder {
    /// Key looked up in the value bag. Matched exactly.
    pub value_name: String,
    pub kind: PlaceholderKind,
}

/// How a placeholder turns its bound value into text.
#[derive(Debug, Clone)]
pub enum PlaceholderKind {
    /// Substitutes the value, optionally through a formatter.
    Plain {
        formatter_name: Option<String>,
        /// Inline formatter; takes precedence over `formatter_name`.
        formatter: Option<FormatterFn>,
    },
    /// Chooses a branch by the plural category of `value - offset`.
    Plural { offset: i64, options: Branches },
    /// Chooses a branch by using the value itself as the key.
    Select { options: Branches },
    /// Same selection as `Select`, keyed by grammatical gender.
    Gender { options: Branches },
}

impl Placeholder {
    /// A plain placeholder substituting the value unchanged.
    pub fn plain(value_name: impl Into<String>) -> Self {
        Self {
            value_name: value_name.into(),
            kind: PlaceholderKind::Plain {
                formatter_name: None,
                formatter: None,
            },
        }
    }

    /// A plural placeholder without an offset.
    pub fn plural<K, T>(
        value_name: impl Into<String>,
        options: impl IntoIterator<Item = (K, T)>,
    ) -> Self
    where
        K: Into<String>,
        T: Into<Template>,
    {
        Self::plural_with_offset(value_name, 0, options)
    }

    /// A plural placeholder whose category is computed on `value - offset`.
    pub fn plural_with_offset<K, T>(
        value_name: impl Into<String>,
        offset: i64,
        options: impl IntoIterator<Item = (K, T)>,
    ) -> Self
    where
        K: Into<String>,
        T: Into<Template>,
    {
        Self {
            value_name: value_name.into(),
            kind: PlaceholderKind::Plural {
                offset,
                options: branches(options),
            },
        }
    }

    /// A select placeholder.
    pub fn select<K, T>(
        value_name: impl Into<String>,
        options: impl IntoIterator<Item = (K, T)>,
    ) -> Self
    where
        K: Into<String>,
        T: Into<Template>,
    {
        Self {
            value_name: value_name.into(),
            kind: PlaceholderKind::Select {
                options: branches(options),
            },
        }
    }

    /// A gender placeholder.
    pub fn gender<K, T>(
        value_name: impl Into<String>,
        options: impl IntoIterator<Item = (K, T)>,
    ) -> Self
    where
        K: Into<String>,
        T: Into<Template>,
    {
        Self {
            value_name: value_name.into(),
            kind: PlaceholderKind::Gender {
                options: branches(options),
            },
        }
    }

    /// Attach a named formatter to a plain placeholder.
    ///
    /// Has no effect on selecting placeholders.
    pub fn with_formatter_name(mut self, name: impl Into<String>) -> Self {
        if let PlaceholderKind::Plain { formatter_name, .. } = &mut self.kind {
            *formatter_name = Some(name.into());
        }
        self
    }

    /// Attach an inline formatter to a plain placeholder.
    ///
    /// Has no effect on selecting placeholders.
    pub fn with_formatter(mut self, f: FormatterFn) -> Self {
        if let PlaceholderKind::Plain { formatter, .. } = &mut self.kind {
            *formatter = Some(f);
        }
        self
    }

    /// The branch map of a selecting placeholder, or `None` for plain ones.
    pub fn options(&self) -> Option<&Branches> {
        match &self.kind {
            PlaceholderKind::Plain { .. } => None,
            PlaceholderKind::Plural { options, .. }
            | PlaceholderKind::Select { options }
            | PlaceholderKind::Gender { options } => Some(options),
        }
    }
}

fn branches<K, T>(options: impl IntoIterator<Item = (K, T)>) -> Branches
where
    K: Into<String>,
    T: Into<Template>,
{
    options
        .into_iter()
        .map(|(key, template)| (key.into(), template.into()))
        .collect()
}

/// One element of a pre-built message.
///
/// Adjacent text parts are joined and parsed together, so a placeholder may
/// be spread across several parts (`["${", "company", "}"]`).
#[derive(Debug, Clone)]
pub enum Part {
    Text(String),
    Placeholder(Placeholder),
}

impl From<&str> for Part {
    fn from(s: &str) -> Self {
        Part::Text(s.to_string())
    }
}

impl From<String> for Part {
    fn from(s: String) -> Self {
        Part::Text(s)
    }
}

impl From<i32> for Part {
    fn from(n: i32) -> Self {
        Part::Text(n.to_string())
    }
}

impl From<i64> for Part {
    fn from(n: i64) -> Self {
        Part::Text(n.to_string())
    }
}

impl From<f64> for Part {
    fn from(n: f64) -> Self {
        Part::Text(n.to_string())
    }
}

impl From<Placeholder> for Part {
    fn from(p: Placeholder) -> Self {
        Part::Placeholder(p)
    }
}
