use std::collections::BTreeSet;
use std::collections::btree_set::Iter;

use serde::{Deserialize, Serialize};

/// The set of formatting-option flags a message was created with.
///
/// Returned by [`Message::resolved_options`](crate::Message::resolved_options).
/// Empty unless options were supplied at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatOptions(BTreeSet<String>);

impl FormatOptions {
    /// Create an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flag, returning the updated set.
    pub fn with(mut self, flag: impl Into<String>) -> Self {
        self.insert(flag);
        self
    }

    /// Add a flag. Returns false if it was already present.
    pub fn insert(&mut self, flag: impl Into<String>) -> bool {
        self.0.insert(flag.into())
    }

    /// Check whether a flag is set.
    pub fn contains(&self, flag: &str) -> bool {
        self.0.contains(flag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the flags in sorted order.
    pub fn iter(&self) -> Iter<'_, String> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for FormatOptions {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a FormatOptions {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
