//! Error types for message construction and formatting.

use strsim::levenshtein;
use thiserror::Error;

/// Errors raised while constructing a [`Message`](crate::Message).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// The locale tag is blank or not a valid BCP-47 tag.
    #[error("invalid language tag '{tag}'")]
    InvalidLocale { tag: String },

    /// A plural, select or gender placeholder lacks the mandatory `other` branch.
    #[error("placeholder `{value_name}` has no 'other' branch")]
    MissingOtherBranch { value_name: String },
}

/// An error that occurred while formatting a message.
///
/// Formatting aborts at the first error; no partial output is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The template contains no segments.
    #[error("no tokens were provided")]
    NoTokens,

    /// `format` was called without a value bag but the template reads one.
    #[error("cannot read value `{name}`: no values were provided")]
    ValueBagMissing { name: String },

    /// The value bag has no entry for a placeholder's value name.
    #[error("the value name `{name}` was not found{}", suggestion_hint(.suggestions))]
    ValueNameNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    /// A plural placeholder is bound to a value that is not a number.
    #[error("value '{value}' bound to `{name}` is not a number")]
    NotNumeric { name: String, value: String },

    /// Neither the selected key nor `other` exists in the branch map.
    #[error("placeholder `{value_name}` has no branch for '{key}' and no 'other' branch")]
    MissingOtherBranch { value_name: String, key: String },
}

fn suggestion_hint(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let quoted: Vec<String> = suggestions.iter().map(|s| format!("`{s}`")).collect();
    format!("; did you mean {}?", quoted.join(" or "))
}

/// Compute names close to `key` among `available`, closest first.
///
/// Allows an edit distance of 1 for keys of up to three characters and 2
/// for longer keys. Returns at most three suggestions.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance > 0 && *distance <= max_distance)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
