//! Branch selection for plural, select and gender placeholders.

use tracing::trace;

use crate::interpreter::{EvalContext, FormatError};
use crate::parser::{Branches, OTHER, Placeholder, PlaceholderKind, Template};
use crate::types::Value;

/// The branch chosen for a selecting placeholder.
#[derive(Debug)]
pub struct Selection<'t> {
    /// The branch key that matched (`other` when falling back).
    pub key: &'t str,
    pub template: &'t Template,
    /// Offset-adjusted number to bind to `#` while evaluating the branch.
    pub number: Option<Value>,
}

/// Resolve a selecting placeholder to one of its branches.
///
/// Returns `Ok(None)` for plain placeholders.
///
/// - Plural: the bound value, minus the offset, is categorized by the
///   plural rules of the context locale.
/// - Select and gender: the bound value's text is the key.
///
/// A key without a branch falls back to `other`.
pub fn select_branch<'t>(
    placeholder: &'t Placeholder,
    ctx: &EvalContext<'_>,
) -> Result<Option<Selection<'t>>, FormatError> {
    let name = &placeholder.value_name;
    match &placeholder.kind {
        PlaceholderKind::Plain { .. } => Ok(None),
        PlaceholderKind::Plural { offset, options } => {
            let value = ctx.lookup(name)?;
            let number = value
                .to_numeric()
                .ok_or_else(|| FormatError::NotNumeric {
                    name: name.clone(),
                    value: value.to_string(),
                })?
                .minus_offset(*offset);
            let operand = number.as_float().unwrap_or_default();
            let category = ctx.plural_rules().category(ctx.locale(), operand);
            let (key, template) = branch_for(options, name, category.as_str())?;
            trace!(value_name = %name, %number, %category, branch = key, "plural branch selected");
            Ok(Some(Selection {
                key,
                template,
                number: Some(number),
            }))
        }
        PlaceholderKind::Select { options } | PlaceholderKind::Gender { options } => {
            let key = ctx.lookup(name)?.to_string();
            let (branch, template) = branch_for(options, name, &key)?;
            trace!(value_name = %name, %key, branch, "select branch selected");
            Ok(Some(Selection {
                key: branch,
                template,
                number: None,
            }))
        }
    }
}

/// Look up `key`, falling back to the `other` branch.
fn branch_for<'t>(
    options: &'t Branches,
    value_name: &str,
    key: &str,
) -> Result<(&'t str, &'t Template), FormatError> {
    options
        .get_key_value(key)
        .or_else(|| options.get_key_value(OTHER))
        .map(|(key, template)| (key.as_str(), template))
        .ok_or_else(|| FormatError::MissingOtherBranch {
            value_name: value_name.to_string(),
            key: key.to_string(),
        })
}
