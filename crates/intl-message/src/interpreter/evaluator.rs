//! Template evaluation engine.
//!
//! Walks the token model and produces the formatted string. Literal segments
//! are copied, plain placeholders are substituted through the formatter
//! registry, and selecting placeholders recurse into the chosen branch with
//! the same value bag.

use tracing::{debug, trace};

use crate::interpreter::selector::select_branch;
use crate::interpreter::{EvalContext, FormatError};
use crate::parser::{Placeholder, PlaceholderKind, Segment, Template, spanned_segments};
use crate::types::Value;

/// Evaluate a template, producing a formatted string.
///
/// # Errors
///
/// Returns an error if:
/// - A value is needed but no value bag was supplied
/// - A value name is missing from the value bag
/// - A plural placeholder is bound to a non-numeric value
/// - A selecting placeholder has neither the selected branch nor `other`
pub fn eval_template(
    template: &Template,
    ctx: &mut EvalContext<'_>,
) -> Result<String, FormatError> {
    let mut output = String::new();
    eval_into(template, ctx, &mut output)?;
    Ok(output)
}

fn eval_into(
    template: &Template,
    ctx: &mut EvalContext<'_>,
    output: &mut String,
) -> Result<(), FormatError> {
    for segment in &template.segments {
        match segment {
            Segment::Literal(s) => output.push_str(s),
            Segment::Placeholder(placeholder) => match select_branch(placeholder, ctx)? {
                Some(selection) => {
                    let bound = selection.number.is_some();
                    if let Some(number) = selection.number {
                        ctx.push_number(number);
                    }
                    eval_into(selection.template, ctx, output)?;
                    if bound {
                        ctx.pop_number();
                    }
                }
                None => {
                    let value = ctx.lookup(&placeholder.value_name)?;
                    output.push_str(&format_plain(placeholder, &value, ctx));
                }
            },
        }
    }
    Ok(())
}

/// Apply the placeholder's formatter to a value.
///
/// Resolution order: inline formatter, custom registry, base registry, and
/// finally the value's own text.
fn format_plain(placeholder: &Placeholder, value: &Value, ctx: &EvalContext<'_>) -> String {
    let PlaceholderKind::Plain {
        formatter_name,
        formatter,
    } = &placeholder.kind
    else {
        return value.to_string();
    };
    match ctx.formatters().resolve(*formatter, formatter_name.as_deref()) {
        Some(f) => f(value, ctx.locale()),
        None => {
            if let Some(name) = formatter_name {
                debug!(
                    value_name = %placeholder.value_name,
                    formatter = %name,
                    "unknown formatter, using raw value"
                );
            }
            value.to_string()
        }
    }
}

/// Substitute the placeholders of a raw pattern without failing.
///
/// Placeholders whose value cannot be found stay in the output exactly as
/// written. Used for patterns assigned after construction.
pub fn substitute_lenient(pattern: &str, ctx: &EvalContext<'_>) -> String {
    let mut output = String::with_capacity(pattern.len());
    for (segment, source) in spanned_segments(pattern) {
        match segment {
            Segment::Literal(text) => output.push_str(&text),
            Segment::Placeholder(placeholder) => match ctx.value(&placeholder.value_name) {
                Some(value) => output.push_str(&format_plain(&placeholder, value, ctx)),
                None => {
                    trace!(value_name = %placeholder.value_name, "leaving unresolved placeholder");
                    output.push_str(source);
                }
            },
        }
    }
    output
}
