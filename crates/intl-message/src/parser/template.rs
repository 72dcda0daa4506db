//! Template string parser using winnow.
//!
//! Parses message strings into the token model. Handles:
//! - Placeholders: `{name}`, `${name}`, `{name:formatter}`, `${name:formatter}`
//! - The numeric token `{#}` inside plural branches
//! - Everything else as literal text, including placeholder-like text whose
//!   name is not a plain identifier (`{ST ATE}`, `{}`)
//!
//! Parsing never fails: text the grammar does not recognize is literal.

use std::ops::Range;

use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::ast::{Part, Placeholder, Segment, Template};

/// Parse a template string into the token model.
///
/// # Example
///
/// ```
/// use intl_message::parser::{Segment, parse_template};
///
/// let template = parse_template("Hi ${name}! {ST ATE}");
/// assert_eq!(template.segments.len(), 3);
/// assert!(matches!(&template.segments[2], Segment::Literal(s) if s == "! {ST ATE}"));
/// ```
pub fn parse_template(input: &str) -> Template {
    let segments = spanned_segments(input)
        .into_iter()
        .map(|(segment, _)| segment)
        .collect();
    Template {
        segments: merge_literals(segments),
    }
}

/// Parse a template keeping the source text each segment was read from.
///
/// Literal segments are one character each; callers that need merged
/// literals use [`parse_template`].
pub(crate) fn spanned_segments(input: &str) -> Vec<(Segment, &str)> {
    let mut remaining = input;
    let parsed: ModalResult<Vec<(Segment, &str)>> =
        repeat(0.., spanned_segment).parse_next(&mut remaining);
    match parsed {
        Ok(mut pieces) => {
            if !remaining.is_empty() {
                pieces.push((Segment::Literal(remaining.to_string()), remaining));
            }
            pieces
        }
        Err(_) => vec![(Segment::Literal(input.to_string()), input)],
    }
}

/// Find brace-delimited text that was not recognized as a placeholder.
///
/// Returns the byte range of each literal `{...}` run, such as `{ST ATE}`
/// or `{}`. Such text is legal and passes through formatting unchanged,
/// but is usually a typo.
///
/// # Example
///
/// ```
/// use intl_message::parser::unrecognized_spans;
///
/// assert_eq!(unrecognized_spans("The {STATE} is {ST ATE}."), vec![15..23]);
/// ```
pub fn unrecognized_spans(input: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut offset = 0;
    let mut open: Option<usize> = None;

    for (segment, source) in spanned_segments(input) {
        match segment {
            Segment::Placeholder(_) => open = None,
            Segment::Literal(_) if source == "{" => open = Some(offset),
            Segment::Literal(_) if source == "}" => {
                if let Some(start) = open.take() {
                    spans.push(start..offset + 1);
                }
            }
            Segment::Literal(_) => {}
        }
        offset += source.len();
    }

    spans
}

/// Join the text of adjacent parts, parse it, and splice in pre-built
/// placeholders.
pub(crate) fn normalize_parts(parts: Vec<Part>) -> Template {
    let mut segments = Vec::with_capacity(parts.len());
    let mut pending = String::new();

    for part in parts {
        match part {
            Part::Text(text) => pending.push_str(&text),
            Part::Placeholder(placeholder) => {
                if !pending.is_empty() {
                    segments.extend(parse_template(&pending).segments);
                    pending.clear();
                }
                segments.push(Segment::Placeholder(placeholder));
            }
        }
    }
    if !pending.is_empty() {
        segments.extend(parse_template(&pending).segments);
    }

    Template {
        segments: merge_literals(segments),
    }
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment along with the text it consumed.
fn spanned_segment<'i>(input: &mut &'i str) -> ModalResult<(Segment, &'i str)> {
    alt((
        placeholder.with_taken(),
        literal_char.with_taken(),
    ))
    .parse_next(input)
}

/// Parse any single character as literal text.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Parse a placeholder: `$`? `{` name (`:` formatter)? `}`
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    preceded(
        opt('$'),
        delimited('{', (value_name, opt(preceded(':', identifier))), '}'),
    )
    .map(|(name, formatter)| {
        let placeholder = Placeholder::plain(name);
        let placeholder = match formatter {
            Some(formatter) => placeholder.with_formatter_name(formatter),
            None => placeholder,
        };
        Segment::Placeholder(placeholder)
    })
    .parse_next(input)
}

/// Parse a value name: an identifier or the numeric token `#`.
fn value_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt(("#", identifier)).parse_next(input)
}

/// Parse an identifier (ASCII alphanumeric with underscores).
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_name_char).parse_next(input)
}

/// Check if a character may appear in a placeholder name.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
