//! The public message handle.
//!
//! A [`Message`] binds one template to one locale, formatter registry and
//! plural rule source, and formats it against value bags.

use std::borrow::Cow;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use bon::bon;
use icu_locale_core::{Locale, locale};
use tracing::debug;

use crate::interpreter::context::{EvalContext, Values};
use crate::interpreter::error::{FormatError, MessageError};
use crate::interpreter::evaluator::{eval_template, substitute_lenient};
use crate::interpreter::formatters::FormatterRegistry;
use crate::interpreter::plural::{CldrPluralRules, PluralRules};
use crate::parser::{OTHER, Segment, Template, parse_template};
use crate::types::FormatOptions;

/// Where the pattern of a message currently comes from.
#[derive(Debug, Clone)]
enum Pattern {
    /// Tokenized at construction.
    Tokens(Template),
    /// Assigned after construction; re-read on every `format` call.
    Raw(String),
}

/// A message template bound to a locale.
///
/// Messages are immutable once built, except through [`Message::set_pattern`],
/// and can be formatted concurrently from several threads.
///
/// # Example
///
/// ```
/// use intl_message::{Message, values};
///
/// let message = Message::builder()
///     .template("My name is ${first} {last}.")
///     .locale("en-US")
///     .build()
///     .unwrap();
///
/// let text = message
///     .format(&values! { "first" => "Anthony", "last" => "Pipkin" })
///     .unwrap();
/// assert_eq!(text, "My name is Anthony Pipkin.");
/// ```
pub struct Message {
    locale: Locale,
    pattern: Pattern,
    formatters: FormatterRegistry,
    plural_rules: Arc<dyn PluralRules>,
    options: FormatOptions,
}

#[bon]
impl Message {
    /// Build a message.
    ///
    /// - `template`: a template string or pre-built parts.
    /// - `locale`: a BCP-47 tag; defaults to `en`.
    /// - `formatters`: custom formatters over the base set.
    /// - `plural_rules`: defaults to CLDR rules.
    /// - `options`: flags reported by [`Message::resolved_options`].
    ///
    /// # Errors
    ///
    /// Fails if the locale tag is blank or malformed, or if any plural,
    /// select or gender placeholder lacks an `other` branch.
    #[builder]
    pub fn new(
        #[builder(into)] template: Template,
        #[builder(into)] locale: Option<String>,
        formatters: Option<FormatterRegistry>,
        plural_rules: Option<Arc<dyn PluralRules>>,
        #[builder(default)] options: FormatOptions,
    ) -> Result<Self, MessageError> {
        let locale = match locale {
            Some(tag) => resolve_locale(&tag)?,
            None => locale!("en"),
        };
        check_branches(&template)?;
        debug!(%locale, segments = template.segments.len(), "message created");
        Ok(Self {
            locale,
            pattern: Pattern::Tokens(template),
            formatters: formatters.unwrap_or_default(),
            plural_rules: plural_rules.unwrap_or_else(|| Arc::new(CldrPluralRules)),
            options,
        })
    }
}

impl Debug for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Message")
            .field("locale", &self.locale)
            .field("pattern", &self.pattern)
            .field("formatters", &self.formatters)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Message {
    /// Create a message with the default formatters and plural rules.
    pub fn with_locale(template: impl Into<Template>, locale: &str) -> Result<Self, MessageError> {
        Message::builder()
            .template(template)
            .locale(locale)
            .build()
    }

    /// The resolved locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The formatting options supplied at construction.
    pub fn resolved_options(&self) -> &FormatOptions {
        &self.options
    }

    /// The current token model.
    ///
    /// A pattern assigned with [`Message::set_pattern`] is tokenized on every
    /// call.
    pub fn template(&self) -> Cow<'_, Template> {
        match &self.pattern {
            Pattern::Tokens(template) => Cow::Borrowed(template),
            Pattern::Raw(raw) => Cow::Owned(parse_template(raw)),
        }
    }

    /// Replace the pattern with a raw template string.
    ///
    /// The pattern is re-read on every [`Message::format`] call and
    /// substituted leniently: a placeholder whose value is missing is left
    /// in the output exactly as written instead of failing.
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = Pattern::Raw(pattern.into());
    }

    /// Format the message with a value bag.
    ///
    /// Pass `None` to format without values; this only succeeds if no
    /// placeholder needs one. Unused entries in the bag are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::NoTokens`] for an empty template, and the
    /// lookup and selection errors of the evaluator otherwise.
    pub fn format<'v>(&self, values: impl Into<Option<&'v Values>>) -> Result<String, FormatError> {
        let mut ctx = EvalContext::new(
            values.into(),
            &self.locale,
            &self.formatters,
            self.plural_rules.as_ref(),
        );
        match &self.pattern {
            Pattern::Tokens(template) if template.is_empty() => Err(FormatError::NoTokens),
            Pattern::Tokens(template) => eval_template(template, &mut ctx),
            Pattern::Raw(raw) if raw.is_empty() => Err(FormatError::NoTokens),
            Pattern::Raw(raw) => Ok(substitute_lenient(raw, &ctx)),
        }
    }
}

/// Validate and canonicalize a locale tag.
fn resolve_locale(tag: &str) -> Result<Locale, MessageError> {
    let invalid = || MessageError::InvalidLocale {
        tag: tag.to_string(),
    };
    if tag.trim().is_empty() {
        return Err(invalid());
    }
    Locale::try_from_str(tag).map_err(|_| invalid())
}

/// Require an `other` branch on every selecting placeholder, recursively.
fn check_branches(template: &Template) -> Result<(), MessageError> {
    for segment in &template.segments {
        let Segment::Placeholder(placeholder) = segment else {
            continue;
        };
        let Some(options) = placeholder.options() else {
            continue;
        };
        if !options.contains_key(OTHER) {
            return Err(MessageError::MissingOtherBranch {
                value_name: placeholder.value_name.clone(),
            });
        }
        for branch in options.values() {
            check_branches(branch)?;
        }
    }
    Ok(())
}
