//! Miette diagnostic for suspicious template text.

use std::fmt::Display;
use std::iter::once;
use std::ops::Range;

use miette::{Diagnostic, LabeledSpan, NamedSource, Severity, SourceCode, SourceSpan};
use thiserror::Error;

/// Brace-delimited text that is not a placeholder.
///
/// Reported as a warning, or as an error under `check --strict`.
#[derive(Debug, Error)]
#[error("unrecognized placeholder syntax")]
pub struct TemplateDiagnostic {
    src: NamedSource<String>,
    span: SourceSpan,
    severity: Severity,
}

impl TemplateDiagnostic {
    /// Create a diagnostic for the byte range `span` of template number `index`.
    pub fn unrecognized(index: usize, source: &str, span: Range<usize>, strict: bool) -> Self {
        TemplateDiagnostic {
            src: NamedSource::new(format!("template {}", index), source.to_string()),
            span: span.into(),
            severity: if strict {
                Severity::Error
            } else {
                Severity::Warning
            },
        }
    }
}

impl Diagnostic for TemplateDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new("intlmsg::unrecognized"))
    }

    fn severity(&self) -> Option<Severity> {
        Some(self.severity)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(
            "placeholder names may only contain ASCII letters, digits and underscores",
        ))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(once(LabeledSpan::new_with_span(
            Some("passed through as literal text".to_string()),
            self.span,
        ))))
    }
}
