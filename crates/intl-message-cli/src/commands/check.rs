//! Implementation of the `intlmsg check` command.

use intl_message::parser::{parse_template, unrecognized_spans, PlaceholderKind};
use miette::Report;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::output::diagnostic::TemplateDiagnostic;
use crate::output::table::{format_placeholder_table, PlaceholderRow};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Templates to check
    #[arg(required = true)]
    pub templates: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat unrecognized placeholder syntax as an error
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for one checked template.
#[derive(Serialize)]
struct CheckReport<'a> {
    template: &'a str,
    placeholders: Vec<PlaceholderRow>,
    unrecognized: Vec<&'a str>,
    empty: bool,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut failed = false;
    let mut reports = Vec::new();
    let mut rows = Vec::new();

    for (index, source) in args.templates.iter().enumerate() {
        let template = parse_template(source);
        let spans = unrecognized_spans(source);

        let placeholders: Vec<PlaceholderRow> = template
            .placeholders()
            .map(|p| PlaceholderRow {
                template: index + 1,
                name: p.value_name.clone(),
                formatter: match &p.kind {
                    PlaceholderKind::Plain { formatter_name, .. } => formatter_name.clone(),
                    _ => None,
                },
            })
            .collect();

        if template.is_empty() {
            failed = true;
            if !args.json {
                eprintln!(
                    "{} template {} has no tokens",
                    "error:".if_supports_color(Stream::Stderr, |text| text.red()),
                    index + 1
                );
            }
        }
        if !spans.is_empty() && args.strict {
            failed = true;
        }

        if args.json {
            reports.push(CheckReport {
                template: source,
                placeholders,
                unrecognized: spans.iter().map(|span| &source[span.clone()]).collect(),
                empty: template.is_empty(),
            });
        } else {
            for span in &spans {
                let diagnostic =
                    TemplateDiagnostic::unrecognized(index + 1, source, span.clone(), args.strict);
                eprintln!("{:?}", Report::new(diagnostic));
            }
            rows.extend(placeholders);
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Cannot serialize output: {}", e),
        }
    } else if !rows.is_empty() {
        println!("{}", format_placeholder_table(&rows));
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
