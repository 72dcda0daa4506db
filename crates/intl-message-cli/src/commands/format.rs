//! Implementation of the `intlmsg format` command.

use std::fs::read_to_string;
use std::io::{read_to_string as read_all, stdin};
use std::path::{Path, PathBuf};

use intl_message::{Message, Value, Values};
use serde::Serialize;
use tracing::debug;

/// Arguments for the format command.
#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// Locale tag for formatting (e.g., en-US, pl, ar)
    #[arg(long, env = "INTLMSG_LOCALE", default_value = "en")]
    pub locale: String,

    /// Template string to format
    #[arg(long, required = true)]
    pub template: String,

    /// JSON object with values; `-` reads standard input
    #[arg(long)]
    pub values_json: Option<PathBuf>,

    /// Values in name=value format (repeatable, overrides JSON values)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for format results.
#[derive(Serialize)]
pub struct FormatResult {
    pub result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Read a JSON object of values from a file or standard input.
fn read_values_json(path: &Path) -> miette::Result<Values> {
    let content = if path.as_os_str() == "-" {
        read_all(stdin()).map_err(|e| miette::miette!("Cannot read standard input: {}", e))?
    } else {
        read_to_string(path)
            .map_err(|e| miette::miette!("Cannot read values file {}: {}", path.display(), e))?
    };
    serde_json::from_str(&content)
        .map_err(|e| miette::miette!("Values must be a JSON object of numbers and strings: {}", e))
}

/// Collect the value bag, or `None` if no values were given at all.
fn collect_values(args: &FormatArgs) -> miette::Result<Option<Values>> {
    let mut values = match &args.values_json {
        Some(path) => Some(read_values_json(path)?),
        None => None,
    };

    for (name, raw) in &args.params {
        // Try parsing as i64 first, fall back to String
        let value = if let Ok(n) = raw.parse::<i64>() {
            Value::from(n)
        } else {
            Value::from(raw.as_str())
        };
        values
            .get_or_insert_with(Values::new)
            .insert(name.clone(), value);
    }

    Ok(values)
}

/// Print a serializable value as pretty JSON.
fn print_json(value: &impl Serialize, to_stderr: bool) {
    match serde_json::to_string_pretty(value) {
        Ok(text) if to_stderr => eprintln!("{}", text),
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Cannot serialize output: {}", e),
    }
}

/// Run the format command.
pub fn run_format(args: FormatArgs) -> miette::Result<i32> {
    let values = collect_values(&args)?;
    debug!(locale = %args.locale, values = values.as_ref().map_or(0, Values::len), "formatting");

    let message = match Message::with_locale(args.template.as_str(), &args.locale) {
        Ok(message) => message,
        Err(e) => {
            eprintln!("Invalid message: {}", e);
            return Ok(exitcode::USAGE);
        }
    };

    match message.format(values.as_ref()) {
        Ok(result) => {
            if args.json {
                print_json(&FormatResult { result }, false);
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                print_json(&serde_json::json!({ "error": e.to_string() }), true);
            } else {
                eprintln!("Format error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
