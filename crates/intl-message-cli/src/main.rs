//! intlmsg CLI entry point.
//!
//! Provides command-line tools for working with message templates:
//! - `intlmsg format` - Format a template with values
//! - `intlmsg check` - Report placeholders and suspicious brace text
//! - `intlmsg plural` - Show plural categories for numbers in a locale

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use miette::MietteHandlerOpts;
use commands::{run_check, run_format, run_plural, CheckArgs, FormatArgs, PluralArgs};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Message template tools.
#[derive(Debug, Parser)]
#[command(name = "intlmsg")]
#[command(about = "Locale-aware message template tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Format a template string
    Format(FormatArgs),
    /// Check template strings
    Check(CheckArgs),
    /// Show plural categories of numbers
    Plural(PluralArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` or the verbosity flag.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(stderr))
        .with(filter)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Format(args) => run_format(args),
        Commands::Check(args) => run_check(args),
        Commands::Plural(args) => run_plural(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
