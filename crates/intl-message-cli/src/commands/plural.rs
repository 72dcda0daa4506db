//! Implementation of the `intlmsg plural` command.

use intl_message::{plural_category, Locale};

use crate::output::table::format_plural_table;

/// Arguments for the plural command.
#[derive(Debug, clap::Args)]
pub struct PluralArgs {
    /// Locale tag whose plural rules to use
    #[arg(long, env = "INTLMSG_LOCALE", default_value = "en")]
    pub locale: String,

    /// Numbers to categorize
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<f64>,
}

/// Run the plural command.
pub fn run_plural(args: PluralArgs) -> miette::Result<i32> {
    let locale = match Locale::try_from_str(&args.locale) {
        Ok(locale) => locale,
        Err(e) => {
            eprintln!("Invalid locale '{}': {}", args.locale, e);
            return Ok(exitcode::USAGE);
        }
    };

    let rows: Vec<_> = args
        .numbers
        .iter()
        .map(|&n| (n, plural_category(&locale, n)))
        .collect();
    println!("{}", format_plural_table(&locale, &rows));
    Ok(exitcode::OK)
}
