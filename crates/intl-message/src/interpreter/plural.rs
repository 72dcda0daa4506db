//! CLDR plural category resolution.
//!
//! Plural categories are linguistic, not arithmetic: English has "one" and
//! "other", Russian adds "few" and "many", and Arabic uses all six
//! categories. Selection therefore goes through a [`PluralRules`] lookup and
//! never hardcodes numeric thresholds.
//!
//! The default [`CldrPluralRules`] is backed by ICU4X compiled data. Rule sets
//! are cached per thread per locale to avoid re-creating `PluralRules`
//! instances on every call. The cache is initialized lazily on first access
//! within each thread.

use std::cell::RefCell;

use fixed_decimal::{Decimal, FloatPrecision};
use icu_locale_core::Locale;
use icu_plurals::{PluralCategory as IcuCategory, PluralRuleType, PluralRules as IcuPluralRules};
use tracing::warn;

use crate::types::PluralCategory;

/// Maps a number to its plural category in a locale.
///
/// Implementations must be pure: the same locale and number always produce
/// the same category. A locale without a rule for some category simply never
/// returns it. The number is passed exactly as computed by the caller, after
/// any plural offset has been subtracted.
pub trait PluralRules: Send + Sync {
    fn category(&self, locale: &Locale, n: f64) -> PluralCategory;
}

/// Cardinal plural rules from CLDR data.
#[derive(Debug, Clone, Copy, Default)]
pub struct CldrPluralRules;

impl PluralRules for CldrPluralRules {
    fn category(&self, locale: &Locale, n: f64) -> PluralCategory {
        plural_category(locale, n)
    }
}

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by locale tag. `None` records
    /// a locale whose rules could not be built.
    static PLURAL_RULES_CACHE: RefCell<Vec<(String, Option<IcuPluralRules>)>> =
        const { RefCell::new(Vec::new()) };
}

/// Build `PluralRules` for a locale.
///
/// Locales without data fall back through their parents to the root rules,
/// which only produce "other".
fn build_rules(locale: &Locale) -> Option<IcuPluralRules> {
    match IcuPluralRules::try_new(locale.clone().into(), PluralRuleType::Cardinal.into()) {
        Ok(rules) => Some(rules),
        Err(error) => {
            warn!(%locale, %error, "no plural rules for locale");
            None
        }
    }
}

/// Translate an ICU `PluralCategory` to ours.
fn from_icu(category: IcuCategory) -> PluralCategory {
    match category {
        IcuCategory::Zero => PluralCategory::Zero,
        IcuCategory::One => PluralCategory::One,
        IcuCategory::Two => PluralCategory::Two,
        IcuCategory::Few => PluralCategory::Few,
        IcuCategory::Many => PluralCategory::Many,
        IcuCategory::Other => PluralCategory::Other,
    }
}

/// Categorize a number with its visible fraction digits.
///
/// Integral values take the integer path; other values go through the
/// shortest decimal that round-trips, so `1.5` is read with one fraction
/// digit. Non-finite values are "other".
fn categorize(rules: &IcuPluralRules, n: f64) -> PluralCategory {
    if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER {
        return from_icu(rules.category_for(n as i64));
    }
    match Decimal::try_from_f64(n, FloatPrecision::RoundTrip) {
        Ok(decimal) => from_icu(rules.category_for(&decimal)),
        Err(_) => PluralCategory::Other,
    }
}

/// Largest magnitude below which every integral `f64` converts to `i64` exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Get the CLDR cardinal plural category for a number in a locale.
///
/// Fraction digits count: English `1.5` is "other", not "one".
///
/// # Examples
///
/// ```
/// use intl_message::{Locale, PluralCategory, plural_category};
///
/// let en: Locale = "en-US".parse().unwrap();
/// assert_eq!(plural_category(&en, 1.0), PluralCategory::One);
/// assert_eq!(plural_category(&en, 2.0), PluralCategory::Other);
/// assert_eq!(plural_category(&en, 1.5), PluralCategory::Other);
///
/// let ru: Locale = "ru".parse().unwrap();
/// assert_eq!(plural_category(&ru, 2.0), PluralCategory::Few);
/// assert_eq!(plural_category(&ru, 5.0), PluralCategory::Many);
/// ```
pub fn plural_category(locale: &Locale, n: f64) -> PluralCategory {
    let key = locale.to_string();
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        let index = match cache.iter().position(|(tag, _)| *tag == key) {
            Some(index) => index,
            None => {
                cache.push((key, build_rules(locale)));
                cache.len() - 1
            }
        };
        match &cache[index].1 {
            Some(rules) => categorize(rules, n),
            None => PluralCategory::Other,
        }
    })
}
