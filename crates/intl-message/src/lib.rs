//! Locale-aware message formatting.
//!
//! A [`Message`] interpolates runtime values into a template, choosing
//! plural, select and gender branches by locale and applying optional
//! formatters to plain placeholders.

pub mod interpreter;
pub mod parser;
pub mod types;

pub use icu_locale_core::Locale;
pub use interpreter::{
    CldrPluralRules, EvalContext, FormatError, FormatterRegistry, Message, MessageError,
    PluralRules, Values, compute_suggestions, plural_category,
};
pub use parser::{FormatterFn, Part, Placeholder, PlaceholderKind, Segment, Template};
pub use types::{FormatOptions, PluralCategory, Value};

/// Creates a value bag (`HashMap<String, Value>`) from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, or strings directly.
///
/// # Example
///
/// ```
/// use intl_message::values;
///
/// let v = values! { "count" => 3, "name" => "Alice" };
/// assert_eq!(v.len(), 2);
/// assert_eq!(v["count"].as_number(), Some(3));
/// assert_eq!(v["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! values {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}

/// Creates a pre-built template from text, numbers and placeholders.
///
/// # Example
///
/// ```
/// use intl_message::{Message, parts};
///
/// let message = Message::with_locale(parts!["I have ", 2, " cars."], "en-US").unwrap();
/// assert_eq!(message.format(None).unwrap(), "I have 2 cars.");
/// ```
#[macro_export]
macro_rules! parts {
    [$($part:expr),* $(,)?] => {
        <$crate::Template as ::std::convert::From<::std::vec::Vec<$crate::Part>>>::from(
            ::std::vec![$(::std::convert::Into::<$crate::Part>::into($part)),*]
        )
    };
}
