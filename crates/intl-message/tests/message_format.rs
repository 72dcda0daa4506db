//! Integration tests for message construction and formatting.

use std::thread;

use intl_message::{
    FormatError, FormatOptions, Message, MessageError, Placeholder, Template, parts, values,
};

// =============================================================================
// Resolved Options
// =============================================================================

#[test]
fn resolved_options_empty_by_default() {
    let message = Message::with_locale("My name is ${name}", "en-US").unwrap();
    assert!(message.resolved_options().is_empty());
}

#[test]
fn resolved_options_reports_supplied_flags() {
    let message = Message::builder()
        .template("My name is ${name}")
        .locale("en-US")
        .options(FormatOptions::new().with("strict"))
        .build()
        .unwrap();
    assert_eq!(message.resolved_options().len(), 1);
    assert!(message.resolved_options().contains("strict"));
}

// =============================================================================
// String Templates
// =============================================================================

#[test]
fn simple_string_formatting() {
    let message = Message::with_locale("My name is ${first} {last}.", "en-US").unwrap();
    let text = message
        .format(&values! { "first" => "Anthony", "last" => "Pipkin" })
        .unwrap();
    assert_eq!(text, "My name is Anthony Pipkin.");
}

#[test]
fn extra_values_are_ignored() {
    let message = Message::with_locale("Hello {name}", "en").unwrap();
    let text = message
        .format(&values! { "name" => "Ada", "unused" => 1 })
        .unwrap();
    assert_eq!(text, "Hello Ada");
}

#[test]
fn literal_only_template_formats_without_values() {
    let message = Message::with_locale("Nothing to see here.", "en").unwrap();
    assert_eq!(message.format(None).unwrap(), "Nothing to see here.");
    assert_eq!(
        message.format(&values! { "x" => 1 }).unwrap(),
        "Nothing to see here."
    );
}

#[test]
fn default_locale_is_english() {
    let message = Message::builder().template("{STATE}").build().unwrap();
    assert_eq!(message.locale().to_string(), "en");
}

#[test]
fn repeated_formatting_is_identical() {
    let message = Message::with_locale("{a}-{b}", "en").unwrap();
    let bag = values! { "a" => 1, "b" => "two" };
    let first = message.format(&bag).unwrap();
    let second = message.format(&bag).unwrap();
    assert_eq!(first, "1-two");
    assert_eq!(first, second);
}

// =============================================================================
// Pre-built Templates
// =============================================================================

#[test]
fn simple_object_formatting() {
    let message = Message::with_locale(parts!["I have ", 2, " cars."], "en-US").unwrap();
    assert_eq!(message.format(None).unwrap(), "I have 2 cars.");
}

#[test]
fn placeholders_split_across_parts() {
    let message =
        Message::with_locale(parts!["${", "company", "}", " {", "verb", "}."], "en-US").unwrap();
    let text = message
        .format(&values! { "company" => "Yahoo", "verb" => "rocks" })
        .unwrap();
    assert_eq!(text, "Yahoo rocks.");
}

#[test]
fn direct_placeholder_names_are_not_restricted() {
    let message = Message::with_locale(parts![Placeholder::plain("ST ATE")], "en").unwrap();
    let text = message.format(&values! { "ST ATE" => "long" }).unwrap();
    assert_eq!(text, "long");
}

// =============================================================================
// Plural Selection
// =============================================================================

fn people_message(locale: &str) -> Message {
    let template = parts![
        "Some text before ",
        Placeholder::plural(
            "numPeople",
            [
                ("one", "one"),
                ("few", "few"),
                ("other", "Some messages for the default"),
            ],
        ),
        " and text after",
    ];
    Message::with_locale(template, locale).unwrap()
}

#[test]
fn plural_falls_back_to_other() {
    let message = people_message("en-US");
    let text = message.format(&values! { "numPeople" => 20 }).unwrap();
    assert_eq!(
        text,
        "Some text before Some messages for the default and text after"
    );
}

#[test]
fn plural_with_missing_value_name() {
    let message = people_message("en-US");
    let err = message.format(&values! { "jumper" => 20 }).unwrap_err();
    assert!(matches!(
        err,
        FormatError::ValueNameNotFound { ref name, .. } if name == "numPeople"
    ));
}

fn offset_message() -> Message {
    let template = parts![
        "Some text before ",
        Placeholder::plural_with_offset(
            "numPeople",
            1,
            [
                ("one", Template::from("Some message ${ph} with ${#} value")),
                (
                    "few",
                    parts![
                        "Optional prefix text for |few| ",
                        Placeholder::select(
                            "gender",
                            [
                                ("male", "Text for male option with ' single quotes"),
                                ("female", "Text for female option with {}"),
                                ("other", "Text for default"),
                            ],
                        ),
                        " optional postfix text",
                    ],
                ),
                ("other", Template::from("Some messages for the default")),
            ],
        ),
        " and text after",
    ];
    Message::with_locale(template, "pl").unwrap()
}

#[test]
fn plural_offset_selects_polish_few_with_nested_select() {
    let message = offset_message();
    // 3 - 1 = 2, which is "few" in Polish
    let text = message
        .format(&values! { "numPeople" => 3, "ph" => "whatever", "gender" => "male" })
        .unwrap();
    assert_eq!(
        text,
        "Some text before Optional prefix text for |few| Text for male option with ' single quotes optional postfix text and text after"
    );
}

#[test]
fn plural_offset_nested_select_other_and_braces() {
    let message = offset_message();
    let text = message
        .format(&values! { "numPeople" => 5, "ph" => "whatever", "gender" => "female" })
        .unwrap();
    assert_eq!(
        text,
        "Some text before Optional prefix text for |few| Text for female option with {} optional postfix text and text after"
    );

    let text = message
        .format(&values! { "numPeople" => 5, "ph" => "whatever", "gender" => "unknown" })
        .unwrap();
    assert_eq!(
        text,
        "Some text before Optional prefix text for |few| Text for default optional postfix text and text after"
    );
}

#[test]
fn plural_offset_renders_adjusted_number() {
    let message = offset_message();
    // 2 - 1 = 1, "one" in Polish; `#` renders 1, not 2
    let text = message
        .format(&values! { "numPeople" => 2, "ph" => "whatever", "gender" => "male" })
        .unwrap();
    assert_eq!(
        text,
        "Some text before Some message whatever with 1 value and text after"
    );
}

#[test]
fn plural_offset_zero_is_polish_many() {
    let message = offset_message();
    // 1 - 1 = 0, which CLDR puts in "many" for Polish; no such branch
    let text = message
        .format(&values! { "numPeople" => 1, "ph" => "whatever", "gender" => "male" })
        .unwrap();
    assert_eq!(
        text,
        "Some text before Some messages for the default and text after"
    );
}

#[test]
fn arabic_uses_all_six_categories() {
    let template = parts![
        "I have ",
        Placeholder::plural(
            "numPeople",
            [
                ("zero", "zero points"),
                ("one", "a point"),
                ("two", "two points"),
                ("few", "a few points"),
                ("many", "lots of points"),
                ("other", "some other amount of points"),
            ],
        ),
        ".",
    ];
    let message = Message::with_locale(template, "ar").unwrap();
    let cases = [
        (0, "I have zero points."),
        (1, "I have a point."),
        (2, "I have two points."),
        (5, "I have a few points."),
        (20, "I have lots of points."),
        (100, "I have some other amount of points."),
    ];
    for (count, expected) in cases {
        let text = message.format(&values! { "numPeople" => count }).unwrap();
        assert_eq!(text, expected, "count {count}");
    }
}

#[test]
fn plural_accepts_numeric_strings() {
    let message = people_message("en-US");
    let text = message.format(&values! { "numPeople" => "1" }).unwrap();
    assert_eq!(text, "Some text before one and text after");
}

// =============================================================================
// Locale Switching
// =============================================================================

fn simple_fr() -> Template {
    parts![
        Placeholder::plain("NAME"),
        " est ",
        Placeholder::gender("gender", [("female", "allée"), ("other", "allé")]),
        " à ",
        Placeholder::plain("CITY"),
        ".",
    ]
}

#[test]
fn en_us_simple() {
    let template = parts![
        Placeholder::plain("NAME"),
        " went to ",
        Placeholder::plain("CITY"),
        ".",
    ];
    let message = Message::with_locale(template, "en-US").unwrap();
    let male = values! { "NAME" => "Tony", "CITY" => "Paris", "gender" => "male" };
    let female = values! { "NAME" => "Jenny", "CITY" => "Paris", "gender" => "female" };
    assert_eq!(message.format(&male).unwrap(), "Tony went to Paris.");
    assert_eq!(message.format(&female).unwrap(), "Jenny went to Paris.");
}

#[test]
fn fr_fr_simple() {
    let message = Message::with_locale(simple_fr(), "fr-FR").unwrap();
    let male = values! { "NAME" => "Tony", "CITY" => "Paris", "gender" => "male" };
    let female = values! { "NAME" => "Jenny", "CITY" => "Paris", "gender" => "female" };
    assert_eq!(message.format(&male).unwrap(), "Tony est allé à Paris.");
    assert_eq!(message.format(&female).unwrap(), "Jenny est allée à Paris.");
}

fn travellers(count: i64) -> (intl_message::Values, intl_message::Values) {
    let male = values! {
        "TRAVELLERS" => "Lucas, Tony and Drew",
        "TRAVELLER_COUNT" => count,
        "GENDER" => "male",
        "CITY" => "Paris",
    };
    let female = values! {
        "TRAVELLERS" => "Monica",
        "TRAVELLER_COUNT" => 1,
        "GENDER" => "female",
        "CITY" => "Paris",
    };
    (male, female)
}

#[test]
fn en_us_complex() {
    let message = Message::with_locale("${TRAVELLERS} went to ${CITY}.", "en-US").unwrap();
    let (male, female) = travellers(3);
    assert_eq!(
        message.format(&male).unwrap(),
        "Lucas, Tony and Drew went to Paris."
    );
    assert_eq!(message.format(&female).unwrap(), "Monica went to Paris.");
}

#[test]
fn fr_fr_complex() {
    let template = parts![
        "${TRAVELLERS}",
        Placeholder::plural(
            "TRAVELLER_COUNT",
            [
                (
                    "one",
                    parts![
                        " est ",
                        Placeholder::gender("GENDER", [("female", "allée"), ("other", "allé")]),
                    ],
                ),
                (
                    "other",
                    parts![
                        " sont ",
                        Placeholder::gender("GENDER", [("female", "allées"), ("other", "allés")]),
                    ],
                ),
            ],
        ),
        " à ",
        "${CITY}",
        ".",
    ];
    let message = Message::with_locale(template, "fr-FR").unwrap();
    let (male, female) = travellers(3);
    assert_eq!(
        message.format(&male).unwrap(),
        "Lucas, Tony and Drew sont allés à Paris."
    );
    assert_eq!(message.format(&female).unwrap(), "Monica est allée à Paris.");
}

fn companies(locale: &str) -> Message {
    let (options, suffix) = if locale == "ru-RU" {
        (
            vec![
                ("one", "Одна компания опубликовала"),
                ("many", "${#} компаний опубликовали"),
                ("other", "${#} компаний опубликовали"),
            ],
            " новые книги.",
        )
    } else {
        (
            vec![("one", "One company"), ("other", "${#} companies")],
            " published new books.",
        )
    };
    let template = parts![Placeholder::plural("COMPANY_COUNT", options), suffix];
    Message::with_locale(template, locale).unwrap()
}

#[test]
fn en_us_counts() {
    let message = companies("en-US");
    let cases = [
        (0, "0 companies published new books."),
        (1, "One company published new books."),
        (2, "2 companies published new books."),
        (5, "5 companies published new books."),
        (10, "10 companies published new books."),
    ];
    for (count, expected) in cases {
        let text = message.format(&values! { "COMPANY_COUNT" => count }).unwrap();
        assert_eq!(text, expected);
    }
}

#[test]
fn ru_ru_counts() {
    let message = companies("ru-RU");
    let cases = [
        (0, "0 компаний опубликовали новые книги."),
        (1, "Одна компания опубликовала новые книги."),
        (2, "2 компаний опубликовали новые книги."),
        (5, "5 компаний опубликовали новые книги."),
        (10, "10 компаний опубликовали новые книги."),
    ];
    for (count, expected) in cases {
        let text = message.format(&values! { "COMPANY_COUNT" => count }).unwrap();
        assert_eq!(text, expected);
    }
}

// =============================================================================
// Invalid Locales
// =============================================================================

#[test]
fn blank_locale_is_rejected() {
    let err = Message::with_locale("{NAME}", " ").unwrap_err();
    assert_eq!(
        err,
        MessageError::InvalidLocale {
            tag: " ".to_string()
        }
    );
}

#[test]
fn malformed_locale_is_rejected() {
    let err = Message::with_locale("{NAME}", "not a locale!").unwrap_err();
    assert!(matches!(err, MessageError::InvalidLocale { .. }));
}

#[test]
fn missing_other_branch_fails_at_construction() {
    let template = parts![Placeholder::plural("n", [("one", "one")])];
    let err = Message::with_locale(template, "en").unwrap_err();
    assert_eq!(
        err,
        MessageError::MissingOtherBranch {
            value_name: "n".to_string()
        }
    );
}

#[test]
fn missing_nested_other_branch_fails_at_construction() {
    let template = parts![Placeholder::plural(
        "n",
        [(
            "other",
            parts![Placeholder::select("g", [("male", "he")])],
        )],
    )];
    let err = Message::with_locale(template, "en").unwrap_err();
    assert_eq!(
        err,
        MessageError::MissingOtherBranch {
            value_name: "g".to_string()
        }
    );
}

// =============================================================================
// Token Checks
// =============================================================================

#[test]
fn state_without_values() {
    let message = Message::with_locale("{STATE}", "en").unwrap();
    assert_eq!(
        message.format(None).unwrap_err(),
        FormatError::ValueBagMissing {
            name: "STATE".to_string()
        }
    );
}

#[test]
fn state_with_other_keys() {
    let message = Message::with_locale("{STATE}", "en").unwrap();
    for bag in [
        values! { "FOO" => "Missouri" },
        values! { "ST ATE" => "Missouri" },
        values! { "ST1ATE" => "Missouri" },
    ] {
        let err = message.format(&bag).unwrap_err();
        assert!(matches!(
            err,
            FormatError::ValueNameNotFound { ref name, .. } if name == "STATE"
        ));
    }
}

#[test]
fn state_with_matching_key() {
    let message = Message::with_locale("{STATE}", "en").unwrap();
    let text = message.format(&values! { "STATE" => "Missouri" }).unwrap();
    assert_eq!(text, "Missouri");
}

#[test]
fn lookup_is_case_sensitive() {
    let message = Message::with_locale("{STATE}", "en").unwrap();
    let err = message.format(&values! { "state" => "Missouri" }).unwrap_err();
    assert!(matches!(err, FormatError::ValueNameNotFound { .. }));
}

#[test]
fn digits_in_names_are_recognized() {
    let message = Message::with_locale("{ST1ATE}", "en").unwrap();
    let text = message.format(&values! { "ST1ATE" => "Missouri" }).unwrap();
    assert_eq!(text, "Missouri");
}

#[test]
fn names_with_spaces_pass_through() {
    let message = Message::with_locale("{ST ATE}", "en").unwrap();
    assert_eq!(message.format(None).unwrap(), "{ST ATE}");
    assert_eq!(
        message.format(&values! { "ST ATE" => "Missouri" }).unwrap(),
        "{ST ATE}"
    );
}

#[test]
fn mixed_valid_and_invalid_tokens() {
    let message = Message::with_locale("The {STATE} of {ST1ATE} is {ST ATE}.", "en").unwrap();
    let text = message
        .format(&values! {
            "STATE" => "description",
            "ST1ATE" => "Tennessee",
            "ST ATE" => "long",
        })
        .unwrap();
    assert_eq!(text, "The description of Tennessee is {ST ATE}.");
}

#[test]
fn empty_template_has_no_tokens() {
    let message = Message::with_locale("", "en").unwrap();
    assert_eq!(message.format(None).unwrap_err(), FormatError::NoTokens);
}

// =============================================================================
// Pattern Replacement
// =============================================================================

#[test]
fn replaced_pattern_leaves_unresolved_placeholders() {
    let mut message = Message::with_locale("${name} ${formula}", "en-US").unwrap();
    message.set_pattern("${name} ${formula}");
    let text = message.format(&values! { "name" => "apipkin" }).unwrap();
    assert_eq!(text, "apipkin ${formula}");
}

#[test]
fn replaced_pattern_is_reread_on_each_format() {
    let mut message = Message::with_locale("{a}", "en").unwrap();
    let bag = values! { "a" => "x", "b" => "y" };
    assert_eq!(message.format(&bag).unwrap(), "x");

    message.set_pattern("{b}:{a}");
    assert_eq!(message.format(&bag).unwrap(), "y:x");
    assert_eq!(message.template().placeholders().count(), 2);

    message.set_pattern("{c:upper}");
    assert_eq!(message.format(&bag).unwrap(), "{c:upper}");
    assert_eq!(message.format(None).unwrap(), "{c:upper}");
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn format_from_several_threads() {
    let message = people_message("en-US");
    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let message = &message;
                scope.spawn(move || message.format(&values! { "numPeople" => i }).unwrap())
            })
            .collect();
        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results[1], "Some text before one and text after");
        assert_eq!(
            results[3],
            "Some text before Some messages for the default and text after"
        );
    });
}
