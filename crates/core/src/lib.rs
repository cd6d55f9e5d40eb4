//! Dateglot Core
//!
//! Natural-language date, time and date-range parsing across ten
//! languages and several script systems. Input strings run through an
//! ordered cascade of format recognizers (timestamps, absolute dates,
//! ISO weeks, ordinals, incomplete dates, relative expressions, times of
//! day); the first recognizer that understands the input wins.
//!
//! # Quick Start
//!
//! ```
//! use dateglot_core::{parse, Settings};
//! use chrono::{TimeZone, Utc};
//!
//! // Absolute formats need no configuration.
//! let date = parse("2024-12-31T10:30:00Z", None).unwrap();
//! assert_eq!(date.to_rfc3339(), "2024-12-31T10:30:00+00:00");
//!
//! // Relative expressions resolve against a reference instant.
//! let settings = Settings {
//!     relative_base: Some(Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap().fixed_offset()),
//!     ..Settings::default()
//! };
//! let monday = parse("next Monday", Some(&settings)).unwrap();
//! assert_eq!(monday.to_rfc3339(), "2024-10-21T12:00:00+00:00");
//! ```
//!
//! # Languages
//!
//! ```
//! use dateglot_core::{parse, Settings};
//!
//! let settings = Settings {
//!     languages: vec!["fr".to_string()],
//!     ..Settings::default()
//! };
//! let date = parse("15 décembre 2024", Some(&settings)).unwrap();
//! assert_eq!(date.date_naive().to_string(), "2024-12-15");
//! ```

mod calendar;
mod error;
mod extract;
mod formats;
pub mod lexicon;
mod range;
pub mod timezone;
mod types;

pub use error::ParseError;
pub use lexicon::{Lexicon, Registry};
pub use range::{business_days_in_range, dates_in_range, days_between};
pub use timezone::{apply_timezone, extract_timezone, parse_timezone, Zone, ZoneInfo};
pub use types::{
    DateOrder, DateRange, Instant, ParsedDate, ParserKind, PreferDatesFrom, Settings,
};

use formats::{Outcome, ParserContext};

/// Parse a single date or time expression into an instant.
///
/// Recognizers are tried in a fixed priority: timestamp, absolute, week,
/// ordinal, incomplete, relative, time. Explicit formats beat inferred
/// ones; a bare four-digit year is a year, not a truncated timestamp,
/// and quarter-aware phrases win over naive month arithmetic. A
/// recognizer that matches but finds the date impossible or ambiguous
/// stops the cascade, since a later recognizer's accidental match would
/// misrepresent the input's evident shape.
pub fn parse(input: &str, settings: Option<&Settings>) -> Result<Instant, ParseError> {
    let owned;
    let settings = match settings {
        Some(settings) => settings,
        None => {
            owned = Settings::default();
            &owned
        }
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let ctx = ParserContext::new(trimmed, settings);
    for kind in ParserKind::ALL {
        if !settings.enabled_parsers.contains(&kind) {
            continue;
        }
        let outcome = match kind {
            ParserKind::Timestamp => formats::timestamp::parse(&ctx),
            ParserKind::Absolute => formats::absolute::parse(&ctx),
            ParserKind::Week => formats::week::parse(&ctx),
            ParserKind::Ordinal => formats::ordinal::parse(&ctx),
            ParserKind::Incomplete => formats::incomplete::parse(&ctx),
            ParserKind::Relative => formats::relative::parse(&ctx),
            ParserKind::Time => formats::time_of_day::parse(&ctx),
        };
        match outcome {
            Outcome::Match(instant) => {
                tracing::trace!(parser = kind.name(), input = trimmed, "parsed");
                return Ok(instant);
            }
            Outcome::Invalid(err) => {
                tracing::debug!(parser = kind.name(), input = trimmed, error = %err, "rejected");
                return Err(err);
            }
            Outcome::NoMatch => {}
        }
    }

    Err(ParseError::InvalidFormat {
        input: trimmed.to_string(),
        suggestion: error::suggest_format(trimmed),
    })
}

/// Parse a date range such as "from A to B", "between A and B", "A - B"
/// or "next N days".
///
/// ```
/// use dateglot_core::{parse_range, Settings};
/// use chrono::{TimeZone, Utc};
///
/// let settings = Settings {
///     relative_base: Some(Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap().fixed_offset()),
///     ..Settings::default()
/// };
/// let range = parse_range("from yesterday to tomorrow", Some(&settings)).unwrap();
/// assert_eq!(range.start.date_naive().to_string(), "2024-10-14");
/// assert_eq!(range.end.date_naive().to_string(), "2024-10-16");
/// ```
pub fn parse_range(input: &str, settings: Option<&Settings>) -> Result<DateRange, ParseError> {
    let owned;
    let settings = match settings {
        Some(settings) => settings,
        None => {
            owned = Settings::default();
            &owned
        }
    };
    range::parse_range_impl(input, settings)
}

/// Extract every date mention from a passage of prose.
///
/// Results are ordered by byte position and each one reparses to the
/// same instant through [`parse`].
pub fn extract_dates(
    input: &str,
    settings: Option<&Settings>,
) -> Result<Vec<ParsedDate>, ParseError> {
    let owned;
    let settings = match settings {
        Some(settings) => settings,
        None => {
            owned = Settings::default();
            &owned
        }
    };
    Ok(extract::extract_all(input, settings))
}

/// Parse a time-of-day expression against an explicit base date.
///
/// The result keeps `base`'s civil date and zone, with the parsed
/// hour, minute and second.
pub fn parse_time(input: &str, base: Instant) -> Result<Instant, ParseError> {
    let settings = Settings {
        relative_base: Some(base),
        ..Settings::default()
    };
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let ctx = ParserContext::new(trimmed, &settings);
    match formats::time_of_day::parse(&ctx) {
        Outcome::Match(instant) => Ok(instant),
        Outcome::Invalid(err) => Err(err),
        Outcome::NoMatch => Err(ParseError::InvalidFormat {
            input: trimmed.to_string(),
            suggestion: "expected a time of day (14:30, 3:30 PM, quarter past 3, noon)".to_string(),
        }),
    }
}

/// All registered language codes, in registration order.
pub fn supported_languages() -> Vec<&'static str> {
    lexicon::registry().supported()
}

/// Heuristically detect the language of an input string. A hint for
/// callers that do not set [`Settings::languages`]; `parse` itself never
/// auto-detects.
pub fn detect_language(input: &str) -> &'static str {
    lexicon::registry().detect(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn reference_settings() -> Settings {
        Settings {
            relative_base: Some(
                Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap().fixed_offset(),
            ),
            ..Settings::default()
        }
    }

    #[test]
    fn empty_input() {
        assert!(matches!(parse("", None), Err(ParseError::EmptyInput)));
        assert!(matches!(parse("   ", None), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn unmatched_input_suggests_a_shape() {
        match parse("not a date at all", None) {
            Err(ParseError::InvalidFormat { suggestion, .. }) => {
                assert!(suggestion.contains("supported formats"));
            }
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
        match parse("20241231", None) {
            Err(ParseError::InvalidFormat { suggestion, .. }) => {
                assert!(suggestion.contains("YYYY-MM-DD"));
            }
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn year_beats_timestamp_for_four_digits() {
        let date = parse("2024", None).unwrap();
        assert_eq!(date.date_naive().to_string(), "2024-01-01");
    }

    #[test]
    fn disabled_parsers_are_skipped() {
        let settings = Settings {
            enabled_parsers: vec![ParserKind::Absolute],
            ..reference_settings()
        };
        assert!(parse("2024-12-31", Some(&settings)).is_ok());
        assert!(parse("1609459200", Some(&settings)).is_err());
        assert!(parse("tomorrow", Some(&settings)).is_err());
    }

    #[test]
    fn parse_time_inherits_base_date() {
        let base = Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap().fixed_offset();
        let t = parse_time("3:30 PM", base).unwrap();
        assert_eq!(t.to_rfc3339(), "2024-10-15T15:30:00+00:00");
        assert!(parse_time("not a time", base).is_err());
    }

    #[test]
    fn registry_helpers() {
        assert!(supported_languages().contains(&"ja"));
        assert_eq!(detect_language("mañana"), "es");
    }

    #[test]
    fn determinism() {
        let settings = reference_settings();
        let a = parse("3 days ago", Some(&settings)).unwrap();
        let b = parse("3 days ago", Some(&settings)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn case_insensitive_keywords() {
        let settings = reference_settings();
        for input in ["YESTERDAY", "yesterday", "YeStErDaY"] {
            assert_eq!(
                parse(input, Some(&settings)).unwrap(),
                parse("yesterday", Some(&settings)).unwrap(),
                "{input}"
            );
        }
        assert_eq!(
            parse("DECEMBER 31, 2024", Some(&settings)).unwrap(),
            parse("december 31, 2024", Some(&settings)).unwrap()
        );
        assert_eq!(
            parse("2024-12-31T10:30:00Z", Some(&settings)).unwrap(),
            parse("2024-12-31t10:30:00z", Some(&settings)).unwrap()
        );
    }
}
