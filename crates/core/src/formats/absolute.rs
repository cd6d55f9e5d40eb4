//! Absolute date recognizer: CJK year-month-day, ISO 8601 with optional
//! time, two-digit-year ISO, month-name forms in every enabled language,
//! and numeric triples with order disambiguation.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::{Outcome, ParserContext};
use crate::calendar::{
    detect_date_order, expand_two_digit_year, is_ambiguous_numeric, validate_date, validate_time,
};
use crate::error::ParseError;
use crate::lexicon::{self, cached_regex, lang_key};
use crate::timezone::{apply_timezone, extract_timezone, ZoneInfo};
use crate::types::{DateOrder, Instant};

struct AbsolutePatterns {
    cjk: Regex,
    iso: Regex,
    iso_two_digit_year: Regex,
    month_name_day_first: Regex,
    month_name_month_first: Regex,
    numeric: Regex,
}

pub(crate) const EN_MONTHS: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|\
                                    jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|\
                                    oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

fn patterns() -> &'static AbsolutePatterns {
    static PATTERNS: OnceLock<AbsolutePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| AbsolutePatterns {
        cjk: Regex::new(r"^(\d{4})年(\d{1,2})月(\d{1,2})日$").unwrap(),
        iso: Regex::new(r"(?i)^(\d{4})-(\d{1,2})-(\d{1,2})(?:[T\s](\d{1,2}):(\d{1,2})(?::(\d{1,2}))?)?$")
            .unwrap(),
        iso_two_digit_year: Regex::new(r"^(\d{2})-(\d{1,2})-(\d{1,2})$").unwrap(),
        month_name_day_first: Regex::new(&format!(
            r"(?i)^(\d{{1,2}})\s+({EN_MONTHS})[,\s]*(\d{{2,4}})$"
        ))
        .unwrap(),
        month_name_month_first: Regex::new(&format!(
            r"(?i)^({EN_MONTHS})\s+(\d{{1,2}})[,\s]*(\d{{2,4}})$"
        ))
        .unwrap(),
        numeric: Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})$").unwrap(),
    })
}

/// Try absolute patterns in order: any trailing timezone is split off
/// first and applied to whichever pattern produces the instant.
pub(crate) fn parse(ctx: &ParserContext) -> Outcome {
    let (date_str, tz) = extract_timezone(&ctx.input);

    match multi_lang_month_name(ctx, &date_str) {
        Outcome::Match(dt) => return Outcome::Match(with_zone(dt, tz.as_ref())),
        Outcome::Invalid(err) => return Outcome::Invalid(err),
        Outcome::NoMatch => {}
    }

    let patterns = patterns();
    type Parser = fn(&ParserContext, &Captures) -> Result<Instant, ParseError>;
    let ordered: [(&Regex, Parser); 6] = [
        (&patterns.cjk, parse_cjk),
        (&patterns.iso, parse_iso),
        (&patterns.iso_two_digit_year, parse_iso_two_digit_year),
        (&patterns.month_name_day_first, parse_month_name),
        (&patterns.month_name_month_first, parse_month_name_first),
        (&patterns.numeric, parse_numeric),
    ];

    for (regex, parser) in ordered {
        let Some(caps) = regex.captures(&date_str) else {
            continue;
        };
        match parser(ctx, &caps) {
            Ok(dt) => return Outcome::Match(with_zone(dt, tz.as_ref())),
            // The pattern matched but named an impossible or ambiguous
            // date; surface it instead of letting a later pattern guess.
            Err(err @ ParseError::InvalidDate { .. }) => return Outcome::Invalid(err),
            Err(err @ ParseError::AmbiguousDate { .. }) => return Outcome::Invalid(err),
            Err(_) => {}
        }
    }

    Outcome::NoMatch
}

fn with_zone(dt: Instant, tz: Option<&ZoneInfo>) -> Instant {
    match tz {
        Some(zone) => apply_timezone(dt, zone),
        None => dt,
    }
}

fn parse_cjk(ctx: &ParserContext, caps: &Captures) -> Result<Instant, ParseError> {
    let year: i32 = caps[1].parse().unwrap_or(0);
    let month: u32 = caps[2].parse().unwrap_or(0);
    let day: u32 = caps[3].parse().unwrap_or(0);
    let date = validate_date(year, month, day)?;
    Ok(ctx.localize_date(date))
}

fn parse_iso(ctx: &ParserContext, caps: &Captures) -> Result<Instant, ParseError> {
    let year: i32 = caps[1].parse().unwrap_or(0);
    let month: u32 = caps[2].parse().unwrap_or(0);
    let day: u32 = caps[3].parse().unwrap_or(0);
    let hour: u32 = caps.get(4).map_or(0, |m| m.as_str().parse().unwrap_or(0));
    let minute: u32 = caps.get(5).map_or(0, |m| m.as_str().parse().unwrap_or(0));
    let second: u32 = caps.get(6).map_or(0, |m| m.as_str().parse().unwrap_or(0));

    let date = validate_date(year, month, day)?;
    validate_time(hour, minute, second)?;
    let naive = date
        .and_hms_opt(hour, minute, second)
        .ok_or_else(|| ParseError::invalid("time of day out of range"))?;
    Ok(ctx.localize(naive))
}

fn parse_iso_two_digit_year(ctx: &ParserContext, caps: &Captures) -> Result<Instant, ParseError> {
    let yy: i32 = caps[1].parse().unwrap_or(0);
    let year = expand_two_digit_year(yy);
    let month: u32 = caps[2].parse().unwrap_or(0);
    let day: u32 = caps[3].parse().unwrap_or(0);
    let date = validate_date(year, month, day)?;
    Ok(ctx.localize_date(date))
}

/// "31 Dec 2024" and friends, English static fallback.
fn parse_month_name(ctx: &ParserContext, caps: &Captures) -> Result<Instant, ParseError> {
    let day: u32 = caps[1].parse().unwrap_or(0);
    let month_name = &caps[2];
    let year_raw: i32 = caps[3].parse().unwrap_or(0);
    finish_month_name(ctx, day, month_name, year_raw)
}

/// "December 31, 2024" and friends, English static fallback.
fn parse_month_name_first(ctx: &ParserContext, caps: &Captures) -> Result<Instant, ParseError> {
    let month_name = &caps[1];
    let day: u32 = caps[2].parse().unwrap_or(0);
    let year_raw: i32 = caps[3].parse().unwrap_or(0);
    finish_month_name(ctx, day, month_name, year_raw)
}

fn finish_month_name(
    ctx: &ParserContext,
    day: u32,
    month_name: &str,
    year_raw: i32,
) -> Result<Instant, ParseError> {
    let english = lexicon::registry().get("en");
    let month = english
        .month(&month_name.to_lowercase())
        .ok_or_else(|| ParseError::invalid(format!("unknown month name: {month_name}")))?;
    let year = if year_raw < 100 {
        expand_two_digit_year(year_raw)
    } else {
        year_raw
    };
    let date = validate_date(year, month, day)?;
    Ok(ctx.localize_date(date))
}

fn parse_numeric(ctx: &ParserContext, caps: &Captures) -> Result<Instant, ParseError> {
    let a: u32 = caps[1].parse().unwrap_or(0);
    let b: u32 = caps[2].parse().unwrap_or(0);
    let year_raw: i32 = caps[3].parse().unwrap_or(0);
    let year = if year_raw < 100 {
        expand_two_digit_year(year_raw)
    } else {
        year_raw
    };

    let detected = if ctx.auto_date_order {
        detect_date_order(a, b, year)
    } else {
        None
    };

    if ctx.settings.strict && ctx.auto_date_order && detected.is_none() && is_ambiguous_numeric(a, b)
    {
        let candidates = [(a, b), (b, a)]
            .into_iter()
            .filter_map(|(month, day)| validate_date(year, month, day).ok())
            .map(|date| ctx.localize_date(date))
            .collect();
        return Err(ParseError::AmbiguousDate {
            input: ctx.input.clone(),
            candidates,
            reason: "numeric date is ambiguous (could be MDY or DMY format)".to_string(),
        });
    }

    let order = detected.unwrap_or(match ctx.settings.date_order {
        DateOrder::Auto => DateOrder::Mdy,
        explicit => explicit,
    });
    let (month, day) = match order {
        DateOrder::Dmy => (b, a),
        _ => (a, b),
    };

    let date = validate_date(year, month, day)?;
    Ok(ctx.localize_date(date))
}

/// Month-name forms built from every enabled lexicon: "15 diciembre 2024",
/// "15 de marzo de 2024", "marzo 15 2024". The `de` connectors are
/// recognized for every language; they simply never match outside the
/// languages that use them.
fn multi_lang_month_name(ctx: &ParserContext, input: &str) -> Outcome {
    let key = lang_key(&ctx.languages);
    let months = lexicon::months_alternation(&ctx.languages);
    if months.is_empty() {
        return Outcome::NoMatch;
    }

    let day_month_year = cached_regex(&format!("absolute:dmy:{key}"), || {
        format!(r"(?i)^(\d{{1,2}})\s+({months})[,\s]+(\d{{2,4}})$")
    });
    let day_de_month_de_year = cached_regex(&format!("absolute:dmy-de-de:{key}"), || {
        format!(r"(?i)^(\d{{1,2}})\s+de\s+({months})\s+de\s+(\d{{2,4}})$")
    });
    let day_de_month_year = cached_regex(&format!("absolute:dmy-de:{key}"), || {
        format!(r"(?i)^(\d{{1,2}})\s+de\s+({months})\s+(\d{{2,4}})$")
    });
    let month_day_year = cached_regex(&format!("absolute:mdy:{key}"), || {
        format!(r"(?i)^({months})\s+(\d{{1,2}})[,\s]+(\d{{2,4}})$")
    });

    let attempts: [(&Regex, bool); 4] = [
        (day_month_year.as_ref(), false),
        (day_de_month_de_year.as_ref(), false),
        (day_de_month_year.as_ref(), false),
        (month_day_year.as_ref(), true),
    ];

    for (regex, month_first) in attempts {
        let Some(caps) = regex.captures(input) else {
            continue;
        };
        let (day_str, month_name) = if month_first {
            (&caps[2], &caps[1])
        } else {
            (&caps[1], &caps[2])
        };
        let day: u32 = day_str.parse().unwrap_or(0);
        let year_raw: i32 = caps[3].parse().unwrap_or(0);
        let Some(month) = lexicon::parse_month(month_name, &ctx.languages) else {
            continue;
        };
        let year = if year_raw < 100 {
            expand_two_digit_year(year_raw)
        } else {
            year_raw
        };
        return match validate_date(year, month, day) {
            Ok(date) => Outcome::Match(ctx.localize_date(date)),
            Err(err) => Outcome::Invalid(err),
        };
    }

    Outcome::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Settings;

    fn parse_abs(input: &str, settings: &Settings) -> Outcome {
        parse(&ParserContext::new(input, settings))
    }

    fn expect_date(outcome: Outcome, expected: &str) {
        match outcome {
            Outcome::Match(dt) => assert_eq!(dt.date_naive().to_string(), expected),
            other => panic!("expected match, got {other:?}"),
        }
    }

    #[test]
    fn iso_with_and_without_time() {
        let settings = Settings::default();
        expect_date(parse_abs("2024-12-31", &settings), "2024-12-31");
        match parse_abs("2024-12-31T10:30:00", &settings) {
            Outcome::Match(dt) => assert_eq!(dt.to_rfc3339(), "2024-12-31T10:30:00+00:00"),
            other => panic!("expected match, got {other:?}"),
        }
        match parse_abs("2024-12-31 10:30", &settings) {
            Outcome::Match(dt) => assert_eq!(dt.to_rfc3339(), "2024-12-31T10:30:00+00:00"),
            other => panic!("expected match, got {other:?}"),
        }
    }

    #[test]
    fn iso_rejects_invalid_components() {
        let settings = Settings::default();
        for input in ["2024-02-30", "2024-13-01", "2024-01-32", "2023-02-29"] {
            assert!(
                matches!(parse_abs(input, &settings), Outcome::Invalid(ParseError::InvalidDate { .. })),
                "{input} not rejected"
            );
        }
        assert!(matches!(
            parse_abs("2024-12-31T24:00:00", &settings),
            Outcome::Invalid(ParseError::InvalidDate { .. })
        ));
    }

    #[test]
    fn two_digit_iso_year() {
        let settings = Settings::default();
        expect_date(parse_abs("24-12-31", &settings), "2024-12-31");
        expect_date(parse_abs("70-01-01", &settings), "1970-01-01");
        expect_date(parse_abs("69-12-31", &settings), "2069-12-31");
    }

    #[test]
    fn cjk_year_month_day() {
        let settings = Settings::default();
        expect_date(parse_abs("2024年12月31日", &settings), "2024-12-31");
        assert!(matches!(
            parse_abs("2024年13月1日", &settings),
            Outcome::Invalid(ParseError::InvalidDate { .. })
        ));
    }

    #[test]
    fn english_month_names() {
        let settings = Settings::default();
        expect_date(parse_abs("December 31, 2024", &settings), "2024-12-31");
        expect_date(parse_abs("31 Dec 2024", &settings), "2024-12-31");
        expect_date(parse_abs("Dec 31 2024", &settings), "2024-12-31");
        expect_date(parse_abs("1 Jan 2024", &settings), "2024-01-01");
    }

    #[test]
    fn multi_language_month_names() {
        let settings = Settings {
            languages: vec!["es".to_string(), "en".to_string()],
            ..Settings::default()
        };
        expect_date(parse_abs("31 diciembre 2024", &settings), "2024-12-31");
        expect_date(parse_abs("15 de marzo de 2024", &settings), "2024-03-15");
        expect_date(parse_abs("3 de junio 2024", &settings), "2024-06-03");
        expect_date(parse_abs("marzo 15 2024", &settings), "2024-03-15");
    }

    #[test]
    fn numeric_order_detection_and_settings() {
        let mdy = Settings {
            date_order: DateOrder::Mdy,
            ..Settings::default()
        };
        expect_date(parse_abs("01/02/2024", &mdy), "2024-01-02");

        let dmy = Settings {
            date_order: DateOrder::Dmy,
            ..Settings::default()
        };
        expect_date(parse_abs("01/02/2024", &dmy), "2024-02-01");

        // Unambiguous inputs decide themselves under auto detection.
        let auto = Settings::default();
        expect_date(parse_abs("25/06/2024", &auto), "2024-06-25");
        expect_date(parse_abs("06/25/2024", &auto), "2024-06-25");
        expect_date(parse_abs("13/01/2024", &auto), "2024-01-13");
    }

    #[test]
    fn strict_mode_fails_on_ambiguity() {
        let strict = Settings {
            strict: true,
            ..Settings::default()
        };
        match parse_abs("01/02/2024", &strict) {
            Outcome::Invalid(ParseError::AmbiguousDate { candidates, .. }) => {
                assert_eq!(candidates.len(), 2);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }

        // An explicit order silences the ambiguity even in strict mode.
        let strict_mdy = Settings {
            strict: true,
            date_order: DateOrder::Mdy,
            ..Settings::default()
        };
        expect_date(parse_abs("01/02/2024", &strict_mdy), "2024-01-02");
    }

    #[test]
    fn trailing_zones_are_applied() {
        let settings = Settings::default();
        match parse_abs("2024-12-31T10:30:00Z", &settings) {
            Outcome::Match(dt) => assert_eq!(dt.to_rfc3339(), "2024-12-31T10:30:00+00:00"),
            other => panic!("expected match, got {other:?}"),
        }
        match parse_abs("2024-12-31T10:30:00+05:00", &settings) {
            Outcome::Match(dt) => {
                assert_eq!(dt.offset().local_minus_utc(), 5 * 3600);
                assert_eq!(dt.naive_local().to_string(), "2024-12-31 10:30:00");
            }
            other => panic!("expected match, got {other:?}"),
        }
        match parse_abs("2024-12-31 10:30:00 EST", &settings) {
            Outcome::Match(dt) => assert_eq!(dt.offset().local_minus_utc(), -5 * 3600),
            other => panic!("expected match, got {other:?}"),
        }
    }

    #[test]
    fn declines_unrelated_input() {
        let settings = Settings::default();
        assert!(matches!(parse_abs("next Monday", &settings), Outcome::NoMatch));
        assert!(matches!(parse_abs("1609459200", &settings), Outcome::NoMatch));
    }
}
