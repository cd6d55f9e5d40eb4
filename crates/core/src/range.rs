//! Date-range parsing: "from A to B", "between A and B", dash-separated
//! pairs, and "next/last N units", plus range enumeration helpers.

use std::sync::OnceLock;

use chrono::{Datelike, Duration, Weekday};
use regex::Regex;

use crate::calendar::{add_unit, Unit};
use crate::error::ParseError;
use crate::formats::ParserContext;
use crate::types::{DateRange, Instant, Settings};

struct RangePatterns {
    from_to: Regex,
    between_and: Regex,
    dash: Regex,
    iso_shaped: Regex,
    next_n: Regex,
    last_n: Regex,
}

fn patterns() -> &'static RangePatterns {
    static PATTERNS: OnceLock<RangePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| RangePatterns {
        from_to: Regex::new(r"(?i)^from\s+.+\s+to\s+.+$").unwrap(),
        between_and: Regex::new(r"(?i)^between\s+.+\s+and\s+.+$").unwrap(),
        dash: Regex::new(r"^(.+?)\s+-\s+(.+)$").unwrap(),
        // A dash range would eat an ISO date's own dashes.
        iso_shaped: Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap(),
        next_n: Regex::new(r"(?i)^next\s+(\d+)\s+(day|week|month|year)s?$").unwrap(),
        last_n: Regex::new(r"(?i)^last\s+(\d+)\s+(day|week|month|year)s?$").unwrap(),
    })
}

pub(crate) fn parse_range_impl(input: &str, settings: &Settings) -> Result<DateRange, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let patterns = patterns();
    let mut last_err: Option<ParseError> = None;

    if patterns.from_to.is_match(input) {
        match keyword_range(input, "from", "to", settings) {
            Ok(range) => return Ok(range),
            Err(err) => last_err = Some(err),
        }
    }
    if patterns.between_and.is_match(input) {
        match keyword_range(input, "between", "and", settings) {
            Ok(range) => return Ok(range),
            Err(err) => last_err = Some(err),
        }
    }
    // Dash ranges are skipped for ISO-shaped inputs: splitting would eat
    // the date's own dashes or a negative offset.
    if !patterns.iso_shaped.is_match(input) {
        if let Some(caps) = patterns.dash.captures(input) {
            match pair(caps[1].trim(), caps[2].trim(), input, settings) {
                Ok(range) => return Ok(range),
                Err(err) => last_err = Some(err),
            }
        }
    }
    if let Some(caps) = patterns.next_n.captures(input) {
        if let Some(range) = anchored_range(input, &caps[1], &caps[2], 1, settings) {
            return Ok(range);
        }
    }
    if let Some(caps) = patterns.last_n.captures(input) {
        if let Some(range) = anchored_range(input, &caps[1], &caps[2], -1, settings) {
            return Ok(range);
        }
    }

    match last_err {
        Some(err) => Err(err),
        None => Err(ParseError::InvalidFormat {
            input: input.to_string(),
            suggestion: "supported range formats: 'from X to Y', 'between X and Y', 'X - Y', \
                         'next N days', 'last N weeks'"
                .to_string(),
        }),
    }
}

/// Split "from A to B" on the separator keyword. The keyword may itself
/// appear inside A or B ("from next Friday to next Monday"), so every
/// candidate split is tried from right to left and the first one whose
/// halves both parse wins. When none does, the rightmost split's error
/// surfaces, wrapped with the offending half.
fn keyword_range(
    input: &str,
    start_keyword: &str,
    separator: &str,
    settings: &Settings,
) -> Result<DateRange, ParseError> {
    // The leading keyword is ASCII (the regex matched it), so slicing by
    // its byte length is safe.
    let remaining = input[start_keyword.len()..].trim_start();

    let needle = format!(" {} ", separator.to_lowercase());
    let needle_bytes = needle.as_bytes();
    let positions: Vec<usize> = remaining
        .as_bytes()
        .windows(needle_bytes.len())
        .enumerate()
        .filter(|(_, window)| window.eq_ignore_ascii_case(needle_bytes))
        .map(|(pos, _)| pos)
        .collect();
    if positions.is_empty() {
        return Err(ParseError::InvalidFormat {
            input: input.to_string(),
            suggestion: format!("separator keyword {separator:?} not found"),
        });
    }

    let mut rightmost_err: Option<ParseError> = None;
    for &split in positions.iter().rev() {
        let start_str = remaining[..split].trim();
        let end_str = remaining[split + needle.len()..].trim();

        let start = crate::parse(start_str, Some(settings));
        let end = crate::parse(end_str, Some(settings));
        match (start, end) {
            (Ok(start), Ok(end)) => return checked(start, end, input),
            (Err(err), _) if rightmost_err.is_none() => {
                rightmost_err = Some(ParseError::ParseFailure {
                    input: start_str.to_string(),
                    parser: "range",
                    source: Box::new(err),
                });
            }
            (_, Err(err)) if rightmost_err.is_none() => {
                rightmost_err = Some(ParseError::ParseFailure {
                    input: end_str.to_string(),
                    parser: "range",
                    source: Box::new(err),
                });
            }
            _ => {}
        }
    }

    Err(rightmost_err.unwrap_or_else(|| ParseError::InvalidFormat {
        input: input.to_string(),
        suggestion: "could not find a valid date split".to_string(),
    }))
}

fn pair(
    start_str: &str,
    end_str: &str,
    original: &str,
    settings: &Settings,
) -> Result<DateRange, ParseError> {
    let start = crate::parse(start_str, Some(settings)).map_err(|err| ParseError::ParseFailure {
        input: start_str.to_string(),
        parser: "range",
        source: Box::new(err),
    })?;
    let end = crate::parse(end_str, Some(settings)).map_err(|err| ParseError::ParseFailure {
        input: end_str.to_string(),
        parser: "range",
        source: Box::new(err),
    })?;
    checked(start, end, original)
}

fn checked(start: Instant, end: Instant, original: &str) -> Result<DateRange, ParseError> {
    if start > end {
        return Err(ParseError::invalid(format!(
            "start date {start} is after end date {end}"
        )));
    }
    Ok(DateRange {
        start,
        end,
        matched_text: original.to_string(),
    })
}

/// "next 5 days" spans [reference, reference + 5 days]; "last 2 weeks"
/// spans [reference - 2 weeks, reference].
fn anchored_range(
    input: &str,
    amount: &str,
    unit: &str,
    direction: i64,
    settings: &Settings,
) -> Option<DateRange> {
    let amount: i64 = amount.parse().ok()?;
    let unit = Unit::from_english(&unit.to_lowercase())?;
    let base = ParserContext::new(input, settings).base;
    let shifted = add_unit(base, direction * amount, unit);
    let (start, end) = if direction > 0 { (base, shifted) } else { (shifted, base) };
    Some(DateRange {
        start,
        end,
        matched_text: input.to_string(),
    })
}

/// All dates from `start` to `end` inclusive, stepping `step_days` at a
/// time (a non-positive step means one day).
pub fn dates_in_range(start: Instant, end: Instant, step_days: i64) -> Vec<Instant> {
    let step = if step_days <= 0 { 1 } else { step_days };
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        current += Duration::days(step);
    }
    dates
}

/// All business days (Monday through Friday) from `start` to `end`.
pub fn business_days_in_range(start: Instant, end: Instant) -> Vec<Instant> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            dates.push(current);
        }
        current += Duration::days(1);
    }
    dates
}

/// Whole days between two instants, truncating partial days.
pub fn days_between(start: Instant, end: Instant) -> i64 {
    (end - start).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn settings() -> Settings {
        Settings {
            relative_base: Some(
                Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap().fixed_offset(),
            ),
            ..Settings::default()
        }
    }

    fn range(input: &str) -> DateRange {
        parse_range_impl(input, &settings()).unwrap()
    }

    #[test]
    fn from_to_absolute_dates() {
        let r = range("from 2024-01-15 to 2024-02-20");
        assert_eq!(r.start.date_naive().to_string(), "2024-01-15");
        assert_eq!(r.end.date_naive().to_string(), "2024-02-20");
        assert_eq!(r.matched_text, "from 2024-01-15 to 2024-02-20");
    }

    #[test]
    fn from_to_with_keyword_inside_halves() {
        // "to" appears once but both halves contain multi-word dates.
        // From the Tuesday reference, next Friday is Oct 18 and next
        // Monday is Oct 21.
        let r = range("from next Friday to next Monday");
        assert_eq!(r.start.date_naive().to_string(), "2024-10-18");
        assert_eq!(r.end.date_naive().to_string(), "2024-10-21");

        // The same phrase reversed produces a start-after-end error, not
        // a silent swap.
        let err = parse_range_impl("from next Monday to next Friday", &settings()).unwrap_err();
        match err {
            ParseError::InvalidDate { reason, .. } => assert!(reason.contains("after end")),
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn from_yesterday_to_tomorrow() {
        let r = range("from yesterday to tomorrow");
        assert_eq!(r.start.date_naive().to_string(), "2024-10-14");
        assert_eq!(r.end.date_naive().to_string(), "2024-10-16");
    }

    #[test]
    fn between_and() {
        let r = range("between 2024-03-01 and 2024-03-15");
        assert_eq!(r.start.date_naive().to_string(), "2024-03-01");
        assert_eq!(r.end.date_naive().to_string(), "2024-03-15");
    }

    #[test]
    fn dash_ranges() {
        let r = range("yesterday - tomorrow");
        assert_eq!(r.start.date_naive().to_string(), "2024-10-14");
        assert_eq!(r.end.date_naive().to_string(), "2024-10-16");

        let r = range("Jan 5 2024 - Mar 20 2024");
        assert_eq!(r.start.date_naive().to_string(), "2024-01-05");
        assert_eq!(r.end.date_naive().to_string(), "2024-03-20");
    }

    #[test]
    fn dash_is_guarded_against_iso_shapes() {
        // ISO-shaped inputs never go through the dash splitter, so a
        // trailing negative offset cannot be read as a range separator.
        assert!(parse_range_impl("2024-01-15 - 2024-02-20", &settings()).is_err());
        let parsed = crate::parse("2024-12-31T10:30:00 -05:00", Some(&settings()));
        assert!(parsed.is_ok());
    }

    #[test]
    fn anchored_ranges() {
        let r = range("next 5 days");
        assert_eq!(r.start.date_naive().to_string(), "2024-10-15");
        assert_eq!(r.end.date_naive().to_string(), "2024-10-20");

        let r = range("last 2 weeks");
        assert_eq!(r.start.date_naive().to_string(), "2024-10-01");
        assert_eq!(r.end.date_naive().to_string(), "2024-10-15");

        let r = range("next 3 months");
        assert_eq!(r.end.date_naive().to_string(), "2025-01-15");
    }

    #[test]
    fn reversed_ranges_fail() {
        let err = parse_range_impl("from tomorrow to yesterday", &settings()).unwrap_err();
        match err {
            ParseError::InvalidDate { reason, .. } => assert!(reason.contains("after end")),
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn same_date_is_a_valid_range() {
        let r = range("from today to today");
        assert_eq!(r.start, r.end);
    }

    #[test]
    fn empty_and_invalid_inputs() {
        assert!(matches!(
            parse_range_impl("", &settings()),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            parse_range_impl("not a range at all", &settings()),
            Err(ParseError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn failing_half_is_surfaced() {
        let err = parse_range_impl("from garbage to tomorrow", &settings()).unwrap_err();
        match err {
            ParseError::ParseFailure { input, parser, .. } => {
                assert_eq!(parser, "range");
                assert_eq!(input, "garbage");
            }
            other => panic!("expected ParseFailure, got {other:?}"),
        }
    }

    #[test]
    fn case_insensitive_keywords() {
        let r = range("FROM 2024-01-15 TO 2024-02-20");
        assert_eq!(r.start.date_naive().to_string(), "2024-01-15");
    }

    #[test]
    fn enumeration_helpers() {
        let s = settings();
        let r = parse_range_impl("from 2024-10-14 to 2024-10-20", &s).unwrap();

        let all = dates_in_range(r.start, r.end, 1);
        assert_eq!(all.len(), 7);

        let weekly = dates_in_range(r.start, r.end, 7);
        assert_eq!(weekly.len(), 1);

        // Oct 14 2024 is a Monday: five business days that week.
        let business = business_days_in_range(r.start, r.end);
        assert_eq!(business.len(), 5);

        assert_eq!(days_between(r.start, r.end), 6);
    }
}
