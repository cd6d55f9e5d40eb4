//! Unix timestamp recognizer: a bare 10-to-13-digit integer, read as
//! seconds or milliseconds since the epoch depending on magnitude.

use std::sync::OnceLock;

use chrono::DateTime;
use regex::Regex;

use super::{Outcome, ParserContext};

fn timestamp_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{10,13})$").unwrap())
}

/// Values above 10^12 are milliseconds; anything else is seconds. The
/// result is always in UTC.
pub(crate) fn parse(ctx: &ParserContext) -> Outcome {
    let Some(caps) = timestamp_regex().captures(ctx.input.trim()) else {
        return Outcome::NoMatch;
    };
    let Ok(value) = caps[1].parse::<i64>() else {
        return Outcome::NoMatch;
    };

    let (secs, nanos) = if value > 1_000_000_000_000 {
        (value / 1000, ((value % 1000) * 1_000_000) as u32)
    } else {
        (value, 0)
    };

    match DateTime::from_timestamp(secs, nanos) {
        Some(dt) => Outcome::Match(dt.fixed_offset()),
        None => Outcome::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Settings;

    fn outcome(input: &str) -> Outcome {
        let settings = Settings::default();
        parse(&ParserContext::new(input, &settings))
    }

    #[test]
    fn seconds_and_milliseconds_agree() {
        let secs = match outcome("1609459200") {
            Outcome::Match(dt) => dt,
            other => panic!("expected match, got {other:?}"),
        };
        assert_eq!(secs.to_rfc3339(), "2021-01-01T00:00:00+00:00");

        let millis = match outcome("1609459200000") {
            Outcome::Match(dt) => dt,
            other => panic!("expected match, got {other:?}"),
        };
        assert_eq!(millis, secs);
    }

    #[test]
    fn declines_other_digit_counts() {
        assert!(matches!(outcome("2024"), Outcome::NoMatch));
        assert!(matches!(outcome("123456789"), Outcome::NoMatch));
        assert!(matches!(outcome("12345678901234"), Outcome::NoMatch));
        assert!(matches!(outcome("not a number"), Outcome::NoMatch));
    }
}
