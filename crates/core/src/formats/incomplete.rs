//! Incomplete date recognizer: inputs missing the year, the day, or
//! both, lifted to a concrete date by `prefer_dates_from`.

use std::sync::OnceLock;

use chrono::Datelike;
use regex::Regex;

use super::{ordinal::lift_year, Outcome, ParserContext};
use crate::calendar::validate_date;
use crate::lexicon::{self, cached_regex, lang_key};
use crate::types::PreferDatesFrom;

fn year_only_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(19\d{2}|20\d{2})$").unwrap())
}

pub(crate) fn parse(ctx: &ParserContext) -> Outcome {
    let input = ctx.input.trim();
    let key = lang_key(&ctx.languages);
    let months = lexicon::months_alternation(&ctx.languages);

    if !months.is_empty() {
        // Bare month name: first of that month.
        let month_only = cached_regex(&format!("incomplete:month:{key}"), || {
            format!(r"(?i)^({months})$")
        });
        if let Some(caps) = month_only.captures(input) {
            if let Some(month) = lexicon::parse_month(&caps[1], &ctx.languages) {
                let year = lift_month_year(ctx, month);
                return Outcome::from_result(
                    validate_date(year, month, 1).map(|date| ctx.localize_date(date)),
                );
            }
        }

        // "June 15"
        let month_day = cached_regex(&format!("incomplete:month-day:{key}"), || {
            format!(r"(?i)^({months})\s+(\d{{1,2}})$")
        });
        if let Some(caps) = month_day.captures(input) {
            return month_day_outcome(ctx, &caps[1], &caps[2]);
        }

        // "15 June"
        let day_month = cached_regex(&format!("incomplete:day-month:{key}"), || {
            format!(r"(?i)^(\d{{1,2}})\s+({months})$")
        });
        if let Some(caps) = day_month.captures(input) {
            return month_day_outcome(ctx, &caps[2], &caps[1]);
        }

        // "3 de junio"
        let day_de_month = cached_regex(&format!("incomplete:day-de-month:{key}"), || {
            format!(r"(?i)^(\d{{1,2}})\s+de\s+({months})$")
        });
        if let Some(caps) = day_de_month.captures(input) {
            return month_day_outcome(ctx, &caps[2], &caps[1]);
        }
    }

    // Bare four-digit year: January 1.
    if let Some(caps) = year_only_regex().captures(input) {
        let year: i32 = caps[1].parse().unwrap_or(0);
        return Outcome::from_result(
            validate_date(year, 1, 1).map(|date| ctx.localize_date(date)),
        );
    }

    Outcome::NoMatch
}

fn month_day_outcome(ctx: &ParserContext, month_name: &str, day_str: &str) -> Outcome {
    let Some(month) = lexicon::parse_month(month_name, &ctx.languages) else {
        return Outcome::NoMatch;
    };
    let day: u32 = day_str.parse().unwrap_or(0);
    let year = lift_year(ctx, month, day);
    Outcome::from_result(validate_date(year, month, day).map(|date| ctx.localize_date(date)))
}

fn lift_month_year(ctx: &ParserContext, month: u32) -> i32 {
    let base = ctx.base;
    match ctx.settings.prefer_dates_from {
        PreferDatesFrom::Past => {
            if month > base.month() {
                base.year() - 1
            } else {
                base.year()
            }
        }
        _ => {
            if month < base.month() {
                base.year() + 1
            } else {
                base.year()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Settings;
    use chrono::{TimeZone, Utc};

    fn settings_at(y: i32, mo: u32, d: u32) -> Settings {
        Settings {
            relative_base: Some(Utc.with_ymd_and_hms(y, mo, d, 12, 0, 0).unwrap().fixed_offset()),
            ..Settings::default()
        }
    }

    fn expect_date(input: &str, settings: &Settings, expected: &str) {
        match parse(&ParserContext::new(input, settings)) {
            Outcome::Match(dt) => assert_eq!(dt.date_naive().to_string(), expected, "{input}"),
            other => panic!("{input:?} did not match: {other:?}"),
        }
    }

    #[test]
    fn bare_year() {
        let settings = settings_at(2024, 10, 15);
        expect_date("2024", &settings, "2024-01-01");
        expect_date("1999", &settings, "1999-01-01");
    }

    #[test]
    fn bare_month_lifts_by_preference() {
        let settings = settings_at(2024, 10, 15);
        expect_date("December", &settings, "2024-12-01");
        // May has passed: future preference goes to next year.
        expect_date("May", &settings, "2025-05-01");

        let past = Settings {
            prefer_dates_from: PreferDatesFrom::Past,
            ..settings_at(2024, 10, 15)
        };
        expect_date("May", &past, "2024-05-01");
        expect_date("December", &past, "2023-12-01");
    }

    #[test]
    fn month_and_day_without_year() {
        let settings = settings_at(2024, 10, 15);
        expect_date("June 15", &settings, "2025-06-15");
        expect_date("15 June", &settings, "2025-06-15");
        expect_date("December 25", &settings, "2024-12-25");
    }

    #[test]
    fn spanish_connector_and_months() {
        let settings = Settings {
            languages: vec!["es".to_string()],
            ..settings_at(2024, 10, 15)
        };
        expect_date("3 de junio", &settings, "2025-06-03");
        expect_date("diciembre", &settings, "2024-12-01");
    }

    #[test]
    fn declines_other_shapes() {
        let settings = settings_at(2024, 10, 15);
        assert!(matches!(
            parse(&ParserContext::new("hello", &settings)),
            Outcome::NoMatch
        ));
        assert!(matches!(
            parse(&ParserContext::new("1850", &settings)),
            Outcome::NoMatch
        ));
    }
}
