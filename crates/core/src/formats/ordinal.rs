//! Ordinal date recognizer: "1st", "3rd of June", "June 3rd 2024".
//! Year-less forms are lifted onto a concrete year by the caller's
//! `prefer_dates_from` direction.

use std::sync::OnceLock;

use chrono::Datelike;
use regex::{Captures, Regex};

use super::{Outcome, ParserContext};
use crate::calendar::{expand_two_digit_year, validate_date};
use crate::error::ParseError;
use crate::lexicon::{self, cached_regex, lang_key};
use crate::types::{Instant, PreferDatesFrom};

fn bare_ordinal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^(\d{1,2})(?:st|nd|rd|th)$").unwrap())
}

/// Pick the year for a month/day pair that did not carry one.
pub(crate) fn lift_year(ctx: &ParserContext, month: u32, day: u32) -> i32 {
    let base = ctx.base;
    let (year, current_month, current_day) = (base.year(), base.month(), base.day());
    match ctx.settings.prefer_dates_from {
        PreferDatesFrom::Past => {
            if month > current_month || (month == current_month && day > current_day) {
                year - 1
            } else {
                year
            }
        }
        _ => {
            if month < current_month || (month == current_month && day < current_day) {
                year + 1
            } else {
                year
            }
        }
    }
}

pub(crate) fn parse(ctx: &ParserContext) -> Outcome {
    let input = ctx.input.trim();
    let key = lang_key(&ctx.languages);
    let months = lexicon::months_alternation(&ctx.languages);

    if !months.is_empty() {
        // "June 3rd", "junio 3"
        let month_day = cached_regex(&format!("ordinal:month-day:{key}"), || {
            format!(r"(?i)^({months})\s+(\d{{1,2}})(?:st|nd|rd|th)?$")
        });
        if let Some(caps) = month_day.captures(input) {
            return month_day_outcome(ctx, &caps[1], &caps[2], None);
        }

        // "3rd of June", "3 de junio"
        let day_of_month = cached_regex(&format!("ordinal:day-of-month:{key}"), || {
            format!(r"(?i)^(\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of|de)\s+({months})$")
        });
        if let Some(caps) = day_of_month.captures(input) {
            return month_day_outcome(ctx, &caps[2], &caps[1], None);
        }

        // "3rd June", "3 junio"
        let day_month = cached_regex(&format!("ordinal:day-month:{key}"), || {
            format!(r"(?i)^(\d{{1,2}})(?:st|nd|rd|th)?\s+({months})$")
        });
        if let Some(caps) = day_month.captures(input) {
            return month_day_outcome(ctx, &caps[2], &caps[1], None);
        }

        // "June 3rd 2024"
        let month_day_year = cached_regex(&format!("ordinal:month-day-year:{key}"), || {
            format!(r"(?i)^({months})\s+(\d{{1,2}})(?:st|nd|rd|th)?\s+(\d{{2,4}})$")
        });
        if let Some(caps) = month_day_year.captures(input) {
            return month_day_outcome(ctx, &caps[1], &caps[2], Some(&caps[3]));
        }

        // "3rd of June 2024", "3 de junio 2024"
        let day_of_month_year = cached_regex(&format!("ordinal:day-of-month-year:{key}"), || {
            format!(r"(?i)^(\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of|de)\s+({months})\s+(\d{{2,4}})$")
        });
        if let Some(caps) = day_of_month_year.captures(input) {
            return month_day_outcome(ctx, &caps[2], &caps[1], Some(&caps[3]));
        }

        // "3rd June 2024"
        let day_month_year = cached_regex(&format!("ordinal:day-month-year:{key}"), || {
            format!(r"(?i)^(\d{{1,2}})(?:st|nd|rd|th)?\s+({months})\s+(\d{{2,4}})$")
        });
        if let Some(caps) = day_month_year.captures(input) {
            return month_day_outcome(ctx, &caps[2], &caps[1], Some(&caps[3]));
        }
    }

    if let Some(caps) = bare_ordinal_regex().captures(input) {
        return Outcome::from_result(bare_ordinal(ctx, &caps));
    }

    Outcome::NoMatch
}

fn month_day_outcome(
    ctx: &ParserContext,
    month_name: &str,
    day_str: &str,
    year_str: Option<&str>,
) -> Outcome {
    let Some(month) = lexicon::parse_month(month_name, &ctx.languages) else {
        return Outcome::NoMatch;
    };
    let day: u32 = day_str.parse().unwrap_or(0);
    let year = match year_str {
        Some(raw) => {
            let year: i32 = raw.parse().unwrap_or(0);
            if year < 100 {
                expand_two_digit_year(year)
            } else {
                year
            }
        }
        None => lift_year(ctx, month, day),
    };
    Outcome::from_result(validate_date(year, month, day).map(|date| ctx.localize_date(date)))
}

/// A bare ordinal resolves within the reference month, rolling to the
/// adjacent month when the preference direction requires it.
fn bare_ordinal(ctx: &ParserContext, caps: &Captures) -> Result<Instant, ParseError> {
    let day: u32 = caps[1].parse().unwrap_or(0);
    let base = ctx.base;
    let (mut year, mut month, current_day) = (base.year(), base.month(), base.day());

    match ctx.settings.prefer_dates_from {
        PreferDatesFrom::Past => {
            if day > current_day {
                if month == 1 {
                    month = 12;
                    year -= 1;
                } else {
                    month -= 1;
                }
            }
        }
        _ => {
            if day < current_day {
                if month == 12 {
                    month = 1;
                    year += 1;
                } else {
                    month += 1;
                }
            }
        }
    }

    let date = validate_date(year, month, day)?;
    Ok(ctx.localize_date(date))
}
