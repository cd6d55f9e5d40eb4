//! ISO week-number recognizer: "2024-W15", "2024W15", "2024-W15-3",
//! "Week 15 2024", "W42".

use std::sync::OnceLock;

use chrono::Datelike;
use regex::Regex;

use super::{Outcome, ParserContext};
use crate::calendar::iso_week_date;
use crate::error::ParseError;

struct WeekPatterns {
    iso: Regex,
    week_year: Regex,
    year_week: Regex,
    iso_with_weekday: Regex,
    bare: Regex,
}

fn patterns() -> &'static WeekPatterns {
    static PATTERNS: OnceLock<WeekPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| WeekPatterns {
        iso: Regex::new(r"(?i)^(\d{4})-?W(\d{1,2})$").unwrap(),
        week_year: Regex::new(r"(?i)^week\s+(\d{1,2})\s+(\d{4})$").unwrap(),
        year_week: Regex::new(r"(?i)^(\d{4})\s+week\s+(\d{1,2})$").unwrap(),
        iso_with_weekday: Regex::new(r"(?i)^(\d{4})-?W(\d{1,2})-?(\d)$").unwrap(),
        bare: Regex::new(r"(?i)^w(?:eek\s+)?(\d{1,2})$").unwrap(),
    })
}

fn week_out_of_range(year: i32, week: u32) -> ParseError {
    ParseError::InvalidDate {
        year,
        month: 0,
        day: 0,
        reason: format!("week number {week} out of range (1-53)"),
    }
}

fn resolve(ctx: &ParserContext, year: i32, week: u32, weekday: u32) -> Outcome {
    if !(1..=53).contains(&week) {
        return Outcome::Invalid(week_out_of_range(year, week));
    }
    if !(1..=7).contains(&weekday) {
        return Outcome::Invalid(ParseError::InvalidDate {
            year,
            month: 0,
            day: 0,
            reason: format!("weekday {weekday} out of range (1-7)"),
        });
    }
    match iso_week_date(year, week, weekday) {
        Ok(date) => Outcome::Match(ctx.localize_date(date)),
        Err(err) => Outcome::Invalid(err),
    }
}

pub(crate) fn parse(ctx: &ParserContext) -> Outcome {
    let input = ctx.input.trim();
    let patterns = patterns();

    if let Some(caps) = patterns.iso.captures(input) {
        let year = caps[1].parse().unwrap_or(0);
        let week = caps[2].parse().unwrap_or(0);
        return resolve(ctx, year, week, 1);
    }
    if let Some(caps) = patterns.week_year.captures(input) {
        let week = caps[1].parse().unwrap_or(0);
        let year = caps[2].parse().unwrap_or(0);
        return resolve(ctx, year, week, 1);
    }
    if let Some(caps) = patterns.year_week.captures(input) {
        let year = caps[1].parse().unwrap_or(0);
        let week = caps[2].parse().unwrap_or(0);
        return resolve(ctx, year, week, 1);
    }
    if let Some(caps) = patterns.iso_with_weekday.captures(input) {
        let year = caps[1].parse().unwrap_or(0);
        let week = caps[2].parse().unwrap_or(0);
        let weekday = caps[3].parse().unwrap_or(0);
        return resolve(ctx, year, week, weekday);
    }
    if let Some(caps) = patterns.bare.captures(input) {
        let week = caps[1].parse().unwrap_or(0);
        // No year in the input: the reference year applies.
        return resolve(ctx, ctx.base.year(), week, 1);
    }

    Outcome::NoMatch
}
