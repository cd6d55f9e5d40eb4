//! Time-of-day recognizer: clock forms (12- and 24-hour), fraction
//! expressions ("quarter past 3"), noon/midnight landmarks, and the
//! language-specific idioms built from each lexicon's `TimeTerms`.
//!
//! A time-only result inherits the reference instant's civil date and
//! zone, with the parsed hour/minute/second.

use std::sync::OnceLock;

use regex::Regex;

use super::{Outcome, ParserContext};
use crate::calendar::validate_time;
use crate::lexicon::{alternation, cached_regex, Lexicon};
use crate::types::Instant;

struct TimePatterns {
    twelve_hour: Regex,
    twelve_hour_bare: Regex,
    twenty_four_seconds: Regex,
    twenty_four: Regex,
    fraction_hour: Regex,
    fraction_landmark: Regex,
    landmark: Regex,
    hour_minutes_h: Regex,
}

fn patterns() -> &'static TimePatterns {
    static PATTERNS: OnceLock<TimePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| TimePatterns {
        // 3:30 PM, 9:15 AM, 11:45:30 PM, 9:15AM
        twelve_hour: Regex::new(r"(?i)^(\d{1,2}):(\d{2})(?::(\d{2}))?\s*(am|pm)$").unwrap(),
        // 9am, 12 pm
        twelve_hour_bare: Regex::new(r"(?i)^(\d{1,2})\s*(am|pm)$").unwrap(),
        // 14:30:00
        twenty_four_seconds: Regex::new(r"^(\d{1,2}):(\d{2}):(\d{2})$").unwrap(),
        // 14:30
        twenty_four: Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap(),
        // quarter past 3, half to 9
        fraction_hour: Regex::new(r"(?i)^(quarter|half)\s+(past|to|before|after)\s+(\d{1,2})$")
            .unwrap(),
        // quarter to midnight
        fraction_landmark: Regex::new(
            r"(?i)^(quarter|half)\s+(past|to|before|after)\s+(noon|midnight)$",
        )
        .unwrap(),
        landmark: Regex::new(r"(?i)^(noon|midnight)$").unwrap(),
        // French clock style: 15h30, 15h
        hour_minutes_h: Regex::new(r"^(\d{1,2})h(\d{2})?$").unwrap(),
    })
}

pub(crate) fn parse(ctx: &ParserContext) -> Outcome {
    if let Some(dt) = multi_lang(ctx) {
        return Outcome::Match(dt);
    }

    let patterns = patterns();
    let input = ctx.input.trim();

    if let Some(caps) = patterns.twelve_hour.captures(input) {
        let hour: u32 = caps[1].parse().unwrap_or(0);
        let minute: u32 = caps[2].parse().unwrap_or(0);
        let second: u32 = caps.get(3).map_or(0, |m| m.as_str().parse().unwrap_or(0));
        let hour = to_24_hour(hour, &caps[4]);
        return checked_time(ctx, hour, minute, second);
    }
    if let Some(caps) = patterns.twelve_hour_bare.captures(input) {
        let hour = to_24_hour(caps[1].parse().unwrap_or(0), &caps[2]);
        return checked_time(ctx, hour, 0, 0);
    }
    if let Some(caps) = patterns.twenty_four_seconds.captures(input) {
        let hour: u32 = caps[1].parse().unwrap_or(0);
        let minute: u32 = caps[2].parse().unwrap_or(0);
        let second: u32 = caps[3].parse().unwrap_or(0);
        return checked_time(ctx, hour, minute, second);
    }
    if let Some(caps) = patterns.twenty_four.captures(input) {
        let hour: u32 = caps[1].parse().unwrap_or(0);
        let minute: u32 = caps[2].parse().unwrap_or(0);
        return checked_time(ctx, hour, minute, 0);
    }
    if let Some(caps) = patterns.fraction_hour.captures(input) {
        let hour: i32 = caps[3].parse().unwrap_or(0);
        return fraction(ctx, &caps[1], &caps[2], hour);
    }
    if let Some(caps) = patterns.fraction_landmark.captures(input) {
        let hour = if caps[3].to_lowercase() == "noon" { 12 } else { 0 };
        return fraction(ctx, &caps[1], &caps[2], hour);
    }
    if let Some(caps) = patterns.landmark.captures(input) {
        let hour = if caps[1].to_lowercase() == "noon" { 12 } else { 0 };
        return Outcome::Match(ctx.base_with_time(hour, 0, 0));
    }

    Outcome::NoMatch
}

/// 12 AM is midnight, 12 PM is noon, 1-11 PM shift to 13-23.
fn to_24_hour(hour: u32, period: &str) -> u32 {
    let pm = period.eq_ignore_ascii_case("pm");
    if pm && hour != 12 {
        hour + 12
    } else if !pm && hour == 12 {
        0
    } else {
        hour
    }
}

fn checked_time(ctx: &ParserContext, hour: u32, minute: u32, second: u32) -> Outcome {
    match validate_time(hour, minute, second) {
        Ok(()) => Outcome::Match(ctx.base_with_time(hour, minute, second)),
        Err(err) => Outcome::Invalid(err),
    }
}

/// "quarter past H" is H:15, "half past H" is H:30, "quarter to H" is
/// (H-1):45, wrapping midnight.
fn fraction(ctx: &ParserContext, fraction: &str, direction: &str, hour: i32) -> Outcome {
    let mut minute = if fraction.eq_ignore_ascii_case("quarter") { 15 } else { 30 };
    let mut hour = hour;
    let direction = direction.to_lowercase();
    if direction == "to" || direction == "before" {
        minute = 60 - minute;
        hour -= 1;
        if hour < 0 {
            hour = 23;
        }
    }
    match validate_time(hour as u32, minute, 0) {
        Ok(()) => Outcome::Match(ctx.base_with_time(hour as u32, minute, 0)),
        Err(err) => Outcome::Invalid(err),
    }
}

fn multi_lang(ctx: &ParserContext) -> Option<Instant> {
    let input = ctx.input.to_lowercase();

    for lang in &ctx.languages {
        let time = &lang.time;

        // Noon and midnight words.
        if time.noon.contains(&input.as_str()) {
            return Some(ctx.base_with_time(12, 0, 0));
        }
        if time.midnight.contains(&input.as_str()) {
            return Some(ctx.base_with_time(0, 0, 0));
        }

        if let Some(dt) = quarter_past(ctx, &input, lang) {
            return Some(dt);
        }
        if let Some(dt) = half_past(ctx, &input, lang) {
            return Some(dt);
        }
        if let Some(dt) = quarter_to_hour_last(ctx, &input, lang) {
            return Some(dt);
        }
        if let Some(dt) = quarter_to_hour_first(ctx, &input, lang) {
            return Some(dt);
        }
        if let Some(dt) = h_clock(ctx, &input) {
            return Some(dt);
        }
        if let Some(dt) = hours_minutes_words(ctx, &input, lang) {
            return Some(dt);
        }
        if let Some(dt) = quarter_word_first(ctx, &input, lang) {
            return Some(dt);
        }
        if let Some(dt) = half_word_first(ctx, &input, lang) {
            return Some(dt);
        }
        if let Some(dt) = italian_quarter_past(ctx, &input, lang) {
            return Some(dt);
        }
        if let Some(dt) = italian_quarter_to(ctx, &input, lang) {
            return Some(dt);
        }
        if let Some(dt) = hours_with_daypart(ctx, &input, lang) {
            return Some(dt);
        }
    }

    None
}

/// Spanish "3 y cuarto" (quarter past 3).
fn quarter_past(ctx: &ParserContext, input: &str, lang: &Lexicon) -> Option<Instant> {
    let past = alternation(lang.time.past.iter().copied());
    let quarter = alternation(lang.time.quarter.iter().copied());
    if past.is_empty() || quarter.is_empty() {
        return None;
    }
    let re = cached_regex(&format!("time:quarter-past:{}", lang.code), || {
        format!(r"^(\d{{1,2}})\s+(?:{past})\s+(?:{quarter})$")
    });
    let caps = re.captures(input)?;
    let hour: u32 = caps[1].parse().ok()?;
    (hour <= 23).then(|| ctx.base_with_time(hour, 15, 0))
}

/// Spanish "3 y media" (half past 3).
fn half_past(ctx: &ParserContext, input: &str, lang: &Lexicon) -> Option<Instant> {
    let past = alternation(lang.time.past.iter().copied());
    let half = alternation(lang.time.half.iter().copied());
    if past.is_empty() || half.is_empty() {
        return None;
    }
    let re = cached_regex(&format!("time:half-past:{}", lang.code), || {
        format!(r"^(\d{{1,2}})\s+(?:{past})\s+(?:{half})$")
    });
    let caps = re.captures(input)?;
    let hour: u32 = caps[1].parse().ok()?;
    (hour <= 23).then(|| ctx.base_with_time(hour, 30, 0))
}

/// Spanish "menos cuarto las 3" (quarter to 3 = 2:45).
fn quarter_to_hour_last(ctx: &ParserContext, input: &str, lang: &Lexicon) -> Option<Instant> {
    let to = alternation(lang.time.to.iter().copied());
    let quarter = alternation(lang.time.quarter.iter().copied());
    if to.is_empty() || quarter.is_empty() {
        return None;
    }
    let re = cached_regex(&format!("time:quarter-to-last:{}", lang.code), || {
        format!(r"^(?:{to})\s+(?:{quarter})\s+(?:las\s+|as\s+)?(\d{{1,2}})$")
    });
    let caps = re.captures(input)?;
    let hour: u32 = caps[1].parse().ok()?;
    (hour <= 23).then(|| ctx.base_with_time(previous_hour(hour), 45, 0))
}

/// Portuguese "quinze para as 3" (quarter to 3, fraction first).
fn quarter_to_hour_first(ctx: &ParserContext, input: &str, lang: &Lexicon) -> Option<Instant> {
    let to = alternation(lang.time.to.iter().copied());
    let quarter = alternation(lang.time.quarter.iter().copied());
    if to.is_empty() || quarter.is_empty() {
        return None;
    }
    let re = cached_regex(&format!("time:quarter-to-first:{}", lang.code), || {
        format!(r"^(?:{quarter})\s+(?:{to})\s+(?:as\s+|o\s+)?(\d{{1,2}})$")
    });
    let caps = re.captures(input)?;
    let hour: u32 = caps[1].parse().ok()?;
    (hour <= 23).then(|| ctx.base_with_time(previous_hour(hour), 45, 0))
}

/// French clock writing "15h30", "15h". Not tied to a lexicon.
fn h_clock(ctx: &ParserContext, input: &str) -> Option<Instant> {
    let caps = patterns().hour_minutes_h.captures(input)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps.get(2).map_or(0, |m| m.as_str().parse().unwrap_or(0));
    validate_time(hour, minute, 0).ok()?;
    Some(ctx.base_with_time(hour, minute, 0))
}

/// French "3 heures 30".
fn hours_minutes_words(ctx: &ParserContext, input: &str, lang: &Lexicon) -> Option<Instant> {
    let oclock = alternation(lang.time.oclock.iter().copied());
    if oclock.is_empty() {
        return None;
    }
    let re = cached_regex(&format!("time:hours-minutes:{}", lang.code), || {
        format!(r"^(\d{{1,2}})\s+(?:{oclock})\s+(\d{{1,2}})$")
    });
    let caps = re.captures(input)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    validate_time(hour, minute, 0).ok()?;
    Some(ctx.base_with_time(hour, minute, 0))
}

/// Dutch "kwart over 3" (quarter past 3).
fn quarter_word_first(ctx: &ParserContext, input: &str, lang: &Lexicon) -> Option<Instant> {
    let quarter = alternation(lang.time.quarter.iter().copied());
    let past = alternation(lang.time.past.iter().copied());
    if quarter.is_empty() || past.is_empty() {
        return None;
    }
    let re = cached_regex(&format!("time:quarter-first:{}", lang.code), || {
        format!(r"^(?:{quarter})\s+(?:{past})\s+(\d{{1,2}})$")
    });
    let caps = re.captures(input)?;
    let hour: u32 = caps[1].parse().ok()?;
    (hour <= 23).then(|| ctx.base_with_time(hour, 15, 0))
}

/// Dutch "half 4". Half-to-the-hour: "half 4" is 3:30, not 4:30.
fn half_word_first(ctx: &ParserContext, input: &str, lang: &Lexicon) -> Option<Instant> {
    let half = alternation(lang.time.half.iter().copied());
    if half.is_empty() {
        return None;
    }
    let re = cached_regex(&format!("time:half-first:{}", lang.code), || {
        format!(r"^(?:{half})\s+(\d{{1,2}})$")
    });
    let caps = re.captures(input)?;
    let hour: u32 = caps[1].parse().ok()?;
    (hour <= 23).then(|| ctx.base_with_time(previous_hour(hour), 30, 0))
}

/// Italian "3 e un quarto" (3:15).
fn italian_quarter_past(ctx: &ParserContext, input: &str, lang: &Lexicon) -> Option<Instant> {
    let quarter = alternation(lang.time.quarter.iter().copied());
    if quarter.is_empty() {
        return None;
    }
    let re = cached_regex(&format!("time:e-un-quarto:{}", lang.code), || {
        format!(r"^(\d{{1,2}})\s+e\s+un\s+(?:{quarter})$")
    });
    let caps = re.captures(input)?;
    let hour: u32 = caps[1].parse().ok()?;
    (hour <= 23).then(|| ctx.base_with_time(hour, 15, 0))
}

/// Italian "meno un quarto le 3" (2:45).
fn italian_quarter_to(ctx: &ParserContext, input: &str, lang: &Lexicon) -> Option<Instant> {
    let quarter = alternation(lang.time.quarter.iter().copied());
    if quarter.is_empty() {
        return None;
    }
    let re = cached_regex(&format!("time:meno-un-quarto:{}", lang.code), || {
        format!(r"^meno\s+un\s+(?:{quarter})\s+le\s+(\d{{1,2}})$")
    });
    let caps = re.captures(input)?;
    let hour: u32 = caps[1].parse().ok()?;
    (hour <= 23).then(|| ctx.base_with_time(previous_hour(hour), 45, 0))
}

/// Russian "3 часа дня" / "9 часов утра": the day-part word carries the
/// AM/PM meaning. "ночи" with hour 12 is midnight.
fn hours_with_daypart(ctx: &ParserContext, input: &str, lang: &Lexicon) -> Option<Instant> {
    let oclock = alternation(lang.time.oclock.iter().copied());
    if oclock.is_empty() {
        return None;
    }

    let am = alternation(lang.time.am.iter().copied());
    if !am.is_empty() {
        let re = cached_regex(&format!("time:daypart-am:{}", lang.code), || {
            format!(r"^(\d{{1,2}})\s+(?:{oclock})\s+({am})$")
        });
        if let Some(caps) = re.captures(input) {
            let mut hour: u32 = caps[1].parse().ok()?;
            if &caps[2] == "ночи" && hour == 12 {
                hour = 0;
            }
            if hour <= 23 {
                return Some(ctx.base_with_time(hour, 0, 0));
            }
        }
    }

    let pm = alternation(lang.time.pm.iter().copied());
    if !pm.is_empty() {
        let re = cached_regex(&format!("time:daypart-pm:{}", lang.code), || {
            format!(r"^(\d{{1,2}})\s+(?:{oclock})\s+(?:{pm})$")
        });
        if let Some(caps) = re.captures(input) {
            let mut hour: u32 = caps[1].parse().ok()?;
            if hour < 12 {
                hour += 12;
            }
            if hour <= 23 {
                return Some(ctx.base_with_time(hour, 0, 0));
            }
        }
    }

    None
}

fn previous_hour(hour: u32) -> u32 {
    if hour == 0 {
        23
    } else {
        hour - 1
    }
}
