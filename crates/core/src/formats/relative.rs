//! Relative date recognizer.
//!
//! Three layers, tried in order: the multi-language lexicon layer, the
//! extended patterns (which know about quarters and period boundaries),
//! and a basic English fallback. Extended patterns run before the basic
//! fallback so that domain-specific semantics win over naive arithmetic
//! ("next quarter" is quarter-aware, not +3 months).

use std::sync::OnceLock;

use regex::Regex;

use chrono::Datelike;

use super::{relative_extended, Outcome, ParserContext};
use crate::calendar::{add_unit, find_weekday, quarter_of, quarter_start, Unit, WeekdaySearch};
use crate::lexicon::{alternation, cached_regex, Lexicon};
use crate::types::{Instant, PreferDatesFrom};

pub(crate) fn parse(ctx: &ParserContext) -> Outcome {
    if let Some(dt) = multi_lang(ctx) {
        return Outcome::Match(dt);
    }

    match relative_extended::parse(ctx) {
        Outcome::NoMatch => {}
        decided => return decided,
    }

    basic_english(ctx)
}

/// Resolve a bare weekday according to `prefer_dates_from`.
pub(crate) fn weekday_by_preference(ctx: &ParserContext, weekday: chrono::Weekday) -> Instant {
    let search = match ctx.settings.prefer_dates_from {
        PreferDatesFrom::Future => WeekdaySearch::Next,
        PreferDatesFrom::Past => WeekdaySearch::Last,
        PreferDatesFrom::Current => WeekdaySearch::This,
    };
    find_weekday(ctx.base, weekday, search)
}

fn multi_lang(ctx: &ParserContext) -> Option<Instant> {
    let input = ctx.input.to_lowercase();
    let base = ctx.base;

    for lang in &ctx.languages {
        let terms = &lang.relative;

        // Direct singletons.
        if input == terms.yesterday {
            return Some(add_unit(base, -1, Unit::Day));
        }
        if input == terms.today || input == terms.now {
            return Some(base);
        }
        if input == terms.tomorrow {
            return Some(add_unit(base, 1, Unit::Day));
        }

        let units = lang.unit_alternation();
        if !units.is_empty() {
            let ago = alternation(terms.ago.iter().copied());
            if !ago.is_empty() {
                // Prefix form: "hace 2 días".
                let prefix = cached_regex(&format!("relative:ago-prefix:{}", lang.code), || {
                    format!(r"^(?:{ago})\s+(\d+)\s+({units})$")
                });
                if let Some(caps) = prefix.captures(&input) {
                    if let Some(dt) = offset_by_unit(ctx, lang, &caps[1], &caps[2], -1) {
                        return Some(dt);
                    }
                }
                // Suffix form: "2 días atrás", "2 giorni fa".
                let suffix = cached_regex(&format!("relative:ago-suffix:{}", lang.code), || {
                    format!(r"^(\d+)\s+({units})\s+(?:{ago})$")
                });
                if let Some(caps) = suffix.captures(&input) {
                    if let Some(dt) = offset_by_unit(ctx, lang, &caps[1], &caps[2], -1) {
                        return Some(dt);
                    }
                }
            }

            let in_terms = alternation(terms.in_.iter().copied());
            if !in_terms.is_empty() {
                // "en 3 semanas", "через 3 недели".
                let re = cached_regex(&format!("relative:in:{}", lang.code), || {
                    format!(r"^(?:{in_terms})\s+(\d+)\s+({units})$")
                });
                if let Some(caps) = re.captures(&input) {
                    if let Some(dt) = offset_by_unit(ctx, lang, &caps[1], &caps[2], 1) {
                        return Some(dt);
                    }
                }
            }

            let next = alternation(terms.next.iter().copied());
            if !next.is_empty() {
                if let Some(dt) = next_last(ctx, lang, &input, &next, &units, 1, "next") {
                    return Some(dt);
                }
            }
            let last = alternation(terms.last.iter().copied());
            if !last.is_empty() {
                if let Some(dt) = next_last(ctx, lang, &input, &last, &units, -1, "last") {
                    return Some(dt);
                }
            }
        }

        // Standalone weekday.
        if let Some(weekday) = lang.weekday(&input) {
            return Some(weekday_by_preference(ctx, weekday));
        }
    }

    None
}

/// "próxima semana" / "última semana" and their weekday variants.
fn next_last(
    ctx: &ParserContext,
    lang: &Lexicon,
    input: &str,
    qualifier: &str,
    units: &str,
    direction: i64,
    cache_tag: &str,
) -> Option<Instant> {
    let unit_re = cached_regex(&format!("relative:{cache_tag}-unit:{}", lang.code), || {
        format!(r"^(?:{qualifier})\s+({units})$")
    });
    if let Some(caps) = unit_re.captures(input) {
        if let Some(unit) = lang.normalize_unit(&caps[1]) {
            // Quarters shift to the adjacent quarter's start rather than
            // adding three months blindly.
            if unit == Unit::Quarter {
                return Some(adjacent_quarter(ctx.base, direction));
            }
            return Some(add_unit(ctx.base, direction, unit));
        }
    }

    let weekdays = lang.weekday_alternation();
    if !weekdays.is_empty() {
        let weekday_re =
            cached_regex(&format!("relative:{cache_tag}-weekday:{}", lang.code), || {
                format!(r"^(?:{qualifier})\s+({weekdays})$")
            });
        if let Some(caps) = weekday_re.captures(input) {
            if let Some(weekday) = lang.weekday(&caps[1]) {
                let search = if direction > 0 {
                    WeekdaySearch::Next
                } else {
                    WeekdaySearch::Last
                };
                return Some(find_weekday(ctx.base, weekday, search));
            }
        }
    }

    None
}

/// Start of the quarter `direction` steps away, rolling across years.
pub(crate) fn adjacent_quarter(base: Instant, direction: i64) -> Instant {
    let current = quarter_of(base);
    let (year, quarter) = if direction > 0 {
        if current == 4 {
            (base.year() + 1, 1)
        } else {
            (base.year(), current + 1)
        }
    } else if current == 1 {
        (base.year() - 1, 4)
    } else {
        (base.year(), current - 1)
    };
    quarter_start(year, quarter, *base.offset())
}

fn offset_by_unit(
    ctx: &ParserContext,
    lang: &Lexicon,
    amount: &str,
    unit_word: &str,
    sign: i64,
) -> Option<Instant> {
    let amount: i64 = amount.parse().ok()?;
    let unit = lang.normalize_unit(unit_word)?;
    Some(add_unit(ctx.base, sign * amount, unit))
}

struct BasicPatterns {
    n_units_ago: Regex,
    in_n_units: Regex,
    negative_units: Regex,
    singleton: Regex,
    last_unit: Regex,
    next_unit: Regex,
    next_last_weekday: Regex,
    bare_weekday: Regex,
}

const EN_UNITS: &str = "second|minute|hour|day|week|fortnight|month|quarter|year|decade";
const EN_WEEKDAYS: &str = "monday|tuesday|wednesday|thursday|friday|saturday|sunday";

fn basic_patterns() -> &'static BasicPatterns {
    static PATTERNS: OnceLock<BasicPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| BasicPatterns {
        n_units_ago: Regex::new(&format!(r"(?i)^(a|an|\d+)\s+({EN_UNITS})s?\s+ago$")).unwrap(),
        in_n_units: Regex::new(&format!(r"(?i)^in\s+(a|an|\d+)\s+({EN_UNITS})s?$")).unwrap(),
        // Bare negative quantities subtract: "-2 days" is two days ago.
        negative_units: Regex::new(&format!(r"(?i)^(-\d+)\s+({EN_UNITS})s?$")).unwrap(),
        singleton: Regex::new(r"(?i)^(yesterday|today|tomorrow|now)$").unwrap(),
        last_unit: Regex::new(&format!(r"(?i)^last\s+({EN_UNITS})s?$")).unwrap(),
        next_unit: Regex::new(&format!(r"(?i)^next\s+({EN_UNITS})s?$")).unwrap(),
        next_last_weekday: Regex::new(&format!(r"(?i)^(next|last)\s+({EN_WEEKDAYS})$")).unwrap(),
        bare_weekday: Regex::new(&format!(r"(?i)^({EN_WEEKDAYS})$")).unwrap(),
    })
}

fn basic_english(ctx: &ParserContext) -> Outcome {
    let patterns = basic_patterns();
    let input = ctx.input.trim();
    let base = ctx.base;

    if let Some(caps) = patterns.n_units_ago.captures(input) {
        if let Some((amount, unit)) = english_amount_unit(&caps[1], &caps[2]) {
            return Outcome::Match(add_unit(base, -amount, unit));
        }
    }
    if let Some(caps) = patterns.in_n_units.captures(input) {
        if let Some((amount, unit)) = english_amount_unit(&caps[1], &caps[2]) {
            return Outcome::Match(add_unit(base, amount, unit));
        }
    }
    if let Some(caps) = patterns.negative_units.captures(input) {
        if let Some((amount, unit)) = english_amount_unit(&caps[1], &caps[2]) {
            return Outcome::Match(add_unit(base, amount, unit));
        }
    }
    if let Some(caps) = patterns.singleton.captures(input) {
        let dt = match caps[1].to_lowercase().as_str() {
            "yesterday" => add_unit(base, -1, Unit::Day),
            "tomorrow" => add_unit(base, 1, Unit::Day),
            _ => base,
        };
        return Outcome::Match(dt);
    }
    if let Some(caps) = patterns.last_unit.captures(input) {
        if let Some(unit) = Unit::from_english(&caps[1].to_lowercase()) {
            return Outcome::Match(add_unit(base, -1, unit));
        }
    }
    if let Some(caps) = patterns.next_unit.captures(input) {
        if let Some(unit) = Unit::from_english(&caps[1].to_lowercase()) {
            return Outcome::Match(add_unit(base, 1, unit));
        }
    }
    if let Some(caps) = patterns.next_last_weekday.captures(input) {
        if let Some(weekday) = english_weekday(&caps[2]) {
            let search = if caps[1].to_lowercase() == "next" {
                WeekdaySearch::Next
            } else {
                WeekdaySearch::Last
            };
            return Outcome::Match(find_weekday(base, weekday, search));
        }
    }
    if let Some(caps) = patterns.bare_weekday.captures(input) {
        if let Some(weekday) = english_weekday(&caps[1]) {
            return Outcome::Match(weekday_by_preference(ctx, weekday));
        }
    }

    Outcome::NoMatch
}

fn english_amount_unit(amount: &str, unit: &str) -> Option<(i64, Unit)> {
    let amount = match amount.to_lowercase().as_str() {
        "a" | "an" => 1,
        digits => digits.parse().ok()?,
    };
    Some((amount, Unit::from_english(&unit.to_lowercase())?))
}

fn english_weekday(name: &str) -> Option<chrono::Weekday> {
    name.to_lowercase().parse().ok()
}
