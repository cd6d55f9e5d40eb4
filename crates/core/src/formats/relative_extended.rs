//! Extended relative patterns: period boundaries, "this X", complex
//! offsets anchored on weekdays or singletons, and quarters.

use std::sync::OnceLock;

use chrono::Datelike;
use regex::Regex;

use super::{Outcome, ParserContext};
use crate::calendar::{
    add_period, add_unit, end_of_period, find_weekday, quarter_of, quarter_start, start_of_period,
    Period, Unit, WeekdaySearch,
};
use crate::lexicon::{alternation, cached_regex, Lexicon};
use crate::types::Instant;

/// Period nouns across every supported language, normalized to a
/// [`Period`]. Built once; matched with each language's qualifier terms.
const PERIOD_WORDS: &[(&str, Period)] = &[
    // English
    ("week", Period::Week),
    ("month", Period::Month),
    ("year", Period::Year),
    // Spanish
    ("semana", Period::Week),
    ("semanas", Period::Week),
    ("mes", Period::Month),
    ("meses", Period::Month),
    ("año", Period::Year),
    ("años", Period::Year),
    ("ano", Period::Year),
    ("anos", Period::Year),
    // Portuguese
    ("mês", Period::Month),
    // French
    ("semaine", Period::Week),
    ("mois", Period::Month),
    ("année", Period::Year),
    ("annee", Period::Year),
    // German
    ("woche", Period::Week),
    ("wochen", Period::Week),
    ("monat", Period::Month),
    ("monate", Period::Month),
    ("monaten", Period::Month),
    ("jahr", Period::Year),
    ("jahre", Period::Year),
    ("jahren", Period::Year),
    // Italian
    ("settimana", Period::Week),
    ("settimane", Period::Week),
    ("mese", Period::Month),
    ("mesi", Period::Month),
    ("anno", Period::Year),
    ("anni", Period::Year),
    // Dutch
    ("weken", Period::Week),
    ("maand", Period::Month),
    ("maanden", Period::Month),
    ("jaar", Period::Year),
    // Russian
    ("неделя", Period::Week),
    ("недели", Period::Week),
    ("недель", Period::Week),
    ("неделю", Period::Week),
    ("месяц", Period::Month),
    ("месяца", Period::Month),
    ("месяцев", Period::Month),
    ("год", Period::Year),
    ("года", Period::Year),
    ("лет", Period::Year),
];

/// Optional connector between a boundary term and its period noun
/// (Spanish/Portuguese/French "de", Italian "di", Dutch "van").
const CONNECTOR: &str = r"(?:de\s+|di\s+|van\s+)?";

fn period_alternation() -> &'static str {
    static ALT: OnceLock<String> = OnceLock::new();
    ALT.get_or_init(|| alternation(PERIOD_WORDS.iter().map(|(word, _)| *word)))
}

fn period_of(word: &str) -> Option<Period> {
    PERIOD_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, period)| *period)
}

pub(crate) fn parse(ctx: &ParserContext) -> Outcome {
    let input = ctx.input.to_lowercase();

    for lang in &ctx.languages {
        if let Some(dt) = period_boundary(ctx, &input, lang) {
            return Outcome::Match(dt);
        }
        if let Some(dt) = this_patterns(ctx, &input, lang) {
            return Outcome::Match(dt);
        }
    }

    english_extended(ctx)
}

/// "comienzo de mes", "fin de año", "início do próximo mês" style
/// boundary expressions built from the lexicon's qualifier sets.
fn period_boundary(ctx: &ParserContext, input: &str, lang: &Lexicon) -> Option<Instant> {
    let terms = &lang.relative;
    let base = ctx.base;
    let periods = period_alternation();

    let begin = alternation(
        terms
            .beginning
            .iter()
            .chain(terms.start.iter())
            .chain(terms.first.iter())
            .copied(),
    );
    let end = alternation(terms.end.iter().copied());
    let next = alternation(terms.next.iter().copied());
    let last = alternation(terms.last.iter().copied());

    if !begin.is_empty() {
        let re = cached_regex(&format!("extended:begin:{}", lang.code), || {
            format!(r"^(?:{begin})\s+{CONNECTOR}({periods})$")
        });
        if let Some(caps) = re.captures(input) {
            return Some(start_of_period(base, period_of(&caps[1])?));
        }
    }
    if !end.is_empty() {
        let re = cached_regex(&format!("extended:end:{}", lang.code), || {
            format!(r"^(?:{end})\s+{CONNECTOR}({periods})$")
        });
        if let Some(caps) = re.captures(input) {
            return Some(end_of_period(base, period_of(&caps[1])?));
        }
    }

    for (qualifier, direction, tag) in [(&next, 1, "next"), (&last, -1, "last")] {
        if qualifier.is_empty() {
            continue;
        }
        let plain = cached_regex(&format!("extended:{tag}-period:{}", lang.code), || {
            format!(r"^(?:{qualifier})\s+({periods})$")
        });
        if let Some(caps) = plain.captures(input) {
            return Some(add_period(base, period_of(&caps[1])?, direction));
        }

        if !begin.is_empty() {
            let re = cached_regex(&format!("extended:begin-{tag}:{}", lang.code), || {
                format!(r"^(?:{begin})\s+{CONNECTOR}(?:{qualifier})\s+({periods})$")
            });
            if let Some(caps) = re.captures(input) {
                let period = period_of(&caps[1])?;
                return Some(start_of_period(add_period(base, period, direction), period));
            }
        }
        if !end.is_empty() {
            let re = cached_regex(&format!("extended:end-{tag}:{}", lang.code), || {
                format!(r"^(?:{end})\s+{CONNECTOR}(?:{qualifier})\s+({periods})$")
            });
            if let Some(caps) = re.captures(input) {
                let period = period_of(&caps[1])?;
                return Some(end_of_period(add_period(base, period, direction), period));
            }
        }
    }

    None
}

/// "este lunes", "this week" style expressions.
fn this_patterns(ctx: &ParserContext, input: &str, lang: &Lexicon) -> Option<Instant> {
    let this = alternation(lang.relative.this.iter().copied());
    if this.is_empty() {
        return None;
    }

    let weekdays = lang.weekday_alternation();
    if !weekdays.is_empty() {
        let re = cached_regex(&format!("extended:this-weekday:{}", lang.code), || {
            format!(r"^(?:{this})\s+({weekdays})$")
        });
        if let Some(caps) = re.captures(input) {
            let weekday = lang.weekday(&caps[1])?;
            return Some(find_weekday(ctx.base, weekday, WeekdaySearch::This));
        }
    }

    let periods = period_alternation();
    let re = cached_regex(&format!("extended:this-period:{}", lang.code), || {
        format!(r"^(?:{this})\s+({periods})$")
    });
    if let Some(caps) = re.captures(input) {
        return Some(start_of_period(ctx.base, period_of(&caps[1])?));
    }

    None
}

struct ExtendedPatterns {
    begin_of: Regex,
    end_of: Regex,
    begin_of_shifted: Regex,
    end_of_shifted: Regex,
    this_weekday: Regex,
    this_period: Regex,
    units_from_weekday: Regex,
    units_around_singleton: Regex,
    units_around_weekday: Regex,
    quarter_bare: Regex,
    quarter_year: Regex,
    quarter_shift: Regex,
}

const EN_WEEKDAYS: &str = "monday|tuesday|wednesday|thursday|friday|saturday|sunday";

fn english_patterns() -> &'static ExtendedPatterns {
    static PATTERNS: OnceLock<ExtendedPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| ExtendedPatterns {
        begin_of: Regex::new(r"(?i)^(?:beginning|start|first day)\s+of\s+(month|year|week)$")
            .unwrap(),
        end_of: Regex::new(r"(?i)^(?:end|last day)\s+of\s+(month|year|week)$").unwrap(),
        begin_of_shifted: Regex::new(
            r"(?i)^(?:beginning|start|first day)\s+of\s+(last|next)\s+(month|year|week)$",
        )
        .unwrap(),
        end_of_shifted: Regex::new(r"(?i)^(?:end|last day)\s+of\s+(last|next)\s+(month|year|week)$")
            .unwrap(),
        this_weekday: Regex::new(&format!(r"(?i)^this\s+({EN_WEEKDAYS})$")).unwrap(),
        this_period: Regex::new(r"(?i)^this\s+(month|year|week)$").unwrap(),
        units_from_weekday: Regex::new(&format!(
            r"(?i)^(a|an|\d+)\s+(day|week|month|year)s?\s+from\s+({EN_WEEKDAYS})$"
        ))
        .unwrap(),
        units_around_singleton: Regex::new(
            r"(?i)^(\d+)\s+(day|week|month|year)s?\s+(after|before)\s+(yesterday|today|tomorrow)$",
        )
        .unwrap(),
        units_around_weekday: Regex::new(&format!(
            r"(?i)^(\d+)\s+(day|week|month|year)s?\s+(after|before)\s+(next|last)\s+({EN_WEEKDAYS})$"
        ))
        .unwrap(),
        quarter_bare: Regex::new(r"(?i)^q([1-4])$").unwrap(),
        quarter_year: Regex::new(r"(?i)^q([1-4])\s+(\d{4})$").unwrap(),
        quarter_shift: Regex::new(r"(?i)^(last|next|this)\s+quarter$").unwrap(),
    })
}

fn english_period(word: &str) -> Period {
    match word.to_lowercase().as_str() {
        "week" => Period::Week,
        "month" => Period::Month,
        _ => Period::Year,
    }
}

fn english_extended(ctx: &ParserContext) -> Outcome {
    let patterns = english_patterns();
    let input = ctx.input.trim();
    let base = ctx.base;

    if let Some(caps) = patterns.begin_of.captures(input) {
        return Outcome::Match(start_of_period(base, english_period(&caps[1])));
    }
    if let Some(caps) = patterns.end_of.captures(input) {
        return Outcome::Match(end_of_period(base, english_period(&caps[1])));
    }
    if let Some(caps) = patterns.begin_of_shifted.captures(input) {
        let period = english_period(&caps[2]);
        let direction = if caps[1].to_lowercase() == "next" { 1 } else { -1 };
        return Outcome::Match(start_of_period(add_period(base, period, direction), period));
    }
    if let Some(caps) = patterns.end_of_shifted.captures(input) {
        let period = english_period(&caps[2]);
        let direction = if caps[1].to_lowercase() == "next" { 1 } else { -1 };
        return Outcome::Match(end_of_period(add_period(base, period, direction), period));
    }

    if let Some(caps) = patterns.this_weekday.captures(input) {
        if let Ok(weekday) = caps[1].to_lowercase().parse() {
            return Outcome::Match(find_weekday(base, weekday, WeekdaySearch::This));
        }
    }
    if let Some(caps) = patterns.this_period.captures(input) {
        return Outcome::Match(start_of_period(base, english_period(&caps[1])));
    }

    if let Some(caps) = patterns.units_from_weekday.captures(input) {
        let amount: i64 = match caps[1].to_lowercase().as_str() {
            "a" | "an" => 1,
            digits => digits.parse().unwrap_or(1),
        };
        let unit = Unit::from_english(&caps[2].to_lowercase()).unwrap_or(Unit::Day);
        if let Ok(weekday) = caps[3].to_lowercase().parse() {
            let anchor = find_weekday(base, weekday, WeekdaySearch::Next);
            return Outcome::Match(add_unit(anchor, amount, unit));
        }
    }
    if let Some(caps) = patterns.units_around_singleton.captures(input) {
        let mut amount: i64 = caps[1].parse().unwrap_or(0);
        let unit = Unit::from_english(&caps[2].to_lowercase()).unwrap_or(Unit::Day);
        if caps[3].to_lowercase() == "before" {
            amount = -amount;
        }
        let anchor = match caps[4].to_lowercase().as_str() {
            "yesterday" => add_unit(base, -1, Unit::Day),
            "tomorrow" => add_unit(base, 1, Unit::Day),
            _ => base,
        };
        return Outcome::Match(add_unit(anchor, amount, unit));
    }
    if let Some(caps) = patterns.units_around_weekday.captures(input) {
        let mut amount: i64 = caps[1].parse().unwrap_or(0);
        let unit = Unit::from_english(&caps[2].to_lowercase()).unwrap_or(Unit::Day);
        if caps[3].to_lowercase() == "before" {
            amount = -amount;
        }
        let search = if caps[4].to_lowercase() == "next" {
            WeekdaySearch::Next
        } else {
            WeekdaySearch::Last
        };
        if let Ok(weekday) = caps[5].to_lowercase().parse() {
            let anchor = find_weekday(base, weekday, search);
            return Outcome::Match(add_unit(anchor, amount, unit));
        }
    }

    if let Some(caps) = patterns.quarter_bare.captures(input) {
        let quarter: u32 = caps[1].parse().unwrap_or(1);
        return Outcome::Match(quarter_start(base.year(), quarter, *base.offset()));
    }
    if let Some(caps) = patterns.quarter_year.captures(input) {
        let quarter: u32 = caps[1].parse().unwrap_or(1);
        let year: i32 = caps[2].parse().unwrap_or(base.year());
        return Outcome::Match(quarter_start(year, quarter, *base.offset()));
    }
    if let Some(caps) = patterns.quarter_shift.captures(input) {
        let current = quarter_of(base);
        let year = base.year();
        let (target_year, target_quarter) = match caps[1].to_lowercase().as_str() {
            "this" => (year, current),
            "next" => {
                if current == 4 {
                    (year + 1, 1)
                } else {
                    (year, current + 1)
                }
            }
            _ => {
                if current == 1 {
                    (year - 1, 4)
                } else {
                    (year, current - 1)
                }
            }
        };
        return Outcome::Match(quarter_start(target_year, target_quarter, *base.offset()));
    }

    Outcome::NoMatch
}
