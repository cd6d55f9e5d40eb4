//! Per-language lexicons and the process-wide registry.
//!
//! A [`Lexicon`] is a read-only bag of values: month and weekday tables
//! plus relative and time keyword sets. Recognizers consume lexicons by
//! building regex alternations from them; nothing here dispatches
//! virtually. The registry is initialized once and immutable afterwards,
//! so readers share it without locking.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use chrono::Weekday;
use regex::Regex;
use std::sync::Arc;

use crate::calendar::Unit;

mod de;
mod en;
mod es;
mod fr;
mod it;
mod ja;
mod nl;
mod pt;
mod ru;
mod zh;

/// A language's date vocabulary. All keys are stored lowercased; lookups
/// fold their input the same way, by code point.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub code: &'static str,
    pub name: &'static str,
    months: HashMap<&'static str, u32>,
    weekdays: HashMap<&'static str, Weekday>,
    pub relative: RelativeTerms,
    pub time: TimeTerms,
}

/// Localized relative-date keywords.
#[derive(Debug, Clone)]
pub struct RelativeTerms {
    pub yesterday: &'static str,
    pub today: &'static str,
    pub tomorrow: &'static str,
    pub now: &'static str,

    pub ago: &'static [&'static str],
    pub in_: &'static [&'static str],
    pub next: &'static [&'static str],
    pub last: &'static [&'static str],
    pub this: &'static [&'static str],

    pub second: &'static [&'static str],
    pub minute: &'static [&'static str],
    pub hour: &'static [&'static str],
    pub day: &'static [&'static str],
    pub week: &'static [&'static str],
    pub fortnight: &'static [&'static str],
    pub month: &'static [&'static str],
    pub quarter: &'static [&'static str],
    pub year: &'static [&'static str],
    pub decade: &'static [&'static str],

    pub beginning: &'static [&'static str],
    pub end: &'static [&'static str],
    pub start: &'static [&'static str],
    pub first: &'static [&'static str],
}

/// Localized time-of-day keywords.
#[derive(Debug, Clone)]
pub struct TimeTerms {
    pub noon: &'static [&'static str],
    pub midnight: &'static [&'static str],
    pub quarter: &'static [&'static str],
    pub half: &'static [&'static str],
    pub past: &'static [&'static str],
    pub to: &'static [&'static str],
    pub oclock: &'static [&'static str],
    pub am: &'static [&'static str],
    pub pm: &'static [&'static str],
}

impl Lexicon {
    /// Look up a month by its lowercased name or abbreviation.
    pub fn month(&self, name: &str) -> Option<u32> {
        self.months.get(name).copied()
    }

    /// Look up a weekday by its lowercased name or abbreviation.
    pub fn weekday(&self, name: &str) -> Option<Weekday> {
        self.weekdays.get(name).copied()
    }

    pub fn month_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.months.keys().copied()
    }

    pub fn weekday_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.weekdays.keys().copied()
    }

    /// Regex alternation over this language's time units, quoted.
    pub(crate) fn unit_alternation(&self) -> String {
        let r = &self.relative;
        alternation(
            [
                r.second, r.minute, r.hour, r.day, r.week, r.fortnight, r.month, r.quarter,
                r.year, r.decade,
            ]
            .into_iter()
            .flatten()
            .copied(),
        )
    }

    /// Regex alternation over this language's weekday names, quoted.
    pub(crate) fn weekday_alternation(&self) -> String {
        alternation(self.weekday_names())
    }

    /// Normalize a unit word of this language to a [`Unit`].
    pub(crate) fn normalize_unit(&self, word: &str) -> Option<Unit> {
        let r = &self.relative;
        let table: [(&[&str], Unit); 10] = [
            (r.second, Unit::Second),
            (r.minute, Unit::Minute),
            (r.hour, Unit::Hour),
            (r.day, Unit::Day),
            (r.week, Unit::Week),
            (r.fortnight, Unit::Fortnight),
            (r.month, Unit::Month),
            (r.quarter, Unit::Quarter),
            (r.year, Unit::Year),
            (r.decade, Unit::Decade),
        ];
        table
            .iter()
            .find(|(terms, _)| terms.contains(&word))
            .map(|(_, unit)| *unit)
    }
}

fn month_map(entries: &[(&'static str, u32)]) -> HashMap<&'static str, u32> {
    entries.iter().copied().collect()
}

fn weekday_map(entries: &[(&'static str, Weekday)]) -> HashMap<&'static str, Weekday> {
    entries.iter().copied().collect()
}

/// Look up a month across a language list, first match wins.
pub(crate) fn parse_month(name: &str, langs: &[&Lexicon]) -> Option<u32> {
    let folded = name.trim().to_lowercase();
    langs.iter().find_map(|lang| lang.month(&folded))
}

/// Look up a weekday across a language list, first match wins.
pub(crate) fn parse_weekday(name: &str, langs: &[&Lexicon]) -> Option<Weekday> {
    let folded = name.trim().to_lowercase();
    langs.iter().find_map(|lang| lang.weekday(&folded))
}

/// Normalize a unit word across a language list.
pub(crate) fn normalize_unit(word: &str, langs: &[&Lexicon]) -> Option<Unit> {
    let folded = word.trim().to_lowercase();
    langs.iter().find_map(|lang| lang.normalize_unit(&folded))
}

/// Regex alternation over every month name of the given languages.
pub(crate) fn months_alternation(langs: &[&Lexicon]) -> String {
    alternation(langs.iter().flat_map(|lang| lang.month_names()))
}

/// Quote and join terms into a regex alternation, longest first so that
/// "september" wins over "sep" in leftmost-first matching.
pub(crate) fn alternation<'a>(terms: impl Iterator<Item = &'a str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for term in terms {
        if !term.is_empty() && !seen.contains(&term) {
            seen.push(term);
        }
    }
    seen.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    seen.iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|")
}

/// Cache key fragment identifying a language set.
pub(crate) fn lang_key(langs: &[&Lexicon]) -> String {
    langs.iter().map(|l| l.code).collect::<Vec<_>>().join("+")
}

/// Compile-once cache for dynamically built patterns, keyed by recognizer
/// and language set. Alternation content is fully escaped, so compilation
/// cannot fail for lexicon-driven patterns.
pub(crate) fn cached_regex(key: &str, build: impl FnOnce() -> String) -> Arc<Regex> {
    static CACHE: OnceLock<Mutex<HashMap<String, Arc<Regex>>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = match cache.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if let Some(re) = guard.get(key) {
        return Arc::clone(re);
    }
    let re = Arc::new(Regex::new(&build()).unwrap());
    guard.insert(key.to_string(), Arc::clone(&re));
    re
}

/// Registered languages, in registration order.
#[derive(Debug)]
pub struct Registry {
    languages: Vec<Lexicon>,
    default_code: &'static str,
}

impl Default for Registry {
    fn default() -> Registry {
        Registry::new()
    }
}

impl Registry {
    pub fn new() -> Registry {
        let mut registry = Registry {
            languages: Vec::new(),
            default_code: "en",
        };
        registry.register(en::lexicon());
        registry
    }

    /// Add a language. Re-registering a code replaces the prior entry.
    pub fn register(&mut self, lexicon: Lexicon) {
        match self.languages.iter_mut().find(|l| l.code == lexicon.code) {
            Some(existing) => *existing = lexicon,
            None => self.languages.push(lexicon),
        }
    }

    /// Get a language by code, falling back to the default.
    pub fn get(&self, code: &str) -> &Lexicon {
        self.languages
            .iter()
            .find(|l| l.code == code)
            .or_else(|| self.languages.iter().find(|l| l.code == self.default_code))
            .unwrap_or(&self.languages[0])
    }

    /// Resolve codes to lexicons, preserving caller order and dropping
    /// unknown codes. An empty result falls back to the default language.
    pub fn get_many(&self, codes: &[String]) -> Vec<&Lexicon> {
        let mut langs: Vec<&Lexicon> = codes
            .iter()
            .filter_map(|code| self.languages.iter().find(|l| l.code == code.as_str()))
            .collect();
        if langs.is_empty() {
            langs.push(self.get(self.default_code));
        }
        langs
    }

    /// Heuristically detect the language of an input string.
    ///
    /// Month and weekday hits score 10, common relative keywords score 5.
    /// The highest nonzero score wins, ties broken by registration order;
    /// an all-zero score returns the default code. This is a hint for
    /// callers that do not set `languages`, never a parsing input.
    pub fn detect(&self, input: &str) -> &'static str {
        let input = input.to_lowercase();
        let mut best: (&'static str, u32) = (self.default_code, 0);

        for lang in &self.languages {
            let mut score = 0;
            for month in lang.month_names() {
                if input.contains(month) {
                    score += 10;
                }
            }
            for weekday in lang.weekday_names() {
                if input.contains(weekday) {
                    score += 10;
                }
            }
            let r = &lang.relative;
            let keyword_sets: [&[&str]; 5] = [r.ago, r.in_, r.next, r.last, r.this];
            for term in [r.yesterday, r.today, r.tomorrow]
                .into_iter()
                .chain(keyword_sets.into_iter().flatten().copied())
            {
                if !term.is_empty() && input.contains(term) {
                    score += 5;
                }
            }
            if score > best.1 {
                best = (lang.code, score);
            }
        }

        best.0
    }

    /// All registered language codes, in registration order.
    pub fn supported(&self) -> Vec<&'static str> {
        self.languages.iter().map(|l| l.code).collect()
    }
}

/// The process-wide registry with every built-in language, built once.
pub(crate) fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut registry = Registry::new();
        registry.register(es::lexicon());
        registry.register(pt::lexicon());
        registry.register(fr::lexicon());
        registry.register(de::lexicon());
        registry.register(it::lexicon());
        registry.register(nl::lexicon());
        registry.register(ru::lexicon());
        registry.register(zh::lexicon());
        registry.register(ja::lexicon());
        registry
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtins_registered() {
        let supported = registry().supported();
        assert_eq!(supported, ["en", "es", "pt", "fr", "de", "it", "nl", "ru", "zh", "ja"]);
    }

    #[test]
    fn month_lookup_folds_case_per_language() {
        let langs = registry().get_many(&["es".to_string(), "en".to_string()]);
        assert_eq!(parse_month("Diciembre", &langs), Some(12));
        assert_eq!(parse_month("DEC", &langs), Some(12));
        assert_eq!(parse_month("nothing", &langs), None);
    }

    #[test]
    fn weekday_lookup_across_scripts() {
        let langs = registry().get_many(&["ru".to_string(), "zh".to_string()]);
        assert_eq!(parse_weekday("Понедельник", &langs), Some(Weekday::Mon));
        assert_eq!(parse_weekday("星期五", &langs), Some(Weekday::Fri));
    }

    #[test]
    fn get_many_preserves_order_and_falls_back() {
        let langs = registry().get_many(&["fr".to_string(), "en".to_string()]);
        assert_eq!(langs[0].code, "fr");
        assert_eq!(langs[1].code, "en");

        let fallback = registry().get_many(&["xx".to_string()]);
        assert_eq!(fallback.len(), 1);
        assert_eq!(fallback[0].code, "en");
    }

    #[test]
    fn detection_scores_languages() {
        assert_eq!(registry().detect("15 diciembre 2024"), "es");
        assert_eq!(registry().detect("15 décembre 2024"), "fr");
        assert_eq!(registry().detect("через 3 недели"), "ru");
        assert_eq!(registry().detect("2024-12-31"), "en");
    }

    #[test]
    fn alternation_prefers_longer_terms() {
        let alt = alternation(["sep", "september", "sept"].into_iter());
        assert_eq!(alt, "september|sept|sep");
    }

    #[test]
    fn registration_replaces_by_code() {
        let mut registry = Registry::new();
        assert_eq!(registry.supported().len(), 1);
        registry.register(super::en::lexicon());
        assert_eq!(registry.supported().len(), 1);
    }

    #[test]
    fn unit_normalization() {
        let langs = registry().get_many(&["es".to_string()]);
        assert_eq!(normalize_unit("días", &langs), Some(Unit::Day));
        assert_eq!(normalize_unit("semanas", &langs), Some(Unit::Week));
        let en = registry().get_many(&["en".to_string()]);
        assert_eq!(normalize_unit("fortnight", &en), Some(Unit::Fortnight));
    }
}
