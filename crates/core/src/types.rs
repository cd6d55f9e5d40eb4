//! Core types for Dateglot.
//!
//! These types form the public data model: the parse configuration
//! ([`Settings`]) and the result shapes produced by extraction and range
//! parsing.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::timezone::ZoneInfo;

/// A resolved civil date-time with its zone offset attached.
///
/// Equality is instant equality in absolute time, so
/// `2024-12-31T10:00:00+02:00 == 2024-12-31T08:00:00Z`.
pub type Instant = DateTime<FixedOffset>;

/// Interpretation order for ambiguous numeric triples like `01/02/2024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateOrder {
    /// Detect from the input where possible, fall back to MDY.
    #[default]
    #[serde(rename = "")]
    Auto,
    #[serde(rename = "MDY")]
    Mdy,
    #[serde(rename = "DMY")]
    Dmy,
    #[serde(rename = "YMD")]
    Ymd,
}

/// Direction used to lift under-specified dates (bare weekday, bare month)
/// onto a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferDatesFrom {
    /// Resolve forward from the reference instant.
    #[default]
    Future,
    /// Resolve backward from the reference instant.
    Past,
    /// Resolve within the current period, keeping today when it matches.
    Current,
}

/// The format-recognizer families the dispatcher may try.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParserKind {
    Timestamp,
    Absolute,
    Week,
    Ordinal,
    Incomplete,
    Relative,
    Time,
}

impl ParserKind {
    /// All recognizers, in dispatch order.
    pub const ALL: [ParserKind; 7] = [
        ParserKind::Timestamp,
        ParserKind::Absolute,
        ParserKind::Week,
        ParserKind::Ordinal,
        ParserKind::Incomplete,
        ParserKind::Relative,
        ParserKind::Time,
    ];

    /// Stable name used in error context.
    pub fn name(self) -> &'static str {
        match self {
            ParserKind::Timestamp => "timestamp",
            ParserKind::Absolute => "absolute",
            ParserKind::Week => "week",
            ParserKind::Ordinal => "ordinal",
            ParserKind::Incomplete => "incomplete",
            ParserKind::Relative => "relative",
            ParserKind::Time => "time",
        }
    }
}

/// Parse configuration. Every field has a usable default; a fresh
/// `Settings::default()` parses English with a UTC "now" reference.
///
/// # Examples
///
/// ```
/// use dateglot_core::{parse, Settings};
/// use chrono::{TimeZone, Utc};
///
/// let settings = Settings {
///     relative_base: Some(Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap().fixed_offset()),
///     ..Settings::default()
/// };
/// let date = parse("tomorrow", Some(&settings)).unwrap();
/// assert_eq!(date.to_rfc3339(), "2024-10-16T12:00:00+00:00");
/// ```
#[derive(Debug, Clone)]
pub struct Settings {
    /// Anchor for all relative computations. `None` means process "now".
    pub relative_base: Option<Instant>,
    /// Interpretation of ambiguous numeric triples. [`DateOrder::Auto`]
    /// permits input-driven detection.
    pub date_order: DateOrder,
    /// If true, ambiguous numeric dates fail with
    /// [`ParseError::AmbiguousDate`](crate::ParseError::AmbiguousDate)
    /// instead of guessing.
    pub strict: bool,
    /// Direction for under-specified dates.
    pub prefer_dates_from: PreferDatesFrom,
    /// Which recognizers the dispatcher may try, in its fixed order.
    pub enabled_parsers: Vec<ParserKind>,
    /// Language codes whose lexicons are consulted, first match wins.
    pub languages: Vec<String>,
    /// Zone attached to results that carry no explicit zone of their own.
    pub preferred_zone: ZoneInfo,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            relative_base: None,
            date_order: DateOrder::Auto,
            strict: false,
            prefer_dates_from: PreferDatesFrom::Future,
            enabled_parsers: ParserKind::ALL.to_vec(),
            languages: vec!["en".to_string()],
            preferred_zone: ZoneInfo::utc(),
        }
    }
}

/// One date mention found by [`extract_dates`](crate::extract_dates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDate {
    /// The parsed instant.
    pub date: Instant,
    /// Byte offset of the match in the source text.
    pub position: usize,
    /// Byte length of the match.
    pub length: usize,
    /// The literal matched substring.
    pub matched_text: String,
    /// Heuristic confidence in [0, 1]. A hint for ranking, never an input
    /// to parsing.
    pub confidence: f64,
}

/// A parsed date range. `start <= end` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Instant,
    pub end: Instant,
    /// The original text the range was parsed from.
    pub matched_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.enabled_parsers.len(), 7);
        assert!(!settings.strict);
        assert_eq!(settings.prefer_dates_from, PreferDatesFrom::Future);
        assert_eq!(settings.date_order, DateOrder::Auto);
        assert_eq!(settings.languages, vec!["en".to_string()]);
    }

    #[test]
    fn parser_kind_names_are_stable() {
        let names: Vec<_> = ParserKind::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            ["timestamp", "absolute", "week", "ordinal", "incomplete", "relative", "time"]
        );
    }

    #[test]
    fn parsed_date_serializes() {
        let parsed = ParsedDate {
            date: chrono::DateTime::parse_from_rfc3339("2024-12-31T00:00:00+00:00").unwrap(),
            position: 11,
            length: 10,
            matched_text: "2024-12-31".to_string(),
            confidence: 0.95,
        };
        let json = serde_json::to_string(&parsed).unwrap();
        assert!(json.contains("\"position\":11"));
        let back: ParsedDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, parsed);
    }
}
