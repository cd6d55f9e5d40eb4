//! Date extraction from prose.
//!
//! A fixed battery of coarse regexes finds candidate substrings; each
//! candidate is reparsed through the full dispatcher, so extraction can
//! never accept something `parse` would reject. Confidence values are a
//! ranking hint from a fixed table, never a parsing input.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::formats::absolute::EN_MONTHS;
use crate::types::{ParsedDate, Settings};

fn battery() -> &'static Vec<Regex> {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // ISO dates with optional time.
            r"\b\d{4}-\d{1,2}-\d{1,2}(?:[T\s]\d{1,2}:\d{1,2}(?::\d{1,2})?)?\b".to_string(),
            // Numeric triples: 12/31/2024, 31-12-2024.
            r"\b\d{1,2}[/-]\d{1,2}[/-]\d{4}\b".to_string(),
            // Month-name dates, both orders.
            format!(r"(?i)\b\d{{1,2}}\s+(?:{EN_MONTHS})[,\s]+\d{{4}}\b"),
            format!(r"(?i)\b(?:{EN_MONTHS})\s+\d{{1,2}}[,\s]+\d{{4}}\b"),
            // Relative phrases.
            r"(?i)\b\d+\s+(?:second|minute|hour|day|week|month|year)s?\s+ago\b".to_string(),
            r"(?i)\bin\s+\d+\s+(?:second|minute|hour|day|week|month|year)s?\b".to_string(),
            r"(?i)\b(?:yesterday|today|tomorrow)\b".to_string(),
            r"(?i)\b(?:last|next)\s+(?:week|month|year)\b".to_string(),
            r"(?i)\b(?:next|last)\s+(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b"
                .to_string(),
            // Unix timestamps.
            r"\b\d{10,13}\b".to_string(),
        ]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
    })
}

/// Scan `input` and return every parseable date mention, in source order.
/// Matches anchored at an already-claimed start offset are suppressed.
pub(crate) fn extract_all(input: &str, settings: &Settings) -> Vec<ParsedDate> {
    let mut claimed: HashSet<usize> = HashSet::new();
    let mut results: Vec<ParsedDate> = Vec::new();

    for pattern in battery() {
        for found in pattern.find_iter(input) {
            if claimed.contains(&found.start()) {
                continue;
            }
            let Ok(date) = crate::parse(found.as_str(), Some(settings)) else {
                continue;
            };
            results.push(ParsedDate {
                date,
                position: found.start(),
                length: found.len(),
                matched_text: found.as_str().to_string(),
                confidence: confidence(found.as_str()),
            });
            claimed.insert(found.start());
        }
    }

    results.sort_by_key(|parsed| (parsed.position, parsed.length));
    results
}

/// Fixed confidence table keyed by the shape of the matched text.
fn confidence(text: &str) -> f64 {
    struct ConfidencePatterns {
        iso: Regex,
        month_name: Regex,
        units_ago: Regex,
        relative_word: Regex,
        numeric: Regex,
        timestamp: Regex,
    }
    static PATTERNS: OnceLock<ConfidencePatterns> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| ConfidencePatterns {
        iso: Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap(),
        month_name: Regex::new(
            r"(?i)(january|february|march|april|may|june|july|august|september|october|november|december)",
        )
        .unwrap(),
        units_ago: Regex::new(r"\d+\s+(day|week|month|year)s?\s+ago").unwrap(),
        relative_word: Regex::new(r"(?i)(yesterday|today|tomorrow|next|last)").unwrap(),
        numeric: Regex::new(r"^\d{1,2}[/-]\d{1,2}[/-]\d{4}$").unwrap(),
        timestamp: Regex::new(r"^\d{10,13}$").unwrap(),
    });

    let text = text.trim();
    if patterns.iso.is_match(text) {
        0.95
    } else if patterns.month_name.is_match(text) {
        0.90
    } else if patterns.units_ago.is_match(text) {
        0.85
    } else if patterns.relative_word.is_match(text) {
        0.80
    } else if patterns.numeric.is_match(text) {
        0.75
    } else if patterns.timestamp.is_match(text) {
        0.70
    } else {
        0.60
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Utc};

    fn settings() -> Settings {
        Settings {
            relative_base: Some(
                Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap().fixed_offset(),
            ),
            ..Settings::default()
        }
    }

    #[test]
    fn finds_multiple_dates_in_position_order() {
        let text = "Meeting on 2024-12-31 and follow-up on 2025-01-15.";
        let results = extract_all(text, &settings());
        assert_eq!(results.len(), 2);

        assert_eq!(results[0].position, 11);
        assert_eq!(results[0].matched_text, "2024-12-31");
        assert_eq!(results[0].date.year(), 2024);
        assert!((results[0].confidence - 0.95).abs() < f64::EPSILON);

        assert_eq!(results[1].position, 39);
        assert_eq!(results[1].matched_text, "2025-01-15");
        assert_eq!(results[1].date.month(), 1);
    }

    #[test]
    fn mixed_formats() {
        let text = "ISO: 2024-12-31, US: 12/31/2024, Named: December 31, 2024";
        let results = extract_all(text, &settings());
        assert!(results.len() >= 3, "found {}", results.len());
        // Ascending source positions, no duplicate anchors.
        for pair in results.windows(2) {
            assert!(pair[0].position < pair[1].position);
        }
    }

    #[test]
    fn relative_phrases_and_confidence() {
        let text = "It happened 3 days ago, see you tomorrow or next week.";
        let results = extract_all(text, &settings());
        let texts: Vec<_> = results.iter().map(|r| r.matched_text.as_str()).collect();
        assert!(texts.contains(&"3 days ago"));
        assert!(texts.contains(&"tomorrow"));
        assert!(texts.contains(&"next week"));

        let ago = results.iter().find(|r| r.matched_text == "3 days ago").unwrap();
        assert!((ago.confidence - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn no_dates_in_plain_text() {
        let results = extract_all("This text has no dates in it at all.", &settings());
        assert!(results.is_empty());
    }

    #[test]
    fn reparse_agrees_with_extraction() {
        let text = "Log entry 1609459200 and deadline December 31, 2024.";
        let settings = settings();
        for parsed in extract_all(text, &settings) {
            let slice = &text[parsed.position..parsed.position + parsed.length];
            assert_eq!(slice, parsed.matched_text);
            let reparsed = crate::parse(slice, Some(&settings)).unwrap();
            assert_eq!(reparsed, parsed.date);
        }
    }
}
