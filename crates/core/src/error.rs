//! Error taxonomy for parse failures.
//!
//! Every variant carries enough context to reconstruct the failing input
//! and, where relevant, the interpretation that was attempted. Errors are
//! returned by value; there is no global error channel.

use crate::types::Instant;

/// The reasons a parse can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The input string was empty after trimming.
    #[error("input string is empty")]
    EmptyInput,

    /// No recognizer matched; `suggestion` is a hint derived from the
    /// shape of the input.
    #[error("invalid date format: {input:?} (suggestion: {suggestion})")]
    InvalidFormat { input: String, suggestion: String },

    /// A recognizer matched but the components failed validation
    /// (Feb 30, hour 24, week 54, ...).
    #[error("invalid date: year={year}, month={month}, day={day} - {reason}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        reason: String,
    },

    /// The input admits more than one valid interpretation and the caller
    /// asked for strict resolution.
    #[error("ambiguous date: {input:?} ({reason})")]
    AmbiguousDate {
        input: String,
        candidates: Vec<Instant>,
        reason: String,
    },

    /// A lower-level failure wrapped with the identity of the recognizer
    /// that produced it. Used by the range parser to surface which half
    /// failed.
    #[error("failed to parse {input:?} with {parser} parser: {source}")]
    ParseFailure {
        input: String,
        parser: &'static str,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Shorthand for an [`ParseError::InvalidDate`] that is about time or
    /// period components rather than a calendar day.
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ParseError::InvalidDate {
            year: 0,
            month: 0,
            day: 0,
            reason: reason.into(),
        }
    }
}

/// Derive a format suggestion from the shape of an unrecognized input.
pub(crate) fn suggest_format(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let all_digits = input.bytes().all(|b| b.is_ascii_digit());
    if input.len() == 8 && all_digits {
        return "try ISO format: YYYY-MM-DD (e.g., 2024-12-31)".to_string();
    }
    if (10..=13).contains(&input.len()) && all_digits {
        return "looks like a timestamp (Unix seconds or milliseconds)".to_string();
    }
    if input.contains('/') && !input.contains('-') {
        return "numeric dates with slashes (use the date_order setting: MDY or DMY)".to_string();
    }

    "supported formats: ISO (YYYY-MM-DD), numeric (MM/DD/YYYY), month names (Dec 31 2024), \
     relative (2 days ago)"
        .to_string()
}
