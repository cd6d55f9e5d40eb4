//! The format-recognizer families.
//!
//! Each recognizer is a pure function `(&ParserContext) -> Outcome`. The
//! distinction between "try the next recognizer" and "stop and surface an
//! error" is a data-level decision carried by [`Outcome`], never control
//! flow by unwinding.

use chrono::{NaiveDate, NaiveDateTime, Utc};

use crate::calendar::at_offset;
use crate::error::ParseError;
use crate::lexicon::{self, Lexicon};
use crate::types::{DateOrder, Instant, Settings};

pub(crate) mod absolute;
pub(crate) mod incomplete;
pub(crate) mod ordinal;
pub(crate) mod relative;
pub(crate) mod relative_extended;
pub(crate) mod time_of_day;
pub(crate) mod timestamp;
pub(crate) mod week;

/// What one recognizer decided about the whole input.
#[derive(Debug, Clone)]
pub(crate) enum Outcome {
    /// None of this recognizer's patterns apply; the dispatcher moves on.
    NoMatch,
    /// A pattern matched and produced a valid instant.
    Match(Instant),
    /// A pattern matched but the input is invalid or ambiguous. The
    /// dispatcher stops: a later recognizer's accidental match would
    /// misrepresent the user's intent.
    Invalid(ParseError),
}

impl Outcome {
    /// Fold a validation result into an outcome.
    pub(crate) fn from_result(result: Result<Instant, ParseError>) -> Outcome {
        match result {
            Ok(instant) => Outcome::Match(instant),
            Err(err) => Outcome::Invalid(err),
        }
    }
}

/// Per-call state shared by the recognizers.
pub(crate) struct ParserContext<'s> {
    /// Trimmed input. Internal whitespace is preserved.
    pub input: String,
    pub settings: &'s Settings,
    /// Resolved lexicons, caller order preserved.
    pub languages: Vec<&'static Lexicon>,
    /// Resolved reference instant for relative computations.
    pub base: Instant,
    /// Whether `date_order` was left to auto-detection.
    pub auto_date_order: bool,
}

impl<'s> ParserContext<'s> {
    pub(crate) fn new(input: &str, settings: &'s Settings) -> ParserContext<'s> {
        ParserContext {
            input: input.trim().to_string(),
            settings,
            languages: lexicon::registry().get_many(&settings.languages),
            base: settings
                .relative_base
                .unwrap_or_else(|| Utc::now().fixed_offset()),
            auto_date_order: settings.date_order == DateOrder::Auto,
        }
    }

    /// Attach the preferred zone to a naive date at midnight.
    pub(crate) fn localize_date(&self, date: NaiveDate) -> Instant {
        self.localize(date.and_hms_opt(0, 0, 0).unwrap_or_default())
    }

    /// Attach the preferred zone to naive wall-clock fields.
    pub(crate) fn localize(&self, naive: NaiveDateTime) -> Instant {
        self.settings.preferred_zone.from_local(naive)
    }

    /// The reference date with a different time of day, in the reference
    /// instant's own zone.
    pub(crate) fn base_with_time(&self, hour: u32, minute: u32, second: u32) -> Instant {
        let naive = self
            .base
            .date_naive()
            .and_hms_opt(hour, minute, second)
            .unwrap_or_else(|| self.base.naive_local());
        at_offset(naive, *self.base.offset())
    }
}
