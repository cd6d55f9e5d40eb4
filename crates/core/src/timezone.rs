//! Timezone resolution: abbreviations, numeric and named offsets, IANA
//! region names, trailing-zone extraction and zone application.

use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{FixedOffset, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use regex::Regex;

use crate::calendar::at_offset;
use crate::error::ParseError;
use crate::types::Instant;

/// Common timezone abbreviations mapped to IANA zone names.
///
/// Some abbreviations are genuinely ambiguous (CST is US Central, China
/// or Cuba; IST is India, Ireland or Israel). Those resolve to the most
/// common interpretation (America/Chicago, Asia/Kolkata) and are flagged
/// on the returned [`ZoneInfo`].
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("UTC", "UTC"),
    ("GMT", "GMT"),
    ("Z", "UTC"),
    // North America
    ("EST", "America/New_York"),
    ("EDT", "America/New_York"),
    ("CST", "America/Chicago"),
    ("CDT", "America/Chicago"),
    ("MST", "America/Denver"),
    ("MDT", "America/Denver"),
    ("PST", "America/Los_Angeles"),
    ("PDT", "America/Los_Angeles"),
    ("AKST", "America/Anchorage"),
    ("AKDT", "America/Anchorage"),
    ("HST", "Pacific/Honolulu"),
    // Europe
    ("CET", "Europe/Paris"),
    ("CEST", "Europe/Paris"),
    ("WET", "Europe/Lisbon"),
    ("WEST", "Europe/Lisbon"),
    ("EET", "Europe/Athens"),
    ("EEST", "Europe/Athens"),
    ("BST", "Europe/London"),
    // Asia
    ("IST", "Asia/Kolkata"),
    ("JST", "Asia/Tokyo"),
    ("KST", "Asia/Seoul"),
    ("SGT", "Asia/Singapore"),
    ("HKT", "Asia/Hong_Kong"),
    // Australia & Pacific
    ("AWST", "Australia/Perth"),
    ("AEST", "Australia/Sydney"),
    ("AEDT", "Australia/Sydney"),
    ("ACST", "Australia/Adelaide"),
    ("ACDT", "Australia/Adelaide"),
    ("NZST", "Pacific/Auckland"),
    ("NZDT", "Pacific/Auckland"),
];

/// Abbreviations that collide across regions.
const AMBIGUOUS_ABBREVIATIONS: &[&str] = &["CST", "IST"];

/// The zone a timezone string resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// An IANA region with full DST rules.
    Region(Tz),
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

/// Parsed timezone information.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneInfo {
    /// The resolved zone.
    pub zone: Zone,
    /// The original timezone string (e.g. "EST", "+05:00").
    pub name: String,
    /// Normalized IANA name or canonical offset spelling.
    pub normalized: String,
    /// True when the abbreviation collides across regions and the most
    /// common interpretation was chosen.
    pub ambiguous: bool,
}

impl ZoneInfo {
    /// The UTC zone.
    pub fn utc() -> ZoneInfo {
        ZoneInfo {
            zone: Zone::Region(Tz::UTC),
            name: "UTC".to_string(),
            normalized: "UTC".to_string(),
            ambiguous: false,
        }
    }

    /// Offset in seconds east of UTC, when the zone is a fixed offset.
    pub fn fixed_offset_seconds(&self) -> Option<i32> {
        match self.zone {
            Zone::Fixed(offset) => Some(offset.local_minus_utc()),
            Zone::Region(_) => None,
        }
    }

    /// Interpret naive wall-clock fields as local time in this zone.
    ///
    /// DST folds resolve to the earlier mapping; gap times fall back to
    /// the same fields read as UTC.
    pub(crate) fn from_local(&self, naive: NaiveDateTime) -> Instant {
        match self.zone {
            Zone::Fixed(offset) => at_offset(naive, offset),
            Zone::Region(tz) => match tz.from_local_datetime(&naive) {
                LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.fixed_offset(),
                LocalResult::None => chrono::Utc.from_utc_datetime(&naive).fixed_offset(),
            },
        }
    }

    /// Convert an instant into this zone, preserving the absolute time.
    pub(crate) fn convert(&self, t: Instant) -> Instant {
        match self.zone {
            Zone::Fixed(offset) => t.with_timezone(&offset),
            Zone::Region(tz) => t.with_timezone(&tz).fixed_offset(),
        }
    }
}

fn offset_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([+-])(\d{2}):?(\d{2})$").unwrap())
}

fn named_offset_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(UTC|GMT)([+-])(\d{1,2})(?::(\d{2}))?$").unwrap())
}

fn trailing_offset_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([+-]\d{2}:?\d{2})$").unwrap())
}

/// Parse a timezone string: abbreviation, `±HH:MM`/`±HHMM` offset,
/// `UTC±H[:MM]`/`GMT±H[:MM]` named offset, or IANA region name.
pub fn parse_timezone(tz: &str) -> Result<ZoneInfo, ParseError> {
    let tz = tz.trim();
    if tz.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    if let Some(info) = lookup_abbreviation(tz) {
        return Ok(info);
    }
    if let Some(info) = parse_offset(tz) {
        return Ok(info);
    }
    if let Some(info) = parse_named_offset(tz) {
        return Ok(info);
    }
    if let Ok(region) = Tz::from_str(tz) {
        return Ok(ZoneInfo {
            zone: Zone::Region(region),
            name: tz.to_string(),
            normalized: region.name().to_string(),
            ambiguous: false,
        });
    }

    Err(ParseError::InvalidFormat {
        input: tz.to_string(),
        suggestion: "expected a timezone abbreviation (EST), an offset (+05:00, UTC-8) \
                     or a region name (Europe/Paris)"
            .to_string(),
    })
}

fn lookup_abbreviation(abbr: &str) -> Option<ZoneInfo> {
    let upper = abbr.to_ascii_uppercase();
    let (_, iana) = ABBREVIATIONS.iter().find(|(a, _)| *a == upper)?;
    let region = Tz::from_str(iana).ok()?;
    Some(ZoneInfo {
        zone: Zone::Region(region),
        name: abbr.to_string(),
        normalized: (*iana).to_string(),
        ambiguous: AMBIGUOUS_ABBREVIATIONS.contains(&upper.as_str()),
    })
}

fn parse_offset(offset: &str) -> Option<ZoneInfo> {
    let caps = offset_regex().captures(offset)?;
    let sign = if &caps[1] == "-" { -1 } else { 1 };
    let hours: i32 = caps[2].parse().ok()?;
    let minutes: i32 = caps[3].parse().ok()?;
    let seconds = sign * (hours * 3600 + minutes * 60);
    let fixed = FixedOffset::east_opt(seconds)?;
    Some(ZoneInfo {
        zone: Zone::Fixed(fixed),
        name: offset.to_string(),
        normalized: offset.to_string(),
        ambiguous: false,
    })
}

fn parse_named_offset(offset: &str) -> Option<ZoneInfo> {
    let upper = offset.to_ascii_uppercase();
    let caps = named_offset_regex().captures(&upper)?;
    let base = &caps[1];
    let sign = if &caps[2] == "-" { -1 } else { 1 };
    let hours: i32 = caps[3].parse().ok()?;
    let minutes: i32 = caps.get(4).map_or(0, |m| m.as_str().parse().unwrap_or(0));
    let seconds = sign * (hours * 3600 + minutes * 60);
    let fixed = FixedOffset::east_opt(seconds)?;

    let normalized = if minutes > 0 {
        format!("{}{}{}:{:02}", base, if sign < 0 { "-" } else { "+" }, hours, minutes)
    } else {
        format!("{}{}{}", base, if sign < 0 { "-" } else { "+" }, hours)
    };
    Some(ZoneInfo {
        zone: Zone::Fixed(fixed),
        name: offset.to_string(),
        normalized,
        ambiguous: false,
    })
}

/// Extract trailing timezone information from a date string.
///
/// Returns the remaining date text and the zone, if one was found. The
/// `±HH:MM` form is only stripped when the string also contains a `T` or
/// a space, so the trailing `-YYYY` of numeric dates is never eaten.
pub fn extract_timezone(input: &str) -> (String, Option<ZoneInfo>) {
    let input = input.trim();

    // ISO terminal Z, only when it follows a digit so that words ending
    // in z ("März") are left alone.
    if let Some(stripped) = input.strip_suffix(['Z', 'z']) {
        if stripped.ends_with(|c: char| c.is_ascii_digit()) {
            if let Ok(info) = parse_timezone("Z") {
                return (stripped.trim_end().to_string(), Some(info));
            }
        }
    }

    // Trailing numeric offset, guarded against bare numeric dates.
    if let Some(caps) = trailing_offset_regex().captures(input) {
        if input.contains('T') || input.contains(' ') {
            let tz_str = &caps[1];
            if let Ok(info) = parse_timezone(tz_str) {
                let date_str = input[..input.len() - tz_str.len()].trim_end().to_string();
                return (date_str, Some(info));
            }
        }
    }

    // Final whitespace-separated token that looks like an abbreviation.
    // Letters only, so a trailing year is never mistaken for a zone;
    // resolution is case-insensitive to keep keyword handling uniform.
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() >= 2 {
        let last = parts[parts.len() - 1];
        if (2..=5).contains(&last.len()) && last.bytes().all(|b| b.is_ascii_alphabetic()) {
            if let Some(info) = lookup_abbreviation(last) {
                return (parts[..parts.len() - 1].join(" "), Some(info));
            }
        }
    }

    (input.to_string(), None)
}

/// Apply a resolved zone to a parsed instant.
///
/// An instant still carrying UTC (the unspecified-zone default) has its
/// wall-clock fields reinterpreted in the target zone; an instant already
/// in a specific zone is converted instead.
pub fn apply_timezone(t: Instant, zone: &ZoneInfo) -> Instant {
    if t.offset().local_minus_utc() == 0 {
        zone.from_local(t.naive_local())
    } else {
        zone.convert(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn abbreviations_resolve() {
        let est = parse_timezone("EST").unwrap();
        assert_eq!(est.normalized, "America/New_York");
        assert!(!est.ambiguous);

        let pst = parse_timezone("pst").unwrap();
        assert_eq!(pst.normalized, "America/Los_Angeles");

        let jst = parse_timezone("JST").unwrap();
        assert_eq!(jst.normalized, "Asia/Tokyo");
    }

    #[test]
    fn ambiguous_abbreviations_flagged() {
        let cst = parse_timezone("CST").unwrap();
        assert!(cst.ambiguous);
        assert_eq!(cst.normalized, "America/Chicago");

        let ist = parse_timezone("IST").unwrap();
        assert!(ist.ambiguous);
        assert_eq!(ist.normalized, "Asia/Kolkata");
    }

    #[test]
    fn numeric_offsets() {
        let plus = parse_timezone("+05:30").unwrap();
        assert_eq!(plus.fixed_offset_seconds(), Some(5 * 3600 + 30 * 60));
        let minus = parse_timezone("-0800").unwrap();
        assert_eq!(minus.fixed_offset_seconds(), Some(-8 * 3600));
    }

    #[test]
    fn named_offsets() {
        let utc5 = parse_timezone("UTC+5").unwrap();
        assert_eq!(utc5.fixed_offset_seconds(), Some(5 * 3600));
        assert_eq!(utc5.normalized, "UTC+5");
        let gmt8 = parse_timezone("GMT-8").unwrap();
        assert_eq!(gmt8.fixed_offset_seconds(), Some(-8 * 3600));
        let half = parse_timezone("UTC+05:30").unwrap();
        assert_eq!(half.fixed_offset_seconds(), Some(5 * 3600 + 30 * 60));
    }

    #[test]
    fn region_names_resolve() {
        let paris = parse_timezone("Europe/Paris").unwrap();
        assert_eq!(paris.normalized, "Europe/Paris");
        assert!(matches!(paris.zone, Zone::Region(_)));
    }

    #[test]
    fn unknown_zone_is_an_error() {
        assert!(parse_timezone("NOTAZONE").is_err());
        assert!(parse_timezone("").is_err());
    }

    #[test]
    fn extraction_strips_terminal_z() {
        let (rest, tz) = extract_timezone("2024-12-31T10:30:00Z");
        assert_eq!(rest, "2024-12-31T10:30:00");
        assert_eq!(tz.unwrap().normalized, "UTC");
    }

    #[test]
    fn extraction_strips_offset_only_with_time_separator() {
        let (rest, tz) = extract_timezone("2024-12-31T10:30:00+05:00");
        assert_eq!(rest, "2024-12-31T10:30:00");
        assert_eq!(tz.unwrap().fixed_offset_seconds(), Some(5 * 3600));

        // A numeric date's trailing -YYYY must not be eaten.
        let (rest, tz) = extract_timezone("01-15-2024");
        assert_eq!(rest, "01-15-2024");
        assert!(tz.is_none());
    }

    #[test]
    fn extraction_strips_trailing_abbreviation() {
        let (rest, tz) = extract_timezone("2024-12-31 10:30:00 EST");
        assert_eq!(rest, "2024-12-31 10:30:00");
        assert_eq!(tz.unwrap().normalized, "America/New_York");

        // A trailing year is not an abbreviation.
        let (rest, tz) = extract_timezone("December 31, 2024");
        assert_eq!(rest, "December 31, 2024");
        assert!(tz.is_none());
    }

    #[test]
    fn extraction_is_case_insensitive() {
        let (rest, tz) = extract_timezone("2024-12-31T10:30:00z");
        assert_eq!(rest, "2024-12-31T10:30:00");
        assert_eq!(tz.unwrap().normalized, "UTC");

        let (rest, tz) = extract_timezone("2024-12-31 10:30:00 est");
        assert_eq!(rest, "2024-12-31 10:30:00");
        assert_eq!(tz.unwrap().normalized, "America/New_York");

        // Words that merely end in z are not zone markers.
        let (rest, tz) = extract_timezone("31 märz");
        assert_eq!(rest, "31 märz");
        assert!(tz.is_none());
    }

    #[test]
    fn apply_reinterprets_utc_wall_clock() {
        let t = Utc.with_ymd_and_hms(2024, 12, 31, 10, 30, 0).unwrap().fixed_offset();
        let est = parse_timezone("EST").unwrap();
        let applied = apply_timezone(t, &est);
        // Same wall clock, new offset.
        assert_eq!(applied.naive_local(), t.naive_local());
        assert_eq!(applied.offset().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn apply_converts_zoned_instants() {
        let t = chrono::DateTime::parse_from_rfc3339("2024-12-31T10:30:00+02:00").unwrap();
        let utc = ZoneInfo::utc();
        let converted = apply_timezone(t, &utc);
        assert_eq!(converted.to_rfc3339(), "2024-12-31T08:30:00+00:00");
        assert_eq!(converted, t);
    }
}
