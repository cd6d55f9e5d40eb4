//! Calendar helpers shared by the recognizers: validation, two-digit-year
//! expansion, ISO week conversion, quarter arithmetic, period boundaries
//! and unit arithmetic on civil dates.

use chrono::{DateTime, Datelike, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Weekday};

use crate::error::ParseError;
use crate::types::{DateOrder, Instant};

/// Pivot for interpreting two-digit years: below this a year is 20xx,
/// at or above it 19xx. 69 = 2069, 70 = 1970.
pub(crate) const TWO_DIGIT_YEAR_PIVOT: i32 = 70;

/// Expand a two-digit year to a full year. Values outside 0..=99 are
/// returned unchanged (already full years).
pub(crate) fn expand_two_digit_year(yy: i32) -> i32 {
    if !(0..=99).contains(&yy) {
        return yy;
    }
    if yy < TWO_DIGIT_YEAR_PIVOT {
        2000 + yy
    } else {
        1900 + yy
    }
}

/// Validate (year, month, day) as a civil date.
///
/// Range checks first, then a round-trip construction that rejects days
/// that do not exist in the given month (Feb 30, Apr 31, Feb 29 outside
/// leap years).
pub(crate) fn validate_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, ParseError> {
    if !(1..=12).contains(&month) {
        return Err(ParseError::InvalidDate {
            year,
            month,
            day,
            reason: "month must be between 1 and 12".to_string(),
        });
    }
    if !(1..=31).contains(&day) {
        return Err(ParseError::InvalidDate {
            year,
            month,
            day,
            reason: "day must be between 1 and 31".to_string(),
        });
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| ParseError::InvalidDate {
        year,
        month,
        day,
        reason: "invalid day for the given month/year".to_string(),
    })
}

/// Validate time-of-day components, each failure with its own reason.
pub(crate) fn validate_time(hour: u32, minute: u32, second: u32) -> Result<(), ParseError> {
    if hour > 23 {
        return Err(ParseError::invalid(format!("hour {hour} out of range (0-23)")));
    }
    if minute > 59 {
        return Err(ParseError::invalid(format!("minute {minute} out of range (0-59)")));
    }
    if second > 59 {
        return Err(ParseError::invalid(format!("second {second} out of range (0-59)")));
    }
    Ok(())
}

/// Whether a numeric `a/b/year` triple admits both MDY and DMY readings.
pub(crate) fn is_ambiguous_numeric(a: u32, b: u32) -> bool {
    let mdy_possible = (1..=12).contains(&a) && (1..=31).contains(&b);
    let dmy_possible = (1..=12).contains(&b) && (1..=31).contains(&a);
    mdy_possible && dmy_possible && a != b
}

/// Detect the date order of a numeric triple from its values alone.
///
/// A field above 12 pins the order mechanically; otherwise both readings
/// are validated and `None` is returned when the input stays ambiguous
/// (or when neither reading is a real date).
pub(crate) fn detect_date_order(a: u32, b: u32, year: i32) -> Option<DateOrder> {
    if a > 12 {
        return Some(DateOrder::Dmy);
    }
    if b > 12 {
        return Some(DateOrder::Mdy);
    }

    let mdy_valid = validate_date(year, a, b).is_ok();
    let dmy_valid = validate_date(year, b, a).is_ok();
    match (mdy_valid, dmy_valid) {
        (true, true) | (false, false) => None,
        (true, false) => Some(DateOrder::Mdy),
        (false, true) => Some(DateOrder::Dmy),
    }
}

/// Convert an ISO week date (year, week 1-53, weekday 1=Monday..7=Sunday)
/// to a civil date.
///
/// January 4 is always in ISO week 1; walk back to that week's Monday and
/// advance. Callers must have range-checked `week` and `weekday`.
pub(crate) fn iso_week_date(year: i32, week: u32, weekday: u32) -> Result<NaiveDate, ParseError> {
    let jan4 = NaiveDate::from_ymd_opt(year, 1, 4).ok_or_else(|| ParseError::InvalidDate {
        year,
        month: 1,
        day: 4,
        reason: "year out of range".to_string(),
    })?;
    let monday_week1 = jan4 - Duration::days(jan4.weekday().num_days_from_monday() as i64);
    Ok(monday_week1 + Duration::days(((week - 1) * 7 + (weekday - 1)) as i64))
}

/// A calendar period used by boundary expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Period {
    Week,
    Month,
    Year,
}

/// Start of the period containing `t`, at midnight. Weeks start on Monday
/// (ISO convention: a Sunday maps to the Monday six days prior).
pub(crate) fn start_of_period(t: Instant, period: Period) -> Instant {
    let date = t.date_naive();
    let start = match period {
        Period::Week => date - Duration::days(date.weekday().num_days_from_monday() as i64),
        Period::Month => with_day1(date),
        Period::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
    };
    at_offset(start.and_hms_opt(0, 0, 0).unwrap_or_default(), *t.offset())
}

/// End of the period containing `t`: the period's last civil day at
/// 23:59:59.999999999.
pub(crate) fn end_of_period(t: Instant, period: Period) -> Instant {
    let date = t.date_naive();
    let last = match period {
        Period::Week => date + Duration::days(6 - date.weekday().num_days_from_monday() as i64),
        Period::Month => last_day_of_month(date.year(), date.month()),
        Period::Year => NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date),
    };
    let eod = last
        .and_hms_nano_opt(23, 59, 59, 999_999_999)
        .unwrap_or_else(|| last.and_hms_opt(0, 0, 0).unwrap_or_default());
    at_offset(eod, *t.offset())
}

/// Shift `t` by whole periods, preserving the time of day.
pub(crate) fn add_period(t: Instant, period: Period, amount: i32) -> Instant {
    match period {
        Period::Week => t + Duration::days(amount as i64 * 7),
        Period::Month => add_unit(t, amount as i64, Unit::Month),
        Period::Year => add_unit(t, amount as i64, Unit::Year),
    }
}

/// Quarter (1-4) containing `t`.
pub(crate) fn quarter_of(t: Instant) -> u32 {
    (t.month() - 1) / 3 + 1
}

/// First day of the given quarter, at midnight in `offset`.
pub(crate) fn quarter_start(year: i32, quarter: u32, offset: FixedOffset) -> Instant {
    let month = (quarter - 1) * 3 + 1;
    let date = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or(NaiveDate::MIN)
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default();
    at_offset(date, offset)
}

/// Relative-date units, normalized across languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Fortnight,
    Month,
    Quarter,
    Year,
    Decade,
}

impl Unit {
    pub(crate) fn from_english(s: &str) -> Option<Unit> {
        let s = s.strip_suffix('s').unwrap_or(s);
        Some(match s {
            "second" => Unit::Second,
            "minute" => Unit::Minute,
            "hour" => Unit::Hour,
            "day" => Unit::Day,
            "week" => Unit::Week,
            "fortnight" => Unit::Fortnight,
            "month" => Unit::Month,
            "quarter" => Unit::Quarter,
            "year" => Unit::Year,
            "decade" => Unit::Decade,
            _ => return None,
        })
    }
}

/// Add `amount` units to `base`.
///
/// Second/minute/hour add wall-clock duration; day/week/fortnight add
/// civil days. Month-based units use forward overflow normalization: when
/// the target month is shorter than the source day, the overflow rolls
/// into the following month (Jan 31 + 1 month = Mar 3 in a non-leap year,
/// Mar 2 in a leap year). Negative amounts subtract.
pub(crate) fn add_unit(base: Instant, amount: i64, unit: Unit) -> Instant {
    match unit {
        Unit::Second => base + Duration::seconds(amount),
        Unit::Minute => base + Duration::minutes(amount),
        Unit::Hour => base + Duration::hours(amount),
        Unit::Day => base + Duration::days(amount),
        Unit::Week => base + Duration::days(amount * 7),
        Unit::Fortnight => base + Duration::days(amount * 14),
        Unit::Month => add_months(base, amount),
        Unit::Quarter => add_months(base, amount * 3),
        Unit::Year => add_months(base, amount * 12),
        Unit::Decade => add_months(base, amount * 120),
    }
}

fn add_months(base: Instant, months: i64) -> Instant {
    let naive = base.naive_local();
    let date = shift_months(naive.date(), months);
    at_offset(NaiveDateTime::new(date, naive.time()), *base.offset())
}

fn shift_months(date: NaiveDate, months: i64) -> NaiveDate {
    let total = date.year() as i64 * 12 + date.month0() as i64 + months;
    let year = total.div_euclid(12) as i32;
    let month = total.rem_euclid(12) as u32 + 1;
    match NaiveDate::from_ymd_opt(year, month, date.day()) {
        Some(d) => d,
        None => {
            // Day overflows the target month: roll forward by the excess.
            let last = last_day_of_month(year, month);
            let overflow = date.day() - last.day();
            last + Duration::days(overflow as i64)
        }
    }
}

/// Last civil day of (year, month).
pub(crate) fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .map(|d| d - Duration::days(1))
        .unwrap_or(NaiveDate::MAX)
}

fn with_day1(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Direction for resolving a weekday name against the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WeekdaySearch {
    /// Strictly forward: from a Monday, "next Monday" is seven days away.
    Next,
    /// Strictly backward.
    Last,
    /// Zero-inclusive: today counts when the weekday matches.
    This,
}

/// Resolve a weekday relative to `base`.
pub(crate) fn find_weekday(base: Instant, target: Weekday, search: WeekdaySearch) -> Instant {
    let diff = target.num_days_from_monday() as i64 - base.weekday().num_days_from_monday() as i64;
    let days = match search {
        WeekdaySearch::Next => {
            if diff <= 0 {
                diff + 7
            } else {
                diff
            }
        }
        WeekdaySearch::Last => {
            if diff >= 0 {
                diff - 7
            } else {
                diff
            }
        }
        WeekdaySearch::This => {
            if diff < 0 {
                diff + 7
            } else {
                diff
            }
        }
    };
    base + Duration::days(days)
}

/// Attach a fixed offset to a naive local date-time.
pub(crate) fn at_offset(naive: NaiveDateTime, offset: FixedOffset) -> Instant {
    match offset.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        // Unreachable for fixed offsets; keep a lossless fallback anyway.
        LocalResult::None => DateTime::from_naive_utc_and_offset(
            naive - Duration::seconds(offset.local_minus_utc() as i64),
            offset,
        ),
    }
}
