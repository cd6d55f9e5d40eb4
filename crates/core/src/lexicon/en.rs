//! English lexicon.

use chrono::Weekday;

use super::{month_map, weekday_map, Lexicon, RelativeTerms, TimeTerms};

pub(super) fn lexicon() -> Lexicon {
    Lexicon {
        code: "en",
        name: "English",
        months: month_map(&[
            ("january", 1),
            ("jan", 1),
            ("february", 2),
            ("feb", 2),
            ("march", 3),
            ("mar", 3),
            ("april", 4),
            ("apr", 4),
            ("may", 5),
            ("june", 6),
            ("jun", 6),
            ("july", 7),
            ("jul", 7),
            ("august", 8),
            ("aug", 8),
            ("september", 9),
            ("sep", 9),
            ("sept", 9),
            ("october", 10),
            ("oct", 10),
            ("november", 11),
            ("nov", 11),
            ("december", 12),
            ("dec", 12),
        ]),
        weekdays: weekday_map(&[
            ("monday", Weekday::Mon),
            ("mon", Weekday::Mon),
            ("tuesday", Weekday::Tue),
            ("tue", Weekday::Tue),
            ("tues", Weekday::Tue),
            ("wednesday", Weekday::Wed),
            ("wed", Weekday::Wed),
            ("thursday", Weekday::Thu),
            ("thu", Weekday::Thu),
            ("thur", Weekday::Thu),
            ("thurs", Weekday::Thu),
            ("friday", Weekday::Fri),
            ("fri", Weekday::Fri),
            ("saturday", Weekday::Sat),
            ("sat", Weekday::Sat),
            ("sunday", Weekday::Sun),
            ("sun", Weekday::Sun),
        ]),
        relative: RelativeTerms {
            yesterday: "yesterday",
            today: "today",
            tomorrow: "tomorrow",
            now: "now",
            ago: &["ago"],
            in_: &["in"],
            next: &["next"],
            last: &["last"],
            this: &["this"],
            second: &["second", "seconds"],
            minute: &["minute", "minutes"],
            hour: &["hour", "hours"],
            day: &["day", "days"],
            week: &["week", "weeks"],
            fortnight: &["fortnight", "fortnights"],
            month: &["month", "months"],
            quarter: &["quarter", "quarters"],
            year: &["year", "years"],
            decade: &["decade", "decades"],
            beginning: &["beginning", "start"],
            end: &["end"],
            start: &["start"],
            first: &["first"],
        },
        time: TimeTerms {
            noon: &["noon"],
            midnight: &["midnight"],
            quarter: &["quarter"],
            half: &["half"],
            past: &["past", "after"],
            to: &["to", "before"],
            oclock: &["o'clock"],
            am: &["am", "a.m."],
            pm: &["pm", "p.m."],
        },
    }
}
