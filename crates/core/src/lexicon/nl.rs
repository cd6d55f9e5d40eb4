//! Dutch lexicon.

use chrono::Weekday;

use super::{month_map, weekday_map, Lexicon, RelativeTerms, TimeTerms};

pub(super) fn lexicon() -> Lexicon {
    Lexicon {
        code: "nl",
        name: "Dutch",
        months: month_map(&[
            ("januari", 1),
            ("februari", 2),
            ("maart", 3),
            ("april", 4),
            ("mei", 5),
            ("juni", 6),
            ("juli", 7),
            ("augustus", 8),
            ("september", 9),
            ("oktober", 10),
            ("november", 11),
            ("december", 12),
            ("jan", 1),
            ("feb", 2),
            ("mrt", 3),
            ("apr", 4),
            ("jun", 6),
            ("jul", 7),
            ("aug", 8),
            ("sep", 9),
            ("sept", 9),
            ("okt", 10),
            ("nov", 11),
            ("dec", 12),
        ]),
        weekdays: weekday_map(&[
            ("maandag", Weekday::Mon),
            ("dinsdag", Weekday::Tue),
            ("woensdag", Weekday::Wed),
            ("donderdag", Weekday::Thu),
            ("vrijdag", Weekday::Fri),
            ("zaterdag", Weekday::Sat),
            ("zondag", Weekday::Sun),
            ("ma", Weekday::Mon),
            ("di", Weekday::Tue),
            ("wo", Weekday::Wed),
            ("do", Weekday::Thu),
            ("vr", Weekday::Fri),
            ("za", Weekday::Sat),
            ("zo", Weekday::Sun),
        ]),
        relative: RelativeTerms {
            yesterday: "gisteren",
            today: "vandaag",
            tomorrow: "morgen",
            now: "nu",
            // "2 dagen geleden" = 2 days ago (suffix position)
            ago: &["geleden"],
            // "over 3 weken" = in 3 weeks
            in_: &["over", "in"],
            next: &["volgende", "volgend", "komende", "komend", "aanstaande", "aanstaand"],
            last: &["vorige", "vorig", "afgelopen", "voorgaande", "voorgaand", "laatste"],
            this: &["deze", "dit"],
            second: &["seconde", "seconden"],
            minute: &["minuut", "minuten"],
            hour: &["uur", "uren"],
            day: &["dag", "dagen"],
            week: &["week", "weken"],
            fortnight: &["veertien dagen", "twee weken"],
            month: &["maand", "maanden"],
            quarter: &["kwartaal", "kwartalen"],
            year: &["jaar", "jaren"],
            decade: &["decennium", "decennia", "tien jaar"],
            beginning: &["begin", "start"],
            end: &["einde", "eind"],
            start: &["begin", "start"],
            first: &["eerste"],
        },
        time: TimeTerms {
            noon: &["middag", "twaalf uur 's middags"],
            midnight: &["middernacht", "twaalf uur 's nachts"],
            quarter: &["kwart", "kwartier"],
            half: &["half", "halve"],
            // "kwart over 3" = quarter past 3
            past: &["over"],
            // "kwart voor 3" = quarter to 3
            to: &["voor"],
            oclock: &["uur"],
            am: &["am", "a.m.", "'s ochtends", "'s morgens", "ochtend", "morgen"],
            pm: &["pm", "p.m.", "'s middags", "'s avonds", "'s nachts", "middag", "avond", "nacht"],
        },
    }
}
