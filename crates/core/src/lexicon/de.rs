//! German lexicon.

use chrono::Weekday;

use super::{month_map, weekday_map, Lexicon, RelativeTerms, TimeTerms};

pub(super) fn lexicon() -> Lexicon {
    Lexicon {
        code: "de",
        name: "German",
        months: month_map(&[
            ("januar", 1),
            ("februar", 2),
            ("märz", 3),
            ("marz", 3),
            ("april", 4),
            ("mai", 5),
            ("juni", 6),
            ("juli", 7),
            ("august", 8),
            ("september", 9),
            ("oktober", 10),
            ("november", 11),
            ("dezember", 12),
            ("jan", 1),
            ("feb", 2),
            ("mär", 3),
            ("mar", 3),
            ("apr", 4),
            ("jun", 6),
            ("jul", 7),
            ("aug", 8),
            ("sep", 9),
            ("sept", 9),
            ("okt", 10),
            ("nov", 11),
            ("dez", 12),
        ]),
        weekdays: weekday_map(&[
            ("montag", Weekday::Mon),
            ("dienstag", Weekday::Tue),
            ("mittwoch", Weekday::Wed),
            ("donnerstag", Weekday::Thu),
            ("freitag", Weekday::Fri),
            ("samstag", Weekday::Sat),
            ("sonnabend", Weekday::Sat),
            ("sonntag", Weekday::Sun),
            ("mo", Weekday::Mon),
            ("di", Weekday::Tue),
            ("mi", Weekday::Wed),
            ("do", Weekday::Thu),
            ("fr", Weekday::Fri),
            ("sa", Weekday::Sat),
            ("so", Weekday::Sun),
        ]),
        relative: RelativeTerms {
            yesterday: "gestern",
            today: "heute",
            tomorrow: "morgen",
            now: "jetzt",
            // "vor 2 Tagen" = 2 days ago
            ago: &["vor"],
            in_: &["in"],
            next: &[
                "nächster",
                "nächste",
                "nächstes",
                "naechster",
                "naechste",
                "naechstes",
                "kommender",
                "kommende",
                "kommendes",
            ],
            last: &[
                "letzter",
                "letzte",
                "letztes",
                "vergangener",
                "vergangene",
                "vergangenes",
                "vorletzter",
                "vorletzte",
                "vorletztes",
            ],
            this: &["dieser", "diese", "dieses"],
            second: &["sekunde", "sekunden"],
            minute: &["minute", "minuten"],
            hour: &["stunde", "stunden"],
            day: &["tag", "tage", "tagen"],
            week: &["woche", "wochen"],
            fortnight: &["vierzehn tage", "zwei wochen"],
            month: &["monat", "monate", "monaten"],
            quarter: &["quartal", "quartale"],
            year: &["jahr", "jahre", "jahren"],
            decade: &["jahrzehnt", "jahrzehnte", "dekade", "dekaden"],
            beginning: &["anfang", "beginn", "start"],
            end: &["ende", "schluss"],
            start: &["anfang", "beginn", "start"],
            first: &["erster", "erste", "erstes"],
        },
        time: TimeTerms {
            noon: &["mittag", "12 uhr mittags"],
            midnight: &["mitternacht", "24 uhr", "0 uhr"],
            quarter: &["viertel"],
            half: &["halb", "halbe"],
            // "viertel nach 3" = quarter past 3
            past: &["nach"],
            // "viertel vor 3" = quarter to 3
            to: &["vor"],
            oclock: &["uhr"],
            am: &["uhr", "morgens", "vormittags"],
            pm: &["uhr", "nachmittags", "abends", "nachts"],
        },
    }
}
