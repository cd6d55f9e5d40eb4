//! Italian lexicon.

use chrono::Weekday;

use super::{month_map, weekday_map, Lexicon, RelativeTerms, TimeTerms};

pub(super) fn lexicon() -> Lexicon {
    Lexicon {
        code: "it",
        name: "Italian",
        months: month_map(&[
            ("gennaio", 1),
            ("febbraio", 2),
            ("marzo", 3),
            ("aprile", 4),
            ("maggio", 5),
            ("giugno", 6),
            ("luglio", 7),
            ("agosto", 8),
            ("settembre", 9),
            ("ottobre", 10),
            ("novembre", 11),
            ("dicembre", 12),
            ("gen", 1),
            ("feb", 2),
            ("mar", 3),
            ("apr", 4),
            ("mag", 5),
            ("giu", 6),
            ("lug", 7),
            ("ago", 8),
            ("set", 9),
            ("sett", 9),
            ("ott", 10),
            ("nov", 11),
            ("dic", 12),
        ]),
        weekdays: weekday_map(&[
            ("lunedì", Weekday::Mon),
            ("lunedi", Weekday::Mon),
            ("martedì", Weekday::Tue),
            ("martedi", Weekday::Tue),
            ("mercoledì", Weekday::Wed),
            ("mercoledi", Weekday::Wed),
            ("giovedì", Weekday::Thu),
            ("giovedi", Weekday::Thu),
            ("venerdì", Weekday::Fri),
            ("venerdi", Weekday::Fri),
            ("sabato", Weekday::Sat),
            ("domenica", Weekday::Sun),
            ("lun", Weekday::Mon),
            ("mar", Weekday::Tue),
            ("mer", Weekday::Wed),
            ("gio", Weekday::Thu),
            ("ven", Weekday::Fri),
            ("sab", Weekday::Sat),
            ("dom", Weekday::Sun),
        ]),
        relative: RelativeTerms {
            yesterday: "ieri",
            today: "oggi",
            tomorrow: "domani",
            now: "adesso",
            // "2 giorni fa" = 2 days ago (suffix position)
            ago: &["fa"],
            // "tra 3 settimane" = in 3 weeks
            in_: &["tra", "fra", "in"],
            next: &["prossimo", "prossima", "venturo", "ventura"],
            last: &["scorso", "scorsa", "ultimo", "ultima", "passato", "passata"],
            this: &["questo", "questa"],
            second: &["secondo", "secondi"],
            minute: &["minuto", "minuti"],
            hour: &["ora", "ore"],
            day: &["giorno", "giorni"],
            week: &["settimana", "settimane"],
            fortnight: &["quindicina", "quindici giorni"],
            month: &["mese", "mesi"],
            quarter: &["trimestre", "trimestri"],
            year: &["anno", "anni"],
            decade: &["decennio", "decenni", "decade", "decadi"],
            beginning: &["inizio", "principio"],
            end: &["fine", "termine"],
            start: &["inizio", "avvio"],
            first: &["primo", "prima"],
        },
        time: TimeTerms {
            noon: &["mezzogiorno", "mezzo giorno"],
            midnight: &["mezzanotte", "mezza notte"],
            quarter: &["quarto"],
            half: &["mezzo", "mezza"],
            // "3 e un quarto" = quarter past 3
            past: &["e"],
            // "meno un quarto le 3" = quarter to 3
            to: &["meno"],
            oclock: &["in punto"],
            am: &["am", "a.m.", "di mattina", "del mattino"],
            pm: &["pm", "p.m.", "di pomeriggio", "del pomeriggio", "di sera", "della sera"],
        },
    }
}
