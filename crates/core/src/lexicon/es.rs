//! Spanish lexicon.

use chrono::Weekday;

use super::{month_map, weekday_map, Lexicon, RelativeTerms, TimeTerms};

pub(super) fn lexicon() -> Lexicon {
    Lexicon {
        code: "es",
        name: "Spanish",
        months: month_map(&[
            ("enero", 1),
            ("febrero", 2),
            ("marzo", 3),
            ("abril", 4),
            ("mayo", 5),
            ("junio", 6),
            ("julio", 7),
            ("agosto", 8),
            ("septiembre", 9),
            ("setiembre", 9),
            ("octubre", 10),
            ("noviembre", 11),
            ("diciembre", 12),
            ("ene", 1),
            ("feb", 2),
            ("mar", 3),
            ("abr", 4),
            ("may", 5),
            ("jun", 6),
            ("jul", 7),
            ("ago", 8),
            ("sep", 9),
            ("set", 9),
            ("oct", 10),
            ("nov", 11),
            ("dic", 12),
        ]),
        weekdays: weekday_map(&[
            ("lunes", Weekday::Mon),
            ("martes", Weekday::Tue),
            ("miércoles", Weekday::Wed),
            ("miercoles", Weekday::Wed),
            ("jueves", Weekday::Thu),
            ("viernes", Weekday::Fri),
            ("sábado", Weekday::Sat),
            ("sabado", Weekday::Sat),
            ("domingo", Weekday::Sun),
            ("lun", Weekday::Mon),
            ("mar", Weekday::Tue),
            ("mié", Weekday::Wed),
            ("mie", Weekday::Wed),
            ("jue", Weekday::Thu),
            ("vie", Weekday::Fri),
            ("sáb", Weekday::Sat),
            ("sab", Weekday::Sat),
            ("dom", Weekday::Sun),
        ]),
        relative: RelativeTerms {
            yesterday: "ayer",
            today: "hoy",
            tomorrow: "mañana",
            now: "ahora",
            // "hace 2 días" = 2 days ago
            ago: &["hace"],
            // "en 3 semanas" = in 3 weeks
            in_: &["en", "dentro de"],
            next: &["próximo", "próxima", "proximo", "proxima", "siguiente"],
            last: &["último", "última", "ultimo", "ultima", "pasado", "pasada"],
            this: &["este", "esta", "esto"],
            second: &["segundo", "segundos"],
            minute: &["minuto", "minutos"],
            hour: &["hora", "horas"],
            day: &["día", "días", "dia", "dias"],
            week: &["semana", "semanas"],
            fortnight: &["quincena", "quincenas"],
            month: &["mes", "meses"],
            quarter: &["trimestre", "trimestres"],
            year: &["año", "años", "ano", "anos"],
            decade: &["década", "décadas", "decada", "decadas"],
            beginning: &["comienzo", "inicio", "principio"],
            end: &["fin", "final"],
            start: &["inicio", "comienzo"],
            first: &["primer", "primero", "primera"],
        },
        time: TimeTerms {
            noon: &["mediodía", "mediodia", "medio día", "medio dia"],
            midnight: &["medianoche", "media noche"],
            quarter: &["cuarto"],
            half: &["media", "medio"],
            // "3 y cuarto" = quarter past 3
            past: &["y"],
            // "menos cuarto" = quarter to
            to: &["menos", "para"],
            oclock: &["en punto"],
            am: &["am", "a.m.", "de la mañana", "de la manana"],
            pm: &["pm", "p.m.", "de la tarde", "de la noche"],
        },
    }
}
