//! Portuguese (Brazil) lexicon.

use chrono::Weekday;

use super::{month_map, weekday_map, Lexicon, RelativeTerms, TimeTerms};

pub(super) fn lexicon() -> Lexicon {
    Lexicon {
        code: "pt",
        name: "Portuguese",
        months: month_map(&[
            ("janeiro", 1),
            ("fevereiro", 2),
            ("março", 3),
            ("marco", 3),
            ("abril", 4),
            ("maio", 5),
            ("junho", 6),
            ("julho", 7),
            ("agosto", 8),
            ("setembro", 9),
            ("outubro", 10),
            ("novembro", 11),
            ("dezembro", 12),
            ("jan", 1),
            ("fev", 2),
            ("mar", 3),
            ("abr", 4),
            ("mai", 5),
            ("jun", 6),
            ("jul", 7),
            ("ago", 8),
            ("set", 9),
            ("out", 10),
            ("nov", 11),
            ("dez", 12),
        ]),
        weekdays: weekday_map(&[
            ("segunda-feira", Weekday::Mon),
            ("segunda", Weekday::Mon),
            ("terça-feira", Weekday::Tue),
            ("terca-feira", Weekday::Tue),
            ("terça", Weekday::Tue),
            ("terca", Weekday::Tue),
            ("quarta-feira", Weekday::Wed),
            ("quarta", Weekday::Wed),
            ("quinta-feira", Weekday::Thu),
            ("quinta", Weekday::Thu),
            ("sexta-feira", Weekday::Fri),
            ("sexta", Weekday::Fri),
            ("sábado", Weekday::Sat),
            ("sabado", Weekday::Sat),
            ("domingo", Weekday::Sun),
            ("seg", Weekday::Mon),
            ("ter", Weekday::Tue),
            ("qua", Weekday::Wed),
            ("qui", Weekday::Thu),
            ("sex", Weekday::Fri),
            ("sáb", Weekday::Sat),
            ("sab", Weekday::Sat),
            ("dom", Weekday::Sun),
        ]),
        relative: RelativeTerms {
            yesterday: "ontem",
            today: "hoje",
            tomorrow: "amanhã",
            now: "agora",
            // "há 2 dias" / "2 dias atrás" = 2 days ago
            ago: &["atrás", "atras", "há", "ha"],
            // "em 3 semanas" / "daqui a 3 dias"
            in_: &["em", "daqui a", "daqui"],
            next: &["próximo", "próxima", "proximo", "proxima"],
            last: &["último", "última", "ultimo", "ultima", "passado", "passada"],
            this: &["este", "esta", "esse", "essa", "isto", "isso"],
            second: &["segundo", "segundos"],
            minute: &["minuto", "minutos"],
            hour: &["hora", "horas"],
            day: &["dia", "dias"],
            week: &["semana", "semanas"],
            fortnight: &["quinzena", "quinzenas"],
            month: &["mês", "meses", "mes"],
            quarter: &["trimestre", "trimestres"],
            year: &["ano", "anos"],
            decade: &["década", "décadas", "decada", "decadas"],
            beginning: &["começo", "comeco", "início", "inicio", "princípio", "principio"],
            end: &["fim", "final"],
            start: &["início", "inicio", "começo", "comeco"],
            first: &["primeiro", "primeira"],
        },
        time: TimeTerms {
            noon: &["meio-dia", "meio dia", "meiodia"],
            midnight: &["meia-noite", "meia noite", "meianoite"],
            quarter: &["quarto", "um quarto", "quinze"],
            half: &["meia", "meio", "trinta"],
            // "3 e meia" = half past 3
            past: &["e"],
            // "quinze para as 3" = quarter to 3
            to: &["para", "menos"],
            oclock: &["em ponto", "horas"],
            am: &["am", "a.m.", "da manhã", "da manha", "de manhã", "de manha"],
            pm: &["pm", "p.m.", "da tarde", "de tarde", "da noite", "de noite"],
        },
    }
}
