//! French lexicon.

use chrono::Weekday;

use super::{month_map, weekday_map, Lexicon, RelativeTerms, TimeTerms};

pub(super) fn lexicon() -> Lexicon {
    Lexicon {
        code: "fr",
        name: "French",
        months: month_map(&[
            ("janvier", 1),
            ("février", 2),
            ("fevrier", 2),
            ("mars", 3),
            ("avril", 4),
            ("mai", 5),
            ("juin", 6),
            ("juillet", 7),
            ("août", 8),
            ("aout", 8),
            ("septembre", 9),
            ("octobre", 10),
            ("novembre", 11),
            ("décembre", 12),
            ("decembre", 12),
            ("janv", 1),
            ("févr", 2),
            ("fevr", 2),
            ("avr", 4),
            ("juil", 7),
            ("sept", 9),
            ("oct", 10),
            ("nov", 11),
            ("déc", 12),
            ("dec", 12),
        ]),
        weekdays: weekday_map(&[
            ("lundi", Weekday::Mon),
            ("mardi", Weekday::Tue),
            ("mercredi", Weekday::Wed),
            ("jeudi", Weekday::Thu),
            ("vendredi", Weekday::Fri),
            ("samedi", Weekday::Sat),
            ("dimanche", Weekday::Sun),
            ("lun", Weekday::Mon),
            ("mar", Weekday::Tue),
            ("mer", Weekday::Wed),
            ("jeu", Weekday::Thu),
            ("ven", Weekday::Fri),
            ("sam", Weekday::Sat),
            ("dim", Weekday::Sun),
        ]),
        relative: RelativeTerms {
            yesterday: "hier",
            today: "aujourd'hui",
            tomorrow: "demain",
            now: "maintenant",
            // "il y a 2 jours" = 2 days ago
            ago: &["il y a"],
            in_: &["dans", "en"],
            next: &["prochain", "prochaine"],
            last: &["dernier", "dernière", "derniere"],
            this: &["ce", "cet", "cette"],
            second: &["seconde", "secondes"],
            minute: &["minute", "minutes"],
            hour: &["heure", "heures"],
            day: &["jour", "jours"],
            week: &["semaine", "semaines"],
            fortnight: &["quinzaine", "quinzaines"],
            month: &["mois"],
            quarter: &["trimestre", "trimestres"],
            year: &["an", "ans", "année", "années", "annee", "annees"],
            decade: &["décennie", "décennies", "decennie", "decennies"],
            beginning: &["début", "debut", "commencement"],
            end: &["fin"],
            start: &["début", "debut"],
            first: &["premier", "première", "premiere"],
        },
        time: TimeTerms {
            noon: &["midi"],
            midnight: &["minuit"],
            quarter: &["quart"],
            half: &["demi", "demie"],
            // "3 heures et quart" = quarter past 3
            past: &["et"],
            to: &["moins"],
            oclock: &["heure", "heures"],
            am: &["du matin", "matin"],
            pm: &["de l'après-midi", "après-midi", "apres-midi", "du soir", "soir"],
        },
    }
}
