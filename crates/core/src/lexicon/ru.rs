//! Russian lexicon. Month and weekday tables carry the case forms that
//! appear in dates (genitive "15 января", prepositional "в понедельнике")
//! alongside the nominative.

use chrono::Weekday;

use super::{month_map, weekday_map, Lexicon, RelativeTerms, TimeTerms};

pub(super) fn lexicon() -> Lexicon {
    Lexicon {
        code: "ru",
        name: "Russian",
        months: month_map(&[
            ("январь", 1),
            ("февраль", 2),
            ("март", 3),
            ("апрель", 4),
            ("май", 5),
            ("июнь", 6),
            ("июль", 7),
            ("август", 8),
            ("сентябрь", 9),
            ("октябрь", 10),
            ("ноябрь", 11),
            ("декабрь", 12),
            ("января", 1),
            ("февраля", 2),
            ("марта", 3),
            ("апреля", 4),
            ("мая", 5),
            ("июня", 6),
            ("июля", 7),
            ("августа", 8),
            ("сентября", 9),
            ("октября", 10),
            ("ноября", 11),
            ("декабря", 12),
            ("янв", 1),
            ("фев", 2),
            ("мар", 3),
            ("апр", 4),
            ("июн", 6),
            ("июл", 7),
            ("авг", 8),
            ("сен", 9),
            ("сент", 9),
            ("окт", 10),
            ("ноя", 11),
            ("дек", 12),
        ]),
        weekdays: weekday_map(&[
            ("понедельник", Weekday::Mon),
            ("вторник", Weekday::Tue),
            ("среда", Weekday::Wed),
            ("четверг", Weekday::Thu),
            ("пятница", Weekday::Fri),
            ("суббота", Weekday::Sat),
            ("воскресенье", Weekday::Sun),
            ("понедельнике", Weekday::Mon),
            ("вторнике", Weekday::Tue),
            ("среде", Weekday::Wed),
            ("четверге", Weekday::Thu),
            ("пятнице", Weekday::Fri),
            ("субботе", Weekday::Sat),
            ("в понедельнике", Weekday::Mon),
            ("в вторнике", Weekday::Tue),
            ("в среде", Weekday::Wed),
            ("в четверге", Weekday::Thu),
            ("в пятнице", Weekday::Fri),
            ("в субботе", Weekday::Sat),
            ("пн", Weekday::Mon),
            ("вт", Weekday::Tue),
            ("ср", Weekday::Wed),
            ("чт", Weekday::Thu),
            ("пт", Weekday::Fri),
            ("сб", Weekday::Sat),
            ("вс", Weekday::Sun),
        ]),
        relative: RelativeTerms {
            yesterday: "вчера",
            today: "сегодня",
            tomorrow: "завтра",
            now: "сейчас",
            // "2 дня назад" = 2 days ago (suffix position)
            ago: &["назад", "тому назад"],
            // "через 3 недели" = in 3 weeks
            in_: &["через", "спустя"],
            next: &[
                "следующий",
                "следующая",
                "следующее",
                "следующие",
                "следующего",
                "следующей",
                "следующих",
                "будущий",
                "будущая",
                "будущее",
                "будущие",
                "будущего",
                "будущей",
                "будущих",
            ],
            last: &[
                "прошлый",
                "прошлая",
                "прошлое",
                "прошлые",
                "прошлого",
                "прошлой",
                "прошлых",
                "последний",
                "последняя",
                "последнее",
                "последние",
                "последнего",
                "последней",
                "последних",
                "предыдущий",
                "предыдущая",
                "предыдущее",
                "предыдущие",
                "предыдущего",
                "предыдущей",
                "предыдущих",
            ],
            this: &["этот", "эта", "это", "эти", "текущий", "текущая", "текущее", "текущие"],
            second: &["секунда", "секунды", "секунд", "секунду"],
            minute: &["минута", "минуты", "минут", "минуту"],
            hour: &["час", "часа", "часов"],
            day: &["день", "дня", "дней"],
            week: &["неделя", "недели", "недель", "неделю"],
            fortnight: &["две недели", "двух недель"],
            month: &["месяц", "месяца", "месяцев"],
            quarter: &["квартал", "квартала", "кварталов"],
            year: &["год", "года", "лет"],
            decade: &["десятилетие", "десятилетия", "десятилетий", "декада", "декады", "декад"],
            beginning: &["начало", "начала"],
            end: &["конец", "конца"],
            start: &["начало", "начала"],
            first: &["первый", "первая", "первое", "первые"],
        },
        time: TimeTerms {
            noon: &["полдень", "полудень", "12 часов дня"],
            midnight: &["полночь", "полуночь", "12 часов ночи", "0 часов"],
            quarter: &["четверть"],
            half: &["половина", "пол", "полчаса"],
            past: &[],
            to: &["без"],
            oclock: &["часов", "час", "часа"],
            // "3 часа утра" is morning, "3 часа ночи" night (AM semantics)
            am: &["утра", "ночи"],
            // "3 часа дня" is afternoon, "7 часов вечера" evening (PM)
            pm: &["дня", "вечера"],
        },
    }
}
