//! Japanese lexicon. Months and weekdays include kana readings alongside
//! the kanji forms.

use chrono::Weekday;

use super::{month_map, weekday_map, Lexicon, RelativeTerms, TimeTerms};

pub(super) fn lexicon() -> Lexicon {
    Lexicon {
        code: "ja",
        name: "Japanese",
        months: month_map(&[
            ("一月", 1),
            ("1月", 1),
            ("1がつ", 1),
            ("二月", 2),
            ("2月", 2),
            ("2がつ", 2),
            ("三月", 3),
            ("3月", 3),
            ("3がつ", 3),
            ("四月", 4),
            ("4月", 4),
            ("4がつ", 4),
            ("五月", 5),
            ("5月", 5),
            ("5がつ", 5),
            ("六月", 6),
            ("6月", 6),
            ("6がつ", 6),
            ("七月", 7),
            ("7月", 7),
            ("7がつ", 7),
            ("八月", 8),
            ("8月", 8),
            ("8がつ", 8),
            ("九月", 9),
            ("9月", 9),
            ("9がつ", 9),
            ("十月", 10),
            ("10月", 10),
            ("10がつ", 10),
            ("十一月", 11),
            ("11月", 11),
            ("11がつ", 11),
            ("十二月", 12),
            ("12月", 12),
            ("12がつ", 12),
        ]),
        weekdays: weekday_map(&[
            ("月曜日", Weekday::Mon),
            ("月曜", Weekday::Mon),
            ("げつようび", Weekday::Mon),
            ("火曜日", Weekday::Tue),
            ("火曜", Weekday::Tue),
            ("かようび", Weekday::Tue),
            ("水曜日", Weekday::Wed),
            ("水曜", Weekday::Wed),
            ("すいようび", Weekday::Wed),
            ("木曜日", Weekday::Thu),
            ("木曜", Weekday::Thu),
            ("もくようび", Weekday::Thu),
            ("金曜日", Weekday::Fri),
            ("金曜", Weekday::Fri),
            ("きんようび", Weekday::Fri),
            ("土曜日", Weekday::Sat),
            ("土曜", Weekday::Sat),
            ("どようび", Weekday::Sat),
            ("日曜日", Weekday::Sun),
            ("日曜", Weekday::Sun),
            ("にちようび", Weekday::Sun),
        ]),
        relative: RelativeTerms {
            yesterday: "昨日",
            today: "今日",
            tomorrow: "明日",
            now: "今",
            // 3日前 = 3 days ago
            ago: &["前"],
            // 3日後 = in 3 days
            in_: &["後", "あと"],
            next: &["来", "次", "翌"],
            last: &["先", "前", "昨"],
            this: &["今", "本"],
            second: &["秒", "秒間", "びょう"],
            minute: &["分", "分間", "ふん"],
            hour: &["時間", "じかん"],
            day: &["日", "日間", "にち"],
            week: &["週", "週間", "しゅう"],
            fortnight: &["二週間", "2週間"],
            month: &["月", "ヶ月", "か月", "ケ月"],
            quarter: &["四半期", "クォーター"],
            year: &["年", "年間", "ねん"],
            decade: &["十年", "10年"],
            beginning: &["初", "始", "頭"],
            end: &["末", "終", "終わり"],
            start: &["初", "始め"],
            first: &["初", "最初"],
        },
        time: TimeTerms {
            noon: &["正午", "昼", "12時"],
            midnight: &["真夜中", "夜中", "0時"],
            quarter: &["15分"],
            half: &["半", "30分"],
            past: &["過ぎ"],
            to: &["前"],
            oclock: &["時"],
            am: &["午前", "朝"],
            pm: &["午後", "夜"],
        },
    }
}
