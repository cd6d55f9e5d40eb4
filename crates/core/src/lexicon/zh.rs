//! Chinese (Simplified) lexicon. Months carry both ideographic numerals
//! (十一月) and Arabic-numeral forms (11月); weekdays cover the 星期, 周
//! and 礼拜 series.

use chrono::Weekday;

use super::{month_map, weekday_map, Lexicon, RelativeTerms, TimeTerms};

pub(super) fn lexicon() -> Lexicon {
    Lexicon {
        code: "zh",
        name: "Chinese",
        months: month_map(&[
            ("一月", 1),
            ("1月", 1),
            ("二月", 2),
            ("2月", 2),
            ("三月", 3),
            ("3月", 3),
            ("四月", 4),
            ("4月", 4),
            ("五月", 5),
            ("5月", 5),
            ("六月", 6),
            ("6月", 6),
            ("七月", 7),
            ("7月", 7),
            ("八月", 8),
            ("8月", 8),
            ("九月", 9),
            ("9月", 9),
            ("十月", 10),
            ("10月", 10),
            ("十一月", 11),
            ("11月", 11),
            ("十二月", 12),
            ("12月", 12),
        ]),
        weekdays: weekday_map(&[
            ("星期一", Weekday::Mon),
            ("周一", Weekday::Mon),
            ("礼拜一", Weekday::Mon),
            ("星期二", Weekday::Tue),
            ("周二", Weekday::Tue),
            ("礼拜二", Weekday::Tue),
            ("星期三", Weekday::Wed),
            ("周三", Weekday::Wed),
            ("礼拜三", Weekday::Wed),
            ("星期四", Weekday::Thu),
            ("周四", Weekday::Thu),
            ("礼拜四", Weekday::Thu),
            ("星期五", Weekday::Fri),
            ("周五", Weekday::Fri),
            ("礼拜五", Weekday::Fri),
            ("星期六", Weekday::Sat),
            ("周六", Weekday::Sat),
            ("礼拜六", Weekday::Sat),
            ("星期日", Weekday::Sun),
            ("星期天", Weekday::Sun),
            ("周日", Weekday::Sun),
            ("周天", Weekday::Sun),
            ("礼拜日", Weekday::Sun),
            ("礼拜天", Weekday::Sun),
        ]),
        relative: RelativeTerms {
            yesterday: "昨天",
            today: "今天",
            tomorrow: "明天",
            now: "现在",
            ago: &["前", "之前"],
            in_: &["后", "之后", "内"],
            next: &["下", "下个", "下一个"],
            last: &["上", "上个", "上一个"],
            this: &["这", "这个", "本"],
            second: &["秒", "秒钟"],
            minute: &["分钟", "分"],
            hour: &["小时", "个小时", "钟头"],
            day: &["天", "日"],
            week: &["周", "星期", "礼拜"],
            fortnight: &["两周", "两星期"],
            month: &["月", "个月"],
            quarter: &["季度", "季"],
            year: &["年"],
            decade: &["十年"],
            beginning: &["初", "开始", "始"],
            end: &["末", "底", "尾", "结束"],
            start: &["初", "开始"],
            first: &["第一"],
        },
        time: TimeTerms {
            noon: &["中午", "正午"],
            midnight: &["午夜", "半夜", "凌晨"],
            quarter: &["一刻", "刻"],
            half: &["半"],
            past: &[],
            // 差10分3点 = 10 minutes to 3
            to: &["差"],
            oclock: &["点", "点钟"],
            am: &["上午", "早上", "凌晨"],
            pm: &["下午", "晚上", "傍晚"],
        },
    }
}
