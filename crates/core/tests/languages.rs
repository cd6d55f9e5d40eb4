//! Per-language corpus: month-name dates, relative vocabulary, weekdays
//! and time idioms for every built-in lexicon.

use chrono::{TimeZone, Utc};
use dateglot_core::{detect_language, parse, supported_languages, Settings};

fn settings_for(langs: &[&str]) -> Settings {
    Settings {
        relative_base: Some(Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap().fixed_offset()),
        languages: langs.iter().map(|code| code.to_string()).collect(),
        ..Settings::default()
    }
}

fn assert_date(input: &str, settings: &Settings, expected: &str) {
    let parsed =
        parse(input, Some(settings)).unwrap_or_else(|err| panic!("{input:?} failed: {err}"));
    assert_eq!(parsed.date_naive().to_string(), expected, "input {input:?}");
}

fn assert_datetime(input: &str, settings: &Settings, expected: &str) {
    let parsed =
        parse(input, Some(settings)).unwrap_or_else(|err| panic!("{input:?} failed: {err}"));
    assert_eq!(parsed.naive_local().to_string(), expected, "input {input:?}");
}

#[test]
fn spanish() {
    let s = settings_for(&["es"]);
    assert_date("31 diciembre 2024", &s, "2024-12-31");
    assert_date("15 de marzo de 2024", &s, "2024-03-15");
    assert_date("marzo 15 2024", &s, "2024-03-15");
    assert_date("ayer", &s, "2024-10-14");
    assert_date("hoy", &s, "2024-10-15");
    assert_date("mañana", &s, "2024-10-16");
    assert_date("hace 2 días", &s, "2024-10-13");
    assert_date("dentro de 3 semanas", &s, "2024-11-05");
    assert_date("próximo lunes", &s, "2024-10-21");
    assert_date("viernes", &s, "2024-10-18");
    assert_date("3 de junio", &s, "2025-06-03");
    assert_date("diciembre", &s, "2024-12-01");
    assert_datetime("3 y cuarto", &s, "2024-10-15 03:15:00");
    assert_datetime("3 y media", &s, "2024-10-15 03:30:00");
    assert_datetime("mediodía", &s, "2024-10-15 12:00:00");
}

#[test]
fn portuguese() {
    let s = settings_for(&["pt"]);
    assert_date("31 dezembro 2024", &s, "2024-12-31");
    assert_date("15 de março de 2024", &s, "2024-03-15");
    assert_date("ontem", &s, "2024-10-14");
    assert_date("hoje", &s, "2024-10-15");
    assert_date("amanhã", &s, "2024-10-16");
    assert_date("há 2 dias", &s, "2024-10-13");
    assert_date("2 dias atrás", &s, "2024-10-13");
    assert_date("em 3 semanas", &s, "2024-11-05");
    assert_date("segunda-feira", &s, "2024-10-21");
    assert_date("próxima sexta", &s, "2024-10-18");
    assert_datetime("quinze para as 3", &s, "2024-10-15 02:45:00");
    assert_datetime("meio-dia", &s, "2024-10-15 12:00:00");
}

#[test]
fn french() {
    let s = settings_for(&["fr"]);
    assert_date("31 décembre 2024", &s, "2024-12-31");
    assert_date("15 décembre 2024", &s, "2024-12-15");
    assert_date("hier", &s, "2024-10-14");
    assert_date("aujourd'hui", &s, "2024-10-15");
    assert_date("demain", &s, "2024-10-16");
    assert_date("il y a 2 jours", &s, "2024-10-13");
    assert_date("dans 3 semaines", &s, "2024-11-05");
    assert_date("lundi", &s, "2024-10-21");
    assert_date("décembre", &s, "2024-12-01");
    assert_date("25 décembre", &s, "2024-12-25");
    assert_datetime("15h30", &s, "2024-10-15 15:30:00");
    assert_datetime("15h", &s, "2024-10-15 15:00:00");
    assert_datetime("3 heures 30", &s, "2024-10-15 03:30:00");
    assert_datetime("midi", &s, "2024-10-15 12:00:00");
    assert_datetime("minuit", &s, "2024-10-15 00:00:00");
}

#[test]
fn german() {
    let s = settings_for(&["de"]);
    assert_date("31 dezember 2024", &s, "2024-12-31");
    assert_date("gestern", &s, "2024-10-14");
    assert_date("heute", &s, "2024-10-15");
    assert_date("morgen", &s, "2024-10-16");
    assert_date("vor 2 tagen", &s, "2024-10-13");
    assert_date("in 3 wochen", &s, "2024-11-05");
    assert_date("montag", &s, "2024-10-21");
    assert_date("nächste woche", &s, "2024-10-22");
    assert_date("letzte woche", &s, "2024-10-08");
    assert_date("märz", &s, "2025-03-01");
}

#[test]
fn italian() {
    let s = settings_for(&["it"]);
    assert_date("31 dicembre 2024", &s, "2024-12-31");
    assert_date("ieri", &s, "2024-10-14");
    assert_date("oggi", &s, "2024-10-15");
    assert_date("domani", &s, "2024-10-16");
    assert_date("2 giorni fa", &s, "2024-10-13");
    assert_date("tra 3 settimane", &s, "2024-11-05");
    assert_date("lunedì", &s, "2024-10-21");
    assert_date("prossima settimana", &s, "2024-10-22");
    assert_datetime("3 e un quarto", &s, "2024-10-15 03:15:00");
    assert_datetime("meno un quarto le 3", &s, "2024-10-15 02:45:00");
    assert_datetime("mezzogiorno", &s, "2024-10-15 12:00:00");
}

#[test]
fn dutch() {
    let s = settings_for(&["nl"]);
    assert_date("31 december 2024", &s, "2024-12-31");
    assert_date("gisteren", &s, "2024-10-14");
    assert_date("vandaag", &s, "2024-10-15");
    assert_date("morgen", &s, "2024-10-16");
    assert_date("2 dagen geleden", &s, "2024-10-13");
    assert_date("over 3 weken", &s, "2024-11-05");
    assert_date("maandag", &s, "2024-10-21");
    assert_date("volgende week", &s, "2024-10-22");
    assert_datetime("kwart over 3", &s, "2024-10-15 03:15:00");
    // Dutch "half 4" means half to four: 3:30.
    assert_datetime("half 4", &s, "2024-10-15 03:30:00");
    assert_datetime("kwart voor 3", &s, "2024-10-15 02:45:00");
}

#[test]
fn russian() {
    let s = settings_for(&["ru"]);
    assert_date("15 января 2024", &s, "2024-01-15");
    assert_date("вчера", &s, "2024-10-14");
    assert_date("сегодня", &s, "2024-10-15");
    assert_date("завтра", &s, "2024-10-16");
    assert_date("2 дня назад", &s, "2024-10-13");
    assert_date("через 3 недели", &s, "2024-11-05");
    assert_date("понедельник", &s, "2024-10-21");
    assert_date("пятница", &s, "2024-10-18");
    assert_datetime("3 часа дня", &s, "2024-10-15 15:00:00");
    assert_datetime("9 часов утра", &s, "2024-10-15 09:00:00");
    assert_datetime("7 часов вечера", &s, "2024-10-15 19:00:00");
    assert_datetime("полдень", &s, "2024-10-15 12:00:00");
    assert_datetime("полночь", &s, "2024-10-15 00:00:00");
}

#[test]
fn chinese() {
    let s = settings_for(&["zh"]);
    assert_date("2024年12月31日", &s, "2024-12-31");
    assert_date("2024年1月1日", &s, "2024-01-01");
    assert_date("昨天", &s, "2024-10-14");
    assert_date("今天", &s, "2024-10-15");
    assert_date("明天", &s, "2024-10-16");
    assert_date("星期一", &s, "2024-10-21");
    assert_date("周五", &s, "2024-10-18");
    assert_date("星期天", &s, "2024-10-20");
}

#[test]
fn japanese() {
    let s = settings_for(&["ja"]);
    assert_date("2024年12月31日", &s, "2024-12-31");
    assert_date("昨日", &s, "2024-10-14");
    assert_date("今日", &s, "2024-10-15");
    assert_date("明日", &s, "2024-10-16");
    assert_date("月曜日", &s, "2024-10-21");
    assert_date("げつようび", &s, "2024-10-21");
    assert_date("金曜", &s, "2024-10-18");
}

#[test]
fn language_order_decides_shared_vocabulary() {
    // "mar" is a Spanish month abbreviation and an English weekday-free
    // month abbreviation; first language wins.
    let es_first = settings_for(&["es", "en"]);
    assert_date("15 mar 2024", &es_first, "2024-03-15");

    // English still parses when listed after Spanish.
    assert_date("December 31, 2024", &es_first, "2024-12-31");
}

#[test]
fn detection_is_a_useful_hint() {
    assert_eq!(detect_language("15 diciembre 2024"), "es");
    assert_eq!(detect_language("31 décembre 2024"), "fr");
    assert_eq!(detect_language("vor 2 tagen"), "de");
    assert_eq!(detect_language("через 3 недели"), "ru");
    assert_eq!(detect_language("明日"), "ja");
    assert_eq!(detect_language("plain numbers 123"), "en");
}

#[test]
fn all_ten_languages_are_registered() {
    let supported = supported_languages();
    for code in ["en", "es", "pt", "fr", "de", "it", "nl", "ru", "zh", "ja"] {
        assert!(supported.contains(&code), "{code} missing");
    }
}
