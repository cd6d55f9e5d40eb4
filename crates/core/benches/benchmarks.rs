use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dateglot_core::{extract_dates, parse, Settings};

fn reference() -> Settings {
    Settings {
        relative_base: Some(Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap().fixed_offset()),
        ..Settings::default()
    }
}

fn bench_parse(c: &mut Criterion) {
    let settings = reference();

    c.bench_function("parse_iso8601", |b| {
        b.iter(|| parse(black_box("2024-12-31"), Some(&settings)))
    });
    c.bench_function("parse_timestamp", |b| {
        b.iter(|| parse(black_box("1609459200"), Some(&settings)))
    });
    c.bench_function("parse_relative", |b| {
        b.iter(|| parse(black_box("yesterday"), Some(&settings)))
    });
    c.bench_function("parse_relative_multilang", |b| {
        let settings = Settings {
            languages: vec!["es".to_string(), "fr".to_string(), "en".to_string()],
            ..reference()
        };
        b.iter(|| parse(black_box("hace 2 días"), Some(&settings)))
    });
}

fn bench_extract(c: &mut Criterion) {
    let settings = reference();
    let text = "Meeting on 2024-12-31 and follow-up on 2025-01-15.";

    c.bench_function("extract_dates", |b| {
        b.iter(|| extract_dates(black_box(text), Some(&settings)))
    });
}

criterion_group!(benches, bench_parse, bench_extract);
criterion_main!(benches);
