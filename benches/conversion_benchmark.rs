// ============================================================================
// Conversion Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - integer, float (fast path and slow path) and decimal targets
// 2. Formatting - General shortest round-trip vs. fixed-precision layouts
// 3. Calendar and Hebrew - decomposition and numeral codec
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use numconv::prelude::*;
use std::hint::black_box;

// ============================================================================
// Parsing
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let locale = LocaleSymbols::en_us();

    let inputs = [
        ("i64", "-9,223,372,036,854,775,808", NumericKind::I64),
        ("f64_fast", "1234.5678", NumericKind::F64),
        ("f64_slow", "2.2250738585072011e-308", NumericKind::F64),
        ("f64_long", "0.1000000000000000055511151231257827021181583404541015625", NumericKind::F64),
        ("f32", "3.1415927", NumericKind::F32),
        ("decimal", "-79,228,162,514,264.337593543950335", NumericKind::Decimal),
    ];

    for (name, text, kind) in inputs.iter() {
        let style = default_style(*kind) | StyleFlags::ALLOW_THOUSANDS;
        group.bench_with_input(BenchmarkId::new("kind", name), text, |b, text| {
            b.iter(|| black_box(parse(black_box(text), style, &locale, *kind)));
        });
    }

    group.finish();
}

// ============================================================================
// Formatting
// ============================================================================

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let locale = LocaleSymbols::en_us();
    let mut buf = [0u8; 512];

    let cases = [
        ("general_f64", Value::F64(0.1 + 0.2), FormatSpec::general()),
        ("general_f32", Value::F32(std::f32::consts::E), FormatSpec::general()),
        ("fixed_f64", Value::F64(-1234567.891), FormatSpec::fixed(4)),
        ("currency_f64", Value::F64(-1234567.891), FormatSpec::currency()),
        ("scientific_f64", Value::F64(6.02214076e23), FormatSpec::scientific(6)),
        ("number_i64", Value::I64(i64::MIN), FormatSpec::number(0)),
        ("hex_u64", Value::U64(u64::MAX), FormatSpec::hex()),
        ("percent_decimal", Value::Decimal(rust_decimal::Decimal::new(1234, 4)), FormatSpec::percent()),
        ("fixed_f64_max", Value::F64(f64::MAX), FormatSpec::fixed(2)),
    ];

    for (name, value, spec) in cases.iter() {
        group.bench_with_input(BenchmarkId::new("specifier", name), value, |b, value| {
            b.iter(|| black_box(format(*value, *spec, &locale, &mut buf)));
        });
    }

    group.finish();
}

// ============================================================================
// Calendar and Hebrew
// ============================================================================

fn benchmark_calendar_and_hebrew(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar_hebrew");

    group.bench_function("decompose_date", |b| {
        let mut ticks = 0i64;
        b.iter(|| {
            ticks = (ticks + 864_000_000_123) % numconv::calendar::MAX_TICKS;
            black_box(decompose_date(ticks))
        });
    });

    group.bench_function("round_trip_date_time", |b| {
        let mut buf = [0u8; 32];
        let ticks = Ticks::from_raw(638_000_000_000_000_000);
        b.iter(|| black_box(format_date_time(ticks, DateTimeFormat::RoundTrip, &mut buf)));
    });

    group.bench_function("hebrew_encode_decode", |b| {
        let mut n = 0;
        b.iter(|| {
            n = n % 999 + 1;
            let text = hebrew_encode(n);
            black_box(text.map(|t| hebrew_decode(&t)))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_format,
    benchmark_calendar_and_hebrew
);
criterion_main!(benches);
