// ============================================================================
// Basic Usage Example
// ============================================================================

use numconv::prelude::*;

fn show(value: Value, spec: &str, locale: &LocaleSymbols) {
    let mut buf = [0u8; 128];
    match format_with(value, spec, locale, &mut buf) {
        Ok(len) => println!(
            "  {:<6} {:<4} {}",
            locale.name(),
            spec,
            String::from_utf8_lossy(&buf[..len])
        ),
        Err(e) => println!("  {:<6} {:<4} error: {}", locale.name(), spec, e),
    }
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Numeric Conversion Example ===\n");

    let en = LocaleSymbols::en_us();
    let de = LocaleSymbols::de_de();
    let hi = LocaleSymbols::hi_in();

    // Parsing under different styles
    println!("Parsing:");
    let inputs = [
        ("  (1,234.50) ", StyleFlags::CURRENCY, NumericKind::Decimal),
        ("$-42", StyleFlags::CURRENCY, NumericKind::I32),
        ("1.7976931348623157e308", StyleFlags::FLOAT, NumericKind::F64),
        ("-infinity", StyleFlags::FLOAT, NumericKind::F32),
        ("7FFFFFFF", StyleFlags::HEX_NUMBER, NumericKind::I32),
        ("256", StyleFlags::INTEGER, NumericKind::U8),
        ("1,5", StyleFlags::INTEGER, NumericKind::I32),
    ];
    for (text, style, kind) in inputs {
        match parse(text, style, &en, kind) {
            Ok(value) => println!("  {:<26} -> {:?}", format!("{:?}", text), value),
            Err(e) => println!("  {:<26} -> error: {}", format!("{:?}", text), e),
        }
    }

    // Formatting with every specifier
    println!("\nFormatting -1234567.891:");
    let amount = Value::F64(-1234567.891);
    for spec in ["G", "F2", "E3", "N1", "C", "P0"] {
        show(amount, spec, &en);
        show(amount, spec, &de);
    }
    show(Value::I64(123456789), "N0", &hi);
    show(Value::I32(-1), "X8", &en);
    show(Value::I32(42), "D6", &en);
    show(Value::F64(1.5), "X", &en);

    // Calendar decomposition
    println!("\nCalendar:");
    let now = Ticks::from(chrono::Utc::now());
    let (year, month, day) = decompose_date(now.get());
    let (hour, minute, second) = decompose_time(now.get());
    println!("  ticks {} = {:04}-{:02}-{:02} {:02}:{:02}:{:02}", now.get(), year, month, day, hour, minute, second);
    let mut buf = [0u8; 32];
    if let Ok(len) = format_date_time(now, DateTimeFormat::RoundTrip, &mut buf) {
        println!("  round-trip: {}", String::from_utf8_lossy(&buf[..len]));
    }

    // Hebrew numerals
    println!("\nHebrew numerals:");
    for n in [1, 15, 16, 613, 5784] {
        match hebrew_encode(n) {
            Ok(text) => println!("  {:>4} -> {} -> {:?}", n, text, hebrew_decode(&text)),
            Err(e) => println!("  {:>4} -> error: {}", n, e),
        }
    }

    println!("\n=== Example Complete ===");
}
