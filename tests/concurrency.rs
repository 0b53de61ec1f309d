// ============================================================================
// Concurrent Use
// Many threads sharing one immutable locale
// ============================================================================

use crossbeam::thread;
use numconv::prelude::*;

#[test]
fn test_shared_locale_across_threads() {
    let locale = LocaleSymbols::de_de();

    thread::scope(|s| {
        for worker in 0..8i64 {
            let locale = &locale;
            s.spawn(move |_| {
                let mut buf = [0u8; 64];
                for i in 0..2_000i64 {
                    let n = worker * 1_000_000 + i * 7919;
                    let value = Value::I64(-n);

                    let len = format(value, FormatSpec::number(0), locale, &mut buf).unwrap();
                    let text = std::str::from_utf8(&buf[..len]).unwrap();
                    let back = parse(text, StyleFlags::NUMBER, locale, NumericKind::I64).unwrap();
                    assert_eq!(back, value);

                    let f = n as f64 / 64.0;
                    let len = format(Value::F64(f), FormatSpec::general(), locale, &mut buf).unwrap();
                    let text = std::str::from_utf8(&buf[..len]).unwrap();
                    assert_eq!(
                        parse(text, default_style(NumericKind::F64), locale, NumericKind::F64),
                        Ok(Value::F64(f))
                    );
                }
            });
        }
    })
    .unwrap();
}

#[test]
fn test_hebrew_contexts_are_independent() {
    thread::scope(|s| {
        let handles: Vec<_> = (1..=4)
            .map(|t| {
                s.spawn(move |_| {
                    (t..=999)
                        .step_by(4)
                        .map(|n| hebrew_decode(&hebrew_encode(n).unwrap()).unwrap())
                        .sum::<i32>()
                })
            })
            .collect();
        let total: i32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, (1..=999).sum::<i32>());
    })
    .unwrap();
}
