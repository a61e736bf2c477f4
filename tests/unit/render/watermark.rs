use super::*;

#[test]
fn watermark_text_format() {
    let ts = Timestamp {
        year: 2025,
        month: 3,
        day: 7,
        hour: 9,
        minute: 5,
    };
    assert_eq!(
        watermark_text(&ts),
        "KiraKira 2025-03-07 09:05 \u{00a9} 2025 AW"
    );
}

#[test]
fn watermark_text_pads_wide_fields() {
    let ts = Timestamp {
        year: 999,
        month: 12,
        day: 31,
        hour: 23,
        minute: 59,
    };
    assert_eq!(
        watermark_text(&ts),
        "KiraKira 0999-12-31 23:59 \u{00a9} 2025 AW"
    );
}

#[test]
fn now_yields_plausible_fields() {
    let ts = Timestamp::now();
    assert!((1..=12).contains(&ts.month));
    assert!((1..=31).contains(&ts.day));
    assert!(ts.hour <= 23);
    assert!(ts.minute <= 59);
}

#[test]
fn timestamp_serde_roundtrip() {
    let ts = Timestamp {
        year: 2025,
        month: 8,
        day: 30,
        hour: 12,
        minute: 0,
    };
    let json = serde_json::to_string(&ts).unwrap();
    let back: Timestamp = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ts);
}
