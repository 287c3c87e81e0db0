use crate::deadline_format;

use chrono::NaiveDate;

#[test]
fn test_parse_canonical_format() {
    let parsed = deadline_format::parse("2026-03-01 09:30").unwrap();
    let expected = NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    assert_eq!(parsed, expected);
}

#[test]
fn test_parse_iso_variant() {
    let parsed = deadline_format::parse("2026-03-01T09:30:15").unwrap();
    assert_eq!(deadline_format::format(&parsed), "2026-03-01 09:30");
}

#[test]
fn test_parse_rejects_date_only() {
    assert!(deadline_format::parse("2026-03-01").is_none());
    assert!(deadline_format::parse("tomorrow").is_none());
}
