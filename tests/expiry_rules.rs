use borrow_alerts::domain::report::PaymentExpiryStatus;
use borrow_alerts::expiry::{classify_expiry, days_between, months_ago, parse_payment_expiry};
use chrono::{DateTime, Duration, TimeZone, Utc};

#[test]
fn parses_mm_yy_to_last_instant_of_month() {
    let expiry = parse_payment_expiry("01/25").unwrap();
    assert_eq!(expiry, at(2025, 1, 31, 23, 59, 59) + Duration::milliseconds(999));
}

#[test]
fn parses_leap_february() {
    let expiry = parse_payment_expiry("02/24").unwrap();
    assert_eq!(expiry, at(2024, 2, 29, 23, 59, 59) + Duration::milliseconds(999));
}

#[test]
fn parses_december_year_rollover() {
    let expiry = parse_payment_expiry("12/25").unwrap();
    assert_eq!(expiry, at(2025, 12, 31, 23, 59, 59) + Duration::milliseconds(999));
}

#[test]
fn rejects_malformed_expiry_strings() {
    for raw in ["", "1/25", "13/25", "00/25", "01-25", "aa/25", "01/2025", "01/2a", "01/25 "] {
        assert!(parse_payment_expiry(raw).is_none(), "accepted {:?}", raw);
    }
}

#[test]
fn classifies_against_now() {
    let now = at(2025, 1, 10, 0, 0, 0);

    assert_eq!(classify_expiry(Some(now - Duration::days(1)), now), PaymentExpiryStatus::Expired);
    assert_eq!(classify_expiry(Some(now + Duration::days(3)), now), PaymentExpiryStatus::Critical);
    assert_eq!(classify_expiry(Some(now + Duration::days(20)), now), PaymentExpiryStatus::Warning);
    assert_eq!(classify_expiry(Some(now + Duration::days(60)), now), PaymentExpiryStatus::Ok);
    assert_eq!(classify_expiry(None, now), PaymentExpiryStatus::Unknown);
}

#[test]
fn classification_boundaries_are_inclusive() {
    let now = at(2025, 1, 10, 0, 0, 0);

    assert_eq!(classify_expiry(Some(now + Duration::days(7)), now), PaymentExpiryStatus::Critical);
    assert_eq!(classify_expiry(Some(now + Duration::days(30)), now), PaymentExpiryStatus::Warning);
    assert_eq!(classify_expiry(Some(now + Duration::days(31)), now), PaymentExpiryStatus::Ok);
}

#[test]
fn day_counts_round_up_partial_days() {
    let start = at(2025, 1, 1, 0, 0, 0);

    assert_eq!(days_between(start, start + Duration::days(95)), 95);
    assert_eq!(days_between(start, start + Duration::days(94) + Duration::milliseconds(1)), 95);
    assert_eq!(days_between(start + Duration::days(95), start), 95);
}

#[test]
fn month_subtraction_clamps_to_month_end() {
    assert_eq!(months_ago(at(2025, 5, 31, 12, 0, 0), 3), at(2025, 2, 28, 12, 0, 0));
    assert_eq!(months_ago(at(2024, 5, 31, 12, 0, 0), 3), at(2024, 2, 29, 12, 0, 0));
    assert_eq!(months_ago(at(2025, 4, 15, 8, 30, 0), 3), at(2025, 1, 15, 8, 30, 0));
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}
