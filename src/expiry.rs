use crate::domain::report::PaymentExpiryStatus;
use chrono::{DateTime, Duration, Months, TimeZone, Utc};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Parses an `MM/YY` card expiry into the last representable instant of that
/// month (UTC). The payment method is valid through the entire stated month.
/// Anything that is not exactly two digits, a slash, and two digits yields
/// `None`, as does a month outside 1..=12. `YY` means `2000 + YY`.
pub fn parse_payment_expiry(raw: &str) -> Option<DateTime<Utc>> {
    let bytes = raw.as_bytes();
    if bytes.len() != 5 || bytes[2] != b'/' {
        return None;
    }
    let (mm, yy) = (&raw[..2], &raw[3..]);
    if !mm.bytes().all(|b| b.is_ascii_digit()) || !yy.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let month: u32 = mm.parse().ok()?;
    let year: i32 = 2000 + yy.parse::<i32>().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }

    end_of_month(year, month)
}

// Last calendar day of the month at 23:59:59.999: one millisecond before the
// first instant of the following month.
fn end_of_month(year: i32, month: u32) -> Option<DateTime<Utc>> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let first_of_next = Utc.with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0).single()?;
    Some(first_of_next - Duration::milliseconds(1))
}

/// Ceiling of the absolute elapsed time between two instants, in days.
/// Elapsed-time based, not calendar-day subtraction.
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (end - start).num_milliseconds().abs();
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

/// Risk tier for a payment expiry relative to `now`. An absent expiry is
/// `Unknown`; callers that cannot tolerate `Unknown` filter before invoking.
pub fn classify_expiry(expiry: Option<DateTime<Utc>>, now: DateTime<Utc>) -> PaymentExpiryStatus {
    let Some(expiry) = expiry else {
        return PaymentExpiryStatus::Unknown;
    };

    if expiry < now {
        return PaymentExpiryStatus::Expired;
    }

    match days_between(now, expiry) {
        d if d <= 7 => PaymentExpiryStatus::Critical,
        d if d <= 30 => PaymentExpiryStatus::Warning,
        _ => PaymentExpiryStatus::Ok,
    }
}

/// Calendar month subtraction with end-of-month clamping: three months
/// before May 31 is the last day of February.
pub fn months_ago(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months)).unwrap_or(now)
}
