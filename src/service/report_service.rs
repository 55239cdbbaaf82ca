use crate::domain::event::{OpenBorrow, PaymentMethodRecord};
use crate::domain::report::{ExpiringBorrowEntry, LostProductEntry};
use crate::expiry::{classify_expiry, days_between, months_ago, parse_payment_expiry};
use crate::resolve::borrow_state::BorrowStateResolver;
use crate::resolve::payment_methods::PaymentMethodResolver;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

const LOST_CUTOFF_MONTHS: u32 = 3;
const EXPIRY_HORIZON_DAYS: i64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("event store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),
    #[error("event store query failed: {0}")]
    Store(#[source] sqlx::Error),
}

impl ReportError {
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

impl From<sqlx::Error> for ReportError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => Self::StoreUnavailable(err),
            _ => Self::Store(err),
        }
    }
}

/// Assembles the two operational reports from the resolvers. Each call is a
/// pure function of the event log at query time; nothing is cached.
#[derive(Clone)]
pub struct ReportService {
    pub borrows: BorrowStateResolver,
    pub payments: PaymentMethodResolver,
}

impl ReportService {
    /// Open borrows older than three calendar months, oldest first.
    pub async fn lost_products(&self) -> Result<Vec<LostProductEntry>, ReportError> {
        let now = Utc::now();
        let cutoff = months_ago(now, LOST_CUTOFF_MONTHS);
        let stale = self.borrows.find_stale_open_borrows(cutoff).await?;
        Ok(stale.into_iter().map(|b| lost_product_entry(b, now)).collect())
    }

    /// Open borrows whose borrower's current payment method expires within
    /// 30 days (inclusive). The two underlying reads are independent and
    /// issued concurrently.
    pub async fn expiring_payment_borrows(&self) -> Result<Vec<ExpiringBorrowEntry>, ReportError> {
        let now = Utc::now();
        let (open, latest_payments) = tokio::try_join!(
            self.borrows.find_all_open_borrows(),
            self.payments.get_all_latest_payment_methods(),
        )?;
        Ok(assemble_expiring_report(open, &latest_payments, now))
    }
}

pub fn lost_product_entry(borrow: OpenBorrow, now: DateTime<Utc>) -> LostProductEntry {
    LostProductEntry {
        days_since_borrow: days_between(borrow.borrow_date, now),
        product_id: borrow.product_id,
        user_id: borrow.user_id,
        location: borrow.location,
        last_borrow_date: borrow.borrow_date,
        transaction_id: borrow.transaction_id,
    }
}

/// Joins open borrows against the latest payment method per user. Borrows
/// with no payment record, unusable metadata, or an unparseable expiry are
/// dropped silently; a single bad event must not fail the report. Output
/// keeps the open-borrow order (oldest borrow first).
pub fn assemble_expiring_report(
    borrows: Vec<OpenBorrow>,
    latest_payments: &HashMap<String, PaymentMethodRecord>,
    now: DateTime<Utc>,
) -> Vec<ExpiringBorrowEntry> {
    let horizon = now + Duration::days(EXPIRY_HORIZON_DAYS);

    let mut entries = Vec::new();
    for borrow in borrows {
        let Some(payment) = latest_payments.get(&borrow.user_id) else {
            continue;
        };
        let Some(meta) = payment_meta(payment.meta.as_ref()) else {
            continue;
        };
        let Some(valid_until) = expiry_field(&meta) else {
            continue;
        };
        let Some(expiry) = parse_payment_expiry(valid_until) else {
            continue;
        };
        if expiry > horizon {
            continue;
        }

        entries.push(ExpiringBorrowEntry {
            payment_valid_until: valid_until.to_string(),
            payment_expiry_date: expiry.date_naive(),
            payment_status: classify_expiry(Some(expiry), now),
            product_id: borrow.product_id,
            user_id: borrow.user_id,
            borrow_date: borrow.borrow_date,
            location: borrow.location,
            transaction_id: borrow.transaction_id,
        });
    }
    entries
}

// Metadata arrives either as a JSON object or as a string holding JSON text.
// A string that fails to parse means "no usable payment info", not an error.
fn payment_meta(meta: Option<&serde_json::Value>) -> Option<serde_json::Map<String, serde_json::Value>> {
    match meta? {
        serde_json::Value::Object(map) => Some(map.clone()),
        serde_json::Value::String(raw) => match serde_json::from_str(raw) {
            Ok(serde_json::Value::Object(map)) => Some(map),
            _ => None,
        },
        _ => None,
    }
}

// Both key spellings are accepted here, and only here.
fn expiry_field(meta: &serde_json::Map<String, serde_json::Value>) -> Option<&str> {
    meta.get("valid_until").or_else(|| meta.get("validUntil"))?.as_str()
}
