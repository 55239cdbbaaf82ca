use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentExpiryStatus {
    Expired,
    Critical,
    Warning,
    Ok,
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LostProductEntry {
    pub product_id: String,
    pub user_id: String,
    pub location: Option<String>,
    pub last_borrow_date: DateTime<Utc>,
    pub transaction_id: String,
    pub days_since_borrow: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringBorrowEntry {
    pub product_id: String,
    pub user_id: String,
    pub borrow_date: DateTime<Utc>,
    pub location: Option<String>,
    pub transaction_id: String,
    pub payment_valid_until: String,
    pub payment_expiry_date: NaiveDate,
    pub payment_status: PaymentExpiryStatus,
}
