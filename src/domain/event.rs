use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductEventKind {
    Borrow,
    Return,
}

impl ProductEventKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "borrow" => Some(Self::Borrow),
            "return" => Some(Self::Return),
            _ => None,
        }
    }
}

/// One row of the product lifecycle log, restricted to borrow/return events.
#[derive(Debug, Clone)]
pub struct ProductEvent {
    pub kind: ProductEventKind,
    pub product_id: String,
    pub user_id: String,
    pub location: Option<String>,
    pub location_id: Option<String>,
    pub platform: Option<String>,
    pub transaction_id: String,
    pub evt_date: DateTime<Utc>,
}

impl ProductEvent {
    pub fn into_open_borrow(self) -> OpenBorrow {
        OpenBorrow {
            product_id: self.product_id,
            user_id: self.user_id,
            location: self.location,
            location_id: self.location_id,
            platform: self.platform,
            transaction_id: self.transaction_id,
            borrow_date: self.evt_date,
        }
    }
}

/// A borrow event with no matching return event. Derived per request,
/// never persisted.
#[derive(Debug, Clone)]
pub struct OpenBorrow {
    pub product_id: String,
    pub user_id: String,
    pub location: Option<String>,
    pub location_id: Option<String>,
    pub platform: Option<String>,
    pub transaction_id: String,
    pub borrow_date: DateTime<Utc>,
}

/// An `add-payment-method` row from the user lifecycle log.
#[derive(Debug, Clone)]
pub struct PaymentMethodRecord {
    pub user_id: String,
    pub evt_date: DateTime<Utc>,
    pub platform: Option<String>,
    pub meta: Option<serde_json::Value>,
}
