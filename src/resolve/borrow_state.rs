use crate::domain::event::{OpenBorrow, ProductEvent, ProductEventKind};
use crate::repo::product_events_repo::ProductEventsRepo;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Derives open-borrow state from the append-only product event log.
/// Borrow state is never stored; it is recomputed from the log on every call.
#[derive(Clone)]
pub struct BorrowStateResolver {
    pub repo: ProductEventsRepo,
}

impl BorrowStateResolver {
    pub async fn find_all_open_borrows(&self) -> Result<Vec<OpenBorrow>, sqlx::Error> {
        let events = self.repo.fetch_borrow_lifecycle().await?;
        Ok(open_borrows(events))
    }

    pub async fn find_stale_open_borrows(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<OpenBorrow>, sqlx::Error> {
        let events = self.repo.fetch_borrow_lifecycle().await?;
        Ok(stale_open_borrows(events, cutoff))
    }
}

/// A borrow is open iff no return event shares its transaction id. The
/// return's own timestamp is irrelevant: any matching return closes the
/// borrow, even one dated before it. Results are oldest borrow first.
pub fn open_borrows(events: Vec<ProductEvent>) -> Vec<OpenBorrow> {
    let closed: HashSet<String> = events
        .iter()
        .filter(|e| e.kind == ProductEventKind::Return)
        .map(|e| e.transaction_id.clone())
        .collect();

    let mut open: Vec<OpenBorrow> = events
        .into_iter()
        .filter(|e| e.kind == ProductEventKind::Borrow && !closed.contains(&e.transaction_id))
        .map(ProductEvent::into_open_borrow)
        .collect();

    open.sort_by_key(|b| b.borrow_date);
    open
}

/// Open borrows whose borrow timestamp is strictly earlier than `cutoff`.
pub fn stale_open_borrows(events: Vec<ProductEvent>, cutoff: DateTime<Utc>) -> Vec<OpenBorrow> {
    let mut open = open_borrows(events);
    open.retain(|b| b.borrow_date < cutoff);
    open
}
