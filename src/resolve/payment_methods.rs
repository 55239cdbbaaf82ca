use crate::domain::event::PaymentMethodRecord;
use crate::repo::user_events_repo::UserEventsRepo;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

#[derive(Clone)]
pub struct PaymentMethodResolver {
    pub repo: UserEventsRepo,
}

impl PaymentMethodResolver {
    /// Latest payment method for a single user. The report paths only
    /// consume the bulk variant below; this point lookup completes the
    /// resolver's surface for callers that hold one user id.
    pub async fn get_latest_payment_method(
        &self,
        user_id: &str,
    ) -> Result<Option<PaymentMethodRecord>, sqlx::Error> {
        let records = self.repo.fetch_payment_method_events_for_user(user_id).await?;
        Ok(latest_by_user(records).remove(user_id))
    }

    pub async fn get_all_latest_payment_methods(
        &self,
    ) -> Result<HashMap<String, PaymentMethodRecord>, sqlx::Error> {
        let records = self.repo.fetch_payment_method_events().await?;
        Ok(latest_by_user(records))
    }
}

/// Latest `add-payment-method` record per user: group by user id, keep the
/// maximum event timestamp, in a single pass. When two records for one user
/// carry an identical timestamp, whichever the store returned first wins;
/// the tie-break is deliberately unspecified.
pub fn latest_by_user(records: Vec<PaymentMethodRecord>) -> HashMap<String, PaymentMethodRecord> {
    let mut latest: HashMap<String, PaymentMethodRecord> = HashMap::new();
    for record in records {
        match latest.entry(record.user_id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                if record.evt_date > slot.get().evt_date {
                    slot.insert(record);
                }
            }
        }
    }
    latest
}
