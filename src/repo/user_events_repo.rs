use crate::domain::event::PaymentMethodRecord;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

#[derive(Clone)]
pub struct UserEventsRepo {
    pub pool: PgPool,
}

impl UserEventsRepo {
    pub async fn fetch_payment_method_events(&self) -> Result<Vec<PaymentMethodRecord>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, evt_date, platform, meta
            FROM user_events
            WHERE evt_type = 'add-payment-method'
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_record).collect())
    }

    pub async fn fetch_payment_method_events_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<PaymentMethodRecord>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, evt_date, platform, meta
            FROM user_events
            WHERE evt_type = 'add-payment-method'
              AND user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_record).collect())
    }
}

fn map_record(r: PgRow) -> PaymentMethodRecord {
    PaymentMethodRecord {
        user_id: r.get("user_id"),
        evt_date: r.get("evt_date"),
        platform: r.get("platform"),
        meta: r.get("meta"),
    }
}
