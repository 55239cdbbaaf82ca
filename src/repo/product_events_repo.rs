use crate::domain::event::{ProductEvent, ProductEventKind};
use sqlx::{PgPool, Row};

#[derive(Clone)]
pub struct ProductEventsRepo {
    pub pool: PgPool,
}

impl ProductEventsRepo {
    /// Raw borrow/return rows, oldest first. Rows with any other event type
    /// never leave the store.
    pub async fn fetch_borrow_lifecycle(&self) -> Result<Vec<ProductEvent>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT evt_type, product_id, user_id, location, location_id, platform,
                   transaction_id, evt_date
            FROM product_events
            WHERE evt_type IN ('borrow', 'return')
            ORDER BY evt_date ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .filter_map(|r| {
                let kind = ProductEventKind::parse(r.get::<String, _>("evt_type").as_str())?;
                Some(ProductEvent {
                    kind,
                    product_id: r.get("product_id"),
                    user_id: r.get("user_id"),
                    location: r.get("location"),
                    location_id: r.get("location_id"),
                    platform: r.get("platform"),
                    transaction_id: r.get("transaction_id"),
                    evt_date: r.get("evt_date"),
                })
            })
            .collect())
    }
}
