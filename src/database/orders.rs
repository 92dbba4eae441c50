use chrono::Utc;
use futures::TryStreamExt;
use sqlx::{Row, SqlitePool};
use std::error::Error;
use tracing::{debug, info};

use crate::domain::types::{Order, Priority};

/// Upsert one intake batch. Re-ingesting an order id replaces the stored
/// record, so the table always holds the latest version of each order.
pub async fn upsert_orders(pool: &SqlitePool, orders: &[Order]) -> Result<(), Box<dyn Error>> {
    let ingested_at = Utc::now().to_rfc3339();

    for order in orders {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO orders
                (order_id, latitude, longitude, address, weight, priority, ingested_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&order.order_id)
        .bind(order.latitude)
        .bind(order.longitude)
        .bind(&order.address)
        .bind(order.weight)
        .bind(order.priority.as_str())
        .bind(&ingested_at)
        .execute(pool)
        .await?;
    }

    info!("Upserted {} orders", orders.len());
    Ok(())
}

/// Fetch the whole order table in id order, the snapshot the planner sees.
pub async fn fetch_orders(pool: &SqlitePool) -> Result<Vec<Order>, Box<dyn Error>> {
    let mut rows = sqlx::query(
        r#"
        SELECT order_id, latitude, longitude, address, weight, priority
        FROM orders
        ORDER BY order_id
        "#,
    )
    .fetch(pool);

    let mut orders = Vec::new();
    while let Some(row) = rows.try_next().await? {
        let order_id: String = row.try_get("order_id")?;
        let priority_raw: String = row.try_get("priority")?;
        let priority = Priority::parse(&priority_raw)
            .ok_or_else(|| format!("unknown priority '{priority_raw}' on order {order_id}"))?;

        orders.push(Order {
            order_id,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            address: row.try_get("address")?,
            weight: row.try_get("weight")?,
            priority,
        });
    }

    debug!("Fetched {} orders from storage", orders.len());
    Ok(orders)
}
