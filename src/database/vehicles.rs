use chrono::Utc;
use futures::TryStreamExt;
use sqlx::{Row, SqlitePool};
use std::error::Error;
use tracing::{debug, info};

use crate::domain::types::Vehicle;

/// Upsert the fleet intake, same replace-on-conflict contract as orders.
pub async fn upsert_vehicles(pool: &SqlitePool, vehicles: &[Vehicle]) -> Result<(), Box<dyn Error>> {
    let ingested_at = Utc::now().to_rfc3339();

    for vehicle in vehicles {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO vehicles
                (vehicle_id, capacity, latitude, longitude, address, ingested_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&vehicle.vehicle_id)
        .bind(vehicle.capacity)
        .bind(vehicle.latitude)
        .bind(vehicle.longitude)
        .bind(&vehicle.address)
        .bind(&ingested_at)
        .execute(pool)
        .await?;
    }

    info!("Upserted {} vehicles", vehicles.len());
    Ok(())
}

/// Fetch the whole fleet in id order.
pub async fn fetch_vehicles(pool: &SqlitePool) -> Result<Vec<Vehicle>, Box<dyn Error>> {
    let mut rows = sqlx::query(
        r#"
        SELECT vehicle_id, capacity, latitude, longitude, address
        FROM vehicles
        ORDER BY vehicle_id
        "#,
    )
    .fetch(pool);

    let mut vehicles = Vec::new();
    while let Some(row) = rows.try_next().await? {
        vehicles.push(Vehicle {
            vehicle_id: row.try_get("vehicle_id")?,
            capacity: row.try_get("capacity")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            address: row.try_get("address")?,
        });
    }

    debug!("Fetched {} vehicles from storage", vehicles.len());
    Ok(vehicles)
}
