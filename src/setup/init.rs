use sqlx::SqlitePool;
use std::error::Error;
use tracing::info;

use crate::database::orders::{fetch_orders, upsert_orders};
use crate::database::vehicles::{fetch_vehicles, upsert_vehicles};
use crate::domain::types::{Order, Vehicle};
use crate::fixtures::data_generator::{load_orders, load_vehicles};

/// Run the intake pipeline and hand back the planning snapshot.
///
/// CSV (or generated fixture) records land in storage first; the snapshot the
/// planner sees is whatever storage returns afterwards, in id order. That
/// keeps a re-run over the same data byte-for-byte reproducible.
pub async fn load_snapshot(pool: &SqlitePool) -> Result<(Vec<Order>, Vec<Vehicle>), Box<dyn Error>> {
    let intake_orders = load_orders();
    let intake_vehicles = load_vehicles();

    info!(
        "Starting intake with {} orders, {} vehicles",
        intake_orders.len(),
        intake_vehicles.len()
    );

    upsert_orders(pool, &intake_orders).await?;
    upsert_vehicles(pool, &intake_vehicles).await?;

    let orders = fetch_orders(pool).await?;
    let vehicles = fetch_vehicles(pool).await?;

    info!(
        "Snapshot ready: {} orders, {} vehicles",
        orders.len(),
        vehicles.len()
    );

    Ok((orders, vehicles))
}
