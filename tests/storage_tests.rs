//! Storage round-trip tests
//!
//! Runs against throwaway SQLite files in the system temp directory.

use std::error::Error;

use dispatch::database::orders::{fetch_orders, upsert_orders};
use dispatch::database::sqlx::connect;
use dispatch::database::vehicles::{fetch_vehicles, upsert_vehicles};
use dispatch::{Order, Priority, Vehicle};

fn temp_db_url(tag: &str) -> String {
    let path = std::env::temp_dir().join(format!(
        "dispatch_test_{}_{}.sqlite",
        tag,
        std::process::id()
    ));
    // Leftovers from a previous run would leak rows into the assertions.
    let _ = std::fs::remove_file(&path);
    format!("sqlite:{}", path.display())
}

fn order(id: &str, weight: f64, priority: Priority) -> Order {
    Order {
        order_id: id.to_string(),
        latitude: 12.9716,
        longitude: 77.5946,
        address: "MG Road, Bangalore".to_string(),
        weight,
        priority,
    }
}

#[tokio::test]
async fn orders_round_trip_in_id_order() -> Result<(), Box<dyn Error>> {
    let pool = connect(&temp_db_url("orders_round_trip")).await?;

    let batch = vec![
        order("ORD002", 20.0, Priority::High),
        order("ORD001", 10.0, Priority::Low),
    ];
    upsert_orders(&pool, &batch).await?;

    let fetched = fetch_orders(&pool).await?;
    assert_eq!(fetched.len(), 2);
    assert_eq!(fetched[0], batch[1], "ORD001 sorts first");
    assert_eq!(fetched[1], batch[0]);
    Ok(())
}

#[tokio::test]
async fn reingesting_an_order_replaces_the_stored_record() -> Result<(), Box<dyn Error>> {
    let pool = connect(&temp_db_url("orders_reingest")).await?;

    upsert_orders(&pool, &[order("ORD001", 10.0, Priority::Medium)]).await?;
    upsert_orders(&pool, &[order("ORD001", 25.0, Priority::High)]).await?;

    let fetched = fetch_orders(&pool).await?;
    assert_eq!(fetched.len(), 1, "replace, not duplicate");
    assert_eq!(fetched[0].weight, 25.0);
    assert_eq!(fetched[0].priority, Priority::High);
    Ok(())
}

#[tokio::test]
async fn vehicles_round_trip_in_id_order() -> Result<(), Box<dyn Error>> {
    let pool = connect(&temp_db_url("vehicles_round_trip")).await?;

    let fleet = vec![
        Vehicle {
            vehicle_id: "VEH002".to_string(),
            capacity: 80.0,
            latitude: 12.9916,
            longitude: 77.5554,
            address: "Rajajinagar, Bangalore".to_string(),
        },
        Vehicle {
            vehicle_id: "VEH001".to_string(),
            capacity: 100.0,
            latitude: 12.9716,
            longitude: 77.6413,
            address: "Indiranagar, Bangalore".to_string(),
        },
    ];
    upsert_vehicles(&pool, &fleet).await?;

    let fetched = fetch_vehicles(&pool).await?;
    assert_eq!(fetched.len(), 2);
    assert_eq!(fetched[0], fleet[1], "VEH001 sorts first");
    assert_eq!(fetched[1], fleet[0]);
    Ok(())
}
