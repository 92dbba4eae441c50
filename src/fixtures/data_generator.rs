use csv::ReaderBuilder;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::config::constant::{ORDER_COUNT, ORDER_CSV_PATH, SEED, VEHICLE_COUNT, VEHICLE_CSV_PATH};
use crate::domain::types::{Order, Priority, Vehicle};
use crate::setup::records::{OrderRecord, VehicleRecord};

// Generated coordinates stay inside the Bengaluru metro bounding box.
const LAT_RANGE: (f64, f64) = (12.85, 13.10);
const LON_RANGE: (f64, f64) = (77.45, 77.75);

/// Reads the order intake from a CSV file with a header row.
fn read_orders_from_csv(csv_path: &str) -> Result<Vec<Order>, Box<dyn std::error::Error>> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(csv_path)?;

    let mut orders = Vec::new();
    for row in reader.deserialize() {
        let record: OrderRecord = row?;
        orders.push(record.into());
    }

    Ok(orders)
}

/// Reads the fleet intake from a CSV file with a header row.
fn read_vehicles_from_csv(csv_path: &str) -> Result<Vec<Vehicle>, Box<dyn std::error::Error>> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(csv_path)?;

    let mut vehicles = Vec::new();
    for row in reader.deserialize() {
        let record: VehicleRecord = row?;
        vehicles.push(record.into());
    }

    Ok(vehicles)
}

/// Generates a deterministic batch of orders spread over the metro area.
pub fn generate_orders(count: usize) -> Vec<Order> {
    let seed: u64 = SEED as u64;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut orders = Vec::with_capacity(count);

    for seq in 1..=count {
        let priority = match rng.gen_range(0..3) {
            0 => Priority::High,
            1 => Priority::Medium,
            _ => Priority::Low,
        };
        orders.push(Order {
            order_id: format!("ORD{:03}", seq),
            latitude: rng.gen_range(LAT_RANGE.0..LAT_RANGE.1),
            longitude: rng.gen_range(LON_RANGE.0..LON_RANGE.1),
            address: format!("Sector {:02}, Bengaluru", seq),
            weight: rng.gen_range(5.0..45.0),
            priority,
        });
    }

    orders
}

/// Generates a deterministic fleet parked around the same metro area.
pub fn generate_vehicles(count: usize) -> Vec<Vehicle> {
    let seed: u64 = SEED as u64;
    // Offset keeps vehicle draws decorrelated from the order draws above.
    let mut rng = ChaCha8Rng::seed_from_u64(seed + 1);
    let mut vehicles = Vec::with_capacity(count);

    for seq in 1..=count {
        vehicles.push(Vehicle {
            vehicle_id: format!("VEH{:03}", seq),
            capacity: rng.gen_range(60.0..160.0),
            latitude: rng.gen_range(LAT_RANGE.0..LAT_RANGE.1),
            longitude: rng.gen_range(LON_RANGE.0..LON_RANGE.1),
            address: format!("Depot bay {:02}, Bengaluru", seq),
        });
    }

    vehicles
}

/// Loads the order intake from CSV with deterministic random fallback.
pub fn load_orders() -> Vec<Order> {
    match read_orders_from_csv(ORDER_CSV_PATH) {
        Ok(list) if !list.is_empty() => {
            info!("Loaded {} orders from {}", list.len(), ORDER_CSV_PATH);
            list
        }
        Ok(_) => {
            warn!(
                "Order CSV at {} is empty. Falling back to generated fixtures.",
                ORDER_CSV_PATH
            );
            generate_orders(ORDER_COUNT)
        }
        Err(err) => {
            warn!(
                "Failed to read order CSV at {}: {}. Falling back to generated fixtures.",
                ORDER_CSV_PATH, err
            );
            generate_orders(ORDER_COUNT)
        }
    }
}

/// Loads the fleet intake from CSV with deterministic random fallback.
pub fn load_vehicles() -> Vec<Vehicle> {
    match read_vehicles_from_csv(VEHICLE_CSV_PATH) {
        Ok(list) if !list.is_empty() => {
            info!("Loaded {} vehicles from {}", list.len(), VEHICLE_CSV_PATH);
            list
        }
        Ok(_) => {
            warn!(
                "Vehicle CSV at {} is empty. Falling back to generated fixtures.",
                VEHICLE_CSV_PATH
            );
            generate_vehicles(VEHICLE_COUNT)
        }
        Err(err) => {
            warn!(
                "Failed to read vehicle CSV at {}: {}. Falling back to generated fixtures.",
                VEHICLE_CSV_PATH, err
            );
            generate_vehicles(VEHICLE_COUNT)
        }
    }
}
