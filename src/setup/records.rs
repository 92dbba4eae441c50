use serde::Deserialize;

use crate::domain::types::{Order, Priority, Vehicle};

/// Struct to match the order CSV row structure
#[derive(Debug, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub weight: f64,
    pub priority: Priority,
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Order {
            order_id: record.order_id,
            latitude: record.latitude,
            longitude: record.longitude,
            address: record.address,
            weight: record.weight,
            priority: record.priority,
        }
    }
}

/// Struct to match the vehicle CSV row structure
#[derive(Debug, Deserialize)]
pub struct VehicleRecord {
    pub vehicle_id: String,
    pub capacity: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

impl From<VehicleRecord> for Vehicle {
    fn from(record: VehicleRecord) -> Self {
        Vehicle {
            vehicle_id: record.vehicle_id,
            capacity: record.capacity,
            latitude: record.latitude,
            longitude: record.longitude,
            address: record.address,
        }
    }
}
