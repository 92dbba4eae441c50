use thiserror::Error;

use crate::domain::types::{Order, Vehicle};

/// Snapshot defects that stop a planning call before it starts. The planner
/// core itself never rejects input, so anything that must not reach it gets
/// caught here.
#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("order {order_id}: weight {weight} is not a finite non-negative number")]
    OrderWeight { order_id: String, weight: f64 },
    #[error("order {order_id}: coordinates ({latitude}, {longitude}) are not finite")]
    OrderLocation {
        order_id: String,
        latitude: f64,
        longitude: f64,
    },
    #[error("vehicle {vehicle_id}: capacity {capacity} is not a finite non-negative number")]
    VehicleCapacity { vehicle_id: String, capacity: f64 },
    #[error("vehicle {vehicle_id}: coordinates ({latitude}, {longitude}) are not finite")]
    VehicleLocation {
        vehicle_id: String,
        latitude: f64,
        longitude: f64,
    },
}

/// Check every record of the snapshot. Scans orders first, then vehicles,
/// each in input order, and reports the first offending record. Empty
/// collections are fine.
pub fn validate_snapshot(orders: &[Order], vehicles: &[Vehicle]) -> Result<(), SnapshotError> {
    for order in orders {
        if !order.weight.is_finite() || order.weight < 0.0 {
            return Err(SnapshotError::OrderWeight {
                order_id: order.order_id.clone(),
                weight: order.weight,
            });
        }
        if !order.latitude.is_finite() || !order.longitude.is_finite() {
            return Err(SnapshotError::OrderLocation {
                order_id: order.order_id.clone(),
                latitude: order.latitude,
                longitude: order.longitude,
            });
        }
    }
    for vehicle in vehicles {
        if !vehicle.capacity.is_finite() || vehicle.capacity < 0.0 {
            return Err(SnapshotError::VehicleCapacity {
                vehicle_id: vehicle.vehicle_id.clone(),
                capacity: vehicle.capacity,
            });
        }
        if !vehicle.latitude.is_finite() || !vehicle.longitude.is_finite() {
            return Err(SnapshotError::VehicleLocation {
                vehicle_id: vehicle.vehicle_id.clone(),
                latitude: vehicle.latitude,
                longitude: vehicle.longitude,
            });
        }
    }
    Ok(())
}
