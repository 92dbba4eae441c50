use tracing::debug;

use crate::distance::haversine::haversine_km;
use crate::domain::types::{Order, Vehicle};

/// Create the order-to-vehicle distance matrix in kilometers. Row `i` holds
/// the distances from `orders[i]` to every vehicle in fleet order.
pub fn create_dm(orders: &[Order], vehicles: &[Vehicle]) -> Vec<Vec<f64>> {
    debug!(
        "Creating distance matrix ({} orders, {} vehicles)",
        orders.len(),
        vehicles.len()
    );

    orders
        .iter()
        .map(|order| {
            vehicles
                .iter()
                .map(|vehicle| {
                    haversine_km(
                        (order.latitude, order.longitude),
                        (vehicle.latitude, vehicle.longitude),
                    )
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Priority;

    fn order_at(lat: f64, lon: f64) -> Order {
        Order {
            order_id: "ORD001".to_string(),
            latitude: lat,
            longitude: lon,
            address: "MG Road, Bangalore".to_string(),
            weight: 10.0,
            priority: Priority::Medium,
        }
    }

    fn vehicle_at(lat: f64, lon: f64) -> Vehicle {
        Vehicle {
            vehicle_id: "VEH001".to_string(),
            capacity: 100.0,
            latitude: lat,
            longitude: lon,
            address: "Indiranagar, Bangalore".to_string(),
        }
    }

    #[test]
    fn rows_follow_orders_and_columns_follow_vehicles() {
        let orders = vec![order_at(12.9716, 77.5946), order_at(13.0827, 80.2707)];
        let vehicles = vec![vehicle_at(12.9716, 77.5946), vehicle_at(12.9716, 77.6413)];

        let dm = create_dm(&orders, &vehicles);

        assert_eq!(dm.len(), 2);
        assert_eq!(dm[0].len(), 2);
        assert_eq!(dm[0][0], 0.0);
        assert!(dm[0][1] > 0.0);
        assert!(dm[1][0] > 200.0);
    }

    #[test]
    fn empty_inputs_give_empty_matrix() {
        let dm = create_dm(&[], &[vehicle_at(12.9716, 77.6413)]);
        assert!(dm.is_empty());
    }
}
