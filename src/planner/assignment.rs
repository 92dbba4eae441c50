use tracing::{debug, trace};

use crate::distance::matrix::create_dm;
use crate::domain::plan::{DispatchPlan, VehicleAssignment};
use crate::domain::types::{Order, Vehicle};
use crate::planner::capacity::CapacityLedger;
use crate::planner::selection::nearest_feasible;

/// Generate a dispatch plan for one snapshot of orders and vehicles.
///
/// Orders are served strictly by priority band (HIGH, then MEDIUM, then LOW,
/// input order within a band) and each goes to the nearest vehicle with
/// enough remaining capacity. Orders no vehicle can take land in the
/// unassigned list. Inputs are never mutated, so two calls on the same
/// snapshot produce the same plan.
pub fn generate_plan(orders: &[Order], vehicles: &[Vehicle]) -> DispatchPlan {
    let distance_matrix = create_dm(orders, vehicles);
    let mut ledger = CapacityLedger::new(vehicles);

    // Stable sort on rank keeps input order inside each priority band.
    let mut by_priority: Vec<usize> = (0..orders.len()).collect();
    by_priority.sort_by_key(|&i| orders[i].priority);

    let mut assigned: Vec<Vec<usize>> = vec![Vec::new(); vehicles.len()];
    let mut travelled_km: Vec<f64> = vec![0.0; vehicles.len()];
    let mut unassigned: Vec<usize> = Vec::new();

    for &order_idx in &by_priority {
        let order = &orders[order_idx];
        match nearest_feasible(&distance_matrix[order_idx], order.weight, &ledger) {
            Some(vehicle_idx) => {
                ledger.commit(vehicle_idx, order.weight);
                assigned[vehicle_idx].push(order_idx);
                travelled_km[vehicle_idx] += distance_matrix[order_idx][vehicle_idx];
                trace!(
                    "Order {} ({:?}, {:.1}) -> vehicle {} at {:.2} km, {:.1} capacity left",
                    order.order_id,
                    order.priority,
                    order.weight,
                    vehicles[vehicle_idx].vehicle_id,
                    distance_matrix[order_idx][vehicle_idx],
                    ledger.remaining(vehicle_idx)
                );
            }
            None => {
                debug!(
                    "No vehicle with room for order {} (weight {:.1})",
                    order.order_id, order.weight
                );
                unassigned.push(order_idx);
            }
        }
    }

    let assignments: Vec<VehicleAssignment> = vehicles
        .iter()
        .enumerate()
        .map(|(vehicle_idx, vehicle)| {
            let assigned_orders: Vec<Order> = assigned[vehicle_idx]
                .iter()
                .map(|&i| orders[i].clone())
                .collect();
            let total_load = assigned_orders.iter().map(|o| o.weight).sum();
            VehicleAssignment {
                vehicle_id: vehicle.vehicle_id.clone(),
                assigned_orders,
                total_load,
                total_distance_km: travelled_km[vehicle_idx],
            }
        })
        .collect();

    debug!(
        "Planned {} of {} orders across {} vehicles",
        orders.len() - unassigned.len(),
        orders.len(),
        vehicles.len()
    );

    DispatchPlan {
        assignments,
        unassigned_orders: unassigned.iter().map(|&i| orders[i].clone()).collect(),
    }
}
