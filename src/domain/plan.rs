use serde::Serialize;

use crate::domain::types::Order;

/// One vehicle's slice of a dispatch plan. `assigned_orders` keeps the order
/// in which the planner committed them, so higher priorities come first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleAssignment {
    pub vehicle_id: String,
    pub assigned_orders: Vec<Order>,
    pub total_load: f64,
    pub total_distance_km: f64,
}

impl VehicleAssignment {
    pub fn order_ids(&self) -> Vec<&str> {
        self.assigned_orders.iter().map(|o| o.order_id.as_str()).collect()
    }

    pub fn is_idle(&self) -> bool {
        self.assigned_orders.is_empty()
    }
}

/// Result of one planning call. `assignments` holds one entry per input
/// vehicle in fleet order, idle vehicles included. Every input order appears
/// exactly once, either under some vehicle or in `unassigned_orders` (kept in
/// the order the planner considered them).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchPlan {
    #[serde(rename = "dispatchPlan")]
    pub assignments: Vec<VehicleAssignment>,
    pub unassigned_orders: Vec<Order>,
}

impl DispatchPlan {
    /// Look up a vehicle's slice by id.
    pub fn assignment_for(&self, vehicle_id: &str) -> Option<&VehicleAssignment> {
        self.assignments.iter().find(|a| a.vehicle_id == vehicle_id)
    }

    pub fn assigned_order_count(&self) -> usize {
        self.assignments.iter().map(|a| a.assigned_orders.len()).sum()
    }

    /// Total orders accounted for, assigned plus unassigned.
    pub fn order_count(&self) -> usize {
        self.assigned_order_count() + self.unassigned_orders.len()
    }
}
