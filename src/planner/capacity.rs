use crate::domain::types::Vehicle;

/// Remaining-capacity bookkeeping for a single planning call, indexed by
/// vehicle position in the input fleet. Starts at each vehicle's declared
/// capacity and only ever goes down; the vehicles themselves are untouched.
#[derive(Debug)]
pub struct CapacityLedger {
    remaining: Vec<f64>,
}

impl CapacityLedger {
    pub fn new(vehicles: &[Vehicle]) -> Self {
        Self {
            remaining: vehicles.iter().map(|v| v.capacity).collect(),
        }
    }

    /// True when the vehicle can still take `weight` on top of its current
    /// load. Exact fits count.
    pub fn fits(&self, vehicle_idx: usize, weight: f64) -> bool {
        self.remaining[vehicle_idx] >= weight
    }

    /// Commit `weight` to the vehicle. Callers check `fits` first.
    pub fn commit(&mut self, vehicle_idx: usize, weight: f64) {
        self.remaining[vehicle_idx] -= weight;
    }

    pub fn remaining(&self, vehicle_idx: usize) -> f64 {
        self.remaining[vehicle_idx]
    }
}
