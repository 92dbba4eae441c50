pub mod config;
pub mod database;
pub mod distance;
pub mod domain;
pub mod fixtures;
pub mod planner;
pub mod setup;

pub use domain::plan::{DispatchPlan, VehicleAssignment};
pub use domain::types::{Order, Priority, Vehicle};
pub use domain::validate::{validate_snapshot, SnapshotError};
pub use planner::assignment::generate_plan;
