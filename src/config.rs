pub mod constant {
    pub(crate) const SEED: usize = 64;
    pub(crate) const ORDER_COUNT: usize = 24;
    pub(crate) const VEHICLE_COUNT: usize = 6;
    pub(crate) const ORDER_CSV_PATH: &str = "data/orders.csv";
    pub(crate) const VEHICLE_CSV_PATH: &str = "data/vehicles.csv";
    pub(crate) const PLAN_JSON_PATH: &str = "dispatch_plan.json";
    pub(crate) const REPORT_CSV_PATH: &str = "dispatch_report.csv";
    // Distances closer than this count as equidistant when ranking vehicles.
    pub(crate) const DISTANCE_TIE_TOLERANCE_KM: f64 = 1e-9;
}
