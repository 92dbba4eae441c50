use crate::config::constant::DISTANCE_TIE_TOLERANCE_KM;
use crate::planner::capacity::CapacityLedger;

/// Pick the nearest vehicle that can still carry `weight`.
///
/// `distances` is the order's matrix row: kilometers to each vehicle, in
/// fleet order. A candidate only displaces the current best when it is
/// strictly closer by more than the tie tolerance, so equidistant vehicles
/// resolve to the earliest-listed one. Returns `None` when no vehicle has
/// room.
pub fn nearest_feasible(
    distances: &[f64],
    weight: f64,
    ledger: &CapacityLedger,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (vehicle_idx, &distance_km) in distances.iter().enumerate() {
        if !ledger.fits(vehicle_idx, weight) {
            continue;
        }
        match best {
            None => best = Some((vehicle_idx, distance_km)),
            Some((_, best_km)) if distance_km + DISTANCE_TIE_TOLERANCE_KM < best_km => {
                best = Some((vehicle_idx, distance_km));
            }
            _ => {}
        }
    }

    best.map(|(vehicle_idx, _)| vehicle_idx)
}
