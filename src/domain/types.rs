use serde::{Deserialize, Serialize};

/// Urgency band of an order. Dispatch serves HIGH before MEDIUM before LOW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Dispatch rank, lower is served first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Canonical storage and wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    /// Parse the canonical form back. Anything else is a bad record.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "HIGH" => Some(Priority::High),
            "MEDIUM" => Some(Priority::Medium),
            "LOW" => Some(Priority::Low),
            _ => None,
        }
    }
}

// Order by ascending rank so stable sorts put HIGH orders first.
impl Ord for Priority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A delivery request. Coordinates are decimal degrees, weight shares the
/// unit of vehicle capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub weight: f64,
    pub priority: Priority,
}

/// A vehicle available for the planning call, at its current position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub vehicle_id: String,
    pub capacity: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}
