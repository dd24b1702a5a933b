//! Item classifications and per-item price estimates.

use serde::Deserialize;

/// Item classification entry from `/items/classifications`.
///
/// Ids follow the procurement vocabulary format, e.g. `"09130000-9"`.
#[derive(Deserialize, Clone, Debug)]
pub struct Classification {
    pub id: String,
    pub description: String,
}

impl Classification {
    /// Case-insensitive substring match against the description, used to
    /// narrow the classification selector as the user types.
    pub fn matches(&self, input: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&input.to_lowercase())
    }
}

/// Measurement unit attached to an item estimate.
#[derive(Deserialize, Clone, Debug)]
pub struct Unit {
    pub id: String,
    pub name: String,
}

/// Average-price row from `/estimates/items`.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ItemEstimate {
    pub average_price: f64,
    pub count: u64,
    pub unit: Unit,
}
