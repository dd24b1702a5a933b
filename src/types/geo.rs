//! Administrative geography reference data.

use serde::Deserialize;

/// Region entry from `/regions`.
#[derive(Deserialize, Clone, Debug)]
pub struct Region {
    pub id: u64,
    pub name: String,
}

/// Locality entry from `/regions/{regionId}/localities`.
#[derive(Deserialize, Clone, Debug)]
pub struct Locality {
    pub id: u64,
    pub name: String,
}
