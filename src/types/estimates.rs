//! Aggregated expenditure statistics per locality and per region.

use serde::Deserialize;

use crate::serde_utils::float_or_string;

/// Nested locality reference on a locality statistics row.
#[derive(Deserialize, Clone, Debug)]
pub struct LocalityRef {
    pub name: String,
}

/// Nested region reference on a region statistics row.
#[derive(Deserialize, Clone, Debug)]
pub struct RegionRef {
    pub name: String,
}

/// Locality statistics row from `/estimates/localities`.
///
/// Monetary fields arrive as numbers or decimal strings depending on the
/// aggregation backend, so they go through [`float_or_string`].
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LocalityEstimate {
    pub tender_count: u64,
    #[serde(deserialize_with = "float_or_string")]
    pub real_expenditures: f64,
    #[serde(deserialize_with = "float_or_string")]
    pub expected_expenditures: f64,
    #[serde(deserialize_with = "float_or_string")]
    pub defense_expenditures: f64,
    pub locality: LocalityRef,
}

/// Region statistics row from `/estimates/regions`.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegionEstimate {
    pub tender_count: u64,
    #[serde(deserialize_with = "float_or_string")]
    pub real_expenditures: f64,
    #[serde(deserialize_with = "float_or_string")]
    pub defense_expenditures: f64,
    pub region: RegionRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locality_estimate_accepts_string_amounts() {
        let json = r#"{
            "tenderCount": 14,
            "realExpenditures": "120500.75",
            "expectedExpenditures": 98000,
            "defenseExpenditures": "0",
            "locality": {"name": "Bucha"}
        }"#;
        let row: LocalityEstimate = serde_json::from_str(json).unwrap();
        assert_eq!(row.tender_count, 14);
        assert!((row.real_expenditures - 120500.75).abs() < 1e-9);
        assert!((row.expected_expenditures - 98000.0).abs() < 1e-9);
        assert_eq!(row.defense_expenditures, 0.0);
        assert_eq!(row.locality.name, "Bucha");
    }

    #[test]
    fn test_region_estimate_deserializes() {
        let json = r#"{
            "tenderCount": 230,
            "realExpenditures": 5400000.0,
            "defenseExpenditures": 1200000.0,
            "region": {"name": "Odeska"}
        }"#;
        let row: RegionEstimate = serde_json::from_str(json).unwrap();
        assert_eq!(row.tender_count, 230);
        assert_eq!(row.region.name, "Odeska");
    }
}
