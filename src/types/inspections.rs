//! Externally computed corruption-risk inspection results.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::helpers::ellipsize_title;

/// Composite corruption-probability score for one tender.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CorruptionProbability {
    pub total: f64,
    pub items: f64,
    pub locality: f64,
    pub suppliers: f64,
}

/// Expected unit price for one purchased item.
#[derive(Deserialize, Clone, Debug)]
pub struct ExpectedItemPrice {
    pub classification: String,
    pub quantity: f64,
    pub unit: String,
    pub price: f64,
}

/// Aggregated history of a supplier's previous tender wins.
#[derive(Deserialize, Clone, Debug)]
pub struct SupplierHistory {
    pub count: u64,
    pub average: Option<f64>,
    pub max: Option<f64>,
}

/// Detail block of an inspection report.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InspectionDetails {
    pub real_total_price: Option<f64>,
    pub expected_total_price: Option<f64>,
    pub real_expected_price_ratio: Option<f64>,
    #[serde(default)]
    pub expected_item_prices_per_one: Vec<ExpectedItemPrice>,
    pub locality: String,
    pub is_defence: bool,
    pub locality_year_estimate_ratio: Option<f64>,
    /// Keyed by supplier identifier. The misspelled wire name is part of
    /// the API contract.
    #[serde(rename = "previosSupplierTenderPrices", default)]
    pub previous_supplier_tender_prices: BTreeMap<String, SupplierHistory>,
}

/// Full inspection report from `/inspections/tenders/{id}`.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub corruption_probability: CorruptionProbability,
    pub details: InspectionDetails,
}

/// One row of an `/inspections/localities/{id}` or `/inspections/regions/{id}`
/// listing. The numeric fields are the per-component risk scores.
#[derive(Deserialize, Clone, Debug)]
pub struct InspectionSummary {
    pub id: String,
    pub title: Option<String>,
    pub items: f64,
    pub locality: f64,
    pub suppliers: f64,
    pub total: f64,
}

impl InspectionSummary {
    /// Display label for the listing: the shortened title, or the tender id
    /// when no title is present.
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => ellipsize_title(title),
            None => self.id.clone(),
        }
    }
}
