//! Single-tender corruption-risk report screen.

use crate::{
    consts::{INDICATOR_COLOR_MAX, INDICATOR_GAUGE_MAX, RISK_COLOR_MAX, TOTAL_GAUGE_MAX},
    fetch::{RequestSequence, RequestTicket},
    prelude::*,
    stats::stats_client::StatsClient,
    table::{risk_ramp, Rgba, GAUGE_ALPHA},
    types::{Inspection, Tender},
    Error,
};

/// Filter input for the tender report screen.
#[derive(Debug, Clone, Default)]
pub struct TenderInspectionFilters {
    pub tender_id: Option<String>,
}

impl TenderInspectionFilters {
    pub fn validate(&self) -> Result<&str> {
        match self.tender_id.as_deref() {
            Some(id) if !id.trim().is_empty() => Ok(id),
            _ => Err(Error::validation("Enter a valid tender id.")),
        }
    }
}

/// Rendering data for one score gauge.
#[derive(Debug, Clone)]
pub struct ScoreGauge {
    pub label: &'static str,
    pub value: f64,
    pub value_max: f64,
    pub fill: Rgba,
}

/// One supplier-history table row with the display name resolved.
#[derive(Debug, Clone)]
pub struct SupplierHistoryRow {
    pub supplier: String,
    pub win_count: u64,
    pub average_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// The combined inspection report and registry record for one tender.
#[derive(Debug, Clone)]
pub struct TenderReport {
    pub tender: Tender,
    pub inspection: Inspection,
}

impl TenderReport {
    /// The overall gauge plus the three component indicators, each with its
    /// dial maximum and fill colour.
    pub fn gauges(&self) -> [ScoreGauge; 4] {
        let scores = &self.inspection.corruption_probability;
        [
            ScoreGauge {
                label: "Overall score",
                value: scores.total,
                value_max: TOTAL_GAUGE_MAX,
                fill: risk_ramp(scores.total, RISK_COLOR_MAX, GAUGE_ALPHA),
            },
            ScoreGauge {
                label: "Item price comparison",
                value: scores.items,
                value_max: INDICATOR_GAUGE_MAX,
                fill: risk_ramp(scores.items, INDICATOR_COLOR_MAX, GAUGE_ALPHA),
            },
            ScoreGauge {
                label: "Locality budget share",
                value: scores.locality,
                value_max: INDICATOR_GAUGE_MAX,
                fill: risk_ramp(scores.locality, INDICATOR_COLOR_MAX, GAUGE_ALPHA),
            },
            ScoreGauge {
                label: "Supplier history",
                value: scores.suppliers,
                value_max: INDICATOR_GAUGE_MAX,
                fill: risk_ramp(scores.suppliers, INDICATOR_COLOR_MAX, GAUGE_ALPHA),
            },
        ]
    }

    /// Supplier-history rows in stable identifier order, with names
    /// resolved through the tender's active award. A supplier missing from
    /// the award keeps its raw identifier as the display name.
    pub fn supplier_history(&self) -> Vec<SupplierHistoryRow> {
        self.inspection
            .details
            .previous_supplier_tender_prices
            .iter()
            .map(|(supplier_id, history)| SupplierHistoryRow {
                supplier: self
                    .tender
                    .supplier_name(supplier_id)
                    .unwrap_or(supplier_id)
                    .to_string(),
                win_count: history.count,
                average_price: history.average,
                max_price: history.max,
            })
            .collect()
    }
}

/// Screen state for the tender report.
#[derive(Debug, Default)]
pub struct TenderInspectionScreen {
    pub filters: TenderInspectionFilters,
    report: Option<TenderReport>,
    requests: RequestSequence,
}

impl TenderInspectionScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the id, fetch the inspection and the tender record
    /// together, and install the report unless a newer submission
    /// superseded this one.
    pub async fn submit(&mut self, client: &StatsClient) -> Result<()> {
        let tender_id = self.filters.validate()?.to_string();
        let ticket = self.requests.begin();
        let outcome = tokio::try_join!(
            client.tender_inspection(&tender_id),
            client.tender(&tender_id),
        );
        self.resolve(ticket, outcome)
    }

    fn resolve(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<(Inspection, Tender)>,
    ) -> Result<()> {
        if !self.requests.is_current(ticket) {
            return Ok(());
        }
        let (inspection, tender) = outcome?;
        self.report = Some(TenderReport { tender, inspection });
        Ok(())
    }

    pub fn report(&self) -> Option<&TenderReport> {
        self.report.as_ref()
    }
}
