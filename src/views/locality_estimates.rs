//! Locality expenditure statistics screen.

use async_trait::async_trait;

use crate::{
    fetch::{fetch_latest, RequestSequence, RowSource},
    helpers::safe_ratio,
    prelude::*,
    stats::stats_client::StatsClient,
    table::{
        expenditure_ramp, FieldValue, Rgba, SortDirection, SortRow, TableConfig, TableViewModel,
        ROW_ALPHA,
    },
    types::LocalityEstimate,
    Error,
};

/// Filter inputs for the locality statistics table.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalityEstimateFilters {
    pub region_id: Option<u64>,
    pub year: Option<u16>,
}

impl LocalityEstimateFilters {
    pub fn validate(&self) -> Result<(u64, u16)> {
        match (self.region_id, self.year) {
            (Some(region_id), Some(year)) => Ok((region_id, year)),
            _ => Err(Error::validation("A region and a year are required.")),
        }
    }
}

/// One locality row with the derived expenditure ratios.
#[derive(Debug, Clone)]
pub struct LocalityStatRow {
    pub tender_count: u64,
    pub real_expenditures: f64,
    pub expected_expenditures: f64,
    /// Real over expected expenditures; drives the row tint.
    pub real_expected_ratio: f64,
    pub defense_expenditures: f64,
    /// Defense share of real expenditures.
    pub real_defense_ratio: f64,
    pub locality_name: String,
}

impl From<LocalityEstimate> for LocalityStatRow {
    fn from(estimate: LocalityEstimate) -> Self {
        Self {
            real_expected_ratio: safe_ratio(
                estimate.real_expenditures,
                estimate.expected_expenditures,
            ),
            real_defense_ratio: safe_ratio(
                estimate.defense_expenditures,
                estimate.real_expenditures,
            ),
            tender_count: estimate.tender_count,
            real_expenditures: estimate.real_expenditures,
            expected_expenditures: estimate.expected_expenditures,
            defense_expenditures: estimate.defense_expenditures,
            locality_name: estimate.locality.name,
        }
    }
}

impl SortRow for LocalityStatRow {
    fn field(&self, key: &str) -> FieldValue {
        match key {
            "tenderCount" => FieldValue::Number(self.tender_count as f64),
            "realExpenditures" => FieldValue::Number(self.real_expenditures),
            "expectedExpenditures" => FieldValue::Number(self.expected_expenditures),
            "realExpectedRatio" => FieldValue::Number(self.real_expected_ratio),
            "defenseExpenditures" => FieldValue::Number(self.defense_expenditures),
            "realDefenseRatio" => FieldValue::Number(self.real_defense_ratio),
            "locality.name" => FieldValue::Text(self.locality_name.clone()),
            _ => FieldValue::Null,
        }
    }
}

struct LocalityEstimateSource<'a> {
    client: &'a StatsClient,
}

#[async_trait]
impl RowSource for LocalityEstimateSource<'_> {
    type Filters = (u64, u16);
    type Row = LocalityStatRow;

    async fn fetch_rows(&self, filters: &(u64, u16)) -> Result<Vec<LocalityStatRow>> {
        let (region_id, year) = *filters;
        let estimates = self.client.locality_estimates(region_id, year).await?;
        Ok(estimates.into_iter().map(LocalityStatRow::from).collect())
    }
}

/// Screen state: filters plus the sortable table of locality rows. Opens
/// sorted by the real/expected ratio, worst offenders first.
#[derive(Debug)]
pub struct LocalityEstimatesScreen {
    pub filters: LocalityEstimateFilters,
    table: TableViewModel<LocalityStatRow>,
    requests: RequestSequence,
}

impl Default for LocalityEstimatesScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalityEstimatesScreen {
    pub fn new() -> Self {
        Self {
            filters: LocalityEstimateFilters::default(),
            table: TableViewModel::new(TableConfig {
                new_key_direction: SortDirection::Ascending,
                initial_sort: Some(("realExpectedRatio".to_string(), SortDirection::Descending)),
                paginated: false,
            }),
            requests: RequestSequence::new(),
        }
    }

    /// Validate the filters, fetch, and install the rows unless a newer
    /// submission superseded this one.
    pub async fn submit(&mut self, client: &StatsClient) -> Result<()> {
        let filters = self.filters.validate()?;
        let source = LocalityEstimateSource { client };
        if let Some(rows) = fetch_latest(&source, &filters, &self.requests).await? {
            self.table.set_rows(rows);
        }
        Ok(())
    }

    /// Column-header click passthrough.
    pub fn sort_by(&mut self, key: &str) {
        self.table.set_sort(key);
    }

    /// Visible rows paired with their background tint.
    pub fn rows(&self) -> Vec<(LocalityStatRow, Rgba)> {
        self.table
            .visible_rows()
            .into_iter()
            .map(|row| {
                let color = expenditure_ramp(row.real_expected_ratio, ROW_ALPHA);
                (row, color)
            })
            .collect()
    }

    pub fn table(&self) -> &TableViewModel<LocalityStatRow> {
        &self.table
    }
}
