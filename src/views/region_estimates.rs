//! Regional expenditure statistics screen.

use async_trait::async_trait;

use crate::{
    fetch::{fetch_latest, RequestSequence, RowSource},
    helpers::safe_ratio,
    prelude::*,
    stats::stats_client::StatsClient,
    table::{FieldValue, SortDirection, SortRow, TableConfig, TableViewModel},
    types::RegionEstimate,
    Error,
};

/// Filter inputs for the region statistics table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionEstimateFilters {
    pub year: Option<u16>,
}

impl RegionEstimateFilters {
    pub fn validate(&self) -> Result<u16> {
        self.year
            .ok_or_else(|| Error::validation("A year is required."))
    }
}

/// One region row with the derived defense share.
#[derive(Debug, Clone)]
pub struct RegionStatRow {
    pub tender_count: u64,
    pub real_expenditures: f64,
    pub defense_expenditures: f64,
    /// Defense share of real expenditures, in percent.
    pub defense_ratio: f64,
    pub region_name: String,
}

impl From<RegionEstimate> for RegionStatRow {
    fn from(estimate: RegionEstimate) -> Self {
        Self {
            defense_ratio: safe_ratio(estimate.defense_expenditures, estimate.real_expenditures)
                * 100.0,
            tender_count: estimate.tender_count,
            real_expenditures: estimate.real_expenditures,
            defense_expenditures: estimate.defense_expenditures,
            region_name: estimate.region.name,
        }
    }
}

impl SortRow for RegionStatRow {
    fn field(&self, key: &str) -> FieldValue {
        match key {
            "tenderCount" => FieldValue::Number(self.tender_count as f64),
            "realExpenditures" => FieldValue::Number(self.real_expenditures),
            "defenseExpenditures" => FieldValue::Number(self.defense_expenditures),
            "defenseRatio" => FieldValue::Number(self.defense_ratio),
            "region.name" => FieldValue::Text(self.region_name.clone()),
            _ => FieldValue::Null,
        }
    }
}

struct RegionEstimateSource<'a> {
    client: &'a StatsClient,
}

#[async_trait]
impl RowSource for RegionEstimateSource<'_> {
    type Filters = u16;
    type Row = RegionStatRow;

    async fn fetch_rows(&self, year: &u16) -> Result<Vec<RegionStatRow>> {
        let estimates = self.client.region_estimates(*year).await?;
        Ok(estimates.into_iter().map(RegionStatRow::from).collect())
    }
}

/// Screen state: the year filter plus the sortable table of region rows.
/// Opens sorted by real expenditures, largest first.
#[derive(Debug)]
pub struct RegionEstimatesScreen {
    pub filters: RegionEstimateFilters,
    table: TableViewModel<RegionStatRow>,
    requests: RequestSequence,
}

impl Default for RegionEstimatesScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionEstimatesScreen {
    pub fn new() -> Self {
        Self {
            filters: RegionEstimateFilters::default(),
            table: TableViewModel::new(TableConfig {
                new_key_direction: SortDirection::Ascending,
                initial_sort: Some(("realExpenditures".to_string(), SortDirection::Descending)),
                paginated: false,
            }),
            requests: RequestSequence::new(),
        }
    }

    /// Validate the filters, fetch, and install the rows unless a newer
    /// submission superseded this one.
    pub async fn submit(&mut self, client: &StatsClient) -> Result<()> {
        let year = self.filters.validate()?;
        let source = RegionEstimateSource { client };
        if let Some(rows) = fetch_latest(&source, &year, &self.requests).await? {
            self.table.set_rows(rows);
        }
        Ok(())
    }

    /// Column-header click passthrough.
    pub fn sort_by(&mut self, key: &str) {
        self.table.set_sort(key);
    }

    pub fn rows(&self) -> Vec<RegionStatRow> {
        self.table.visible_rows()
    }

    pub fn table(&self) -> &TableViewModel<RegionStatRow> {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RegionRef;

    fn estimate(name: &str, real: f64, defense: f64) -> RegionEstimate {
        RegionEstimate {
            tender_count: 10,
            real_expenditures: real,
            defense_expenditures: defense,
            region: RegionRef {
                name: name.to_string(),
            },
        }
    }

    #[test]
    fn test_missing_year_blocks_submission() {
        let filters = RegionEstimateFilters::default();
        assert!(matches!(filters.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_defense_ratio_is_a_percentage() {
        let row = RegionStatRow::from(estimate("Odeska", 200.0, 50.0));
        assert!((row.defense_ratio - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_defense_ratio_guards_zero_expenditures() {
        let row = RegionStatRow::from(estimate("Odeska", 0.0, 50.0));
        assert_eq!(row.defense_ratio, 0.0);
    }

    #[test]
    fn test_opens_sorted_by_real_expenditures_descending() {
        let mut screen = RegionEstimatesScreen::new();
        screen.table.set_rows(vec![
            RegionStatRow::from(estimate("A", 100.0, 0.0)),
            RegionStatRow::from(estimate("B", 300.0, 0.0)),
            RegionStatRow::from(estimate("C", 200.0, 0.0)),
        ]);
        let rows = screen.rows();
        let names: Vec<&str> = rows.iter().map(|r| r.region_name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_new_column_defaults_ascending() {
        let mut screen = RegionEstimatesScreen::new();
        screen.sort_by("tenderCount");
        assert_eq!(
            screen.table().sort_state().direction,
            SortDirection::Ascending
        );
    }
}
