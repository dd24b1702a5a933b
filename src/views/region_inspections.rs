//! Inspection listing for one region over a date range.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    fetch::{fetch_latest, RequestSequence, RowSource},
    prelude::*,
    stats::stats_client::StatsClient,
    table::{PageSize, Rgba, TableViewModel},
    types::InspectionSummary,
    Error,
};

use super::inspection_table::{inspection_row_color, inspection_table};

/// Filter inputs for the region inspection listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionInspectionFilters {
    pub region_id: Option<u64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl RegionInspectionFilters {
    pub fn validate(&self) -> Result<(u64, NaiveDate, NaiveDate)> {
        match (self.region_id, self.from, self.to) {
            (Some(region_id), Some(from), Some(to)) => Ok((region_id, from, to)),
            _ => Err(Error::validation(
                "Select a region and a valid date range.",
            )),
        }
    }
}

struct RegionInspectionSource<'a> {
    client: &'a StatsClient,
}

#[async_trait]
impl RowSource for RegionInspectionSource<'_> {
    type Filters = (u64, NaiveDate, NaiveDate);
    type Row = InspectionSummary;

    async fn fetch_rows(
        &self,
        filters: &(u64, NaiveDate, NaiveDate),
    ) -> Result<Vec<InspectionSummary>> {
        let (region_id, from, to) = *filters;
        let page = self.client.region_inspections(region_id, from, to).await?;
        Ok(page.data)
    }
}

/// Screen state: filters plus the paginated inspection table. Identical
/// table behavior to the locality listing, scoped to a whole region.
#[derive(Debug)]
pub struct RegionInspectionsScreen {
    pub filters: RegionInspectionFilters,
    table: TableViewModel<InspectionSummary>,
    requests: RequestSequence,
}

impl Default for RegionInspectionsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionInspectionsScreen {
    pub fn new() -> Self {
        Self {
            filters: RegionInspectionFilters::default(),
            table: inspection_table(),
            requests: RequestSequence::new(),
        }
    }

    /// Validate the filters, fetch, and install the rows unless a newer
    /// submission superseded this one.
    pub async fn submit(&mut self, client: &StatsClient) -> Result<()> {
        let filters = self.filters.validate()?;
        let source = RegionInspectionSource { client };
        if let Some(rows) = fetch_latest(&source, &filters, &self.requests).await? {
            self.table.set_rows(rows);
        }
        Ok(())
    }

    /// Column-header click passthrough.
    pub fn sort_by(&mut self, key: &str) {
        self.table.set_sort(key);
    }

    pub fn set_page(&mut self, index: usize) {
        self.table.set_page(index);
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.table.set_page_size(size);
    }

    /// Visible rows paired with their risk tint.
    pub fn rows(&self) -> Vec<(InspectionSummary, Rgba)> {
        self.table
            .visible_rows()
            .into_iter()
            .map(|row| {
                let color = inspection_row_color(&row);
                (row, color)
            })
            .collect()
    }

    pub fn table(&self) -> &TableViewModel<InspectionSummary> {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_validation_requires_region_and_range() {
        let mut filters = RegionInspectionFilters::default();
        assert!(matches!(filters.validate(), Err(Error::Validation(_))));

        filters.region_id = Some(12);
        filters.from = Some(date("2023-01-01"));
        assert!(filters.validate().is_err());

        filters.to = Some(date("2023-06-30"));
        assert!(filters.validate().is_ok());
    }

    #[test]
    fn test_sort_toggle_round_trips() {
        let mut screen = RegionInspectionsScreen::new();
        screen.sort_by("total");
        let first = screen.table().sort_state().direction;
        screen.sort_by("total");
        screen.sort_by("total");
        assert_eq!(screen.table().sort_state().direction, first);
    }
}
