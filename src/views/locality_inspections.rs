//! Inspection listing for one locality over a date range.

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

/// Filter inputs for the locality inspection listing. The region narrows
/// the locality selector; all four fields gate the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalityInspectionFilters {
    pub region_id: Option<u64>,
    pub locality_id: Option<u64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl LocalityInspectionFilters {
    pub fn validate(&self) -> Result<(u64, NaiveDate, NaiveDate)> {
        match (self.region_id, self.locality_id, self.from, self.to) {
            (Some(_), Some(locality_id), Some(from), Some(to)) => Ok((locality_id, from, to)),
            _ => Err(Error::validation(
                "Select a region, a locality and a valid date range.",
            )),
        }
    }
}

struct LocalityInspectionSource<'a> {
    client: &'a StatsClient,
}

#[async_trait]
impl RowSource for LocalityInspectionSource<'_> {
    type Filters = (u64, NaiveDate, NaiveDate);
    type Row = InspectionSummary;

    async fn fetch_rows(
        &self,
        filters: &(u64, NaiveDate, NaiveDate),
    ) -> Result<Vec<InspectionSummary>> {
        let (locality_id, from, to) = *filters;
        let page = self
            .client
            .locality_inspections(locality_id, from, to)
            .await?;
        Ok(page.data)
    }
}

/// Screen state: filters plus the paginated inspection table.
#[derive(Debug)]
pub struct LocalityInspectionsScreen {
    pub filters: LocalityInspectionFilters,
    table: TableViewModel<InspectionSummary>,
    requests: RequestSequence,
}

impl Default for LocalityInspectionsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalityInspectionsScreen {
    pub fn new() -> Self {
        Self {
            filters: LocalityInspectionFilters::default(),
            table: inspection_table(),
            requests: RequestSequence::new(),
        }
    }

    /// Validate the filters, fetch, and install the rows unless a newer
    /// submission superseded this one.
    pub async fn submit(&mut self, client: &StatsClient) -> Result<()> {
        let filters = self.filters.validate()?;
        let source = LocalityInspectionSource { client };
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
