//! Average item price screen.

use async_trait::async_trait;

use crate::{
    fetch::{fetch_latest, RequestSequence, RowSource},
    prelude::*,
    stats::stats_client::StatsClient,
    table::{FieldValue, SortRow, TableConfig, TableViewModel},
    types::{Classification, ItemEstimate},
    Error,
};

/// Filter inputs for the item price table.
#[derive(Debug, Clone, Default)]
pub struct ItemEstimateFilters {
    pub year: Option<u16>,
    pub classification_id: Option<String>,
}

impl ItemEstimateFilters {
    pub fn validate(&self) -> Result<(u16, &str)> {
        match (self.year, self.classification_id.as_deref()) {
            (Some(year), Some(id)) if !id.is_empty() => Ok((year, id)),
            _ => Err(Error::validation("A year and a classification are required.")),
        }
    }
}

impl SortRow for ItemEstimate {
    fn field(&self, key: &str) -> FieldValue {
        match key {
            "averagePrice" => FieldValue::Number(self.average_price),
            "count" => FieldValue::Number(self.count as f64),
            "unit.id" => FieldValue::Text(self.unit.id.clone()),
            "unit.name" => FieldValue::Text(self.unit.name.clone()),
            _ => FieldValue::Null,
        }
    }
}

/// Narrow the classification selector as the user types into it.
pub fn classification_options<'a>(
    classifications: &'a [Classification],
    input: &str,
) -> Vec<&'a Classification> {
    classifications.iter().filter(|c| c.matches(input)).collect()
}

struct ItemEstimateSource<'a> {
    client: &'a StatsClient,
}

#[async_trait]
impl RowSource for ItemEstimateSource<'_> {
    type Filters = (u16, String);
    type Row = ItemEstimate;

    async fn fetch_rows(&self, filters: &(u16, String)) -> Result<Vec<ItemEstimate>> {
        self.client.item_estimates(filters.0, &filters.1).await
    }
}

/// Screen state for the item price table. The table renders in fetch
/// order; there are no sort controls or pages on this screen.
#[derive(Debug)]
pub struct ItemEstimatesScreen {
    pub filters: ItemEstimateFilters,
    table: TableViewModel<ItemEstimate>,
    requests: RequestSequence,
}

impl Default for ItemEstimatesScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemEstimatesScreen {
    pub fn new() -> Self {
        Self {
            filters: ItemEstimateFilters::default(),
            table: TableViewModel::new(TableConfig {
                paginated: false,
                ..TableConfig::default()
            }),
            requests: RequestSequence::new(),
        }
    }

    /// Validate the filters, fetch, and install the rows unless a newer
    /// submission superseded this one.
    pub async fn submit(&mut self, client: &StatsClient) -> Result<()> {
        let (year, classification_id) = self.filters.validate()?;
        let filters = (year, classification_id.to_string());
        let source = ItemEstimateSource { client };
        if let Some(rows) = fetch_latest(&source, &filters, &self.requests).await? {
            self.table.set_rows(rows);
        }
        Ok(())
    }

    pub fn rows(&self) -> Vec<ItemEstimate> {
        self.table.visible_rows()
    }

    pub fn table(&self) -> &TableViewModel<ItemEstimate> {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_requires_year_and_classification() {
        let mut filters = ItemEstimateFilters::default();
        assert!(filters.validate().is_err());

        filters.year = Some(2024);
        assert!(filters.validate().is_err());

        filters.classification_id = Some(String::new());
        assert!(filters.validate().is_err());

        filters.classification_id = Some("09130000-9".to_string());
        assert_eq!(filters.validate().unwrap(), (2024, "09130000-9"));
    }

    #[test]
    fn test_classification_options_filtering() {
        let classifications = vec![
            Classification {
                id: "09130000-9".to_string(),
                description: "Petroleum and distillates".to_string(),
            },
            Classification {
                id: "03110000-5".to_string(),
                description: "Crops, products of market gardening".to_string(),
            },
        ];
        let matches = classification_options(&classifications, "petrol");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "09130000-9");

        assert_eq!(classification_options(&classifications, "").len(), 2);
        assert!(classification_options(&classifications, "fish").is_empty());
    }
}
