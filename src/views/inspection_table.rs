//! Shared table behavior for the two inspection listing screens.

use crate::{
    consts::RISK_COLOR_MAX,
    table::{risk_ramp, FieldValue, Rgba, SortRow, TableConfig, TableViewModel, ROW_ALPHA},
    types::InspectionSummary,
};

impl SortRow for InspectionSummary {
    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => FieldValue::Text(self.id.clone()),
            "items" => FieldValue::Number(self.items),
            "locality" => FieldValue::Number(self.locality),
            "suppliers" => FieldValue::Number(self.suppliers),
            "total" => FieldValue::Number(self.total),
            _ => FieldValue::Null,
        }
    }
}

/// Both inspection listings open the same way: unsorted, ascending on the
/// first header click, ten rows per page.
pub(crate) fn inspection_table() -> TableViewModel<InspectionSummary> {
    TableViewModel::new(TableConfig::default())
}

/// Row tint from the total risk score.
pub fn inspection_row_color(row: &InspectionSummary) -> Rgba {
    risk_ramp(row.total, RISK_COLOR_MAX, ROW_ALPHA)
}
