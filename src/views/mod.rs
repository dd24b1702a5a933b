//! Screen-level view models.
//!
//! Each screen owns its filter inputs, a [`crate::table::TableViewModel`]
//! of result rows, and a request sequence so a stale response can never
//! overwrite a newer submission. Fetching goes through
//! [`crate::fetch::fetch_latest`] with a screen-specific
//! [`crate::fetch::RowSource`] adapter over the shared
//! [`crate::StatsClient`].

mod inspection_table;
mod item_estimates;
mod locality_estimates;
mod locality_inspections;
mod region_estimates;
mod region_inspections;
mod tender_inspection;

pub use inspection_table::inspection_row_color;
pub use item_estimates::{classification_options, ItemEstimateFilters, ItemEstimatesScreen};
pub use locality_estimates::{LocalityEstimateFilters, LocalityEstimatesScreen, LocalityStatRow};
pub use locality_inspections::{LocalityInspectionFilters, LocalityInspectionsScreen};
pub use region_estimates::{RegionEstimateFilters, RegionEstimatesScreen, RegionStatRow};
pub use region_inspections::{RegionInspectionFilters, RegionInspectionsScreen};
pub use tender_inspection::{
    ScoreGauge, SupplierHistoryRow, TenderInspectionFilters, TenderInspectionScreen, TenderReport,
};
