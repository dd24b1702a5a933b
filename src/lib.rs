#![deny(unreachable_pub)]

// Core modules
mod consts;
mod errors;
mod helpers;
mod prelude;
mod req;

// Shared utilities
pub mod serde_utils;
pub mod types;

// Feature modules
pub mod fetch;
pub mod stats;
pub mod table;
pub mod views;

// Re-exports
pub use consts::{
    EPSILON, INDICATOR_COLOR_MAX, INDICATOR_GAUGE_MAX, LOCAL_API_URL, PRODUCTION_API_URL,
    RISK_COLOR_MAX, TOTAL_GAUGE_MAX,
};
pub use errors::Error;
pub use fetch::{fetch_latest, RequestSequence, RequestTicket, RowSource};
pub use helpers::{ellipsize_title, format_date, safe_ratio, ApiBase};
pub use req::HttpClient;
pub use stats::response_structs::*;
pub use stats::stats_client::*;
pub use table::{
    compare_values, expenditure_ramp, risk_ramp, sorted_rows, FieldValue, PageSize, PageWindow,
    Rgba, SortDirection, SortRow, SortState, TableConfig, TableViewModel, GAUGE_ALPHA, ROW_ALPHA,
};
pub use types::*;
pub use views::*;
