//! Generic sortable, paginated, colour-scaled table state.
//!
//! Every dashboard screen renders its results through the same view model:
//! rows come in from a fetch, the user picks a sort column and a page, and
//! the screen reads back the exact slice to draw plus a tint per row.

mod color;
mod field;
mod pager;
mod sort;
mod view_model;

pub use color::{expenditure_ramp, risk_ramp, Rgba, GAUGE_ALPHA, ROW_ALPHA};
pub use field::{FieldValue, SortRow};
pub use pager::{PageSize, PageWindow};
pub use sort::{compare_values, sorted_rows, SortDirection, SortState};
pub use view_model::{TableConfig, TableViewModel};
