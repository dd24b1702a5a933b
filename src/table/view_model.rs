//! The table view model shared by every screen.

use super::{
    field::SortRow,
    pager::{PageSize, PageWindow},
    sort::{sorted_rows, SortDirection, SortState},
};

/// Per-table behavior knobs.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Direction installed when sorting switches to a new column.
    pub new_key_direction: SortDirection,
    /// Sort applied before the user touches any column header.
    pub initial_sort: Option<(String, SortDirection)>,
    /// Whether the table windows its rows into pages. Tables that render
    /// everything at once leave this off.
    pub paginated: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            new_key_direction: SortDirection::Ascending,
            initial_sort: None,
            paginated: true,
        }
    }
}

/// Sortable, paginated view over an in-memory row collection.
///
/// The collection is replaced wholesale on each fetch; sort and page state
/// survive a refetch. All reads derive from a copy, so the stored row
/// order is never mutated.
#[derive(Debug)]
pub struct TableViewModel<R: SortRow + Clone> {
    rows: Vec<R>,
    sort: SortState,
    window: PageWindow,
    config: TableConfig,
}

impl<R: SortRow + Clone> TableViewModel<R> {
    pub fn new(config: TableConfig) -> Self {
        let sort = match &config.initial_sort {
            Some((key, direction)) => SortState {
                key: Some(key.clone()),
                direction: *direction,
            },
            None => SortState {
                key: None,
                direction: config.new_key_direction,
            },
        };
        Self {
            rows: Vec::new(),
            sort,
            window: PageWindow::new(),
            config,
        }
    }

    /// Replace the whole row collection. Sort state is kept; the page index
    /// is clamped back into range (0 when the new collection is empty).
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.window.clamp_to(self.rows.len());
    }

    /// Column-header click: the active key flips direction, a new key
    /// installs the configured default direction.
    pub fn set_sort(&mut self, key: &str) {
        if self.sort.key.as_deref() == Some(key) {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort.key = Some(key.to_string());
            self.sort.direction = self.config.new_key_direction;
        }
    }

    pub fn set_page(&mut self, index: usize) {
        self.window.set_page(index);
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.window.set_page_size(size);
    }

    /// The sorted rows for the current page, or all sorted rows when the
    /// table is not paginated. An out-of-range page reads as empty.
    pub fn visible_rows(&self) -> Vec<R> {
        let sorted = sorted_rows(&self.rows, &self.sort);
        if !self.config.paginated {
            return sorted;
        }
        let (start, end) = self.window.bounds(sorted.len());
        sorted[start..end].to_vec()
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn page_index(&self) -> usize {
        self.window.page_index()
    }

    pub fn page_size(&self) -> PageSize {
        self.window.page_size()
    }

    pub fn page_count(&self) -> usize {
        self.window.page_count(self.rows.len())
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
