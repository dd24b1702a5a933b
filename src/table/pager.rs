//! Pagination windowing.

/// Allowed page sizes for paginated tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
}

impl PageSize {
    pub fn as_usize(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
        }
    }

    /// Parse one of the supported sizes.
    pub fn from_usize(size: usize) -> Option<Self> {
        match size {
            10 => Some(PageSize::Ten),
            25 => Some(PageSize::TwentyFive),
            50 => Some(PageSize::Fifty),
            _ => None,
        }
    }
}

/// Current page index and size.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageWindow {
    page_index: usize,
    page_size: PageSize,
}

impl PageWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Move to another page. An index beyond the data yields an empty slice
    /// from [`PageWindow::bounds`]; it is re-clamped on the next row
    /// replacement.
    pub fn set_page(&mut self, index: usize) {
        self.page_index = index;
    }

    /// Change the page size; resets to the first page.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.page_index = 0;
    }

    /// Pull the index back so it addresses an existing page (0 when there
    /// are no rows).
    pub fn clamp_to(&mut self, row_count: usize) {
        let last_page = if row_count == 0 {
            0
        } else {
            (row_count - 1) / self.page_size.as_usize()
        };
        if self.page_index > last_page {
            self.page_index = last_page;
        }
    }

    /// Half-open slice bounds into a collection of `row_count` rows. Never
    /// exceeds the collection, so an out-of-range page reads as empty.
    pub fn bounds(&self, row_count: usize) -> (usize, usize) {
        let size = self.page_size.as_usize();
        let start = self.page_index.saturating_mul(size).min(row_count);
        let end = (start + size).min(row_count);
        (start, end)
    }

    /// Number of pages needed for `row_count` rows.
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size.as_usize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_slices_partition_25_rows() {
        let mut window = PageWindow::new();

        window.set_page(0);
        assert_eq!(window.bounds(25), (0, 10));
        window.set_page(1);
        assert_eq!(window.bounds(25), (10, 20));
        window.set_page(2);
        assert_eq!(window.bounds(25), (20, 25));
        window.set_page(3);
        let (start, end) = window.bounds(25);
        assert_eq!(end - start, 0);

        assert_eq!(window.page_count(25), 3);
    }

    #[test]
    fn test_page_size_change_resets_index() {
        let mut window = PageWindow::new();
        window.set_page(4);
        window.set_page_size(PageSize::Fifty);
        assert_eq!(window.page_index(), 0);
        assert_eq!(window.bounds(120), (0, 50));
    }

    #[test]
    fn test_clamp_to_smaller_row_count() {
        let mut window = PageWindow::new();
        window.set_page(5);
        window.clamp_to(35);
        assert_eq!(window.page_index(), 3);
        assert_eq!(window.bounds(35), (30, 35));
    }

    #[test]
    fn test_clamp_to_empty_resets_to_first_page() {
        let mut window = PageWindow::new();
        window.set_page(2);
        window.clamp_to(0);
        assert_eq!(window.page_index(), 0);
        assert_eq!(window.bounds(0), (0, 0));
    }

    #[test]
    fn test_clamp_keeps_valid_index() {
        let mut window = PageWindow::new();
        window.set_page(1);
        window.clamp_to(25);
        assert_eq!(window.page_index(), 1);
    }

    #[test]
    fn test_page_size_parsing() {
        assert_eq!(PageSize::from_usize(10), Some(PageSize::Ten));
        assert_eq!(PageSize::from_usize(25), Some(PageSize::TwentyFive));
        assert_eq!(PageSize::from_usize(50), Some(PageSize::Fifty));
        assert_eq!(PageSize::from_usize(20), None);
    }
}
