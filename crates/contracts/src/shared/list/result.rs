use super::query::{PageSize, SortField, SortOrder};

/// Normalized outcome of resolving a list query.
///
/// Produced fresh on every round trip or local recompute and replaced
/// wholesale, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult<T, F> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: PageSize,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub sort_field: F,
    pub sort_order: SortOrder,
}

/// `ceil(total / size)` for numeric sizes; a single page for `All`.
pub fn total_pages(total_count: u64, page_size: PageSize) -> u32 {
    match page_size {
        PageSize::Count(0) => 0,
        PageSize::Count(size) => {
            let pages = total_count.div_ceil(u64::from(size));
            u32::try_from(pages).unwrap_or(u32::MAX)
        }
        PageSize::All => u32::from(total_count > 0),
    }
}

impl<T, F: SortField> ListResult<T, F> {
    /// Builds a result for one page window, deriving all pagination metadata.
    pub fn from_window(
        items: Vec<T>,
        total_count: u64,
        page: u32,
        page_size: PageSize,
        sort_field: F,
        sort_order: SortOrder,
    ) -> Self {
        let page = page.max(1);
        let total_pages = total_pages(total_count, page_size);
        Self {
            items,
            total_count,
            page,
            page_size,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
            sort_field,
            sort_order,
        }
    }

    /// Zero-count result on page 1, echoing the given sort.
    pub fn empty(page_size: PageSize, sort_field: F, sort_order: SortOrder) -> Self {
        Self::from_window(Vec::new(), 0, 1, page_size, sort_field, sort_order)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based positions of the first and last row on this page.
    pub fn row_range(&self) -> Option<(u64, u64)> {
        if self.items.is_empty() {
            return None;
        }
        let offset = match self.page_size {
            PageSize::Count(size) => u64::from(self.page.saturating_sub(1)) * u64::from(size),
            PageSize::All => 0,
        };
        Some((offset + 1, offset + self.items.len() as u64))
    }
}

impl<T, F: SortField> Default for ListResult<T, F> {
    fn default() -> Self {
        Self::empty(PageSize::Count(1), F::default(), SortOrder::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct ByName;

    impl SortField for ByName {
        fn as_str(&self) -> &'static str {
            "name"
        }

        fn parse(_: &str) -> Option<Self> {
            Some(Self)
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(25, PageSize::Count(10)), 3);
        assert_eq!(total_pages(30, PageSize::Count(10)), 3);
        assert_eq!(total_pages(0, PageSize::Count(10)), 0);
        assert_eq!(total_pages(7, PageSize::All), 1);
        assert_eq!(total_pages(0, PageSize::All), 0);
    }

    #[test]
    fn navigation_flags_follow_page_position() {
        for total in [0u64, 1, 9, 10, 11, 95] {
            for page in 1..=12u32 {
                let result: ListResult<(), ByName> = ListResult::from_window(
                    Vec::new(),
                    total,
                    page,
                    PageSize::Count(10),
                    ByName,
                    SortOrder::Ascending,
                );
                assert_eq!(result.total_pages, total.div_ceil(10) as u32);
                assert_eq!(result.has_next, page < result.total_pages);
                assert_eq!(result.has_previous, page > 1);
            }
        }
    }

    #[test]
    fn empty_result_sits_on_first_page() {
        let result: ListResult<(), ByName> =
            ListResult::empty(PageSize::Count(50), ByName, SortOrder::Descending);
        assert_eq!(result.page, 1);
        assert_eq!(result.total_count, 0);
        assert!(!result.has_next);
        assert!(!result.has_previous);
        assert_eq!(result.row_range(), None);
    }

    #[test]
    fn row_range_reports_window_positions() {
        let result: ListResult<u8, ByName> = ListResult::from_window(
            vec![1, 2, 3, 4, 5],
            25,
            3,
            PageSize::Count(10),
            ByName,
            SortOrder::Ascending,
        );
        assert_eq!(result.row_range(), Some((21, 25)));
    }
}
