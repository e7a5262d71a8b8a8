//! Pagination descriptor and footer model.

/// Page sizes offered by the footer unless configured otherwise.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Default page size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Position within a paged result set.
///
/// `current` is 1-based. The descriptor only describes pages; it never holds
/// the rows themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-based).
    pub current: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Total rows across all pages.
    pub total: usize,
}

impl Pagination {
    /// Creates a descriptor.
    pub fn new(current: usize, page_size: usize, total: usize) -> Self {
        Self {
            current: current.max(1),
            page_size,
            total,
        }
    }

    /// `ceil(total / page_size)`, or 0 when the page size is 0.
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }

    /// Whether a previous page exists.
    pub fn can_previous(&self) -> bool {
        self.current > 1
    }

    /// Whether a next page exists.
    pub fn can_next(&self) -> bool {
        self.current < self.page_count()
    }

    /// Returns `true` if `page` can be navigated to.
    ///
    /// Page 1 is always valid, even for an empty result.
    pub fn contains_page(&self, page: usize) -> bool {
        page == 1 || (1..=self.page_count()).contains(&page)
    }

    /// Offset of the first row of the current page.
    pub fn offset(&self) -> usize {
        (self.current - 1).saturating_mul(self.page_size)
    }

    /// 1-based index of the first row shown, or 0 when nothing is shown.
    pub fn first_item(&self) -> usize {
        if self.total == 0 || self.offset() >= self.total {
            0
        } else {
            self.offset() + 1
        }
    }

    /// 1-based index of the last row shown.
    pub fn last_item(&self) -> usize {
        self.current.saturating_mul(self.page_size).min(self.total)
    }

    /// Returns the current page's slice of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}

/// Everything a pagination footer needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationFooter {
    /// Current page (1-based).
    pub current: usize,
    /// Total page count.
    pub page_count: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Total rows.
    pub total: usize,
    /// Previous button enabled.
    pub can_previous: bool,
    /// Next button enabled.
    pub can_next: bool,
    /// First row index shown.
    pub first_item: usize,
    /// Last row index shown.
    pub last_item: usize,
    /// Number of selected rows.
    pub selected: usize,
    /// Page sizes offered in the size picker.
    pub page_size_options: Vec<usize>,
}

impl PaginationFooter {
    /// Builds the footer for a descriptor.
    pub fn new(pagination: &Pagination, selected: usize, page_size_options: Vec<usize>) -> Self {
        Self {
            current: pagination.current,
            page_count: pagination.page_count(),
            page_size: pagination.page_size,
            total: pagination.total,
            can_previous: pagination.can_previous(),
            can_next: pagination.can_next(),
            first_item: pagination.first_item(),
            last_item: pagination.last_item(),
            selected,
            page_size_options,
        }
    }

    /// `Showing <first> to <last> of <total> results`.
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.first_item, self.last_item, self.total
        )
    }

    /// `<n> of <total> row(s) selected`, when anything is selected.
    pub fn selection_summary(&self) -> Option<String> {
        (self.selected > 0).then(|| format!("{} of {} row(s) selected", self.selected, self.total))
    }

    /// `Page <current> of <count>`.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current, self.page_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(Pagination::new(1, 10, 0).page_count(), 0);
        assert_eq!(Pagination::new(1, 10, 10).page_count(), 1);
        assert_eq!(Pagination::new(1, 10, 11).page_count(), 2);
        assert_eq!(Pagination::new(1, 0, 11).page_count(), 0);
    }

    #[test]
    fn test_boundaries() {
        let first = Pagination::new(1, 10, 25);
        assert!(!first.can_previous());
        assert!(first.can_next());

        let last = Pagination::new(3, 10, 25);
        assert!(last.can_previous());
        assert!(!last.can_next());
        assert_eq!(last.first_item(), 21);
        assert_eq!(last.last_item(), 25);
    }

    #[test]
    fn test_contains_page() {
        let empty = Pagination::new(1, 10, 0);
        assert!(empty.contains_page(1));
        assert!(!empty.contains_page(2));
        let pages = Pagination::new(1, 10, 25);
        assert!(pages.contains_page(3));
        assert!(!pages.contains_page(0));
        assert!(!pages.contains_page(4));
    }

    #[test]
    fn test_slice() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(Pagination::new(3, 10, 25).slice(&items), &[21, 22, 23, 24, 25]);
        assert!(Pagination::new(4, 10, 25).slice(&items).is_empty());
    }

    #[test]
    fn test_footer_text() {
        let footer = PaginationFooter::new(
            &Pagination::new(2, 10, 42),
            3,
            DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
        );
        assert_eq!(footer.summary(), "Showing 11 to 20 of 42 results");
        assert_eq!(footer.selection_summary().as_deref(), Some("3 of 42 row(s) selected"));
        assert_eq!(footer.page_label(), "Page 2 of 5");

        let empty = PaginationFooter::new(&Pagination::new(1, 10, 0), 0, vec![10]);
        assert_eq!(empty.summary(), "Showing 0 to 0 of 0 results");
        assert_eq!(empty.selection_summary(), None);
    }
}
