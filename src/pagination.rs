//! Page window and derived pagination metadata for list endpoints.

use serde::Serialize;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// Requested slice of a result set. Values are clamped into the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    per_page: usize,
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_ITEMS_PER_PAGE),
        }
    }

    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of rows to skip before the page starts.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_ITEMS_PER_PAGE)
    }
}

/// Position of a page within the full filtered set.
///
/// Only `total_count` and the page window are inputs; every other value is
/// computed from them on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    total_count: usize,
    current_page: usize,
    total_pages: usize,
    has_next_page: bool,
    has_previous_page: bool,
}

impl PageInfo {
    pub fn new(total_count: usize, pagination: Pagination) -> Self {
        let page = pagination.page();
        let per_page = pagination.per_page();

        Self {
            total_count,
            current_page: page,
            total_pages: total_count.div_ceil(per_page),
            has_next_page: page.saturating_mul(per_page) < total_count,
            has_previous_page: page > 1,
        }
    }

    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub const fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub const fn has_previous_page(&self) -> bool {
        self.has_previous_page
    }
}

/// A page of items together with its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PageInfo,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total_count: usize, pagination: Pagination) -> Self {
        Self {
            items,
            pagination: PageInfo::new(total_count, pagination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_clamps_out_of_range_values() {
        let p = Pagination::new(0, 0);
        assert_eq!((p.page(), p.per_page()), (1, 1));

        let p = Pagination::new(3, 1_000);
        assert_eq!((p.page(), p.per_page()), (3, MAX_ITEMS_PER_PAGE));
        assert_eq!(p.offset(), 200);
    }

    #[test]
    fn default_pagination_is_first_page_of_ten() {
        let p = Pagination::default();
        assert_eq!((p.page(), p.per_page(), p.offset()), (1, 10, 0));
    }

    #[test]
    fn empty_result_has_no_pages() {
        let info = PageInfo::new(0, Pagination::new(1, 10));
        assert_eq!(info.total_pages(), 0);
        assert!(!info.has_next_page());
        assert!(!info.has_previous_page());
    }

    #[test]
    fn metadata_is_derived_for_every_combination() {
        for total in 0..=35 {
            for per_page in 1..=12 {
                for page in 1..=6 {
                    let info = PageInfo::new(total, Pagination::new(page, per_page));
                    assert_eq!(info.total_count(), total);
                    assert_eq!(info.current_page(), page);
                    assert_eq!(info.total_pages(), total.div_ceil(per_page));
                    assert_eq!(info.has_next_page(), page * per_page < total);
                    assert_eq!(info.has_previous_page(), page > 1);
                }
            }
        }
    }

    #[test]
    fn page_past_the_end_keeps_totals() {
        let info = PageInfo::new(10, Pagination::new(999, 10));
        assert_eq!(info.total_pages(), 1);
        assert!(!info.has_next_page());
        assert!(info.has_previous_page());
    }

    #[test]
    fn serializes_camel_case() {
        let page = Paginated::new(vec![1, 2], 8, Pagination::new(1, 5));
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["pagination"]["totalCount"], 8);
        assert_eq!(json["pagination"]["totalPages"], 2);
        assert_eq!(json["pagination"]["hasNextPage"], true);
        assert_eq!(json["pagination"]["hasPreviousPage"], false);
    }
}
