//! Page math for offset/limit pagination.

/// 1-based page shown for `skip`; 1 when `limit` is 0.
pub fn current_page(skip: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 1;
    }
    skip / limit + 1
}

/// Number of pages for `count` records, never less than 1.
pub fn total_pages(count: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 1;
    }
    count.div_ceil(limit).max(1)
}

/// Offset of the first record on the 1-based `page`.
pub fn skip_for_page(page: u64, limit: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(limit)
}

/// Pagination position derived from the query offset and the last result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current: u64,
    pub total: u64,
    pub limit: u64,
    pub count: u64,
}

impl PageInfo {
    pub fn new(skip: u64, limit: u64, count: u64) -> Self {
        Self {
            current: current_page(skip, limit),
            total: total_pages(count, limit),
            limit,
            count,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// Offset for jumping to `page`, clamped to the known range.
    pub fn skip_for(&self, page: u64) -> u64 {
        skip_for_page(page.clamp(1, self.total), self.limit)
    }

    /// Up to `width` page numbers centered on the current page.
    pub fn window(&self, width: u64) -> std::ops::RangeInclusive<u64> {
        let width = width.max(1).min(self.total);
        let half = width / 2;
        let start = self
            .current
            .saturating_sub(half)
            .clamp(1, self.total + 1 - width);
        start..=start + width - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_page() {
        assert_eq!(current_page(0, 10), 1);
        assert_eq!(current_page(9, 10), 1);
        assert_eq!(current_page(10, 10), 2);
        assert_eq!(current_page(45, 20), 3);
        assert_eq!(current_page(45, 0), 1);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(11, 0), 1);
    }

    #[test]
    fn test_skip_for_page() {
        assert_eq!(skip_for_page(1, 25), 0);
        assert_eq!(skip_for_page(3, 25), 50);
        assert_eq!(skip_for_page(0, 25), 0);
    }

    #[test]
    fn test_page_info_navigation() {
        let info = PageInfo::new(20, 10, 35);

        assert_eq!(info.current, 3);
        assert_eq!(info.total, 4);
        assert!(info.has_previous());
        assert!(info.has_next());
        assert_eq!(info.skip_for(99), 30);
        assert_eq!(info.skip_for(0), 0);
    }

    #[test]
    fn test_window_is_clamped() {
        assert_eq!(PageInfo::new(0, 10, 100).window(5), 1..=5);
        assert_eq!(PageInfo::new(90, 10, 100).window(5), 6..=10);
        assert_eq!(PageInfo::new(40, 10, 100).window(5), 3..=7);
        assert_eq!(PageInfo::new(0, 10, 20).window(5), 1..=2);
    }
}
