//! Load-more pagination for the blog listing.
//!
//! The listing always shows a prefix of the posts in stored order. Each
//! "load more" reveals up to one more page; the count never shrinks and
//! stops at the total.

/// Posts revealed initially and per load.
pub const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    visible: usize,
    page_size: usize,
    total: usize,
}

impl Pagination {
    /// Initial state: one page, or everything when there is less than a page.
    ///
    /// A zero page size is treated as one.
    pub fn new(total: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            visible: page_size.min(total),
            page_size,
            total,
        }
    }

    /// The state after `loads` calls to [`Self::load_more`].
    pub fn with_loads(total: usize, page_size: usize, loads: usize) -> Self {
        let mut pagination = Self::new(total, page_size);
        let step = pagination.page_size.saturating_mul(loads);
        pagination.visible = pagination.visible.saturating_add(step).min(total);
        pagination
    }

    /// Reveal one more page. No-op once everything is visible.
    pub fn load_more(&mut self) {
        self.visible = self.visible.saturating_add(self.page_size).min(self.total);
    }

    #[inline]
    pub const fn visible(&self) -> usize {
        self.visible
    }

    #[inline]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether the "load more" control should be offered.
    #[inline]
    pub const fn has_more(&self) -> bool {
        self.visible < self.total
    }

    /// Number of loads needed to reach the ceiling from the initial state.
    pub fn max_loads(&self) -> usize {
        let initial = self.page_size.min(self.total);
        (self.total - initial).div_ceil(self.page_size)
    }

    /// The visible prefix of `items`.
    pub fn visible_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible.min(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_posts_page_six() {
        let mut p = Pagination::new(8, DEFAULT_PAGE_SIZE);
        assert_eq!(p.visible(), 6);
        assert!(p.has_more());

        p.load_more();
        assert_eq!(p.visible(), 8);
        assert!(!p.has_more());

        p.load_more();
        assert_eq!(p.visible(), 8);
    }

    #[test]
    fn test_monotonic_and_closed_form() {
        let (total, page) = (20, 6);
        let mut p = Pagination::new(total, page);
        let mut last = p.visible();

        for k in 1..=6 {
            p.load_more();
            assert!(p.visible() >= last);
            assert_eq!(p.visible(), (page + k * page).min(total));
            assert_eq!(p, Pagination::with_loads(total, page, k));
            last = p.visible();
        }
        assert_eq!(p.visible(), 20);
    }

    #[test]
    fn test_idempotent_at_ceiling() {
        let mut p = Pagination::with_loads(12, 6, 1);
        assert_eq!(p.visible(), 12);
        let before = p;
        p.load_more();
        assert_eq!(p, before);
    }

    #[test]
    fn test_fewer_than_a_page() {
        let p = Pagination::new(3, 6);
        assert_eq!(p.visible(), 3);
        assert!(!p.has_more());
        assert_eq!(p.max_loads(), 0);
    }

    #[test]
    fn test_empty_listing() {
        let mut p = Pagination::new(0, 6);
        p.load_more();
        assert_eq!(p.visible(), 0);
        assert!(p.visible_slice::<u32>(&[]).is_empty());
    }

    #[test]
    fn test_zero_page_size_clamped() {
        let mut p = Pagination::new(3, 0);
        assert_eq!(p.page_size(), 1);
        assert_eq!(p.visible(), 1);
        p.load_more();
        assert_eq!(p.visible(), 2);
    }

    #[test]
    fn test_with_loads_saturates() {
        let p = Pagination::with_loads(8, 6, usize::MAX);
        assert_eq!(p.visible(), 8);
    }

    #[test]
    fn test_max_loads() {
        assert_eq!(Pagination::new(8, 6).max_loads(), 1);
        assert_eq!(Pagination::new(12, 6).max_loads(), 1);
        assert_eq!(Pagination::new(13, 6).max_loads(), 2);
    }

    #[test]
    fn test_visible_slice_stored_order() {
        let items: Vec<u32> = (1..=8).collect();
        let p = Pagination::new(items.len(), 6);
        assert_eq!(p.visible_slice(&items), &[1, 2, 3, 4, 5, 6]);
    }
}
