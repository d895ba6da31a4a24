use serde::{Deserialize, Serialize};

/// One fetched page of records plus the server-reported total.
///
/// A page is created fresh on every fetch and replaced wholesale on the
/// next one; there is no incremental patching of a previous page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    /// Build a page, upholding `total >= items.len()` even when the
    /// server reports a smaller count.
    pub fn new(items: Vec<T>, total: u64) -> Self {
        let total = total.max(items.len() as u64);
        Self { items, total }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Request for one page of a list resource. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Both values are clamped up to 1; `page = 0` is not a valid
    /// server query.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn first(per_page: u32) -> Self {
        Self::new(1, per_page)
    }

    /// Apply a server-enforced page-size ceiling.
    pub fn with_ceiling(self, ceiling: u32) -> Self {
        Self {
            page: self.page,
            per_page: self.per_page.min(ceiling.max(1)),
        }
    }
}

/// Number of pages needed to show `total` records, `page_size` at a time.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let size = u64::from(page_size.max(1));
    ((total + size - 1) / size) as u32
}

/// Clamp a 1-based page index into the valid range. An empty list keeps
/// the cursor on page 1.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_clamps_to_one() {
        let req = PageRequest::new(0, 0);
        assert_eq!(req.page, 1);
        assert_eq!(req.per_page, 1);
    }

    #[test]
    fn test_page_request_ceiling() {
        let req = PageRequest::new(1, 500).with_ceiling(200);
        assert_eq!(req.per_page, 200);
        let req = PageRequest::new(1, 50).with_ceiling(200);
        assert_eq!(req.per_page, 50);
    }

    #[test]
    fn test_page_total_never_below_len() {
        let page = Page::new(vec![1, 2, 3], 1);
        assert_eq!(page.total, 3);
        let page = Page::new(vec![1], 10);
        assert_eq!(page.total, 10);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 50), 0);
        assert_eq!(total_pages(1, 50), 1);
        assert_eq!(total_pages(50, 50), 1);
        assert_eq!(total_pages(51, 50), 2);
        assert_eq!(total_pages(101, 25), 5);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(0, 5), 1);
        // empty list keeps the cursor on page 1
        assert_eq!(clamp_page(4, 0), 1);
    }
}
