use serde::{Deserialize, Serialize};

/// Server-side pagination envelope. Every list endpoint pages on the
/// server; the client only moves a page cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_pages: u32,
    pub total_items: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            size: 0,
            total_pages: 0,
            total_items: 0,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_cursor_bounds() {
        let first: Page<u32> = Page {
            items: vec![1, 2],
            page: 0,
            size: 2,
            total_pages: 3,
            total_items: 5,
        };
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last: Page<u32> = Page {
            items: vec![5],
            page: 2,
            size: 2,
            total_pages: 3,
            total_items: 5,
        };
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn empty_page_has_no_neighbours() {
        let page: Page<u32> = Page::empty();
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }
}
