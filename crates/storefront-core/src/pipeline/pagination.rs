//! Pagination stage.

use std::num::NonZeroUsize;

/// Number of pages needed for `count` items, `0` for an empty collection.
pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get())
}

/// One page of an ordered collection.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    /// Items on this page, at most `page_size` of them.
    pub items: Vec<T>,
    /// 1-based page number that was requested.
    pub page: usize,
    pub total_pages: usize,
    /// Length of the collection before slicing.
    pub total_items: usize,
    /// Index of the first item of this page in the collection.
    pub offset: usize,
}

impl<T> Page<T> {
    /// Slice `[(page-1)*size, page*size)` out of `items`.
    ///
    /// A page outside `1..=total_pages` yields an empty slice.
    pub fn new(items: Vec<T>, page: usize, page_size: NonZeroUsize) -> Self {
        let total_items = items.len();
        let total_pages = total_pages(total_items, page_size);
        let size = page_size.get();

        let offset = page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(size))
            .unwrap_or(total_items)
            .min(total_items);

        let items = if (1..=total_pages).contains(&page) {
            items.into_iter().skip(offset).take(size).collect()
        } else {
            Vec::new()
        };

        Self {
            items,
            page,
            total_pages,
            total_items,
            offset,
        }
    }

    /// Page numbers to render as controls; empty when there is nothing to page.
    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }

    /// 1-based position range of the shown items, `None` when the page is empty.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            None
        } else {
            Some((self.offset + 1, self.offset + self.items.len()))
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.page <= self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.page >= 1 && self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, size(5)), 0);
        assert_eq!(total_pages(1, size(5)), 1);
        assert_eq!(total_pages(5, size(5)), 1);
        assert_eq!(total_pages(6, size(5)), 2);
        assert_eq!(total_pages(12, size(5)), 3);
    }

    #[test]
    fn test_slices() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(Page::new(items.clone(), 1, size(5)).items, vec![1, 2, 3, 4, 5]);
        assert_eq!(Page::new(items.clone(), 2, size(5)).items, vec![6, 7, 8, 9, 10]);
        assert_eq!(Page::new(items, 3, size(5)).items, vec![11, 12]);
    }

    #[test]
    fn test_out_of_range_is_empty() {
        let items: Vec<u32> = (1..=12).collect();
        let page = Page::new(items.clone(), 4, size(5));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
        assert!(Page::new(items.clone(), 0, size(5)).items.is_empty());
        assert!(Page::new(items, usize::MAX, size(5)).items.is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let page = Page::new(Vec::<u32>::new(), 1, size(5));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(page.page_numbers().is_empty());
        assert_eq!(page.item_range(), None);
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_metadata() {
        let items: Vec<u32> = (1..=12).collect();
        let page = Page::new(items, 2, size(5));
        assert_eq!(page.page_numbers(), vec![1, 2, 3]);
        assert_eq!(page.item_range(), Some((6, 10)));
        assert!(page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn test_last_page_bounds() {
        let items: Vec<u32> = (1..=12).collect();
        let page = Page::new(items, 3, size(5));
        assert_eq!(page.item_range(), Some((11, 12)));
        assert!(page.has_previous());
        assert!(!page.has_next());
    }
}
