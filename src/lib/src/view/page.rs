use serde::{Deserialize, Serialize};

use crate::util::paginate;
use crate::view::Pagination;

/// One bounded slice of a server-side result set, items in server order.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub size: usize,
    #[serde(default)]
    pub pages: usize,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, page: usize, size: usize) -> Page<T> {
        let pages = paginate::total_pages(total, size);
        Page {
            items,
            total,
            page,
            size,
            pages,
            has_next: paginate::has_next(page, pages),
            has_previous: paginate::has_previous(page),
        }
    }

    /// Recomputes `pages`, `has_next` and `has_previous` from `total`, `size`
    /// and `page`, so every page we hand out follows the same convention
    /// (zero pages for an empty result set).
    pub fn normalized(self) -> Page<T> {
        let pages = paginate::total_pages(self.total, self.size);
        let has_next = paginate::has_next(self.page, pages);
        let has_previous = paginate::has_previous(self.page);
        if pages != self.pages || has_next != self.has_next || has_previous != self.has_previous {
            log::debug!(
                "normalizing page metadata total: {} size: {} page: {} pages: {} -> {}",
                self.total,
                self.size,
                self.page,
                self.pages,
                pages
            );
        }
        if self.items.len() > self.size {
            log::warn!(
                "server returned {} items for a page of size {}",
                self.items.len(),
                self.size
            );
        }
        Page {
            pages,
            has_next,
            has_previous,
            ..self
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.size > 0
            && self.page >= 1
            && self.items.len() <= self.size
            && self.pages == paginate::total_pages(self.total, self.size)
            && (self.total == 0 || self.page <= self.pages)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            total: self.total,
            page: self.page,
            size: self.size,
            pages: self.pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
