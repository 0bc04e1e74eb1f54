use crate::view::Page;

/// Number of pages needed to show `total` entries `size` at a time.
///
/// An empty result set has zero pages.
pub fn total_pages(total: usize, size: usize) -> usize {
    if total == 0 || size == 0 {
        0
    } else {
        total.div_ceil(size)
    }
}

pub fn has_next(page: usize, pages: usize) -> bool {
    page < pages
}

pub fn has_previous(page: usize) -> bool {
    page > 1
}

/// Slices `entries` into the requested 1-based page.
/// Note: does this in memory, the API paginates server side. This is used to
/// build fixtures and to page through lists the API returns unpaginated.
pub fn paginate<T: Clone>(entries: &[T], page: usize, size: usize) -> Page<T> {
    let total = entries.len();
    let page = page.max(1);
    let start = (page - 1).saturating_mul(size);
    let end = start.saturating_add(size).min(total);

    log::debug!("paginate entries page: {page} size: {size} total: {total} start: {start}");

    let items = if start < total {
        entries[start..end].to_vec()
    } else {
        vec![]
    };
    Page::new(items, total, page, size)
}
