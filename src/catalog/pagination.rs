/// Most page buttons shown at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One page of a longer list. Pages are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Number of pages needed for `item_count` items; always at least 1.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    item_count.div_ceil(page_size).max(1)
}

/// Cuts page `page` out of `items`, clamping the page number into range.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());

    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        page,
        total_pages,
        total_items: items.len(),
    }
}

/// Which page controls to render around the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageWindow {
    pub current: usize,
    pub pages: Vec<usize>,
    pub show_first: bool,
    pub show_last: bool,
    pub left_ellipsis: bool,
    pub right_ellipsis: bool,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Up to [`MAX_VISIBLE_PAGES`] page numbers centered on `current`.
///
/// First/last page buttons appear when they fall outside the window, and an
/// ellipsis only when pages are actually skipped. Nothing is rendered for a
/// single page.
pub fn page_window(current: usize, total_pages: usize) -> PageWindow {
    if total_pages <= 1 {
        return PageWindow::default();
    }
    let current = current.clamp(1, total_pages);
    let half = MAX_VISIBLE_PAGES / 2;

    let mut start = current.saturating_sub(half).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total_pages);
    if end - start + 1 < MAX_VISIBLE_PAGES {
        start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
    }

    let show_first = start > 1;
    let show_last = end < total_pages;
    PageWindow {
        current,
        pages: (start..=end).collect(),
        show_first,
        show_last,
        left_ellipsis: show_first && start > 2,
        right_ellipsis: show_last && end + 1 < total_pages,
        has_previous: current > 1,
        has_next: current < total_pages,
    }
}
