use serde::Serialize;

/// Jobs shown per listing page
pub const PAGE_SIZE: usize = 6;

/// Number of pages needed for `total` items; zero items means zero pages.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// Clamp a 1-based page index into `[1, last page]`.
///
/// With no items there is no last page, and page 1 is still the answer.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, page_count(total).max(1))
}

/// One page of results plus what the page controls need to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Effective 1-based page after clamping
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// 1-based position of the first item shown, 0 when empty
    pub range_start: usize,
    pub range_end: usize,
    pub page_numbers: Vec<usize>,
    /// Controls are only rendered when there is more than one page
    pub show_controls: bool,
}

/// Slice `items` down to page `page`, clamping out-of-range requests.
pub fn paginate<T>(items: Vec<T>, page: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = page_count(total_items);
    let page = clamp_page(page, total_items);
    let offset = (page - 1) * PAGE_SIZE;

    let items: Vec<T> = items.into_iter().skip(offset).take(PAGE_SIZE).collect();
    let range_start = if items.is_empty() { 0 } else { offset + 1 };
    let range_end = offset + items.len();

    Page {
        items,
        page,
        total_pages,
        total_items,
        has_previous: page > 1,
        has_next: page < total_pages,
        range_start,
        range_end,
        page_numbers: (1..=total_pages).collect(),
        show_controls: total_pages > 1,
    }
}
