//! Fixed-size page slicing.

/// Number of questions per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Return page `page` (1-based) of `records`.
///
/// The slice preserves the order of `records`; callers sort before paging.
/// Page 0 is treated as page 1, and a page past the end is empty.
pub fn paginate<T>(records: &[T], page: usize, page_size: usize) -> &[T] {
    let page = page.max(1);
    let page_size = page_size.max(1);

    let start = (page - 1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

/// Parse a raw page parameter, falling back to page 1 for anything that is
/// not a positive integer.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|p| *p > 0)
        .unwrap_or(1)
}

/// Number of pages needed to show `total` records.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}
