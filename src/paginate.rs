use crate::error::{Error, Result};
use crate::types::{BillRecord, PageResult, PageToken};

/// Window size under which the pager shows every page number outright.
const FULL_PAGER_LIMIT: usize = 5;

/// Slice one page out of the filtered record set.
///
/// `page` below 1 is normalized to 1. A `page` beyond the last page is not
/// an error: it yields empty `items` with the metadata intact, since the
/// caller is expected to reset to page 1 whenever the filtered set changes.
/// A zero `page_size` is rejected as a configuration error.
pub fn paginate(records: &[BillRecord], page: usize, page_size: usize) -> Result<PageResult> {
    if page_size == 0 {
        return Err(Error::Config(
            "page size must be greater than zero".to_string(),
        ));
    }

    let page = page.max(1);
    let total_filtered = records.len();
    let total_pages = (total_filtered + page_size - 1) / page_size;

    let start = (page - 1).saturating_mul(page_size);
    let items = if start >= total_filtered {
        Vec::new()
    } else {
        let end = (start + page_size).min(total_filtered);
        records[start..end].to_vec()
    };

    Ok(PageResult {
        items,
        total_filtered,
        total_pages,
        page_numbers: page_tokens(total_pages, page),
    })
}

/// Build the compact pager strip: every page when there are five or fewer,
/// otherwise the first page, a window around the current page, and the last
/// page, with ellipsis markers standing in for the skipped runs.
pub fn page_tokens(total_pages: usize, current: usize) -> Vec<PageToken> {
    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= FULL_PAGER_LIMIT {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let current = current.max(1);
    let mut tokens = vec![PageToken::Page(1)];

    if current - 1 > 2 {
        tokens.push(PageToken::LeadingEllipsis);
    }

    let window_start = current.saturating_sub(1).max(2);
    let window_end = (current + 1).min(total_pages - 1);
    for page in window_start..=window_end {
        tokens.push(PageToken::Page(page));
    }

    if current + 1 < total_pages - 1 {
        tokens.push(PageToken::TrailingEllipsis);
    }

    tokens.push(PageToken::Page(total_pages));
    tokens
}
