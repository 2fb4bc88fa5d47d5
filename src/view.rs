use crate::config::ViewConfig;
use crate::error::Result;
use crate::paginate::paginate;
use crate::search::filter_bills;
use crate::sort::sort_bills;
use crate::types::{BillRecord, PageResult};

/// Run the full pipeline: sort by urgency and recency, filter by the search
/// term, then slice out the requested page.
///
/// Sorting happens before filtering so the filtered subset keeps the
/// urgency/date order; filtering happens before pagination so page
/// boundaries are computed on the post-filter set. The computation is pure:
/// identical inputs always produce identical output, and the caller owns
/// all state (see `ViewState`).
pub fn compute_view(
    records: &[BillRecord],
    term: &str,
    page: usize,
    config: &ViewConfig,
) -> Result<PageResult> {
    let sorted = sort_bills(records.to_vec());
    let filtered = filter_bills(&sorted, term);
    paginate(&filtered, page, config.page_size)
}
