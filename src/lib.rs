//! A pure, synchronous pipeline for turning raw legislative bill records
//! into the ordered, searchable, paginated view a list screen displays.
//!
//! The pipeline always runs sort (urgency, then recency), filter
//! (case-insensitive search term), and paginate (fixed page size plus a
//! compact pager strip) in that order. It owns no state and performs no
//! I/O; records arrive through a [`source::BillSource`] or any other
//! collaborator that can produce them.

pub mod config;
pub mod error;
pub mod paginate;
pub mod search;
pub mod sort;
pub mod source;
pub mod types;
pub mod view;

pub use config::{ViewConfig, ViewState, DEFAULT_PAGE_SIZE};
pub use error::{Error, Result};
pub use paginate::{page_tokens, paginate};
pub use search::filter_bills;
pub use sort::sort_bills;
pub use source::{BillSource, FixtureSource, JsonFileSource};
pub use types::{BillRecord, PageResult, PageToken, Urgency};
pub use view::compute_view;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::config::{ViewConfig, ViewState};
    pub use crate::error::{Error, Result};
    pub use crate::source::{BillSource, FixtureSource, JsonFileSource};
    pub use crate::types::{BillRecord, PageResult, PageToken, Urgency};
    pub use crate::view::compute_view;
}
