//! List-view data pipeline: query normalization, response decoding,
//! client-side sort/paginate and the per-page state controller.

pub mod controller;
pub mod envelope;
pub mod paging;
pub mod query;
pub mod result;
pub mod strategy;

pub use controller::{FetchTicket, ListController, ListEvent};
pub use envelope::{decode_list_response, parse_list_envelope};
pub use paging::{compare_text, derive_page, parse_datetime, sort_records, SortValue};
pub use query::{ListQuery, ListRequest, MatchKey, PageSize, SortField, SortOrder};
pub use result::{total_pages, ListResult};
pub use strategy::{ClientPaged, ListSource, PageStrategy, PagingMode, ServerPaged};
