//! Per-page list state: what the user asked for, what is on screen, and
//! which fetch is the current one.
//!
//! The controller never performs I/O itself. [`ListController::apply`] turns a
//! user intent into a [`FetchTicket`]; the caller resolves the ticket through a
//! [`PageStrategy`](super::strategy::PageStrategy) and hands the outcome back
//! to [`ListController::complete`].

use std::collections::BTreeMap;

use super::query::{ListQuery, PageSize, SortOrder};
use super::result::ListResult;
use crate::domain::common::Resource;
use crate::shared::error::AppError;

/// A fetch the controller expects to be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket<F> {
    pub generation: u64,
    pub query: ListQuery<F>,
    /// The matching set may have changed; cached full sets must be dropped
    pub reload: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent<F> {
    Mount,
    /// Applies the staged search text and filters
    Search {
        text: String,
        filters: BTreeMap<String, String>,
    },
    ClearAll,
    Refresh,
    PageChanged(u32),
    PageSizeChanged(PageSize),
    SortChanged(F, SortOrder),
    /// Header click: same field flips the order, a new field starts ascending
    SortToggled(F),
}

#[derive(Debug, Clone)]
pub struct ListController<R: Resource> {
    query: ListQuery<R::SortField>,
    defaults: ListQuery<R::SortField>,
    result: ListResult<R, R::SortField>,
    loading: bool,
    mounted: bool,
    error: Option<AppError>,
    generation: u64,
}

impl<R: Resource> Default for ListController<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ListController<R> {
    pub fn new() -> Self {
        Self::restored(Self::default_query())
    }

    /// Starts from a previously saved query instead of the defaults.
    pub fn restored(query: ListQuery<R::SortField>) -> Self {
        let defaults = Self::default_query();
        let result = ListResult::empty(
            query.page_size.normalized(R::DEFAULT_PAGE_SIZE),
            query.sort_field,
            query.sort_order,
        );
        Self {
            query,
            defaults,
            result,
            loading: false,
            mounted: false,
            error: None,
            generation: 0,
        }
    }

    pub fn default_query() -> ListQuery<R::SortField> {
        ListQuery::new(R::DEFAULT_PAGE_SIZE, R::DEFAULT_SORT_ORDER)
    }

    pub fn query(&self) -> &ListQuery<R::SortField> {
        &self.query
    }

    pub fn result(&self) -> &ListResult<R, R::SortField> {
        &self.result
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether [`ListEvent::ClearAll`] would change anything besides the page.
    pub fn can_clear(&self) -> bool {
        self.query.active_criteria() > 0
            || self.query.sort_field != self.defaults.sort_field
            || self.query.sort_order != self.defaults.sort_order
    }

    /// The "no results" row is shown only once a fetch has settled empty.
    pub fn shows_no_results(&self) -> bool {
        self.mounted && !self.loading && self.result.is_empty()
    }

    /// Folds a user intent into the query. Returns the fetch to run, or
    /// `None` when the intent changes nothing.
    pub fn apply(&mut self, event: ListEvent<R::SortField>) -> Option<FetchTicket<R::SortField>> {
        let reload = match event {
            ListEvent::Mount => {
                if self.mounted {
                    return None;
                }
                self.mounted = true;
                true
            }
            ListEvent::Search { text, filters } => {
                self.query.search_text = text.trim().to_string();
                self.query.filters = filters;
                self.query.page = 1;
                true
            }
            ListEvent::ClearAll => {
                self.query = ListQuery {
                    page_size: self.query.page_size,
                    ..self.defaults.clone()
                };
                true
            }
            ListEvent::Refresh => true,
            ListEvent::PageChanged(page) => {
                let page = page.max(1);
                if page == self.query.page {
                    return None;
                }
                self.query.page = page;
                false
            }
            ListEvent::PageSizeChanged(size) => {
                let size = size.normalized(R::DEFAULT_PAGE_SIZE);
                if size == self.query.page_size {
                    return None;
                }
                self.query.page_size = size;
                self.query.page = 1;
                false
            }
            ListEvent::SortChanged(field, order) => {
                self.query.sort_field = field;
                self.query.sort_order = order;
                self.query.page = 1;
                false
            }
            ListEvent::SortToggled(field) => {
                self.query.sort_order = if field == self.query.sort_field {
                    self.query.sort_order.toggled()
                } else {
                    SortOrder::Ascending
                };
                self.query.sort_field = field;
                self.query.page = 1;
                false
            }
        };

        self.generation += 1;
        self.loading = true;
        Some(FetchTicket {
            generation: self.generation,
            query: self.query.clone(),
            reload,
        })
    }

    /// Records the outcome of a fetch. Outcomes of superseded tickets are
    /// dropped. Returns the error to surface, if any.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket<R::SortField>,
        outcome: Result<ListResult<R, R::SortField>, AppError>,
    ) -> Option<AppError> {
        if ticket.generation != self.generation {
            log::debug!(
                "discarding stale {} response #{} (current #{})",
                R::PATH,
                ticket.generation,
                self.generation
            );
            return None;
        }

        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = result;
                self.error = None;
                None
            }
            Err(err) => {
                log::warn!("{} list fetch failed: {}", R::PATH, err);
                self.result = ListResult::empty(
                    self.query.page_size.normalized(R::DEFAULT_PAGE_SIZE),
                    self.query.sort_field,
                    self.query.sort_order,
                );
                self.error = Some(err.clone());
                Some(err)
            }
        }
    }
}
