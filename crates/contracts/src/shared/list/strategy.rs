//! Where a page of records comes from: the server, or a cached full set
//! paged in the browser.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;

use super::controller::FetchTicket;
use super::paging::derive_page;
use super::query::{ListRequest, MatchKey};
use super::result::ListResult;
use crate::domain::common::Resource;
use crate::shared::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingMode {
    /// Every query change is a round trip
    Server,
    /// The whole matching set is fetched once and paged locally
    Client,
}

/// One resource query function: a normalized request in, a normalized
/// result out. One call is one round trip.
#[async_trait(?Send)]
pub trait ListSource<R: Resource> {
    async fn fetch(
        &self,
        request: &ListRequest<R::SortField>,
    ) -> Result<ListResult<R, R::SortField>, AppError>;
}

#[async_trait(?Send)]
impl<R: Resource, S: ListSource<R> + ?Sized> ListSource<R> for Rc<S> {
    async fn fetch(
        &self,
        request: &ListRequest<R::SortField>,
    ) -> Result<ListResult<R, R::SortField>, AppError> {
        (**self).fetch(request).await
    }
}

#[async_trait(?Send)]
pub trait PageStrategy<R: Resource> {
    fn mode(&self) -> PagingMode;

    async fn fetch_page(
        &self,
        ticket: &FetchTicket<R::SortField>,
    ) -> Result<ListResult<R, R::SortField>, AppError>;
}

pub struct ServerPaged<S> {
    source: S,
}

impl<S> ServerPaged<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait(?Send)]
impl<R: Resource, S: ListSource<R>> PageStrategy<R> for ServerPaged<S> {
    fn mode(&self) -> PagingMode {
        PagingMode::Server
    }

    async fn fetch_page(
        &self,
        ticket: &FetchTicket<R::SortField>,
    ) -> Result<ListResult<R, R::SortField>, AppError> {
        let request = ListRequest::from_query(&ticket.query, R::DEFAULT_PAGE_SIZE);
        log::debug!(
            "{} page request #{}: {}",
            R::PATH,
            ticket.generation,
            request.to_query_string()
        );
        self.source.fetch(&request).await
    }
}

struct FullSet<R> {
    key: MatchKey,
    generation: u64,
    records: Vec<R>,
}

pub struct ClientPaged<R, S> {
    source: S,
    cache: RefCell<Option<FullSet<R>>>,
    /// Generation of the newest full-set fetch started so far
    latest_fetch: Cell<u64>,
}

impl<R: Resource, S> ClientPaged<R, S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: RefCell::new(None),
            latest_fetch: Cell::new(0),
        }
    }

    pub fn invalidate(&self) {
        self.cache.borrow_mut().take();
    }

    /// Records held for local paging, if any.
    pub fn cached_len(&self) -> Option<usize> {
        self.cache.borrow().as_ref().map(|set| set.records.len())
    }
}

#[async_trait(?Send)]
impl<R: Resource, S: ListSource<R>> PageStrategy<R> for ClientPaged<R, S> {
    fn mode(&self) -> PagingMode {
        PagingMode::Client
    }

    async fn fetch_page(
        &self,
        ticket: &FetchTicket<R::SortField>,
    ) -> Result<ListResult<R, R::SortField>, AppError> {
        let key = ticket.query.match_key();

        if !ticket.reload {
            // a set older than the newest full fetch may already be outdated
            let cached = self
                .cache
                .borrow()
                .as_ref()
                .filter(|set| set.key == key && set.generation >= self.latest_fetch.get())
                .map(|set| derive_page(&set.records, &ticket.query));
            if let Some(result) = cached {
                log::debug!("{} page #{} served from cache", R::PATH, ticket.generation);
                return Ok(result);
            }
        }

        self.latest_fetch
            .set(self.latest_fetch.get().max(ticket.generation));
        let request = ListRequest::full_set(&ticket.query);
        log::debug!(
            "{} full-set request #{}: {}",
            R::PATH,
            ticket.generation,
            request.to_query_string()
        );
        let superseded = |generation: u64| generation < self.latest_fetch.get();
        match self.source.fetch(&request).await {
            Ok(full) => {
                let result = derive_page(&full.items, &ticket.query);
                if superseded(ticket.generation) {
                    log::debug!(
                        "{} full set #{} superseded, cache left as is",
                        R::PATH,
                        ticket.generation
                    );
                } else {
                    *self.cache.borrow_mut() = Some(FullSet {
                        key,
                        generation: ticket.generation,
                        records: full.items,
                    });
                }
                Ok(result)
            }
            Err(err) => {
                if !superseded(ticket.generation) {
                    self.invalidate();
                }
                Err(err)
            }
        }
    }
}
