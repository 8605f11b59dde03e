pub mod contacts;
pub mod master_data;
pub mod resource_api;
pub mod resource_page;

use std::rc::Rc;

use contracts::domain::common::Resource;
use contracts::shared::list::{ClientPaged, ListSource, PageStrategy, PagingMode, ServerPaged};

/// Paging strategy configured for `R` over the given source.
pub fn strategy_for<R, S>(source: S) -> Rc<dyn PageStrategy<R>>
where
    R: Resource,
    S: ListSource<R> + 'static,
{
    match R::PAGING {
        PagingMode::Server => Rc::new(ServerPaged::new(source)),
        PagingMode::Client => Rc::new(ClientPaged::<R, S>::new(source)),
    }
}
