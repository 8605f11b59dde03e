//! Reactive wrapper around [`ListController`]: one per list page.
//!
//! Events go through [`ListView::dispatch`]; the resulting ticket is resolved
//! by the page's strategy on the local executor and folded back in. The last
//! query is saved under `<namespace>:<path>:list_state` and restored on the
//! next visit.

use std::collections::BTreeMap;
use std::rc::Rc;

use contracts::domain::common::Resource;
use contracts::shared::list::{
    FetchTicket, ListController, ListEvent, ListQuery, ListResult, PageStrategy,
};
use leptos::prelude::*;

use crate::layout::notification_service::NotificationService;
use crate::shared::browser_storage::{read_item, write_item};

pub struct ListView<R: Resource> {
    pub controller: RwSignal<ListController<R>>,
    strategy: StoredValue<Rc<dyn PageStrategy<R>>, LocalStorage>,
    notifications: NotificationService,
    state_key: StoredValue<String>,
}

impl<R: Resource> Clone for ListView<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ListView<R> {}

pub fn list_state_key(namespace: &str, path: &str) -> String {
    format!("{}:{}:list_state", namespace, path)
}

fn restore_query<R: Resource>(raw: Option<String>) -> Option<ListQuery<R::SortField>> {
    let params: BTreeMap<String, String> = serde_json::from_str(&raw?)
        .map_err(|e| log::warn!("ignoring saved {} list state: {}", R::PATH, e))
        .ok()?;
    Some(ListQuery::from_params(
        &params,
        R::DEFAULT_PAGE_SIZE,
        R::DEFAULT_SORT_ORDER,
    ))
}

impl<R: Resource> ListView<R> {
    pub fn new(
        strategy: Rc<dyn PageStrategy<R>>,
        namespace: &str,
        notifications: NotificationService,
    ) -> Self {
        let state_key = list_state_key(namespace, R::PATH);
        let controller = match restore_query::<R>(read_item(&state_key)) {
            Some(query) => ListController::restored(query),
            None => ListController::new(),
        };
        Self {
            controller: RwSignal::new(controller),
            strategy: StoredValue::new_local(strategy),
            notifications,
            state_key: StoredValue::new(state_key),
        }
    }

    pub fn dispatch(&self, event: ListEvent<R::SortField>) {
        let ticket = self.controller.try_update(|c| c.apply(event)).flatten();
        if let Some(ticket) = ticket {
            self.persist(&ticket.query);
            self.run(ticket);
        }
    }

    pub fn query(&self) -> Signal<ListQuery<R::SortField>> {
        let controller = self.controller;
        Signal::derive(move || controller.with(|c| c.query().clone()))
    }

    pub fn result(&self) -> Signal<ListResult<R, R::SortField>> {
        let controller = self.controller;
        Signal::derive(move || controller.with(|c| c.result().clone()))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let controller = self.controller;
        Signal::derive(move || controller.with(|c| c.is_loading()))
    }

    pub fn shows_no_results(&self) -> Signal<bool> {
        let controller = self.controller;
        Signal::derive(move || controller.with(|c| c.shows_no_results()))
    }

    fn persist(&self, query: &ListQuery<R::SortField>) {
        match serde_json::to_string(&query.to_params()) {
            Ok(json) => self.state_key.with_value(|key| write_item(key, &json)),
            Err(e) => log::warn!("could not save {} list state: {}", R::PATH, e),
        }
    }

    fn run(&self, ticket: FetchTicket<R::SortField>) {
        let strategy = self.strategy.get_value();
        let controller = self.controller;
        let notifications = self.notifications;
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = strategy.fetch_page(&ticket).await;
            let surfaced = controller
                .try_update(|c| c.complete(&ticket, outcome))
                .flatten();
            if let Some(err) = surfaced {
                notifications.error(&err);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::vessel::{Vessel, VesselSortField};
    use contracts::shared::list::{PageSize, SortOrder};

    #[test]
    fn state_key_is_namespaced_per_resource() {
        assert_eq!(list_state_key("freight_desk", "vessel"), "freight_desk:vessel:list_state");
    }

    #[test]
    fn saved_state_restores_the_query() {
        let raw = r#"{"page":"3","page_size":"all","sort_by":"imo_number","sort_order":"desc","flag":"PA"}"#;
        let query = restore_query::<Vessel>(Some(raw.to_string())).unwrap();
        assert_eq!(query.page, 3);
        assert_eq!(query.page_size, PageSize::All);
        assert_eq!(query.sort_field, VesselSortField::ImoNumber);
        assert_eq!(query.sort_order, SortOrder::Descending);
        assert_eq!(query.filters["flag"], "PA");
    }

    #[test]
    fn corrupt_state_is_ignored() {
        assert!(restore_query::<Vessel>(Some("{not json".into())).is_none());
        assert!(restore_query::<Vessel>(None).is_none());
    }
}
