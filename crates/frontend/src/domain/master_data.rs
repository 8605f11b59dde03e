//! Master data kept in browser storage until the API exposes it.

use std::rc::Rc;

use contracts::domain::common::Resource;
use contracts::domain::currency::Currency;
use contracts::domain::vessel::Vessel;
use contracts::shared::mutation::RecordGateway;
use contracts::shared::record_store::RecordStore;
use leptos::prelude::*;

use super::resource_page::ResourceListPage;
use super::strategy_for;
use crate::shared::browser_storage::BrowserStorage;
use crate::shared::config::use_config;
use crate::shared::page_standard::PAGE_CAT_MASTER_DATA;

fn local_list_page<R: Resource>(page_id: &'static str) -> impl IntoView {
    let config = use_config();
    let store = Rc::new(RecordStore::<R, _>::new(BrowserStorage, &config.storage.namespace));
    log::debug!("{} records kept under {}", R::LABEL, store.key());
    let strategy = strategy_for::<R, _>(Rc::clone(&store));
    let gateway: Rc<dyn RecordGateway<R>> = store;

    view! {
        <ResourceListPage<R>
            page_id=page_id
            category=PAGE_CAT_MASTER_DATA
            strategy=strategy
            gateway=gateway
        />
    }
}

#[component]
pub fn VesselsPage() -> impl IntoView {
    local_list_page::<Vessel>("vessels--master-data")
}

#[component]
pub fn CurrenciesPage() -> impl IntoView {
    local_list_page::<Currency>("currencies--master-data")
}
