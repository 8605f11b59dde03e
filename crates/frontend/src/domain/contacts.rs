//! Contact pages backed by the REST API.

use std::rc::Rc;

use contracts::domain::common::Resource;
use contracts::domain::customer::Customer;
use contracts::domain::supplier::Supplier;
use contracts::domain::vendor::Vendor;
use contracts::shared::mutation::RecordGateway;
use leptos::prelude::*;

use super::resource_api::HttpResource;
use super::resource_page::ResourceListPage;
use super::strategy_for;
use crate::shared::config::use_config;
use crate::shared::http::ApiClient;
use crate::shared::page_standard::PAGE_CAT_LIST;

fn remote_list_page<R: Resource>(page_id: &'static str) -> impl IntoView {
    let config = use_config();
    let api = Rc::new(HttpResource::<R>::new(ApiClient::new(config.api_base())));
    let strategy = strategy_for::<R, _>(Rc::clone(&api));
    let gateway: Rc<dyn RecordGateway<R>> = api;

    view! {
        <ResourceListPage<R>
            page_id=page_id
            category=PAGE_CAT_LIST
            strategy=strategy
            gateway=gateway
        />
    }
}

#[component]
pub fn CustomersPage() -> impl IntoView {
    remote_list_page::<Customer>("customers--list")
}

#[component]
pub fn SuppliersPage() -> impl IntoView {
    remote_list_page::<Supplier>("suppliers--list")
}

#[component]
pub fn VendorsPage() -> impl IntoView {
    remote_list_page::<Vendor>("vendors--list")
}
