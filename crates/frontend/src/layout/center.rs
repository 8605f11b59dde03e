use crate::domain::contacts::{CustomersPage, SuppliersPage, VendorsPage};
use crate::domain::master_data::{CurrenciesPage, VesselsPage};
use crate::layout::global_context::{use_global_context, Page};
use leptos::prelude::*;

/// Content area: renders the page selected in the sidebar.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div data-zone="center" class="app-main__content" style="flex: 1; overflow: auto;">
            {move || match ctx.active.get() {
                Page::Customers => view! { <CustomersPage /> }.into_any(),
                Page::Suppliers => view! { <SuppliersPage /> }.into_any(),
                Page::Vendors => view! { <VendorsPage /> }.into_any(),
                Page::Vessels => view! { <VesselsPage /> }.into_any(),
                Page::Currencies => view! { <CurrenciesPage /> }.into_any(),
            }}
        </div>
    }
}
