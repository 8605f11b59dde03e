//! Sidebar with collapsible menu groups.

use crate::layout::global_context::{use_global_context, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    pages: &'static [Page],
}

const MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup {
        id: "contacts",
        label: "Contacts",
        icon: "customers",
        pages: &[Page::Customers, Page::Suppliers, Page::Vendors],
    },
    MenuGroup {
        id: "master_data",
        label: "Master data",
        icon: "vessels",
        pages: &[Page::Vessels, Page::Currencies],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    // Everything starts expanded; the menu is short
    let expanded_groups = RwSignal::new(
        MENU_GROUPS.iter().map(|group| group.id).collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {MENU_GROUPS.iter().map(|group| {
                let group_id = group.id;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|ids| {
                                    if let Some(pos) = ids.iter().position(|id| *id == group_id) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {group.pages.iter().map(|page| {
                                    let page = *page;
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.active.get() == page
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open(page)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(page.icon())}
                                                <span>{page.label()}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
