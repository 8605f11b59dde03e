//! Generic list page: header actions, filter panel, table, record form and
//! delete confirmation for any [`Resource`].
//!
//! Search text and filter values are staged locally and only reach the
//! controller on Search (button or Enter) or when a chip is removed.

use std::collections::BTreeMap;
use std::rc::Rc;

use contracts::domain::common::{FilterSpec, Resource};
use contracts::shared::list::{ListEvent, PageStrategy, PagingMode};
use contracts::shared::mutation::{check_before_send, MutationKind, RecordGateway};
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use crate::layout::notification_service::use_notifications;
use crate::shared::components::ui;
use crate::shared::components::{
    FilterPanel, FilterTag, ListTable, PageHeader, PaginationControls, RecordForm,
};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::criteria_chips;
use crate::shared::list_view::ListView;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;

/// Filters left after removing one chip; `"search"` clears the search text.
pub fn without_criterion(
    search: &str,
    filters: &BTreeMap<String, String>,
    key: &str,
) -> (String, BTreeMap<String, String>) {
    if key == "search" {
        return (String::new(), filters.clone());
    }
    let mut rest = filters.clone();
    rest.remove(key);
    (search.to_string(), rest)
}

/// Short name used in the delete confirmation
fn display_name<R: Resource>(record: &R) -> String {
    let name = R::COLUMNS
        .first()
        .map(|column| record.field(column.key))
        .unwrap_or_default();
    if name.trim().is_empty() {
        record.record_id().to_string()
    } else {
        name
    }
}

#[component]
pub fn ResourceListPage<R: Resource>(
    page_id: &'static str,
    category: &'static str,
    strategy: Rc<dyn PageStrategy<R>>,
    gateway: Rc<dyn RecordGateway<R>>,
) -> impl IntoView {
    let config = use_config();
    let notifications = use_notifications();
    let list = ListView::<R>::new(strategy, &config.storage.namespace, notifications);
    let gateway = StoredValue::new_local(gateway);

    let (initial_search, initial_filters) = list
        .controller
        .with_untracked(|c| (c.query().search_text.clone(), c.query().filters.clone()));
    let staged_search = RwSignal::new(initial_search);
    let staged_filters = RwSignal::new(initial_filters);
    let filters_expanded = RwSignal::new(false);

    let editing = RwSignal::new(None::<(MutationKind, R)>);
    let deleting = RwSignal::new(None::<R>);
    let saving = RwSignal::new(false);

    let query = list.query();
    let result = list.result();
    let loading = list.is_loading();

    let apply_search = move || {
        list.dispatch(ListEvent::Search {
            text: staged_search.get_untracked(),
            filters: staged_filters.get_untracked(),
        });
    };

    let clear_all = move || {
        staged_search.set(String::new());
        staged_filters.set(BTreeMap::new());
        list.dispatch(ListEvent::ClearAll);
    };

    let remove_criterion = move |key: String| {
        let (text, filters) =
            query.with_untracked(|q| without_criterion(&q.search_text, &q.filters, &key));
        staged_search.set(text.clone());
        staged_filters.set(filters.clone());
        list.dispatch(ListEvent::Search { text, filters });
    };

    let run_mutation = move |kind: MutationKind, record: R| {
        if let Err(err) = check_before_send(kind, &record) {
            notifications.error(&err);
            return;
        }
        let gateway = gateway.get_value();
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = gateway.send(kind, &record).await;
            saving.set(false);
            match outcome {
                Ok(outcome) => {
                    notifications.outcome(&outcome);
                    editing.set(None);
                    deleting.set(None);
                    list.dispatch(ListEvent::Refresh);
                }
                Err(err) => notifications.error(&err),
            }
        });
    };

    let filter_field = move |spec: &'static FilterSpec| {
        let key = spec.key;
        let value = Signal::derive(move || {
            staged_filters.with(|f| f.get(key).cloned().unwrap_or_default())
        });
        let update = Callback::new(move |text: String| {
            staged_filters.update(|f| {
                f.insert(key.to_string(), text);
            });
        });
        if spec.options.is_empty() {
            view! { <ui::Input label=spec.label value=value on_input=update /> }.into_any()
        } else {
            view! {
                <ui::Select
                    label=spec.label
                    value=value
                    on_change=update
                    options=spec.options
                    placeholder="Any"
                />
            }
            .into_any()
        }
    };

    let page_size_options = config.lists.page_size_options.clone();
    let allow_all = R::PAGING == PagingMode::Client;
    let count = Signal::derive(move || result.with(|r| r.total_count));
    let title = R::PLURAL_LABEL;

    list.dispatch(ListEvent::Mount);

    view! {
        <PageFrame page_id=page_id category=category>
            <PageHeader title=title count=count>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some((MutationKind::Register, R::default())))
                >
                    {icon("plus")}
                    {format!(" New {}", R::LABEL.to_lowercase())}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| list.dispatch(ListEvent::Refresh)
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading…" } else { " Refresh" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=Signal::derive(move || query.with(|q| q.active_criteria()))
                    pagination=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || result.with(|r| r.page))
                            total_pages=Signal::derive(move || result.with(|r| r.total_pages))
                            total_count=Signal::derive(move || result.with(|r| r.total_count))
                            page_size=Signal::derive(move || query.with(|q| q.page_size))
                            on_page_change=Callback::new(move |page| list.dispatch(ListEvent::PageChanged(page)))
                            on_page_size_change=Callback::new(move |size| list.dispatch(ListEvent::PageSizeChanged(size)))
                            page_size_options=page_size_options.clone()
                            allow_all=allow_all
                        />
                    }
                    tags=move || {
                        query.with(|q| criteria_chips(q, R::FILTERS))
                            .into_iter()
                            .map(|(key, label)| view! {
                                <FilterTag
                                    label=label
                                    on_remove=Callback::new(move |_: ()| remove_criterion(key.clone()))
                                />
                            })
                            .collect_view()
                    }
                >
                    <div
                        class="filter-panel__form"
                        on:keydown=move |ev: ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                apply_search();
                            }
                        }
                    >
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Search"</Label>
                                    <Input value=staged_search placeholder="Search…" />
                                </Flex>
                            </div>
                            {R::FILTERS.iter().map(filter_field).collect_view()}
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_search()>
                                "Search"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| clear_all()
                                disabled=Signal::derive(move || !list.controller.with(|c| c.can_clear()))
                            >
                                "Clear all"
                            </Button>
                        </Flex>
                    </div>
                </FilterPanel>

                {move || list.controller.with(|c| c.error().cloned()).map(|err| view! {
                    <div class="alert alert--error">{err.to_string()}</div>
                })}

                <ListTable<R>
                    result=result
                    query=query
                    loading=loading
                    no_results=list.shows_no_results()
                    on_sort=Callback::new(move |field| list.dispatch(ListEvent::SortToggled(field)))
                    on_edit=Callback::new(move |record| editing.set(Some((MutationKind::Update, record))))
                    on_delete=Callback::new(move |record| deleting.set(Some(record)))
                />
            </div>

            {move || editing.get().map(|(kind, record)| view! {
                <RecordForm<R>
                    initial=record
                    kind=kind
                    on_save=Callback::new(move |record: R| run_mutation(kind, record))
                    on_cancel=Callback::new(move |_: ()| editing.set(None))
                    saving=saving
                />
            })}

            {move || deleting.get().map(|record| {
                let name = display_name(&record);
                let cancel = Callback::new(move |_: ()| deleting.set(None));
                view! {
                    <Modal
                        title=format!("Delete {}", R::LABEL.to_lowercase())
                        on_close=cancel
                        footer=move || {
                            let record = record.clone();
                            view! {
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| cancel.run(())>
                                    "Cancel"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| run_mutation(MutationKind::Delete, record.clone())
                                    disabled=saving
                                >
                                    "Delete"
                                </Button>
                            }
                        }
                    >
                        <p>{format!("Delete \"{}\"? This cannot be undone.", name)}</p>
                    </Modal>
                }
            })}
        </PageFrame>
    }
}
