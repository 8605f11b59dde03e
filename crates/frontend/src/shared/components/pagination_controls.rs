use contracts::shared::list::PageSize;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Label shown between the navigation buttons: `2 / 7 (131)`.
pub fn pagination_label(page: u32, total_pages: u32, total_count: u64) -> String {
    format!("{} / {} ({})", page.max(1), total_pages.max(1), total_count)
}

/// PaginationControls component - reusable pagination controls
///
/// Pages are 1-based. `allow_all` adds an "All" page-size option.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    total_pages: Signal<u32>,

    #[prop(into)]
    total_count: Signal<u64>,

    #[prop(into)]
    page_size: Signal<PageSize>,

    on_page_change: Callback<u32>,

    on_page_size_change: Callback<PageSize>,

    page_size_options: Vec<u32>,

    #[prop(optional)]
    allow_all: bool,
) -> impl IntoView {
    let mut options: Vec<PageSize> = page_size_options.into_iter().map(PageSize::Count).collect();
    if allow_all {
        options.push(PageSize::All);
    }

    let on_first = move || current_page.get() <= 1;
    let on_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=on_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=on_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || pagination_label(current_page.get(), total_pages.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=on_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total);
                    }
                }
                disabled=on_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Some(size) = PageSize::parse(&event_target_value(&ev)) {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {options.into_iter().map(|size| {
                    let label = match size {
                        PageSize::All => "All".to_string(),
                        PageSize::Count(n) => n.to_string(),
                    };
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lists_still_read_page_one_of_one() {
        assert_eq!(pagination_label(1, 0, 0), "1 / 1 (0)");
        assert_eq!(pagination_label(2, 7, 131), "2 / 7 (131)");
    }
}
