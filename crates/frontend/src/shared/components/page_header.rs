use leptos::prelude::*;

/// Title row of a list page: heading, record count badge and action buttons.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Total matching records
    #[prop(into)]
    count: Signal<u64>,

    /// Action buttons
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                <span class="badge badge--primary">{move || count.get()}</span>
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
