//! Application top bar: sidebar toggle and title.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Freight Desk"</span>
            </div>
            <div class="top-header__actions">
                <span class="top-header__page">{move || ctx.active.get().label()}</span>
            </div>
        </div>
    }
}
